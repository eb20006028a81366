//! High dynamic range color spaces built on the PQ transfer function.

use crate::color::{Component, Components};
use crate::math::{spow, transform, transform_3x3, Transform};
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::lab::{to_polar, to_rectangular};
use crate::spaces::rgb::{rec2020_linear_to_xyz, xyz_to_rec2020_linear, RGB_COORDS};
use crate::spaces::xyz::{
    absolute_to_relative, relative_to_absolute, MEDIA_WHITE_LUMINANCE, XYZ_ABS_D65, XYZ_D65,
};

/// Constants of the SMPTE ST 2084 perceptual quantizer.
mod pq {
    use crate::color::Component;

    pub const N: Component = 2610.0 / 16384.0;
    pub const M: Component = 2523.0 / 32.0;
    pub const C1: Component = 3424.0 / 4096.0;
    pub const C2: Component = 2413.0 / 128.0;
    pub const C3: Component = 2392.0 / 128.0;

    /// Peak luminance in cd/m².
    pub const PEAK: Component = 10000.0;
}

/// Encode a luminance relative to the PQ peak with the given exponents.
fn pq_encode(value: Component, n: Component, m: Component) -> Component {
    let x = spow(value, n);
    spow((pq::C1 + pq::C2 * x) / (1.0 + pq::C3 * x), m)
}

/// Decode a PQ encoded value into a luminance relative to the PQ peak.
fn pq_decode(value: Component, n: Component, m: Component) -> Component {
    let x = spow(value, 1.0 / m);
    spow((x - pq::C1).max(0.0) / (pq::C2 - pq::C3 * x), 1.0 / n)
}

/// Linear light Rec. 2100, which shares its primaries with Rec. 2020.
pub static REC2100_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("rec2100-linear", "Linear REC.2100", RGB_COORDS).base(
        &XYZ_D65,
        rec2020_linear_to_xyz,
        xyz_to_rec2020_linear,
    ),
);

fn pq_to_linear(rgb: Components) -> Components {
    rgb.map(|v| pq_decode(v, pq::N, pq::M) * pq::PEAK / MEDIA_WHITE_LUMINANCE)
}

fn linear_to_pq(rgb: Components) -> Components {
    rgb.map(|v| {
        let luminance = (v * MEDIA_WHITE_LUMINANCE / pq::PEAK).max(0.0);
        pq_encode(luminance, pq::N, pq::M)
    })
}

/// Rec. 2100 with the PQ transfer function.
pub static REC2100_PQ: ColorSpace = ColorSpace::new(
    SpaceDef::new("rec2100pq", "REC.2100-PQ", RGB_COORDS)
        .base(&REC2100_LINEAR, pq_to_linear, linear_to_pq)
        .aliases(&["rec2100-pq"]),
);

mod jz {
    use crate::color::Component;

    pub const B: Component = 1.15;
    pub const G: Component = 0.66;
    pub const P: Component = 1.7 * 2523.0 / 32.0;
    pub const D: Component = -0.56;
    #[allow(clippy::excessive_precision)]
    pub const D0: Component = 1.6295499532821566e-11;
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const JZ_XYZ_TO_CONE: Transform = transform_3x3(
     0.41478972, -0.20151,   -0.0166008,
     0.579999,    1.120649,   0.2648,
     0.014648,    0.0531008,  0.6684799,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const JZ_CONE_TO_XYZ: Transform = transform_3x3(
     1.9242264357876067,  0.35031676209499907, -0.09098281098284752,
    -1.0047923125953657,  0.7264811939316552,  -0.3127282905230739,
     0.037651404030618,  -0.06538442294808501,  1.5227665613052603,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const JZ_CONE_TO_IAB: Transform = transform_3x3(
    0.5,  3.524,     0.199076,
    0.5, -4.066708,  1.096799,
    0.0,  0.542708, -1.295875,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const JZ_IAB_TO_CONE: Transform = transform_3x3(
    1.0,                 0.9999999999999999,  0.9999999999999998,
    0.1386050432715393, -0.1386050432715393, -0.09601924202631895,
    0.05804731615611886, -0.05804731615611886, -0.8118918960560388,
);

fn xyz_to_jzazbz(xyz: Components) -> Components {
    let Components(xa, ya, za) = relative_to_absolute(xyz);

    // Modify X and Y to minimize the blue curvature.
    let xm = jz::B * xa - (jz::B - 1.0) * za;
    let ym = jz::G * ya - (jz::G - 1.0) * xa;

    let lms = transform(&JZ_XYZ_TO_CONE, Components(xm, ym, za));
    let pq_lms = lms.map(|v| pq_encode(v / pq::PEAK, pq::N, jz::P));
    let Components(iz, az, bz) = transform(&JZ_CONE_TO_IAB, pq_lms);

    let jz = (1.0 + jz::D) * iz / (1.0 + jz::D * iz) - jz::D0;
    Components(jz, az, bz)
}

fn jzazbz_to_xyz(jzazbz: Components) -> Components {
    let Components(jz, az, bz) = jzazbz;
    let iz = (jz + jz::D0) / (1.0 + jz::D - jz::D * (jz + jz::D0));

    let pq_lms = transform(&JZ_IAB_TO_CONE, Components(iz, az, bz));
    let lms = pq_lms.map(|v| pq_decode(v, pq::N, jz::P) * pq::PEAK);
    let Components(xm, ym, za) = transform(&JZ_CONE_TO_XYZ, lms);

    let xa = (xm + (jz::B - 1.0) * za) / jz::B;
    let ya = (ym + (jz::G - 1.0) * xa) / jz::G;
    absolute_to_relative(Components(xa, ya, za))
}

/// The Jzazbz perceptually uniform space for HDR content.
pub static JZAZBZ: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "jzazbz",
        "Jzazbz",
        [
            Coord::linear("jz", "Jz").ref_range(0.0, 1.0),
            Coord::linear("az", "az").ref_range(-0.21, 0.21),
            Coord::linear("bz", "bz").ref_range(-0.21, 0.21),
        ],
    )
    .base(&XYZ_D65, jzazbz_to_xyz, xyz_to_jzazbz),
);

/// The polar form of [`JZAZBZ`].
pub static JZCZHZ: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "jzczhz",
        "JzCzHz",
        [
            Coord::linear("jz", "Jz").ref_range(0.0, 1.0),
            Coord::linear("cz", "Chroma").ref_range(0.0, 0.26),
            Coord::angle("hz", "Hue"),
        ],
    )
    .base(&JZAZBZ, to_rectangular, jzazbz_to_jzczhz),
);

fn jzazbz_to_jzczhz(jzazbz: Components) -> Components {
    to_polar(jzazbz, 0.0002)
}

#[rustfmt::skip]
const ICTCP_XYZ_TO_LMS: Transform = transform_3x3(
     0.3592, -0.1922, 0.007,
     0.6976,  1.1004, 0.0749,
    -0.0358,  0.0755, 0.8434,
);

#[rustfmt::skip]
const ICTCP_LMS_TO_IPT: Transform = transform_3x3(
    0.5,  1.61376953125,    4.378173828125,
    0.5, -3.323486328125,  -4.24560546875,
    0.0,  1.709716796875,  -0.132568359375,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const ICTCP_IPT_TO_LMS: Transform = transform_3x3(
    1.0,                   1.0,                   1.0,
    0.008609037037932756, -0.008609037037932756,  0.5600313357106791,
    0.11102962500302596,  -0.11102962500302596,  -0.32062717498731885,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const ICTCP_LMS_TO_XYZ: Transform = transform_3x3(
     2.0701800566956137,  0.3649882500326575,  -0.04959554223893211,
    -1.326456876103021,   0.6804673628522352,  -0.04942116118675749,
     0.20661600684785517, -0.04542175307585323, 1.1879959417328034,
);

fn absolute_xyz_to_ictcp(xyz: Components) -> Components {
    let lms = transform(&ICTCP_XYZ_TO_LMS, xyz);
    let pq_lms = lms.map(|v| pq_encode(v / pq::PEAK, pq::N, pq::M));
    transform(&ICTCP_LMS_TO_IPT, pq_lms)
}

fn ictcp_to_absolute_xyz(ictcp: Components) -> Components {
    let pq_lms = transform(&ICTCP_IPT_TO_LMS, ictcp);
    let lms = pq_lms.map(|v| pq_decode(v, pq::N, pq::M) * pq::PEAK);
    transform(&ICTCP_LMS_TO_XYZ, lms)
}

/// The ICtCp color space from BT.2100, based on absolute XYZ.
pub static ICTCP: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "ictcp",
        "ICTCP",
        [
            Coord::linear("i", "I").ref_range(0.0, 1.0),
            Coord::linear("ct", "CT").ref_range(-0.5, 0.5),
            Coord::linear("cp", "CP").ref_range(-0.5, 0.5),
        ],
    )
    .base(&XYZ_ABS_D65, ictcp_to_absolute_xyz, absolute_xyz_to_ictcp),
);
