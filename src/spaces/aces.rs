//! The scene referred ACES working spaces.

use crate::color::{Component, Components};
use crate::math::{transform, transform_3x3, Transform};
use crate::space::{ColorSpace, Coord, GamutSpace, SpaceDef};
use crate::spaces::xyz::{bradford, ACES, D65, XYZ_D65};

/// The upper bound of the ACEScg gamut, `2^16`.
const ACESCG_MAX: Component = 65536.0;
/// The largest value a half float can hold. ACEScc decodes to at most this.
const HALF_MAX: Component = 65504.0;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const AP1_TO_XYZ: Transform = transform_3x3(
    0.6624541811085053,  0.27222871678091454, -0.005574649490394108,
    0.13400420645643313, 0.6740817658111484,   0.004060733528982826,
    0.1561876870049078,  0.05368951740793705,  1.0103391003129971,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_AP1: Transform = transform_3x3(
     1.6410233796943257,   -0.6636628587229829,    0.011721894328375376,
    -0.32480329418479,      1.6153315916573379,   -0.008284441996237409,
    -0.23642469523761225,   0.016756347685530137,  0.9883948585390215,
);

fn acescg_to_xyz(rgb: Components) -> Components {
    transform(&AP1_TO_XYZ.then(&bradford(ACES, D65)), rgb)
}

fn xyz_to_acescg(xyz: Components) -> Components {
    transform(&bradford(D65, ACES).then(&XYZ_TO_AP1), xyz)
}

/// ACEScg, linear light with the AP1 primaries.
pub static ACESCG: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "acescg",
        "ACEScg",
        [
            Coord::linear("r", "Red").range(0.0, ACESCG_MAX),
            Coord::linear("g", "Green").range(0.0, ACESCG_MAX),
            Coord::linear("b", "Blue").range(0.0, ACESCG_MAX),
        ],
    )
    .base(&XYZ_D65, acescg_to_xyz, xyz_to_acescg)
    .white(ACES)
    .scene_referred(),
);

/// The smallest value ACEScc encodes with the log curve.
const EPSILON: Component = 1.0 / 65536.0;
/// The encoded value of zero, `(9.72 - 15) / 17.52`.
const ACESCC_MIN: Component = -0.3013698630136986;
/// The encoded value of [`HALF_MAX`], `(log2(65504) + 9.72) / 17.52`.
#[allow(clippy::excessive_precision)]
const ACESCC_MAX: Component = 1.4679963120447153;

fn acescc_to_acescg(rgb: Components) -> Components {
    rgb.map(|v| {
        if v <= ACESCC_MIN {
            ((v * 17.52 - 9.72).exp2() - EPSILON) * 2.0
        } else if v < ACESCC_MAX {
            (v * 17.52 - 9.72).exp2()
        } else {
            HALF_MAX
        }
    })
}

fn acescg_to_acescc(rgb: Components) -> Components {
    rgb.map(|v| {
        if v <= 0.0 {
            (EPSILON.log2() + 9.72) / 17.52
        } else if v < EPSILON {
            ((EPSILON + v * 0.5).log2() + 9.72) / 17.52
        } else {
            (v.log2() + 9.72) / 17.52
        }
    })
}

/// ACEScc, a logarithmic encoding of [`ACESCG`] for grading.
pub static ACESCC: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "acescc",
        "ACEScc",
        [
            Coord::linear("r", "Red").range(ACESCC_MIN, ACESCC_MAX),
            Coord::linear("g", "Green").range(ACESCC_MIN, ACESCC_MAX),
            Coord::linear("b", "Blue").range(ACESCC_MIN, ACESCC_MAX),
        ],
    )
    .base(&ACESCG, acescc_to_acescg, acescg_to_acescc)
    .gamut(GamutSpace::Of(&ACESCG))
    .scene_referred(),
);
