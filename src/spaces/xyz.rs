//! The CIE-XYZ color spaces, white points and chromatic adaptation.

use crate::color::{Component, Components};
use crate::math::{transform, transform_3x3, Transform};
use crate::space::{ColorSpace, Coord, SpaceDef};

/// The D50 white point.
#[allow(clippy::excessive_precision)]
pub const D50: Components = Components(0.9642956764295677, 1.0, 0.8251046025104602);

/// The D65 white point.
#[allow(clippy::excessive_precision)]
pub const D65: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);

/// The white point used by the ACES color spaces.
pub const ACES: Components = Components(
    0.32168 / 0.33767,
    1.0,
    (1.0 - 0.32168 - 0.33767) / 0.33767,
);

/// Luminance of media white in cd/m², used to move between relative and
/// absolute XYZ.
pub const MEDIA_WHITE_LUMINANCE: Component = 203.0;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: Transform = transform_3x3(
     1.0479298208405488,    0.029627815688159344, -0.009243058152591178,
     0.022946793341019088,  0.990434484573249,     0.015055144896577895,
    -0.05019222954313557,  -0.01707382502938514,   0.7518742899580008,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: Transform = transform_3x3(
     0.9554734527042182,  -0.028369706963208136,  0.012314001688319899,
    -0.023098536874261423, 1.0099954580058226,   -0.020507696433477912,
     0.0632593086610217,   0.021041398966943008,  1.3303659366080753,
);

#[rustfmt::skip]
const BRADFORD: Transform = transform_3x3(
     0.8951, -0.7502,  0.0389,
     0.2664,  1.7135, -0.0685,
    -0.1614,  0.0367,  1.0296,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const BRADFORD_INVERSE: Transform = transform_3x3(
     0.9869929054667123,  0.43230526972339456, -0.008528664575177328,
    -0.14705425642099013, 0.5183602715367776,   0.04004282165408487,
     0.15996265166373122, 0.0492912282128556,   0.9684866957875501,
);

/// Build the Bradford chromatic adaptation transform from one white point to
/// another.
pub fn bradford(from: Components, to: Components) -> Transform {
    let source = transform(&BRADFORD, from);
    let destination = transform(&BRADFORD, to);
    let scale = Transform::scale(
        destination.0 / source.0,
        destination.1 / source.1,
        destination.2 / source.2,
    );
    BRADFORD.then(&scale).then(&BRADFORD_INVERSE)
}

/// Adapt XYZ components from one white point to another. The common D65 and
/// D50 pair use published matrices.
pub fn adapt(from: Components, to: Components, xyz: Components) -> Components {
    if from == to {
        xyz
    } else if from == D65 && to == D50 {
        transform(&D65_TO_D50, xyz)
    } else if from == D50 && to == D65 {
        transform(&D50_TO_D65, xyz)
    } else {
        transform(&bradford(from, to), xyz)
    }
}

const XYZ_COORDS: [Coord; 3] = [
    Coord::linear("x", "X"),
    Coord::linear("y", "Y"),
    Coord::linear("z", "Z"),
];

/// CIE-XYZ with a D65 white point. The root of the tree.
pub static XYZ_D65: ColorSpace =
    ColorSpace::new(SpaceDef::new("xyz-d65", "XYZ D65", XYZ_COORDS).aliases(&["xyz"]));

/// CIE-XYZ with a D50 white point.
pub static XYZ_D50: ColorSpace = ColorSpace::new(
    SpaceDef::new("xyz-d50", "XYZ D50", XYZ_COORDS)
        .base(&XYZ_D65, d50_to_d65, d65_to_d50)
        .white(D50),
);

/// Absolute CIE-XYZ with a D65 white point, where media white has a
/// luminance of 203 cd/m².
pub static XYZ_ABS_D65: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "xyz-abs-d65",
        "Absolute XYZ D65",
        [
            Coord::linear("x", "Xa").ref_range(0.0, 9504.7),
            Coord::linear("y", "Ya").ref_range(0.0, 10000.0),
            Coord::linear("z", "Za").ref_range(0.0, 10888.3),
        ],
    )
    .base(&XYZ_D65, absolute_to_relative, relative_to_absolute),
);

fn d50_to_d65(xyz: Components) -> Components {
    adapt(D50, D65, xyz)
}

fn d65_to_d50(xyz: Components) -> Components {
    adapt(D65, D50, xyz)
}

/// Scale relative XYZ so that media white has its absolute luminance.
pub fn relative_to_absolute(xyz: Components) -> Components {
    xyz.map(|v| v * MEDIA_WHITE_LUMINANCE)
}

/// Scale absolute XYZ back to media white relative XYZ.
pub fn absolute_to_relative(xyz: Components) -> Components {
    xyz.map(|v| v / MEDIA_WHITE_LUMINANCE)
}
