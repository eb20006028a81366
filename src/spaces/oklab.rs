//! The Oklab perceptual color space and its polar form.

use crate::color::Components;
use crate::math::{transform, transform_3x3, Transform};
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::lab::{to_polar, to_rectangular};
use crate::spaces::xyz::XYZ_D65;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
     0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
    -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
     0.2104542553,  1.9779984951,  0.0259040371,
     0.7936177850, -2.4285922050,  0.7827717662,
    -0.0040720468,  0.4505937099, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
    0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
    0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_XYZ: Transform = transform_3x3(
     1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
    -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
     0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
);

fn xyz_to_oklab(xyz: Components) -> Components {
    let lms = transform(&XYZ_TO_LMS, xyz);
    transform(&LMS_TO_OKLAB, lms.map(|v| v.cbrt()))
}

fn oklab_to_xyz(oklab: Components) -> Components {
    let lms = transform(&OKLAB_TO_LMS, oklab);
    transform(&LMS_TO_XYZ, lms.map(|v| v * v * v))
}

/// The Oklab color space.
pub static OKLAB: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "oklab",
        "Oklab",
        [
            Coord::linear("l", "Lightness").ref_range(0.0, 1.0),
            Coord::linear("a", "a").ref_range(-0.4, 0.4),
            Coord::linear("b", "b").ref_range(-0.4, 0.4),
        ],
    )
    .base(&XYZ_D65, oklab_to_xyz, xyz_to_oklab),
);

/// The polar form of [`OKLAB`].
pub static OKLCH: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "oklch",
        "Oklch",
        [
            Coord::linear("l", "Lightness").ref_range(0.0, 1.0),
            Coord::linear("c", "Chroma").ref_range(0.0, 0.4),
            Coord::angle("h", "Hue"),
        ],
    )
    .base(&OKLAB, to_rectangular, oklab_to_oklch),
);

fn oklab_to_oklch(oklab: Components) -> Components {
    to_polar(oklab, 0.0002)
}
