//! CIE-Luv and its polar form LChuv.

use crate::color::{Component, Components};
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::lab::{to_polar, to_rectangular};
use crate::spaces::xyz::{D65, XYZ_D65};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// The `u'` and `v'` chromaticity coordinates of an XYZ triple.
fn uv(xyz: Components) -> (Component, Component) {
    let Components(x, y, z) = xyz;
    let denominator = x + 15.0 * y + 3.0 * z;
    (4.0 * x / denominator, 9.0 * y / denominator)
}

fn xyz_to_luv(xyz: Components) -> Components {
    let (u_prime, v_prime) = uv(xyz);

    // Black has no chromaticity.
    if !u_prime.is_finite() || !v_prime.is_finite() {
        return Components(0.0, 0.0, 0.0);
    }

    let (u_white, v_white) = uv(D65);
    let y = xyz.1;
    let lightness = if y <= EPSILON {
        KAPPA * y
    } else {
        116.0 * y.cbrt() - 16.0
    };

    Components(
        lightness,
        13.0 * lightness * (u_prime - u_white),
        13.0 * lightness * (v_prime - v_white),
    )
}

fn luv_to_xyz(luv: Components) -> Components {
    let Components(lightness, u, v) = luv;

    if lightness == 0.0 {
        return Components(0.0, 0.0, 0.0);
    }

    let (u_white, v_white) = uv(D65);
    let u_prime = u / (13.0 * lightness) + u_white;
    let v_prime = v / (13.0 * lightness) + v_white;

    let y = if lightness <= 8.0 {
        lightness / KAPPA
    } else {
        ((lightness + 16.0) / 116.0).powi(3)
    };

    Components(
        y * (9.0 * u_prime) / (4.0 * v_prime),
        y,
        y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
    )
}

/// CIE-Luv, relative to D65.
pub static LUV: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "luv",
        "Luv",
        [
            Coord::linear("l", "Lightness").ref_range(0.0, 100.0),
            Coord::linear("u", "u").ref_range(-215.0, 215.0),
            Coord::linear("v", "v").ref_range(-215.0, 215.0),
        ],
    )
    .base(&XYZ_D65, luv_to_xyz, xyz_to_luv)
    .white(D65),
);

/// The polar form of [`LUV`].
pub static LCHUV: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "lchuv",
        "LChuv",
        [
            Coord::linear("l", "Lightness").ref_range(0.0, 100.0),
            Coord::linear("c", "Chroma").ref_range(0.0, 220.0),
            Coord::angle("h", "Hue"),
        ],
    )
    .base(&LUV, to_rectangular, luv_to_lchuv),
);

fn luv_to_lchuv(luv: Components) -> Components {
    to_polar(luv, 0.02)
}
