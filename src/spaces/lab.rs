//! CIE-Lab and its polar form, plus the helpers every rectangular/polar pair
//! of spaces share.

use crate::color::{Component, Components};
use crate::math::normalize_hue;
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::xyz::{D50, D65, XYZ_D50, XYZ_D65};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;
const EPSILON_CUBED: Component = 24.0 / 116.0;

/// Convert a rectangular `(lightness, a, b)` triple into its polar form.
///
/// When both `a` and `b` are within `achromatic` of zero the hue is
/// powerless and is returned as `NaN`.
pub fn to_polar(components: Components, achromatic: Component) -> Components {
    let Components(lightness, a, b) = components;
    let hue = if a.abs() < achromatic && b.abs() < achromatic {
        Component::NAN
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };

    Components(lightness, (a * a + b * b).sqrt(), hue)
}

/// Convert a polar `(lightness, chroma, hue)` triple into its rectangular
/// form. A negative chroma is treated as zero and a `NaN` hue as zero degrees.
pub fn to_rectangular(components: Components) -> Components {
    let Components(lightness, chroma, hue) = components;
    let chroma = chroma.max(0.0);
    let hue = if hue.is_nan() { 0.0 } else { hue.to_radians() };

    Components(lightness, chroma * hue.cos(), chroma * hue.sin())
}

fn xyz_to_lab(xyz: Components, white: Components) -> Components {
    let adapted = Components(xyz.0 / white.0, xyz.1 / white.1, xyz.2 / white.2);

    let Components(f0, f1, f2) = adapted.map(|v| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    });

    Components(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
}

fn lab_to_xyz(lab: Components, white: Components) -> Components {
    let Components(lightness, a, b) = lab;

    let f1 = (lightness + 16.0) / 116.0;
    let f0 = f1 + a / 500.0;
    let f2 = f1 - b / 200.0;

    let x = if f0 > EPSILON_CUBED {
        f0 * f0 * f0
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lightness / KAPPA
    };

    let z = if f2 > EPSILON_CUBED {
        f2 * f2 * f2
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    Components(x * white.0, y * white.1, z * white.2)
}

const LAB_COORDS: [Coord; 3] = [
    Coord::linear("l", "Lightness").ref_range(0.0, 100.0),
    Coord::linear("a", "a").ref_range(-125.0, 125.0),
    Coord::linear("b", "b").ref_range(-125.0, 125.0),
];

/// CIE-Lab, relative to D50.
pub static LAB: ColorSpace = ColorSpace::new(
    SpaceDef::new("lab", "Lab", LAB_COORDS)
        .base(&XYZ_D50, lab_to_xyz_d50, xyz_d50_to_lab)
        .white(D50),
);

fn lab_to_xyz_d50(lab: Components) -> Components {
    lab_to_xyz(lab, D50)
}

fn xyz_d50_to_lab(xyz: Components) -> Components {
    xyz_to_lab(xyz, D50)
}

/// CIE-LCH, the polar form of [`LAB`].
pub static LCH: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "lch",
        "LCH",
        [
            Coord::linear("l", "Lightness").ref_range(0.0, 100.0),
            Coord::linear("c", "Chroma").ref_range(0.0, 150.0),
            Coord::angle("h", "Hue"),
        ],
    )
    .base(&LAB, to_rectangular, lab_to_lch),
);

fn lab_to_lch(lab: Components) -> Components {
    to_polar(lab, 0.02)
}

/// CIE-Lab, relative to D65.
pub static LAB_D65: ColorSpace = ColorSpace::new(
    SpaceDef::new("lab-d65", "Lab D65", LAB_COORDS)
        .base(&XYZ_D65, lab_d65_to_xyz, xyz_to_lab_d65)
        .white(D65),
);

fn lab_d65_to_xyz(lab: Components) -> Components {
    lab_to_xyz(lab, D65)
}

fn xyz_to_lab_d65(xyz: Components) -> Components {
    xyz_to_lab(xyz, D65)
}
