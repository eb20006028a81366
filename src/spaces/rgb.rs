//! The display referred RGB color spaces, each as a linear light space based
//! on CIE-XYZ with a gamma encoded space on top of it.

use crate::color::Components;
use crate::math::{transform, transform_3x3, Transform};
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::xyz::{D50, XYZ_D50, XYZ_D65};

/// The coordinates shared by all RGB spaces with a `[0, 1]` gamut.
pub(crate) const RGB_COORDS: [Coord; 3] = [
    Coord::linear("r", "Red").range(0.0, 1.0),
    Coord::linear("g", "Green").range(0.0, 1.0),
    Coord::linear("b", "Blue").range(0.0, 1.0),
];

mod gamma {
    use crate::color::{Component, Components};

    pub fn srgb_to_linear_light(from: Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs <= 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    pub fn srgb_to_gamma_encoded(from: Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    pub fn a98_to_linear_light(from: Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(563.0 / 256.0))
    }

    pub fn a98_to_gamma_encoded(from: Components) -> Components {
        from.map(|v| v.signum() * v.abs().powf(256.0 / 563.0))
    }

    pub fn prophoto_to_linear_light(from: Components) -> Components {
        const E: Component = 16.0 / 512.0;

        from.map(|v| {
            let abs = v.abs();

            if abs <= E {
                v / 16.0
            } else {
                v.signum() * abs.powf(1.8)
            }
        })
    }

    pub fn prophoto_to_gamma_encoded(from: Components) -> Components {
        const E: Component = 1.0 / 512.0;

        from.map(|v| {
            let abs = v.abs();

            if abs >= E {
                v.signum() * abs.powf(1.0 / 1.8)
            } else {
                16.0 * v
            }
        })
    }

    #[allow(clippy::excessive_precision)]
    const REC2020_ALPHA: Component = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const REC2020_BETA: Component = 0.018053968510807;

    pub fn rec2020_to_linear_light(from: Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs < REC2020_BETA * 4.5 {
                v / 4.5
            } else {
                v.signum() * ((abs + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf(1.0 / 0.45)
            }
        })
    }

    pub fn rec2020_to_gamma_encoded(from: Components) -> Components {
        from.map(|v| {
            let abs = v.abs();

            if abs > REC2020_BETA {
                v.signum() * (REC2020_ALPHA * abs.powf(0.45) - (REC2020_ALPHA - 1.0))
            } else {
                4.5 * v
            }
        })
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const SRGB_TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_SRGB: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const P3_TO_XYZ: Transform = transform_3x3(
    0.48657094864821626, 0.22897456406974884, 0.0,
    0.26566769316909294, 0.6917385218365062,  0.045113381858902575,
    0.1982172852343625,  0.079286914093745,   1.0439443689009757,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_P3: Transform = transform_3x3(
     2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
    -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
    -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const A98_TO_XYZ: Transform = transform_3x3(
    0.5766690429101308,  0.29734497525053616, 0.027031361386412378,
    0.18555823790654627, 0.627363566255466,   0.07068885253582714,
    0.18822864623499472, 0.07529145849399789, 0.9913375368376389,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_A98: Transform = transform_3x3(
     2.041587903810746,  -0.9692436362808798,   0.013444280632031024,
    -0.5650069742788596,  1.8759675015077206,  -0.11836239223101824,
    -0.3447313507783295,  0.04155505740717561,  1.0151749943912054,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const PROPHOTO_TO_XYZ: Transform = transform_3x3(
    0.7977604896723027,  0.2880711282292934,     0.0,
    0.13518583717574031, 0.7118432178101014,     0.0,
    0.0313493495815248,  0.00008565396060525902, 0.8251046025104601,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_PROPHOTO: Transform = transform_3x3(
     1.3457989731028281,  -0.5446224939028347,  0.0,
    -0.25558010007997534,  1.5082327413132781,  0.0,
    -0.05110628506753401,  0.02053603239147973, 1.2119675456389454,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const REC2020_TO_XYZ: Transform = transform_3x3(
    0.6369580483012913,  0.26270021201126703,  0.0,
    0.14461690358620838, 0.677998071518871,    0.028072693049087508,
    0.16888097516417205, 0.059301716469861945, 1.0609850577107909,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_REC2020: Transform = transform_3x3(
     1.7166511879712676, -0.666684351832489,    0.017639857445310915,
    -0.3556707837763924,  1.616481236634939,   -0.042770613257808655,
    -0.2533662813736598,  0.01576854581391113,  0.942103121235474,
);

fn srgb_linear_to_xyz(rgb: Components) -> Components {
    transform(&SRGB_TO_XYZ, rgb)
}

fn xyz_to_srgb_linear(xyz: Components) -> Components {
    transform(&XYZ_TO_SRGB, xyz)
}

fn p3_linear_to_xyz(rgb: Components) -> Components {
    transform(&P3_TO_XYZ, rgb)
}

fn xyz_to_p3_linear(xyz: Components) -> Components {
    transform(&XYZ_TO_P3, xyz)
}

fn a98_linear_to_xyz(rgb: Components) -> Components {
    transform(&A98_TO_XYZ, rgb)
}

fn xyz_to_a98_linear(xyz: Components) -> Components {
    transform(&XYZ_TO_A98, xyz)
}

fn prophoto_linear_to_xyz(rgb: Components) -> Components {
    transform(&PROPHOTO_TO_XYZ, rgb)
}

fn xyz_to_prophoto_linear(xyz: Components) -> Components {
    transform(&XYZ_TO_PROPHOTO, xyz)
}

/// Rec. 2020 primaries in linear light, shared with Rec. 2100.
pub(crate) fn rec2020_linear_to_xyz(rgb: Components) -> Components {
    transform(&REC2020_TO_XYZ, rgb)
}

pub(crate) fn xyz_to_rec2020_linear(xyz: Components) -> Components {
    transform(&XYZ_TO_REC2020, xyz)
}

/// sRGB in linear light.
pub static SRGB_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("srgb-linear", "Linear sRGB", RGB_COORDS).base(
        &XYZ_D65,
        srgb_linear_to_xyz,
        xyz_to_srgb_linear,
    ),
);

/// sRGB with gamma encoding.
pub static SRGB: ColorSpace = ColorSpace::new(SpaceDef::new("srgb", "sRGB", RGB_COORDS).base(
    &SRGB_LINEAR,
    gamma::srgb_to_linear_light,
    gamma::srgb_to_gamma_encoded,
));

/// Display P3 in linear light.
pub static P3_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("p3-linear", "Linear P3", RGB_COORDS).base(
        &XYZ_D65,
        p3_linear_to_xyz,
        xyz_to_p3_linear,
    ),
);

/// Display P3 with the sRGB transfer function.
pub static P3: ColorSpace = ColorSpace::new(
    SpaceDef::new("p3", "P3", RGB_COORDS)
        .base(
            &P3_LINEAR,
            gamma::srgb_to_linear_light,
            gamma::srgb_to_gamma_encoded,
        )
        .aliases(&["display-p3"]),
);

/// Adobe 98 RGB in linear light.
pub static A98RGB_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("a98rgb-linear", "Linear Adobe® 98 RGB compatible", RGB_COORDS).base(
        &XYZ_D65,
        a98_linear_to_xyz,
        xyz_to_a98_linear,
    ),
);

/// Adobe 98 RGB with gamma encoding.
pub static A98RGB: ColorSpace = ColorSpace::new(
    SpaceDef::new("a98rgb", "Adobe® 98 RGB compatible", RGB_COORDS)
        .base(
            &A98RGB_LINEAR,
            gamma::a98_to_linear_light,
            gamma::a98_to_gamma_encoded,
        )
        .aliases(&["a98-rgb"]),
);

/// ProPhoto RGB in linear light, relative to D50.
pub static PROPHOTO_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("prophoto-linear", "Linear ProPhoto", RGB_COORDS)
        .base(&XYZ_D50, prophoto_linear_to_xyz, xyz_to_prophoto_linear)
        .white(D50),
);

/// ProPhoto RGB with gamma encoding.
pub static PROPHOTO: ColorSpace = ColorSpace::new(
    SpaceDef::new("prophoto", "ProPhoto", RGB_COORDS)
        .base(
            &PROPHOTO_LINEAR,
            gamma::prophoto_to_linear_light,
            gamma::prophoto_to_gamma_encoded,
        )
        .aliases(&["prophoto-rgb"]),
);

/// Rec. 2020 in linear light.
pub static REC2020_LINEAR: ColorSpace = ColorSpace::new(
    SpaceDef::new("rec2020-linear", "Linear REC.2020", RGB_COORDS).base(
        &XYZ_D65,
        rec2020_linear_to_xyz,
        xyz_to_rec2020_linear,
    ),
);

/// Rec. 2020 with gamma encoding.
pub static REC2020: ColorSpace = ColorSpace::new(
    SpaceDef::new("rec2020", "REC.2020", RGB_COORDS).base(
        &REC2020_LINEAR,
        gamma::rec2020_to_linear_light,
        gamma::rec2020_to_gamma_encoded,
    ),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_components_near;
    use crate::{assert_component_eq, convert};

    #[test]
    fn gamma_keeps_endpoints_and_moves_interior_values() {
        let linear = convert(&SRGB, &SRGB_LINEAR, Components(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(linear, Components(1.0, 0.0, 0.0));

        let linear = convert(&SRGB, &SRGB_LINEAR, Components(0.5, 0.5, 0.5)).unwrap();
        assert_component_eq!(linear.0, 0.21404114048223255);
        assert_component_eq!(linear.1, 0.21404114048223255);
        assert_component_eq!(linear.2, 0.21404114048223255);
    }

    #[test]
    fn negative_values_mirror_the_curve() {
        let linear = gamma::srgb_to_linear_light(Components(-0.5, 0.02, 0.5));
        assert_component_eq!(linear.0, -linear.2);
        assert_component_eq!(linear.1, 0.02 / 12.92);
    }

    #[test]
    fn every_transfer_function_round_trips() {
        let c = Components(0.01, 0.35, 0.9);
        type Pair = (fn(Components) -> Components, fn(Components) -> Components);
        let pairs: [Pair; 4] = [
            (gamma::srgb_to_linear_light, gamma::srgb_to_gamma_encoded),
            (gamma::a98_to_linear_light, gamma::a98_to_gamma_encoded),
            (gamma::prophoto_to_linear_light, gamma::prophoto_to_gamma_encoded),
            (gamma::rec2020_to_linear_light, gamma::rec2020_to_gamma_encoded),
        ];
        for (to_linear, to_gamma) in pairs {
            assert_components_near!(to_gamma(to_linear(c)), [c.0, c.1, c.2], 1.0e-9);
        }
    }

    #[test]
    fn p3_red_is_outside_srgb() {
        let srgb = convert(&P3, &SRGB, Components(1.0, 0.0, 0.0)).unwrap();
        assert_components_near!(srgb, [1.0930663624, -0.2267419736, -0.1501345809], 1.0e-6);
    }

    #[test]
    fn srgb_white_is_d65() {
        let xyz = convert(&SRGB, &XYZ_D65, Components(1.0, 1.0, 1.0)).unwrap();
        let d65 = crate::spaces::xyz::D65;
        assert_components_near!(xyz, [d65.0, d65.1, d65.2], 1.0e-6);
    }
}
