//! The cylindrical HSL, HSV and HWB notations of sRGB. All of them work on
//! gamma encoded sRGB, not on linear light.

use crate::color::{Component, Components};
use crate::math::normalize_hue;
use crate::space::{ColorSpace, Coord, SpaceDef};
use crate::spaces::rgb::SRGB;

fn srgb_to_hsl(rgb: Components) -> Components {
    let Components(red, green, blue) = rgb;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let mut hue = Component::NAN;
    let mut saturation = 0.0;

    if delta != 0.0 {
        saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        hue *= 60.0;
    }

    // Colors outside the sRGB cube can end up with a negative saturation.
    if saturation < 0.0 {
        hue += 180.0;
        saturation = saturation.abs();
    }

    Components(normalize_hue(hue), saturation * 100.0, lightness * 100.0)
}

fn hsl_to_srgb(hsl: Components) -> Components {
    let hue = if hsl.0.is_nan() { 0.0 } else { normalize_hue(hsl.0) };
    let saturation = hsl.1 / 100.0;
    let lightness = hsl.2 / 100.0;

    let f = |n: Component| {
        let k = (n + hue / 30.0) % 12.0;
        let a = saturation * lightness.min(1.0 - lightness);
        lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Components(f(0.0), f(8.0), f(4.0))
}

/// HSL on top of sRGB.
pub static HSL: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "hsl",
        "HSL",
        [
            Coord::angle("h", "Hue"),
            Coord::linear("s", "Saturation").range(0.0, 100.0),
            Coord::linear("l", "Lightness").range(0.0, 100.0),
        ],
    )
    .base(&SRGB, hsl_to_srgb, srgb_to_hsl),
);

fn hsl_to_hsv(hsl: Components) -> Components {
    let Components(hue, saturation, lightness) = hsl;
    let saturation = saturation / 100.0;
    let lightness = lightness / 100.0;

    let value = lightness + saturation * lightness.min(1.0 - lightness);
    let saturation = if value == 0.0 {
        0.0
    } else {
        200.0 * (1.0 - lightness / value)
    };

    Components(hue, saturation, value * 100.0)
}

fn hsv_to_hsl(hsv: Components) -> Components {
    let Components(hue, saturation, value) = hsv;
    let saturation = saturation / 100.0;
    let value = value / 100.0;

    let lightness = value * (1.0 - saturation / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness) * 100.0
    };

    Components(hue, saturation, lightness * 100.0)
}

/// HSV on top of HSL.
pub static HSV: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "hsv",
        "HSV",
        [
            Coord::angle("h", "Hue"),
            Coord::linear("s", "Saturation").range(0.0, 100.0),
            Coord::linear("v", "Value").range(0.0, 100.0),
        ],
    )
    .base(&HSL, hsv_to_hsl, hsl_to_hsv),
);

fn hsv_to_hwb(hsv: Components) -> Components {
    let Components(hue, saturation, value) = hsv;
    Components(hue, value * (100.0 - saturation) / 100.0, 100.0 - value)
}

fn hwb_to_hsv(hwb: Components) -> Components {
    let Components(hue, whiteness, blackness) = hwb;
    let whiteness = whiteness / 100.0;
    let blackness = blackness / 100.0;

    // Whiteness and blackness adding up to more than 100% is a shade of gray.
    let sum = whiteness + blackness;
    if sum >= 1.0 {
        return Components(hue, 0.0, whiteness / sum * 100.0);
    }

    let value = 1.0 - blackness;
    let saturation = if value == 0.0 {
        0.0
    } else {
        1.0 - whiteness / value
    };

    Components(hue, saturation * 100.0, value * 100.0)
}

/// HWB on top of HSV.
pub static HWB: ColorSpace = ColorSpace::new(
    SpaceDef::new(
        "hwb",
        "HWB",
        [
            Coord::angle("h", "Hue"),
            Coord::linear("w", "Whiteness").range(0.0, 100.0),
            Coord::linear("b", "Blackness").range(0.0, 100.0),
        ],
    )
    .base(&HSV, hwb_to_hsv, hsv_to_hwb),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_components_near;
    use crate::{assert_component_eq, convert};

    #[test]
    fn primaries_to_hsl() {
        let hsl = srgb_to_hsl(Components(1.0, 0.0, 0.0));
        assert_components_near!(hsl, [0.0, 100.0, 50.0], 1.0e-9);

        let hsl = srgb_to_hsl(Components(0.0, 0.0, 1.0));
        assert_components_near!(hsl, [240.0, 100.0, 50.0], 1.0e-9);
    }

    #[test]
    fn grays_have_a_powerless_hue() {
        let hsl = srgb_to_hsl(Components(0.5, 0.5, 0.5));
        assert!(hsl.0.is_nan());
        assert_component_eq!(hsl.1, 0.0);
        assert_component_eq!(hsl.2, 50.0);

        let rgb = hsl_to_srgb(hsl);
        assert_components_near!(rgb, [0.5, 0.5, 0.5], 1.0e-12);
    }

    #[test]
    fn hwb_of_primaries_and_grays() {
        let hwb = convert(&SRGB, &HWB, Components(1.0, 0.0, 0.0)).unwrap();
        assert_components_near!(hwb, [0.0, 0.0, 0.0], 1.0e-9);

        let rgb = convert(&HWB, &SRGB, Components(0.0, 60.0, 60.0)).unwrap();
        assert_components_near!(rgb, [0.5, 0.5, 0.5], 1.0e-9);
    }

    #[test]
    fn hsv_of_cyan() {
        let hsv = convert(&SRGB, &HSV, Components(0.0, 1.0, 1.0)).unwrap();
        assert_components_near!(hsv, [180.0, 100.0, 100.0], 1.0e-9);
    }
}
