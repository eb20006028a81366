//! Color difference metrics.
//! <https://www.w3.org/TR/css-color-4/#color-difference>

use crate::color::{Color, Component, Components};
use crate::error::Result;
use crate::spaces::{LAB, OKLAB};

/// 25 to the power of 7.
const POW_25_7: Component = 6_103_515_625.0;

/// Parametric weights for the lightness, chroma and hue terms of
/// [`delta_e_2000_weighted`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeltaE2000Weights {
    /// Lightness weight.
    pub kl: Component,
    /// Chroma weight.
    pub kc: Component,
    /// Hue weight.
    pub kh: Component,
}

impl Default for DeltaE2000Weights {
    fn default() -> Self {
        Self {
            kl: 1.0,
            kc: 1.0,
            kh: 1.0,
        }
    }
}

/// The CIEDE2000 color difference between two colors, with unit weights.
pub fn delta_e_2000(reference: &Color, sample: &Color) -> Result<Component> {
    delta_e_2000_weighted(reference, sample, DeltaE2000Weights::default())
}

/// The CIEDE2000 color difference between two colors. Both colors are
/// compared in CIE Lab (D50) with missing components taken as zero.
pub fn delta_e_2000_weighted(
    reference: &Color,
    sample: &Color,
    weights: DeltaE2000Weights,
) -> Result<Component> {
    let reference = reference.to_space(&LAB)?.resolved_components();
    let sample = sample.to_space(&LAB)?.resolved_components();
    Ok(ciede2000(reference, sample, weights))
}

/// Hue angle in degrees in `[0, 360)`, or `0` for a neutral.
fn hue_degrees(a: Component, b: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

#[allow(non_snake_case)]
fn ciede2000(lab1: Components, lab2: Components, weights: DeltaE2000Weights) -> Component {
    let Components(L1, a1, b1) = lab1;
    let Components(L2, a2, b2) = lab2;

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);

    // Scale up a* to make neutrals more uniform.
    let Cbar7 = ((C1 + C2) / 2.0).powi(7);
    let G = 0.5 * (1.0 - (Cbar7 / (Cbar7 + POW_25_7)).sqrt());

    let adash1 = (1.0 + G) * a1;
    let adash2 = (1.0 + G) * a2;

    let Cdash1 = adash1.hypot(b1);
    let Cdash2 = adash2.hypot(b2);

    let h1 = hue_degrees(adash1, b1);
    let h2 = hue_degrees(adash2, b2);

    let ΔL = L2 - L1;
    let ΔC = Cdash2 - Cdash1;

    let hdiff = h2 - h1;
    let hsum = h1 + h2;
    let habs = hdiff.abs();

    let Δh = if Cdash1 * Cdash2 == 0.0 {
        0.0
    } else if habs <= 180.0 {
        hdiff
    } else if hdiff > 180.0 {
        hdiff - 360.0
    } else {
        hdiff + 360.0
    };

    let ΔH = 2.0 * (Cdash1 * Cdash2).sqrt() * (Δh / 2.0).to_radians().sin();

    let Ldash = (L1 + L2) / 2.0;
    let Cdash = (Cdash1 + Cdash2) / 2.0;
    let Cdash7 = Cdash.powi(7);

    let hdash = if Cdash1 * Cdash2 == 0.0 {
        hsum
    } else if habs <= 180.0 {
        hsum / 2.0
    } else if hsum < 360.0 {
        (hsum + 360.0) / 2.0
    } else {
        (hsum - 360.0) / 2.0
    };

    let lsq = (Ldash - 50.0) * (Ldash - 50.0);
    let SL = 1.0 + 0.015 * lsq / (20.0 + lsq).sqrt();
    let SC = 1.0 + 0.045 * Cdash;

    let T = 1.0 - 0.17 * (hdash - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hdash).to_radians().cos()
        + 0.32 * (3.0 * hdash + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hdash - 63.0).to_radians().cos();
    let SH = 1.0 + 0.015 * Cdash * T;

    // Rotation term for the blue region.
    let Δθ = 30.0 * (-((hdash - 275.0) / 25.0).powi(2)).exp();
    let RC = 2.0 * (Cdash7 / (Cdash7 + POW_25_7)).sqrt();
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let l = ΔL / (weights.kl * SL);
    let c = ΔC / (weights.kc * SC);
    let h = ΔH / (weights.kh * SH);

    (l * l + c * c + h * h + RT * c * h).max(0.0).sqrt()
}

/// Compute Delta-E OK, the Euclidean distance of two colors in Oklab.
#[allow(non_snake_case)]
pub fn delta_e_ok(reference: &Color, sample: &Color) -> Result<Component> {
    let Components(L1, a1, b1) = reference.to_space(&OKLAB)?.resolved_components();
    let Components(L2, a2, b2) = sample.to_space(&OKLAB)?.resolved_components();

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    Ok(ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt())
}
