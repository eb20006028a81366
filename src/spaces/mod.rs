//! The built-in color spaces.
//!
//! Every space is a `static` node. Most are derived from [`XYZ_D65`], the root
//! of the tree, either directly or through a chain of bases:
//!
//! ```text
//! xyz-d65 ─┬─ xyz-d50 ─┬─ lab ── lch
//!          │           └─ prophoto-linear ── prophoto
//!          ├─ srgb-linear ── srgb ── hsl ── hsv ── hwb
//!          ├─ oklab ── oklch
//!          ├─ jzazbz ── jzczhz
//!          ├─ xyz-abs-d65 ── ictcp
//!          └─ ...
//! ```

pub mod aces;
pub mod hdr;
pub mod hsl;
pub mod lab;
pub mod luv;
pub mod oklab;
pub mod rgb;
pub mod xyz;

use crate::space::ColorSpace;

pub use aces::{ACESCC, ACESCG};
pub use hdr::{ICTCP, JZAZBZ, JZCZHZ, REC2100_LINEAR, REC2100_PQ};
pub use hsl::{HSL, HSV, HWB};
pub use lab::{LAB, LAB_D65, LCH};
pub use luv::{LCHUV, LUV};
pub use oklab::{OKLAB, OKLCH};
pub use rgb::{
    A98RGB, A98RGB_LINEAR, P3, P3_LINEAR, PROPHOTO, PROPHOTO_LINEAR, REC2020, REC2020_LINEAR,
    SRGB, SRGB_LINEAR,
};
pub use xyz::{XYZ_ABS_D65, XYZ_D50, XYZ_D65};

/// Every built-in space, bases before the spaces derived from them.
pub static BUILTINS: [&ColorSpace; 30] = [
    &XYZ_D65,
    &XYZ_D50,
    &XYZ_ABS_D65,
    &LAB,
    &LCH,
    &LAB_D65,
    &LUV,
    &LCHUV,
    &OKLAB,
    &OKLCH,
    &SRGB_LINEAR,
    &SRGB,
    &HSL,
    &HSV,
    &HWB,
    &P3_LINEAR,
    &P3,
    &A98RGB_LINEAR,
    &A98RGB,
    &PROPHOTO_LINEAR,
    &PROPHOTO,
    &REC2020_LINEAR,
    &REC2020,
    &REC2100_LINEAR,
    &REC2100_PQ,
    &JZAZBZ,
    &JZCZHZ,
    &ICTCP,
    &ACESCG,
    &ACESCC,
];
