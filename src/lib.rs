//! chromagraph converts colors between a tree of color spaces and maps them
//! into the gamut of a space.
//!
//! Every color space is a node that only knows how to reach its base. A
//! conversion climbs from the source to the closest ancestor shared with the
//! destination and then descends, so adding a space only takes a single pair
//! of transforms.
//!
//! ```rust
//! use chromagraph::{spaces, Color, GamutOptions};
//!
//! let p3_red = Color::new(&spaces::P3, 1.0, 0.0, 0.0, 1.0);
//! let srgb = p3_red
//!     .to_space_in_gamut("srgb", &GamutOptions::default())
//!     .unwrap();
//! assert!(srgb.in_gamut().unwrap());
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod coord;
mod delta_e;
mod error;
mod gamut;
mod math;
mod registry;
mod space;
pub mod spaces;
mod test;

pub use color::{Color, Component, ComponentDetails, Components, Flags};
pub use convert::{connection_space, convert};
pub use coord::{resolve_coordinate, CoordKey, CoordRef, ResolvedCoord};
pub use delta_e::{delta_e_2000, delta_e_2000_weighted, delta_e_ok, DeltaE2000Weights};
pub use error::{Error, Result};
pub use gamut::{
    clip, in_gamut, BlackWhiteClamp, DeltaE, GamutMethod, GamutOptions, DEFAULT_EPSILON,
};
pub use math::{normalize_hue, transform, transform_3x3, Transform};
pub use registry::{get, Registry, SpaceRef};
pub use space::{Base, ColorSpace, Coord, CoordKind, GamutSpace, Referred, SpaceDef};
