//! Conversion between any two color spaces in the tree.
//!
//! Each space only knows how to move components to and from its own base.
//! To convert between two spaces the components climb from the source up to
//! the deepest ancestor both spaces share, the connection space, and then
//! descend to the destination.
//!
//! ```rust
//! use chromagraph::{convert, spaces, Components};
//! let linear = convert(&spaces::SRGB, &spaces::SRGB_LINEAR, Components(1.0, 0.0, 0.0)).unwrap();
//! assert_eq!(linear, Components(1.0, 0.0, 0.0));
//! ```

use tracing::debug;

use crate::color::{Color, Components};
use crate::error::{Error, Result};
use crate::registry::{self, SpaceRef};
use crate::space::ColorSpace;

/// Find the deepest space on the paths of both `from` and `to`, along with
/// its index in those paths.
pub fn connection_space(
    from: &'static ColorSpace,
    to: &'static ColorSpace,
) -> Result<(&'static ColorSpace, usize)> {
    let connection = from
        .path()
        .iter()
        .zip(to.path())
        .take_while(|(a, b)| a == b)
        .enumerate()
        .last();

    match connection {
        Some((index, (space, _))) => Ok((*space, index)),
        None => {
            debug!(
                from = from.id(),
                to = to.id(),
                "color spaces share no connection space"
            );
            Err(Error::NoConnectionSpace {
                from: from.id(),
                to: to.id(),
            })
        }
    }
}

/// Convert components from one color space to another.
///
/// Components that are `NaN` on input are treated as missing and converted
/// as `0`. A powerless component on output, like the hue of a gray in a
/// polar space, is `NaN`. Converting to the same space returns the
/// components unchanged.
pub fn convert(
    from: &'static ColorSpace,
    to: &'static ColorSpace,
    components: Components,
) -> Result<Components> {
    if from == to {
        return Ok(components);
    }

    let (_, index) = connection_space(from, to)?;

    let mut components = components.map(|c| if c.is_nan() { 0.0 } else { c });

    for space in from.path()[index + 1..].iter().rev() {
        components = space.to_base(components);
    }

    for space in &to.path()[index + 1..] {
        components = space.from_base(components);
    }

    Ok(components)
}

impl Color {
    /// Convert this color into another color space. Missing components are
    /// converted as `0` and alpha is kept as is. Converting to the space the
    /// color is already in returns an exact copy.
    pub fn to_space<'a>(&self, space: impl Into<SpaceRef<'a>>) -> Result<Self> {
        let space = registry::get(space)?;
        if space == self.space {
            return Ok(*self);
        }

        let components = convert(self.space, space, self.resolved_components())?;
        Ok(self.with_components(space, components))
    }

    /// All three components of this color expressed in `space`. Missing and
    /// powerless components are `NaN`.
    pub fn coords_in<'a>(&self, space: impl Into<SpaceRef<'a>>) -> Result<Components> {
        let space = registry::get(space)?;
        if space == self.space {
            return Ok(self.components_or_nan());
        }
        convert(self.space, space, self.resolved_components())
    }

    /// Return a copy of this color with all three components replaced by
    /// `components`, given in `space`. The color stays in its own space.
    pub fn with_coords_in<'a>(
        &self,
        space: impl Into<SpaceRef<'a>>,
        components: Components,
    ) -> Result<Self> {
        let space = registry::get(space)?;
        let components = if space == self.space {
            components
        } else {
            convert(space, self.space, components)?
        };
        Ok(self.with_components(self.space, components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{Coord, SpaceDef};
    use crate::spaces::{self, BUILTINS};
    use crate::test::assert_components_near;
    use crate::{assert_component_eq, Component, Flags};

    static ISLAND: ColorSpace = ColorSpace::new(SpaceDef::new(
        "island",
        "Island",
        [
            Coord::linear("x", "X"),
            Coord::linear("y", "Y"),
            Coord::linear("z", "Z"),
        ],
    ));

    #[test]
    fn every_pair_is_connected() {
        for from in BUILTINS {
            for to in BUILTINS {
                let (space, index) = connection_space(from, to).unwrap();
                assert_eq!(from.path()[index], space);
                assert_eq!(to.path()[index], space);
            }
        }
    }

    #[test]
    fn connection_is_the_deepest_shared_ancestor() {
        let (space, index) = connection_space(&spaces::LCH, &spaces::LAB).unwrap();
        assert_eq!(space, &spaces::LAB);
        assert_eq!(index, 2);

        let (space, _) = connection_space(&spaces::HWB, &spaces::P3).unwrap();
        assert_eq!(space, &spaces::XYZ_D65);

        let (space, _) = connection_space(&spaces::HSV, &spaces::HSL).unwrap();
        assert_eq!(space, &spaces::HSL);
    }

    #[test]
    fn disconnected_spaces_fail() {
        assert_eq!(
            convert(&ISLAND, &spaces::SRGB, Components(0.0, 0.0, 0.0)),
            Err(Error::NoConnectionSpace {
                from: "island",
                to: "srgb"
            })
        );
    }

    #[test]
    fn gamma_encoding_keeps_endpoints() {
        let linear = convert(&spaces::SRGB, &spaces::SRGB_LINEAR, Components(1.0, 0.0, 0.0));
        assert_eq!(linear, Ok(Components(1.0, 0.0, 0.0)));

        let half = Components(0.5, 0.5, 0.5);
        let linear = convert(&spaces::SRGB, &spaces::SRGB_LINEAR, half).unwrap();
        assert_component_eq!(linear.0, 0.21404114048223255);
    }

    #[test]
    fn same_space_is_unchanged() {
        let c = Components(0.1, Component::NAN, 3.0);
        let same = convert(&spaces::LCH, &spaces::LCH, c).unwrap();
        assert_eq!(same.0, 0.1);
        assert!(same.1.is_nan());
    }

    #[test]
    fn round_trip_between_all_spaces() {
        // A chromatic color well inside every gamut, to stay clear of hue
        // singularities.
        let srgb = Components(0.4, 0.5, 0.6);

        for a in BUILTINS {
            let start = convert(&spaces::SRGB, a, srgb).unwrap();
            for b in BUILTINS {
                let there = convert(a, b, start).unwrap();
                let back = convert(b, a, there).unwrap();
                for i in 0..3 {
                    let tolerance = 1.0e-3 * start[i].abs().max(1.0);
                    assert!(
                        (back[i] - start[i]).abs() < tolerance,
                        "{a} -> {b} -> {a}: {start:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn color_to_space() {
        let red = Color::new(&spaces::SRGB, 1.0, 0.0, 0.0, 0.5);
        let lab = red.to_space("lab").unwrap();
        assert_eq!(lab.space, &spaces::LAB);
        assert_eq!(lab.alpha(), Some(0.5));
        approx::assert_abs_diff_eq!(lab.components.0, 54.29, epsilon = 0.01);

        let back = lab.to_space(&spaces::SRGB).unwrap();
        assert_components_near!(back.components, [1.0, 0.0, 0.0], 1.0e-6);

        assert!(matches!(red.to_space("bogus"), Err(Error::UnknownSpace(_))));
    }

    #[test]
    fn gray_has_a_missing_hue() {
        let gray = Color::new(&spaces::SRGB, 0.5, 0.5, 0.5, 1.0);
        let hsl = gray.to_space(&spaces::HSL).unwrap();
        assert_eq!(hsl.flags, Flags::C0_IS_NONE);
        assert_eq!(hsl.c0(), None);

        // Missing components survive a conversion to the same space.
        assert_eq!(hsl.to_space("hsl").unwrap(), hsl);
    }

    #[test]
    fn get_and_set_all_coordinates() {
        let red = Color::new(&spaces::SRGB, 1.0, 0.0, 0.0, 1.0);
        let linear = red.coords_in("srgb-linear").unwrap();
        assert_eq!(linear, Components(1.0, 0.0, 0.0));

        let mid = 0.21404114048223255;
        let gray = red
            .with_coords_in(&spaces::SRGB_LINEAR, Components(mid, mid, mid))
            .unwrap();
        assert_eq!(gray.space, &spaces::SRGB);
        assert_components_near!(gray.components, [0.5, 0.5, 0.5], 1.0e-9);

        let hsl = Color::new(&spaces::HSL, None, 0.0, 50.0, 1.0);
        assert!(hsl.coords_in("hsl").unwrap().0.is_nan());
    }
}
