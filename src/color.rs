//! A [`Color`] represents a color that was specified in any of the registered
//! color spaces.

use std::ops::{Index, IndexMut, Sub};

use bitflags::bitflags;

use crate::space::ColorSpace;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return new components where each component is computed from its index
    /// and value.
    pub fn map_indexed(&self, f: impl Fn(usize, Component) -> Component) -> Self {
        Self(f(0, self.0), f(1, self.1), f(2, self.2))
    }

    /// Return true if the predicate holds for every component.
    pub fn all(&self, f: impl Fn(usize, Component) -> bool) -> bool {
        f(0, self.0) && f(1, self.1) && f(2, self.2)
    }

    /// The components as an array.
    pub fn to_array(self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        value.to_array()
    }
}

impl Index<usize> for Components {
    type Output = Component;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            _ => panic!("component index {index} out of range for three components"),
        }
    }
}

impl IndexMut<usize> for Components {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.0,
            1 => &mut self.1,
            2 => &mut self.2,
            _ => panic!("component index {index} out of range for three components"),
        }
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

impl Flags {
    /// The flag marking the color component at `index` as missing.
    pub fn component(index: usize) -> Self {
        match index {
            0 => Self::C0_IS_NONE,
            1 => Self::C1_IS_NONE,
            2 => Self::C2_IS_NONE,
            _ => Self::empty(),
        }
    }

    /// Only the flags that describe the three color components.
    pub fn components(self) -> Self {
        self & (Self::C0_IS_NONE | Self::C1_IS_NONE | Self::C2_IS_NONE)
    }
}

/// A color in one of the registered color spaces.
///
/// A color is a plain value: every operation on it returns a new color and
/// leaves the original untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The alpha component of the color.
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
    /// The color space in which the components are set.
    pub space: &'static ColorSpace,
}

impl Color {
    /// Create a new [`Color`]. Each color or alpha component can take values
    /// that can be converted into a [`ComponentDetails`]. This automates the
    /// process of settings values to missing. For example:
    /// ```rust
    /// use chromagraph::{spaces, Color};
    /// let c = Color::new(&spaces::SRGB, None, None, None, 1.0);
    /// assert!(c.c0().is_none());
    /// ```
    /// will set all the color components to missing.
    pub fn new(
        space: &'static ColorSpace,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let c0 = c0.into().value_and_flag(&mut flags, Flags::C0_IS_NONE);
        let c1 = c1.into().value_and_flag(&mut flags, Flags::C1_IS_NONE);
        let c2 = c2.into().value_and_flag(&mut flags, Flags::C2_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Create an opaque color from plain components.
    pub fn from_components(space: &'static ColorSpace, components: Components) -> Self {
        Self {
            components,
            alpha: 1.0,
            flags: Flags::empty(),
            space,
        }
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        self.coord(0)
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        self.coord(1)
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        self.coord(2)
    }

    /// Return the color component at `index`, or `None` if it is missing.
    pub fn coord(&self, index: usize) -> Option<Component> {
        if index > 2 || self.flags.contains(Flags::component(index)) {
            None
        } else {
            Some(self.components[index])
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// The components with every missing component replaced by zero, which
    /// is what any arithmetic on the color has to work with.
    pub fn resolved_components(&self) -> Components {
        self.components
            .map_indexed(|i, c| if self.flags.contains(Flags::component(i)) { 0.0 } else { c })
    }

    /// The components with every missing component set to `NaN`.
    pub(crate) fn components_or_nan(&self) -> Components {
        self.components.map_indexed(|i, c| {
            if self.flags.contains(Flags::component(i)) {
                Component::NAN
            } else {
                c
            }
        })
    }

    /// Return a copy of this color in `space` with the given components and
    /// the same alpha. Components that are `NaN` are powerless and will be
    /// marked as missing.
    pub fn with_components(&self, space: &'static ColorSpace, components: Components) -> Self {
        let mut flags = self.flags & Flags::ALPHA_IS_NONE;
        for i in 0..3 {
            if components[i].is_nan() {
                flags |= Flags::component(i);
            }
        }

        Self {
            components: components.map(|c| if c.is_nan() { 0.0 } else { c }),
            alpha: self.alpha,
            flags,
            space,
        }
    }

    /// Return a copy of this color with a different alpha.
    pub fn with_alpha(&self, alpha: impl Into<ComponentDetails>) -> Self {
        let mut flags = self.flags - Flags::ALPHA_IS_NONE;
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);
        Self {
            alpha,
            flags,
            ..*self
        }
    }
}

/// A struct that holds details about a component passed to any of the `new`
/// functions for colors. Any components that can be passed implements
/// a `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(&spaces::SRGB, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.flags, Flags::empty());
        assert_eq!(c.space, &spaces::SRGB);

        let c = Color::new(&spaces::SRGB, 0.1, 0.2, None, 0.4);
        assert_eq!(c.components.2, 0.0);
        assert_eq!(c.alpha, 0.4);
        assert_eq!(c.flags, Flags::C2_IS_NONE);
        assert_eq!(c.c2(), None);

        let c = Color::new(&spaces::SRGB, 0.1, 0.2, 0.3, None);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha, 0.0);
        assert_eq!(c.flags, Flags::ALPHA_IS_NONE);
        assert_eq!(c.alpha(), None);
    }

    #[test]
    fn test_component_details() {
        let cd = ComponentDetails::from(10.0);
        assert_eq!(cd.value, 10.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Component::NAN);
        assert!(cd.value.is_nan());
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Some(20.0));
        assert_eq!(cd.value, 20.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(None);
        assert_eq!(cd.value, 0.0);
        assert!(cd.is_none);
    }

    #[test]
    fn missing_components_resolve_to_zero() {
        let c = Color::new(&spaces::LCH, 50.0, None, None, 1.0);
        assert_eq!(c.resolved_components(), Components(50.0, 0.0, 0.0));
        assert_eq!(c.coord(0), Some(50.0));
        assert_eq!(c.coord(1), None);
        assert_eq!(c.coord(3), None);
    }

    #[test]
    fn nan_components_become_missing() {
        let c = Color::new(&spaces::SRGB, 0.5, 0.5, 0.5, None);
        let lch = c.with_components(&spaces::LCH, Components(53.0, 0.0, Component::NAN));
        assert_eq!(lch.flags, Flags::C2_IS_NONE | Flags::ALPHA_IS_NONE);
        assert_eq!(lch.components.2, 0.0);
        assert_eq!(lch.space, &spaces::LCH);
    }

    #[test]
    fn replace_alpha() {
        let c = Color::new(&spaces::SRGB, 0.1, 0.2, 0.3, None);
        let c = c.with_alpha(0.5);
        assert_eq!(c.alpha(), Some(0.5));
        assert!(c.flags.is_empty());
    }

    #[test]
    fn index_components() {
        let mut c = Components(1.0, 2.0, 3.0);
        assert_eq!(c[1], 2.0);
        c[2] = 4.0;
        assert_eq!(c, Components::from([1.0, 2.0, 4.0]));
        assert_eq!(c - Components(1.0, 1.0, 1.0), Components(0.0, 1.0, 3.0));
    }
}
