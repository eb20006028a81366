//! Color space nodes and the coordinate metadata they carry.
//!
//! Every color space is a node in a tree. A node that is not a root has a
//! [`Base`] that holds its parent and the pair of functions that move
//! components to and from that parent. Nodes are `'static` values that are
//! never mutated after they are created.

use std::fmt;
use std::sync::OnceLock;

use crate::color::{Component, Components};
use crate::spaces::xyz::D65;

/// The kind of a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordKind {
    /// A plain number.
    Linear,
    /// An angle in degrees, like a hue. Angles wrap around and are never
    /// checked against a range.
    Angle,
}

/// Metadata describing one of the three coordinates of a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    /// Short id of the coordinate, for example `"c"`.
    pub id: &'static str,
    /// Display name of the coordinate, for example `"Chroma"`.
    pub name: &'static str,
    /// Whether the coordinate is a plain number or an angle.
    pub kind: CoordKind,
    /// The limits of the gamut, if the coordinate has any.
    pub range: Option<(Component, Component)>,
    /// The range values usually fall into. Only informational, it never
    /// bounds the gamut.
    pub ref_range: Option<(Component, Component)>,
}

impl Coord {
    /// A linear coordinate without any range.
    pub const fn linear(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            kind: CoordKind::Linear,
            range: None,
            ref_range: None,
        }
    }

    /// An angle coordinate with a reference range of `[0, 360]`.
    pub const fn angle(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            kind: CoordKind::Angle,
            range: None,
            ref_range: Some((0.0, 360.0)),
        }
    }

    /// Set the gamut limits of the coordinate.
    pub const fn range(self, min: Component, max: Component) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }

    /// Set the informational range of the coordinate.
    pub const fn ref_range(self, min: Component, max: Component) -> Self {
        Self {
            ref_range: Some((min, max)),
            ..self
        }
    }

    /// The lower bound of the range, falling back to the reference range.
    pub fn min(&self) -> Option<Component> {
        self.range.or(self.ref_range).map(|(min, _)| min)
    }
}

/// The parent of a color space along with the transforms to move components
/// between the two.
#[derive(Clone, Copy)]
pub struct Base {
    /// The parent color space.
    pub space: &'static ColorSpace,
    /// Convert components of the child into components of the parent.
    pub to_base: fn(Components) -> Components,
    /// Convert components of the parent into components of the child.
    pub from_base: fn(Components) -> Components,
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base")
            .field("space", &self.space.id())
            .finish_non_exhaustive()
    }
}

/// Which space decides whether components are in gamut.
#[derive(Clone, Copy, Debug)]
pub enum GamutSpace {
    /// Polar spaces use their base, any other space uses itself.
    Default,
    /// Always check against the ranges of this space.
    Own,
    /// Check against the ranges of another space.
    Of(&'static ColorSpace),
}

/// Whether the components of a space are relative to a display or to the
/// scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Referred {
    /// Display referred.
    Display,
    /// Scene referred.
    Scene,
}

/// Everything needed to create a [`ColorSpace`].
#[derive(Clone, Copy, Debug)]
pub struct SpaceDef {
    /// Unique id of the space.
    pub id: &'static str,
    /// Display name of the space.
    pub name: &'static str,
    /// Other ids the space can be found by.
    pub aliases: &'static [&'static str],
    /// The parent of the space, if it is not a root.
    pub base: Option<Base>,
    /// The metadata of the three coordinates.
    pub coords: [Coord; 3],
    /// The white point, if it differs from the base.
    pub white: Option<Components>,
    /// Which space decides gamut membership.
    pub gamut: GamutSpace,
    /// Display or scene referred.
    pub referred: Referred,
}

impl SpaceDef {
    /// A root space with no aliases, the default gamut space and display
    /// referred components.
    pub const fn new(id: &'static str, name: &'static str, coords: [Coord; 3]) -> Self {
        Self {
            id,
            name,
            aliases: &[],
            base: None,
            coords,
            white: None,
            gamut: GamutSpace::Default,
            referred: Referred::Display,
        }
    }

    /// Derive the space from `space` with the given transforms.
    pub const fn base(
        self,
        space: &'static ColorSpace,
        to_base: fn(Components) -> Components,
        from_base: fn(Components) -> Components,
    ) -> Self {
        Self {
            base: Some(Base {
                space,
                to_base,
                from_base,
            }),
            ..self
        }
    }

    /// Set the aliases.
    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Set the white point.
    pub const fn white(self, white: Components) -> Self {
        Self {
            white: Some(white),
            ..self
        }
    }

    /// Set the gamut space.
    pub const fn gamut(self, gamut: GamutSpace) -> Self {
        Self { gamut, ..self }
    }

    /// Mark the space as scene referred.
    pub const fn scene_referred(self) -> Self {
        Self {
            referred: Referred::Scene,
            ..self
        }
    }
}

/// A node in the tree of color spaces.
pub struct ColorSpace {
    def: SpaceDef,
    path: OnceLock<Vec<&'static ColorSpace>>,
}

impl ColorSpace {
    /// Create a new color space node.
    pub const fn new(def: SpaceDef) -> Self {
        Self {
            def,
            path: OnceLock::new(),
        }
    }

    /// The unique id.
    pub fn id(&self) -> &'static str {
        self.def.id
    }

    /// The display name.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// Other ids this space is registered under.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.def.aliases
    }

    /// The parent space, if any.
    pub fn base(&self) -> Option<&'static ColorSpace> {
        self.def.base.map(|base| base.space)
    }

    /// Metadata of the three coordinates, in declaration order.
    pub fn coords(&self) -> &[Coord; 3] {
        &self.def.coords
    }

    /// Whether the components are display or scene referred.
    pub fn referred(&self) -> Referred {
        self.def.referred
    }

    /// A space with an angle coordinate.
    pub fn is_polar(&self) -> bool {
        self.def
            .coords
            .iter()
            .any(|coord| coord.kind == CoordKind::Angle)
    }

    /// A space where no coordinate declares a range. Such a space holds any
    /// color.
    pub fn is_unbounded(&self) -> bool {
        self.def.coords.iter().all(|coord| coord.range.is_none())
    }

    /// The white point, inherited from the base when the space does not set
    /// one.
    pub fn white(&self) -> Components {
        match (self.def.white, self.base()) {
            (Some(white), _) => white,
            (None, Some(base)) => base.white(),
            (None, None) => D65,
        }
    }

    /// The space whose ranges decide gamut membership for this space.
    pub fn gamut_space(&'static self) -> &'static ColorSpace {
        match self.def.gamut {
            GamutSpace::Own => self,
            GamutSpace::Of(space) => space,
            GamutSpace::Default => match self.base() {
                Some(base) if self.is_polar() => base,
                _ => self,
            },
        }
    }

    /// All spaces from the root of the tree down to this space.
    pub fn path(&'static self) -> &[&'static ColorSpace] {
        self.path.get_or_init(|| {
            let mut path = vec![self];
            let mut current = self.base();
            while let Some(space) = current {
                if path.contains(&space) {
                    break;
                }
                path.push(space);
                current = space.base();
            }
            path.reverse();
            path
        })
    }

    /// The lower bound of every coordinate, or `0` where there is none.
    pub fn min_coords(&self) -> Components {
        let [c0, c1, c2] = self.def.coords.map(|coord| coord.min().unwrap_or(0.0));
        Components(c0, c1, c2)
    }

    /// Move components from this space to its base. A root returns them
    /// unchanged.
    pub fn to_base(&self, components: Components) -> Components {
        match self.def.base {
            Some(base) => (base.to_base)(components),
            None => components,
        }
    }

    /// Move components from the base into this space. A root returns them
    /// unchanged.
    pub fn from_base(&self, components: Components) -> Components {
        match self.def.base {
            Some(base) => (base.from_base)(components),
            None => components,
        }
    }

    /// Find the index of a coordinate by id, then by display name, ignoring
    /// case.
    pub fn coord_index(&self, name: &str) -> Option<usize> {
        let coords = &self.def.coords;
        coords
            .iter()
            .position(|coord| coord.id.eq_ignore_ascii_case(name))
            .or_else(|| {
                coords
                    .iter()
                    .position(|coord| coord.name.eq_ignore_ascii_case(name))
            })
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.def.id == other.def.id
    }
}

impl Eq for ColorSpace {}

impl std::hash::Hash for ColorSpace {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.def.id.hash(state);
    }
}

impl fmt::Debug for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColorSpace").field(&self.def.id).finish()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.def.name, self.def.id)
    }
}
