//! Coordinate references and their resolution.
//!
//! A coordinate can be addressed by id or display name (`"c"`, `"Chroma"`),
//! by its position (`1`, `"1"`), either relative to a working space or
//! absolute with a space in front (`"lch.c"`, `("lch", 1)`). All of them go
//! through [`Registry::resolve_coordinate`].

use std::fmt;

use crate::color::{Color, Component};
use crate::error::{Error, Result};
use crate::registry::{Registry, SpaceRef};
use crate::space::{ColorSpace, Coord};

/// Names one coordinate within a space.
#[derive(Clone, Copy, Debug)]
pub enum CoordKey<'a> {
    /// An id or display name, matched without regard to case.
    Name(&'a str),
    /// The position of the coordinate in declaration order.
    Index(usize),
}

impl<'a> From<&'a str> for CoordKey<'a> {
    fn from(value: &'a str) -> Self {
        match value.parse() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(value),
        }
    }
}

impl From<usize> for CoordKey<'_> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for CoordKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A reference to a coordinate, with or without the space it belongs to.
#[derive(Clone, Copy, Debug)]
pub enum CoordRef<'a> {
    /// Resolved against a working space.
    Relative(CoordKey<'a>),
    /// Names its own space.
    Absolute(SpaceRef<'a>, CoordKey<'a>),
}

impl<'a> From<&'a str> for CoordRef<'a> {
    /// `"space.coord"` is absolute, anything without a dot is relative.
    fn from(value: &'a str) -> Self {
        match value.split_once('.') {
            Some((space, key)) => Self::Absolute(SpaceRef::Id(space), key.into()),
            None => Self::Relative(value.into()),
        }
    }
}

impl From<usize> for CoordRef<'_> {
    fn from(value: usize) -> Self {
        Self::Relative(CoordKey::Index(value))
    }
}

impl<'a, S, K> From<(S, K)> for CoordRef<'a>
where
    S: Into<SpaceRef<'a>>,
    K: Into<CoordKey<'a>>,
{
    fn from((space, key): (S, K)) -> Self {
        Self::Absolute(space.into(), key.into())
    }
}

impl From<ResolvedCoord> for CoordRef<'_> {
    fn from(coord: ResolvedCoord) -> Self {
        Self::Absolute(SpaceRef::Space(coord.space), CoordKey::Index(coord.index))
    }
}

/// A coordinate reference resolved to a space and a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCoord {
    /// The space the coordinate belongs to.
    pub space: &'static ColorSpace,
    /// The id of the coordinate.
    pub id: &'static str,
    /// The position of the coordinate in the space.
    pub index: usize,
    /// Metadata of the coordinate.
    pub meta: Coord,
}

impl Registry {
    /// Resolve a coordinate reference. Relative references are resolved
    /// against `working`, absolute ones against the space they name.
    pub fn resolve_coordinate<'a>(
        &self,
        coord: impl Into<CoordRef<'a>>,
        working: Option<&'static ColorSpace>,
    ) -> Result<ResolvedCoord> {
        let (space, key) = match coord.into() {
            CoordRef::Relative(key) => {
                let space = working.ok_or_else(|| Error::AmbiguousReference(key.to_string()))?;
                (space, key)
            }
            CoordRef::Absolute(space, key) => (self.get(space)?, key),
        };

        let index = match key {
            CoordKey::Index(index) => Some(index).filter(|i| *i < 3),
            CoordKey::Name(name) => space.coord_index(name),
        };

        let Some(index) = index else {
            let valid: Vec<_> = space.coords().iter().map(|c| c.id).collect();
            return Err(Error::UnknownCoordinate {
                coord: key.to_string(),
                space: space.id(),
                valid: valid.join(", "),
            });
        };

        let meta = space.coords()[index];
        Ok(ResolvedCoord {
            space,
            id: meta.id,
            index,
            meta,
        })
    }
}

/// Resolve a coordinate reference against the global registry.
pub fn resolve_coordinate<'a>(
    coord: impl Into<CoordRef<'a>>,
    working: Option<&'static ColorSpace>,
) -> Result<ResolvedCoord> {
    Registry::global().resolve_coordinate(coord, working)
}

impl Color {
    /// Read a single coordinate. Relative references are read from the
    /// color's own space. Returns `None` if the coordinate is missing or
    /// powerless.
    pub fn get<'a>(&self, coord: impl Into<CoordRef<'a>>) -> Result<Option<Component>> {
        let coord = resolve_coordinate(coord, Some(self.space))?;
        if coord.space == self.space {
            return Ok(self.coord(coord.index));
        }

        let value = self.coords_in(coord.space)?[coord.index];
        Ok(Some(value).filter(|v| !v.is_nan()))
    }

    /// Return a copy of this color with one coordinate replaced. When the
    /// reference names another space the color makes a round trip through
    /// that space. A `NaN` value marks the coordinate as missing.
    pub fn set<'a>(&self, coord: impl Into<CoordRef<'a>>, value: Component) -> Result<Self> {
        let coord = resolve_coordinate(coord, Some(self.space))?;
        if coord.space == self.space {
            let mut components = self.components_or_nan();
            components[coord.index] = value;
            return Ok(self.with_components(self.space, components));
        }

        let mut components = self.coords_in(coord.space)?;
        components[coord.index] = value;
        self.with_coords_in(coord.space, components)
    }
}
