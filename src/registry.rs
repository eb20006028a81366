//! The registry that maps ids and aliases to color spaces.
//!
//! A [`Registry`] is built once, usually at start-up, and only read
//! afterwards. [`Registry::global`] holds the process wide instance, which
//! is built from the built-in spaces unless a caller installs its own with
//! [`Registry::install`] first.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::space::ColorSpace;
use crate::spaces::BUILTINS;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A reference to a color space, either by id or alias, or to the node
/// itself.
#[derive(Clone, Copy, Debug)]
pub enum SpaceRef<'a> {
    /// An id or alias, matched without regard to case.
    Id(&'a str),
    /// The node itself.
    Space(&'static ColorSpace),
}

impl<'a> From<&'a str> for SpaceRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Id(value)
    }
}

impl<'a> From<&'a String> for SpaceRef<'a> {
    fn from(value: &'a String) -> Self {
        Self::Id(value.as_str())
    }
}

impl From<&'static ColorSpace> for SpaceRef<'_> {
    fn from(value: &'static ColorSpace) -> Self {
        Self::Space(value)
    }
}

/// Maps ids and aliases to color spaces.
#[derive(Default)]
pub struct Registry {
    by_id: HashMap<String, &'static ColorSpace>,
    spaces: Vec<&'static ColorSpace>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding all the built-in color spaces.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for space in BUILTINS {
            registry.register(space)?;
        }
        debug!(spaces = registry.spaces.len(), "built color space registry");
        Ok(registry)
    }

    /// Returns the global registry.
    ///
    /// Unless another registry was installed with [`Registry::install`], the
    /// first call builds it from the built-in color spaces.
    ///
    /// # Panics
    ///
    /// Panics if the table of built-in spaces binds one id to two different
    /// spaces.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| match Self::with_builtins() {
            Ok(registry) => registry,
            Err(err) => panic!("malformed built-in color space table: {err}"),
        })
    }

    /// Install this registry as the global one. Fails if the global registry
    /// was already built or installed.
    pub fn install(self) -> Result<()> {
        let spaces = self.spaces.len();
        GLOBAL.set(self).map_err(|_| Error::AlreadyInitialized)?;
        debug!(spaces, "installed global color space registry");
        Ok(())
    }

    /// Register a color space under its id and all of its aliases.
    ///
    /// Registering the same node twice is a no-op. Fails without changing
    /// the registry if any of the keys is bound to a different node.
    pub fn register(&mut self, space: &'static ColorSpace) -> Result<()> {
        let keys: Vec<String> = std::iter::once(space.id())
            .chain(space.aliases().iter().copied())
            .map(str::to_ascii_lowercase)
            .collect();

        for key in &keys {
            if let Some(existing) = self.by_id.get(key) {
                if !std::ptr::eq(*existing, space) {
                    return Err(Error::DuplicateRegistration(key.clone()));
                }
            }
        }

        for key in keys {
            self.by_id.insert(key, space);
        }

        if !self.spaces.iter().any(|s| std::ptr::eq(*s, space)) {
            self.spaces.push(space);
        }

        Ok(())
    }

    /// Look up a color space. A node passed in is returned as is.
    pub fn get<'a>(&self, space: impl Into<SpaceRef<'a>>) -> Result<&'static ColorSpace> {
        match space.into() {
            SpaceRef::Space(space) => Ok(space),
            SpaceRef::Id(id) => self
                .by_id
                .get(&id.to_ascii_lowercase())
                .copied()
                .ok_or_else(|| Error::UnknownSpace(id.to_string())),
        }
    }

    /// All registered color spaces in registration order. Aliases are not
    /// repeated.
    pub fn all(&self) -> &[&'static ColorSpace] {
        &self.spaces
    }
}

/// Look up a color space in the global registry.
pub fn get<'a>(space: impl Into<SpaceRef<'a>>) -> Result<&'static ColorSpace> {
    Registry::global().get(space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{Coord, SpaceDef};
    use crate::spaces::{self, xyz::XYZ_D65};

    static OTHER_SRGB: ColorSpace = ColorSpace::new(SpaceDef::new(
        "srgb",
        "Another sRGB",
        [
            Coord::linear("r", "Red"),
            Coord::linear("g", "Green"),
            Coord::linear("b", "Blue"),
        ],
    ));

    #[test]
    fn lookup_by_id_and_alias() {
        let registry = Registry::with_builtins().unwrap();
        assert_eq!(registry.get("srgb").unwrap(), &spaces::SRGB);
        assert_eq!(registry.get("sRGB").unwrap(), &spaces::SRGB);
        assert_eq!(registry.get("display-p3").unwrap(), &spaces::P3);
        assert_eq!(registry.get("xyz").unwrap(), &XYZ_D65);
        assert_eq!(registry.get(&spaces::LCH).unwrap(), &spaces::LCH);
        assert_eq!(registry.all().len(), spaces::BUILTINS.len());
    }

    #[test]
    fn unknown_space() {
        let registry = Registry::with_builtins().unwrap();
        assert_eq!(
            registry.get("bogus"),
            Err(Error::UnknownSpace("bogus".to_string()))
        );
    }

    #[test]
    fn duplicate_registration() {
        let mut registry = Registry::with_builtins().unwrap();

        // The same node again is fine.
        registry.register(&spaces::SRGB).unwrap();
        assert_eq!(registry.all().len(), spaces::BUILTINS.len());

        assert_eq!(
            registry.register(&OTHER_SRGB),
            Err(Error::DuplicateRegistration("srgb".to_string()))
        );
        assert_eq!(registry.get("srgb").unwrap().name(), "sRGB");
    }

    #[test]
    fn global_registry_cannot_be_replaced() {
        assert_eq!(get("lab").unwrap(), &spaces::LAB);
        assert_eq!(Registry::new().install(), Err(Error::AlreadyInitialized));
    }
}
