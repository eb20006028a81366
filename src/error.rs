//! Error types for registry lookups, conversions and coordinate access.

use thiserror::Error;

/// Error type for all fallible operations in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A different color space is already registered under the id or alias.
    #[error("duplicate registration: {0:?} is already bound to another color space")]
    DuplicateRegistration(String),

    /// No color space is registered under the given id or alias.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),

    /// The two color spaces share no ancestor, which means the registry is
    /// malformed.
    #[error("no connection space between {from} and {to}")]
    NoConnectionSpace {
        /// Id of the source color space.
        from: &'static str,
        /// Id of the destination color space.
        to: &'static str,
    },

    /// A relative coordinate reference was used without a working space.
    #[error("ambiguous coordinate reference {0:?}: no color space given")]
    AmbiguousReference(String),

    /// The color space has no coordinate matching the reference.
    #[error("unknown coordinate {coord:?} in {space}, expected one of: {valid}")]
    UnknownCoordinate {
        /// The coordinate that was requested.
        coord: String,
        /// Id of the color space that was searched.
        space: &'static str,
        /// Comma separated list of the valid coordinate ids.
        valid: String,
    },

    /// The global registry was already built or installed.
    #[error("the global color space registry is already initialized")]
    AlreadyInitialized,
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
