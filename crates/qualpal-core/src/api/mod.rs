//! Public API for the qualpal-core crate.
//!
//! This module provides the high-level API: the [`Qualpal`] builder and the
//! [`QualpalError`] unified error type.

mod builder;
mod error;

pub use builder::{Input, Qualpal, DEFAULT_COLORSPACE_SIZE};
pub use error::{ConfigError, ErrorKind, QualpalError};
