//! Qualpal - distinct color palettes
//!
//! Command-line front end for `qualpal-core`: request files, argument
//! parsing and text output.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
