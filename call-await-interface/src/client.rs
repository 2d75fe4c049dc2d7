//! Call factory configuration.
//!
//! This module provides the options call implementations read when building their factories.

mod options;

pub use options::ClientOptions;
