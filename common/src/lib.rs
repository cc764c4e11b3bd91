//! Shared building blocks for the kennel workspace: configuration, the
//! register error type and name normalisation.

pub mod config;
pub mod error;
pub mod text;
