//! Core components of the `marketlens` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`LensClient`] and its builder.
//! - The primary [`LensError`] type.
//! - Internal networking helpers shared by the endpoint modules.

/// The main client (`LensClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`LensError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::LensClient`
pub use client::{LensClient, LensClientBuilder};
pub use error::LensError;
