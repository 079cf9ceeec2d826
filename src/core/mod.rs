//! Core components of the `yfstatement` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - The statement table model shared by the provider and the report.
//! - Internal networking and authentication logic.

/// The main client (`YfClient`), builder, and configuration.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Statement table model (`StatementTable`) and reporting frequency.
pub mod models;
/// Service trait abstracting the statement provider.
pub mod services;
pub(crate) mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
pub use models::{Frequency, StatementRow, StatementTable};
pub use services::StatementService;
