//! Breachwatch Core - Foundation crate for the Breachwatch lookup client.
//!
//! This crate provides the record types returned by the Have I Been Pwned
//! API and the configuration the client is built from.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//! - [`records`] - Breach and paste records as they appear on the wire
//!
//! # Example
//!
//! ```rust
//! use breachwatch_core::ClientConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default().with_api_key("00000000000000000000000000000000");
//! config.validate()?;
//! assert_eq!(config.timeout_secs, 30);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod records;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, ConfigResult};
pub use records::{dedup_by_name, BreachRecord, PasteRecord};
