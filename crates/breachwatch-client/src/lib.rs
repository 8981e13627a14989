//! Breachwatch Client - async client for the Have I Been Pwned v3 API.
//!
//! Four read operations share one request path: compose the URL, attach the
//! `User-Agent` and `hibp-api-key` headers, send a GET, classify the status
//! and decode the body.
//!
//! | Operation | Endpoint | 404 yields |
//! |---|---|---|
//! | [`LookupClient::search_by_account`] | `breachedaccount/{account}` | empty `Vec` |
//! | [`LookupClient::list_all_breaches`] | `breaches/` | empty `Vec` |
//! | [`LookupClient::get_breach_by_name`] | `breach/{name}` | zero-value record |
//! | [`LookupClient::pastes_by_account`] | `pasteaccount/{email}` | empty `Vec` |
//!
//! # Example
//!
//! ```rust,no_run
//! use breachwatch_client::LookupClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads HIBP_API_KEY and the optional config file
//! let client = LookupClient::from_env()?;
//!
//! let breaches = client
//!     .search_by_account("test@example.com", "", false, false)
//!     .await?;
//! for breach in &breaches {
//!     println!("{}: {} accounts", breach.name, breach.pwn_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is retried or cached. A 404 is an empty result, never an error;
//! every other failure surfaces as a [`LookupError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod error;
pub mod request;
pub mod status;

// Re-export commonly used types
pub use breachwatch_core::{dedup_by_name, BreachRecord, ClientConfig, PasteRecord};
pub use client::{LookupClient, API_KEY_HEADER};
pub use error::{LookupError, Result};
pub use request::{LookupRequest, Operation};
pub use status::{classify, StatusClass};
