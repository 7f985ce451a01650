//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the offline core and
//! platform-specific implementations. Each trait represents a capability the
//! core requires but that must be provided differently per host (desktop,
//! embedded webview, test harness).
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async one-shot HTTP operations with
//!   cache-bypass (reload) semantics
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Platform implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Include error context (e.g., URLs, network status)
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks. Implementations must ensure thread safety.

pub mod error;
pub mod http;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{FetchMode, HttpClient, HttpMethod, HttpRequest, HttpResponse};
