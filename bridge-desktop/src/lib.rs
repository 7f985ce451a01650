//! # Desktop Bridge Implementations
//!
//! Native implementations of the `bridge-traits` contracts for desktop hosts.
//!
//! Currently provides:
//! - [`ReqwestHttpClient`] - HTTP client backed by reqwest with connection
//!   pooling and TLS support

pub mod http;

pub use http::ReqwestHttpClient;
