//! # Offline Asset Cache Module
//!
//! Service-worker-shaped offline caching for the player's static assets and
//! audio streams.
//!
//! ## Overview
//!
//! The worker owns a single named cache bucket per release version. On
//! install it pre-warms the bucket with a fixed manifest of static assets;
//! on every fetch it decides, per URL class, whether the response comes from
//! the bucket, the network, or a race between them; on activation it prunes
//! bucket versions left behind by earlier releases.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │     AssetCacheWorker                   │
//! │  - install()                           │
//! │  - handle_fetch()                      │
//! │  - activate()                          │
//! └────────┬───────────────────────────────┘
//!          │
//!          ├──> FetchPolicy (URL classification)
//!          ├──> CacheStore / CacheBucket (Storage)
//!          └──> HttpClient (Network)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_offline::{AssetCacheWorker, WorkerConfig};
//!
//! # async fn example(worker: &AssetCacheWorker) -> Result<(), Box<dyn std::error::Error>> {
//! // Once per version transition, in host lifecycle order:
//! worker.install().await?;
//! worker.activate().await?;
//!
//! // Then for every outgoing resource request:
//! let response = worker.handle_fetch(request).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod policy;
pub mod store;
pub mod worker;

// Re-export commonly used types
pub use config::WorkerConfig;
pub use error::{OfflineError, Result};
pub use policy::FetchPolicy;
pub use store::{CacheBucket, CacheStore, MemoryCacheStore};
pub use worker::AssetCacheWorker;
