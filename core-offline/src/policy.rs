//! Per-request caching policy selection.

use crate::config::WorkerConfig;
use bridge_traits::http::{HttpMethod, HttpRequest};

/// Caching behavior applied to a request, decided before any bucket access.
///
/// Every request resolves to exactly one policy. Classification order
/// matters: the audio rule and the exclusion list are checked before the
/// method filter, so a non-GET request to an excluded URL is still
/// never-cache rather than passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve cached bytes if present; refresh the bucket in the background.
    AudioStream,

    /// Always resolve from the network; the bucket is never touched.
    NeverCache,

    /// Stale-while-revalidate for GET requests to static assets.
    StaticAsset,

    /// Non-GET requests are forwarded untouched.
    Passthrough,
}

impl FetchPolicy {
    /// Classify a request against the worker configuration.
    pub fn classify(config: &WorkerConfig, request: &HttpRequest) -> Self {
        if config.is_audio_stream(&request.url) {
            return FetchPolicy::AudioStream;
        }

        if config.is_never_cache(&request.url) {
            return FetchPolicy::NeverCache;
        }

        if request.method != HttpMethod::Get {
            return FetchPolicy::Passthrough;
        }

        FetchPolicy::StaticAsset
    }
}
