//! # Asset Cache Worker
//!
//! Owns the current cache bucket and drives the install/fetch/activate
//! lifecycle.
//!
//! The worker runs under an event-driven model: each intercepted request is
//! handled as an independent async task, and bucket refreshes triggered by a
//! fetch are fire-and-forget side effects that the response path never waits
//! for. Writes are last-writer-wins per URL, so in-flight refreshes for
//! different requests need no mutual exclusion.

use crate::config::WorkerConfig;
use crate::error::{OfflineError, Result};
use crate::policy::FetchPolicy;
use crate::store::{CacheBucket, CacheStore};
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Service-worker-shaped cache manager for static assets and audio streams.
pub struct AssetCacheWorker {
    config: WorkerConfig,
    store: Arc<dyn CacheStore>,
    http_client: Arc<dyn HttpClient>,
}

impl AssetCacheWorker {
    /// Create a new worker.
    ///
    /// # Arguments
    ///
    /// * `config` - Immutable worker configuration (bucket name, manifests)
    /// * `store` - Bucket storage backend
    /// * `http_client` - HTTP client used for all network fetches
    pub fn new(
        config: WorkerConfig,
        store: Arc<dyn CacheStore>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            config,
            store,
            http_client,
        }
    }

    /// The worker's immutable configuration.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Install step: open the current bucket and pre-warm it with the static
    /// asset manifest.
    ///
    /// Manifest entries are fetched with cache-bypass semantics so a stale
    /// intermediate cache cannot poison the bucket. The batch is
    /// all-or-nothing: one failed entry aborts the whole pre-warm. A failed
    /// pre-warm is logged and swallowed; installation still succeeds.
    #[instrument(skip(self))]
    pub async fn install(&self) -> Result<()> {
        self.config
            .validate()
            .map_err(OfflineError::InvalidConfig)?;

        info!(bucket = %self.config.cache_name, "Installing asset cache worker");

        let bucket = self.store.open(&self.config.cache_name).await?;

        match self.prewarm(bucket.as_ref()).await {
            Ok(()) => {
                info!(entries = bucket.len().await, "Cache bucket pre-warmed");
            }
            Err(e) => {
                warn!(error = %e, "Cache pre-warm failed");
            }
        }

        Ok(())
    }

    /// Fetch every manifest entry, then store the complete batch.
    ///
    /// Responses are only written after all fetches succeed, so a failure
    /// leaves the bucket exactly as it was.
    async fn prewarm(&self, bucket: &dyn CacheBucket) -> Result<()> {
        let fetches = self.config.precache_manifest.iter().map(|url| {
            let request = HttpRequest::get(url.as_str()).reload();
            let http_client = Arc::clone(&self.http_client);
            async move {
                let response = http_client.execute(request).await?;
                if !response.is_success() {
                    return Err(OfflineError::ResourceUnavailable(format!(
                        "HTTP {} pre-warming {}",
                        response.status, url
                    )));
                }
                Ok((url.as_str(), response))
            }
        });

        let responses = try_join_all(fetches).await?;

        for (url, response) in responses {
            bucket.store(url, response).await?;
        }

        Ok(())
    }

    /// Decide, per URL class, whether the response comes from the bucket,
    /// the network, or a race between them.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn handle_fetch(&self, request: HttpRequest) -> Result<HttpResponse> {
        match FetchPolicy::classify(&self.config, &request) {
            FetchPolicy::AudioStream => self.fetch_audio(request).await,
            FetchPolicy::NeverCache => {
                debug!("Never-cache URL, resolving from network");
                Ok(self.http_client.execute(request).await?)
            }
            FetchPolicy::StaticAsset => self.fetch_static(request).await,
            FetchPolicy::Passthrough => {
                debug!("Non-GET request, passing through");
                Ok(self.http_client.execute(request).await?)
            }
        }
    }

    /// Audio-stream policy: cache-primacy on a hit, network-primacy with
    /// bucket population on a miss.
    ///
    /// The network refresh starts before the cached reply is served, and its
    /// stored result is only observed by the *next* request for this URL.
    async fn fetch_audio(&self, request: HttpRequest) -> Result<HttpResponse> {
        let bucket = self.store.open(&self.config.cache_name).await?;
        let cached = bucket.lookup(&request.url).await?;

        let url = request.url.clone();
        let http_client = Arc::clone(&self.http_client);
        let refresh_bucket = Arc::clone(&bucket);
        let network = tokio::spawn(async move {
            let response = http_client.execute(request).await?;
            let stored = response.clone();
            // Fire-and-forget: the response path never waits on the store.
            tokio::spawn(async move {
                if let Err(e) = refresh_bucket.store(&url, stored).await {
                    warn!(%url, error = %e, "Failed to store audio response");
                }
            });
            Ok::<HttpResponse, OfflineError>(response)
        });

        match cached {
            Some(response) => {
                debug!("Audio cache hit, refresh continues in background");
                Ok(response)
            }
            None => {
                debug!("Audio cache miss, waiting on network");
                network
                    .await
                    .map_err(|e| OfflineError::Internal(format!("refresh task failed: {}", e)))?
            }
        }
    }

    /// Default static policy: stale-while-revalidate with the cached value
    /// preferred, network failures masked whenever a cached value exists.
    async fn fetch_static(&self, request: HttpRequest) -> Result<HttpResponse> {
        let bucket = self.store.open(&self.config.cache_name).await?;
        let cached = bucket.lookup(&request.url).await?;

        let url = request.url.clone();
        let http_client = Arc::clone(&self.http_client);
        let refresh_bucket = Arc::clone(&bucket);
        // Double-check the exclusion list before repopulating, in case the
        // request reached this policy with an excluded URL.
        let may_store = !self.config.is_never_cache(&request.url);
        let fallback = cached.clone();
        let network = tokio::spawn(async move {
            match http_client.execute(request).await {
                Ok(fetched) => {
                    if may_store {
                        let stored = fetched.clone();
                        tokio::spawn(async move {
                            if let Err(e) = refresh_bucket.store(&url, stored).await {
                                warn!(%url, error = %e, "Failed to refresh static asset");
                            }
                        });
                    }
                    Ok(fetched)
                }
                Err(e) => fallback.ok_or(OfflineError::Bridge(e)),
            }
        });

        match cached {
            Some(response) => {
                debug!("Static cache hit, revalidating in background");
                Ok(response)
            }
            None => {
                debug!("Static cache miss, waiting on network");
                network
                    .await
                    .map_err(|e| OfflineError::Internal(format!("refresh task failed: {}", e)))?
            }
        }
    }

    /// Activation step: delete every bucket whose name is not the current
    /// one.
    ///
    /// The host lifecycle guarantees this runs after install and after no
    /// previous-version fetches remain in flight.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> Result<()> {
        let keys = self.store.keys().await?;

        for key in keys {
            if key != self.config.cache_name {
                info!(bucket = %key, "Deleting stale cache bucket");
                self.store.delete(&key).await?;
            }
        }

        Ok(())
    }
}
