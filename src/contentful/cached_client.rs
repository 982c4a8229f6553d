//! Cached content client that wraps ContentfulClient with a response cache.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::cache::{Clock, ResponseCache, SystemClock};
use crate::config::ContentfulConfig;

use super::api_types::{decode, Entry, EntryCollection, PageEntry};
use super::client::{ContentfulClient, EntryQuery};
use super::error::{ContentError, ContentResult};

const ORDER_FIELD: &str = "fields.order";

/// Content client with transparent response caching.
///
/// Every request goes through the cache keyed by its full URL. Clones share
/// one cache, so a page initializer and all of its renderers reuse payloads.
#[derive(Clone)]
pub struct ContentClient {
  inner: ContentfulClient,
  cache: ResponseCache<Value>,
  configured: bool,
}

impl ContentClient {
  /// Create a client reading the wall clock.
  pub fn new(config: &ContentfulConfig) -> ContentResult<Self> {
    Self::with_clock(config, Arc::new(SystemClock))
  }

  pub fn with_clock(config: &ContentfulConfig, clock: Arc<dyn Clock>) -> ContentResult<Self> {
    let inner = ContentfulClient::new(config)?;
    let ttl = i64::try_from(config.cache_ttl_secs)
      .ok()
      .and_then(chrono::Duration::try_seconds)
      .ok_or(ContentError::InvalidTtl(config.cache_ttl_secs))?;
    let cache = ResponseCache::with_clock(clock).with_ttl(ttl);

    Ok(Self {
      inner,
      cache,
      configured: config.is_configured(),
    })
  }

  /// Whether real credentials are present. When false nothing should be fetched.
  pub fn is_configured(&self) -> bool {
    self.configured
  }

  /// Fetch a path such as `["entries"]` as JSON, reusing a fresh cached
  /// payload when there is one.
  pub async fn fetch(&self, segments: &[&str], query: &EntryQuery) -> ContentResult<Value> {
    let endpoint = segments.join("/");
    let result: ContentResult<Value> = async {
      let url = self.inner.request_url(segments, query)?;
      let cached = self
        .cache
        .fetch(url.as_str(), || self.inner.get_json(&url))
        .await?;
      debug!(endpoint = %endpoint, source = ?cached.source, fetched_at = %cached.fetched_at, "content payload");
      Ok(cached.data)
    }
    .await;

    if let Err(e) = &result {
      error!(endpoint = %endpoint, error = %e, "content fetch failed");
    }
    result
  }

  /// Get entries of one content model.
  pub async fn get_entries(
    &self,
    content_type: &str,
    query: EntryQuery,
  ) -> ContentResult<EntryCollection> {
    let query = query.param("content_type", content_type);
    let payload = self.fetch(&["entries"], &query).await?;
    Ok(decode(&payload)?)
  }

  /// Get a single entry by id.
  pub async fn get_entry(&self, id: &str, query: EntryQuery) -> ContentResult<Entry> {
    let payload = self.fetch(&["entries", id], &query).await?;
    Ok(decode(&payload)?)
  }

  async fn get_singleton(&self, content_type: &str, include: bool) -> ContentResult<Option<PageEntry>> {
    let mut query = EntryQuery::new().limit(1);
    if include {
      query = query.include(2);
    }
    Ok(self.get_entries(content_type, query).await?.into_first())
  }

  async fn get_ordered(&self, content_type: &str, query: EntryQuery) -> ContentResult<Vec<Entry>> {
    let collection = self.get_entries(content_type, query.order(ORDER_FIELD)).await?;
    Ok(collection.items)
  }

  // ==========================================================================
  // Convenience accessors per content model
  // ==========================================================================

  pub async fn get_site_settings(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("siteSettings", true).await
  }

  pub async fn get_navigation(&self) -> ContentResult<Vec<Entry>> {
    self.get_ordered("navigationItem", EntryQuery::new()).await
  }

  pub async fn get_locations(&self) -> ContentResult<Vec<Entry>> {
    self.get_ordered("location", EntryQuery::new()).await
  }

  pub async fn get_btp_pillars(&self) -> ContentResult<Vec<Entry>> {
    self.get_ordered("btpPillar", EntryQuery::new()).await
  }

  /// Services with their includes graph, for icon resolution.
  pub async fn get_services(&self) -> ContentResult<EntryCollection> {
    self
      .get_entries("service", EntryQuery::new().order(ORDER_FIELD).include(2))
      .await
  }

  /// Solutions, optionally narrowed to one category (`migration`, `iflow`).
  pub async fn get_solutions(&self, category: Option<&str>) -> ContentResult<Vec<Entry>> {
    let mut query = EntryQuery::new();
    if let Some(category) = category {
      query = query.field_eq("category", category);
    }
    self.get_ordered("solution", query).await
  }

  pub async fn get_faqs(&self, home_page_only: bool) -> ContentResult<Vec<Entry>> {
    let mut query = EntryQuery::new();
    if home_page_only {
      query = query.field_eq("showOnHomePage", true);
    }
    self.get_ordered("faq", query).await
  }

  pub async fn get_stats(&self) -> ContentResult<Vec<Entry>> {
    self.get_ordered("stat", EntryQuery::new()).await
  }

  pub async fn get_home_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("homePage", true).await
  }

  pub async fn get_service_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("servicePage", true).await
  }

  pub async fn get_solutions_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("solutionsPage", false).await
  }

  pub async fn get_about_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("aboutPage", true).await
  }

  pub async fn get_faq_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("faqPage", true).await
  }

  pub async fn get_contact_page(&self) -> ContentResult<Option<PageEntry>> {
    self.get_singleton("contactPage", false).await
  }
}
