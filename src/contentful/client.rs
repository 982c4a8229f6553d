use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ContentfulConfig;

use super::error::{ContentError, ContentResult};

/// Query options for an entries request.
///
/// Parameters are kept sorted so the resulting URL, and therefore the cache
/// key, does not depend on the order options were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
  params: BTreeMap<String, String>,
}

impl EntryQuery {
  pub fn new() -> Self {
    Self::default()
  }

  /// Order results by a field path such as `fields.order`.
  pub fn order(self, field: &str) -> Self {
    self.param("order", field)
  }

  pub fn limit(self, limit: u32) -> Self {
    self.param("limit", limit)
  }

  /// Depth of linked entries/assets to side-load into `includes`.
  pub fn include(self, depth: u8) -> Self {
    self.param("include", depth)
  }

  /// Equality filter on a field, sent as `fields.<field>=<value>`.
  pub fn field_eq(self, field: &str, value: impl ToString) -> Self {
    self.param(&format!("fields.{}", field), value)
  }

  pub fn param(mut self, key: &str, value: impl ToString) -> Self {
    self.params.insert(key.to_string(), value.to_string());
    self
  }

  pub fn params(&self) -> &BTreeMap<String, String> {
    &self.params
  }
}

/// Content delivery API client without caching.
#[derive(Clone)]
pub struct ContentfulClient {
  http: reqwest::Client,
  /// `{base_url}/spaces/{space}/environments/{environment}`
  base: Url,
  access_token: String,
}

impl ContentfulClient {
  pub fn new(config: &ContentfulConfig) -> ContentResult<Self> {
    let http = reqwest::Client::builder().build()?;
    let base = format!(
      "{}/spaces/{}/environments/{}",
      config.base_url.trim_end_matches('/'),
      config.space_id,
      config.environment
    );

    // Fail at construction rather than on the first request
    let base = Url::parse(&base)?;
    if base.cannot_be_a_base() {
      return Err(ContentError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }

    Ok(Self {
      http,
      base,
      access_token: config.resolve_access_token().to_string(),
    })
  }

  /// Build the fully-qualified request URL for path segments such as
  /// `["entries", id]`. Each segment is percent-encoded on its own.
  pub fn request_url(&self, segments: &[&str], query: &EntryQuery) -> ContentResult<Url> {
    let mut url = self.base.clone();
    url
      .path_segments_mut()
      .map_err(|_| ContentError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
      .pop_if_empty()
      .extend(segments);

    let mut params = query.params().clone();
    params
      .entry("access_token".to_string())
      .or_insert_with(|| self.access_token.clone());

    url.query_pairs_mut().extend_pairs(params.iter());
    Ok(url)
  }

  /// GET a URL and parse the body as JSON.
  pub async fn get_json(&self, url: &Url) -> ContentResult<Value> {
    debug!(path = url.path(), "requesting content");

    let response = self.http.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
      return Err(ContentError::Status {
        status: status.as_u16(),
      });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
  }
}
