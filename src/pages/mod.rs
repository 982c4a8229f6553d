//! Page initializers.
//!
//! Each page binds its singleton entry into fixed template slots and fills
//! its list areas. The binding and the areas run concurrently; a failure in
//! one leaves whatever the others wrote.

mod about;
mod contact;
mod faq;
mod home;
mod registry;
mod services;
mod solutions;

pub use registry::{Page, PAGES};

use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::contentful::{ContentClient, ContentResult, PageEntry};
use crate::dom::Document;
use crate::render::{AreaOutcome, Renderer};

/// What one page initialization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
  pub page: Page,
  /// False when credentials were missing and nothing ran
  pub configured: bool,
  /// Singleton field bindings
  pub fields: AreaOutcome,
  pub areas: Vec<(&'static str, AreaOutcome)>,
}

impl PageReport {
  fn unconfigured(page: Page) -> Self {
    Self {
      page,
      configured: false,
      fields: AreaOutcome::Skipped,
      areas: Vec::new(),
    }
  }

  pub fn area(&self, name: &str) -> Option<&AreaOutcome> {
    self.areas.iter().find(|(n, _)| *n == name).map(|(_, o)| o)
  }

  pub fn failures(&self) -> usize {
    let areas = self.areas.iter().filter(|(_, o)| o.is_failed()).count();
    areas + self.fields.is_failed() as usize
  }
}

/// Run a page's content bindings against `doc`.
pub async fn init_page<D: Document + ?Sized>(
  page: Page,
  client: &ContentClient,
  doc: &D,
  site: &SiteConfig,
) -> PageReport {
  if !client.is_configured() {
    warn!(%page, "content API is not configured, keeping static content");
    return PageReport::unconfigured(page);
  }

  info!(%page, "initializing page");
  let renderer = Renderer::new(client, doc);
  renderer.init_common(site).await;

  let (fields, areas) = match page {
    Page::Home => tokio::join!(home::bind(&renderer), home::areas(&renderer)),
    Page::About => tokio::join!(about::bind(&renderer), about::areas(&renderer)),
    Page::Services => tokio::join!(services::bind(&renderer), services::areas(&renderer)),
    Page::Solutions => tokio::join!(solutions::bind(&renderer), solutions::areas(&renderer)),
    Page::Faq => tokio::join!(faq::bind(&renderer), faq::areas(&renderer)),
    Page::Contact => tokio::join!(contact::bind(&renderer), contact::areas(&renderer)),
  };

  let report = PageReport {
    page,
    configured: true,
    fields,
    areas,
  };
  info!(%page, failures = report.failures(), "page initialized");
  report
}

/// Bind a fetched singleton with `bind`, which returns how many slots it wrote.
fn bind_singleton<F>(area: &str, fetched: ContentResult<Option<PageEntry>>, bind: F) -> AreaOutcome
where
  F: FnOnce(&PageEntry) -> usize,
{
  match fetched {
    Ok(Some(page)) => AreaOutcome::from_writes(bind(&page)),
    Ok(None) => AreaOutcome::Skipped,
    Err(e) => AreaOutcome::failed(area, &e),
  }
}

/// Number of bindings that wrote.
fn count(writes: &[bool]) -> usize {
  writes.iter().filter(|w| **w).count()
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use crate::contentful::cached_client::tests::test_client;
  use crate::dom::{MemoryDocument, Node};
  use serde_json::{json, Value};
  use wiremock::matchers::method;
  use wiremock::{Mock, MockServer, ResponseTemplate};

  /// Answer every unmatched request with an empty collection.
  pub async fn mount_empty_fallback(server: &MockServer) {
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
      .with_priority(10)
      .mount(server)
      .await;
  }

  pub fn asset_link(id: &str) -> Value {
    json!({ "sys": { "type": "Link", "linkType": "Asset", "id": id } })
  }

  pub fn asset(id: &str, url: &str) -> Value {
    json!({ "sys": { "id": id }, "fields": { "file": { "url": url } } })
  }

  #[tokio::test]
  async fn test_unconfigured_page_is_noop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200))
      .expect(0)
      .mount(&server)
      .await;

    let client = ContentClient::new(&crate::config::ContentfulConfig {
      base_url: server.uri(),
      ..Default::default()
    })
    .unwrap();
    let doc = MemoryDocument::new().with(Node::new("#faq-accordion").html("static"));
    let before = doc.snapshot();

    let report = init_page(Page::Faq, &client, &doc, &SiteConfig::default()).await;

    assert!(!report.configured);
    assert_eq!(doc.snapshot(), before);
  }

  #[tokio::test]
  async fn test_failures_are_counted_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;
    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new("#faq-accordion").html("static"))
      .with(Node::new(".page-banner-content .title").html("Static"));

    let report = init_page(Page::Faq, &client, &doc, &SiteConfig::default()).await;

    assert!(report.configured);
    assert!(report.fields.is_failed());
    assert_eq!(report.failures(), 2);
    assert_eq!(doc.inner_html(1).as_deref(), Some("Static"));
    assert!(doc.inner_html(0).unwrap().contains("contentful-error"));
  }
}
