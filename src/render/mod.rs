//! Renderers that own one content area of the page each.
//!
//! Every render call walks the same lifecycle for its container:
//! loading class on, fetch, then either a full content replace, an
//! untouched container (no data or no container), or an inline error.
//! Failures end that one call and never reach the caller.

mod areas;
mod chrome;
pub mod markup;

use tracing::{error, warn};

use crate::config::SiteConfig;
use crate::contentful::types::PageMeta;
use crate::contentful::{ContentClient, ContentError};
use crate::dom::{bind_attr, bind_text, Document};

use markup::error_markup;

/// Class toggled on a container while its content is loading.
pub const LOADING_CLASS: &str = "contentful-loading";

const BANNER_TITLE: &str = ".page-banner-content .title";
const META_DESCRIPTION: &str = "meta[name=\"description\"]";

/// How one render call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaOutcome {
  /// Content was written; `items` counts rendered items or written nodes
  Rendered { items: usize },
  /// Nothing to write, or nowhere to write it; the template is untouched
  Skipped,
  /// Fetch failed; the error was logged
  Failed(String),
}

impl AreaOutcome {
  pub fn is_rendered(&self) -> bool {
    matches!(self, AreaOutcome::Rendered { .. })
  }

  pub fn is_failed(&self) -> bool {
    matches!(self, AreaOutcome::Failed(_))
  }

  pub(crate) fn from_writes(written: usize) -> Self {
    if written == 0 {
      AreaOutcome::Skipped
    } else {
      AreaOutcome::Rendered { items: written }
    }
  }

  pub(crate) fn failed(area: &str, e: &ContentError) -> Self {
    error!(area, error = %e, "failed to render");
    AreaOutcome::Failed(e.to_string())
  }
}

/// Render functions bound to one client and one document.
pub struct Renderer<'a, D: Document + ?Sized> {
  client: &'a ContentClient,
  doc: &'a D,
}

impl<'a, D: Document + ?Sized> Renderer<'a, D> {
  pub fn new(client: &'a ContentClient, doc: &'a D) -> Self {
    Self { client, doc }
  }

  pub fn client(&self) -> &'a ContentClient {
    self.client
  }

  pub fn document(&self) -> &'a D {
    self.doc
  }

  pub fn show_loading(&self, selector: &str) {
    if let Some(node) = self.doc.query_selector(selector) {
      self.doc.add_class(node, LOADING_CLASS);
    }
  }

  pub fn hide_loading(&self, selector: &str) {
    if let Some(node) = self.doc.query_selector(selector) {
      self.doc.remove_class(node, LOADING_CLASS);
    }
  }

  /// Replace the container's content with an inline error message.
  pub fn show_error(&self, selector: &str, message: &str) {
    if let Some(node) = self.doc.query_selector(selector) {
      self.doc.set_inner_html(node, &error_markup(message));
    }
  }

  /// Update the document title and meta description.
  pub fn update_meta_tags(&self, title: Option<&str>, description: Option<&str>) {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
      self.doc.set_title(title);
    }
    bind_attr(self.doc, META_DESCRIPTION, "content", description);
  }

  /// Meta tags plus the banner heading every inner page shares.
  pub fn bind_page_meta(&self, meta: &PageMeta) {
    self.update_meta_tags(meta.title.as_deref(), meta.description.as_deref());
    bind_text(self.doc, BANNER_TITLE, meta.banner_title.as_deref());
  }

  /// Shared, page-independent bootstrap.
  ///
  /// Refreshes the logo from site settings. With `refresh_chrome` set the
  /// footer and sidebar follow. Navigation is re-rendered whenever no
  /// mobile-menu plugin has cloned the static menu.
  pub async fn init_common(&self, site: &SiteConfig) {
    if !self.client.is_configured() {
      warn!("content API is not configured, keeping static content");
      return;
    }

    if site.refresh_chrome {
      let (_logo, _footer, _sidebar) = tokio::join!(
        self.render_logo(),
        self.render_footer(),
        self.render_sidebar()
      );
    } else {
      self.render_logo().await;
    }

    if !site.mobile_menu_plugin {
      self.render_navigation().await;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::contentful::cached_client::tests::{mount_entries, test_client};
  use crate::dom::{MemoryDocument, Node};
  use serde_json::json;
  use wiremock::matchers::method;
  use wiremock::{Mock, MockServer, ResponseTemplate};

  #[tokio::test]
  async fn test_update_meta_tags() {
    let server = MockServer::start().await;
    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with_title("Static")
      .with(Node::new(META_DESCRIPTION).attr("content", "old"));
    let renderer = Renderer::new(&client, &doc);

    renderer.update_meta_tags(None, Some("new description"));
    assert_eq!(doc.title().as_deref(), Some("Static"));
    assert_eq!(doc.attribute(0, "content").as_deref(), Some("new description"));

    renderer.update_meta_tags(Some("Dynamic"), None);
    assert_eq!(doc.title().as_deref(), Some("Dynamic"));
    assert_eq!(doc.attribute(0, "content").as_deref(), Some("new description"));
  }

  #[tokio::test]
  async fn test_init_common_unconfigured_is_noop() {
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
    let doc = MemoryDocument::new().with(Node::new(".header-logo img").attr("src", "static.png"));
    let before = doc.snapshot();

    Renderer::new(&client, &doc)
      .init_common(&SiteConfig::default())
      .await;

    assert_eq!(doc.snapshot(), before);
  }

  #[tokio::test]
  async fn test_init_common_skips_navigation_with_menu_plugin() {
    let server = MockServer::start().await;
    mount_entries(&server, "siteSettings", json!({ "items": [] })).await;
    mount_entries(&server, "location", json!({ "items": [] })).await;
    Mock::given(method("GET"))
      .and(wiremock::matchers::query_param("content_type", "navigationItem"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "items": [{ "sys": { "id": "n1" }, "fields": { "title": "Home", "url": "index.html" } }]
      })))
      .mount(&server)
      .await;

    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new().with(Node::new("#mobile-menu ul").html("<li>static</li>"));
    let renderer = Renderer::new(&client, &doc);

    let site = SiteConfig {
      refresh_chrome: true,
      mobile_menu_plugin: true,
    };
    renderer.init_common(&site).await;
    assert_eq!(doc.inner_html(0).as_deref(), Some("<li>static</li>"));

    let site = SiteConfig {
      refresh_chrome: true,
      mobile_menu_plugin: false,
    };
    renderer.init_common(&site).await;
    assert_eq!(
      doc.inner_html(0).as_deref(),
      Some(r#"<li><a href="index.html">Home</a></li>"#)
    );
  }

  #[tokio::test]
  async fn test_init_common_renders_navigation_without_chrome_refresh() {
    let server = MockServer::start().await;
    mount_entries(&server, "siteSettings", json!({ "items": [] })).await;
    mount_entries(
      &server,
      "navigationItem",
      json!({ "items": [{ "sys": { "id": "n1" }, "fields": { "title": "Home", "url": "index.html" } }] }),
    )
    .await;

    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new("#mobile-menu ul").html("<li>static</li>"))
      .with(Node::new(".footer-widget-about p").html("static footer"));

    let site = SiteConfig {
      refresh_chrome: false,
      mobile_menu_plugin: false,
    };
    Renderer::new(&client, &doc).init_common(&site).await;

    assert_eq!(
      doc.inner_html(0).as_deref(),
      Some(r#"<li><a href="index.html">Home</a></li>"#)
    );
    assert_eq!(doc.inner_html(1).as_deref(), Some("static footer"));
  }
}
