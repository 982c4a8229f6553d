use crate::contentful::types::AboutPage;
use crate::dom::{bind_attr, bind_text, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const WHO_WE_ARE_TITLE: &str = ".about-content .title, #who-we-are-title";
const WHO_WE_ARE_DESC_1: &str = ".about-content .text-1, #who-we-are-desc-1";
const WHO_WE_ARE_DESC_2: &str = ".about-content .text-2, #who-we-are-desc-2";
const WHO_WE_ARE_IMAGE: &str = ".about-images img, #who-we-are-image";
const STATS_TITLE: &str = ".counter-section .title, #stats-title";

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_about_page().await;
  bind_singleton("about page", fetched, |page| {
    let about = AboutPage::from(page);
    let doc = r.document();
    r.bind_page_meta(&about.meta);

    count(&[
      bind_text(doc, WHO_WE_ARE_TITLE, about.who_we_are_title.as_deref()),
      bind_text(doc, WHO_WE_ARE_DESC_1, about.who_we_are_description_1.as_deref()),
      bind_text(doc, WHO_WE_ARE_DESC_2, about.who_we_are_description_2.as_deref()),
      bind_attr(doc, WHO_WE_ARE_IMAGE, "src", about.who_we_are_image.as_deref()),
      bind_text(doc, STATS_TITLE, about.stats_title.as_deref()),
    ])
  })
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  let (stats, locations) = tokio::join!(
    r.render_stats("#stats-container"),
    r.render_locations_by_region("#locations-container")
  );
  vec![("stats", stats), ("locations", locations)]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::SiteConfig;
  use crate::contentful::cached_client::tests::{mount_entries, test_client};
  use crate::dom::{MemoryDocument, Node};
  use crate::pages::tests::mount_empty_fallback;
  use crate::pages::{init_page, Page};
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use wiremock::MockServer;

  #[tokio::test]
  async fn test_init_about_page() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "aboutPage",
      json!({ "items": [{ "sys": { "id": "about" }, "fields": {
        "bannerTitle": "About Us",
        "whoWeAreTitle": "Who we are",
        "whoWeAreDescription1": "First",
        "statsTitle": "In numbers"
      }}]}),
    )
    .await;
    mount_entries(
      &server,
      "stat",
      json!({ "items": [
        { "sys": { "id": "s1" }, "fields": { "value": "50", "suffix": "+", "label": "Projects" } }
      ]}),
    )
    .await;
    mount_entries(
      &server,
      "location",
      json!({ "items": [
        { "sys": { "id": "l1" }, "fields": { "city": "Berlin", "region": "Europe" } },
        { "sys": { "id": "l2" }, "fields": { "city": "Pune", "region": "Asia" } }
      ]}),
    )
    .await;
    mount_empty_fallback(&server).await;

    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new(".page-banner-content .title").html("Static banner"))
      .with(Node::new("#who-we-are-title"))
      .with(Node::new("#who-we-are-desc-1"))
      .with(Node::new("#who-we-are-desc-2").html("Static second"))
      .with(Node::new("#stats-title"))
      .with(Node::new("#stats-container"))
      .with(Node::new("#locations-container"));

    let report = init_page(Page::About, &client, &doc, &SiteConfig::default()).await;

    assert_eq!(report.fields, AreaOutcome::Rendered { items: 3 });
    assert_eq!(doc.inner_html(0).as_deref(), Some("About Us"));
    assert_eq!(doc.inner_html(1).as_deref(), Some("Who we are"));
    assert_eq!(doc.inner_html(2).as_deref(), Some("First"));
    assert_eq!(doc.inner_html(3).as_deref(), Some("Static second"));
    assert_eq!(doc.inner_html(4).as_deref(), Some("In numbers"));
    assert!(doc.inner_html(5).unwrap().contains(r#"data-count="50""#));
    assert_eq!(doc.inner_html(6).unwrap().matches("location-card").count(), 2);
  }
}
