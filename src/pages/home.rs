use crate::contentful::types::HomePage;
use crate::dom::{bind_attr, bind_html, bind_text, escape_html, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const HERO_TITLE: &str = ".hero-content .title";
const HERO_DESCRIPTION: &str = ".hero-content p";
const HERO_IMAGE: &str = ".hero-images .image img, .hero-img img";
const CONSULTING_TITLE: &str = ".sasmix-overview-section .section-title2 .title";
const CONSULTING_DESCRIPTION: &str = ".sasmix-overview-section .overview-content > p";
const CONSULTING_IMAGE: &str = ".sasmix-overview-section .overview-image .image img";

/// Hero heading, with the subtitle highlighted in a span when there is one.
fn hero_title_markup(home: &HomePage) -> Option<String> {
  let title = escape_html(home.hero_title.as_deref()?);
  Some(match home.hero_subtitle.as_deref() {
    Some(subtitle) => format!("{} <span>{}</span>", title, escape_html(subtitle)),
    None => title,
  })
}

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_home_page().await;
  bind_singleton("home page", fetched, |page| {
    let home = HomePage::from(page);
    let doc = r.document();
    r.update_meta_tags(home.meta.title.as_deref(), home.meta.description.as_deref());

    count(&[
      bind_html(doc, HERO_TITLE, hero_title_markup(&home).as_deref()),
      bind_text(doc, HERO_DESCRIPTION, home.hero_description.as_deref()),
      bind_attr(doc, HERO_IMAGE, "src", home.hero_image.as_deref()),
      bind_text(doc, CONSULTING_TITLE, home.consulting_title.as_deref()),
      bind_text(doc, CONSULTING_DESCRIPTION, home.consulting_description.as_deref()),
      bind_attr(doc, CONSULTING_IMAGE, "src", home.consulting_image.as_deref()),
    ])
  })
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  let (pillars, services, faqs) = tokio::join!(
    r.render_pillars("#pillars-container"),
    r.render_services("#services-container"),
    r.render_faqs("#faq-container", true, "homePageFaq")
  );
  vec![("pillars", pillars), ("services", services), ("faqs", faqs)]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::SiteConfig;
  use crate::contentful::cached_client::tests::{faq, mount_entries, test_client, ENTRIES_PATH};
  use crate::dom::{MemoryDocument, Node};
  use crate::pages::tests::{asset, asset_link, mount_empty_fallback};
  use crate::pages::{init_page, Page};
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn template() -> MemoryDocument {
    MemoryDocument::new()
      .with_title("Static")
      .with(Node::new(HERO_TITLE).html("Static hero"))
      .with(Node::new(HERO_DESCRIPTION).html("Static description"))
      .with(Node::new(".hero-img img").attr("src", "hero.png"))
      .with(Node::new(CONSULTING_TITLE).html("Static consulting"))
      .with(Node::new("#pillars-container").html("static pillars"))
      .with(Node::new("#services-container").html("static services"))
      .with(Node::new("#faq-container").html("static faqs"))
  }

  #[test]
  fn test_hero_title_markup() {
    let mut home = HomePage {
      hero_title: Some("Build".to_string()),
      ..Default::default()
    };
    assert_eq!(hero_title_markup(&home).as_deref(), Some("Build"));
    home.hero_subtitle = Some("faster".to_string());
    assert_eq!(hero_title_markup(&home).as_deref(), Some("Build <span>faster</span>"));
    home.hero_title = None;
    assert_eq!(hero_title_markup(&home), None);
  }

  #[tokio::test]
  async fn test_init_home_page() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "homePage",
      json!({
        "items": [{ "sys": { "id": "home" }, "fields": {
          "metaTitle": "Acme | Home",
          "heroTitle": "Build",
          "heroSubtitle": "faster",
          "heroImage": asset_link("hero"),
          "consultingTitle": "Consulting"
        }}],
        "includes": { "Asset": [asset("hero", "//images.ctfassets.net/hero.jpg")] }
      }),
    )
    .await;
    mount_entries(
      &server,
      "btpPillar",
      json!({ "items": [{ "sys": { "id": "p1" }, "fields": { "name": "Integration", "description": "d", "icon": "fas fa-plug" } }] }),
    )
    .await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("content_type", "faq"))
      .and(query_param("fields.showOnHomePage", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "items": [faq("f1", "Why?", true)]
      })))
      .mount(&server)
      .await;
    mount_empty_fallback(&server).await;

    let (client, _clock) = test_client(&server);
    let doc = template();
    let report = init_page(Page::Home, &client, &doc, &SiteConfig::default()).await;

    assert_eq!(report.fields, AreaOutcome::Rendered { items: 3 });
    assert_eq!(report.area("pillars"), Some(&AreaOutcome::Rendered { items: 1 }));
    assert_eq!(report.area("services"), Some(&AreaOutcome::Skipped));
    assert_eq!(report.area("faqs"), Some(&AreaOutcome::Rendered { items: 1 }));

    assert_eq!(doc.title().as_deref(), Some("Acme | Home"));
    assert_eq!(doc.inner_html(0).as_deref(), Some("Build <span>faster</span>"));
    assert_eq!(doc.inner_html(1).as_deref(), Some("Static description"));
    assert_eq!(
      doc.attribute(2, "src").as_deref(),
      Some("https://images.ctfassets.net/hero.jpg")
    );
    assert_eq!(doc.inner_html(3).as_deref(), Some("Consulting"));
    assert!(doc.inner_html(4).unwrap().contains("Integration"));
    assert_eq!(doc.inner_html(5).as_deref(), Some("static services"));
    assert!(doc.inner_html(6).unwrap().contains(r#"id="homePageFaq""#));
  }
}
