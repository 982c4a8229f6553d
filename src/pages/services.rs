use crate::contentful::types::{Service, ServicePage};
use crate::dom::{bind_attr, bind_text, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const CONSULTING_IMAGE: &str = ".consulting-section img, #consulting-image";
const DEVELOPMENT_IMAGE: &str = ".development-section img, #development-image";
const SERVICE_CARDS: &str = "#services-cards-container";

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_service_page().await;
  bind_singleton("service page", fetched, |page| {
    let services = ServicePage::from(page);
    let doc = r.document();
    r.bind_page_meta(&services.meta);

    count(&[
      bind_attr(doc, CONSULTING_IMAGE, "src", services.consulting_image.as_deref()),
      bind_attr(doc, DEVELOPMENT_IMAGE, "src", services.development_image.as_deref()),
    ])
  })
}

/// Fill the numbered `#service-{n}` sections, one per service in order.
fn bind_sections<D: Document + ?Sized>(doc: &D, services: &[Service]) -> usize {
  services
    .iter()
    .enumerate()
    .map(|(i, service)| {
      let section = format!("#service-{}", i + 1);
      let description = service
        .full_description
        .as_deref()
        .unwrap_or(&service.short_description);
      count(&[
        bind_text(doc, &format!("{} .title", section), Some(service.title.as_str())),
        bind_text(
          doc,
          &format!("{s} .description, {s} p", s = section),
          Some(description),
        ),
      ])
    })
    .sum()
}

async fn render_sections<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  match r.fetch_services().await {
    Ok(services) => AreaOutcome::from_writes(bind_sections(r.document(), &services)),
    Err(e) => AreaOutcome::failed("service sections", &e),
  }
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  // Sections run after the cards so they read the cached response
  let cards = r.render_service_cards(SERVICE_CARDS).await;
  let sections = render_sections(r).await;
  vec![("service cards", cards), ("service sections", sections)]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::SiteConfig;
  use crate::contentful::cached_client::tests::{mount_entries, test_client, ENTRIES_PATH};
  use crate::dom::{MemoryDocument, Node};
  use crate::pages::tests::{asset, asset_link, mount_empty_fallback};
  use crate::pages::{init_page, Page};
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  #[tokio::test]
  async fn test_init_services_page() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "servicePage",
      json!({
        "items": [{ "sys": { "id": "sp" }, "fields": {
          "bannerTitle": "Services",
          "developmentImage": asset_link("dev")
        }}],
        "includes": { "Asset": [asset("dev", "https://images.ctfassets.net/dev.png")] }
      }),
    )
    .await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("content_type", "service"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "items": [
          { "sys": { "id": "s1" }, "fields": {
            "title": "Integration", "shortDescription": "Short", "fullDescription": "Full story",
            "features": ["APIs", "Events"]
          }},
          { "sys": { "id": "s2" }, "fields": { "title": "Data", "shortDescription": "Move data" } }
        ]
      })))
      .expect(1)
      .mount(&server)
      .await;
    mount_empty_fallback(&server).await;

    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new("#development-image").attr("src", "static.png"))
      .with(Node::new(SERVICE_CARDS))
      .with(Node::new("#service-1 .title"))
      .with(Node::new("#service-1 p").html("Static"))
      .with(Node::new("#service-2 .description"));

    let report = init_page(Page::Services, &client, &doc, &SiteConfig::default()).await;

    assert_eq!(report.fields, AreaOutcome::Rendered { items: 1 });
    assert_eq!(
      doc.attribute(0, "src").as_deref(),
      Some("https://images.ctfassets.net/dev.png")
    );
    let cards = doc.inner_html(1).unwrap();
    assert_eq!(cards.matches("service-card").count(), 2);
    assert!(cards.contains("<i class=\"fas fa-check\"></i>Events"));
    assert_eq!(doc.inner_html(2).as_deref(), Some("Integration"));
    assert_eq!(doc.inner_html(3).as_deref(), Some("Full story"));
    assert_eq!(doc.inner_html(4).as_deref(), Some("Move data"));
    assert_eq!(report.area("service sections"), Some(&AreaOutcome::Rendered { items: 3 }));
  }
}
