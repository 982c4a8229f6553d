//! List areas: one container, one fetch, one full replace.

use crate::contentful::types::{BtpPillar, Faq, Location, Service, Solution, Stat};
use crate::contentful::ContentResult;
use crate::dom::Document;

use super::markup::{
  contact_locations_markup, faq_accordion_markup, locations_by_region_markup, pillars_markup,
  service_cards_markup, services_markup, solution_accordion_markup, stats_markup,
};
use super::{AreaOutcome, Renderer};

const MIGRATION_PREFIX: &str = "mig";
const MIGRATION_ACCORDION: &str = "migrationAccordion";
const IFLOW_PREFIX: &str = "iflow";
const IFLOW_ACCORDION: &str = "iflowsAccordion";

impl<D: Document + ?Sized> Renderer<'_, D> {
  /// Mark the container as loading. False when the page has no such container.
  fn begin(&self, selector: &str) -> bool {
    if self.doc.query_selector(selector).is_none() {
      return false;
    }
    self.show_loading(selector);
    true
  }

  /// Write fetched items into the container and clear the loading state.
  fn finish<T, M>(
    &self,
    area: &str,
    selector: &str,
    error_message: &str,
    fetched: ContentResult<Vec<T>>,
    markup: M,
  ) -> AreaOutcome
  where
    M: FnOnce(&[T]) -> String,
  {
    let outcome = match fetched {
      Ok(items) if items.is_empty() => AreaOutcome::Skipped,
      Ok(items) => {
        if let Some(node) = self.doc.query_selector(selector) {
          self.doc.set_inner_html(node, &markup(&items));
        }
        AreaOutcome::Rendered { items: items.len() }
      }
      Err(e) => {
        self.show_error(selector, error_message);
        AreaOutcome::failed(area, &e)
      }
    };
    self.hide_loading(selector);
    outcome
  }

  pub async fn render_pillars(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched: ContentResult<Vec<BtpPillar>> = self
      .client
      .get_btp_pillars()
      .await
      .map(|entries| entries.iter().map(BtpPillar::from).collect());
    self.finish("pillars", selector, "Failed to load pillars", fetched, pillars_markup)
  }

  pub async fn render_services(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched = self.fetch_services().await;
    self.finish("services", selector, "Failed to load services", fetched, services_markup)
  }

  /// Service cards for the services page, features listed under each.
  pub async fn render_service_cards(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched = self.fetch_services().await;
    self.finish(
      "service cards",
      selector,
      "Failed to load services",
      fetched,
      service_cards_markup,
    )
  }

  pub(crate) async fn fetch_services(&self) -> ContentResult<Vec<Service>> {
    let collection = self.client.get_services().await?;
    let includes = collection.includes.as_ref();
    Ok(
      collection
        .items
        .iter()
        .map(|entry| Service::from_entry(entry, includes))
        .collect(),
    )
  }

  /// FAQ accordion with panel ids namespaced by `accordion_id`.
  pub async fn render_faqs(&self, selector: &str, home_page_only: bool, accordion_id: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched: ContentResult<Vec<Faq>> = self
      .client
      .get_faqs(home_page_only)
      .await
      .map(|entries| entries.iter().map(Faq::from).collect());
    self.finish("faqs", selector, "Failed to load FAQs", fetched, |faqs| {
      faq_accordion_markup(accordion_id, faqs)
    })
  }

  pub async fn render_stats(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched: ContentResult<Vec<Stat>> = self
      .client
      .get_stats()
      .await
      .map(|entries| entries.iter().map(Stat::from).collect());
    self.finish("stats", selector, "Failed to load statistics", fetched, stats_markup)
  }

  async fn render_solution_category(
    &self,
    selector: &str,
    category: &str,
    prefix: &str,
    parent_id: &str,
  ) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched: ContentResult<Vec<Solution>> = self
      .client
      .get_solutions(Some(category))
      .await
      .map(|entries| entries.iter().map(Solution::from).collect());
    self.finish("solutions", selector, "Failed to load solutions", fetched, |solutions| {
      solution_accordion_markup(prefix, parent_id, solutions)
    })
  }

  /// Migration accelerators and pre-built iFlows.
  ///
  /// The two accordions load independently; one failing leaves the other
  /// rendered.
  pub async fn render_solutions(
    &self,
    migration_selector: &str,
    iflow_selector: &str,
  ) -> (AreaOutcome, AreaOutcome) {
    tokio::join!(
      self.render_solution_category(migration_selector, "migration", MIGRATION_PREFIX, MIGRATION_ACCORDION),
      self.render_solution_category(iflow_selector, "iflow", IFLOW_PREFIX, IFLOW_ACCORDION)
    )
  }

  async fn fetch_locations(&self) -> ContentResult<Vec<Location>> {
    let entries = self.client.get_locations().await?;
    Ok(entries.iter().map(Location::from).collect())
  }

  /// Location cards grouped under their region.
  pub async fn render_locations_by_region(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched = self.fetch_locations().await;
    self.finish(
      "locations",
      selector,
      "Failed to load locations",
      fetched,
      locations_by_region_markup,
    )
  }

  pub async fn render_contact_locations(&self, selector: &str) -> AreaOutcome {
    if !self.begin(selector) {
      return AreaOutcome::Skipped;
    }
    let fetched = self.fetch_locations().await;
    self.finish(
      "contact locations",
      selector,
      "Failed to load locations",
      fetched,
      contact_locations_markup,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::contentful::cached_client::tests::{faq, mount_entries, test_client, ENTRIES_PATH};
  use crate::dom::{MemoryDocument, Node};
  use crate::render::LOADING_CLASS;
  use pretty_assertions::assert_eq;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn pillar(id: &str, name: &str) -> serde_json::Value {
    json!({ "sys": { "id": id }, "fields": { "name": name, "description": "d", "icon": "fas fa-cloud" } })
  }

  fn container(selector: &str) -> MemoryDocument {
    MemoryDocument::new().with(Node::new(selector).html("<p>static</p>"))
  }

  #[tokio::test]
  async fn test_render_pillars_replaces_content() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "btpPillar",
      json!({ "items": [pillar("p1", "Integration"), pillar("p2", "Data")] }),
    )
    .await;
    let (client, _clock) = test_client(&server);
    let doc = container("#pillars-container");

    let outcome = Renderer::new(&client, &doc).render_pillars("#pillars-container").await;

    assert_eq!(outcome, AreaOutcome::Rendered { items: 2 });
    let html = doc.inner_html(0).unwrap();
    assert!(!html.contains("static"));
    assert!(html.contains(r#"data-aos-delay="700""#));
    assert!(html.contains(r#"data-aos-delay="800""#));
    assert!(!doc.has_class(0, LOADING_CLASS));
  }

  #[tokio::test]
  async fn test_rerender_does_not_duplicate() {
    let server = MockServer::start().await;
    mount_entries(&server, "btpPillar", json!({ "items": [pillar("p1", "Integration")] })).await;
    let (client, _clock) = test_client(&server);
    let doc = container("#pillars-container");
    let renderer = Renderer::new(&client, &doc);

    renderer.render_pillars("#pillars-container").await;
    let once = doc.snapshot();
    renderer.render_pillars("#pillars-container").await;

    assert_eq!(doc.snapshot(), once);
    assert_eq!(doc.inner_html(0).unwrap().matches("pillar-card").count(), 1);
  }

  #[tokio::test]
  async fn test_empty_result_leaves_template() {
    let server = MockServer::start().await;
    mount_entries(&server, "stat", json!({ "items": [] })).await;
    let (client, _clock) = test_client(&server);
    let doc = container("#stats-container");

    let outcome = Renderer::new(&client, &doc).render_stats("#stats-container").await;

    assert_eq!(outcome, AreaOutcome::Skipped);
    assert_eq!(doc.inner_html(0).as_deref(), Some("<p>static</p>"));
    assert!(!doc.has_class(0, LOADING_CLASS));
  }

  #[tokio::test]
  async fn test_missing_container_does_not_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
      .expect(0)
      .mount(&server)
      .await;
    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new();

    let outcome = Renderer::new(&client, &doc).render_stats("#stats-container").await;
    assert_eq!(outcome, AreaOutcome::Skipped);
  }

  #[tokio::test]
  async fn test_failure_is_isolated() {
    let server = MockServer::start().await;
    mount_entries(&server, "btpPillar", json!({ "items": [pillar("p1", "Integration")] })).await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("content_type", "service"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;
    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new("#pillars-container"))
      .with(Node::new("#services-container").html("<p>static</p>"));
    let renderer = Renderer::new(&client, &doc);

    let (pillars, services) = tokio::join!(
      renderer.render_pillars("#pillars-container"),
      renderer.render_services("#services-container")
    );

    assert!(pillars.is_rendered());
    assert!(services.is_failed());
    assert_eq!(
      doc.inner_html(1).as_deref(),
      Some(r#"<div class="contentful-error">Failed to load services</div>"#)
    );
    assert!(!doc.has_class(1, LOADING_CLASS));
  }

  #[tokio::test]
  async fn test_render_services_resolves_icons() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "service",
      json!({
        "items": [
          { "sys": { "id": "s1" }, "fields": {
            "title": "Integration", "shortDescription": "Connect",
            "iconImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "icon1" } }
          }},
          { "sys": { "id": "s2" }, "fields": { "title": "Data", "shortDescription": "Move" } }
        ],
        "includes": { "Asset": [
          { "sys": { "id": "icon1" }, "fields": { "file": { "url": "//images.ctfassets.net/icon1.png" } } }
        ]}
      }),
    )
    .await;
    let (client, _clock) = test_client(&server);
    let doc = container("#services-container");

    let outcome = Renderer::new(&client, &doc).render_services("#services-container").await;

    assert_eq!(outcome, AreaOutcome::Rendered { items: 2 });
    let html = doc.inner_html(0).unwrap();
    assert!(html.contains("https://images.ctfassets.net/icon1.png"));
    assert!(html.contains("assets/images/icon/feat-icon2.png"));
  }

  #[tokio::test]
  async fn test_render_home_faqs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("content_type", "faq"))
      .and(query_param("fields.showOnHomePage", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "items": [faq("f2", "Second", true), faq("f4", "Fourth", true)]
      })))
      .mount(&server)
      .await;
    let (client, _clock) = test_client(&server);
    let doc = container("#faq-container");

    let outcome = Renderer::new(&client, &doc)
      .render_faqs("#faq-container", true, "homePageFaq")
      .await;

    assert_eq!(outcome, AreaOutcome::Rendered { items: 2 });
    let html = doc.inner_html(0).unwrap();
    assert!(html.contains("Second"));
    assert!(html.contains("Fourth"));
    assert!(html.contains(r#"id="collapsehomePageFaq1""#));
  }

  #[tokio::test]
  async fn test_render_solutions_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("fields.category", "migration"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "items": [{ "sys": { "id": "m1" }, "fields": { "name": "ECC to S/4", "description": "Move", "category": "migration" } }]
      })))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path(ENTRIES_PATH))
      .and(query_param("fields.category", "iflow"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&server)
      .await;
    let (client, _clock) = test_client(&server);
    let doc = MemoryDocument::new()
      .with(Node::new("#migration-accordion"))
      .with(Node::new("#iflows-accordion").html("static"));

    let (migration, iflow) = Renderer::new(&client, &doc)
      .render_solutions("#migration-accordion", "#iflows-accordion")
      .await;

    assert_eq!(migration, AreaOutcome::Rendered { items: 1 });
    assert!(iflow.is_failed());
    assert!(doc.inner_html(0).unwrap().contains(r#"id="migHead0""#));
    assert!(doc.inner_html(1).unwrap().contains("contentful-error"));
  }

  #[tokio::test]
  async fn test_render_locations_by_region() {
    let server = MockServer::start().await;
    mount_entries(
      &server,
      "location",
      json!({ "items": [
        { "sys": { "id": "l1" }, "fields": { "city": "Berlin", "region": "Europe" } },
        { "sys": { "id": "l2" }, "fields": { "city": "Paris", "region": "Europe" } }
      ]}),
    )
    .await;
    let (client, _clock) = test_client(&server);
    let doc = container("#locations-container");

    let outcome = Renderer::new(&client, &doc)
      .render_locations_by_region("#locations-container")
      .await;

    assert_eq!(outcome, AreaOutcome::Rendered { items: 2 });
    let html = doc.inner_html(0).unwrap();
    assert_eq!(html.matches("location-card").count(), 1);
  }
}
