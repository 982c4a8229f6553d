use crate::contentful::types::{ContactPage, SiteSettings};
use crate::dom::{bind_all, bind_attr, bind_text, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const FORM_TITLE: &str = ".contact-form-wrap .title, #contact-form-title";
const FORM_ACCESS_KEY: &str = "input[name=\"access_key\"]";
const EMAIL_LINKS: &str = ".contact-info a[href^=\"mailto\"], #contact-email";
const LINKEDIN_LINKS: &str = ".contact-social a[href*=\"linkedin\"], #contact-linkedin";

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_contact_page().await;
  bind_singleton("contact page", fetched, |page| {
    let contact = ContactPage::from(page);
    let doc = r.document();
    r.bind_page_meta(&contact.meta);

    count(&[
      bind_text(doc, FORM_TITLE, contact.form_title.as_deref()),
      bind_attr(doc, FORM_ACCESS_KEY, "value", contact.web3forms_key.as_deref()),
    ])
  })
}

/// Point every email and LinkedIn link on the page at the site settings.
async fn render_links<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_site_settings().await;
  bind_singleton("contact links", fetched, |page| {
    let settings = SiteSettings::from(page);
    let doc = r.document();

    let emails = bind_all(doc, EMAIL_LINKS, settings.email.as_deref(), |d, node, email| {
      d.set_attribute(node, "href", &format!("mailto:{}", email));
      d.set_text(node, email);
    });
    let linkedin = bind_all(doc, LINKEDIN_LINKS, settings.linkedin_url.as_deref(), |d, node, url| {
      d.set_attribute(node, "href", url)
    });
    emails + linkedin
  })
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  let (links, locations) = tokio::join!(
    render_links(r),
    r.render_contact_locations("#contact-locations")
  );
  vec![("contact links", links), ("locations", locations)]
}
