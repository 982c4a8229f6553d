use crate::contentful::types::FaqPage;
use crate::dom::{bind_attr, bind_text, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const SECTION_TITLE: &str = ".faq-section .section-title .title, #faq-section-title";
const FAQ_IMAGE: &str = ".faq-images img, #faq-image";

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_faq_page().await;
  bind_singleton("faq page", fetched, |page| {
    let faq = FaqPage::from(page);
    let doc = r.document();
    r.bind_page_meta(&faq.meta);

    count(&[
      bind_text(doc, SECTION_TITLE, faq.section_title.as_deref()),
      bind_attr(doc, FAQ_IMAGE, "src", faq.faq_image.as_deref()),
    ])
  })
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  let faqs = r.render_faqs("#faq-accordion", false, "faqPageAccordion").await;
  vec![("faqs", faqs)]
}
