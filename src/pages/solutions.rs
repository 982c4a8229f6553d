use crate::contentful::types::SolutionsPage;
use crate::dom::{bind_text, Document};
use crate::render::{AreaOutcome, Renderer};

use super::{bind_singleton, count};

const SUBTITLE: &str = ".solutions-subtitle, .section-subtitle";

pub(super) async fn bind<D: Document + ?Sized>(r: &Renderer<'_, D>) -> AreaOutcome {
  let fetched = r.client().get_solutions_page().await;
  bind_singleton("solutions page", fetched, |page| {
    let solutions = SolutionsPage::from(page);
    r.bind_page_meta(&solutions.meta);
    count(&[bind_text(r.document(), SUBTITLE, solutions.subtitle.as_deref())])
  })
}

pub(super) async fn areas<D: Document + ?Sized>(
  r: &Renderer<'_, D>,
) -> Vec<(&'static str, AreaOutcome)> {
  let (migration, iflows) = r
    .render_solutions("#migration-accordion", "#iflows-accordion")
    .await;
  vec![("migration accelerators", migration), ("iflows", iflows)]
}
