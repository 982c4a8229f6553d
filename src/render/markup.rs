//! Item-to-markup mappings for each content area.
//!
//! Content text is escaped before it is interpolated, except FAQ answers,
//! which are authored as markup. Positional indices feed the ids the
//! accordion and animation scripts key on.

use crate::contentful::types::{BtpPillar, Faq, Location, NavigationItem, Service, Solution, Stat};
use crate::dom::escape_html as esc;

/// Title/body pair shown as one collapsible accordion panel.
pub struct AccordionItem<'a> {
  pub title: &'a str,
  pub body: &'a str,
}

impl<'a> From<&'a Faq> for AccordionItem<'a> {
  fn from(faq: &'a Faq) -> Self {
    AccordionItem {
      title: &faq.question,
      body: &faq.answer,
    }
  }
}

impl<'a> From<&'a Solution> for AccordionItem<'a> {
  fn from(solution: &'a Solution) -> Self {
    AccordionItem {
      title: &solution.name,
      body: &solution.description,
    }
  }
}

pub fn error_markup(message: &str) -> String {
  format!(r#"<div class="contentful-error">{}</div>"#, esc(message))
}

pub fn pillars_markup(pillars: &[BtpPillar]) -> String {
  pillars
    .iter()
    .enumerate()
    .map(|(i, p)| {
      format!(
        r#"<div class="col-lg-4 col-md-6 mb-4" data-aos-delay="{delay}" data-aos="fade-up"><div class="pillar-card"><div class="pillar-icon"><i class="{icon}"></i></div><h4>{name}</h4><p>{description}</p></div></div>"#,
        delay = 700 + i * 100,
        icon = esc(&p.icon),
        name = esc(&p.name),
        description = esc(&p.description),
      )
    })
    .collect()
}

pub fn services_markup(services: &[Service]) -> String {
  services
    .iter()
    .enumerate()
    .map(|(i, s)| {
      let icon = match &s.icon_url {
        Some(url) => format!(r#"<img src="{}" alt="{}">"#, esc(url), esc(&s.title)),
        // Numbered icons ship with the template
        None => format!(r#"<img src="assets/images/icon/feat-icon{}.png" alt="">"#, i + 1),
      };
      format!(
        r#"<div class="col-md-6"><div class="features-item"><div class="feat-icon-wrap"><div class="icon-img">{icon}</div></div><div class="feat-content"><h3 class="title"><a href="service.html">{title}</a></h3><p>{description}</p></div></div></div>"#,
        icon = icon,
        title = esc(&s.title),
        description = esc(&s.short_description),
      )
    })
    .collect()
}

pub fn service_cards_markup(services: &[Service]) -> String {
  services
    .iter()
    .map(|s| {
      let icon = s
        .icon_url
        .as_ref()
        .map(|url| format!(r#"<img src="{}" alt="{}">"#, esc(url), esc(&s.title)))
        .unwrap_or_default();
      let features = if s.features.is_empty() {
        String::new()
      } else {
        let items: String = s
          .features
          .iter()
          .map(|f| format!(r#"<li><i class="fas fa-check"></i>{}</li>"#, esc(f)))
          .collect();
        format!(r#"<ul class="service-features">{}</ul>"#, items)
      };
      format!(
        r#"<div class="col-md-6 mb-4"><div class="service-card"><div class="service-icon">{icon}</div><h3>{title}</h3><p>{description}</p>{features}</div></div>"#,
        icon = icon,
        title = esc(&s.title),
        description = esc(&s.short_description),
        features = features,
      )
    })
    .collect()
}

/// FAQ accordion whose panel ids are namespaced by `accordion_id`, so two
/// accordions on one page never share ids. Answers go into the panel body
/// as they were authored; questions are escaped.
pub fn faq_accordion_markup(accordion_id: &str, faqs: &[Faq]) -> String {
  let ns = esc(accordion_id);
  let panels: String = faqs
    .iter()
    .map(AccordionItem::from)
    .enumerate()
    .map(|(i, item)| {
      let first = i == 0;
      format!(
        r##"<div class="accordion-item"><div class="accordion-header" id="heading{ns}{i}"><button class="accordion-button{collapsed}" type="button" data-bs-toggle="collapse" data-bs-target="#collapse{ns}{i}" aria-expanded="{expanded}" aria-controls="collapse{ns}{i}"><span class="title">{title}</span></button></div><div id="collapse{ns}{i}" class="accordion-collapse collapse{show}" aria-labelledby="heading{ns}{i}" data-bs-parent="#{ns}"><div class="accordion-body">{body}</div></div></div>"##,
        ns = ns,
        i = i,
        collapsed = if first { "" } else { " collapsed" },
        expanded = first,
        show = if first { " show" } else { "" },
        title = esc(item.title),
        body = item.body,
      )
    })
    .collect();
  format!(r#"<div class="accordion" id="{}">{}</div>"#, ns, panels)
}

/// Solution accordion panels rendered straight into an existing accordion
/// element `parent_id`, with ids prefixed by `prefix` (`mig`, `iflow`).
pub fn solution_accordion_markup(prefix: &str, parent_id: &str, solutions: &[Solution]) -> String {
  let prefix = esc(prefix);
  let parent = esc(parent_id);
  solutions
    .iter()
    .map(AccordionItem::from)
    .enumerate()
    .map(|(i, item)| {
      let first = i == 0;
      format!(
        r##"<div class="accordion-item"><h2 class="accordion-header" id="{prefix}Head{i}"><button class="accordion-button{collapsed}" type="button" data-bs-toggle="collapse" data-bs-target="#{prefix}Collapse{i}" aria-expanded="{expanded}"><span class="check-icon"><i class="fas fa-check-circle"></i></span>{title}</button></h2><div id="{prefix}Collapse{i}" class="accordion-collapse collapse{show}" data-bs-parent="#{parent}"><div class="accordion-body">{body}</div></div></div>"##,
        prefix = prefix,
        parent = parent,
        i = i,
        collapsed = if first { "" } else { " collapsed" },
        expanded = first,
        show = if first { " show" } else { "" },
        title = esc(item.title),
        body = esc(item.body),
      )
    })
    .collect()
}

pub fn stats_markup(stats: &[Stat]) -> String {
  stats
    .iter()
    .map(|s| {
      format!(
        r#"<div class="col-lg-4"><div class="single-counter"><div class="content"><span><span class="odometer" data-count="{value}">0</span>{suffix}</span><p>{label}</p></div></div></div>"#,
        value = esc(&s.value),
        suffix = esc(&s.suffix),
        label = esc(&s.label),
      )
    })
    .collect()
}

pub fn nav_items_markup(items: &[&NavigationItem]) -> String {
  items
    .iter()
    .map(|item| format!(r#"<li><a href="{}">{}</a></li>"#, esc(&item.url), esc(&item.title)))
    .collect()
}

fn city_with_region(location: &Location) -> String {
  match &location.region {
    Some(region) => format!("{} ({})", location.city, region),
    None => location.city.clone(),
  }
}

pub fn footer_locations_markup(locations: &[Location]) -> String {
  locations
    .iter()
    .map(|l| format!("<li>{}</li>", esc(&city_with_region(l))))
    .collect()
}

/// Group cities under their region, regions in order of first appearance.
pub fn group_by_region(locations: &[Location]) -> Vec<(&str, Vec<&str>)> {
  let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
  for location in locations {
    let region = location.region.as_deref().unwrap_or("Other");
    match groups.iter_mut().find(|(r, _)| *r == region) {
      Some((_, cities)) => cities.push(&location.city),
      None => groups.push((region, vec![&location.city])),
    }
  }
  groups
}

pub fn locations_by_region_markup(locations: &[Location]) -> String {
  group_by_region(locations)
    .into_iter()
    .map(|(region, cities)| {
      let items: String = cities
        .iter()
        .map(|c| format!(r#"<li><i class="fas fa-map-marker-alt"></i>{}</li>"#, esc(c)))
        .collect();
      format!(
        r#"<div class="col-md-4 mb-4"><div class="location-card"><h4>{}</h4><ul>{}</ul></div></div>"#,
        esc(region),
        items
      )
    })
    .collect()
}

pub fn contact_locations_markup(locations: &[Location]) -> String {
  let items: String = locations
    .iter()
    .map(|l| {
      let region = l
        .region
        .as_ref()
        .map(|r| format!(" <span>({})</span>", esc(r)))
        .unwrap_or_default();
      format!(
        r#"<div class="col-md-6 mb-3"><i class="fas fa-map-marker-alt"></i><strong>{}</strong>{}</div>"#,
        esc(&l.city),
        region
      )
    })
    .collect();
  format!(r#"<h4>Global Presence</h4><div class="row">{}</div>"#, items)
}
