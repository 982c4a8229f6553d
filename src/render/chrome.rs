//! Site chrome shared by every page: logos, navigation, footer and sidebar.

use crate::contentful::types::{Location, NavigationItem, SiteSettings};
use crate::dom::{bind_all, bind_html, bind_if_present, bind_text, escape_html, Document, NodeId};

use super::markup::{footer_locations_markup, nav_items_markup};
use super::{AreaOutcome, Renderer};

const HEADER_LOGOS: &str = ".header-logo img, .sidebar__logo img";
const FOOTER_LOGO: &str = ".footer-logo img";
const DEFAULT_LOGO_ALT: &str = "BTP C4E";

const MOBILE_MENU: &str = "#mobile-menu ul";
const HEADER_CTA: &str = ".header-btn-wrap a.btn";

const FOOTER_ABOUT: &str = ".footer-widget-about p";
const FOOTER_COPYRIGHT: &str = ".copyright-text p";
const FOOTER_EMAIL: &str = ".footer-widget-3 .link a[href^=\"mailto\"]";
const FOOTER_LOCATIONS: &str = ".footer-widget:last-child .link ul, #footer-locations";
const FOOTER_QUICK_LINKS: &str = ".footer-widget-2 .link ul";
const QUICK_LINK_LIMIT: usize = 5;

const SIDEBAR_TEXT: &str = ".sidebar__text p";
const SIDEBAR_EMAIL: &str = ".sidebar__contact-text a[href^=\"mailto\"]";
const SIDEBAR_SOCIAL: &str = ".sidebar__social a";
const SIDEBAR_PRESENCE: &str = ".sidebar__contact-text a[target=\"_blank\"]";

/// Point a `mailto:` link at `email` and show the address as its text.
fn bind_mailto<D: Document + ?Sized>(doc: &D, selector: &str, email: Option<&str>) -> bool {
  bind_if_present(doc, selector, email, |d, node, v| {
    d.set_attribute(node, "href", &format!("mailto:{}", v));
    d.set_text(node, v);
  })
}

/// Footer quick links: regular pages only, home excluded.
fn quick_links(items: &[NavigationItem]) -> Vec<&NavigationItem> {
  items
    .iter()
    .filter(|item| !item.is_cta_button && item.url != "index.html")
    .take(QUICK_LINK_LIMIT)
    .collect()
}

fn presence_text(locations: &[Location]) -> Option<String> {
  if locations.is_empty() {
    return None;
  }
  let cities: Vec<&str> = locations.iter().map(|l| l.city.as_str()).collect();
  Some(format!("Global Presence: {}", cities.join(", ")))
}

impl<D: Document + ?Sized> Renderer<'_, D> {
  /// Swap every logo image for the one in site settings.
  pub async fn render_logo(&self) -> AreaOutcome {
    let settings = match self.client.get_site_settings().await {
      Ok(Some(page)) => SiteSettings::from(&page),
      Ok(None) => return AreaOutcome::Skipped,
      Err(e) => return AreaOutcome::failed("logo", &e),
    };

    let alt = settings.site_name.as_deref().unwrap_or(DEFAULT_LOGO_ALT);
    let set_logo = |d: &D, node: NodeId, src: &str| {
      d.set_attribute(node, "src", src);
      d.set_attribute(node, "alt", alt);
    };

    let written = bind_all(self.doc, HEADER_LOGOS, settings.logo_url.as_deref(), set_logo)
      + bind_all(self.doc, FOOTER_LOGO, settings.logo_white_url.as_deref(), set_logo);
    AreaOutcome::from_writes(written)
  }

  /// Mobile menu items and the header call-to-action.
  pub async fn render_navigation(&self) -> AreaOutcome {
    let items: Vec<NavigationItem> = match self.client.get_navigation().await {
      Ok(entries) => entries.iter().map(NavigationItem::from).collect(),
      Err(e) => return AreaOutcome::failed("navigation", &e),
    };
    if items.is_empty() {
      return AreaOutcome::Skipped;
    }

    let (cta, menu): (Vec<&NavigationItem>, Vec<&NavigationItem>) =
      items.iter().partition(|item| item.is_cta_button);

    let mut written = 0;
    if !menu.is_empty() && bind_html(self.doc, MOBILE_MENU, Some(nav_items_markup(&menu).as_str())) {
      written += 1;
    }
    // Desktop and mobile headers each carry a button
    if let Some(cta) = cta.first() {
      let title = cta.title.as_str();
      written += bind_all(self.doc, HEADER_CTA, Some(cta.url.as_str()), |d, node, url| {
        d.set_attribute(node, "href", url);
        d.set_text(node, title);
      });
    }
    AreaOutcome::from_writes(written)
  }

  pub async fn render_footer(&self) -> AreaOutcome {
    let (settings, locations, navigation) = match futures::try_join!(
      self.client.get_site_settings(),
      self.client.get_locations(),
      self.client.get_navigation()
    ) {
      Ok(fetched) => fetched,
      Err(e) => return AreaOutcome::failed("footer", &e),
    };

    let settings = settings.as_ref().map(SiteSettings::from).unwrap_or_default();
    let locations: Vec<Location> = locations.iter().map(Location::from).collect();
    let navigation: Vec<NavigationItem> = navigation.iter().map(NavigationItem::from).collect();
    let doc = self.doc;

    let mut written = 0;
    written += bind_text(doc, FOOTER_ABOUT, settings.footer_description.as_deref()) as usize;
    let copyright = settings
      .copyright_text
      .as_deref()
      .map(|text| format!("&copy; {}", escape_html(text)));
    written += bind_html(doc, FOOTER_COPYRIGHT, copyright.as_deref()) as usize;
    written += bind_mailto(doc, FOOTER_EMAIL, settings.email.as_deref()) as usize;

    if !locations.is_empty() {
      let markup = footer_locations_markup(&locations);
      written += bind_html(doc, FOOTER_LOCATIONS, Some(markup.as_str())) as usize;
    }

    let links = quick_links(&navigation);
    if !links.is_empty() {
      written += bind_html(doc, FOOTER_QUICK_LINKS, Some(nav_items_markup(&links).as_str())) as usize;
    }

    AreaOutcome::from_writes(written)
  }

  pub async fn render_sidebar(&self) -> AreaOutcome {
    let (settings, locations) = match futures::try_join!(
      self.client.get_site_settings(),
      self.client.get_locations()
    ) {
      Ok(fetched) => fetched,
      Err(e) => return AreaOutcome::failed("sidebar", &e),
    };

    let settings = settings.as_ref().map(SiteSettings::from).unwrap_or_default();
    let locations: Vec<Location> = locations.iter().map(Location::from).collect();
    let doc = self.doc;

    let mut written = 0;
    written += bind_text(doc, SIDEBAR_TEXT, settings.sidebar_description.as_deref()) as usize;
    written += bind_mailto(doc, SIDEBAR_EMAIL, settings.email.as_deref()) as usize;
    written += bind_if_present(doc, SIDEBAR_SOCIAL, settings.linkedin_url.as_deref(), |d, node, v| {
      d.set_attribute(node, "href", v)
    }) as usize;
    written += bind_text(doc, SIDEBAR_PRESENCE, presence_text(&locations).as_deref()) as usize;

    AreaOutcome::from_writes(written)
  }
}
