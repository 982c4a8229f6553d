//! Typed projections of the site's content models.
//!
//! Each struct is built from a loosely-typed `Entry` at the call site.
//! Optional fields stay `Option` so page bindings can skip them; list-item
//! fields that always render default to an empty string.

use super::api_types::{Entry, Includes, PageEntry};
use super::resolve::resolve_asset;

fn text(entry: &Entry, name: &str) -> String {
  entry.display(name).unwrap_or_default()
}

fn opt(entry: &Entry, name: &str) -> Option<String> {
  entry.text(name).map(String::from)
}

/// Title, description and banner shared by every page model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
  pub title: Option<String>,
  pub description: Option<String>,
  pub banner_title: Option<String>,
}

impl From<&Entry> for PageMeta {
  fn from(entry: &Entry) -> Self {
    PageMeta {
      title: opt(entry, "metaTitle"),
      description: opt(entry, "metaDescription"),
      banner_title: opt(entry, "bannerTitle"),
    }
  }
}

/// Site-wide settings singleton
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSettings {
  pub site_name: Option<String>,
  pub logo_url: Option<String>,
  pub logo_white_url: Option<String>,
  pub footer_description: Option<String>,
  pub sidebar_description: Option<String>,
  pub copyright_text: Option<String>,
  pub email: Option<String>,
  pub linkedin_url: Option<String>,
}

impl From<&PageEntry> for SiteSettings {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    let inc = page.includes.as_ref();
    SiteSettings {
      site_name: opt(e, "siteName"),
      logo_url: resolve_asset(e, "logo", inc),
      logo_white_url: resolve_asset(e, "logoWhite", inc),
      footer_description: opt(e, "footerDescription"),
      sidebar_description: opt(e, "sidebarDescription"),
      copyright_text: opt(e, "copyrightText"),
      email: opt(e, "email"),
      linkedin_url: opt(e, "linkedinUrl"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
  pub title: String,
  pub url: String,
  pub is_cta_button: bool,
}

impl From<&Entry> for NavigationItem {
  fn from(e: &Entry) -> Self {
    NavigationItem {
      title: text(e, "title"),
      url: text(e, "url"),
      is_cta_button: e.flag("isCtaButton"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
  pub city: String,
  pub region: Option<String>,
}

impl From<&Entry> for Location {
  fn from(e: &Entry) -> Self {
    Location {
      city: text(e, "city"),
      region: opt(e, "region"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BtpPillar {
  pub name: String,
  pub description: String,
  /// Icon font class list, e.g. `fas fa-cloud`
  pub icon: String,
}

impl From<&Entry> for BtpPillar {
  fn from(e: &Entry) -> Self {
    BtpPillar {
      name: text(e, "name"),
      description: text(e, "description"),
      icon: text(e, "icon"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
  pub title: String,
  pub short_description: String,
  pub full_description: Option<String>,
  pub icon_url: Option<String>,
  pub features: Vec<String>,
}

impl Service {
  /// Project a service entry, resolving its icon against the response graph.
  pub fn from_entry(e: &Entry, includes: Option<&Includes>) -> Self {
    Service {
      title: text(e, "title"),
      short_description: text(e, "shortDescription"),
      full_description: opt(e, "fullDescription"),
      icon_url: resolve_asset(e, "iconImage", includes),
      features: e.string_list("features"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
  pub name: String,
  pub description: String,
  pub category: Option<String>,
}

impl From<&Entry> for Solution {
  fn from(e: &Entry) -> Self {
    Solution {
      name: text(e, "name"),
      description: text(e, "description"),
      category: opt(e, "category"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
  pub question: String,
  pub answer: String,
  pub show_on_home_page: bool,
}

impl From<&Entry> for Faq {
  fn from(e: &Entry) -> Self {
    Faq {
      question: text(e, "question"),
      answer: text(e, "answer"),
      show_on_home_page: e.flag("showOnHomePage"),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
  pub value: String,
  pub suffix: String,
  pub label: String,
}

impl From<&Entry> for Stat {
  fn from(e: &Entry) -> Self {
    Stat {
      value: text(e, "value"),
      suffix: text(e, "suffix"),
      label: text(e, "label"),
    }
  }
}

// ============================================================================
// Page singletons
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomePage {
  pub meta: PageMeta,
  pub hero_title: Option<String>,
  pub hero_subtitle: Option<String>,
  pub hero_description: Option<String>,
  pub hero_image: Option<String>,
  pub consulting_title: Option<String>,
  pub consulting_description: Option<String>,
  pub consulting_image: Option<String>,
}

impl From<&PageEntry> for HomePage {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    let inc = page.includes.as_ref();
    HomePage {
      meta: PageMeta::from(e),
      hero_title: opt(e, "heroTitle"),
      hero_subtitle: opt(e, "heroSubtitle"),
      hero_description: opt(e, "heroDescription"),
      hero_image: resolve_asset(e, "heroImage", inc),
      consulting_title: opt(e, "consultingTitle"),
      consulting_description: opt(e, "consultingDescription"),
      consulting_image: resolve_asset(e, "consultingImage", inc),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutPage {
  pub meta: PageMeta,
  pub who_we_are_title: Option<String>,
  pub who_we_are_description_1: Option<String>,
  pub who_we_are_description_2: Option<String>,
  pub who_we_are_image: Option<String>,
  pub stats_title: Option<String>,
}

impl From<&PageEntry> for AboutPage {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    AboutPage {
      meta: PageMeta::from(e),
      who_we_are_title: opt(e, "whoWeAreTitle"),
      who_we_are_description_1: opt(e, "whoWeAreDescription1"),
      who_we_are_description_2: opt(e, "whoWeAreDescription2"),
      who_we_are_image: resolve_asset(e, "whoWeAreImage", page.includes.as_ref()),
      stats_title: opt(e, "statsTitle"),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePage {
  pub meta: PageMeta,
  pub consulting_image: Option<String>,
  pub development_image: Option<String>,
}

impl From<&PageEntry> for ServicePage {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    let inc = page.includes.as_ref();
    ServicePage {
      meta: PageMeta::from(e),
      consulting_image: resolve_asset(e, "consultingImage", inc),
      development_image: resolve_asset(e, "developmentImage", inc),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionsPage {
  pub meta: PageMeta,
  pub subtitle: Option<String>,
}

impl From<&PageEntry> for SolutionsPage {
  fn from(page: &PageEntry) -> Self {
    SolutionsPage {
      meta: PageMeta::from(&page.entry),
      subtitle: opt(&page.entry, "subtitle"),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqPage {
  pub meta: PageMeta,
  pub section_title: Option<String>,
  pub faq_image: Option<String>,
}

impl From<&PageEntry> for FaqPage {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    FaqPage {
      meta: PageMeta::from(e),
      section_title: opt(e, "sectionTitle"),
      faq_image: resolve_asset(e, "faqImage", page.includes.as_ref()),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactPage {
  pub meta: PageMeta,
  pub form_title: Option<String>,
  /// Access key for the third-party form backend
  pub web3forms_key: Option<String>,
}

impl From<&PageEntry> for ContactPage {
  fn from(page: &PageEntry) -> Self {
    let e = &page.entry;
    ContactPage {
      meta: PageMeta::from(e),
      form_title: opt(e, "formTitle"),
      web3forms_key: opt(e, "web3formsKey"),
    }
  }
}
