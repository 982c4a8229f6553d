//! Known pages and name resolution
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
  Home,
  About,
  Services,
  Solutions,
  Faq,
  Contact,
}

#[derive(Debug, Clone)]
pub struct PageInfo {
  pub page: Page,
  pub name: &'static str,
  pub aliases: &'static [&'static str],
  /// File name of the static template the page ships as
  pub template: &'static str,
  pub description: &'static str,
}

/// All pages with content bindings
pub const PAGES: &[PageInfo] = &[
  PageInfo {
    page: Page::Home,
    name: "home",
    aliases: &["index", "h"],
    template: "index.html",
    description: "Hero, BTP pillars, services and home FAQs",
  },
  PageInfo {
    page: Page::About,
    name: "about",
    aliases: &["a", "about-us"],
    template: "about.html",
    description: "Who we are, statistics and locations",
  },
  PageInfo {
    page: Page::Services,
    name: "services",
    aliases: &["s", "service"],
    template: "service.html",
    description: "Service cards and per-service sections",
  },
  PageInfo {
    page: Page::Solutions,
    name: "solutions",
    aliases: &["sol", "solution"],
    template: "solutions.html",
    description: "Migration accelerators and pre-built iFlows",
  },
  PageInfo {
    page: Page::Faq,
    name: "faq",
    aliases: &["f", "faqs"],
    template: "faq.html",
    description: "All frequently asked questions",
  },
  PageInfo {
    page: Page::Contact,
    name: "contact",
    aliases: &["c", "contact-us"],
    template: "contact.html",
    description: "Contact form, links and locations",
  },
];

impl Page {
  pub fn info(self) -> &'static PageInfo {
    PAGES
      .iter()
      .find(|info| info.page == self)
      .unwrap_or(&PAGES[0])
  }

  pub fn name(self) -> &'static str {
    self.info().name
  }

  /// Resolve a page by name, alias or template path (`index.html`,
  /// `site/service.html`).
  pub fn resolve(input: &str) -> Option<Page> {
    let input = input.trim().to_lowercase();
    let file_name = input.rsplit(['/', '\\']).next().unwrap_or(&input);

    PAGES
      .iter()
      .find(|info| {
        info.name == input || info.aliases.contains(&input.as_str()) || info.template == file_name
      })
      .map(|info| info.page)
  }
}

impl fmt::Display for Page {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownPage {
  pub input: String,
  pub suggestion: Option<&'static str>,
}

impl fmt::Display for UnknownPage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown page `{}`", self.input)?;
    if let Some(suggestion) = self.suggestion {
      write!(f, ", did you mean `{}`?", suggestion)?;
    }
    Ok(())
  }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
  type Err = UnknownPage;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Page::resolve(s).ok_or_else(|| UnknownPage {
      input: s.to_string(),
      suggestion: get_suggestions(s).first().map(|info| info.name),
    })
  }
}

/// Get suggestions for a partial page name, best match first
pub fn get_suggestions(input: &str) -> Vec<&'static PageInfo> {
  let input_lower = input.trim().to_lowercase();

  if input_lower.is_empty() {
    return PAGES.iter().collect();
  }

  let mut matches: Vec<(&PageInfo, u32)> = Vec::new();

  for info in PAGES {
    if info.name == input_lower {
      matches.push((info, 0));
      continue;
    }

    if info.aliases.contains(&input_lower.as_str()) || info.template == input_lower {
      matches.push((info, 1));
      continue;
    }

    if info.name.starts_with(&input_lower) {
      matches.push((info, 2));
      continue;
    }

    if info.aliases.iter().any(|a| a.starts_with(&input_lower)) {
      matches.push((info, 3));
      continue;
    }

    if info.name.contains(&input_lower) || info.template.contains(&input_lower) {
      matches.push((info, 4));
    }
  }

  matches.sort_by_key(|(_, priority)| *priority);

  matches.into_iter().map(|(info, _)| info).collect()
}
