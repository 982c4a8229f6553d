//! Resolution of links through a response's includes graph.
//!
//! Delivery responses reference assets and entries by id and side-load the
//! referenced objects once in `includes`. Everything downstream of this
//! module works with resolved URLs and entries.
//!
//! Lookups are linear scans; the graph of one response is small and the
//! first match in list order wins.

use super::api_types::{Asset, Entry, Includes};

/// Result of resolving an entry-link field.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
  One(&'a Entry),
  Many(Vec<&'a Entry>),
}

impl<'a> Resolved<'a> {
  #[allow(dead_code)]
  pub fn into_vec(self) -> Vec<&'a Entry> {
    match self {
      Resolved::One(entry) => vec![entry],
      Resolved::Many(entries) => entries,
    }
  }
}

/// Qualify an asset url with `https:`.
///
/// Scheme-relative and `http://` urls are upgraded. A url starting with a
/// single `/` is a site path and is kept as it is; anything else is taken
/// to start with a host.
pub fn absolute_url(url: &str) -> String {
  if url.starts_with("//") {
    format!("https:{}", url)
  } else if let Some(rest) = url.strip_prefix("http://") {
    format!("https://{}", rest)
  } else if url.starts_with("https://") || url.starts_with('/') {
    url.to_string()
  } else {
    format!("https://{}", url)
  }
}

fn find_asset<'a>(includes: &'a Includes, id: &str) -> Option<&'a Asset> {
  includes.assets.iter().find(|a| a.sys.id == id)
}

fn find_entry<'a>(includes: &'a Includes, id: &str) -> Option<&'a Entry> {
  includes.entries.iter().find(|e| e.sys.id == id)
}

/// Resolve an asset-link field to an absolute file URL.
///
/// Returns `None` when the field is absent or not a link, the asset is not
/// in the graph, or the asset carries no file.
pub fn resolve_asset(entry: &Entry, field: &str, includes: Option<&Includes>) -> Option<String> {
  let link = entry.field(field)?.as_link()?;
  let asset = find_asset(includes?, link.id())?;
  let file = asset.fields.file.as_ref()?;
  if file.url.is_empty() {
    return None;
  }
  Some(absolute_url(&file.url))
}

/// Resolve an entry-link field.
///
/// A list field yields the resolvable entries in field order; unresolvable
/// links are dropped. A single link yields the entry or `None`.
#[allow(dead_code)]
pub fn resolve_entry<'a>(
  entry: &Entry,
  field: &str,
  includes: Option<&'a Includes>,
) -> Option<Resolved<'a>> {
  let value = entry.field(field)?;
  if let Some(links) = value.as_links() {
    return Some(Resolved::Many(
      links
        .iter()
        .filter_map(|link| includes.and_then(|inc| find_entry(inc, link.id())))
        .collect(),
    ));
  }
  let link = value.as_link()?;
  find_entry(includes?, link.id()).map(Resolved::One)
}

/// Resolve an entry-link field to a list, whatever its arity.
#[allow(dead_code)]
pub fn resolve_entries<'a>(
  entry: &Entry,
  field: &str,
  includes: Option<&'a Includes>,
) -> Vec<&'a Entry> {
  resolve_entry(entry, field, includes)
    .map(Resolved::into_vec)
    .unwrap_or_default()
}
