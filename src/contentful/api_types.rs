//! Serde-deserializable types matching content delivery API responses.
//!
//! Entries are kept loosely typed: `fields` maps a field name to a
//! `FieldValue`, and each content model is projected into a typed struct at
//! the call site (see `types`).

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;

/// Decode a cached JSON payload into a typed response.
pub fn decode<T: DeserializeOwned>(value: &serde_json::Value) -> serde_json::Result<T> {
  T::deserialize(value)
}

// ============================================================================
// System metadata and links
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSys {
  pub id: String,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(rename = "linkType", default, skip_serializing_if = "Option::is_none")]
  pub link_type: Option<String>,
}

/// Reference to another entry or asset, resolved through the includes graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub sys: LinkSys,
}

impl Link {
  pub fn id(&self) -> &str {
    &self.sys.id
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeLink {
  pub sys: LinkSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sys {
  pub id: String,
  #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
  pub content_type: Option<ContentTypeLink>,
}

// ============================================================================
// Field values
// ============================================================================

/// One value in an entry's `fields` map.
///
/// Variant order matters: serde tries them top to bottom, so links are
/// recognized before the catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Link(Link),
  Links(Vec<Link>),
  Text(String),
  Bool(bool),
  Number(serde_json::Number),
  /// Nested scalar structures (string lists, rich text documents, ...)
  Other(serde_json::Value),
}

impl FieldValue {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_link(&self) -> Option<&Link> {
    match self {
      Self::Link(link) => Some(link),
      _ => None,
    }
  }

  pub fn as_links(&self) -> Option<&[Link]> {
    match self {
      Self::Links(links) => Some(links),
      _ => None,
    }
  }

  /// Render a scalar as display text. Numbers are formatted as JSON prints them.
  pub fn to_text(&self) -> Option<String> {
    match self {
      Self::Text(s) => Some(s.clone()),
      Self::Number(n) => Some(n.to_string()),
      Self::Bool(b) => Some(b.to_string()),
      _ => None,
    }
  }

  /// Read a list of strings, e.g. a short-text list field.
  pub fn as_string_list(&self) -> Vec<String> {
    match self {
      Self::Other(serde_json::Value::Array(values)) => values
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect(),
      _ => Vec::new(),
    }
  }
}

// ============================================================================
// Entries and assets
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
  pub sys: Sys,
  #[serde(default)]
  pub fields: HashMap<String, FieldValue>,
}

impl Entry {
  pub fn id(&self) -> &str {
    &self.sys.id
  }

  /// Content model name, when the response carries it.
  pub fn content_type(&self) -> Option<&str> {
    self.sys.content_type.as_ref().map(|ct| ct.sys.id.as_str())
  }

  pub fn field(&self, name: &str) -> Option<&FieldValue> {
    self.fields.get(name)
  }

  /// Text field, treating an empty string as absent.
  pub fn text(&self, name: &str) -> Option<&str> {
    self
      .field(name)
      .and_then(FieldValue::as_str)
      .filter(|s| !s.is_empty())
  }

  /// Scalar field rendered as text, treating an empty string as absent.
  pub fn display(&self, name: &str) -> Option<String> {
    self
      .field(name)
      .and_then(FieldValue::to_text)
      .filter(|s| !s.is_empty())
  }

  /// Boolean flag, false when absent.
  pub fn flag(&self, name: &str) -> bool {
    self.field(name).and_then(FieldValue::as_bool).unwrap_or(false)
  }

  pub fn string_list(&self, name: &str) -> Vec<String> {
    self
      .field(name)
      .map(FieldValue::as_string_list)
      .unwrap_or_default()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFile {
  #[serde(default)]
  pub url: String,
  #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
  pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
  pub sys: Sys,
  #[serde(default)]
  pub fields: AssetFields,
}

// ============================================================================
// Collection responses
// ============================================================================

/// Entries and assets side-loaded with one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Includes {
  #[serde(rename = "Entry", default)]
  pub entries: Vec<Entry>,
  #[serde(rename = "Asset", default)]
  pub assets: Vec<Asset>,
}

/// Response of an `/entries` list query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
  #[serde(default)]
  pub items: Vec<Entry>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub includes: Option<Includes>,
  #[serde(default)]
  pub total: u64,
}

/// A singleton page entry together with the graph of the response it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
  pub entry: Entry,
  pub includes: Option<Includes>,
}

impl EntryCollection {
  /// First item with the response graph, or `None` for an empty result.
  pub fn into_first(self) -> Option<PageEntry> {
    let includes = self.includes;
    self
      .items
      .into_iter()
      .next()
      .map(|entry| PageEntry { entry, includes })
  }
}
