//! In-memory document backed by a flat node table.
//!
//! Each node lists the selectors it answers to, so a template describes the
//! DOM contract of a page without needing a full HTML tree. Nodes are kept
//! in document order.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use color_eyre::{eyre::eyre, Result};
use serde::{Deserialize, Serialize};

use super::{Document, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
  /// Selectors this node matches, e.g. `.hero-content .title`
  pub selectors: Vec<String>,
  #[serde(default)]
  pub html: String,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub attributes: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub classes: Vec<String>,
}

impl Node {
  pub fn new(selector: &str) -> Self {
    Self {
      selectors: vec![normalize(selector)],
      ..Default::default()
    }
  }

  pub fn html(mut self, html: &str) -> Self {
    self.html = html.to_string();
    self
  }

  pub fn attr(mut self, name: &str, value: &str) -> Self {
    self.attributes.insert(name.to_string(), value.to_string());
    self
  }

  fn matches(&self, alternatives: &[String]) -> bool {
    alternatives.iter().any(|alt| self.selectors.contains(alt))
  }
}

/// Serialized form of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default)]
  pub nodes: Vec<Node>,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
  state: Mutex<Template>,
}

/// Collapse runs of whitespace so `.a  .b` and `.a .b` are the same selector.
fn normalize(selector: &str) -> String {
  selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn alternatives(selector: &str) -> Vec<String> {
  selector
    .split(',')
    .map(normalize)
    .filter(|s| !s.is_empty())
    .collect()
}

impl MemoryDocument {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_template(mut template: Template) -> Self {
    for node in &mut template.nodes {
      node.selectors = node.selectors.iter().map(|s| normalize(s)).collect();
    }
    Self {
      state: Mutex::new(template),
    }
  }

  /// Append a node; builder form for tests and fixtures.
  pub fn with(self, node: Node) -> Self {
    self.state().nodes.push(node);
    self
  }

  pub fn with_title(self, title: &str) -> Self {
    self.state().title = Some(title.to_string());
    self
  }

  pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
    Ok(Self::from_template(serde_yaml::from_str(contents)?))
  }

  /// Load a template description from disk.
  pub fn load(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read template {}: {}", path.display(), e))?;
    Self::from_yaml(&contents)
      .map_err(|e| eyre!("Failed to parse template {}: {}", path.display(), e))
  }

  pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&*self.state())
  }

  /// Copy of the current document state.
  pub fn snapshot(&self) -> Template {
    self.state().clone()
  }

  fn state(&self) -> MutexGuard<'_, Template> {
    self.state.lock().unwrap_or_else(|e| e.into_inner())
  }

  fn update(&self, node: NodeId, f: impl FnOnce(&mut Node)) {
    if let Some(n) = self.state().nodes.get_mut(node) {
      f(n);
    }
  }
}

impl Document for MemoryDocument {
  fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
    let alternatives = alternatives(selector);
    self
      .state()
      .nodes
      .iter()
      .enumerate()
      .filter(|(_, n)| n.matches(&alternatives))
      .map(|(id, _)| id)
      .collect()
  }

  fn inner_html(&self, node: NodeId) -> Option<String> {
    self.state().nodes.get(node).map(|n| n.html.clone())
  }

  fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
    self
      .state()
      .nodes
      .get(node)
      .and_then(|n| n.attributes.get(name).cloned())
  }

  fn has_class(&self, node: NodeId, class: &str) -> bool {
    self
      .state()
      .nodes
      .get(node)
      .is_some_and(|n| n.classes.iter().any(|c| c == class))
  }

  fn set_inner_html(&self, node: NodeId, html: &str) {
    self.update(node, |n| n.html = html.to_string());
  }

  fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
    self.update(node, |n| {
      n.attributes.insert(name.to_string(), value.to_string());
    });
  }

  fn add_class(&self, node: NodeId, class: &str) {
    self.update(node, |n| {
      if !n.classes.iter().any(|c| c == class) {
        n.classes.push(class.to_string());
      }
    });
  }

  fn remove_class(&self, node: NodeId, class: &str) {
    self.update(node, |n| n.classes.retain(|c| c != class));
  }

  fn title(&self) -> Option<String> {
    self.state().title.clone()
  }

  fn set_title(&self, title: &str) {
    self.state().title = Some(title.to_string());
  }
}
