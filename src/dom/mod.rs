//! Document seam between the renderers and the page markup.
//!
//! Renderers never hold node references across awaits; they query, write,
//! and let go. Implementations use interior mutability so a page initializer
//! can run several areas concurrently against one shared document.

mod bind;
mod memory;

pub use bind::{bind_all, bind_attr, bind_html, bind_if_present, bind_text};
pub use memory::MemoryDocument;

#[cfg(test)]
pub use memory::Node;

/// Handle to a node, valid for the lifetime of the document.
pub type NodeId = usize;

/// DOM operations the renderers rely on.
///
/// Selectors may be comma-separated alternatives; matches come back in
/// document order, as `querySelectorAll` returns them.
pub trait Document {
  fn query_selector_all(&self, selector: &str) -> Vec<NodeId>;

  fn query_selector(&self, selector: &str) -> Option<NodeId> {
    self.query_selector_all(selector).into_iter().next()
  }

  fn inner_html(&self, node: NodeId) -> Option<String>;
  fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
  fn has_class(&self, node: NodeId, class: &str) -> bool;

  /// Replace the node's content with escaped text.
  fn set_text(&self, node: NodeId, text: &str) {
    self.set_inner_html(node, &escape_html(text));
  }

  fn set_inner_html(&self, node: NodeId, html: &str);
  fn set_attribute(&self, node: NodeId, name: &str, value: &str);
  fn add_class(&self, node: NodeId, class: &str);
  fn remove_class(&self, node: NodeId, class: &str);

  fn title(&self) -> Option<String>;
  fn set_title(&self, title: &str);
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
  let mut result = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => result.push_str("&amp;"),
      '<' => result.push_str("&lt;"),
      '>' => result.push_str("&gt;"),
      '"' => result.push_str("&quot;"),
      '\'' => result.push_str("&#x27;"),
      _ => result.push(c),
    }
  }
  result
}
