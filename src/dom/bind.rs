//! Optional field-to-node bindings.
//!
//! Every helper writes only when both the node and a non-empty value exist,
//! and otherwise leaves the document exactly as it was. Calling one twice
//! with the same value leaves the same result.

use super::{Document, NodeId};

/// Apply `apply` to the first node matching `selector` if `value` is present.
///
/// Returns whether a write happened.
pub fn bind_if_present<D, F>(doc: &D, selector: &str, value: Option<&str>, apply: F) -> bool
where
  D: Document + ?Sized,
  F: FnOnce(&D, NodeId, &str),
{
  let Some(value) = value.filter(|v| !v.is_empty()) else {
    return false;
  };
  let Some(node) = doc.query_selector(selector) else {
    return false;
  };
  apply(doc, node, value);
  true
}

/// Apply `apply` to every node matching `selector` if `value` is present.
///
/// Returns the number of nodes written.
pub fn bind_all<D, F>(doc: &D, selector: &str, value: Option<&str>, apply: F) -> usize
where
  D: Document + ?Sized,
  F: Fn(&D, NodeId, &str),
{
  let Some(value) = value.filter(|v| !v.is_empty()) else {
    return 0;
  };
  let nodes = doc.query_selector_all(selector);
  for &node in &nodes {
    apply(doc, node, value);
  }
  nodes.len()
}

pub fn bind_text<D: Document + ?Sized>(doc: &D, selector: &str, value: Option<&str>) -> bool {
  bind_if_present(doc, selector, value, |d, node, v| d.set_text(node, v))
}

pub fn bind_html<D: Document + ?Sized>(doc: &D, selector: &str, value: Option<&str>) -> bool {
  bind_if_present(doc, selector, value, |d, node, v| d.set_inner_html(node, v))
}

pub fn bind_attr<D: Document + ?Sized>(
  doc: &D,
  selector: &str,
  attribute: &str,
  value: Option<&str>,
) -> bool {
  bind_if_present(doc, selector, value, |d, node, v| d.set_attribute(node, attribute, v))
}
