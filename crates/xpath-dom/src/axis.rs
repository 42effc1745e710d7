//! Namespace axis over a DOM-style host tree.
//!
//! Walks from the context element up to the root, reading `xmlns` declaration
//! attributes. The nearest declaration of a prefix wins; a declaration with an
//! empty URI undeclares the prefix and hides outer bindings of it. The implicit
//! `xml` binding is always in scope.
//!
//! ```
//! use platynui_xpath_dom::axis::namespace_axis;
//! use platynui_xpath_dom::simple_node::{elem, xmlns};
//!
//! // <root xmlns="urn:d" xmlns:p="urn:p"><leaf xmlns:p="urn:q"/></root>
//! let root = elem("root")
//!     .attr(xmlns("", "urn:d"))
//!     .attr(xmlns("p", "urn:p"))
//!     .child(elem("leaf").attr(xmlns("p", "urn:q")))
//!     .build();
//! let leaf = root.children()[0].clone();
//!
//! let bindings: Vec<String> = namespace_axis(&leaf).iter().map(|n| n.to_string()).collect();
//! assert_eq!(
//!     bindings,
//!     [
//!         r#"xmlns:p="urn:q""#,
//!         r#"xmlns="urn:d""#,
//!         r#"xmlns:xml="http://www.w3.org/XML/1998/namespace""#,
//!     ]
//! );
//! ```

use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::consts::{XML_PREFIX, XML_URI, XMLNS_PREFIX, XMLNS_URI};
use crate::model::{DomNode, NodeKind};
use crate::namespace::{NamespaceNode, declared_prefix};

/// Whether `attribute` declares a namespace: its qualified name is `xmlns` or
/// `xmlns:*`, or the host places it in the xmlns namespace.
pub fn is_namespace_declaration<N: DomNode>(attribute: &N) -> bool {
    if attribute.kind() != NodeKind::Attribute {
        return false;
    }
    let name = attribute.node_name();
    name == XMLNS_PREFIX
        || name.starts_with("xmlns:")
        || attribute.namespace_uri().as_deref() == Some(XMLNS_URI)
}

/// One declaration found on the ancestor chain.
struct Binding {
    prefix: CompactString,
    uri: String,
}

/// Declarations in scope on `element`, nearest first, including undeclarations.
/// Only the first occurrence of each prefix is kept.
fn in_scope_bindings<N: DomNode>(element: &N) -> SmallVec<[Binding; 8]> {
    let mut out: SmallVec<[Binding; 8]> = SmallVec::new();
    let mut cur = Some(element.clone());
    while let Some(n) = cur {
        if n.kind() == NodeKind::Element {
            for attribute in n.attributes() {
                if !is_namespace_declaration(&attribute) {
                    continue;
                }
                let name = attribute.node_name();
                let prefix = CompactString::from(declared_prefix(&name));
                if out.iter().any(|b| b.prefix == prefix) {
                    continue;
                }
                out.push(Binding { prefix, uri: attribute.node_value().unwrap_or_default() });
            }
        }
        cur = n.parent();
    }
    out
}

/// Expand the namespace axis of `element`: one node per in-scope prefix, each
/// with `element` as its parent. Empty for anything but an element.
pub fn namespace_axis<N: DomNode>(element: &N) -> Vec<NamespaceNode<N>> {
    if element.kind() != NodeKind::Element {
        return Vec::new();
    }
    let bindings = in_scope_bindings(element);
    let mut nodes = Vec::with_capacity(bindings.len() + 1);
    for Binding { prefix, uri } in bindings {
        if uri.is_empty() {
            trace!(prefix = %prefix, "namespace undeclared");
            continue;
        }
        trace!(prefix = %prefix, uri = %uri, "namespace in scope");
        nodes.push(NamespaceNode::new(Some(element.clone()), prefix, uri));
    }
    if !nodes.iter().any(|n| n.ns_prefix() == XML_PREFIX) {
        nodes.push(NamespaceNode::new(Some(element.clone()), XML_PREFIX, XML_URI));
    }
    debug!(element = %element.node_name(), count = nodes.len(), "namespace axis expanded");
    nodes
}

/// URI bound to `prefix` on `element`; `None` or `""` asks for the default
/// namespace. Undeclared or unknown prefixes give `None`.
pub fn lookup_namespace_uri<N: DomNode>(element: &N, prefix: Option<&str>) -> Option<String> {
    let prefix = prefix.unwrap_or_default();
    if prefix == XML_PREFIX {
        return Some(XML_URI.to_string());
    }
    in_scope_bindings(element)
        .into_iter()
        .find(|b| b.prefix == prefix)
        .map(|b| b.uri)
        .filter(|uri| !uri.is_empty())
}

/// A non-default prefix bound to `namespace_uri` on `element`, nearest
/// declaration first.
pub fn lookup_prefix<N: DomNode>(element: &N, namespace_uri: &str) -> Option<String> {
    if namespace_uri.is_empty() {
        return None;
    }
    if namespace_uri == XML_URI {
        return Some(XML_PREFIX.to_string());
    }
    in_scope_bindings(element)
        .into_iter()
        .find(|b| !b.prefix.is_empty() && b.uri == namespace_uri)
        .map(|b| b.prefix.to_string())
}
