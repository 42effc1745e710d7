//! Simple in-memory host tree implementing [`DomNode`], used in tests and quick prototypes.
//!
//! Focus:
//! - Ergonomic builder for quick test tree creation
//! - Namespace declarations are ordinary `xmlns` attributes, as in a DOM
//! - Immutable once built; parent links are set exactly once, so no locking
//! - Reusing an attached node in another builder attaches a deep copy
//!
//! Example:
//! ```
//! use platynui_xpath_dom::simple_node::{doc, elem, text, attr, xmlns};
//! use platynui_xpath_dom::{DomNode, NodeKind};
//!
//! // <root xmlns:p="urn:one" id="r"><child>Hello</child></root>
//! let document = doc()
//!     .child(
//!         elem("root")
//!             .attr(xmlns("p", "urn:one"))
//!             .attr(attr("id", "r"))
//!             .child(elem("child").child(text("Hello"))),
//!     )
//!     .build();
//!
//! let root = document.children()[0].clone();
//! assert_eq!(root.node_name(), "root");
//! assert_eq!(root.attributes().len(), 2);
//! assert_eq!(root.owner_document(), Some(document.clone()));
//! assert_eq!(document.kind(), NodeKind::Document);
//! ```
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use crate::consts::{XMLNS_PREFIX, XMLNS_URI};
use crate::model::{DomNode, NodeKind, QName};

#[derive(Debug)]
pub(crate) struct Inner {
    kind: NodeKind,
    name: Option<QName>,
    value: Option<String>, // text / attribute / comment / PI content
    parent: OnceLock<Weak<Inner>>,
    attributes: Vec<SimpleNode>,
    children: Vec<SimpleNode>,
}

/// A simple Arc-backed node implementation. Equality is pointer identity.
#[derive(Clone)]
pub struct SimpleNode(pub(crate) Arc<Inner>);

impl PartialEq for SimpleNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for SimpleNode {}
impl std::hash::Hash for SimpleNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for SimpleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleNode")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("value", &self.0.value)
            .finish()
    }
}

fn leaf(kind: NodeKind, name: Option<QName>, value: Option<String>) -> SimpleNode {
    SimpleNode(Arc::new(Inner {
        kind,
        name,
        value,
        parent: OnceLock::new(),
        attributes: Vec::new(),
        children: Vec::new(),
    }))
}

impl SimpleNode {
    pub fn document() -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Document, None)
    }

    pub fn element(name: &str) -> SimpleNodeBuilder {
        SimpleNodeBuilder::new(NodeKind::Element, Some(QName::parse(name, None)))
    }

    /// Attribute with a qualified name. `xmlns` and `xmlns:*` names are placed
    /// in the xmlns namespace.
    pub fn attribute(name: &str, value: &str) -> SimpleNode {
        let ns_uri = (name == XMLNS_PREFIX || name.starts_with("xmlns:")).then(|| XMLNS_URI.to_string());
        leaf(NodeKind::Attribute, Some(QName::parse(name, ns_uri)), Some(value.to_string()))
    }

    /// Attribute whose reported name is `name` verbatim and whose namespace is
    /// `ns_uri`. Lets tests model hosts that report only the local name of
    /// namespace declarations.
    pub fn attribute_ns(name: &str, ns_uri: &str, value: &str) -> SimpleNode {
        let qname = QName { prefix: None, local: name.to_string(), ns_uri: Some(ns_uri.to_string()) };
        leaf(NodeKind::Attribute, Some(qname), Some(value.to_string()))
    }

    /// Namespace declaration attribute: `xmlns="uri"` for an empty prefix,
    /// `xmlns:prefix="uri"` otherwise.
    pub fn namespace_declaration(prefix: &str, uri: &str) -> SimpleNode {
        if prefix.is_empty() {
            Self::attribute(XMLNS_PREFIX, uri)
        } else {
            Self::attribute(&format!("xmlns:{prefix}"), uri)
        }
    }

    pub fn text(value: &str) -> SimpleNode {
        leaf(NodeKind::Text, None, Some(value.to_string()))
    }

    pub fn comment(value: &str) -> SimpleNode {
        leaf(NodeKind::Comment, None, Some(value.to_string()))
    }

    pub fn pi(target: &str, data: &str) -> SimpleNode {
        leaf(NodeKind::ProcessingInstruction, Some(QName::parse(target, None)), Some(data.to_string()))
    }

    pub fn name(&self) -> Option<&QName> {
        self.0.name.as_ref()
    }

    pub fn children(&self) -> Vec<SimpleNode> {
        self.0.children.clone()
    }

    fn root(&self) -> SimpleNode {
        let mut cur = self.clone();
        while let Some(parent) = cur.parent() {
            cur = parent;
        }
        cur
    }
}

pub struct SimpleNodeBuilder {
    kind: NodeKind,
    name: Option<QName>,
    pending_children: Vec<SimpleNode>,
    pending_attrs: Vec<SimpleNode>,
}

impl SimpleNodeBuilder {
    fn new(kind: NodeKind, name: Option<QName>) -> Self {
        Self { kind, name, pending_children: Vec::new(), pending_attrs: Vec::new() }
    }

    pub fn child(mut self, child: impl Into<SimpleNodeOrBuilder>) -> Self {
        self.pending_children.push(child.into().build());
        self
    }

    pub fn children<I: IntoIterator<Item = SimpleNodeOrBuilder>>(mut self, it: I) -> Self {
        self.pending_children.extend(it.into_iter().map(SimpleNodeOrBuilder::build));
        self
    }

    pub fn attr(mut self, attr: SimpleNode) -> Self {
        debug_assert!(attr.kind() == NodeKind::Attribute);
        self.pending_attrs.push(attr);
        self
    }

    pub fn attrs<I: IntoIterator<Item = SimpleNode>>(mut self, attrs: I) -> Self {
        for a in attrs {
            self = self.attr(a);
        }
        self
    }

    /// Finalize relationships. A node that already has a parent is deep-copied,
    /// so `parent()` and `children()` always agree.
    pub fn build(self) -> SimpleNode {
        SimpleNode(Arc::new_cyclic(|me: &Weak<Inner>| Inner {
            kind: self.kind,
            name: self.name,
            value: None,
            parent: OnceLock::new(),
            attributes: self.pending_attrs.into_iter().map(|n| attach(n, me)).collect(),
            children: self.pending_children.into_iter().map(|n| attach(n, me)).collect(),
        }))
    }
}

/// Link `node` under `parent`, or a fresh copy of it if it is already linked.
fn attach(node: SimpleNode, parent: &Weak<Inner>) -> SimpleNode {
    match node.0.parent.set(parent.clone()) {
        Ok(()) => node,
        Err(_) => attach(deep_copy(&node), parent),
    }
}

fn deep_copy(node: &SimpleNode) -> SimpleNode {
    SimpleNode(Arc::new_cyclic(|me: &Weak<Inner>| Inner {
        kind: node.0.kind,
        name: node.0.name.clone(),
        value: node.0.value.clone(),
        parent: OnceLock::new(),
        attributes: node.0.attributes.iter().map(|a| attach(deep_copy(a), me)).collect(),
        children: node.0.children.iter().map(|c| attach(deep_copy(c), me)).collect(),
    }))
}

pub enum SimpleNodeOrBuilder {
    Built(SimpleNode),
    Builder(SimpleNodeBuilder),
}

impl SimpleNodeOrBuilder {
    fn build(self) -> SimpleNode {
        match self {
            SimpleNodeOrBuilder::Built(n) => n,
            SimpleNodeOrBuilder::Builder(b) => b.build(),
        }
    }
}

impl From<SimpleNode> for SimpleNodeOrBuilder {
    fn from(n: SimpleNode) -> Self {
        SimpleNodeOrBuilder::Built(n)
    }
}
impl From<SimpleNodeBuilder> for SimpleNodeOrBuilder {
    fn from(b: SimpleNodeBuilder) -> Self {
        SimpleNodeOrBuilder::Builder(b)
    }
}

// Convenience helper functions for concise test code
pub fn elem(name: &str) -> SimpleNodeBuilder {
    SimpleNode::element(name)
}
pub fn text(v: &str) -> SimpleNode {
    SimpleNode::text(v)
}
pub fn attr(name: &str, v: &str) -> SimpleNode {
    SimpleNode::attribute(name, v)
}
pub fn xmlns(prefix: &str, uri: &str) -> SimpleNode {
    SimpleNode::namespace_declaration(prefix, uri)
}
pub fn comment(v: &str) -> SimpleNode {
    SimpleNode::comment(v)
}
pub fn pi(target: &str, data: &str) -> SimpleNode {
    SimpleNode::pi(target, data)
}
pub fn doc() -> SimpleNodeBuilder {
    SimpleNode::document()
}

impl DomNode for SimpleNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }

    fn node_name(&self) -> String {
        match self.0.kind {
            NodeKind::Document => "#document".to_string(),
            NodeKind::Text => "#text".to_string(),
            NodeKind::Comment => "#comment".to_string(),
            _ => self.0.name.as_ref().map(QName::to_string).unwrap_or_default(),
        }
    }

    fn node_value(&self) -> Option<String> {
        self.0.value.clone()
    }

    /// Concatenated text descendants for elements and documents, own value otherwise.
    fn string_value(&self) -> String {
        match self.0.kind {
            NodeKind::Element | NodeKind::Document => {
                fn dfs(n: &SimpleNode, out: &mut String) {
                    if n.0.kind == NodeKind::Text
                        && let Some(v) = &n.0.value
                    {
                        out.push_str(v);
                    }
                    for c in &n.0.children {
                        dfs(c, out);
                    }
                }
                let mut out = String::new();
                dfs(self, &mut out);
                out
            }
            _ => self.0.value.clone().unwrap_or_default(),
        }
    }

    fn namespace_uri(&self) -> Option<String> {
        self.0.name.as_ref().and_then(|q| q.ns_uri.clone())
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.get().and_then(Weak::upgrade).map(SimpleNode)
    }

    /// Root document of the tree; absent for the document itself and for
    /// trees without a document root.
    fn owner_document(&self) -> Option<Self> {
        if self.0.kind == NodeKind::Document {
            return None;
        }
        let root = self.root();
        (root.0.kind == NodeKind::Document).then_some(root)
    }

    fn attributes(&self) -> Vec<Self> {
        self.0.attributes.clone()
    }

    fn is_same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
