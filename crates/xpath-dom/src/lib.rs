//! Namespace nodes for XPath evaluation over DOM-style trees.
//!
//! DOM-style trees expose six of the seven XPath node kinds and keep namespace
//! declarations as `xmlns` attributes. This crate supplies the seventh: a
//! read-only [`NamespaceNode`] synthesized per in-scope prefix, a tagged
//! [`XPathNode`] to carry it through result sequences next to host nodes, and
//! the namespace-axis expansion that produces it.

pub mod axis;
pub mod consts;
pub mod error;
pub mod model;
pub mod namespace;
pub mod node_list;
pub mod simple_node;
pub mod xpath_node;

pub use axis::{is_namespace_declaration, lookup_namespace_uri, lookup_prefix, namespace_axis};
pub use consts::NAMESPACE_NODE;
pub use error::DomError;
pub use model::{DomNode, Node, NodeKind, QName, UserData};
pub use namespace::NamespaceNode;
pub use node_list::EmptyNodeList;
pub use simple_node::{SimpleNode, SimpleNodeBuilder, attr, doc as simple_doc, elem, text, xmlns};
pub use xpath_node::XPathNode;
