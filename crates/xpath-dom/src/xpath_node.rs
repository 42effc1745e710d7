use core::fmt;

use crate::model::{DomNode, NodeKind};
use crate::namespace::NamespaceNode;

/// A node in an XPath result sequence: either a node of the host tree or a
/// synthesized namespace node. Distinguish them with [`XPathNode::kind`].
///
/// A namespace node never equals a host node, whatever their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum XPathNode<N: DomNode> {
    Host(N),
    Namespace(NamespaceNode<N>),
}

impl<N: DomNode> XPathNode<N> {
    pub fn kind(&self) -> NodeKind {
        match self {
            XPathNode::Host(n) => n.kind(),
            XPathNode::Namespace(_) => NodeKind::Namespace,
        }
    }

    pub fn node_type(&self) -> u16 {
        self.kind().code()
    }

    pub fn node_name(&self) -> String {
        match self {
            XPathNode::Host(n) => n.node_name(),
            XPathNode::Namespace(ns) => ns.ns_prefix().to_string(),
        }
    }

    pub fn local_name(&self) -> Option<String> {
        match self {
            XPathNode::Host(n) => n.local_name(),
            XPathNode::Namespace(ns) => Some(ns.ns_prefix().to_string()),
        }
    }

    pub fn node_value(&self) -> Option<String> {
        match self {
            XPathNode::Host(n) => n.node_value(),
            XPathNode::Namespace(ns) => Some(ns.uri().to_string()),
        }
    }

    /// XPath string value; the URI for a namespace node.
    pub fn string_value(&self) -> String {
        match self {
            XPathNode::Host(n) => n.string_value(),
            XPathNode::Namespace(ns) => ns.uri().to_string(),
        }
    }

    pub fn parent(&self) -> Option<N> {
        match self {
            XPathNode::Host(n) => n.parent(),
            XPathNode::Namespace(ns) => ns.parent().cloned(),
        }
    }

    pub fn owner_document(&self) -> Option<N> {
        match self {
            XPathNode::Host(n) => n.owner_document(),
            XPathNode::Namespace(ns) => ns.parent().and_then(DomNode::owner_document),
        }
    }

    pub fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (XPathNode::Host(a), XPathNode::Host(b)) => a.is_same_node(b),
            (XPathNode::Namespace(a), XPathNode::Namespace(b)) => crate::model::Node::is_same_node(a, b),
            _ => false,
        }
    }

    pub fn as_host(&self) -> Option<&N> {
        match self {
            XPathNode::Host(n) => Some(n),
            XPathNode::Namespace(_) => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&NamespaceNode<N>> {
        match self {
            XPathNode::Namespace(ns) => Some(ns),
            XPathNode::Host(_) => None,
        }
    }
}

impl<N: DomNode> From<N> for XPathNode<N> {
    fn from(n: N) -> Self {
        XPathNode::Host(n)
    }
}

impl<N: DomNode> From<NamespaceNode<N>> for XPathNode<N> {
    fn from(ns: NamespaceNode<N>) -> Self {
        XPathNode::Namespace(ns)
    }
}

impl<N: DomNode> fmt::Display for XPathNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XPathNode::Host(n) => match (n.kind(), n.node_value()) {
                (NodeKind::Attribute, Some(v)) => write!(f, "{}=\"{}\"", n.node_name(), v),
                (NodeKind::Element | NodeKind::Document, _) | (_, None) => f.write_str(&n.node_name()),
                (_, Some(v)) => write!(f, "{}({})", n.node_name(), v),
            },
            XPathNode::Namespace(ns) => fmt::Display::fmt(ns, f),
        }
    }
}
