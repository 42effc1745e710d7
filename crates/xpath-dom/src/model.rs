use core::any::Any;
use core::fmt;
use core::hash::Hash;
use std::sync::Arc;

use crate::consts;
use crate::error::DomError;

/// The seven XPath 1.0 node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
    Namespace,
}

impl NodeKind {
    /// Numeric node-type code (DOM codes, plus [`consts::NAMESPACE_NODE`]).
    pub fn code(self) -> u16 {
        match self {
            NodeKind::Document => consts::DOCUMENT_NODE,
            NodeKind::Element => consts::ELEMENT_NODE,
            NodeKind::Attribute => consts::ATTRIBUTE_NODE,
            NodeKind::Text => consts::TEXT_NODE,
            NodeKind::Comment => consts::COMMENT_NODE,
            NodeKind::ProcessingInstruction => consts::PROCESSING_INSTRUCTION_NODE,
            NodeKind::Namespace => consts::NAMESPACE_NODE,
        }
    }

    /// Map a node-type code back to an XPath kind. CDATA sections count as text;
    /// DOM types with no XPath counterpart (doctype, entity, ...) yield `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            consts::DOCUMENT_NODE => Some(NodeKind::Document),
            consts::ELEMENT_NODE => Some(NodeKind::Element),
            consts::ATTRIBUTE_NODE => Some(NodeKind::Attribute),
            consts::TEXT_NODE | consts::CDATA_SECTION_NODE => Some(NodeKind::Text),
            consts::COMMENT_NODE => Some(NodeKind::Comment),
            consts::PROCESSING_INSTRUCTION_NODE => Some(NodeKind::ProcessingInstruction),
            consts::NAMESPACE_NODE => Some(NodeKind::Namespace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
    pub ns_uri: Option<String>,
}

impl QName {
    /// Split a lexical `prefix:local` name. No validation beyond the split.
    pub fn parse(qualified: &str, ns_uri: Option<String>) -> Self {
        match qualified.split_once(':') {
            Some((prefix, local)) => {
                Self { prefix: Some(prefix.to_string()), local: local.to_string(), ns_uri }
            }
            None => Self { prefix: None, local: qualified.to_string(), ns_uri },
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(p) => write!(f, "{}:{}", p, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Opaque value stored in a node's user-data slot.
pub type UserData = Arc<dyn Any + Send + Sync>;

/// Read access a namespace node needs from the host tree.
///
/// Implementors are cheap-clone handles into the tree (e.g. `Arc` wrappers).
/// `Eq`/`Hash` are the host's own node equality; namespace node equality
/// delegates to it for the parent component.
pub trait DomNode: Clone + Eq + Hash + fmt::Debug + Send + Sync {
    fn kind(&self) -> NodeKind;

    /// Qualified name as the host reports it (`xmlns:foo`, `p:item`, `#text`).
    fn node_name(&self) -> String;

    fn local_name(&self) -> Option<String> {
        match self.kind() {
            NodeKind::Element | NodeKind::Attribute => {
                let name = self.node_name();
                Some(match name.rsplit_once(':') {
                    Some((_, local)) => local.to_string(),
                    None => name,
                })
            }
            _ => None,
        }
    }

    fn node_value(&self) -> Option<String>;

    /// XPath string value. Hosts whose elements and documents have text
    /// descendants override this; the default is the node value.
    fn string_value(&self) -> String {
        self.node_value().unwrap_or_default()
    }

    fn namespace_uri(&self) -> Option<String> {
        None
    }

    fn parent(&self) -> Option<Self>;
    fn owner_document(&self) -> Option<Self>;
    fn attributes(&self) -> Vec<Self>;

    /// Reference identity, independent of `Eq`.
    fn is_same_node(&self, other: &Self) -> bool;
}

/// The generic node capability set exposed to XPath evaluators.
///
/// Absent results are `None`; operations that may fail return [`DomError`].
/// `Ref` is the handle type returned by structural accessors.
pub trait Node {
    type Ref: Clone;
    type ChildList: IntoIterator<Item = Self::Ref>;

    fn node_name(&self) -> String;
    fn node_value(&self) -> Option<String>;
    fn set_node_value(&self, value: &str) -> Result<(), DomError>;
    fn kind(&self) -> NodeKind;

    fn node_type(&self) -> u16 {
        self.kind().code()
    }

    fn parent_node(&self) -> Option<Self::Ref>;
    fn child_nodes(&self) -> Self::ChildList;
    fn first_child(&self) -> Option<Self::Ref>;
    fn last_child(&self) -> Option<Self::Ref>;
    fn previous_sibling(&self) -> Option<Self::Ref>;
    fn next_sibling(&self) -> Option<Self::Ref>;
    fn attributes(&self) -> Option<Vec<Self::Ref>>;
    fn owner_document(&self) -> Option<Self::Ref>;

    fn insert_before(
        &self,
        new_child: &Self::Ref,
        ref_child: Option<&Self::Ref>,
    ) -> Result<Self::Ref, DomError>;
    fn replace_child(&self, new_child: &Self::Ref, old_child: &Self::Ref) -> Result<Self::Ref, DomError>;
    fn remove_child(&self, old_child: &Self::Ref) -> Result<Self::Ref, DomError>;
    fn append_child(&self, new_child: &Self::Ref) -> Result<Self::Ref, DomError>;

    fn has_child_nodes(&self) -> bool;

    fn clone_node(&self, deep: bool) -> Self
    where
        Self: Sized;

    fn normalize(&self);
    fn is_supported(&self, feature: &str, version: &str) -> bool;

    fn namespace_uri(&self) -> Option<String>;
    fn prefix(&self) -> Option<String>;
    fn set_prefix(&self, prefix: &str) -> Result<(), DomError>;
    fn local_name(&self) -> Option<String>;
    fn has_attributes(&self) -> bool;

    fn base_uri(&self) -> Result<Option<String>, DomError>;
    fn compare_document_position(&self, other: &Self::Ref) -> Result<u16, DomError>;

    fn text_content(&self) -> Option<String>;
    fn set_text_content(&self, text: &str) -> Result<(), DomError>;

    fn is_same_node(&self, other: &Self) -> bool;
    fn is_equal_node(&self, other: &Self) -> bool;

    fn lookup_prefix(&self, namespace_uri: &str) -> Result<Option<String>, DomError>;
    fn is_default_namespace(&self, namespace_uri: &str) -> Result<bool, DomError>;
    fn lookup_namespace_uri(&self, prefix: Option<&str>) -> Result<Option<String>, DomError>;

    fn feature(&self, feature: &str, version: &str) -> Option<UserData>;
    fn set_user_data(&self, key: &str, data: Option<UserData>) -> Result<Option<UserData>, DomError>;
    fn user_data(&self, key: &str) -> Result<Option<UserData>, DomError>;
}
