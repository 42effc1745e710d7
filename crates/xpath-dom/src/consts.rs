//! Well-known namespace URIs, reserved prefixes and node-type codes.

/// Namespace bound to the reserved `xml` prefix.
pub const XML_URI: &str = "http://www.w3.org/XML/1998/namespace";
/// Namespace of `xmlns` / `xmlns:*` declaration attributes.
pub const XMLNS_URI: &str = "http://www.w3.org/2000/xmlns/";

pub const XML_PREFIX: &str = "xml";
pub const XMLNS_PREFIX: &str = "xmlns";

// DOM node-type codes.
pub const ELEMENT_NODE: u16 = 1;
pub const ATTRIBUTE_NODE: u16 = 2;
pub const TEXT_NODE: u16 = 3;
pub const CDATA_SECTION_NODE: u16 = 4;
pub const ENTITY_REFERENCE_NODE: u16 = 5;
pub const ENTITY_NODE: u16 = 6;
pub const PROCESSING_INSTRUCTION_NODE: u16 = 7;
pub const COMMENT_NODE: u16 = 8;
pub const DOCUMENT_NODE: u16 = 9;
pub const DOCUMENT_TYPE_NODE: u16 = 10;
pub const DOCUMENT_FRAGMENT_NODE: u16 = 11;
pub const NOTATION_NODE: u16 = 12;

/// Node-type code reported by synthesized namespace nodes. Lies outside the
/// range used by the DOM so it never collides with a host-defined type.
pub const NAMESPACE_NODE: u16 = 13;
