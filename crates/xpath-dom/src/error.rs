//! Typed error definitions for namespace nodes.
//!
//! [`DomError::NoModificationAllowed`] is returned by every attempt to change a
//! namespace node, [`DomError::Unsupported`] by accessors that have no meaning on
//! a synthesized node.

use thiserror::Error;

/// DOM exception code `NO_MODIFICATION_ALLOWED_ERR`.
const NO_MODIFICATION_ALLOWED_ERR: u16 = 7;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomError {
    /// A mutating operation was called on a read-only namespace node.
    #[error("Namespace node may not be modified")]
    NoModificationAllowed,

    /// The named accessor is not implemented for namespace nodes.
    #[error("operation not supported on namespace nodes: {0}")]
    Unsupported(&'static str),
}

impl DomError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported(operation)
    }

    /// DOM exception code for errors that have one.
    pub fn dom_code(&self) -> Option<u16> {
        match self {
            Self::NoModificationAllowed => Some(NO_MODIFICATION_ALLOWED_ERR),
            Self::Unsupported(_) => None,
        }
    }
}
