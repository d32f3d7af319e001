// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Error type shared by layouts, cursors and codecs.
//!
//! All of these are contract violations detected at construction time (bad geometry,
//! wrong attribute name or type) or a read/write through a cursor that has left its
//! permitted region.  None are fatal; the caller recovers by choosing different
//! parameters.

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Two attributes in one layout share a name.
    #[error("Attribute {0:?} is declared more than once")]
    DuplicateAttribute(String),
    /// A layout was built with no attributes.
    #[error("A vertex layout needs at least one attribute")]
    EmptyLayout,
    /// No attribute with this name exists in the layout.
    #[error("No attribute named {0:?}")]
    UnknownAttribute(String),
    /// The requested accessor does not match the declared type of the data.
    #[error("Type mismatch for {name}: data is {actual}, accessor requested {required}")]
    TypeMismatch {
        /// Attribute or format name.
        name: String,
        /// Declared scalar type and arity.
        actual: String,
        /// Requested scalar type and arity.
        required: String,
    },
    /// A read or write was attempted while the cursor is outside its inner region.
    #[error("Cursor is out of range at ({x}, {y})")]
    OutOfRange {
        /// Current x (or index, for 1D cursors).
        x: i64,
        /// Current y (always 0 for 1D cursors).
        y: i64,
    },
    /// Cursor geometry is inconsistent.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(&'static str),
    /// The byte region cannot hold every element the cursor may address.
    #[error("Buffer of {actual} bytes is too small, {required} bytes are required")]
    BufferTooSmall {
        /// Bytes needed.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// An attribute arity (or component index) outside the supported range.
    #[error("Attribute {name:?} has an unsupported component count {components}")]
    InvalidComponentCount {
        /// Attribute name.
        name: String,
        /// The rejected count or index.
        components: usize,
    },
}
