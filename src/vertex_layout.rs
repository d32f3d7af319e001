// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Vertex buffer layout descriptions for interleaved GPU records.
//!
//! A vertex typically contains multiple attributes like position, color, texture coordinates,
//! etc.  The [`VertexLayout`] type records which attributes are present, their scalar types and
//! component counts, and derives the byte offset of each attribute and the stride of one record.
//!
//! Offsets are assigned in a single left-to-right pass in declaration order, with no padding:
//! each attribute occupies `components * scalar size` bytes and the next attribute starts
//! immediately after it.
//!
//! # Example
//!
//! ```
//! use buffer_cursors::vertex_layout::{VertexLayout, ScalarType};
//!
//! let layout = VertexLayout::builder()
//!     .add_field("position", ScalarType::Float, 3)
//!     .add_field("color", ScalarType::UnsignedByte, 4)
//!     .build()
//!     .unwrap();
//! assert_eq!(layout.offset_of("position").unwrap(), 0);
//! assert_eq!(layout.offset_of("color").unwrap(), 12);
//! assert_eq!(layout.stride(), 16);
//! assert_eq!(layout.offset_of_element("color", 2).unwrap(), 44);
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::error::Error;

/// Specifies the scalar type of each component of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarType {
    /// Signed 8-bit integer.
    Byte,
    /// Unsigned 8-bit integer.
    UnsignedByte,
    /// Signed 16-bit integer.
    Short,
    /// Unsigned 16-bit integer.
    UnsignedShort,
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    UnsignedInt,
    /// IEEE 754 binary16.
    HalfFloat,
    /// IEEE 754 binary32.
    ///
    /// This is the most common type for vertex attributes like positions,
    /// normals, texture coordinates, and colors.
    Float,
    /// IEEE 754 binary64.
    Double,
}

impl ScalarType {
    /// Size of one component in bytes.
    pub const fn size_bytes(self) -> usize {
        match self {
            ScalarType::Byte | ScalarType::UnsignedByte => 1,
            ScalarType::Short | ScalarType::UnsignedShort | ScalarType::HalfFloat => 2,
            ScalarType::Int | ScalarType::UnsignedInt | ScalarType::Float => 4,
            ScalarType::Double => 8,
        }
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, ScalarType::HalfFloat | ScalarType::Float | ScalarType::Double)
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScalarType::Byte => "byte",
            ScalarType::UnsignedByte => "unsigned byte",
            ScalarType::Short => "short",
            ScalarType::UnsignedShort => "unsigned short",
            ScalarType::Int => "int",
            ScalarType::UnsignedInt => "unsigned int",
            ScalarType::HalfFloat => "half float",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
        };
        f.write_str(name)
    }
}

pub(crate) fn describe(scalar: impl Display, components: usize) -> String {
    format!("{scalar} x{components}")
}

/// One named attribute of a [`VertexLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexField {
    name: String,
    r#type: ScalarType,
    components: usize,
}

impl VertexField {
    pub fn name(&self) -> &str { &self.name }
    pub const fn scalar_type(&self) -> ScalarType { self.r#type }
    pub const fn components(&self) -> usize { self.components }

    /// Bytes used by this attribute within one record.
    pub const fn size_bytes(&self) -> usize {
        self.components * self.r#type.size_bytes()
    }
}

/// Accumulates attributes in declaration order.  Call [`build`](Self::build) to freeze.
#[derive(Debug, Clone, Default)]
pub struct VertexLayoutBuilder {
    fields: Vec<VertexField>,
}

impl VertexLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.  Fields are laid out in the order they are added.
    pub fn add_field(mut self, name: impl Into<String>, r#type: ScalarType, components: usize) -> Self {
        self.fields.push(VertexField { name: name.into(), r#type, components });
        self
    }

    pub fn build(self) -> Result<VertexLayout, Error> {
        VertexLayout::new(self.fields)
    }
}

/// Describes the layout of an interleaved vertex buffer.
///
/// Immutable once built; offsets and stride are computed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    fields: Vec<VertexField>,
    offsets: Vec<usize>,
    indices: HashMap<String, usize>,
    stride: usize,
}

impl VertexLayout {
    pub fn builder() -> VertexLayoutBuilder {
        VertexLayoutBuilder::new()
    }

    /// Builds a layout from `(name, scalar type, component count)` triples.
    pub fn build<S: Into<String>>(
        attributes: impl IntoIterator<Item = (S, ScalarType, usize)>,
    ) -> Result<Self, Error> {
        Self::new(
            attributes
                .into_iter()
                .map(|(name, r#type, components)| VertexField { name: name.into(), r#type, components })
                .collect(),
        )
    }

    fn new(fields: Vec<VertexField>) -> Result<Self, Error> {
        if fields.is_empty() {
            return Err(Error::EmptyLayout);
        }
        let mut offsets = Vec::with_capacity(fields.len());
        let mut indices = HashMap::with_capacity(fields.len());
        let mut bytes = 0;
        for (index, field) in fields.iter().enumerate() {
            if !(1..=4).contains(&field.components) {
                return Err(Error::InvalidComponentCount {
                    name: field.name.clone(),
                    components: field.components,
                });
            }
            if indices.insert(field.name.clone(), index).is_some() {
                return Err(Error::DuplicateAttribute(field.name.clone()));
            }
            offsets.push(bytes);
            bytes += field.size_bytes();
        }
        Ok(Self { fields, offsets, indices, stride: bytes })
    }

    fn index_of(&self, name: &str) -> Result<usize, Error> {
        self.indices
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownAttribute(name.to_owned()))
    }

    /// Total bytes of one record.
    #[inline] pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; a built layout has at least one attribute.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Result<&VertexField, Error> {
        Ok(&self.fields[self.index_of(name)?])
    }

    /// Attributes in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &VertexField> {
        self.fields.iter()
    }

    /// Byte offset of the attribute within one record.
    pub fn offset_of(&self, name: &str) -> Result<usize, Error> {
        Ok(self.offsets[self.index_of(name)?])
    }

    /// Byte offset of the attribute of record `element` from the start of the buffer.
    ///
    /// `element` is not checked against any buffer length; cursors do that.  Fails with
    /// [`Error::InvalidGeometry`] if the offset does not fit in `usize`.
    pub fn offset_of_element(&self, name: &str, element: usize) -> Result<usize, Error> {
        let offset = self.offset_of(name)?;
        element
            .checked_mul(self.stride)
            .and_then(|start| start.checked_add(offset))
            .ok_or(Error::InvalidGeometry("element offset overflows"))
    }

    /// Byte offset of one component of the attribute within one record.
    pub fn component_offset(&self, name: &str, component: usize) -> Result<usize, Error> {
        let index = self.index_of(name)?;
        let field = &self.fields[index];
        if component >= field.components {
            return Err(Error::InvalidComponentCount { name: name.to_owned(), components: component });
        }
        Ok(self.offsets[index] + component * field.r#type.size_bytes())
    }

    /// Fails with [`Error::TypeMismatch`] unless the attribute is exactly
    /// `components` values of `scalar`.
    pub fn check_type(&self, name: &str, components: usize, scalar: ScalarType) -> Result<(), Error> {
        let field = self.field(name)?;
        if field.components != components || field.r#type != scalar {
            return Err(Error::TypeMismatch {
                name: name.to_owned(),
                actual: describe(field.r#type, field.components),
                required: describe(scalar, components),
            });
        }
        Ok(())
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn offsets_accumulate() {
        let layout = VertexLayout::build([
            ("a", ScalarType::Float, 1),
            ("b", ScalarType::Short, 2),
            ("c", ScalarType::Float, 2),
        ])
        .unwrap();
        assert_eq!(layout.offset_of("a").unwrap(), 0);
        assert_eq!(layout.offset_of("b").unwrap(), 4);
        assert_eq!(layout.offset_of("c").unwrap(), 8);
        assert_eq!(layout.stride(), 16);
        assert_eq!(layout.len(), 3);
    }

    #[test] fn position_color() {
        let layout = VertexLayout::builder()
            .add_field("position", ScalarType::Float, 3)
            .add_field("color", ScalarType::UnsignedByte, 4)
            .build()
            .unwrap();
        assert_eq!(layout.offset_of("color").unwrap(), 12);
        assert_eq!(layout.stride(), 16);
        assert_eq!(layout.offset_of_element("color", 2).unwrap(), 2 * 16 + 12);
        assert_eq!(layout.component_offset("position", 2).unwrap(), 8);
        assert_eq!(layout.component_offset("color", 3).unwrap(), 15);
    }

    #[test] fn duplicate_names() {
        let err = VertexLayout::build([("p", ScalarType::Float, 3), ("p", ScalarType::Float, 2)]).unwrap_err();
        assert_eq!(err, Error::DuplicateAttribute("p".to_owned()));
    }

    #[test] fn empty() {
        assert_eq!(VertexLayout::builder().build().unwrap_err(), Error::EmptyLayout);
    }

    #[test] fn component_counts() {
        assert!(matches!(
            VertexLayout::build([("p", ScalarType::Float, 0)]),
            Err(Error::InvalidComponentCount { components: 0, .. })
        ));
        assert!(matches!(
            VertexLayout::build([("p", ScalarType::Float, 5)]),
            Err(Error::InvalidComponentCount { components: 5, .. })
        ));
        let layout = VertexLayout::build([("p", ScalarType::Float, 2)]).unwrap();
        assert!(layout.component_offset("p", 2).is_err());
    }

    #[test] fn unknown_attribute() {
        let layout = VertexLayout::build([("p", ScalarType::Float, 3)]).unwrap();
        assert_eq!(layout.offset_of("q").unwrap_err(), Error::UnknownAttribute("q".to_owned()));
        assert!(layout.offset_of_element("q", 1).is_err());
        assert!(!layout.has_attribute("q"));
    }

    #[test] fn element_offset_overflow() {
        let layout = VertexLayout::build([("p", ScalarType::Float, 3)]).unwrap();
        assert!(matches!(layout.offset_of_element("p", usize::MAX), Err(Error::InvalidGeometry(_))));
        assert_eq!(layout.offset_of_element("p", usize::MAX / 12).unwrap(), usize::MAX / 12 * 12);
    }

    #[test] fn check_type() {
        let layout = VertexLayout::build([("uv", ScalarType::Int, 2)]).unwrap();
        assert!(layout.check_type("uv", 2, ScalarType::Int).is_ok());
        let err = layout.check_type("uv", 4, ScalarType::Float).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                name: "uv".to_owned(),
                actual: "int x2".to_owned(),
                required: "float x4".to_owned(),
            }
        );
    }
}
