// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Interleaved vertex data.

The bytes hold `elements` records, each laid out by a [`VertexLayout`].  An accessor for
one attribute walks that attribute across records: it starts at the attribute offset and
steps by the record stride.  The accessor's `[T; N]` must match the attribute's declared
scalar type and component count exactly.
*/

use crate::bindings::check_len;
use crate::codec::{Component, CursorReader, CursorWriter, Format};
use crate::coordinates::RangeInclusive;
use crate::cursor::LinearCursor;
use crate::error::Error;
use crate::vertex_layout::VertexLayout;

fn check_buffer(len: usize, layout: &VertexLayout, elements: usize) -> Result<RangeInclusive, Error> {
    if elements == 0 {
        return Err(Error::InvalidGeometry("array buffer needs at least one element"));
    }
    let required = elements
        .checked_mul(layout.stride())
        .ok_or(Error::InvalidGeometry("array buffer size overflows"))?;
    check_len("array buffer", required, len)?;
    RangeInclusive::first(elements)
}

/// Builds the cursor and format for attribute `name` over `range`.
fn attribute_access<T: Component, const N: usize>(
    layout: &VertexLayout,
    all: RangeInclusive,
    name: &str,
    range: RangeInclusive,
) -> Result<(LinearCursor, Format), Error> {
    layout.check_type(name, N, T::SCALAR)?;
    if !range.is_included_in(&all) {
        return Err(Error::InvalidGeometry("element range exceeds the array buffer"));
    }
    let field = layout.field(name)?;
    let cursor = LinearCursor::new(range, layout.offset_of(name)?, layout.stride())?;
    Ok((cursor, Format::for_attribute(field.scalar_type(), field.components())))
}

/// Read-only view of interleaved vertex bytes.
#[derive(Debug, Clone, Copy)]
pub struct ArrayBufferData<'a> {
    bytes: &'a [u8],
    layout: &'a VertexLayout,
    elements: RangeInclusive,
}

impl<'a> ArrayBufferData<'a> {
    /// Fails with [`Error::BufferTooSmall`] if `bytes` cannot hold `elements` records.
    pub fn new(bytes: &'a [u8], layout: &'a VertexLayout, elements: usize) -> Result<Self, Error> {
        let elements = check_buffer(bytes.len(), layout, elements)?;
        Ok(Self { bytes, layout, elements })
    }

    pub const fn layout(&self) -> &'a VertexLayout { self.layout }
    pub const fn element_count(&self) -> usize { self.elements.interval() as usize }

    /// Reads attribute `name` of every record.
    pub fn reader<T: Component, const N: usize>(
        &self,
        name: &str,
    ) -> Result<CursorReader<'a, LinearCursor, T, N>, Error> {
        self.reader_for(name, self.elements)
    }

    /// Reads attribute `name` of the records in `range`.
    pub fn reader_for<T: Component, const N: usize>(
        &self,
        name: &str,
        range: RangeInclusive,
    ) -> Result<CursorReader<'a, LinearCursor, T, N>, Error> {
        let (cursor, format) = attribute_access::<T, N>(self.layout, self.elements, name, range)?;
        CursorReader::new(self.bytes, cursor, format)
    }
}

/// Mutable view of interleaved vertex bytes.
#[derive(Debug)]
pub struct ArrayBufferDataMut<'a> {
    bytes: &'a mut [u8],
    layout: &'a VertexLayout,
    elements: RangeInclusive,
}

impl<'a> ArrayBufferDataMut<'a> {
    pub fn new(bytes: &'a mut [u8], layout: &'a VertexLayout, elements: usize) -> Result<Self, Error> {
        let elements = check_buffer(bytes.len(), layout, elements)?;
        Ok(Self { bytes, layout, elements })
    }

    pub const fn layout(&self) -> &'a VertexLayout { self.layout }
    pub const fn element_count(&self) -> usize { self.elements.interval() as usize }

    pub fn as_data(&self) -> ArrayBufferData<'_> {
        ArrayBufferData { bytes: &*self.bytes, layout: self.layout, elements: self.elements }
    }

    pub fn reader<T: Component, const N: usize>(
        &self,
        name: &str,
    ) -> Result<CursorReader<'_, LinearCursor, T, N>, Error> {
        self.reader_for(name, self.elements)
    }

    pub fn reader_for<T: Component, const N: usize>(
        &self,
        name: &str,
        range: RangeInclusive,
    ) -> Result<CursorReader<'_, LinearCursor, T, N>, Error> {
        let (cursor, format) = attribute_access::<T, N>(self.layout, self.elements, name, range)?;
        CursorReader::new(&*self.bytes, cursor, format)
    }

    /// Writes attribute `name` of every record.  Other attributes are untouched.
    pub fn writer<T: Component, const N: usize>(
        &mut self,
        name: &str,
    ) -> Result<CursorWriter<'_, LinearCursor, T, N>, Error> {
        self.writer_for(name, self.elements)
    }

    pub fn writer_for<T: Component, const N: usize>(
        &mut self,
        name: &str,
        range: RangeInclusive,
    ) -> Result<CursorWriter<'_, LinearCursor, T, N>, Error> {
        let (cursor, format) = attribute_access::<T, N>(self.layout, self.elements, name, range)?;
        CursorWriter::new(&mut *self.bytes, cursor, format)
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::vertex_layout::ScalarType;

    fn layout() -> VertexLayout {
        VertexLayout::builder()
            .add_field("position", ScalarType::Float, 3)
            .add_field("color", ScalarType::UnsignedByte, 4)
            .build()
            .unwrap()
    }

    #[test] fn buffer_sizes() {
        let layout = layout();
        assert_eq!(
            ArrayBufferData::new(&[0; 47], &layout, 3).unwrap_err(),
            Error::BufferTooSmall { required: 48, actual: 47 }
        );
        assert!(ArrayBufferData::new(&[0; 48], &layout, 0).is_err());
        assert_eq!(ArrayBufferData::new(&[0; 48], &layout, 3).unwrap().element_count(), 3);
    }

    #[test] fn range_must_fit() {
        let layout = layout();
        let bytes = [0_u8; 64];
        let data = ArrayBufferData::new(&bytes, &layout, 3).unwrap();
        assert!(matches!(
            data.reader_for::<f32, 3>("position", RangeInclusive::new(1, 3).unwrap()),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(data.reader_for::<f32, 3>("position", RangeInclusive::new(1, 2).unwrap()).is_ok());
    }

    #[test] fn unknown_attribute() {
        let layout = layout();
        let bytes = [0_u8; 16];
        let data = ArrayBufferData::new(&bytes, &layout, 1).unwrap();
        assert_eq!(
            data.reader::<f32, 2>("normal").unwrap_err(),
            Error::UnknownAttribute("normal".to_owned())
        );
    }
}
