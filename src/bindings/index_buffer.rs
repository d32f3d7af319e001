// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Index buffers: tightly packed unsigned indices, accessed one `u32` at a time.
//!
//! Writing an index larger than the buffer's [`IndexType`] can hold saturates, so pick the
//! type with [`IndexType::for_maximum`].

use crate::bindings::check_len;
use crate::codec::{CursorReader, CursorWriter, Format, IntegerKind, Packing};
use crate::coordinates::RangeInclusive;
use crate::cursor::LinearCursor;
use crate::error::Error;

/// Storage width of one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    UnsignedByte,
    UnsignedShort,
    UnsignedInt,
}

impl IndexType {
    /// The smallest type that can hold every index up to `max_index`.
    pub const fn for_maximum(max_index: u32) -> Self {
        if max_index <= u8::MAX as u32 {
            IndexType::UnsignedByte
        } else if max_index <= u16::MAX as u32 {
            IndexType::UnsignedShort
        } else {
            IndexType::UnsignedInt
        }
    }

    pub const fn size_bytes(self) -> usize {
        self.format().bytes_per_element()
    }

    pub const fn format(self) -> Format {
        let kind = match self {
            IndexType::UnsignedByte => IntegerKind::U8,
            IndexType::UnsignedShort => IntegerKind::U16,
            IndexType::UnsignedInt => IntegerKind::U32,
        };
        Format::new("index", Packing::Integer(kind), 1)
    }
}

fn check_buffer(len: usize, index_type: IndexType, count: usize) -> Result<RangeInclusive, Error> {
    if count == 0 {
        return Err(Error::InvalidGeometry("index buffer needs at least one index"));
    }
    let required = count
        .checked_mul(index_type.size_bytes())
        .ok_or(Error::InvalidGeometry("index buffer size overflows"))?;
    check_len("index buffer", required, len)?;
    RangeInclusive::first(count)
}

fn cursor_for(all: RangeInclusive, range: RangeInclusive, index_type: IndexType) -> Result<LinearCursor, Error> {
    if !range.is_included_in(&all) {
        return Err(Error::InvalidGeometry("index range exceeds the index buffer"));
    }
    LinearCursor::new(range, 0, index_type.size_bytes())
}

/// Read-only view of index bytes.
#[derive(Debug, Clone, Copy)]
pub struct IndexBufferData<'a> {
    bytes: &'a [u8],
    index_type: IndexType,
    indices: RangeInclusive,
}

impl<'a> IndexBufferData<'a> {
    pub fn new(bytes: &'a [u8], index_type: IndexType, count: usize) -> Result<Self, Error> {
        let indices = check_buffer(bytes.len(), index_type, count)?;
        Ok(Self { bytes, index_type, indices })
    }

    pub const fn index_type(&self) -> IndexType { self.index_type }
    pub const fn count(&self) -> usize { self.indices.interval() as usize }

    pub fn reader(&self) -> Result<CursorReader<'a, LinearCursor, u32, 1>, Error> {
        self.reader_for(self.indices)
    }

    pub fn reader_for(&self, range: RangeInclusive) -> Result<CursorReader<'a, LinearCursor, u32, 1>, Error> {
        let cursor = cursor_for(self.indices, range, self.index_type)?;
        CursorReader::new(self.bytes, cursor, self.index_type.format())
    }

    /// Every index, widened to `u32`.
    pub fn read_all(&self) -> Result<Vec<u32>, Error> {
        Ok(self.reader()?.map(|[index]| index).collect())
    }
}

/// Mutable view of index bytes.
#[derive(Debug)]
pub struct IndexBufferDataMut<'a> {
    bytes: &'a mut [u8],
    index_type: IndexType,
    indices: RangeInclusive,
}

impl<'a> IndexBufferDataMut<'a> {
    pub fn new(bytes: &'a mut [u8], index_type: IndexType, count: usize) -> Result<Self, Error> {
        let indices = check_buffer(bytes.len(), index_type, count)?;
        Ok(Self { bytes, index_type, indices })
    }

    pub const fn index_type(&self) -> IndexType { self.index_type }
    pub const fn count(&self) -> usize { self.indices.interval() as usize }

    pub fn as_data(&self) -> IndexBufferData<'_> {
        IndexBufferData { bytes: &*self.bytes, index_type: self.index_type, indices: self.indices }
    }

    pub fn writer(&mut self) -> Result<CursorWriter<'_, LinearCursor, u32, 1>, Error> {
        self.writer_for(self.indices)
    }

    pub fn writer_for(&mut self, range: RangeInclusive) -> Result<CursorWriter<'_, LinearCursor, u32, 1>, Error> {
        let cursor = cursor_for(self.indices, range, self.index_type)?;
        CursorWriter::new(&mut *self.bytes, cursor, self.index_type.format())
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn smallest_type() {
        assert_eq!(IndexType::for_maximum(0), IndexType::UnsignedByte);
        assert_eq!(IndexType::for_maximum(255), IndexType::UnsignedByte);
        assert_eq!(IndexType::for_maximum(256), IndexType::UnsignedShort);
        assert_eq!(IndexType::for_maximum(65_536), IndexType::UnsignedInt);
        assert_eq!(IndexType::UnsignedShort.size_bytes(), 2);
    }

    #[test] fn write_then_read() {
        let mut bytes = [0_u8; 12];
        let mut indices = IndexBufferDataMut::new(&mut bytes, IndexType::UnsignedShort, 6).unwrap();
        let written = indices
            .writer()
            .unwrap()
            .write_all([0, 1, 2, 2, 1, 3].map(|i| [i]))
            .unwrap();
        assert_eq!(written, 6);
        assert_eq!(indices.as_data().read_all().unwrap(), vec![0, 1, 2, 2, 1, 3]);
    }

    #[test] fn oversized_indices_saturate() {
        let mut bytes = [0_u8; 1];
        let mut indices = IndexBufferDataMut::new(&mut bytes, IndexType::UnsignedByte, 1).unwrap();
        indices.writer().unwrap().write([1000]).unwrap();
        assert_eq!(bytes[0], 255);
    }
}
