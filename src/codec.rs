// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Typed element access through a cursor.

A [`Format`] describes how one element is stored: a [`Packing`] strategy and a component
count.  A [`CursorReader`] or [`CursorWriter`] combines a format, a cursor and a byte region
and converts whole elements between storage and `[T; N]` for a [`Component`] type `T`.

Every check that can be made up front happens at construction:

* `N` must equal the format's component count,
* integer component types cannot access floating-point storage,
* the region must be long enough for every position the cursor can address.

After that, a read or write can only fail because the cursor is out of range.

```
use buffer_cursors::codec::{CursorWriter, Format, IntegerKind, Packing};
use buffer_cursors::coordinates::Area;
use buffer_cursors::cursor::AreaCursor;

let format = Format::new("rgba8", Packing::Normalized(IntegerKind::U8), 4);
let area = Area::sized(2, 1).unwrap();
let mut bytes = vec![0_u8; 8];
let cursor = AreaCursor::new(area, area, format.bytes_per_element()).unwrap();
let mut writer = CursorWriter::<_, f32, 4>::new(&mut bytes, cursor, format).unwrap();
writer.write([1.0, 0.0, 0.5, 1.0]).unwrap();
assert_eq!(&bytes[..4], &[255, 0, 128, 255]);
```
*/

mod component;
mod packing;

use std::marker::PhantomData;

pub use component::{Component, ComponentKind};
pub use packing::{BitLayout, IntegerKind, Packing};

use crate::cursor::{AreaCursor, Cursor, LinearCursor};
use crate::error::Error;
use crate::vertex_layout::{describe, ScalarType};

/// Storage description of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    label: &'static str,
    packing: Packing,
    components: usize,
}

impl Format {
    /// `label` names the format in error messages.
    ///
    /// For [`Packing::BitField`] the component count is taken from the layout.
    pub const fn new(label: &'static str, packing: Packing, components: usize) -> Self {
        let components = match packing {
            Packing::BitField(layout) => layout.components(),
            _ => components,
        };
        Self { label, packing, components }
    }

    /// The format of a vertex attribute.
    pub const fn for_attribute(scalar: ScalarType, components: usize) -> Self {
        Self::new("vertex attribute", Packing::for_scalar(scalar), components)
    }

    #[inline] pub const fn label(&self) -> &'static str { self.label }
    #[inline] pub const fn packing(&self) -> Packing { self.packing }
    #[inline] pub const fn components(&self) -> usize { self.components }

    /// Stored size of one element.
    #[inline] pub const fn bytes_per_element(&self) -> usize {
        match self.packing {
            Packing::BitField(layout) => layout.word_bytes(),
            packing => packing.component_bytes() * self.components,
        }
    }

    /// Fails with [`Error::TypeMismatch`] unless `[T; N]` can access this format.
    pub fn check_access<T: Component, const N: usize>(&self) -> Result<(), Error> {
        let integer_on_float = T::KIND == ComponentKind::Integer && self.packing.is_floating_point();
        if N != self.components || integer_on_float {
            return Err(Error::TypeMismatch {
                name: self.label.to_owned(),
                actual: describe(self.packing, self.components),
                required: describe(std::any::type_name::<T>(), N),
            });
        }
        Ok(())
    }

    /// Decodes the element at the start of `bytes`.
    ///
    /// Fails with [`Error::TypeMismatch`] or [`Error::BufferTooSmall`].
    pub fn decode<T: Component, const N: usize>(&self, bytes: &[u8], out: &mut [T; N]) -> Result<(), Error> {
        self.check_element::<T, N>(bytes.len())?;
        self.packing.decode(bytes, out);
        Ok(())
    }

    /// Encodes `value` at the start of `bytes`.
    pub fn encode<T: Component, const N: usize>(&self, bytes: &mut [u8], value: &[T; N]) -> Result<(), Error> {
        self.check_element::<T, N>(bytes.len())?;
        self.packing.encode(bytes, value);
        Ok(())
    }

    fn check_element<T: Component, const N: usize>(&self, len: usize) -> Result<(), Error> {
        self.check_access::<T, N>()?;
        let required = self.bytes_per_element();
        if len < required {
            return Err(Error::BufferTooSmall { required, actual: len });
        }
        Ok(())
    }
}

fn check_region<C: Cursor, T: Component, const N: usize>(
    format: &Format,
    cursor: &C,
    len: usize,
) -> Result<(), Error> {
    format.check_access::<T, N>()?;
    let required = cursor.required_len(format.bytes_per_element())?;
    if len < required {
        return Err(Error::BufferTooSmall { required, actual: len });
    }
    Ok(())
}

/// Reads `[T; N]` elements from a byte region in cursor order.
///
/// Also an [`Iterator`] that yields elements until the cursor becomes invalid.
#[derive(Debug)]
pub struct CursorReader<'a, C, T, const N: usize> {
    bytes: &'a [u8],
    cursor: C,
    format: Format,
    _component: PhantomData<fn() -> T>,
}

impl<'a, C: Cursor, T: Component, const N: usize> CursorReader<'a, C, T, N> {
    /// Fails with [`Error::TypeMismatch`] or [`Error::BufferTooSmall`].
    pub fn new(bytes: &'a [u8], cursor: C, format: Format) -> Result<Self, Error> {
        check_region::<C, T, N>(&format, &cursor, bytes.len())?;
        Ok(Self { bytes, cursor, format, _component: PhantomData })
    }

    /// Reads the current element into `out` and advances.
    ///
    /// Fails with [`Error::OutOfRange`] if the cursor is invalid; `out` is then untouched.
    #[inline] pub fn read_into(&mut self, out: &mut [T; N]) -> Result<(), Error> {
        let offset = self.cursor.current_offset()?;
        self.format.packing.decode(&self.bytes[offset..], out);
        self.cursor.next();
        Ok(())
    }

    /// Reads the current element and advances.
    #[inline] pub fn read(&mut self) -> Result<[T; N], Error> {
        let mut out = [T::default(); N];
        self.read_into(&mut out)?;
        Ok(out)
    }

    #[inline] pub fn is_valid(&self) -> bool { self.cursor.is_valid() }
    #[inline] pub fn cursor(&self) -> &C { &self.cursor }
    #[inline] pub fn cursor_mut(&mut self) -> &mut C { &mut self.cursor }
    #[inline] pub const fn format(&self) -> Format { self.format }
}

impl<C: Cursor, T: Component, const N: usize> Iterator for CursorReader<'_, C, T, N> {
    type Item = [T; N];
    fn next(&mut self) -> Option<Self::Item> {
        self.read().ok()
    }
}

impl<T: Component, const N: usize> CursorReader<'_, AreaCursor, T, N> {
    #[inline] pub fn seek(&mut self, x: i64, y: i64) {
        self.cursor.seek(x, y)
    }
}

impl<T: Component, const N: usize> CursorReader<'_, LinearCursor, T, N> {
    #[inline] pub fn seek(&mut self, index: i64) {
        self.cursor.seek(index)
    }
}

/// Writes `[T; N]` elements into a byte region in cursor order.
#[derive(Debug)]
pub struct CursorWriter<'a, C, T, const N: usize> {
    bytes: &'a mut [u8],
    cursor: C,
    format: Format,
    _component: PhantomData<fn(T)>,
}

impl<'a, C: Cursor, T: Component, const N: usize> CursorWriter<'a, C, T, N> {
    /// Fails with [`Error::TypeMismatch`] or [`Error::BufferTooSmall`].
    pub fn new(bytes: &'a mut [u8], cursor: C, format: Format) -> Result<Self, Error> {
        check_region::<C, T, N>(&format, &cursor, bytes.len())?;
        Ok(Self { bytes, cursor, format, _component: PhantomData })
    }

    /// Writes `value` at the current element and advances.
    ///
    /// Fails with [`Error::OutOfRange`] if the cursor is invalid; nothing is written then.
    #[inline] pub fn write(&mut self, value: [T; N]) -> Result<(), Error> {
        let offset = self.cursor.current_offset()?;
        self.format.packing.encode(&mut self.bytes[offset..], &value);
        self.cursor.next();
        Ok(())
    }

    /// Writes each value in turn.  Returns the number written.
    ///
    /// Fails with [`Error::OutOfRange`] if `values` outlasts the cursor; the elements before
    /// that point have been written.
    pub fn write_all(&mut self, values: impl IntoIterator<Item = [T; N]>) -> Result<usize, Error> {
        let mut written = 0;
        for value in values {
            self.write(value)?;
            written += 1;
        }
        Ok(written)
    }

    /// Writes `value` at every remaining position.  Returns the number written.
    pub fn fill(&mut self, value: [T; N]) -> usize {
        let _interval = logwise::perfwarn_begin!("CursorWriter::fill");
        let mut written = 0;
        while let Ok(offset) = self.cursor.current_offset() {
            self.format.packing.encode(&mut self.bytes[offset..], &value);
            self.cursor.next();
            written += 1;
        }
        written
    }

    #[inline] pub fn is_valid(&self) -> bool { self.cursor.is_valid() }
    #[inline] pub fn cursor(&self) -> &C { &self.cursor }
    #[inline] pub fn cursor_mut(&mut self) -> &mut C { &mut self.cursor }
    #[inline] pub const fn format(&self) -> Format { self.format }
}

impl<T: Component, const N: usize> CursorWriter<'_, AreaCursor, T, N> {
    #[inline] pub fn seek(&mut self, x: i64, y: i64) {
        self.cursor.seek(x, y)
    }
}

impl<T: Component, const N: usize> CursorWriter<'_, LinearCursor, T, N> {
    #[inline] pub fn seek(&mut self, index: i64) {
        self.cursor.seek(index)
    }
}
