// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Address translators that map element coordinates to byte offsets.

A cursor holds a position and immutable geometry, never the bytes themselves.  It is
either *valid* (the position lies in the region it may address) or *invalid*.  Seeking
anywhere is legal; only [`Cursor::current_offset`] treats invalidity as an error, since
every codec read or write goes through it.

Two forms exist:

* [`AreaCursor`] walks a sub-rectangle (*inner*) of a larger rectangle (*outer*) in
  row-major raster order.  The outer area fixes the row pitch, so one geometry can
  describe updating a sub-region of a texture in place.
* [`LinearCursor`] walks an inclusive index range with a fixed step from a base offset,
  which is how one attribute of an interleaved vertex buffer is addressed.

Cursors carry mutable position state with no synchronization.  Use one per reading or
writing sequence; distinct cursors over disjoint bytes may be used from different threads.
*/

mod area;
mod linear;

pub use area::{AreaCursor, Origin};
pub use linear::LinearCursor;

use crate::error::Error;

/// Common interface of the address translators.
pub trait Cursor {
    /// Whether the current position lies within the addressable region.
    fn is_valid(&self) -> bool;

    /// Advances one element in traversal order.  May leave the cursor invalid.
    fn next(&mut self);

    /// Byte offset of the current element.
    ///
    /// Fails with [`Error::OutOfRange`] if the cursor is invalid.
    fn current_offset(&self) -> Result<usize, Error>;

    /// Length a byte region needs so that an `access_bytes`-wide access at every valid
    /// position stays in bounds.
    ///
    /// Fails with [`Error::InvalidGeometry`] if that length does not fit in `usize`.
    fn required_len(&self, access_bytes: usize) -> Result<usize, Error>;
}
