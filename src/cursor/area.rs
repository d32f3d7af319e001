// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::coordinates::Area;
use crate::cursor::Cursor;
use crate::error::Error;

/// Which row of the outer area `y == outer lower y` addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// `y` grows down from the first stored row.
    #[default]
    TopLeft,
    /// `y` grows up from the last stored row, as OpenGL addresses cube map faces.
    BottomLeft,
}

/**
A 2D cursor over the *inner* area of a row-major region whose pitch is set by the *outer* area.

The byte offset of `(x, y)` is `row(y) * row_byte_span + x * element_size`, where
`row_byte_span = outer width * element_size`.  With [`Origin::TopLeft`] `row(y) = y`; with
[`Origin::BottomLeft`] rows are counted from the other end of the outer area, so
`row(y) = outer lower y + outer upper y - y`.  Coordinates are absolute, not relative
to either area's origin.

A new cursor is positioned at the inner area's lower corner.  [`next`](Cursor::next) moves
right along the row and wraps to the inner lower x bound of the following row; after the
last element of the inner area the cursor is invalid.

```
use buffer_cursors::coordinates::Area;
use buffer_cursors::cursor::{AreaCursor, Cursor};

let outer = Area::sized(4, 4).unwrap();
let inner = Area::at(1, 1, 2, 2).unwrap();
let mut cursor = AreaCursor::new(outer, inner, 4).unwrap();
assert_eq!(cursor.current_offset().unwrap(), 16 + 4);
cursor.next();
cursor.next();
assert_eq!(cursor.position(), (1, 2));
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCursor {
    outer: Area,
    inner: Area,
    element_size: usize,
    row_byte_span: i64,
    origin: Origin,
    x: i64,
    y: i64,
    byte_offset: Option<usize>,
    valid: bool,
}

impl AreaCursor {
    /// Creates a top-left origin cursor positioned at the lower corner of `inner`.
    ///
    /// Fails with [`Error::InvalidGeometry`] if `inner` is not contained in `outer`, if the
    /// outer lower bounds are negative, or if `element_size` is zero.
    pub fn new(outer: Area, inner: Area, element_size: usize) -> Result<Self, Error> {
        Self::with_origin(outer, inner, element_size, Origin::TopLeft)
    }

    /// Like [`new`](Self::new), with rows counted from `origin`.
    pub fn with_origin(outer: Area, inner: Area, element_size: usize, origin: Origin) -> Result<Self, Error> {
        if !inner.is_included_in(&outer) {
            return Err(Error::InvalidGeometry("inner area is not included in outer area"));
        }
        //with a non-negative outer origin, containment keeps the inner origin non-negative too
        if outer.range_x().lower() < 0 || outer.range_y().lower() < 0 {
            return Err(Error::InvalidGeometry("outer area has a negative lower bound"));
        }
        if element_size == 0 {
            return Err(Error::InvalidGeometry("element size must be non-zero"));
        }
        let element_bytes = i64::try_from(element_size)
            .map_err(|_| Error::InvalidGeometry("element size is too large"))?;
        let row_byte_span = outer
            .width()
            .checked_mul(element_bytes)
            .ok_or(Error::InvalidGeometry("row byte span overflows"))?;
        logwise::trace_sync!(
            "AreaCursor::new outer={outer} inner={inner} element_size={size} origin={origin}",
            outer = logwise::privacy::LogIt(&outer),
            inner = logwise::privacy::LogIt(&inner),
            size = logwise::privacy::LogIt(&element_size),
            origin = logwise::privacy::LogIt(&origin)
        );
        let mut cursor = Self {
            outer,
            inner,
            element_size,
            row_byte_span,
            origin,
            x: 0,
            y: 0,
            byte_offset: None,
            valid: false,
        };
        cursor.seek(inner.range_x().lower(), inner.range_y().lower());
        Ok(cursor)
    }

    /// Stored row of `y`, for `y` within the outer area.
    #[inline] fn row(&self, y: i64) -> i64 {
        match self.origin {
            Origin::TopLeft => y,
            Origin::BottomLeft => {
                let range_y = self.outer.range_y();
                range_y.upper() - (y - range_y.lower())
            }
        }
    }

    /// `None` if the offset does not fit in `usize`.
    #[inline] fn offset_of(&self, x: i64, y: i64) -> Option<usize> {
        let offset = self
            .row(y)
            .checked_mul(self.row_byte_span)?
            .checked_add(x.checked_mul(self.element_size as i64)?)?;
        usize::try_from(offset).ok()
    }

    /// Moves to `(x, y)`.  Always succeeds; the cursor is invalid if the position lies outside
    /// the inner area.
    #[inline] pub fn seek(&mut self, x: i64, y: i64) {
        self.x = x;
        self.y = y;
        self.valid = self.inner.contains(x, y);
        self.byte_offset = if self.valid { self.offset_of(x, y) } else { None };
    }

    /// Current `(x, y)`, which may lie outside the inner area.
    #[inline] pub const fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    #[inline] pub const fn outer(&self) -> Area { self.outer }
    #[inline] pub const fn inner(&self) -> Area { self.inner }
    #[inline] pub const fn origin(&self) -> Origin { self.origin }
    #[inline] pub const fn element_size(&self) -> usize { self.element_size }
    #[inline] pub const fn row_byte_span(&self) -> i64 { self.row_byte_span }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::TopLeft => f.write_str("top-left"),
            Origin::BottomLeft => f.write_str("bottom-left"),
        }
    }
}

impl Cursor for AreaCursor {
    #[inline] fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline] fn next(&mut self) {
        let range_x = self.inner.range_x();
        if self.x == range_x.upper() {
            self.seek(range_x.lower(), self.y.saturating_add(1));
        } else {
            self.seek(self.x.saturating_add(1), self.y);
        }
    }

    #[inline] fn current_offset(&self) -> Result<usize, Error> {
        if !self.valid {
            return Err(Error::OutOfRange { x: self.x, y: self.y });
        }
        self.byte_offset.ok_or(Error::InvalidGeometry("element offset overflows"))
    }

    fn required_len(&self, access_bytes: usize) -> Result<usize, Error> {
        let range_y = self.inner.range_y();
        let last_row_y = match self.origin {
            Origin::TopLeft => range_y.upper(),
            Origin::BottomLeft => range_y.lower(),
        };
        self.offset_of(self.inner.range_x().upper(), last_row_y)
            .and_then(|last| last.checked_add(access_bytes))
            .ok_or(Error::InvalidGeometry("cursor geometry overflows"))
    }
}
