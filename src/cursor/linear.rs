// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::coordinates::RangeInclusive;
use crate::cursor::Cursor;
use crate::error::Error;

/**
A 1D cursor over an inclusive index range.

The byte offset of index `i` is `base_offset + i * step`.  For a tightly packed array the
base is 0 and the step is the element size; for one attribute of an interleaved vertex
buffer the base is the attribute offset and the step is the record stride.

```
use buffer_cursors::coordinates::RangeInclusive;
use buffer_cursors::cursor::{Cursor, LinearCursor};

let mut cursor = LinearCursor::new(RangeInclusive::first(3).unwrap(), 12, 16).unwrap();
assert_eq!(cursor.current_offset().unwrap(), 12);
cursor.next();
assert_eq!(cursor.current_offset().unwrap(), 28);
```
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCursor {
    range: RangeInclusive,
    base_offset: usize,
    step: usize,
    index: i64,
    valid: bool,
}

impl LinearCursor {
    /// Creates a cursor positioned at the lower bound of `range`.
    ///
    /// Fails with [`Error::InvalidGeometry`] if the range has a negative lower bound or `step`
    /// is zero.
    pub fn new(range: RangeInclusive, base_offset: usize, step: usize) -> Result<Self, Error> {
        if range.lower() < 0 {
            return Err(Error::InvalidGeometry("element range has a negative lower bound"));
        }
        if step == 0 {
            return Err(Error::InvalidGeometry("element size must be non-zero"));
        }
        logwise::trace_sync!(
            "LinearCursor::new range={range} base={base} step={step}",
            range = logwise::privacy::LogIt(&range),
            base = logwise::privacy::LogIt(&base_offset),
            step = logwise::privacy::LogIt(&step)
        );
        Ok(Self { range, base_offset, step, index: range.lower(), valid: true })
    }

    /// Moves to `index`.  Always succeeds; the cursor is invalid outside the range.
    #[inline] pub fn seek(&mut self, index: i64) {
        self.index = index;
        self.valid = self.range.contains(index);
    }

    #[inline] fn offset_of(&self, index: usize) -> Option<usize> {
        index.checked_mul(self.step)?.checked_add(self.base_offset)
    }

    #[inline] pub const fn index(&self) -> i64 { self.index }
    #[inline] pub const fn range(&self) -> RangeInclusive { self.range }
    #[inline] pub const fn base_offset(&self) -> usize { self.base_offset }
    #[inline] pub const fn step(&self) -> usize { self.step }
}

impl Cursor for LinearCursor {
    #[inline] fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline] fn next(&mut self) {
        self.seek(self.index.saturating_add(1));
    }

    #[inline] fn current_offset(&self) -> Result<usize, Error> {
        if !self.valid {
            return Err(Error::OutOfRange { x: self.index, y: 0 });
        }
        //valid indices are non-negative
        self.offset_of(self.index as usize).ok_or(Error::InvalidGeometry("element offset overflows"))
    }

    fn required_len(&self, access_bytes: usize) -> Result<usize, Error> {
        usize::try_from(self.range.upper())
            .ok()
            .and_then(|last| self.offset_of(last))
            .and_then(|last| last.checked_add(access_bytes))
            .ok_or(Error::InvalidGeometry("cursor geometry overflows"))
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn visits_every_element_once() {
        let n = 7;
        let mut c = LinearCursor::new(RangeInclusive::first(n).unwrap(), 0, 6).unwrap();
        let mut previous = c.current_offset().unwrap();
        assert_eq!(previous, 0);
        for _ in 1..n {
            c.next();
            let offset = c.current_offset().unwrap();
            assert_eq!(offset, previous + 6);
            previous = offset;
        }
        c.next();
        assert!(!c.is_valid());
        assert_eq!(c.current_offset(), Err(Error::OutOfRange { x: 7, y: 0 }));
    }

    #[test] fn sub_range() {
        let mut c = LinearCursor::new(RangeInclusive::new(2, 3).unwrap(), 4, 16).unwrap();
        assert_eq!(c.index(), 2);
        assert_eq!(c.current_offset().unwrap(), 4 + 32);
        c.seek(1);
        assert!(!c.is_valid());
        assert_eq!(c.required_len(4).unwrap(), 4 + 48 + 4);
    }

    #[test] fn huge_ranges_are_an_error() {
        let mut c = LinearCursor::new(RangeInclusive::new(0, i64::MAX).unwrap(), 0, 16).unwrap();
        assert_eq!(c.required_len(16), Err(Error::InvalidGeometry("cursor geometry overflows")));
        c.seek(i64::MAX);
        assert!(c.is_valid());
        assert!(c.current_offset().is_err());
        c.next();
        assert_eq!(c.index(), i64::MAX);
    }

    #[test] fn rejects_bad_geometry() {
        assert!(LinearCursor::new(RangeInclusive::new(-1, 3).unwrap(), 0, 4).is_err());
        assert!(LinearCursor::new(RangeInclusive::first(3).unwrap(), 0, 0).is_err());
    }
}
