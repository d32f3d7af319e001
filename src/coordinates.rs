// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Inclusive integer ranges and the rectangular areas built from them.

Cursor geometry uses the same convention as textures elsewhere in the crate:

```text
           x
      0 ────────▶
      │ ┌───────┐
    y │ │       │
      │ │       │
      │ │       │
      ▼ └───────┘
 ```
*/

use crate::error::Error;

/// An inclusive range `[lower, upper]` with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeInclusive {
    lower: i64,
    upper: i64,
}

impl RangeInclusive {
    /// Creates a new range.  Fails if `lower > upper`.
    pub const fn new(lower: i64, upper: i64) -> Result<Self, Error> {
        if lower > upper {
            return Err(Error::InvalidGeometry("range lower bound exceeds upper bound"));
        }
        Ok(Self { lower, upper })
    }

    /// The range `[0, count - 1]`.  Fails for `count == 0`.
    pub fn first(count: usize) -> Result<Self, Error> {
        let count = i64::try_from(count).map_err(|_| Error::InvalidGeometry("range is too large"))?;
        Self::new(0, count - 1)
    }

    #[inline] pub const fn lower(&self) -> i64 { self.lower }
    #[inline] pub const fn upper(&self) -> i64 { self.upper }

    /// Number of values in the range, saturating at `i64::MAX`.
    #[inline] pub const fn interval(&self) -> i64 {
        match self.upper.checked_sub(self.lower) {
            Some(span) => span.saturating_add(1),
            None => i64::MAX,
        }
    }

    #[inline] pub const fn contains(&self, value: i64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether every value of `self` is also in `other`.
    #[inline] pub const fn is_included_in(&self, other: &RangeInclusive) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }
}

/// An axis-aligned rectangle, inclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    x: RangeInclusive,
    y: RangeInclusive,
}

impl Area {
    pub const fn new(x: RangeInclusive, y: RangeInclusive) -> Self {
        Self { x, y }
    }

    /// The area `[0, width - 1] x [0, height - 1]`.
    pub fn sized(width: usize, height: usize) -> Result<Self, Error> {
        Ok(Self { x: RangeInclusive::first(width)?, y: RangeInclusive::first(height)? })
    }

    /// The area starting at `(x, y)` spanning `width` by `height` elements.
    pub fn at(x: i64, y: i64, width: i64, height: i64) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidGeometry("area must be at least one element wide and tall"));
        }
        let last = |start: i64, extent: i64| {
            start.checked_add(extent - 1).ok_or(Error::InvalidGeometry("area extends past i64::MAX"))
        };
        Ok(Self {
            x: RangeInclusive::new(x, last(x, width)?)?,
            y: RangeInclusive::new(y, last(y, height)?)?,
        })
    }

    #[inline] pub const fn range_x(&self) -> RangeInclusive { self.x }
    #[inline] pub const fn range_y(&self) -> RangeInclusive { self.y }

    #[inline] pub const fn width(&self) -> i64 { self.x.interval() }
    #[inline] pub const fn height(&self) -> i64 { self.y.interval() }

    #[inline] pub const fn contains(&self, x: i64, y: i64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    #[inline] pub const fn is_included_in(&self, other: &Area) -> bool {
        self.x.is_included_in(&other.x) && self.y.is_included_in(&other.y)
    }
}
