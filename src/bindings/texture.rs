// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Tightly packed 2D texture data.

Pixels are stored row-major with no row padding, so the row pitch is
`width * bytes_per_pixel`.  Readers and writers can address the whole texture or a
sub-rectangle of it; a sub-rectangle keeps the full texture's pitch.

```
use buffer_cursors::bindings::TextureDataMut;
use buffer_cursors::coordinates::Area;
use buffer_cursors::pixel_formats::TextureFormat;

let mut bytes = vec![0_u8; 4 * 4 * 4];
let mut texture = TextureDataMut::new(&mut bytes, TextureFormat::RGBA8UInt, 4, 4).unwrap();
let mut writer = texture.writer_for::<u8, 4>(Area::at(1, 1, 2, 2).unwrap()).unwrap();
writer.fill([9, 9, 9, 9]);
assert_eq!(&bytes[(4 + 1) * 4..(4 + 1) * 4 + 4], &[9, 9, 9, 9]);
assert_eq!(&bytes[..4], &[0, 0, 0, 0]);
```
*/

use crate::bindings::check_len;
use crate::codec::{Component, CursorReader, CursorWriter};
use crate::coordinates::Area;
use crate::cursor::AreaCursor;
use crate::error::Error;
use crate::pixel_formats::TextureFormat;

fn texture_area(len: usize, format: TextureFormat, width: usize, height: usize) -> Result<Area, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidGeometry("texture dimensions must be non-zero"));
    }
    let required = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
        .ok_or(Error::InvalidGeometry("texture size overflows"))?;
    check_len("texture", required, len)?;
    logwise::trace_sync!(
        "texture view {width}x{height} {format}",
        width = logwise::privacy::LogIt(&width),
        height = logwise::privacy::LogIt(&height),
        format = logwise::privacy::LogIt(&format)
    );
    Area::sized(width, height)
}

fn cursor_for(outer: Area, inner: Area, format: TextureFormat) -> Result<AreaCursor, Error> {
    AreaCursor::new(outer, inner, format.bytes_per_pixel())
}

/// Read-only view of texture bytes.
#[derive(Debug, Clone, Copy)]
pub struct TextureData<'a> {
    bytes: &'a [u8],
    format: TextureFormat,
    area: Area,
}

impl<'a> TextureData<'a> {
    /// Fails with [`Error::InvalidGeometry`] for a zero dimension or [`Error::BufferTooSmall`]
    /// if `bytes` cannot hold `width * height` pixels.
    pub fn new(bytes: &'a [u8], format: TextureFormat, width: usize, height: usize) -> Result<Self, Error> {
        let area = texture_area(bytes.len(), format, width, height)?;
        Ok(Self { bytes, format, area })
    }

    pub const fn format(&self) -> TextureFormat { self.format }
    /// The whole texture, `[0, width - 1] x [0, height - 1]`.
    pub const fn area(&self) -> Area { self.area }
    pub const fn width(&self) -> usize { self.area.width() as usize }
    pub const fn height(&self) -> usize { self.area.height() as usize }

    pub fn reader<T: Component, const N: usize>(&self) -> Result<CursorReader<'a, AreaCursor, T, N>, Error> {
        self.reader_for(self.area)
    }

    /// Reads the pixels of `inner` in raster order.
    pub fn reader_for<T: Component, const N: usize>(
        &self,
        inner: Area,
    ) -> Result<CursorReader<'a, AreaCursor, T, N>, Error> {
        CursorReader::new(self.bytes, cursor_for(self.area, inner, self.format)?, self.format.format())
    }
}

/// Mutable view of texture bytes.
#[derive(Debug)]
pub struct TextureDataMut<'a> {
    bytes: &'a mut [u8],
    format: TextureFormat,
    area: Area,
}

impl<'a> TextureDataMut<'a> {
    /// Same checks as [`TextureData::new`].
    pub fn new(bytes: &'a mut [u8], format: TextureFormat, width: usize, height: usize) -> Result<Self, Error> {
        let area = texture_area(bytes.len(), format, width, height)?;
        Ok(Self { bytes, format, area })
    }

    pub const fn format(&self) -> TextureFormat { self.format }
    pub const fn area(&self) -> Area { self.area }
    pub const fn width(&self) -> usize { self.area.width() as usize }
    pub const fn height(&self) -> usize { self.area.height() as usize }

    pub fn as_data(&self) -> TextureData<'_> {
        TextureData { bytes: &*self.bytes, format: self.format, area: self.area }
    }

    pub fn reader<T: Component, const N: usize>(&self) -> Result<CursorReader<'_, AreaCursor, T, N>, Error> {
        self.reader_for(self.area)
    }

    pub fn reader_for<T: Component, const N: usize>(
        &self,
        inner: Area,
    ) -> Result<CursorReader<'_, AreaCursor, T, N>, Error> {
        CursorReader::new(&*self.bytes, cursor_for(self.area, inner, self.format)?, self.format.format())
    }

    pub fn writer<T: Component, const N: usize>(&mut self) -> Result<CursorWriter<'_, AreaCursor, T, N>, Error> {
        self.writer_for(self.area)
    }

    /// Writes the pixels of `inner` in raster order.  Pixels outside `inner` are untouched.
    pub fn writer_for<T: Component, const N: usize>(
        &mut self,
        inner: Area,
    ) -> Result<CursorWriter<'_, AreaCursor, T, N>, Error> {
        let cursor = cursor_for(self.area, inner, self.format)?;
        CursorWriter::new(&mut *self.bytes, cursor, self.format.format())
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn rejects_bad_sizes() {
        let bytes = [0_u8; 15];
        assert_eq!(
            TextureData::new(&bytes, TextureFormat::RGBA8UNorm, 2, 2).unwrap_err(),
            Error::BufferTooSmall { required: 16, actual: 15 }
        );
        assert!(matches!(
            TextureData::new(&bytes, TextureFormat::R8UNorm, 0, 2),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test] fn dimensions() {
        let bytes = [0_u8; 24];
        let texture = TextureData::new(&bytes, TextureFormat::RGB8UNorm, 4, 2).unwrap();
        assert_eq!(texture.width(), 4);
        assert_eq!(texture.height(), 2);
        assert_eq!(texture.reader::<u8, 3>().unwrap().count(), 8);
    }

    #[test] fn inner_area_outside_texture() {
        let mut bytes = [0_u8; 16];
        let mut texture = TextureDataMut::new(&mut bytes, TextureFormat::R8UInt, 4, 4).unwrap();
        assert!(matches!(
            texture.writer_for::<u8, 1>(Area::at(3, 3, 2, 1).unwrap()),
            Err(Error::InvalidGeometry(_))
        ));
    }
}
