// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Cube map texture data.

A cube texture is six square faces of the same format, stored one after another in
[`CubeFace::ALL`] order.  Each face is row-major with no padding, first stored row first.

Face cursors treat `(0, 0)` as the bottom left corner of the face, as OpenGL does for cube
map uploads: `y = 0` addresses the *last* stored row of the face and raster order walks
the rows upward.

```
use buffer_cursors::bindings::{CubeFace, TextureCubeDataMut};
use buffer_cursors::pixel_formats::TextureFormat;

let mut bytes = vec![0_u8; 6 * 2 * 2];
let mut cube = TextureCubeDataMut::new(&mut bytes, TextureFormat::R8UInt, 2).unwrap();
cube.writer::<u8, 1>(CubeFace::PositiveX).unwrap().write([7]).unwrap();
//bottom left pixel of the first face is the start of its second row
assert_eq!(bytes[2], 7);
```
*/

use crate::bindings::check_len;
use crate::codec::{Component, CursorReader, CursorWriter};
use crate::coordinates::Area;
use crate::cursor::{AreaCursor, Origin};
use crate::error::Error;
use crate::pixel_formats::TextureFormat;

/// One face of a cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    /// Every face, in storage order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Position of the face in storage order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Checks the byte length and returns the area of one face and its length in bytes.
fn cube_geometry(len: usize, format: TextureFormat, size: usize) -> Result<(Area, usize), Error> {
    if size == 0 {
        return Err(Error::InvalidGeometry("cube face size must be non-zero"));
    }
    let face_len = size
        .checked_mul(size)
        .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
        .ok_or(Error::InvalidGeometry("cube texture size overflows"))?;
    let required = face_len
        .checked_mul(CubeFace::ALL.len())
        .ok_or(Error::InvalidGeometry("cube texture size overflows"))?;
    check_len("cube texture", required, len)?;
    logwise::trace_sync!(
        "cube texture view {size}x{size} {format}",
        size = logwise::privacy::LogIt(&size),
        format = logwise::privacy::LogIt(&format)
    );
    Ok((Area::sized(size, size)?, face_len))
}

fn face_cursor(area: Area, inner: Area, format: TextureFormat) -> Result<AreaCursor, Error> {
    AreaCursor::with_origin(area, inner, format.bytes_per_pixel(), Origin::BottomLeft)
}

/// Read-only view of cube texture bytes.
#[derive(Debug, Clone, Copy)]
pub struct TextureCubeData<'a> {
    bytes: &'a [u8],
    format: TextureFormat,
    area: Area,
    face_len: usize,
}

impl<'a> TextureCubeData<'a> {
    /// Fails with [`Error::InvalidGeometry`] for a zero size or [`Error::BufferTooSmall`] if
    /// `bytes` cannot hold six `size * size` faces.
    pub fn new(bytes: &'a [u8], format: TextureFormat, size: usize) -> Result<Self, Error> {
        let (area, face_len) = cube_geometry(bytes.len(), format, size)?;
        Ok(Self { bytes, format, area, face_len })
    }

    pub const fn format(&self) -> TextureFormat { self.format }
    /// Width and height of every face.
    pub const fn size(&self) -> usize { self.area.width() as usize }
    /// One face, `[0, size - 1] x [0, size - 1]`.
    pub const fn area(&self) -> Area { self.area }

    fn face(&self, face: CubeFace) -> &'a [u8] {
        let bytes = self.bytes;
        &bytes[face.index() * self.face_len..][..self.face_len]
    }

    pub fn reader<T: Component, const N: usize>(
        &self,
        face: CubeFace,
    ) -> Result<CursorReader<'a, AreaCursor, T, N>, Error> {
        self.reader_for(face, self.area)
    }

    /// Reads the pixels of `inner` on `face`, bottom row first.
    pub fn reader_for<T: Component, const N: usize>(
        &self,
        face: CubeFace,
        inner: Area,
    ) -> Result<CursorReader<'a, AreaCursor, T, N>, Error> {
        let cursor = face_cursor(self.area, inner, self.format)?;
        CursorReader::new(self.face(face), cursor, self.format.format())
    }
}

/// Mutable view of cube texture bytes.
#[derive(Debug)]
pub struct TextureCubeDataMut<'a> {
    bytes: &'a mut [u8],
    format: TextureFormat,
    area: Area,
    face_len: usize,
}

impl<'a> TextureCubeDataMut<'a> {
    /// Same checks as [`TextureCubeData::new`].
    pub fn new(bytes: &'a mut [u8], format: TextureFormat, size: usize) -> Result<Self, Error> {
        let (area, face_len) = cube_geometry(bytes.len(), format, size)?;
        Ok(Self { bytes, format, area, face_len })
    }

    pub const fn format(&self) -> TextureFormat { self.format }
    pub const fn size(&self) -> usize { self.area.width() as usize }
    pub const fn area(&self) -> Area { self.area }

    pub fn as_data(&self) -> TextureCubeData<'_> {
        TextureCubeData { bytes: &*self.bytes, format: self.format, area: self.area, face_len: self.face_len }
    }

    pub fn reader<T: Component, const N: usize>(
        &self,
        face: CubeFace,
    ) -> Result<CursorReader<'_, AreaCursor, T, N>, Error> {
        self.as_data().reader_for(face, self.area)
    }

    pub fn reader_for<T: Component, const N: usize>(
        &self,
        face: CubeFace,
        inner: Area,
    ) -> Result<CursorReader<'_, AreaCursor, T, N>, Error> {
        self.as_data().reader_for(face, inner)
    }

    pub fn writer<T: Component, const N: usize>(
        &mut self,
        face: CubeFace,
    ) -> Result<CursorWriter<'_, AreaCursor, T, N>, Error> {
        self.writer_for(face, self.area)
    }

    /// Writes the pixels of `inner` on `face`, bottom row first.  Other pixels and faces are
    /// untouched.
    pub fn writer_for<T: Component, const N: usize>(
        &mut self,
        face: CubeFace,
        inner: Area,
    ) -> Result<CursorWriter<'_, AreaCursor, T, N>, Error> {
        let cursor = face_cursor(self.area, inner, self.format)?;
        let start = face.index() * self.face_len;
        CursorWriter::new(&mut self.bytes[start..start + self.face_len], cursor, self.format.format())
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn faces_in_storage_order() {
        assert_eq!(CubeFace::ALL.map(CubeFace::index), [0, 1, 2, 3, 4, 5]);
    }

    #[test] fn rejects_bad_sizes() {
        let bytes = [0_u8; 23];
        assert_eq!(
            TextureCubeData::new(&bytes, TextureFormat::R8UNorm, 2).unwrap_err(),
            Error::BufferTooSmall { required: 24, actual: 23 }
        );
        assert!(matches!(
            TextureCubeData::new(&bytes, TextureFormat::R8UNorm, 0),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test] fn bottom_row_first() {
        let mut bytes = [0_u8; 6 * 4];
        let mut cube = TextureCubeDataMut::new(&mut bytes, TextureFormat::R8UInt, 2).unwrap();
        let written = cube
            .writer::<u8, 1>(CubeFace::PositiveZ)
            .unwrap()
            .write_all([[1], [2], [3], [4]])
            .unwrap();
        assert_eq!(written, 4);
        let pixels: Vec<[u8; 1]> = cube.reader::<u8, 1>(CubeFace::PositiveZ).unwrap().collect();
        assert_eq!(pixels, vec![[1], [2], [3], [4]]);
        assert!(cube.as_data().reader::<u8, 1>(CubeFace::NegativeZ).unwrap().all(|[p]| p == 0));
        assert_eq!(&bytes[16..20], &[3, 4, 1, 2]);
        assert!(bytes[..16].iter().chain(&bytes[20..]).all(|&b| b == 0));
    }
}
