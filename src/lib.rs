/*! buffer_cursors provides typed, bounds-checked access to the raw bytes behind GPU
vertex buffers, index buffers and textures.

GPU memory is a flat byte region.  Putting data into it means knowing, for every element,
where it lives and how it is encoded.  This crate keeps those concerns apart:

| Concern      | Types                                              | Answers                                          |
|--------------|----------------------------------------------------|--------------------------------------------------|
| Addressing   | [`cursor::AreaCursor`], [`cursor::LinearCursor`]   | Which byte offset does element `(x, y)` / `i` start at? |
| Layout       | [`vertex_layout::VertexLayout`]                    | Where does attribute `color` sit inside a record? |
| Encoding     | [`codec::Format`], [`pixel_formats::TextureFormat`] | How are the components of one element stored?   |
| Access       | [`codec::CursorReader`], [`codec::CursorWriter`]   | Read or write `[T; N]` at the cursor, then advance |

The [`bindings`] views glue these together for the common cases: a tightly packed
texture, the six faces of a cube texture, an interleaved vertex buffer and an index buffer.

# Encodings

Normalized integer storage follows the OpenGL fixed-point rules: unsigned N-bit values
map onto `[0.0, 1.0]`, signed ones onto `[-1.0, 1.0]` with the most negative integer
clamped to `-1.0`.  Packed 16- and 32-bit formats (565, 4444, 5551, 1010102, 24-bit
depth) are built from the same rules per channel.  See [`fixed_point`] and [`bittricks`].

# Errors

Mismatches between an accessor and the data it addresses (wrong arity, wrong scalar type,
a byte region that is too short) are reported when the reader or writer is constructed.
Afterwards the only failure is reading or writing while the cursor is outside its region.
Everything returns [`Error`].

# Example

```
use buffer_cursors::bindings::ArrayBufferDataMut;
use buffer_cursors::vertex_layout::{ScalarType, VertexLayout};

let layout = VertexLayout::builder()
    .add_field("position", ScalarType::Float, 3)
    .add_field("color", ScalarType::UnsignedByte, 4)
    .build()
    .unwrap();
let mut bytes = vec![0_u8; layout.stride() * 3];
let mut vertices = ArrayBufferDataMut::new(&mut bytes, &layout, 3).unwrap();
vertices.writer::<u8, 4>("color").unwrap().fill([255, 0, 0, 255]);
let colors: Vec<[u8; 4]> = vertices.reader::<u8, 4>("color").unwrap().collect();
assert_eq!(colors, vec![[255, 0, 0, 255]; 3]);
```
*/

pub mod bindings;
pub mod bittricks;
pub mod codec;
pub mod coordinates;
pub mod cursor;
mod error;
pub mod fixed_point;
pub mod pixel_formats;
pub mod vertex_layout;

pub use error::Error;
