// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture pixel format catalog.
//!
//! Each [`TextureFormat`] names a channel count and a storage packing, and maps onto a
//! codec [`Format`] that the cursor readers and writers use.
//!
//! # Available Formats
//!
//! For each of R, RG, RGB and RGBA:
//!
//! - `*8UNorm`, `*16UNorm` - unsigned normalized (0..=MAX mapped to 0.0..=1.0)
//! - `*8SNorm`, `*16SNorm`, `*32SNorm` - signed normalized (-MAX..=MAX mapped to -1.0..=1.0)
//! - `*8UInt`, `*16UInt`, `*32UInt` - unsigned integers.  Integer accessors see the stored
//!   values unchanged; real accessors see them normalized, like `*UNorm`
//! - `*16Float` - half precision
//! - `*32Float` - single precision
//!
//! Packed 16- and 32-bit words: [`RGB565`](TextureFormat::RGB565),
//! [`RGBA4444`](TextureFormat::RGBA4444), [`RGBA5551`](TextureFormat::RGBA5551) and
//! [`RGBA1010102`](TextureFormat::RGBA1010102).  Channels are packed from the most
//! significant bit down, in RGBA order.  The 1-bit alpha of `RGBA5551` is set by any
//! positive real or nonzero integer.
//!
//! Depth: [`Depth16`](TextureFormat::Depth16) (unsigned normalized),
//! [`Depth24`](TextureFormat::Depth24) (unsigned normalized, in the high 24 bits of a 32-bit
//! word) and [`Depth32Float`](TextureFormat::Depth32Float).
//!
//! # Examples
//!
//! ```
//! use buffer_cursors::pixel_formats::TextureFormat;
//!
//! assert_eq!(TextureFormat::RGBA8UNorm.bytes_per_pixel(), 4);
//! assert_eq!(TextureFormat::RGB565.components(), 3);
//! assert_eq!(TextureFormat::RG16Float.bytes_per_pixel(), 4);
//! ```

/*
Formats are an enum rather than one type per format.  The format of a texture is usually
decided at runtime (read from a file header, chosen from device capabilities), so a closed
set of values is the natural shape.  Static checking of the accessor type still happens
where it can, through the `[T; N]` parameters of the cursor readers and writers.
*/

pub use half::f16;

use crate::codec::{BitLayout, Format, IntegerKind, Packing};

macro_rules! texture_formats {
    ($($(#[$meta:meta])* $variant:ident => $components:literal, $packing:expr;)*) => {
        /// A texture storage format.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum TextureFormat {
            $($(#[$meta])* $variant,)*
        }

        impl TextureFormat {
            /// Every format, in declaration order.
            pub const ALL: &'static [TextureFormat] = &[$(TextureFormat::$variant,)*];

            /// Codec description of one pixel.
            pub const fn format(self) -> Format {
                match self {
                    $(TextureFormat::$variant => Format::new(stringify!($variant), $packing, $components),)*
                }
            }
        }
    };
}

texture_formats! {
    R8UNorm => 1, Packing::Normalized(IntegerKind::U8);
    R8SNorm => 1, Packing::Normalized(IntegerKind::I8);
    R8UInt => 1, Packing::Normalized(IntegerKind::U8);
    R16UNorm => 1, Packing::Normalized(IntegerKind::U16);
    R16SNorm => 1, Packing::Normalized(IntegerKind::I16);
    R16UInt => 1, Packing::Normalized(IntegerKind::U16);
    R16Float => 1, Packing::HalfFloat;
    R32SNorm => 1, Packing::Normalized(IntegerKind::I32);
    R32UInt => 1, Packing::Normalized(IntegerKind::U32);
    R32Float => 1, Packing::Float;

    RG8UNorm => 2, Packing::Normalized(IntegerKind::U8);
    RG8SNorm => 2, Packing::Normalized(IntegerKind::I8);
    RG8UInt => 2, Packing::Normalized(IntegerKind::U8);
    RG16UNorm => 2, Packing::Normalized(IntegerKind::U16);
    RG16SNorm => 2, Packing::Normalized(IntegerKind::I16);
    RG16UInt => 2, Packing::Normalized(IntegerKind::U16);
    RG16Float => 2, Packing::HalfFloat;
    RG32SNorm => 2, Packing::Normalized(IntegerKind::I32);
    RG32UInt => 2, Packing::Normalized(IntegerKind::U32);
    RG32Float => 2, Packing::Float;

    RGB8UNorm => 3, Packing::Normalized(IntegerKind::U8);
    RGB8SNorm => 3, Packing::Normalized(IntegerKind::I8);
    RGB8UInt => 3, Packing::Normalized(IntegerKind::U8);
    RGB16UNorm => 3, Packing::Normalized(IntegerKind::U16);
    RGB16SNorm => 3, Packing::Normalized(IntegerKind::I16);
    RGB16UInt => 3, Packing::Normalized(IntegerKind::U16);
    RGB16Float => 3, Packing::HalfFloat;
    RGB32SNorm => 3, Packing::Normalized(IntegerKind::I32);
    RGB32UInt => 3, Packing::Normalized(IntegerKind::U32);
    RGB32Float => 3, Packing::Float;

    /// The most common texture format.
    RGBA8UNorm => 4, Packing::Normalized(IntegerKind::U8);
    RGBA8SNorm => 4, Packing::Normalized(IntegerKind::I8);
    RGBA8UInt => 4, Packing::Normalized(IntegerKind::U8);
    RGBA16UNorm => 4, Packing::Normalized(IntegerKind::U16);
    RGBA16SNorm => 4, Packing::Normalized(IntegerKind::I16);
    RGBA16UInt => 4, Packing::Normalized(IntegerKind::U16);
    RGBA16Float => 4, Packing::HalfFloat;
    RGBA32SNorm => 4, Packing::Normalized(IntegerKind::I32);
    RGBA32UInt => 4, Packing::Normalized(IntegerKind::U32);
    RGBA32Float => 4, Packing::Float;

    /// 16 bits: red 15..11, green 10..5, blue 4..0.
    RGB565 => 3, Packing::BitField(BitLayout::R5G6B5);
    /// 16 bits, 4 per channel.
    RGBA4444 => 4, Packing::BitField(BitLayout::R4G4B4A4);
    /// 16 bits, 5 per color channel and a 1-bit alpha in bit 0.
    RGBA5551 => 4, Packing::BitField(BitLayout::R5G5B5A1);
    /// 32 bits, 10 per color channel and a 2-bit alpha in bits 1..0.
    RGBA1010102 => 4, Packing::BitField(BitLayout::R10G10B10A2);

    /// Unsigned normalized 16-bit depth.
    Depth16 => 1, Packing::Normalized(IntegerKind::U16);
    /// Unsigned normalized 24-bit depth in bits 31..8; bits 7..0 are written as zero.
    Depth24 => 1, Packing::BitField(BitLayout::D24X8);
    Depth32Float => 1, Packing::Float;
}

impl TextureFormat {
    /// Channels per pixel.
    pub const fn components(self) -> usize {
        self.format().components()
    }

    /// Stored size of one pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        self.format().bytes_per_element()
    }

    pub const fn is_depth(self) -> bool {
        matches!(self, TextureFormat::Depth16 | TextureFormat::Depth24 | TextureFormat::Depth32Float)
    }
}

impl std::fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.format().label())
    }
}
