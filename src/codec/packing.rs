// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use std::fmt::Display;

use half::f16;

use crate::bittricks;
use crate::codec::component::Component;
use crate::vertex_layout::ScalarType;

/// Stored integer width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl IntegerKind {
    pub const fn size_bytes(self) -> usize {
        match self {
            IntegerKind::U8 | IntegerKind::I8 => 1,
            IntegerKind::U16 | IntegerKind::I16 => 2,
            IntegerKind::U32 | IntegerKind::I32 => 4,
        }
    }

    pub const fn bits(self) -> u32 {
        self.size_bytes() as u32 * 8
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, IntegerKind::I8 | IntegerKind::I16 | IntegerKind::I32)
    }

    pub const fn scalar_type(self) -> ScalarType {
        match self {
            IntegerKind::U8 => ScalarType::UnsignedByte,
            IntegerKind::I8 => ScalarType::Byte,
            IntegerKind::U16 => ScalarType::UnsignedShort,
            IntegerKind::I16 => ScalarType::Short,
            IntegerKind::U32 => ScalarType::UnsignedInt,
            IntegerKind::I32 => ScalarType::Int,
        }
    }

    /// Loads one value from the start of `bytes`.
    #[inline] pub(crate) fn load(self, bytes: &[u8]) -> i64 {
        match self {
            IntegerKind::U8 => i64::from(bytes[0]),
            IntegerKind::I8 => i64::from(i8::from_ne_bytes([bytes[0]])),
            IntegerKind::U16 => i64::from(u16::from_ne_bytes(array(bytes))),
            IntegerKind::I16 => i64::from(i16::from_ne_bytes(array(bytes))),
            IntegerKind::U32 => i64::from(u32::from_ne_bytes(array(bytes))),
            IntegerKind::I32 => i64::from(i32::from_ne_bytes(array(bytes))),
        }
    }

    /// Stores `value` at the start of `bytes`, saturating to this width.
    #[inline] pub(crate) fn store(self, bytes: &mut [u8], value: i64) {
        match self {
            IntegerKind::U8 => bytes[0] = value.clamp(0, i64::from(u8::MAX)) as u8,
            IntegerKind::I8 => {
                bytes[0] = (value.clamp(i64::from(i8::MIN), i64::from(i8::MAX)) as i8).to_ne_bytes()[0]
            }
            IntegerKind::U16 => bytes[..2]
                .copy_from_slice(&(value.clamp(0, i64::from(u16::MAX)) as u16).to_ne_bytes()),
            IntegerKind::I16 => bytes[..2].copy_from_slice(
                &(value.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16).to_ne_bytes(),
            ),
            IntegerKind::U32 => bytes[..4]
                .copy_from_slice(&(value.clamp(0, i64::from(u32::MAX)) as u32).to_ne_bytes()),
            IntegerKind::I32 => bytes[..4].copy_from_slice(
                &(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32).to_ne_bytes(),
            ),
        }
    }
}

/// Channel arrangement of a packed word, channels listed most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitLayout {
    /// 16-bit word, 5/6/5 bits of red/green/blue.
    R5G6B5,
    /// 16-bit word, 5/5/5 bits of red/green/blue and a 1-bit alpha.
    R5G5B5A1,
    /// 16-bit word, 4 bits per channel.
    R4G4B4A4,
    /// 32-bit word, 10 bits per color channel and a 2-bit alpha.
    R10G10B10A2,
    /// 32-bit word, one 24-bit channel over 8 unused bits.
    D24X8,
}

impl BitLayout {
    /// Channel widths, a trailing 0 meaning "no channel".
    pub const fn widths(self) -> [u32; 4] {
        match self {
            BitLayout::R5G6B5 => bittricks::WIDTHS_565,
            BitLayout::R5G5B5A1 => bittricks::WIDTHS_5551,
            BitLayout::R4G4B4A4 => bittricks::WIDTHS_4444,
            BitLayout::R10G10B10A2 => bittricks::WIDTHS_1010102,
            BitLayout::D24X8 => bittricks::WIDTHS_24_8,
        }
    }

    pub const fn components(self) -> usize {
        match self {
            BitLayout::D24X8 => 1,
            BitLayout::R5G6B5 => 3,
            _ => 4,
        }
    }

    /// Size of the packed word.
    pub const fn word_bytes(self) -> usize {
        match self {
            BitLayout::R10G10B10A2 | BitLayout::D24X8 => 4,
            _ => 2,
        }
    }

    /// Whether the last channel is a single bit treated as on/off rather than normalized.
    pub const fn gated_alpha(self) -> bool {
        matches!(self, BitLayout::R5G5B5A1)
    }

    #[inline] fn load(self, bytes: &[u8]) -> u32 {
        if self.word_bytes() == 2 {
            u32::from(u16::from_ne_bytes(array(bytes)))
        } else {
            u32::from_ne_bytes(array(bytes))
        }
    }

    #[inline] fn store(self, bytes: &mut [u8], word: u32) {
        if self.word_bytes() == 2 {
            bytes[..2].copy_from_slice(&(word as u16).to_ne_bytes());
        } else {
            bytes[..4].copy_from_slice(&word.to_ne_bytes());
        }
    }
}

/// How one element is stored in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packing {
    /// Plain integers, passed through unchanged.
    Integer(IntegerKind),
    /// Fixed-point normalized integers.
    Normalized(IntegerKind),
    /// IEEE binary16 per component.
    HalfFloat,
    /// IEEE binary32 per component.
    Float,
    /// IEEE binary64 per component.
    Double,
    /// All channels packed into one word.
    BitField(BitLayout),
}

impl Packing {
    /// The packing of a vertex attribute with this scalar type.
    pub const fn for_scalar(scalar: ScalarType) -> Packing {
        match scalar {
            ScalarType::Byte => Packing::Integer(IntegerKind::I8),
            ScalarType::UnsignedByte => Packing::Integer(IntegerKind::U8),
            ScalarType::Short => Packing::Integer(IntegerKind::I16),
            ScalarType::UnsignedShort => Packing::Integer(IntegerKind::U16),
            ScalarType::Int => Packing::Integer(IntegerKind::I32),
            ScalarType::UnsignedInt => Packing::Integer(IntegerKind::U32),
            ScalarType::HalfFloat => Packing::HalfFloat,
            ScalarType::Float => Packing::Float,
            ScalarType::Double => Packing::Double,
        }
    }

    /// Bytes per stored component, or per word for bit fields.
    pub const fn component_bytes(self) -> usize {
        match self {
            Packing::Integer(kind) | Packing::Normalized(kind) => kind.size_bytes(),
            Packing::HalfFloat => 2,
            Packing::Float => 4,
            Packing::Double => 8,
            Packing::BitField(layout) => layout.word_bytes(),
        }
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, Packing::HalfFloat | Packing::Float | Packing::Double)
    }

    /// Decodes one element starting at `bytes[0]`.
    #[inline] pub(crate) fn decode<T: Component, const N: usize>(self, bytes: &[u8], out: &mut [T; N]) {
        match self {
            Packing::Integer(kind) => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = T::from_integer(kind.load(&bytes[i * kind.size_bytes()..]));
                }
            }
            Packing::Normalized(kind) => {
                for (i, slot) in out.iter_mut().enumerate() {
                    let raw = kind.load(&bytes[i * kind.size_bytes()..]);
                    *slot = T::from_normalized(raw, kind.bits(), kind.is_signed());
                }
            }
            Packing::HalfFloat => {
                for (i, slot) in out.iter_mut().enumerate() {
                    let value = f16::from_bits(u16::from_ne_bytes(array(&bytes[i * 2..])));
                    *slot = T::from_real(value.to_f64());
                }
            }
            Packing::Float => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = T::from_real(f64::from(f32::from_ne_bytes(array(&bytes[i * 4..]))));
                }
            }
            Packing::Double => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = T::from_real(f64::from_ne_bytes(array(&bytes[i * 8..])));
                }
            }
            Packing::BitField(layout) => {
                let widths = layout.widths();
                let channels = bittricks::unpack(layout.load(bytes), widths);
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = if layout.gated_alpha() && i == 3 {
                        T::from_gate(channels[i] != 0)
                    } else {
                        T::from_normalized(i64::from(channels[i]), widths[i], false)
                    };
                }
            }
        }
    }

    /// Encodes one element starting at `bytes[0]`.
    #[inline] pub(crate) fn encode<T: Component, const N: usize>(self, bytes: &mut [u8], value: &[T; N]) {
        match self {
            Packing::Integer(kind) => {
                for (i, v) in value.iter().enumerate() {
                    kind.store(&mut bytes[i * kind.size_bytes()..], v.to_integer());
                }
            }
            Packing::Normalized(kind) => {
                for (i, v) in value.iter().enumerate() {
                    let raw = v.to_normalized(kind.bits(), kind.is_signed());
                    kind.store(&mut bytes[i * kind.size_bytes()..], raw);
                }
            }
            Packing::HalfFloat => {
                for (i, v) in value.iter().enumerate() {
                    let bits = f16::from_f64(v.to_real()).to_bits();
                    bytes[i * 2..i * 2 + 2].copy_from_slice(&bits.to_ne_bytes());
                }
            }
            Packing::Float => {
                for (i, v) in value.iter().enumerate() {
                    bytes[i * 4..i * 4 + 4].copy_from_slice(&(v.to_real() as f32).to_ne_bytes());
                }
            }
            Packing::Double => {
                for (i, v) in value.iter().enumerate() {
                    bytes[i * 8..i * 8 + 8].copy_from_slice(&v.to_real().to_ne_bytes());
                }
            }
            Packing::BitField(layout) => {
                let widths = layout.widths();
                let mut channels = [0_u32; 4];
                for (i, v) in value.iter().enumerate() {
                    channels[i] = if layout.gated_alpha() && i == 3 {
                        u32::from(v.to_gate())
                    } else {
                        v.to_normalized(widths[i], false) as u32
                    };
                }
                layout.store(bytes, bittricks::pack(channels, widths));
            }
        }
    }
}

impl Display for Packing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Packing::Integer(kind) => write!(f, "{}", kind.scalar_type()),
            Packing::Normalized(kind) => write!(f, "normalized {}", kind.scalar_type()),
            Packing::HalfFloat => f.write_str("half float"),
            Packing::Float => f.write_str("float"),
            Packing::Double => f.write_str("double"),
            Packing::BitField(layout) => write!(f, "packed {layout:?}"),
        }
    }
}

#[inline] fn array<const W: usize>(bytes: &[u8]) -> [u8; W] {
    let mut out = [0; W];
    out.copy_from_slice(&bytes[..W]);
    out
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn integer_store_saturates() {
        let mut bytes = [0_u8; 4];
        IntegerKind::U8.store(&mut bytes, 300);
        assert_eq!(bytes[0], 255);
        IntegerKind::I16.store(&mut bytes, -40_000);
        assert_eq!(IntegerKind::I16.load(&bytes), i64::from(i16::MIN));
        IntegerKind::U32.store(&mut bytes, -1);
        assert_eq!(IntegerKind::U32.load(&bytes), 0);
    }

    #[test] fn signed_normalized_bytes() {
        let mut bytes = [0_u8; 2];
        Packing::Normalized(IntegerKind::I8).encode(&mut bytes, &[-1.0_f32, 0.25]);
        assert_eq!(bytes[0] as i8, -127);
        assert_eq!(bytes[1] as i8, 32);
        let mut out = [0.0_f32; 2];
        Packing::Normalized(IntegerKind::I8).decode(&bytes, &mut out);
        assert_eq!(out[0], -1.0);
        assert!((out[1] - 0.25).abs() < 1.0 / 127.0);
    }

    #[test] fn rgb565_word() {
        let mut bytes = [0_u8; 2];
        Packing::BitField(BitLayout::R5G6B5).encode(&mut bytes, &[31_u8, 0, 0]);
        assert_eq!(u16::from_ne_bytes(bytes), 0xF800);
        Packing::BitField(BitLayout::R5G6B5).encode(&mut bytes, &[0.0_f32, 1.0, 0.0]);
        assert_eq!(u16::from_ne_bytes(bytes), 0x07E0);
        let mut out = [0_u32; 3];
        Packing::BitField(BitLayout::R5G6B5).decode(&bytes, &mut out);
        assert_eq!(out, [0, 63, 0]);
    }

    #[test] fn gated_alpha() {
        let mut bytes = [0_u8; 2];
        Packing::BitField(BitLayout::R5G5B5A1).encode(&mut bytes, &[0.0_f32, 0.0, 0.0, 0.2]);
        assert_eq!(u16::from_ne_bytes(bytes), 1);
        Packing::BitField(BitLayout::R5G5B5A1).encode(&mut bytes, &[0_i32, 0, 0, 7]);
        assert_eq!(u16::from_ne_bytes(bytes), 1);
        Packing::BitField(BitLayout::R5G5B5A1).encode(&mut bytes, &[0.0_f32, 0.0, 0.0, 0.0]);
        assert_eq!(u16::from_ne_bytes(bytes), 0);
    }

    #[test] fn depth_in_the_high_bits() {
        let mut bytes = [0xAB_u8; 4];
        Packing::BitField(BitLayout::D24X8).encode(&mut bytes, &[1.0_f32]);
        assert_eq!(u32::from_ne_bytes(bytes), 0xFFFF_FF00);
        bytes = 0x8000_00FF_u32.to_ne_bytes();
        let mut out = [0.0_f64];
        Packing::BitField(BitLayout::D24X8).decode(&bytes, &mut out);
        assert!((out[0] - 0.5).abs() < 1e-6);
        let mut raw = [0_u32];
        Packing::BitField(BitLayout::D24X8).decode(&bytes, &mut raw);
        assert_eq!(raw, [0x80_0000]);
    }

    #[test] fn floats() {
        let mut bytes = [0_u8; 8];
        Packing::HalfFloat.encode(&mut bytes, &[0.5_f32, -2.0, 1.0, 0.0]);
        let mut out = [0.0_f32; 4];
        Packing::HalfFloat.decode(&bytes, &mut out);
        assert_eq!(out, [0.5, -2.0, 1.0, 0.0]);
        Packing::Double.encode(&mut bytes, &[0.1_f64]);
        assert_eq!(f64::from_ne_bytes(bytes), 0.1);
    }

    #[test] fn scalar_mapping() {
        assert_eq!(Packing::for_scalar(ScalarType::Short), Packing::Integer(IntegerKind::I16));
        assert_eq!(Packing::for_scalar(ScalarType::Float).component_bytes(), 4);
        assert_eq!(Packing::Normalized(IntegerKind::U16).to_string(), "normalized unsigned short");
    }
}
