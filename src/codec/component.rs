// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Component types accepted by the generic cursor accessors.

Each component type knows how to convert itself to and from every storage representation
the packings use.  Integers pass raw stored values through unchanged (saturating to their
own width); reals go through the fixed-point codec for normalized data.
*/

use half::f16;

use crate::fixed_point::{
    dequantize_f32, dequantize_f64, integer_range, quantize_f32, quantize_f64, F32_EXACT_BITS,
};
use crate::vertex_layout::ScalarType;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Whether a component type holds integers or reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Integer,
    Real,
}

/// A scalar type that can be read from or written to packed storage.
///
/// This trait is sealed; it is implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`,
/// [`f16`], `f32` and `f64`.
pub trait Component: Copy + Default + std::fmt::Debug + Send + Sync + 'static + sealed::Sealed {
    const KIND: ComponentKind;
    /// The vertex attribute scalar type with the same representation.
    const SCALAR: ScalarType;

    /// From a plain stored integer.
    fn from_integer(raw: i64) -> Self;
    /// To a plain stored integer.  Reals truncate toward zero and saturate.
    fn to_integer(self) -> i64;
    fn from_real(value: f64) -> Self;
    fn to_real(self) -> f64;
    /// From an N-bit normalized integer.
    fn from_normalized(raw: i64, bits: u32, signed: bool) -> Self;
    /// To an N-bit normalized integer.  Integers are clamped into the N-bit range, reals are
    /// quantized.
    fn to_normalized(self, bits: u32, signed: bool) -> i64;
    /// From a single-bit channel.
    fn from_gate(set: bool) -> Self;
    /// To a single-bit channel: any nonzero integer or positive real sets the bit.
    fn to_gate(self) -> bool;
}

macro_rules! integer_component {
    ($($t:ty => $scalar:ident),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl Component for $t {
            const KIND: ComponentKind = ComponentKind::Integer;
            const SCALAR: ScalarType = ScalarType::$scalar;

            #[inline] fn from_integer(raw: i64) -> Self {
                raw.clamp(i64::from(<$t>::MIN), i64::from(<$t>::MAX)) as $t
            }
            #[inline] fn to_integer(self) -> i64 { i64::from(self) }
            #[inline] fn from_real(value: f64) -> Self { value as $t }
            #[inline] fn to_real(self) -> f64 { f64::from(self) }
            #[inline] fn from_normalized(raw: i64, _bits: u32, _signed: bool) -> Self {
                Self::from_integer(raw)
            }
            #[inline] fn to_normalized(self, bits: u32, signed: bool) -> i64 {
                let (min, max) = integer_range(bits, signed);
                i64::from(self).clamp(min, max)
            }
            #[inline] fn from_gate(set: bool) -> Self { <$t>::from(set) }
            #[inline] fn to_gate(self) -> bool { self != 0 }
        }
    )*};
}

integer_component!(
    u8 => UnsignedByte,
    i8 => Byte,
    u16 => UnsignedShort,
    i16 => Short,
    u32 => UnsignedInt,
    i32 => Int,
);

impl sealed::Sealed for f32 {}
impl Component for f32 {
    const KIND: ComponentKind = ComponentKind::Real;
    const SCALAR: ScalarType = ScalarType::Float;

    #[inline] fn from_integer(raw: i64) -> Self { raw as f32 }
    #[inline] fn to_integer(self) -> i64 { self as i64 }
    #[inline] fn from_real(value: f64) -> Self { value as f32 }
    #[inline] fn to_real(self) -> f64 { f64::from(self) }
    #[inline] fn from_normalized(raw: i64, bits: u32, signed: bool) -> Self {
        if bits > F32_EXACT_BITS {
            dequantize_f64(raw, bits, signed) as f32
        } else {
            dequantize_f32(raw, bits, signed)
        }
    }
    #[inline] fn to_normalized(self, bits: u32, signed: bool) -> i64 {
        if bits > F32_EXACT_BITS {
            quantize_f64(f64::from(self), bits, signed)
        } else {
            quantize_f32(self, bits, signed)
        }
    }
    #[inline] fn from_gate(set: bool) -> Self { if set { 1.0 } else { 0.0 } }
    #[inline] fn to_gate(self) -> bool { self > 0.0 }
}

impl sealed::Sealed for f64 {}
impl Component for f64 {
    const KIND: ComponentKind = ComponentKind::Real;
    const SCALAR: ScalarType = ScalarType::Double;

    #[inline] fn from_integer(raw: i64) -> Self { raw as f64 }
    #[inline] fn to_integer(self) -> i64 { self as i64 }
    #[inline] fn from_real(value: f64) -> Self { value }
    #[inline] fn to_real(self) -> f64 { self }
    #[inline] fn from_normalized(raw: i64, bits: u32, signed: bool) -> Self {
        dequantize_f64(raw, bits, signed)
    }
    #[inline] fn to_normalized(self, bits: u32, signed: bool) -> i64 {
        quantize_f64(self, bits, signed)
    }
    #[inline] fn from_gate(set: bool) -> Self { if set { 1.0 } else { 0.0 } }
    #[inline] fn to_gate(self) -> bool { self > 0.0 }
}

impl sealed::Sealed for f16 {}
impl Component for f16 {
    const KIND: ComponentKind = ComponentKind::Real;
    const SCALAR: ScalarType = ScalarType::HalfFloat;

    #[inline] fn from_integer(raw: i64) -> Self { f16::from_f64(raw as f64) }
    #[inline] fn to_integer(self) -> i64 { self.to_f64() as i64 }
    #[inline] fn from_real(value: f64) -> Self { f16::from_f64(value) }
    #[inline] fn to_real(self) -> f64 { self.to_f64() }
    #[inline] fn from_normalized(raw: i64, bits: u32, signed: bool) -> Self {
        f16::from_f64(dequantize_f64(raw, bits, signed))
    }
    #[inline] fn to_normalized(self, bits: u32, signed: bool) -> i64 {
        quantize_f32(self.to_f32(), bits, signed)
    }
    #[inline] fn from_gate(set: bool) -> Self { if set { f16::ONE } else { f16::ZERO } }
    #[inline] fn to_gate(self) -> bool { self.to_f32() > 0.0 }
}
