// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Fixed-point normalization between real values and N-bit integers.

Unsigned N-bit values map `[0.0, 1.0]` onto `[0, 2^N - 1]`.  Signed N-bit values map
`[-1.0, 1.0]` onto `[-(2^(N-1) - 1), 2^(N-1) - 1]`; the one extra negative integer
`-(2^(N-1))` dequantizes to `-1.0` as well (see equations 2.1-2.6 of the OpenGL 3.1
specification).

Quantization saturates: reals outside the domain are clamped first, because bulk uploads
routinely carry values a rounding error beyond `1.0` and must not fail because of it.
Quantization rounds to the nearest integer.  `NaN` quantizes to 0.

Codecs that truncate instead (`(int) (value * max)`) differ from these results by at most
one step: 0.5 in 8-bit signed storage is 64 here and 63 when truncated.  Data written here
is therefore not always bit-identical to data written by such a codec.

Both `f32` and `f64` entry points exist.  The `f32` path is only exact up to 24 bits, so
consumers with wider channels should use the `f64` path.
*/

/// Largest bit count for which the `f32` path represents every integer exactly.
pub const F32_EXACT_BITS: u32 = f32::MANTISSA_DIGITS;

#[inline] const fn unsigned_max(bits: u32) -> i64 {
    ((1_u64 << bits) - 1) as i64
}

#[inline] const fn signed_max(bits: u32) -> i64 {
    (1_i64 << (bits - 1)) - 1
}

/// Inclusive integer range `(min, max)` of an N-bit signed or unsigned value.
#[inline] pub const fn integer_range(bits: u32, signed: bool) -> (i64, i64) {
    if signed {
        (-(1_i64 << (bits - 1)), signed_max(bits))
    } else {
        (0, unsigned_max(bits))
    }
}

#[inline] fn check_bits(bits: u32, signed: bool) {
    debug_assert!(bits <= 32, "fixed point supports at most 32 bits");
    debug_assert!(bits >= if signed { 2 } else { 1 }, "too few bits for fixed point");
}

/// Converts a real to an N-bit normalized integer using double precision.
#[inline] pub fn quantize_f64(value: f64, bits: u32, signed: bool) -> i64 {
    check_bits(bits, signed);
    if signed {
        let max = signed_max(bits);
        ((value.clamp(-1.0, 1.0) * max as f64).round() as i64).clamp(-max, max)
    } else {
        let max = unsigned_max(bits);
        ((value.clamp(0.0, 1.0) * max as f64).round() as i64).clamp(0, max)
    }
}

/// Converts a real to an N-bit normalized integer using single precision.
#[inline] pub fn quantize_f32(value: f32, bits: u32, signed: bool) -> i64 {
    check_bits(bits, signed);
    //the final clamp matters: 2^31-1 is not representable in f32 and rounds up
    if signed {
        let max = signed_max(bits);
        ((value.clamp(-1.0, 1.0) * max as f32).round() as i64).clamp(-max, max)
    } else {
        let max = unsigned_max(bits);
        ((value.clamp(0.0, 1.0) * max as f32).round() as i64).clamp(0, max)
    }
}

/// Converts an N-bit normalized integer to a real using double precision.
#[inline] pub fn dequantize_f64(raw: i64, bits: u32, signed: bool) -> f64 {
    check_bits(bits, signed);
    if signed {
        (raw as f64 / signed_max(bits) as f64).max(-1.0)
    } else {
        raw as f64 / unsigned_max(bits) as f64
    }
}

/// Converts an N-bit normalized integer to a real using single precision.
#[inline] pub fn dequantize_f32(raw: i64, bits: u32, signed: bool) -> f32 {
    check_bits(bits, signed);
    if signed {
        (raw as f32 / signed_max(bits) as f32).max(-1.0)
    } else {
        raw as f32 / unsigned_max(bits) as f32
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn unsigned_endpoints() {
        for bits in [1, 4, 5, 6, 8, 10, 16, 32] {
            assert_eq!(quantize_f64(0.0, bits, false), 0);
            assert_eq!(quantize_f64(1.0, bits, false), unsigned_max(bits));
            assert_eq!(dequantize_f64(unsigned_max(bits), bits, false), 1.0);
            assert_eq!(dequantize_f64(0, bits, false), 0.0);
        }
    }

    #[test] fn signed_endpoints() {
        assert_eq!(quantize_f64(-1.0, 8, true), -127);
        assert_eq!(quantize_f64(1.0, 8, true), 127);
        assert_eq!(quantize_f32(0.0, 8, true), 0);
        assert_eq!(dequantize_f64(-128, 8, true), -1.0);
        assert_eq!(dequantize_f64(-127, 8, true), -1.0);
        assert_eq!(dequantize_f32(127, 8, true), 1.0);
    }

    #[test] fn clamps_out_of_range() {
        assert_eq!(quantize_f32(1.0001, 8, false), 255);
        assert_eq!(quantize_f32(-0.5, 8, false), 0);
        assert_eq!(quantize_f64(-3.0, 16, true), -32767);
        assert_eq!(quantize_f64(f64::INFINITY, 16, false), 65535);
        assert_eq!(quantize_f32(f32::NAN, 8, false), 0);
    }

    #[test] fn ranges() {
        assert_eq!(integer_range(8, true), (-128, 127));
        assert_eq!(integer_range(5, false), (0, 31));
        assert_eq!(integer_range(32, false), (0, u32::MAX as i64));
    }

    #[test] fn rounds_to_nearest() {
        assert_eq!(quantize_f32(0.5, 8, false), 128);
        assert_eq!(quantize_f64(0.25, 16, false), 16_384);
        assert_eq!(quantize_f32(0.25, 8, true), 32);
        assert_eq!(quantize_f64(0.5, 8, true), 64);
    }

    #[test] fn thirty_two_bits_saturate() {
        assert_eq!(quantize_f32(1.0, 32, false), u32::MAX as i64);
        assert_eq!(quantize_f32(1.0, 32, true), i32::MAX as i64);
        assert_eq!(quantize_f64(1.0, 32, true), i32::MAX as i64);
    }

    #[test] fn integers_survive_a_round_trip() {
        for bits in [2_u32, 5, 8, 10, 16] {
            for raw in 0..=unsigned_max(bits) {
                assert_eq!(quantize_f32(dequantize_f32(raw, bits, false), bits, false), raw);
            }
            for raw in -signed_max(bits)..=signed_max(bits) {
                assert_eq!(quantize_f64(dequantize_f64(raw, bits, true), bits, true), raw);
            }
        }
    }

    #[test] fn reals_within_one_step() {
        let step = 1.0 / unsigned_max(8) as f64;
        let mut v = 0.0;
        while v <= 1.0 {
            let back = dequantize_f64(quantize_f64(v, 8, false), 8, false);
            assert!((back - v).abs() <= step, "{v} came back as {back}");
            v += 0.013;
        }
    }
}
