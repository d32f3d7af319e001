/*!
bit packing.

Channels are placed most-significant-first: the first channel occupies the highest bits
of the word, the last channel the lowest.  A width of 0 means "no channel", which lets
3-channel layouts share the 4-wide arrays used by the codecs.

The packer does no range checking of its own.  Channel values are masked to their
width, so callers must quantize into `[0, 2^width - 1]` first (see
[`crate::fixed_point`]).
*/

/// 5-6-5, blue in the low bits.
pub const WIDTHS_565: [u32; 4] = [5, 6, 5, 0];
/// 5-5-5-1, one-bit alpha in the low bit.
pub const WIDTHS_5551: [u32; 4] = [5, 5, 5, 1];
/// 4-4-4-4.
pub const WIDTHS_4444: [u32; 4] = [4, 4, 4, 4];
/// 10-10-10-2, two-bit alpha in the low bits.
pub const WIDTHS_1010102: [u32; 4] = [10, 10, 10, 2];
/// 24-bit depth over 8 unused low bits.
pub const WIDTHS_24_8: [u32; 4] = [24, 8, 0, 0];

#[inline] const fn mask(width: u32) -> u32 {
    if width >= 32 { u32::MAX } else { (1 << width) - 1 }
}

/// Packs `channels` into one word, first channel in the most significant bits.
///
/// The widths must sum to at most 32.
#[inline] pub fn pack<const K: usize>(channels: [u32; K], widths: [u32; K]) -> u32 {
    debug_assert!(widths.iter().sum::<u32>() <= 32);
    let mut packed = 0_u32;
    for (channel, width) in channels.into_iter().zip(widths) {
        packed = packed.checked_shl(width).unwrap_or(0) | (channel & mask(width));
    }
    packed
}

/// Inverse of [`pack`].
#[inline] pub fn unpack<const K: usize>(packed: u32, widths: [u32; K]) -> [u32; K] {
    debug_assert!(widths.iter().sum::<u32>() <= 32);
    let mut out = [0_u32; K];
    let mut rest = packed;
    for i in (0..K).rev() {
        out[i] = rest & mask(widths[i]);
        rest = rest.checked_shr(widths[i]).unwrap_or(0);
    }
    out
}
