//! Right-aligned bit fields inside 8-bit configuration registers

#[inline]
fn mask(width: u8) -> u8 {
    if width >= 8 {
        0xFF
    } else {
        (1u8 << width) - 1
    }
}

/// Reads the `width` bits found at `shift` in `value`, right-aligned.
pub fn extract(value: u8, width: u8, shift: u8) -> u8 {
    value.checked_shr(u32::from(shift)).unwrap_or(0) & mask(width)
}

/// Replaces the `width` bits at `shift` in `dst` with the low `width` bits
/// of `field`. All other bits of `dst` are kept.
pub fn insert(dst: u8, field: u8, width: u8, shift: u8) -> u8 {
    let m = mask(width).checked_shl(u32::from(shift)).unwrap_or(0);
    let f = (field & mask(width)).checked_shl(u32::from(shift)).unwrap_or(0);
    (dst & !m) | (f & m)
}
