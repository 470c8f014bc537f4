/// Bits in one limb of a magnitude.
pub const LIMB_BITS: u32 = u32::BITS;

/// Largest magnitude served from the small value cache.
pub const MAX_CONSTANT: usize = 16;

/// Decimal digits handled per limb operation when parsing and printing.
pub const DECIMAL_GROUP_DIGITS: usize = 9;

/// `10 ^ DECIMAL_GROUP_DIGITS`, the largest power of ten that fits in a limb.
pub const DECIMAL_GROUP_RADIX: u32 = 1_000_000_000;

/// Fractional digits rendered by `Rational::to_f64` before parsing the text
/// back as a float. Values needing more digits lose them.
pub const DOUBLE_PRECISION: usize = 16;
