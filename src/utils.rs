use rand as rnd;

#[inline]
pub fn rand() -> f32 {
    rnd::random::<f32>()
}

#[inline]
pub fn rand_int(ceil: u32) -> u32 {
    rnd::random::<u32>() % ceil
}

/// Random value fitting `width` bits.
#[inline]
pub fn rand_bits(width: u32) -> u64 {
    debug_assert!((1..=64).contains(&width));
    let value = rnd::random::<u64>();
    if width == 64 {
        value
    } else {
        value & ((1u64 << width) - 1)
    }
}
