//! LSD radix sort over the order-preserving bit image of `f32`.
//!
//! Each float is mapped to a `u32` key whose unsigned order matches the
//! float order: negative values have all bits flipped, non-negative values
//! only the sign bit. Four 8-bit counting passes then sort the keys without a
//! single float comparison. Histograms for all passes are built in one read
//! over the input, and a pass whose digit is identical for every key is
//! skipped entirely.

const SIGN_BIT: u32 = 0x8000_0000;
const RADIX_BITS: u32 = 8;
const BUCKETS: usize = 1 << RADIX_BITS;
const PASSES: usize = (u32::BITS / RADIX_BITS) as usize;

/// Below this length a specialized comparison sort beats the counting passes.
pub const RADIX_THRESHOLD: usize = 256;

#[inline(always)]
fn to_key(value: f32) -> u32 {
    let bits = value.to_bits();
    if bits & SIGN_BIT != 0 {
        !bits
    } else {
        bits | SIGN_BIT
    }
}

#[inline(always)]
fn from_key(key: u32) -> f32 {
    let bits = if key & SIGN_BIT != 0 {
        key & !SIGN_BIT
    } else {
        !key
    };
    f32::from_bits(bits)
}

#[inline(always)]
fn digit(key: u32, pass: usize) -> usize {
    ((key >> (pass as u32 * RADIX_BITS)) as usize) & (BUCKETS - 1)
}

/// Sort `data` ascending with a radix sort on float keys.
///
/// Same contract as the baseline: unstable, non-decreasing, a permutation of
/// the input. `-0.0` is placed before `0.0`; NaN values land at either end
/// depending on their sign bit, which is still an unspecified position.
///
/// # Example
/// ```
/// use sort_rank_bench::sort::float_sort::sort_radix;
///
/// let mut data = vec![0.5, -3.0, 2.25, -0.125];
/// sort_radix(&mut data);
/// assert_eq!(data, vec![-3.0, -0.125, 0.5, 2.25]);
/// ```
pub fn sort_radix(data: &mut [f32]) {
    let len = data.len();
    if len < RADIX_THRESHOLD {
        data.sort_unstable_by(f32::total_cmp);
        return;
    }

    let mut keys: Vec<u32> = Vec::with_capacity(len);
    let mut histograms = [[0usize; BUCKETS]; PASSES];
    for &value in data.iter() {
        let key = to_key(value);
        for (pass, histogram) in histograms.iter_mut().enumerate() {
            histogram[digit(key, pass)] += 1;
        }
        keys.push(key);
    }

    let mut scratch = vec![0u32; len];
    for (pass, histogram) in histograms.iter().enumerate() {
        if histogram.iter().any(|&count| count == len) {
            continue;
        }

        let mut offsets = [0usize; BUCKETS];
        let mut running = 0;
        for (offset, &count) in offsets.iter_mut().zip(histogram.iter()) {
            *offset = running;
            running += count;
        }

        for &key in &keys {
            let bucket = digit(key, pass);
            scratch[offsets[bucket]] = key;
            offsets[bucket] += 1;
        }
        std::mem::swap(&mut keys, &mut scratch);
    }

    for (slot, &key) in data.iter_mut().zip(keys.iter()) {
        *slot = from_key(key);
    }
}
