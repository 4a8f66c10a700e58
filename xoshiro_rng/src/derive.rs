// Derivation layer: everything built on top of a raw 64-bit word stream.
//
// `RandomSource` has a single required method, `next_u64`. Every other
// operation is a provided method that only ever calls `next_u64` (directly
// or through `next_u32`), so all engines share one audited set of
// derivations and none of them can touch generator state except by drawing.
//
// Bit selection follows the xoshiro authors' advice: the high bits of a raw
// word are the strongest, so narrow results take the top of the word
// (`>> 32`, `>> 33`, `>> 11`, `>> 40`) rather than truncating.
//
// Bounded integers use Lemire's nearly-divisionless multiply-and-reject
// method ("Fast Random Integer Generation in an Interval", 2019). A raw word
// `u` and bound `n` give the double-width product `u * n`; its high half is
// the candidate and its low half decides rejection. The remainder
// `2^w mod n` is only computed on the rare path where the low half is below
// `n`. Rejection loops run until acceptance with no iteration cap, since a cap
// would reintroduce the bias they exist to remove.

use crate::error::{RngError, RngResult};

/// 2^-53: spacing of the `f64` grid produced by `next_f64`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 2^-24: spacing of the `f32` grid produced by `next_f32`.
const F32_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// A source of uniform 64-bit words plus the derivations built on it.
pub trait RandomSource {
    /// Produce the next raw uniform word and advance the state.
    fn next_u64(&mut self) -> u64;

    /// Upper 32 bits of one raw word. Range `[0, u32::MAX]`.
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Non-negative `i32` in `[0, i32::MAX)`.
    ///
    /// Takes the upper 31 bits and redraws when they equal `i32::MAX`, which
    /// is excluded by contract (probability 2^-31 per draw).
    fn next_i32(&mut self) -> i32 {
        loop {
            let r = (self.next_u64() >> 33) as i32;
            if r != i32::MAX {
                return r;
            }
        }
    }

    /// Non-negative `i64` in `[0, i64::MAX)`, same pattern at 63 bits.
    fn next_i64(&mut self) -> i64 {
        loop {
            let r = (self.next_u64() >> 1) as i64;
            if r != i64::MAX {
                return r;
            }
        }
    }

    /// Uniform `i32` in `[0, bound)`.
    ///
    /// `bound` of 0 or 1 returns 0 without drawing. Negative bounds are a
    /// caller error.
    fn next_i32_below(&mut self, bound: i32) -> RngResult<i32> {
        if bound < 0 {
            return Err(RngError::NegativeBound {
                bound: i64::from(bound),
            });
        }
        Ok(sample_below(self, bound as u64) as i32)
    }

    /// Uniform `i32` in `[min, max)`. `min == max` returns `min`.
    fn next_i32_range(&mut self, min: i32, max: i32) -> RngResult<i32> {
        if min > max {
            return Err(RngError::InvertedRange {
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        // At most 2^32 - 1, so the 32-bit sampler always handles it.
        let range = (i64::from(max) - i64::from(min)) as u64;
        Ok((i64::from(min) + sample_below(self, range) as i64) as i32)
    }

    /// Uniform `i64` in `[0, bound)`.
    fn next_i64_below(&mut self, bound: i64) -> RngResult<i64> {
        if bound < 0 {
            return Err(RngError::NegativeBound { bound });
        }
        Ok(sample_below(self, bound as u64) as i64)
    }

    /// Uniform `i64` in `[min, max)`.
    fn next_i64_range(&mut self, min: i64, max: i64) -> RngResult<i64> {
        if min > max {
            return Err(RngError::InvertedRange { min, max });
        }
        // `max - min` can exceed i64::MAX but always fits u64.
        let range = max.wrapping_sub(min) as u64;
        Ok(min.wrapping_add(sample_below(self, range) as i64))
    }

    /// Uniform `f64` in `[0, 1)`: one of 2^53 evenly spaced values.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Uniform `f32` in `[0, 1)`: one of 2^24 evenly spaced values.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 * F32_UNIT
    }

    /// Fair coin from the top bit of one raw word.
    fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }

    /// Fill `buf` with random bytes.
    ///
    /// Each full 8-byte chunk takes one raw word in little-endian order. A
    /// 1-7 byte tail costs one more whole word, of which only the leading
    /// bytes are used. An empty buffer draws nothing.
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }

    /// Shuffle `items` in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = sample_below(self, i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Pick one element uniformly. `None` (and no draw) for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(sample_below(self, items.len() as u64) as usize)
    }
}

/// Unbiased integer in `[0, n)`. `n` of 0 or 1 yields 0 with no draw.
///
/// Bounds that fit 32 bits use the cheaper 32-bit variant.
pub(crate) fn sample_below<R: RandomSource + ?Sized>(rng: &mut R, n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    match u32::try_from(n) {
        Ok(n32) => u64::from(sample_below_u32(rng, n32)),
        Err(_) => sample_below_u64(rng, n),
    }
}

fn sample_below_u32<R: RandomSource + ?Sized>(rng: &mut R, n: u32) -> u32 {
    let mut product = u64::from(rng.next_u32()) * u64::from(n);
    let mut lo = product as u32;
    if lo < n {
        let threshold = n.wrapping_neg() % n; // 2^32 mod n
        while lo < threshold {
            product = u64::from(rng.next_u32()) * u64::from(n);
            lo = product as u32;
        }
    }
    (product >> 32) as u32
}

fn sample_below_u64<R: RandomSource + ?Sized>(rng: &mut R, n: u64) -> u64 {
    let mut product = u128::from(rng.next_u64()) * u128::from(n);
    let mut lo = product as u64;
    if lo < n {
        let threshold = n.wrapping_neg() % n; // 2^64 mod n
        while lo < threshold {
            product = u128::from(rng.next_u64()) * u128::from(n);
            lo = product as u64;
        }
    }
    (product >> 64) as u64
}
