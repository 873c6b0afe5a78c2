//! Built-in magnitude kernel over base-10⁹ chunks
//!
//! Magnitudes are vectors of u32 chunks, least significant first, each
//! chunk holding nine decimal digits. Sums and chunk products of two
//! chunks always fit in u64, so every carry is one widening operation.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use num_integer::div_rem;
use num_traits::{One, Zero};

use super::Arithmetic;


/// Chunk radix; chunk values stay below this
pub(crate) const CHUNK_RADIX: u64 = 1_000_000_000;

/// Marker for the built-in chunk kernel
#[derive(Copy, Clone, Debug, Default)]
pub struct ChunkedMath;

/// Unsigned magnitude as base-10⁹ chunks, least significant first
///
/// Zero is the empty vector; the most significant chunk is never zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkedInt {
    chunks: Vec<u32>,
}

impl ChunkedInt {
    pub fn from_u64(mut n: u64) -> ChunkedInt {
        let mut chunks = Vec::with_capacity(3);
        while n != 0 {
            chunks.push((n % CHUNK_RADIX) as u32);
            n /= CHUNK_RADIX;
        }
        ChunkedInt { chunks }
    }

    /// Back to u64 if the value fits
    pub fn to_u64(&self) -> Option<u64> {
        let mut value: u64 = 0;
        for &chunk in self.chunks.iter().rev() {
            value = value
                .checked_mul(CHUNK_RADIX)?
                .checked_add(chunk as u64)?;
        }
        Some(value)
    }

    /// Number of chunks; zero has none
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    fn trim(&mut self) {
        while self.chunks.last() == Some(&0) {
            self.chunks.pop();
        }
    }
}

/// Sum of two magnitudes
pub(crate) fn add_chunks(a: &ChunkedInt, b: &ChunkedInt) -> ChunkedInt {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }
    let (long, short) = if a.chunks.len() >= b.chunks.len() {
        (a, b)
    } else {
        (b, a)
    };
    let mut chunks = Vec::with_capacity(long.chunks.len() + 1);
    let mut carry = 0u64;
    for (i, &digit) in long.chunks.iter().enumerate() {
        let sum = digit as u64 + short.chunks.get(i).copied().unwrap_or(0) as u64 + carry;
        let (hi, lo) = div_rem(sum, CHUNK_RADIX);
        carry = hi;
        chunks.push(lo as u32);
    }
    if carry != 0 {
        chunks.push(carry as u32);
    }
    ChunkedInt { chunks }
}

/// Schoolbook product of two magnitudes
pub(crate) fn mul_chunks(a: &ChunkedInt, b: &ChunkedInt) -> ChunkedInt {
    if a.is_zero() || b.is_zero() {
        return ChunkedInt::default();
    }
    if a.chunks == [1] {
        return b.clone();
    }
    if b.chunks == [1] {
        return a.clone();
    }
    let mut chunks = vec![0u32; a.chunks.len() + b.chunks.len()];
    for (i, &ai) in a.chunks.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &bj) in b.chunks.iter().enumerate() {
            let acc = chunks[i + j] as u64 + ai as u64 * bj as u64 + carry;
            let (hi, lo) = div_rem(acc, CHUNK_RADIX);
            chunks[i + j] = lo as u32;
            carry = hi;
        }
        let mut k = i + b.chunks.len();
        while carry != 0 {
            let acc = chunks[k] as u64 + carry;
            let (hi, lo) = div_rem(acc, CHUNK_RADIX);
            chunks[k] = lo as u32;
            carry = hi;
            k += 1;
        }
    }
    let mut product = ChunkedInt { chunks };
    product.trim();
    product
}

/// Square-and-multiply power
pub(crate) fn pow_chunks(base: &ChunkedInt, exp: usize) -> ChunkedInt {
    let mut result = ChunkedInt::from_u64(1);
    let mut square = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_chunks(&result, &square);
        }
        e >>= 1;
        if e > 0 {
            square = mul_chunks(&square, &square);
        }
    }
    result
}

/// Difference, requiring `a >= b`
fn sub_chunks(a: &ChunkedInt, b: &ChunkedInt) -> ChunkedInt {
    debug_assert!(cmp_chunks(a, b) != Ordering::Less);
    let mut chunks = Vec::with_capacity(a.chunks.len());
    let mut borrow = 0i64;
    for (i, &digit) in a.chunks.iter().enumerate() {
        let mut diff = digit as i64 - b.chunks.get(i).copied().unwrap_or(0) as i64 - borrow;
        if diff < 0 {
            diff += CHUNK_RADIX as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        chunks.push(diff as u32);
    }
    debug_assert_eq!(borrow, 0);
    let mut difference = ChunkedInt { chunks };
    difference.trim();
    difference
}

/// Product with a single value below the chunk radix
fn mul_small(a: &ChunkedInt, m: u64) -> ChunkedInt {
    debug_assert!(m < CHUNK_RADIX);
    if m == 0 || a.is_zero() {
        return ChunkedInt::default();
    }
    let mut chunks = Vec::with_capacity(a.chunks.len() + 1);
    let mut carry = 0u64;
    for &digit in &a.chunks {
        let acc = digit as u64 * m + carry;
        let (hi, lo) = div_rem(acc, CHUNK_RADIX);
        chunks.push(lo as u32);
        carry = hi;
    }
    if carry != 0 {
        chunks.push(carry as u32);
    }
    ChunkedInt { chunks }
}

/// Magnitude ordering; valid because chunk counts carry no leading zeros
pub(crate) fn cmp_chunks(a: &ChunkedInt, b: &ChunkedInt) -> Ordering {
    match a.chunks.len().cmp(&b.chunks.len()) {
        Ordering::Equal => {
            for (x, y) in a.chunks.iter().rev().zip(b.chunks.iter().rev()) {
                match x.cmp(y) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                }
            }
            Ordering::Equal
        }
        unequal => unequal,
    }
}

/// Long division, one quotient chunk per dividend chunk
///
/// The quotient chunk is found by binary search over the chunk radix,
/// which keeps the kernel free of estimation corrections at the cost
/// of around thirty small multiplies per chunk.
pub(crate) fn div_rem_chunks(a: &ChunkedInt, b: &ChunkedInt) -> (ChunkedInt, ChunkedInt) {
    assert!(!b.is_zero(), "division by zero magnitude");
    if cmp_chunks(a, b) == Ordering::Less {
        return (ChunkedInt::default(), a.clone());
    }
    if b.chunks.len() == 1 {
        return div_rem_small(a, b.chunks[0] as u64);
    }

    let mut quotient_rev = Vec::with_capacity(a.chunks.len());
    let mut remainder = ChunkedInt::default();
    for &digit in a.chunks.iter().rev() {
        shift_in_chunk(&mut remainder, digit);
        let q = largest_quotient_chunk(b, &remainder);
        if q != 0 {
            remainder = sub_chunks(&remainder, &mul_small(b, q));
        }
        quotient_rev.push(q as u32);
    }
    quotient_rev.reverse();
    let mut quotient = ChunkedInt { chunks: quotient_rev };
    quotient.trim();
    (quotient, remainder)
}

/// Division by a single chunk value
fn div_rem_small(a: &ChunkedInt, divisor: u64) -> (ChunkedInt, ChunkedInt) {
    debug_assert!(divisor != 0 && divisor < CHUNK_RADIX);
    let mut quotient_rev = Vec::with_capacity(a.chunks.len());
    let mut rem = 0u64;
    for &digit in a.chunks.iter().rev() {
        let acc = rem * CHUNK_RADIX + digit as u64;
        quotient_rev.push((acc / divisor) as u32);
        rem = acc % divisor;
    }
    quotient_rev.reverse();
    let mut quotient = ChunkedInt { chunks: quotient_rev };
    quotient.trim();
    (quotient, ChunkedInt::from_u64(rem))
}

/// remainder = remainder * radix + digit
fn shift_in_chunk(remainder: &mut ChunkedInt, digit: u32) {
    if remainder.is_zero() {
        if digit != 0 {
            remainder.chunks.push(digit);
        }
    } else {
        remainder.chunks.insert(0, digit);
    }
}

/// Largest q below the chunk radix with `divisor * q <= target`
fn largest_quotient_chunk(divisor: &ChunkedInt, target: &ChunkedInt) -> u64 {
    let mut lo = 0u64;
    let mut hi = CHUNK_RADIX - 1;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if cmp_chunks(&mul_small(divisor, mid), target) != Ordering::Greater {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}


impl Arithmetic for ChunkedMath {
    type Magnitude = ChunkedInt;

    fn from_u64(n: u64) -> ChunkedInt {
        ChunkedInt::from_u64(n)
    }

    fn to_u64(n: &ChunkedInt) -> Option<u64> {
        n.to_u64()
    }

    fn is_zero(n: &ChunkedInt) -> bool {
        n.chunks.is_empty()
    }

    fn add(a: &ChunkedInt, b: &ChunkedInt) -> ChunkedInt {
        add_chunks(a, b)
    }

    fn mul(a: &ChunkedInt, b: &ChunkedInt) -> ChunkedInt {
        mul_chunks(a, b)
    }

    fn pow(base: &ChunkedInt, exp: usize) -> ChunkedInt {
        pow_chunks(base, exp)
    }

    fn cmp(a: &ChunkedInt, b: &ChunkedInt) -> Ordering {
        cmp_chunks(a, b)
    }

    fn div_rem(a: &ChunkedInt, b: &ChunkedInt) -> (ChunkedInt, ChunkedInt) {
        div_rem_chunks(a, b)
    }
}


impl Ord for ChunkedInt {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_chunks(self, other)
    }
}

impl PartialOrd for ChunkedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_chunks(self, other))
    }
}

impl Add for ChunkedInt {
    type Output = ChunkedInt;

    fn add(self, rhs: ChunkedInt) -> ChunkedInt {
        add_chunks(&self, &rhs)
    }
}

impl Mul for ChunkedInt {
    type Output = ChunkedInt;

    fn mul(self, rhs: ChunkedInt) -> ChunkedInt {
        mul_chunks(&self, &rhs)
    }
}

impl Zero for ChunkedInt {
    fn zero() -> ChunkedInt {
        ChunkedInt::default()
    }

    fn is_zero(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl One for ChunkedInt {
    fn one() -> ChunkedInt {
        ChunkedInt::from_u64(1)
    }
}

impl From<u64> for ChunkedInt {
    fn from(n: u64) -> ChunkedInt {
        ChunkedInt::from_u64(n)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    include!("chunked.tests.rs");
}
