//! Fixed-width gene vectors.
//!
//! [`Genes`] is the chromosome every [`Individual`](super::Individual)
//! wraps. Its width `N` is part of the type, so a population can never mix
//! lengths and crossover never has to check them.
//!
//! # Bit order
//!
//! Index 0 is the least-significant bit. [`Genes::from_u64`] and
//! [`Genes::to_u64`] use the same order, so an unsigned integer encoding
//! is a plain copy of the low `N` bits.

use rand::Rng;
use std::fmt;
use std::ops::Index;

/// A vector of exactly `N` bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genes<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Genes<N> {
    /// Number of bits, always `N`.
    pub const LEN: usize = N;

    /// All bits cleared.
    pub fn zeros() -> Self {
        Self { bits: [false; N] }
    }

    /// Wraps an explicit bit array.
    pub fn from_bits(bits: [bool; N]) -> Self {
        Self { bits }
    }

    /// Each bit independently set with probability ½.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut bits = [false; N];
        for bit in bits.iter_mut() {
            *bit = rng.random_bool(0.5);
        }
        Self { bits }
    }

    /// Builds a gene vector from the low `N` bits of `value`.
    ///
    /// Bits at positions ≥ 64 are cleared.
    pub fn from_u64(value: u64) -> Self {
        let mut bits = [false; N];
        for (i, bit) in bits.iter_mut().enumerate().take(64) {
            *bit = (value >> i) & 1 == 1;
        }
        Self { bits }
    }

    /// Returns the low 64 bits as an integer. Higher bits are ignored.
    pub fn to_u64(&self) -> u64 {
        self.bits
            .iter()
            .take(64)
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | ((b as u64) << i))
    }

    /// Number of bits.
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for the zero-width type, which the engine rejects.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn get(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Sets bit `i` to `value`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn set(&mut self, i: usize, value: bool) {
        self.bits[i] = value;
    }

    /// Complements bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    pub fn flip(&mut self, i: usize) {
        self.bits[i] = !self.bits[i];
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of positions at which `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Iterates bits from index 0 upward.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Borrows the underlying bits.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Exchanges bits `[cut, N)` between `a` and `b`.
    ///
    /// `cut == 0` swaps the vectors entirely; `cut == N` is a no-op.
    ///
    /// # Panics
    /// Panics if `cut > N`.
    pub fn swap_suffix(a: &mut Self, b: &mut Self, cut: usize) {
        a.bits[cut..].swap_with_slice(&mut b.bits[cut..]);
    }
}

impl<const N: usize> Default for Genes<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Index<usize> for Genes<N> {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        &self.bits[i]
    }
}

impl<const N: usize> From<[bool; N]> for Genes<N> {
    fn from(bits: [bool; N]) -> Self {
        Self::from_bits(bits)
    }
}

// Most-significant bit first, like a written binary number.
impl<const N: usize> fmt::Display for Genes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.bits.iter().rev() {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Genes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genes<{N}>({self})")
    }
}

impl<const N: usize> std::str::FromStr for Genes<N> {
    type Err = String;

    /// Parses the [`Display`](fmt::Display) form: exactly `N` characters of
    /// `0`/`1`, most-significant first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != N {
            return Err(format!("expected {N} bits, got {} characters", s.len()));
        }
        let mut bits = [false; N];
        for (i, c) in s.bytes().rev().enumerate() {
            bits[i] = match c {
                b'0' => false,
                b'1' => true,
                other => return Err(format!("invalid bit character {:?}", other as char)),
            };
        }
        Ok(Self { bits })
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Genes<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Genes<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
