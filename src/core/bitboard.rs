//! A fixed-size set of grid cells packed into an unsigned integer.
//!
//! The grid keeps its placement bookkeeping (cells still eligible for a new
//! vessel, cells consumed as buffer) in these sets; the automated side keeps
//! its shot memory in one. `N×N` must fit in the bit width of `T`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use super::coordinate::Coordinate;

/// A set of coordinates on an `N×N` board, stored one bit per cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "board does not fit");

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(c: Coordinate) -> Option<usize> {
        let n = N as i32;
        if c.row < 0 || c.col < 0 || c.row >= n || c.col >= n {
            None
        } else {
            Some(c.row as usize * N + c.col as usize)
        }
    }

    #[inline]
    fn at(idx: usize) -> Coordinate {
        Coordinate::new((idx / N) as i32, (idx % N) as i32)
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Set containing every cell of the board.
    #[inline]
    pub fn full() -> Self {
        let () = Self::FITS;
        BitBoard { bits: Self::mask() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; off-board coordinates are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c`. Returns `false` if it was already present or is off-board.
    pub fn insert(&mut self, c: Coordinate) -> bool {
        let Some(idx) = Self::index(c) else {
            return false;
        };
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    /// Removes `c`. Returns `true` if it was present.
    pub fn remove(&mut self, c: Coordinate) -> bool {
        let Some(idx) = Self::index(c) else {
            return false;
        };
        let bit = T::one() << idx;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        present
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// The `n`-th member in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coordinate> {
        self.iter().nth(n)
    }

    /// Cells of the complement, i.e. on-board coordinates not in the set.
    pub fn complement(&self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }

    /// Members in row-major order.
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for c in iter {
            board.insert(c);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coordinate::new(r as i32, c as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(BitBoard::<T, N>::at(idx));
            }
        }
        None
    }
}
