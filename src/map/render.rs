//! Text views of a [`KMap`]

use super::{KMap, KMAP_SIZE};
use std::fmt;

/// Gray-code order of a 2-bit K-map axis
const GRAY: [u8; 4] = [0b00, 0b01, 0b11, 0b10];

/// Truth table with one row per cell
///
/// ```text
///  A B C D |  # | F
///  0 0 0 0 |  0 | 1
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TruthTable<'a> {
    map: &'a KMap,
}

impl<'a> TruthTable<'a> {
    pub(super) fn new(map: &'a KMap) -> Self {
        TruthTable { map }
    }
}

impl fmt::Display for TruthTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " A B C D |  # | F")?;
        for (cell, value) in (0..KMAP_SIZE).zip(self.map.values().iter()) {
            writeln!(
                f,
                " {} {} {} {} | {:>2} | {}",
                (cell >> 3) & 1,
                (cell >> 2) & 1,
                (cell >> 1) & 1,
                cell & 1,
                cell,
                value.symbol()
            )?;
        }
        Ok(())
    }
}

/// 4×4 Karnaugh grid, rows indexed by AB and columns by CD, both in Gray order
///
/// ```text
/// AB\CD  00 01 11 10
///    00  1  0  0  1
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    map: &'a KMap,
}

impl<'a> Grid<'a> {
    pub(super) fn new(map: &'a KMap) -> Self {
        Grid { map }
    }
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AB\\CD ")?;
        for cd in GRAY {
            write!(f, " {:02b}", cd)?;
        }
        writeln!(f)?;

        for ab in GRAY {
            write!(f, "   {:02b}", ab)?;
            for cd in GRAY {
                let value = self.map.values()[usize::from((ab << 2) | cd)];
                write!(f, "  {}", value.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
