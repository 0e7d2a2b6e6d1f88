//! The 4-variable truth assignment and the cell encoding it is built on
//!
//! A [`KMap`] holds one [`CellValue`] for each of the 16 input combinations. Sets of
//! cells (minterms, maxterms, don't-cares, group members) are [`TermSet`]s, a 16-bit
//! mask indexed by cell.

pub mod groups;
mod render;

pub use render::{Grid, TruthTable};

use crate::error::KmapError;
use crate::Mode;
use std::fmt;
use std::sync::Arc;

/// Number of cells on a 4-variable Karnaugh map
pub const KMAP_SIZE: usize = 16;

/// One of the four input variables
///
/// `A` is the most significant bit of a cell index, `D` the least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    A,
    B,
    C,
    D,
}

impl Variable {
    /// All variables in rendering order
    pub const ALL: [Variable; 4] = [Variable::A, Variable::B, Variable::C, Variable::D];

    /// Bit of the cell index carrying this variable
    pub fn mask(self) -> u8 {
        match self {
            Variable::A => 0b1000,
            Variable::B => 0b0100,
            Variable::C => 0b0010,
            Variable::D => 0b0001,
        }
    }

    pub fn name(self) -> char {
        match self {
            Variable::A => 'A',
            Variable::B => 'B',
            Variable::C => 'C',
            Variable::D => 'D',
        }
    }

    /// Value of this variable on the given cell
    pub fn value_in(self, cell: u8) -> bool {
        cell & self.mask() != 0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Value of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    #[default]
    Zero,
    One,
    DontCare,
}

impl CellValue {
    /// Next value in the truth-table editing cycle: 0 → 1 → X → 0
    pub fn cycled(self) -> Self {
        match self {
            CellValue::Zero => CellValue::One,
            CellValue::One => CellValue::DontCare,
            CellValue::DontCare => CellValue::Zero,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellValue::Zero => '0',
            CellValue::One => '1',
            CellValue::DontCare => 'X',
        }
    }
}

/// A set of cell indices
///
/// Bit `i` of the mask is set when cell `i` is a member. Iteration is always in
/// ascending cell order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TermSet(u16);

impl TermSet {
    pub const EMPTY: TermSet = TermSet(0);
    pub const FULL: TermSet = TermSet(u16::MAX);

    /// Build a set from cell indices, rejecting anything outside `0..=15`
    ///
    /// Duplicates are allowed and collapse into one member.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::TermSet;
    ///
    /// let set = TermSet::from_terms([3, 1, 3]).unwrap();
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    ///
    /// assert!(TermSet::from_terms([16]).is_err());
    /// ```
    pub fn from_terms<I: IntoIterator<Item = u8>>(terms: I) -> Result<Self, KmapError> {
        let mut set = TermSet::EMPTY;
        for term in terms {
            if usize::from(term) >= KMAP_SIZE {
                return Err(KmapError::InvalidTerm {
                    term: usize::from(term),
                });
            }
            set.insert(term);
        }
        Ok(set)
    }

    /// Build a set straight from its 16-bit mask
    pub fn from_bits(bits: u16) -> Self {
        TermSet(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub(crate) fn insert(&mut self, cell: u8) {
        debug_assert!(usize::from(cell) < KMAP_SIZE);
        self.0 |= 1 << cell;
    }

    pub fn contains(self, cell: u8) -> bool {
        usize::from(cell) < KMAP_SIZE && self.0 & (1 << cell) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_full(self) -> bool {
        self.0 == u16::MAX
    }

    pub fn union(self, other: TermSet) -> TermSet {
        TermSet(self.0 | other.0)
    }

    pub fn intersection(self, other: TermSet) -> TermSet {
        TermSet(self.0 & other.0)
    }

    pub fn difference(self, other: TermSet) -> TermSet {
        TermSet(self.0 & !other.0)
    }

    pub fn complement(self) -> TermSet {
        TermSet(!self.0)
    }

    pub fn is_subset(self, other: TermSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_disjoint(self, other: TermSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Members in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..KMAP_SIZE as u8).filter(move |&cell| self.0 & (1 << cell) != 0)
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl TryFrom<&[u8]> for TermSet {
    type Error = KmapError;

    fn try_from(terms: &[u8]) -> Result<Self, Self::Error> {
        TermSet::from_terms(terms.iter().copied())
    }
}

/// A complete truth assignment for a 4-variable function
///
/// The map is a plain value: the minimizer reads it and never keeps a reference
/// to it, so callers are free to edit and re-solve it as often as they like.
///
/// # Examples
///
/// ```
/// use kmap_logic::{CellValue, KMap};
///
/// let mut map = KMap::from_minterms(&[1, 3], &[5]).unwrap();
/// assert_eq!(map.get(5), Some(CellValue::DontCare));
///
/// // Truth-table editing cycles 0 → 1 → X → 0
/// assert_eq!(map.cycle(0).unwrap(), CellValue::One);
/// assert_eq!(map.minterms().to_vec(), vec![0, 1, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KMap {
    values: [CellValue; KMAP_SIZE],
}

impl KMap {
    /// Create a map with every cell set to 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: [CellValue; KMAP_SIZE]) -> Self {
        KMap { values }
    }

    /// Build a map from minterms and don't-cares; every other cell is 0
    pub fn from_minterms(minterms: &[u8], dont_cares: &[u8]) -> Result<Self, KmapError> {
        Self::from_lists(minterms, dont_cares, CellValue::One, CellValue::Zero)
    }

    /// Build a map from maxterms and don't-cares; every other cell is 1
    pub fn from_maxterms(maxterms: &[u8], dont_cares: &[u8]) -> Result<Self, KmapError> {
        Self::from_lists(maxterms, dont_cares, CellValue::Zero, CellValue::One)
    }

    fn from_lists(
        terms: &[u8],
        dont_cares: &[u8],
        term_value: CellValue,
        fill: CellValue,
    ) -> Result<Self, KmapError> {
        let terms = TermSet::try_from(terms)?;
        let dont_cares = TermSet::try_from(dont_cares)?;
        if let Some(term) = terms.intersection(dont_cares).iter().next() {
            return Err(KmapError::OverlappingTerms { term });
        }

        let mut map = KMap::from_values([fill; KMAP_SIZE]);
        for cell in terms.iter() {
            map.values[usize::from(cell)] = term_value;
        }
        for cell in dont_cares.iter() {
            map.values[usize::from(cell)] = CellValue::DontCare;
        }
        Ok(map)
    }

    pub fn values(&self) -> &[CellValue; KMAP_SIZE] {
        &self.values
    }

    pub fn get(&self, cell: u8) -> Option<CellValue> {
        self.values.get(usize::from(cell)).copied()
    }

    pub fn set(&mut self, cell: u8, value: CellValue) -> Result<(), KmapError> {
        let slot = self
            .values
            .get_mut(usize::from(cell))
            .ok_or(KmapError::InvalidTerm {
                term: usize::from(cell),
            })?;
        *slot = value;
        Ok(())
    }

    /// Advance a cell through 0 → 1 → X → 0 and return its new value
    pub fn cycle(&mut self, cell: u8) -> Result<CellValue, KmapError> {
        let current = self.get(cell).ok_or(KmapError::InvalidTerm {
            term: usize::from(cell),
        })?;
        let next = current.cycled();
        self.set(cell, next)?;
        Ok(next)
    }

    /// Reset every cell to 0
    pub fn clear(&mut self) {
        self.values = [CellValue::Zero; KMAP_SIZE];
    }

    fn cells_with(&self, value: CellValue) -> TermSet {
        let mut set = TermSet::EMPTY;
        for (cell, v) in (0u8..).zip(self.values.iter()) {
            if *v == value {
                set.insert(cell);
            }
        }
        set
    }

    pub fn minterms(&self) -> TermSet {
        self.cells_with(CellValue::One)
    }

    pub fn maxterms(&self) -> TermSet {
        self.cells_with(CellValue::Zero)
    }

    pub fn dont_cares(&self) -> TermSet {
        self.cells_with(CellValue::DontCare)
    }

    /// Cells the cover must reach: the 1s for SOP, the 0s for POS
    pub fn targets(&self, mode: Mode) -> TermSet {
        match mode {
            Mode::Sop => self.minterms(),
            Mode::Pos => self.maxterms(),
        }
    }

    /// Truth-table view, one row per cell
    pub fn truth_table(&self) -> TruthTable<'_> {
        TruthTable::new(self)
    }

    /// Karnaugh grid view with Gray-coded rows (AB) and columns (CD)
    pub fn grid(&self) -> Grid<'_> {
        Grid::new(self)
    }
}

/// Parse a comma-separated list of cell indices such as `"0, 2, 8,10"`
///
/// Whitespace around entries and empty entries are ignored. Anything that is not
/// an index in `0..=15` is rejected.
///
/// # Examples
///
/// ```
/// use kmap_logic::parse_term_list;
///
/// assert_eq!(parse_term_list("0, 2, 8,10").unwrap(), vec![0, 2, 8, 10]);
/// assert_eq!(parse_term_list("").unwrap(), Vec::<u8>::new());
/// assert!(parse_term_list("3, 17").is_err());
/// ```
pub fn parse_term_list(input: &str) -> Result<Vec<u8>, KmapError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let term: usize = token.parse().map_err(|_| KmapError::MalformedTerm {
                token: Arc::from(token),
            })?;
            u8::try_from(term)
                .ok()
                .filter(|&t| usize::from(t) < KMAP_SIZE)
                .ok_or(KmapError::InvalidTerm { term })
        })
        .collect()
}

#[cfg(test)]
mod tests;
