//! Catalog of every valid Karnaugh map group
//!
//! A group of `2^k` cells is a sub-cube of the 4-bit index space: `k` bit positions
//! range freely while the other `4 - k` are fixed. Because each K-map axis is
//! Gray-coded, these sub-cubes are exactly the rectangles of the map, wraparound
//! included, so the catalog is generated from bitmasks rather than transcribed.

use super::{TermSet, Variable, KMAP_SIZE};
use std::sync::OnceLock;

const ALL_BITS: u8 = 0b1111;

/// Number of cells in a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupSize {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
    Sixteen = 16,
}

impl GroupSize {
    /// Every size, largest first
    pub const DESCENDING: [GroupSize; 5] = [
        GroupSize::Sixteen,
        GroupSize::Eight,
        GroupSize::Four,
        GroupSize::Two,
        GroupSize::One,
    ];

    pub fn from_cells(count: usize) -> Option<Self> {
        match count {
            1 => Some(GroupSize::One),
            2 => Some(GroupSize::Two),
            4 => Some(GroupSize::Four),
            8 => Some(GroupSize::Eight),
            16 => Some(GroupSize::Sixteen),
            _ => None,
        }
    }

    pub fn cells(self) -> usize {
        self as usize
    }

    /// Number of variables that range freely inside a group of this size
    pub fn free_bits(self) -> u32 {
        self.cells().trailing_zeros()
    }

    /// Number of literals in the term of a group of this size
    pub fn literal_count(self) -> usize {
        4 - self.free_bits() as usize
    }

    fn catalog_slot(self) -> usize {
        self.free_bits() as usize
    }
}

/// A rectangular block of cells on the map
///
/// Stored as the mask of free bits and the values of the fixed ones; member cells
/// are `fixed | s` for every sub-mask `s` of `free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group {
    free: u8,
    fixed: u8,
}

impl Group {
    pub(crate) fn new(free: u8, fixed: u8) -> Self {
        debug_assert!(free & !ALL_BITS == 0 && fixed & !ALL_BITS == 0);
        debug_assert!(free & fixed == 0);
        Group { free, fixed }
    }

    pub fn singleton(cell: u8) -> Self {
        Group::new(0, cell & ALL_BITS)
    }

    /// The whole map
    pub fn full() -> Self {
        Group::new(ALL_BITS, 0)
    }

    /// Recognise an arbitrary cell set as a group
    ///
    /// Returns `None` unless the cells (duplicates ignored) are all valid indices
    /// and form exactly one sub-cube.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Group;
    ///
    /// // Corners of the map wrap around into one group
    /// assert!(Group::from_cells(&[0, 2, 8, 10]).is_some());
    /// // Cells 1 and 2 are not adjacent
    /// assert!(Group::from_cells(&[1, 2]).is_none());
    /// ```
    pub fn from_cells(cells: &[u8]) -> Option<Group> {
        let members = TermSet::from_terms(cells.iter().copied()).ok()?;
        let first = members.iter().next()?;
        let free = members.iter().fold(0, |acc, cell| acc | (cell ^ first));
        let group = Group::new(free, first & !free);
        (group.term_set() == members).then_some(group)
    }

    pub fn size(self) -> GroupSize {
        match self.free.count_ones() {
            0 => GroupSize::One,
            1 => GroupSize::Two,
            2 => GroupSize::Four,
            3 => GroupSize::Eight,
            _ => GroupSize::Sixteen,
        }
    }

    pub fn free_mask(self) -> u8 {
        self.free
    }

    pub fn fixed_bits(self) -> u8 {
        self.fixed
    }

    pub fn contains(self, cell: u8) -> bool {
        usize::from(cell) < KMAP_SIZE && cell & !self.free == self.fixed
    }

    pub fn is_subset_of(self, other: Group) -> bool {
        self.free & other.free == self.free && self.fixed & !other.free == other.fixed
    }

    /// Member cells in ascending order
    pub fn cells(self) -> Vec<u8> {
        (0..=ALL_BITS)
            .filter(|s| s & !self.free == 0)
            .map(|s| self.fixed | s)
            .collect()
    }

    pub fn term_set(self) -> TermSet {
        let mut set = TermSet::EMPTY;
        for cell in self.cells() {
            set.insert(cell);
        }
        set
    }

    /// Value shared by every member for this variable, `None` if it varies
    pub fn constant_value(self, variable: Variable) -> Option<bool> {
        let mask = variable.mask();
        (self.free & mask == 0).then_some(self.fixed & mask != 0)
    }
}

fn build_catalog(size: GroupSize) -> Vec<Group> {
    let free_bits = size.free_bits();
    let mut groups: Vec<Group> = (0..=ALL_BITS)
        .filter(|free| free.count_ones() == free_bits)
        .flat_map(|free| {
            (0..=ALL_BITS)
                .filter(move |fixed| fixed & free == 0)
                .map(move |fixed| Group::new(free, fixed))
        })
        .collect();
    groups.sort_by_cached_key(|group| group.cells());
    groups
}

/// Every group of the given size, sorted by member cells
///
/// The catalog is computed once per process; repeated calls return the same
/// slice.
///
/// # Examples
///
/// ```
/// use kmap_logic::{potential_groups, GroupSize};
///
/// assert_eq!(potential_groups(GroupSize::Two).len(), 32);
/// assert_eq!(potential_groups(GroupSize::Four).len(), 24);
/// assert_eq!(potential_groups(GroupSize::Eight).len(), 8);
/// assert_eq!(potential_groups(GroupSize::Eight)[0].cells(), vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn potential_groups(size: GroupSize) -> &'static [Group] {
    static CATALOG: OnceLock<[Vec<Group>; 5]> = OnceLock::new();
    let catalog = CATALOG.get_or_init(|| {
        [
            build_catalog(GroupSize::One),
            build_catalog(GroupSize::Two),
            build_catalog(GroupSize::Four),
            build_catalog(GroupSize::Eight),
            build_catalog(GroupSize::Sixteen),
        ]
    });
    &catalog[size.catalog_slot()]
}
