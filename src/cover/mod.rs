//! Prime implicants and cover selection
//!
//! This module is the minimization engine:
//!
//! 1. [`find_prime_implicants`] walks the group catalog from the largest size down
//!    and keeps every maximal group made of target terms and don't-cares.
//! 2. [`select_cover`] picks the essential prime implicants from the coverage chart
//!    and covers what is left greedily.
//! 3. [`minimize`] ties both together and renders a [`Solution`].
//!
//! The greedy step is a heuristic: it always produces a valid irredundant-looking
//! cover, but not necessarily one with the fewest terms.

mod minimizable;
mod minimize;
mod primes;
mod select;

pub use minimizable::Minimizable;
pub use minimize::{
    expression_from_selection, minimize, minimize_with_config, Solution, SolvedGroup,
};
pub use primes::find_prime_implicants;
pub use select::{select_cover, CoverSelection};

use crate::expression::render_group;
use crate::map::groups::{Group, GroupSize};
use crate::map::TermSet;
use crate::Mode;
use std::sync::Arc;

/// A prime implicant: a maximal group of target terms and don't-cares
///
/// Identity is the sorted tuple of member cells, available as [`Implicant::id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implicant {
    group: Group,
    cells: Arc<[u8]>,
}

impl Implicant {
    pub fn new(group: Group) -> Self {
        Implicant {
            group,
            cells: group.cells().into(),
        }
    }

    /// Sorted member cells, the identity of the implicant
    pub fn id(&self) -> &[u8] {
        &self.cells
    }

    /// Member cells in ascending order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn size(&self) -> GroupSize {
        self.group.size()
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn term_set(&self) -> TermSet {
        self.group.term_set()
    }

    pub fn covers(&self, cell: u8) -> bool {
        self.group.contains(cell)
    }

    /// Render as an SOP product term or POS sum term
    pub fn to_expression(&self, mode: Mode) -> String {
        render_group(self.group, mode)
    }
}
