//! # Karnaugh Map Minimizer
//!
//! This crate simplifies 4-variable Boolean functions given as a truth assignment
//! over the 16 input combinations, producing a minimal Sum-of-Products (SOP) or
//! Product-of-Sums (POS) expression.
//!
//! ## Overview
//!
//! The minimization engine works directly on the 4×4 Karnaugh map:
//!
//! - every rectangular (wraparound) group of 1, 2, 4, 8 or 16 cells is enumerated
//!   from the closed-form sub-cube definition,
//! - prime implicants are the maximal groups made only of target terms and
//!   don't-cares,
//! - essential prime implicants are picked from the coverage chart,
//! - the remaining target terms are covered greedily.
//!
//! Cell indices use the usual truth-table order: the 4-bit binary form of the
//! index, MSB first, gives the values of `A`, `B`, `C` and `D`.
//!
//! ## Minimizing a map
//!
//! ```
//! use kmap_logic::{KMap, Minimizable, Mode};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! // f(A,B,C,D) = Σm(0, 2, 8, 10)
//! let map = KMap::from_minterms(&[0, 2, 8, 10], &[])?;
//!
//! let solution = map.minimize(Mode::Sop);
//! assert_eq!(solution.expression, "B'D'");
//!
//! // The same map read as a product of sums over its zeros
//! let pos = map.minimize(Mode::Pos);
//! assert_eq!(pos.expression, "B' · D'");
//! # Ok(())
//! # }
//! ```
//!
//! Target and don't-care sets can also be handed to the engine directly:
//!
//! ```
//! use kmap_logic::{minimize, Mode, TermSet};
//!
//! # fn main() -> Result<(), kmap_logic::KmapError> {
//! let targets = TermSet::from_terms([0, 1, 2, 3, 4, 5, 6, 7])?;
//! let solution = minimize(targets, TermSet::EMPTY, Mode::Sop);
//!
//! assert_eq!(solution.expression, "A'");
//! assert_eq!(solution.groups.len(), 1);
//! assert!(solution.groups[0].is_essential);
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying a hand-written expression
//!
//! ```
//! use kmap_logic::{verify, KMap, SopExpr};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let map = KMap::from_minterms(&[0, 2, 8, 10], &[])?;
//! let expr = SopExpr::parse("B'D'")?;
//!
//! let report = verify(&expr, &map);
//! assert!(report.matches());
//! # Ok(())
//! # }
//! ```
//!
//! ## PLA files
//!
//! Maps can be read from and written to 4-input, 1-output PLA files:
//!
//! ```
//! use kmap_logic::pla::{PlaReader, PlaType, PlaWriter};
//! use kmap_logic::KMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let map = KMap::from_pla_string(".i 4\n.o 1\n0--- 1\n.e\n")?;
//! assert_eq!(map.minterms().len(), 8);
//!
//! let text = map.to_pla_string(PlaType::FD)?;
//! assert_eq!(KMap::from_pla_string(&text)?, map);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod cover;
pub mod error;
pub mod expression;
pub mod map;
pub mod pla;

// Re-export high-level public API
pub use cover::{
    expression_from_selection, find_prime_implicants, minimize, minimize_with_config,
    select_cover, CoverSelection, Implicant, Minimizable, Solution, SolvedGroup,
};
pub use error::KmapError;
pub use expression::{verify, SopExpr, Verification};
pub use map::groups::{potential_groups, Group, GroupSize};
pub use map::{parse_term_list, CellValue, KMap, TermSet, Variable, KMAP_SIZE};

use std::fmt;

/// Which value of the function the cover describes
///
/// - `Sop` covers the 1s (minterms) and renders a sum of products
/// - `Pos` covers the 0s (maxterms) and renders a product of sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Sum of products over the minterms
    #[default]
    Sop,
    /// Product of sums over the maxterms
    Pos,
}

impl Mode {
    /// Constant rendered when there is nothing to cover
    pub fn empty_constant(self) -> &'static str {
        match self {
            Mode::Sop => "0",
            Mode::Pos => "1",
        }
    }

    /// Constant rendered when the cover spans the whole map
    pub fn identity_constant(self) -> &'static str {
        match self {
            Mode::Sop => "1",
            Mode::Pos => "0",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Sop => write!(f, "SOP"),
            Mode::Pos => write!(f, "POS"),
        }
    }
}

/// Operator placed between the sum terms of a POS expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosSeparator {
    /// `(A + B) · C'`
    #[default]
    MiddleDot,
    /// `(A + B) * C'`
    Asterisk,
}

impl PosSeparator {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            PosSeparator::MiddleDot => " · ",
            PosSeparator::Asterisk => " * ",
        }
    }
}

/// Configuration for the minimizer and its rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmapConfig {
    /// Separator between POS sum terms
    pub pos_separator: PosSeparator,
    /// Render a map made only of don't-cares as the identity constant
    /// (`1` for SOP, `0` for POS) instead of the empty one
    pub dont_care_only_is_identity: bool,
}

impl Default for KmapConfig {
    fn default() -> Self {
        KmapConfig {
            pos_separator: PosSeparator::MiddleDot,
            dont_care_only_is_identity: true,
        }
    }
}

impl KmapConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
