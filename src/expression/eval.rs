//! Evaluation of SOP expressions against a truth assignment

use super::ast::SopExpr;
use crate::map::{CellValue, KMap, TermSet, KMAP_SIZE};

/// Outcome of checking an expression against a map
///
/// Don't-care cells never count as mismatches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verification {
    /// Cells where the expression is 1
    pub minterms: Vec<u8>,
    /// Cells where the expression is 0
    pub maxterms: Vec<u8>,
    /// Cells that are 1 on the map but 0 in the expression
    pub missing_ones: Vec<u8>,
    /// Cells that are 0 on the map but 1 in the expression
    pub extra_ones: Vec<u8>,
}

impl Verification {
    /// True when the expression agrees with every specified cell
    pub fn matches(&self) -> bool {
        self.missing_ones.is_empty() && self.extra_ones.is_empty()
    }
}

/// Evaluate `expr` on all 16 cells and compare it with `map`
///
/// # Examples
///
/// ```
/// use kmap_logic::{verify, KMap, SopExpr};
///
/// let map = KMap::from_minterms(&[12, 13, 14, 15], &[0]).unwrap();
/// let report = verify(&SopExpr::parse("AB + A'B'C'").unwrap(), &map);
///
/// assert!(!report.matches());
/// assert_eq!(report.extra_ones, vec![1]);
/// assert!(report.missing_ones.is_empty());
/// ```
pub fn verify(expr: &SopExpr, map: &KMap) -> Verification {
    let ones = expr.ones();
    let zeros = ones.complement();

    Verification {
        minterms: ones.to_vec(),
        maxterms: zeros.to_vec(),
        missing_ones: map.minterms().intersection(zeros).to_vec(),
        extra_ones: map.maxterms().intersection(ones).to_vec(),
    }
}

impl KMap {
    /// Build the map an expression describes, keeping the given cells as don't-cares
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{CellValue, KMap, SopExpr, TermSet};
    ///
    /// let expr = SopExpr::parse("A'").unwrap();
    /// let keep = TermSet::from_terms([0, 15]).unwrap();
    /// let map = KMap::from_expression(&expr, keep);
    ///
    /// assert_eq!(map.get(0), Some(CellValue::DontCare));
    /// assert_eq!(map.get(1), Some(CellValue::One));
    /// assert_eq!(map.get(15), Some(CellValue::DontCare));
    /// assert_eq!(map.get(14), Some(CellValue::Zero));
    /// ```
    pub fn from_expression(expr: &SopExpr, dont_cares: TermSet) -> KMap {
        let mut values = [CellValue::Zero; KMAP_SIZE];
        for (cell, value) in (0u8..).zip(values.iter_mut()) {
            *value = if dont_cares.contains(cell) {
                CellValue::DontCare
            } else if expr.evaluate(cell) {
                CellValue::One
            } else {
                CellValue::Zero
            };
        }
        KMap::from_values(values)
    }
}
