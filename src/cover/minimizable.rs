//! Minimizable trait for Karnaugh map minimization
//!
//! This module provides the public [`Minimizable`] trait which defines a uniform
//! interface for anything that can be turned into a minimal SOP or POS expression.

use super::minimize::Solution;
use crate::{KmapConfig, Mode};

/// Public trait for types that can be minimized on a 4-variable Karnaugh map
///
/// Minimization never modifies the original: the map is read, a fresh
/// [`Solution`] is returned, and the map can be edited and solved again.
///
/// ```
/// use kmap_logic::{CellValue, KMap, Minimizable, Mode};
///
/// # fn main() -> Result<(), kmap_logic::KmapError> {
/// let mut map = KMap::from_minterms(&[4, 5, 6, 7], &[])?;
/// assert_eq!(map.minimize(Mode::Sop).expression, "A'B");
///
/// // Edit and solve again
/// map.set(15, CellValue::One)?;
/// assert_eq!(map.minimize(Mode::Sop).expression, "A'B + BCD");
/// # Ok(())
/// # }
/// ```
///
/// # Implementations
///
/// - **[`KMap`]**: minimizes over the map's 1s in [`Mode::Sop`] and over its 0s in
///   [`Mode::Pos`], using the don't-care cells as filler
///
/// [`KMap`]: crate::KMap
pub trait Minimizable {
    /// Minimize with the default configuration
    ///
    /// Default implementation calls `minimize_with_config` with [`KmapConfig::default`].
    fn minimize(&self, mode: Mode) -> Solution {
        self.minimize_with_config(mode, &KmapConfig::default())
    }

    /// Minimize with a custom configuration
    ///
    /// This is the primary method that implementations must provide.
    fn minimize_with_config(&self, mode: Mode, config: &KmapConfig) -> Solution;
}
