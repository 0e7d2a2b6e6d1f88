//! Solve entry points and manual group selection

use super::minimizable::Minimizable;
use super::primes::find_prime_implicants;
use super::select::select_cover;
use crate::error::KmapError;
use crate::expression::{join_terms, render_group};
use crate::map::groups::{Group, GroupSize};
use crate::map::{CellValue, KMap, TermSet, KMAP_SIZE};
use crate::{KmapConfig, Mode};
use log::debug;
use std::fmt;

/// One group of a minimized cover
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolvedGroup {
    /// Member cells in ascending order
    pub cells: Vec<u8>,
    /// Whether the group is the only cover of some target term
    pub is_essential: bool,
    /// The group rendered as an SOP product term or POS sum term
    pub literal_expression: String,
}

/// A minimized expression together with the groups that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub mode: Mode,
    pub expression: String,
    /// Groups in display order: descending size, then rendered term
    pub groups: Vec<SolvedGroup>,
}

impl Solution {
    fn constant(mode: Mode, expression: &str) -> Self {
        Solution {
            mode,
            expression: expression.to_string(),
            groups: Vec::new(),
        }
    }

    /// Number of groups marked essential
    pub fn essential_count(&self) -> usize {
        self.groups.iter().filter(|g| g.is_essential).count()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.mode, self.expression)?;
        for (i, group) in self.groups.iter().enumerate() {
            let kind = if group.is_essential {
                "Essential"
            } else {
                "Selected"
            };
            let cells: Vec<String> = group.cells.iter().map(u8::to_string).collect();
            writeln!(
                f,
                "Group {} ({}): [{}] → {}",
                i + 1,
                kind,
                cells.join(", "),
                group.literal_expression
            )?;
        }
        Ok(())
    }
}

/// Minimize with the default configuration
///
/// `targets` are the minterms in [`Mode::Sop`] and the maxterms in [`Mode::Pos`].
/// `dont_cares` must not overlap them.
pub fn minimize(targets: TermSet, dont_cares: TermSet, mode: Mode) -> Solution {
    minimize_with_config(targets, dont_cares, mode, &KmapConfig::default())
}

/// Minimize with a custom configuration
///
/// # Examples
///
/// ```
/// use kmap_logic::{minimize_with_config, KmapConfig, Mode, PosSeparator, TermSet};
///
/// let config = KmapConfig {
///     pos_separator: PosSeparator::Asterisk,
///     ..KmapConfig::default()
/// };
/// // Zeros of f = A'B'
/// let zeros = TermSet::from_terms(4..16).unwrap();
/// let solution = minimize_with_config(zeros, TermSet::EMPTY, Mode::Pos, &config);
///
/// assert_eq!(solution.expression, "A' * B'");
/// ```
pub fn minimize_with_config(
    targets: TermSet,
    dont_cares: TermSet,
    mode: Mode,
    config: &KmapConfig,
) -> Solution {
    let dont_cares = dont_cares.difference(targets);

    if targets.is_empty() {
        let expression = if dont_cares.is_full() && config.dont_care_only_is_identity {
            mode.identity_constant()
        } else {
            mode.empty_constant()
        };
        debug!("no target terms, {} is {}", mode, expression);
        return Solution::constant(mode, expression);
    }

    let primes = find_prime_implicants(targets, dont_cares);
    let selection = select_cover(&primes, targets, mode);

    let groups: Vec<SolvedGroup> = selection
        .cover
        .iter()
        .map(|implicant| SolvedGroup {
            cells: implicant.cells().to_vec(),
            is_essential: selection.is_essential(implicant),
            literal_expression: implicant.to_expression(mode),
        })
        .collect();

    let terms: Vec<&str> = groups
        .iter()
        .map(|g| g.literal_expression.as_str())
        .collect();
    let expression = join_terms(&terms, mode, config);

    debug!(
        "{} cover uses {} of {} prime implicants ({} essential)",
        mode,
        groups.len(),
        primes.len(),
        selection.essential.len()
    );

    Solution {
        mode,
        expression,
        groups,
    }
}

impl Minimizable for KMap {
    fn minimize_with_config(&self, mode: Mode, config: &KmapConfig) -> Solution {
        minimize_with_config(self.targets(mode), self.dont_cares(), mode, config)
    }
}

/// Render a hand-picked group of cells as a single term
///
/// The selection must be non-empty, hold 1, 2, 4, 8 or 16 distinct cells, only use
/// cells that are targets in `mode` or don't-cares, and form a rectangular
/// (wraparound) group. Duplicates in `cells` are ignored.
///
/// # Examples
///
/// ```
/// use kmap_logic::{expression_from_selection, KMap, KmapError, Mode};
///
/// let map = KMap::from_minterms(&[0, 2, 8, 10], &[]).unwrap();
///
/// // The four corners wrap around both edges
/// assert_eq!(expression_from_selection(&map, &[0, 2, 8, 10], Mode::Sop).unwrap(), "B'D'");
///
/// assert_eq!(
///     expression_from_selection(&map, &[0, 2, 8], Mode::Sop),
///     Err(KmapError::InvalidGroupSize { size: 3 })
/// );
/// ```
pub fn expression_from_selection(
    map: &KMap,
    cells: &[u8],
    mode: Mode,
) -> Result<String, KmapError> {
    if cells.is_empty() {
        return Err(KmapError::EmptySelection);
    }
    if let Some(&cell) = cells.iter().find(|&&c| usize::from(c) >= KMAP_SIZE) {
        return Err(KmapError::InvalidTerm {
            term: usize::from(cell),
        });
    }

    let selection = TermSet::try_from(cells)?;
    if GroupSize::from_cells(selection.len()).is_none() {
        return Err(KmapError::InvalidGroupSize {
            size: selection.len(),
        });
    }

    let admissible = map.targets(mode).union(map.dont_cares());
    if let Some(cell) = selection.difference(admissible).iter().next() {
        let value = map.get(cell).unwrap_or(CellValue::Zero);
        return Err(KmapError::InadmissibleCell { cell, value });
    }

    let members = selection.to_vec();
    let group = Group::from_cells(&members).ok_or(KmapError::InvalidGroupShape {
        cells: members.clone(),
    })?;
    Ok(render_group(group, mode))
}
