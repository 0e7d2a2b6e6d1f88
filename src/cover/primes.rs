//! Prime implicant search over the group catalog

use super::Implicant;
use crate::map::groups::{potential_groups, Group, GroupSize};
use crate::map::TermSet;
use log::{debug, trace};

/// Find the prime implicants covering `targets`, using `dont_cares` as filler
///
/// `targets` and `dont_cares` must be disjoint. Sizes are searched from 8 down to
/// 2; a candidate is admissible when every cell is a target or a don't-care and at
/// least one cell is a target. Candidates contained in an implicant already found
/// at a larger size are skipped, and target terms left uncovered by every larger
/// group become singleton implicants.
///
/// The result is ordered by descending size, then by member cells.
///
/// # Examples
///
/// ```
/// use kmap_logic::{find_prime_implicants, TermSet};
///
/// let targets = TermSet::from_terms([0, 1, 5]).unwrap();
/// let primes = find_prime_implicants(targets, TermSet::EMPTY);
///
/// let ids: Vec<&[u8]> = primes.iter().map(|pi| pi.id()).collect();
/// assert_eq!(ids, vec![&[0u8, 1][..], &[1u8, 5][..]]);
/// ```
pub fn find_prime_implicants(targets: TermSet, dont_cares: TermSet) -> Vec<Implicant> {
    debug_assert!(targets.is_disjoint(dont_cares));

    if targets.is_empty() {
        return Vec::new();
    }

    let coverable = targets.union(dont_cares);
    if coverable.is_full() {
        debug!("every cell is a target or don't-care, using the whole map");
        return vec![Implicant::new(Group::full())];
    }

    let mut primes: Vec<Group> = Vec::new();
    for size in [GroupSize::Eight, GroupSize::Four, GroupSize::Two] {
        for &candidate in potential_groups(size) {
            let cells = candidate.term_set();
            if !cells.is_subset(coverable) || cells.is_disjoint(targets) {
                continue;
            }
            if primes.iter().any(|prime| candidate.is_subset_of(*prime)) {
                trace!("{:?} is contained in a larger implicant", candidate.cells());
                continue;
            }
            primes.push(candidate);
        }
    }

    for term in targets.iter() {
        if !primes.iter().any(|prime| prime.contains(term)) {
            primes.push(Group::singleton(term));
        }
    }

    let primes: Vec<Group> = primes
        .iter()
        .copied()
        .filter(|group| {
            !primes
                .iter()
                .any(|other| other != group && group.is_subset_of(*other))
        })
        .collect();

    debug!(
        "found {} prime implicants for {} target terms",
        primes.len(),
        targets.len()
    );
    primes.into_iter().map(Implicant::new).collect()
}
