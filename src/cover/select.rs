//! Essential prime implicants and greedy completion of the cover

use super::Implicant;
use crate::map::TermSet;
use crate::Mode;
use log::{debug, error, trace};

/// Result of [`select_cover`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverSelection {
    /// Implicants that are the only cover of some target term
    pub essential: Vec<Implicant>,
    /// Essential implicants plus the greedy picks, sorted for display
    pub cover: Vec<Implicant>,
}

impl CoverSelection {
    pub fn is_essential(&self, implicant: &Implicant) -> bool {
        self.essential.iter().any(|epi| epi.id() == implicant.id())
    }
}

/// Choose a cover of `targets` from `primes`
///
/// Every implicant that is the sole cover of a target term is essential. Target
/// terms left over are covered greedily: the implicant reaching the most uncovered
/// terms wins, ties go to the larger group and then to the lexicographically
/// smaller rendered term in `mode`.
///
/// The cover lists each implicant once, ordered by descending size and then by
/// rendered term.
pub fn select_cover(primes: &[Implicant], targets: TermSet, mode: Mode) -> CoverSelection {
    if targets.is_empty() || primes.is_empty() {
        return CoverSelection::default();
    }

    let rendered: Vec<String> = primes.iter().map(|pi| pi.to_expression(mode)).collect();
    let display_order = |a: &usize, b: &usize| {
        primes[*b]
            .size()
            .cmp(&primes[*a].size())
            .then_with(|| rendered[*a].cmp(&rendered[*b]))
    };

    // Chart: target term -> implicants covering it
    let mut essential: Vec<usize> = Vec::new();
    let mut uncovered = targets;
    for term in targets.iter() {
        let covering: Vec<usize> = (0..primes.len())
            .filter(|&i| primes[i].covers(term))
            .collect();
        trace!("term {} is covered by {:?}", term, covering);

        if let [only] = covering.as_slice() {
            if !essential.iter().any(|&e| primes[e].id() == primes[*only].id()) {
                debug!("{} is essential for term {}", rendered[*only], term);
                essential.push(*only);
                uncovered = uncovered.difference(primes[*only].term_set());
            }
        }
    }

    let mut selected = essential.clone();
    let mut pool: Vec<usize> = (0..primes.len())
        .filter(|i| !essential.contains(i))
        .collect();

    while !uncovered.is_empty() {
        let best = pool
            .iter()
            .enumerate()
            .map(|(slot, &i)| (slot, i, primes[i].term_set().intersection(uncovered).len()))
            .filter(|&(_, _, gain)| gain > 0)
            .max_by(|&(_, a, gain_a), &(_, b, gain_b)| {
                gain_a
                    .cmp(&gain_b)
                    .then_with(|| primes[a].size().cmp(&primes[b].size()))
                    .then_with(|| rendered[b].cmp(&rendered[a]))
            });

        let Some((slot, index, gain)) = best else {
            error!(
                "no prime implicant covers the remaining terms {:?}",
                uncovered.to_vec()
            );
            break;
        };

        debug!("greedy pick {} covers {} more terms", rendered[index], gain);
        pool.remove(slot);
        selected.push(index);
        uncovered = uncovered.difference(primes[index].term_set());
    }
    debug_assert!(
        uncovered.is_empty(),
        "every target term has at least a singleton implicant"
    );

    selected.sort_by(display_order);
    selected.dedup_by(|a, b| primes[*a].id() == primes[*b].id());
    essential.sort_by(display_order);

    CoverSelection {
        essential: essential.iter().map(|&i| primes[i].clone()).collect(),
        cover: selected.iter().map(|&i| primes[i].clone()).collect(),
    }
}
