//! Optimal (Belady's) page replacement.
//!
//! The policy is clairvoyant: it needs the whole reference string up front.
//! Instead of scanning forward from the current position on every fault, the
//! next occurrence of every reference is computed once, so that the next use of
//! a resident page is a table lookup through the position of its latest
//! reference.

use {
    crate::{PageId, Policy, ReplacementPolicy},
    std::collections::HashMap,
};

/// Optimal (OPT) page replacement policy.
///
/// On a fault with full frames, the victim is the resident page whose next
/// reference lies furthest in the future. A page that is never referenced again
/// is evicted immediately. Ties are broken by slot order: the first page in
/// `frames` wins, both among pages without future use and among pages sharing
/// the same next use.
#[derive(Debug)]
pub struct OptPolicy<P: PageId> {
    /// For every position in the reference string, the position of the next
    /// reference to the same page.
    next_use: Vec<Option<usize>>,

    /// Position of the latest reference to every page seen so far.
    last_ref: HashMap<P, usize>,
}

impl<P: PageId> OptPolicy<P> {
    /// Creates a new OPT policy for the given reference string.
    ///
    /// The policy must be driven with the very same reference string.
    pub fn new(refs: &[P]) -> Self {
        let mut next_use = vec![None; refs.len()];
        let mut upcoming = HashMap::new();
        for (pos, page) in refs.iter().enumerate().rev() {
            next_use[pos] = upcoming.insert(*page, pos);
        }

        Self {
            next_use,
            last_ref: HashMap::with_capacity(upcoming.len()),
        }
    }

    /// Position of the next reference to `page` after its latest one.
    ///
    /// Returns `None` if the page is never referenced again (or was never
    /// referenced at all).
    pub fn next_use(&self, page: &P) -> Option<usize> {
        self.last_ref
            .get(page)
            .and_then(|&last| self.next_use.get(last).copied().flatten())
    }
}

impl<P: PageId> ReplacementPolicy<P> for OptPolicy<P> {
    fn kind(&self) -> Policy {
        Policy::Opt
    }

    fn touch(&mut self, page: P, pos: usize) {
        self.last_ref.insert(page, pos);
    }

    fn load(&mut self, _page: P, _pos: usize) {}

    fn evict(&mut self, frames: &[P], pos: usize) -> Option<P> {
        let mut victim: Option<(P, usize)> = None;
        for &page in frames {
            match self.next_use(&page) {
                // Never referenced again: no other candidate can do better.
                None => {
                    victim = Some((page, usize::MAX));
                    break;
                }
                Some(next) => {
                    debug_assert!(next > pos, "resident page {page} has stale next use");
                    if victim.is_none_or(|(_, farthest)| next > farthest) {
                        victim = Some((page, next));
                    }
                }
            }
        }

        victim.map(|(page, _)| {
            self.last_ref.remove(&page);
            page
        })
    }
}
