use {
    crate::{PageId, Policy, ReplacementPolicy},
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
};

/// Least Recently Used (LRU) page replacement policy.
///
/// This implementation uses a priority queue keyed by the position of each
/// page's most recent reference. Every reference, hit or fault, moves the page
/// to the back of the queue, while the least recently used page is the first
/// to be evicted.
#[derive(Debug)]
pub struct LruPolicy<P: PageId> {
    /// Referenced pages, prioritized by the reverse of their last use.
    recency: PriorityQueue<P, Reverse<usize>>,
}

impl<P: PageId> Default for LruPolicy<P> {
    fn default() -> Self {
        Self {
            recency: PriorityQueue::new(),
        }
    }
}

impl<P: PageId> LruPolicy<P> {
    /// Creates a new LRU policy for the given number of frames.
    pub fn new(capacity: usize) -> Self {
        // Resident pages plus the page being faulted in.
        Self {
            recency: PriorityQueue::with_capacity(capacity + 1),
        }
    }

    /// Position of the most recent reference to `page`, if it is tracked.
    pub fn last_use(&self, page: &P) -> Option<usize> {
        self.recency.get_priority(page).map(|Reverse(pos)| *pos)
    }
}

impl<P: PageId> ReplacementPolicy<P> for LruPolicy<P> {
    fn kind(&self) -> Policy {
        Policy::Lru
    }

    fn touch(&mut self, page: P, pos: usize) {
        // If the page is already within the queue, its priority is updated.
        // Otherwise, it is inserted. Both cases are handled by `push`.
        self.recency.push(page, Reverse(pos));
    }

    fn load(&mut self, _page: P, _pos: usize) {
        // Recency is recorded by `touch`, loading adds nothing.
    }

    fn evict(&mut self, frames: &[P], _pos: usize) -> Option<P> {
        // The incoming page is tracked but not resident yet: set it (and any
        // other non-resident entry) aside and put it back afterwards.
        let mut skipped = Vec::new();
        let victim = loop {
            match self.recency.pop() {
                Some((page, _)) if frames.contains(&page) => break Some(page),
                Some(entry) => skipped.push(entry),
                None => break None,
            }
        };
        self.recency.extend(skipped);
        victim
    }
}
