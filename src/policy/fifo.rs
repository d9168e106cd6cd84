use {
    crate::{PageId, Policy, ReplacementPolicy},
    std::collections::VecDeque,
};

/// First-In-First-Out (FIFO) page replacement policy.
///
/// Resident pages are queued in the order they were loaded. The page at the
/// front of the queue has been resident the longest and is the next victim.
/// Hits do not reorder the queue, and a page that is evicted and referenced
/// again re-enters at the back as if it was never resident before.
#[derive(Debug)]
pub struct FifoPolicy<P: PageId> {
    /// Resident pages, earliest load at the front.
    queue: VecDeque<P>,
}

impl<P: PageId> Default for FifoPolicy<P> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<P: PageId> FifoPolicy<P> {
    /// Creates a new FIFO policy for the given number of frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl<P: PageId> ReplacementPolicy<P> for FifoPolicy<P> {
    fn kind(&self) -> Policy {
        Policy::Fifo
    }

    fn touch(&mut self, _page: P, _pos: usize) {
        // Load order is not affected by references.
    }

    fn load(&mut self, page: P, _pos: usize) {
        self.queue.push_back(page);
    }

    fn evict(&mut self, frames: &[P], _pos: usize) -> Option<P> {
        // Queue mirrors the frames, so the first pop normally succeeds.
        while let Some(page) = self.queue.pop_front() {
            if frames.contains(&page) {
                return Some(page);
            }
        }
        None
    }
}
