use {
    crate::{
        FifoPolicy,
        LruPolicy,
        OptPolicy,
        PageId,
        Policy,
        ReplacementPolicy,
        SimError,
        SimResult,
        StepRecord,
        Trace,
        explain::{self, Outcome},
    },
    log::{debug, trace},
};

/// Replays a reference string against a fixed number of frames.
///
/// The simulator owns the frames and the policy's auxiliary state, and is
/// consumed by [`Simulator::run`], so no state survives between runs.
///
/// Frames fill up in slot order until `capacity` is reached. Afterwards every
/// fault replaces the victim chosen by the policy in place: the new page takes
/// the victim's slot and all other slots keep their pages.
#[derive(Debug)]
pub struct Simulator<P: PageId, R: ReplacementPolicy<P>> {
    /// Maximum number of resident pages.
    capacity: usize,

    /// Resident pages in slot order.
    frames: Vec<P>,

    /// Victim selection strategy.
    policy: R,
}

impl<P: PageId, R: ReplacementPolicy<P>> Simulator<P, R> {
    /// Creates a new simulator with `capacity` empty frames.
    ///
    /// Fails if `capacity` is zero.
    pub fn new(capacity: usize, policy: R) -> SimResult<Self> {
        if capacity == 0 {
            return Err(SimError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            frames: Vec::with_capacity(capacity),
            policy,
        })
    }

    /// Replays `refs` and returns one step per reference.
    pub fn run(mut self, refs: &[P]) -> SimResult<Trace<P>> {
        let kind = self.policy.kind();
        debug!(
            "Simulating {kind}: {} references, {} frames",
            refs.len(),
            self.capacity
        );

        let steps = refs
            .iter()
            .enumerate()
            .map(|(pos, page)| self.step(pos, *page))
            .collect::<SimResult<Vec<_>>>()?;
        let trace = Trace::new(steps);

        debug!(
            "{kind} finished: {} faults, {} hits",
            trace.faults(),
            trace.hits()
        );
        Ok(trace)
    }

    fn step(&mut self, pos: usize, page: P) -> SimResult<StepRecord<P>> {
        // Recency must be recorded before the victim is chosen, so that the
        // referenced page itself is never a candidate.
        self.policy.touch(page, pos);

        let outcome = if self.frames.contains(&page) {
            Outcome::Hit
        } else if self.frames.len() < self.capacity {
            self.frames.push(page);
            self.policy.load(page, pos);
            Outcome::Loaded
        } else {
            let victim = self
                .policy
                .evict(&self.frames, pos)
                .ok_or(SimError::NoEvictionCandidate(pos))?;
            let slot = self
                .frames
                .iter()
                .position(|resident| *resident == victim)
                .ok_or(SimError::NoEvictionCandidate(pos))?;
            self.frames[slot] = page;
            self.policy.load(page, pos);
            debug!("[{pos}] page {page} replaced page {victim} in slot {slot}");
            Outcome::Replaced { victim }
        };

        let kind = self.policy.kind();
        let step = StepRecord {
            frames: self.frames.clone(),
            page,
            fault: outcome != Outcome::Hit,
            explanation: explain::describe(kind, page, outcome),
            replaced_page: match outcome {
                Outcome::Replaced { victim } => Some(victim),
                Outcome::Hit | Outcome::Loaded => None,
            },
        };
        trace!("[{pos}] {kind} {step:?}");
        Ok(step)
    }
}

/// Simulates First-In-First-Out replacement over `refs` with `capacity` frames.
pub fn simulate_fifo<P: PageId>(refs: &[P], capacity: usize) -> SimResult<Trace<P>> {
    Simulator::new(capacity, FifoPolicy::new(capacity))?.run(refs)
}

/// Simulates Least-Recently-Used replacement over `refs` with `capacity`
/// frames.
pub fn simulate_lru<P: PageId>(refs: &[P], capacity: usize) -> SimResult<Trace<P>> {
    Simulator::new(capacity, LruPolicy::new(capacity))?.run(refs)
}

/// Simulates Optimal replacement over `refs` with `capacity` frames.
///
/// The whole reference string is inspected up front to find, for every
/// resident page, when it is needed next.
pub fn simulate_opt<P: PageId>(refs: &[P], capacity: usize) -> SimResult<Trace<P>> {
    if capacity == 0 {
        return Err(SimError::InvalidCapacity(capacity));
    }
    Simulator::new(capacity, OptPolicy::new(refs))?.run(refs)
}

/// Simulates the given `policy` over `refs` with `capacity` frames.
pub fn simulate<P: PageId>(policy: Policy, refs: &[P], capacity: usize) -> SimResult<Trace<P>> {
    match policy {
        Policy::Fifo => simulate_fifo(refs, capacity),
        Policy::Lru => simulate_lru(refs, capacity),
        Policy::Opt => simulate_opt(refs, capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Policy that always names a page which is not resident.
    struct Broken;

    impl ReplacementPolicy<u32> for Broken {
        fn kind(&self) -> Policy {
            Policy::Fifo
        }

        fn touch(&mut self, _page: u32, _pos: usize) {}

        fn load(&mut self, _page: u32, _pos: usize) {}

        fn evict(&mut self, _frames: &[u32], _pos: usize) -> Option<u32> {
            Some(u32::MAX)
        }
    }

    #[test]
    fn zero_capacity() {
        assert_eq!(
            Simulator::<u32, _>::new(0, FifoPolicy::new(0)).err(),
            Some(SimError::InvalidCapacity(0))
        );
    }

    #[test]
    fn bad_victim_fails_whole_run() {
        let sim = Simulator::new(2, Broken).unwrap();
        assert_eq!(sim.run(&[1, 2, 3]), Err(SimError::NoEvictionCandidate(2)));

        // Nothing to evict, nothing to fail.
        let sim = Simulator::new(2, Broken).unwrap();
        assert_eq!(sim.run(&[1, 2, 1]).map(|trace| trace.faults()), Ok(2));
    }

    #[test]
    fn explanations_follow_outcomes() {
        let trace = simulate_fifo(&[1, 1, 2], 1).unwrap();
        assert!(trace[0].explanation.contains("empty frame"));
        assert!(trace[1].explanation.contains("no page fault"));
        assert!(trace[2].explanation.contains("oldest page 1"));
    }
}
