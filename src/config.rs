use {
    crate::{Policy, SimError, SimResult, Stats, Trace, simulate},
    log::debug,
    serde::{Deserialize, Serialize},
};

/// Smallest number of frames offered to users.
pub const MIN_FRAMES: usize = 1;

/// Largest number of frames offered to users.
pub const MAX_FRAMES: usize = 7;

/// Longest reference string accepted from users.
pub const MAX_REFERENCES: usize = 20;

/// Configuration of a simulation run.
///
/// The limits above apply to user input only: [`simulate`] accepts any
/// reference string and any non-zero capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Reference string to replay.
    pub refs: Vec<u32>,

    /// Number of physical frames.
    pub capacity: usize,

    /// Replacement policy.
    pub policy: Policy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            refs: vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2],
            capacity: 3,
            policy: Policy::Fifo,
        }
    }
}

/// Per-policy statistics of a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyStats {
    /// Simulated policy.
    pub policy: Policy,

    /// Hit and fault counts over the whole reference string.
    pub stats: Stats,
}

impl SimConfig {
    /// Simulates the configured policy.
    pub fn run(&self) -> SimResult<Trace<u32>> {
        simulate(self.policy, &self.refs, self.capacity)
    }

    /// Simulates every policy over the configured reference string and
    /// capacity. The configured policy is ignored.
    pub fn compare(&self) -> SimResult<Vec<PolicyStats>> {
        Policy::ALL
            .into_iter()
            .map(|policy| {
                let stats = simulate(policy, &self.refs, self.capacity)?.stats();
                Ok(PolicyStats { policy, stats })
            })
            .collect()
    }
}

/// Parses a comma separated reference string, e.g. `"7, 0, 1, 2"`.
///
/// Tokens that are not non-negative integers are skipped. Fails if nothing is
/// left, or if more than [`MAX_REFERENCES`] pages remain.
pub fn parse_reference_string(input: &str) -> SimResult<Vec<u32>> {
    let refs = input
        .split(',')
        .filter_map(|token| {
            let token = token.trim();
            let page = token.parse::<u32>().ok();
            if page.is_none() && !token.is_empty() {
                debug!("Skipping invalid page number: {token:?}");
            }
            page
        })
        .collect::<Vec<_>>();

    if refs.is_empty() {
        return Err(SimError::EmptyReferenceString);
    }
    if refs.len() > MAX_REFERENCES {
        return Err(SimError::TooManyReferences {
            len: refs.len(),
            max: MAX_REFERENCES,
        });
    }
    Ok(refs)
}

/// Clamps a requested number of frames to `MIN_FRAMES..=MAX_FRAMES`.
pub fn clamp_frames(frames: usize) -> usize {
    frames.clamp(MIN_FRAMES, MAX_FRAMES)
}
