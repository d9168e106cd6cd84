//! Page replacement policies.
//!
//! Each policy keeps its own auxiliary state: FIFO remembers load order, LRU
//! remembers the most recent use of every page, and OPT looks ahead into the
//! full reference string.

mod fifo;
mod lru;
mod opt;

use {
    crate::SimError,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

pub use {fifo::FifoPolicy, lru::LruPolicy, opt::OptPolicy};

/// Replacement policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// First-In-First-Out: evicts the page loaded earliest.
    #[default]
    Fifo,

    /// Least-Recently-Used: evicts the page referenced furthest in the past.
    Lru,

    /// Optimal: evicts the page whose next reference is furthest in the
    /// future, or which is never referenced again.
    Opt,
}

impl Policy {
    /// All supported policies, in presentation order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Opt];

    /// Short name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Opt => "OPT",
        }
    }

    /// One-line description of the eviction rule.
    pub const fn description(self) -> &'static str {
        match self {
            Policy::Fifo => "Evicts oldest page",
            Policy::Lru => "Evicts least recently used",
            Policy::Opt => "Optimal (theoretical)",
        }
    }

    /// Longer explanation of how the policy picks a victim on a page fault.
    pub const fn rationale(self) -> &'static str {
        match self {
            Policy::Fifo => {
                "FIFO selects the page that has been in memory the longest (first-in). This can \
                 lead to suboptimal replacements if the oldest page is still frequently used."
            }
            Policy::Lru => {
                "LRU tracks usage timestamps and replaces the page with the oldest timestamp \
                 (least recently used). This approximates optimal behavior for programs with \
                 locality."
            }
            Policy::Opt => {
                "OPT looks ahead in the reference string to replace the page that won't be needed \
                 for the longest time. This is a theoretical minimum for faults."
            }
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownPolicy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("FIFO".parse::<Policy>(), Ok(Policy::Fifo));
        assert_eq!("lru".parse::<Policy>(), Ok(Policy::Lru));
        assert_eq!(" Opt ".parse::<Policy>(), Ok(Policy::Opt));
        assert_eq!(
            "clock".parse::<Policy>(),
            Err(SimError::UnknownPolicy("clock".to_string()))
        );
    }

    #[test]
    fn display_matches_name() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string(), policy.name());
            assert_eq!(policy.to_string().parse::<Policy>(), Ok(policy));
        }
    }
}
