//! Step descriptions.
//!
//! Text is generated from the outcome after the policy has made its decision;
//! nothing in the simulation depends on it.

use crate::{PageId, Policy};

/// What happened to a referenced page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome<P: PageId> {
    /// Page was already resident.
    Hit,

    /// Page was loaded into an empty frame.
    Loaded,

    /// Page replaced `victim` in its frame.
    Replaced { victim: P },
}

/// Describes a step for the presentation layer.
pub(crate) fn describe<P: PageId>(policy: Policy, page: P, outcome: Outcome<P>) -> String {
    match outcome {
        Outcome::Hit => format!("Page {page} is already in memory → no page fault."),
        Outcome::Loaded => format!("Page {page} not in memory → loaded into empty frame."),
        Outcome::Replaced { victim } => {
            let reason = match policy {
                Policy::Fifo => format!("replaced oldest page {victim}"),
                Policy::Lru => format!("replaced least recently used page {victim}"),
                Policy::Opt => {
                    format!("replaced page {victim} that won't be used for the longest time")
                }
            };
            format!("Page {page} not in memory → {reason} ({policy}).")
        }
    }
}
