#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod explain;
pub mod policy;
mod simulator;
mod trace;

use std::{fmt, hash::Hash};

pub use {
    config::{
        MAX_FRAMES,
        MAX_REFERENCES,
        MIN_FRAMES,
        PolicyStats,
        SimConfig,
        clamp_frames,
        parse_reference_string,
    },
    error::{SimError, SimResult},
    policy::{FifoPolicy, LruPolicy, OptPolicy, Policy},
    simulator::{Simulator, simulate, simulate_fifo, simulate_lru, simulate_opt},
    trace::{Stats, StepRecord, Trace},
};

/// Page identifier type.
///
/// A page is a unit of virtual memory. The simulator attaches no meaning to the
/// identifier beyond equality, so any small copyable value that can be hashed
/// and printed will do. Reference strings parsed from text use `u32`.
pub trait PageId: Copy + Hash + Eq + fmt::Display + fmt::Debug {}

impl<T> PageId for T where T: Copy + Hash + Eq + fmt::Display + fmt::Debug {}

/// Page replacement policy.
///
/// Defines the bookkeeping a policy keeps while a reference string is replayed,
/// and the selection of the next victim once all frames are occupied. The
/// [`Simulator`] drives the policy; implementations never see the frames
/// mutate behind their back.
///
/// Time is measured in positions within the reference string: the reference
/// at index `pos` happens after every reference at a smaller index.
pub trait ReplacementPolicy<P: PageId> {
    /// Kind of the policy, used to label steps and explanations.
    fn kind(&self) -> Policy;

    /// Notifies the policy that `page` is referenced at position `pos`.
    ///
    /// Called for every reference, hit or fault, before the simulator decides
    /// whether a victim is needed.
    fn touch(&mut self, page: P, pos: usize);

    /// Notifies the policy that `page` has been loaded into a frame at
    /// position `pos`, either into an empty slot or into the slot of a victim.
    fn load(&mut self, page: P, pos: usize);

    /// Find the next page to be evicted among the resident `frames` and forget
    /// it.
    ///
    /// `frames` are given in slot order. The returned page must be one of
    /// them; `None` means the policy has no candidate, which is a bookkeeping
    /// error on the policy's side.
    fn evict(&mut self, frames: &[P], pos: usize) -> Option<P>;
}
