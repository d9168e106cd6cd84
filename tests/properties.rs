//! Invariants that hold for every policy on randomly generated inputs.

use {
    pagesim::{Policy, StepRecord, Trace, simulate, simulate_fifo, simulate_opt},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::collections::HashMap,
};

const ROUNDS: usize = 300;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_refs(rng: &mut StdRng) -> Vec<u32> {
    let len = rng.gen_range(0..40);
    let pages = rng.gen_range(1..10);
    (0..len).map(|_| rng.gen_range(0..pages)).collect()
}

fn check_trace(refs: &[u32], capacity: usize, trace: &Trace<u32>) {
    assert_eq!(trace.len(), refs.len());

    let mut prev: Option<&StepRecord<u32>> = None;
    for (step, page) in trace.iter().zip(refs) {
        assert_eq!(step.page, *page);
        assert!(step.frames.len() <= capacity);
        assert!(step.frames.contains(&step.page));

        let prev_frames = prev.map_or(&[][..], |prev| prev.frames.as_slice());
        assert_eq!(step.fault, !prev_frames.contains(&step.page));

        if !step.fault {
            assert_eq!(step.frames, prev_frames);
            assert_eq!(step.replaced_page, None);
        } else if prev_frames.len() < capacity {
            // Empty slot: frames grow by exactly the new page.
            assert_eq!(step.replaced_page, None);
            assert_eq!(&step.frames[..prev_frames.len()], prev_frames);
            assert_eq!(step.frames.len(), prev_frames.len() + 1);
        } else {
            let victim = step.replaced_page.expect("full frames must evict");
            let slot = prev_frames.iter().position(|page| *page == victim).unwrap();
            assert!(!step.frames.contains(&victim));
            assert_eq!(step.frames[slot], step.page);
            for (other, (before, after)) in prev_frames.iter().zip(&step.frames).enumerate() {
                if other != slot {
                    assert_eq!(before, after);
                }
            }
        }
        prev = Some(step);
    }
}

#[test]
fn invariants_hold_for_all_policies() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let refs = random_refs(&mut rng);
        let capacity = rng.gen_range(1..7);
        for policy in Policy::ALL {
            let trace = simulate(policy, &refs, capacity).unwrap();
            check_trace(&refs, capacity, &trace);

            // Deterministic.
            assert_eq!(simulate(policy, &refs, capacity).unwrap(), trace);
        }
    }
}

#[test]
fn opt_never_faults_more() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..ROUNDS {
        let refs = random_refs(&mut rng);
        let capacity = rng.gen_range(1..7);
        let faults = Policy::ALL
            .map(|policy| simulate(policy, &refs, capacity).unwrap().faults());
        let [fifo, lru, opt] = faults;
        assert!(opt <= fifo, "OPT {opt} > FIFO {fifo} for {refs:?} / {capacity}");
        assert!(opt <= lru, "OPT {opt} > LRU {lru} for {refs:?} / {capacity}");
    }
}

/// Straightforward OPT victim selection: scan forward for every resident page.
fn scan_victim(refs: &[u32], pos: usize, frames: &[u32]) -> u32 {
    let mut victim = None;
    let mut farthest = 0;
    for &page in frames {
        match refs[pos + 1..].iter().position(|next| *next == page) {
            None => return page,
            Some(offset) => {
                if victim.is_none() || offset > farthest {
                    farthest = offset;
                    victim = Some(page);
                }
            }
        }
    }
    victim.unwrap()
}

#[test]
fn opt_matches_forward_scan() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let refs = random_refs(&mut rng);
        let capacity = rng.gen_range(1..5);
        let trace = simulate_opt(&refs, capacity).unwrap();

        let mut frames: Vec<u32> = Vec::new();
        for (pos, step) in trace.iter().enumerate() {
            if let Some(victim) = step.replaced_page {
                assert_eq!(victim, scan_victim(&refs, pos, &frames), "{refs:?} at {pos}");
            }
            frames = step.frames.clone();
        }
    }
}

#[test]
fn fifo_evicts_longest_resident() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let refs = random_refs(&mut rng);
        let capacity = rng.gen_range(1..6);
        let trace = simulate_fifo(&refs, capacity).unwrap();

        let mut loaded_at = HashMap::new();
        for (pos, step) in trace.iter().enumerate() {
            if let Some(victim) = step.replaced_page {
                let oldest = loaded_at.values().min().copied();
                assert_eq!(loaded_at.remove(&victim), oldest);
            }
            if step.fault {
                loaded_at.insert(step.page, pos);
            }
        }
    }
}

#[test]
fn single_frame_policies_coincide() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let refs = random_refs(&mut rng);
        let traces = Policy::ALL.map(|policy| simulate(policy, &refs, 1).unwrap());

        for (index, step) in traces[0].iter().enumerate() {
            assert_eq!(step.frames, vec![refs[index]]);
            let expected_fault = index == 0 || refs[index - 1] != refs[index];
            assert_eq!(step.fault, expected_fault);
        }
        for trace in &traces[1..] {
            for (a, b) in trace.iter().zip(&traces[0]) {
                assert_eq!(a.frames, b.frames);
                assert_eq!(a.fault, b.fault);
                assert_eq!(a.replaced_page, b.replaced_page);
            }
        }
    }
}

#[test]
fn distinct_pages_always_fault() {
    let refs = [1, 2, 3, 4, 5];
    for policy in Policy::ALL {
        let trace = simulate(policy, &refs, 3).unwrap();
        assert_eq!(trace.faults(), refs.len());
        for (index, step) in trace.iter().enumerate() {
            assert_eq!(step.replaced_page.is_some(), index >= 3, "{policy} step {index}");
        }
    }
}
