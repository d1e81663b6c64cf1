//! Randomness port.
//!
//! Challenge selection, fun-fact picks and mini-game sampling all draw from a
//! `RandomSource` through rand's slice helpers (`IndexedRandom::choose`,
//! `SliceRandom::shuffle`). Production stores use a seeded `StdRng`; tests
//! substitute [`ScriptedRandom`](crate::adapters::ScriptedRandom).

use rand::RngCore;

/// Any `Send` generator the store can own.
pub trait RandomSource: RngCore + Send {}

impl<R: RngCore + Send> RandomSource for R {}

#[cfg(test)]
mod tests {
    use rand::{
        SeedableRng,
        rngs::StdRng,
        seq::{IndexedRandom, SliceRandom},
    };

    use super::*;

    fn pick(rng: &mut dyn RandomSource, items: &[char]) -> Option<char> {
        items.choose(rng).copied()
    }

    #[test]
    fn trait_objects_drive_slice_helpers() {
        let mut rng: Box<dyn RandomSource> = Box::new(StdRng::seed_from_u64(7));
        assert!(pick(rng.as_mut(), &[]).is_none());
        assert!(pick(rng.as_mut(), &['a', 'b', 'c']).is_some());

        let mut items: Vec<u32> = (0..20).collect();
        items.shuffle(rng.as_mut());
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_picks() {
        let items: Vec<u32> = (0..10).collect();
        let mut a = StdRng::seed_from_u64(12345);
        let mut b = StdRng::seed_from_u64(12345);
        let first: Vec<_> = (0..16).map(|_| *items.choose(&mut a).unwrap()).collect();
        let second: Vec<_> = (0..16).map(|_| *items.choose(&mut b).unwrap()).collect();
        assert_eq!(first, second);
    }
}
