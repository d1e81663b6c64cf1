//! Deterministic random source for tests and replays.

use std::collections::VecDeque;

use rand::RngCore;

/// Generator that replays a fixed list of picks.
///
/// Each pick is `(index, len)`: the next uniform draw over `len` candidates
/// lands on `index`. The draw is emitted as the midpoint of that bucket, so
/// it maps to the same index whether rand samples 32 or 64 bits. Once the
/// script is exhausted every draw is the maximum value, which picks the last
/// candidate and makes shuffles leave a slice in its original order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    words: VecDeque<u64>,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self {
            words: picks
                .into_iter()
                .map(|(index, len)| word_for(index, len))
                .collect(),
        }
    }

    fn next_word(&mut self) -> u64 {
        self.words.pop_front().unwrap_or(u64::MAX)
    }
}

fn word_for(index: usize, len: usize) -> u64 {
    let len = len.max(1) as u128;
    let index = (index as u128).min(len - 1);
    (((2 * index + 1) << 64) / (2 * len)) as u64
}

impl RngCore for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        (self.next_word() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::{IndexedRandom, SliceRandom};

    use super::*;

    #[test]
    fn picks_land_on_the_requested_index() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        let mut rng = ScriptedRandom::new([(2, 5), (0, 5), (4, 5)]);
        assert_eq!(items.choose(&mut rng), Some(&'c'));
        assert_eq!(items.choose(&mut rng), Some(&'a'));
        assert_eq!(items.choose(&mut rng), Some(&'e'));
        assert_eq!(items.choose(&mut rng), Some(&'e'));
    }

    #[test]
    fn exhausted_script_takes_the_last_candidate() {
        let mut rng = ScriptedRandom::default();
        assert_eq!([1, 2, 3].choose(&mut rng), Some(&3));
    }

    #[test]
    fn exhausted_script_leaves_order_unchanged() {
        let mut rng = ScriptedRandom::default();
        let mut items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        items.shuffle(&mut rng);
        assert_eq!(items, (1..=10).collect::<Vec<_>>());
    }
}
