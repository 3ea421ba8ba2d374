//! Ways of choosing which sound plays
//!
//! A single [`AudioKey`] always plays itself. An [`AudioBank`] picks at
//! random with fixed weights. An [`AudioQueue`] is a shuffle bag: every
//! sound plays once per round, in a new order each round.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::AudioKey;

/// Produces the next sound to play
pub trait AudioSource {
    fn next_audio(&mut self, rng: &mut dyn RngCore) -> Option<AudioKey>;

    /// Every sound this source can produce
    fn audio(&self) -> &[AudioKey];
}

impl AudioSource for AudioKey {
    fn next_audio(&mut self, _rng: &mut dyn RngCore) -> Option<AudioKey> {
        Some(*self)
    }

    fn audio(&self) -> &[AudioKey] {
        std::slice::from_ref(self)
    }
}

/// Weighted random choice between sounds
#[derive(Clone, Debug, Default)]
pub struct AudioBank {
    audio: Vec<AudioKey>,
    /// One entry per unit of weight, holding an index into `audio`
    distribution: Vec<usize>,
}

impl AudioBank {
    pub fn new(weights: &[(AudioKey, u32)]) -> Self {
        let mut bank = Self::default();
        bank.set(weights);
        bank
    }

    /// Replace the sounds and their weights
    pub fn set(&mut self, weights: &[(AudioKey, u32)]) {
        self.audio = weights.iter().map(|(key, _)| *key).collect();
        self.distribution = weights
            .iter()
            .enumerate()
            .flat_map(|(index, (_, weight))| std::iter::repeat(index).take(*weight as usize))
            .collect();
    }

    pub fn distribution(&self) -> &[usize] {
        &self.distribution
    }
}

impl AudioSource for AudioBank {
    fn next_audio(&mut self, rng: &mut dyn RngCore) -> Option<AudioKey> {
        if self.distribution.is_empty() {
            return None;
        }
        let pick = self.distribution[rng.gen_range(0..self.distribution.len())];
        self.audio.get(pick).copied()
    }

    fn audio(&self) -> &[AudioKey] {
        &self.audio
    }
}

/// Shuffle bag over a fixed set of sounds
#[derive(Clone, Debug)]
pub struct AudioQueue {
    audio: Vec<AudioKey>,
    pointers: Vec<usize>,
    /// Position in the current round; -1 before the first pick
    index: isize,
}

impl AudioQueue {
    pub fn new(audio: Vec<AudioKey>) -> Self {
        let pointers = (0..audio.len()).collect();
        Self { audio, pointers, index: -1 }
    }

    /// Position of the last pick within the current round
    pub fn index(&self) -> isize {
        self.index
    }
}

impl AudioSource for AudioQueue {
    fn next_audio(&mut self, rng: &mut dyn RngCore) -> Option<AudioKey> {
        if self.audio.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.audio.len() as isize;
        if self.index == 0 {
            self.pointers.shuffle(rng);
        }
        self.audio.get(self.pointers[self.index as usize]).copied()
    }

    fn audio(&self) -> &[AudioKey] {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use slotmap::SlotMap;

    fn keys(n: usize) -> Vec<AudioKey> {
        let mut map: SlotMap<AudioKey, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_key_plays_itself() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut key = keys(1)[0];
        assert_eq!(key.next_audio(&mut rng), Some(key));
        assert_eq!(key.audio(), &[key]);
    }

    #[test]
    fn test_bank_distribution() {
        let k = keys(2);
        let bank = AudioBank::new(&[(k[0], 1), (k[1], 3)]);
        assert_eq!(bank.distribution(), &[0, 1, 1, 1]);
        assert_eq!(bank.audio(), &k[..]);
    }

    #[test]
    fn test_bank_respects_zero_weight() {
        let k = keys(2);
        let mut bank = AudioBank::new(&[(k[0], 0), (k[1], 2)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(bank.next_audio(&mut rng), Some(k[1]));
        }
        assert_eq!(bank.audio().len(), 2);
    }

    #[test]
    fn test_empty_bank_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AudioBank::default().next_audio(&mut rng), None);
    }

    #[test]
    fn test_queue_plays_each_once_per_round() {
        let k = keys(4);
        let mut queue = AudioQueue::new(k.clone());
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(queue.index(), -1);

        for _ in 0..3 {
            let mut round: Vec<AudioKey> = (0..4).filter_map(|_| queue.next_audio(&mut rng)).collect();
            round.sort();
            let mut expected = k.clone();
            expected.sort();
            assert_eq!(round, expected);
        }
        assert_eq!(queue.index(), 3);
    }

    #[test]
    fn test_empty_queue_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(AudioQueue::new(Vec::new()).next_audio(&mut rng), None);
    }
}
