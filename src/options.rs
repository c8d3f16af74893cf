// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Construction options for [`SkipList`](crate::SkipList).

use crate::coin::FairCoin;

/// Options for building a skip list with the default coin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Seed for the promotion coin. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Number of element nodes to reserve up front. Promoted copies add
    /// roughly one more node per element on average.
    pub capacity: usize,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub(crate) fn coin(&self) -> FairCoin {
        match self.seed {
            Some(seed) => FairCoin::seeded(seed),
            None => FairCoin::new(),
        }
    }

    /// Arena slots to reserve: the sentinels plus about two nodes per element.
    pub(crate) fn arena_capacity(&self) -> usize {
        2 + self.capacity.saturating_mul(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;

    #[test]
    fn builder_sets_fields() {
        let options = Options::new().with_seed(9).with_capacity(128);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.capacity, 128);
        assert_eq!(options.arena_capacity(), 258);
    }

    #[test]
    fn seeded_options_give_repeatable_coins() {
        let options = Options::new().with_seed(1234);
        let mut a = options.coin();
        let mut b = options.coin();
        for _ in 0..100 {
            assert_eq!(a.flip(), b.flip());
        }
    }
}
