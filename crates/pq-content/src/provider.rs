//! The randomness and content interface the generators draw from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pq_core::roman;

use crate::entry::field_int;
use crate::names;
use crate::tables::{ContentTables, Pool};

/// Source of randomness and content pools.
///
/// Implementors supply [`Content::random`] and [`Content::tables`]; every
/// other primitive is derived from those two, so a scripted provider that
/// replays fixed rolls drives the generators deterministically.
pub trait Content {
    /// Uniform integer in `[0, below)`. Returns 0 when `below <= 0`.
    fn random(&mut self, below: i64) -> i64;

    /// The pools to draw from.
    fn tables(&self) -> &ContentTables;

    /// A fresh pronounceable proper name.
    fn generate_name(&mut self) -> String {
        names::generate_name(self)
    }

    /// True with probability `chance / out_of`.
    fn odds(&mut self, chance: i64, out_of: i64) -> bool {
        self.random(out_of) < chance
    }

    /// The smaller of two draws below `below`; skews toward 0.
    fn random_low(&mut self, below: i64) -> i64 {
        let a = self.random(below);
        let b = self.random(below);
        a.min(b)
    }

    /// Either -1 or +1.
    fn random_sign(&mut self) -> i64 {
        self.random(2) * 2 - 1
    }

    /// Uniform entry of a pool.
    fn pick(&mut self, pool: Pool) -> String {
        let len = self.tables().pool(pool).len();
        self.pick_within(pool, len)
    }

    /// Uniform entry among the first `limit` entries of a pool.
    fn pick_within(&mut self, pool: Pool, limit: usize) -> String {
        let len = limit.min(self.tables().pool(pool).len());
        let idx = self.random(len as i64) as usize;
        self.tables()
            .pool(pool)
            .get(idx)
            .cloned()
            .unwrap_or_default()
    }

    /// Entry chosen by the smaller of two draws; favours early entries.
    fn pick_low(&mut self, pool: Pool) -> String {
        let len = self.tables().pool(pool).len();
        let idx = self.random_low(len as i64) as usize;
        self.tables()
            .pool(pool)
            .get(idx)
            .cloned()
            .unwrap_or_default()
    }

    /// Pick `draws` entries and keep the one whose level field is closest
    /// to `target`. The first draw wins ties.
    fn pick_closest(&mut self, pool: Pool, target: i64, draws: usize) -> String {
        let mut best = self.pick(pool);
        for _ in 1..draws {
            let candidate = self.pick(pool);
            if (target - field_int(&candidate, 1)).abs() < (target - field_int(&best, 1)).abs() {
                best = candidate;
            }
        }
        best
    }

    /// Roman numeral for `n`.
    fn to_roman(&self, n: i64) -> String {
        roman::to_roman(n)
    }

    /// Integer value of a roman numeral; unreadable text is 0.
    fn to_arabic(&self, text: &str) -> i64 {
        roman::to_arabic_or_zero(text)
    }
}

/// Content backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdContent {
    rng: StdRng,
    tables: ContentTables,
}

impl StdContent {
    /// Built-in tables with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_tables(seed, ContentTables::default())
    }

    /// Custom tables with a seeded RNG.
    pub fn with_tables(seed: u64, tables: ContentTables) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tables,
        }
    }
}

impl Content for StdContent {
    fn random(&mut self, below: i64) -> i64 {
        if below <= 0 {
            return 0;
        }
        self.rng.random_range(0..below)
    }

    fn tables(&self) -> &ContentTables {
        &self.tables
    }
}
