/// Quest captions kept in the log.
pub const QUEST_LOG_LIMIT: usize = 100;

/// Engine settings: seeding, log bounds, and errand durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// RNG seed for the default content provider.
    pub seed: u64,
    /// Events kept in the log; 0 keeps all of them.
    pub max_events: usize,
    /// Quest captions kept in the log; older ones are dropped first.
    pub quest_log_limit: usize,
    /// Duration of selling one inventory row, in milliseconds.
    pub sell_ms: u64,
    /// Duration of the walk to market, in milliseconds.
    pub market_ms: u64,
    /// Duration of the walk to the killing fields, in milliseconds.
    pub heading_ms: u64,
    /// Duration of haggling for equipment, in milliseconds.
    pub buying_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_events: 1000,
            quest_log_limit: QUEST_LOG_LIMIT,
            sell_ms: 1000,
            market_ms: 4000,
            heading_ms: 4000,
            buying_ms: 5000,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many events the log keeps (0 = all).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Set how many quest captions the log keeps.
    pub fn with_quest_log_limit(mut self, limit: usize) -> Self {
        self.quest_log_limit = limit;
        self
    }

    /// Set the durations of the fixed errand tasks: sell, market, heading, buying.
    pub fn with_errand_durations(mut self, sell: u64, market: u64, heading: u64, buying: u64) -> Self {
        self.sell_ms = sell;
        self.market_ms = market;
        self.heading_ms = heading;
        self.buying_ms = buying;
        self
    }

    /// Reject a zero quest log limit and zero-length errands.
    pub fn validate(&self) -> crate::EngineResult<()> {
        if self.quest_log_limit == 0 {
            return Err(crate::EngineError::Config(
                "quest log limit must be at least 1".into(),
            ));
        }
        let errands = [
            ("sell", self.sell_ms),
            ("market", self.market_ms),
            ("heading", self.heading_ms),
            ("buying", self.buying_ms),
        ];
        if let Some((name, _)) = errands.iter().find(|(_, ms)| *ms == 0) {
            return Err(crate::EngineError::Config(format!(
                "{name} duration must be positive"
            )));
        }
        Ok(())
    }
}
