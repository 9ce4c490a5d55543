use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Pluggable wall clock so page creation timestamps are controllable in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// System time via chrono; the default for interactive sessions.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen clock for deterministic tests.
#[derive(Clone, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of process-unique identifiers. Must never fail.
pub trait IdProvider {
    fn next_id(&mut self, prefix: &str) -> String;
}

const RANDOM_SUFFIX_LEN: usize = 7;

/// Default generator: millisecond timestamp plus a random alphanumeric suffix,
/// practically unique for the process lifetime.
#[derive(Clone, Debug, Default)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_SUFFIX_LEN)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        format!("{prefix}-{millis}-{suffix}")
    }
}

/// Deterministic generator for tests: `page-1`, `page-2`, ...
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    counter: u64,
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}-{}", self.counter)
    }
}
