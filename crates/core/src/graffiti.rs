use std::fmt;

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the random tag after the timestamp.
pub const TAG_LEN: usize = 4;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One marker line, `# flick <YYYYMMDDHHMMSS>-<tag>\n`, newline included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraffitiLine(String);

impl GraffitiLine {
    /// Build a line stamped with the current UTC time.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::at(Utc::now(), rng)
    }

    /// Build a line stamped with `timestamp`.
    pub fn at<R: Rng + ?Sized>(timestamp: DateTime<Utc>, rng: &mut R) -> Self {
        let tag = random_tag(rng);
        Self(format!("# flick {}-{}\n", timestamp.format(TIMESTAMP_FORMAT), tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraffitiLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four characters drawn with replacement from `[A-Za-z0-9]`.
pub fn random_tag<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TAG_LEN).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
