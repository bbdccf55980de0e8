#![forbid(unsafe_code)]

//! Deserialize a [`Duration`] from integer milliseconds.
//!
//! Use with `#[serde(deserialize_with = "vitrine_core::serde_ms::deserialize")]`.

use core::time::Duration;

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize")]
        delay: Duration,
    }

    #[test]
    fn reads_milliseconds() {
        let probe: Probe = serde_json::from_str(r#"{"delay": 1500}"#).unwrap();
        assert_eq!(probe.delay, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_negative() {
        assert!(serde_json::from_str::<Probe>(r#"{"delay": -1}"#).is_err());
    }
}
