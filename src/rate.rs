use std::{str::FromStr, time::Duration};

use crate::error::RateParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRate(u64);

impl DataRate {
    pub const fn from_bits_per_sec(bits_per_sec: u64) -> Self {
        assert!(bits_per_sec > 0, "data rate must be positive");
        Self(bits_per_sec)
    }

    pub const fn bits_per_sec(&self) -> u64 {
        self.0
    }

    // Time to put one unit of `bytes` on the wire at this rate.
    pub fn serialization_delay(&self, bytes: usize) -> Duration {
        Duration::from_secs_f64(bytes as f64 * 8.0 / self.0 as f64)
    }
}

impl FromStr for DataRate {
    type Err = RateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(RateParseError::Empty);
        }

        let unit_start = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(s.len());
        let (value, unit) = s.split_at(unit_start);

        let value = value
            .parse::<f64>()
            .map_err(|_| RateParseError::InvalidNumber(value.to_string()))?;

        let scale = match unit {
            "bps" => 1.0,
            "Kbps" | "kbps" => 1e3,
            "Mbps" => 1e6,
            "Gbps" => 1e9,
            _ => return Err(RateParseError::InvalidUnit(unit.to_string())),
        };

        let bits_per_sec = (value * scale) as u64;

        if bits_per_sec == 0 {
            return Err(RateParseError::InvalidNumber(s.to_string()));
        }

        Ok(Self(bits_per_sec))
    }
}
