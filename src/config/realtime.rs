//! Realtime fan-out configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Realtime transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeConfig {
    /// Buffer size for each lecture room's broadcast channel.
    /// Slow subscribers lose the oldest updates once this fills.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl RealtimeConfig {
    /// Validate realtime configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.channel_capacity == 0 {
            return Err(ValidationError::InvalidChannelCapacity);
        }
        Ok(())
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_128_messages() {
        assert_eq!(RealtimeConfig::default().channel_capacity, 128);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let config = RealtimeConfig {
            channel_capacity: 0,
        };
        assert!(config.validate().is_err());
    }
}
