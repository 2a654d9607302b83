use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    /// Starting difficulty level, 1-3. The session adjusts it as rounds are
    /// won and lost.
    pub start_level: u8,
    pub human_starts_first: bool,
    pub bot_thinking_delay_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            start_level: 1,
            human_starts_first: true,
            bot_thinking_delay_ms: 500,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.start_level < 1 || self.start_level > 3 {
            return Err(format!(
                "start_level must be between 1 and 3, got {}",
                self.start_level
            ));
        }
        if self.bot_thinking_delay_ms > 10_000 {
            return Err("bot_thinking_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}
