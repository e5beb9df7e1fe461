use crate::utils::error::Result;
use std::ops::RangeInclusive;

pub const DEFAULT_PROMPT: &str = "Enter an expression (e.g. 2 + 3 or II + III): ";
pub const DEFAULT_MIN_OPERAND: i64 = 1;
pub const DEFAULT_MAX_OPERAND: i64 = 10;

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn operand_range(&self) -> RangeInclusive<i64>;
}

/// Line-oriented terminal the engine talks to.
pub trait Console {
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write(&mut self, text: &str) -> Result<()>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ConfigProvider for DefaultConfig {
    fn prompt(&self) -> &str {
        DEFAULT_PROMPT
    }

    fn operand_range(&self) -> RangeInclusive<i64> {
        DEFAULT_MIN_OPERAND..=DEFAULT_MAX_OPERAND
    }
}
