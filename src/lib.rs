
pub mod error;
pub mod parsing;
pub mod queens;
pub mod selftest;
pub mod stack;
pub mod warmup;
