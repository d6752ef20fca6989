
use crate::stack::StackError;
use crate::queens::QueensError;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("{0}")]
  QueensError(#[from] QueensError),
  #[error("Self-test '{scenario}' failed: {detail}")]
  ScenarioFailed {
    scenario: &'static str,
    detail: String,
  },
}

impl Error {
  pub fn scenario_failed(scenario: &'static str, detail: impl Into<String>) -> Self {
    Self::ScenarioFailed { scenario, detail: detail.into() }
  }
}
