
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Stack overflow, capacity of {capacity} elements exceeded.")]
  Overflow {
    capacity: usize,
  },
  #[error("Attempted to peek at an empty stack.")]
  EmptyStack,
}
