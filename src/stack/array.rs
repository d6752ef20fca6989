
use super::base::StackLike;
use super::error::StackError;

use std::fmt::{self, Debug, Formatter};

/// The smallest capacity an [`ArrayStack`] may be declared with.
pub const MIN_ARRAY_SIZE: usize = 64;

/// Fixed-capacity stack backed by an inline array of `N` slots. Never
/// allocates.
///
/// `N` must be at least [`MIN_ARRAY_SIZE`]. This is checked when the
/// stack is constructed, at compile time.
#[derive(Clone)]
pub struct ArrayStack<T, const N: usize> {
  storage: [Option<T>; N],
  // Slots `0..len` are always occupied. Slots at or above `len` may
  // hold stale values from earlier pushes.
  len: usize,
}

impl<T, const N: usize> ArrayStack<T, N> {
  const CAPACITY_CHECK: () = assert!(N >= MIN_ARRAY_SIZE, "ArrayStack capacity must be at least MIN_ARRAY_SIZE");

  pub fn new() -> Self {
    let () = Self::CAPACITY_CHECK;
    ArrayStack {
      storage: std::array::from_fn(|_| None),
      len: 0,
    }
  }

  pub const fn capacity(&self) -> usize {
    N
  }

  pub fn is_full(&self) -> bool {
    self.len == N
  }

  /// Iterates from the top of the stack.
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.storage[..self.len].iter().rev().flatten()
  }
}

impl<T, const N: usize> StackLike<T> for ArrayStack<T, N> {
  fn is_empty(&self) -> bool {
    self.len == 0
  }

  fn len(&self) -> usize {
    self.len
  }

  fn push(&mut self, element: T) -> Result<(), StackError> {
    if self.is_full() {
      return Err(StackError::Overflow { capacity: N });
    }
    self.storage[self.len] = Some(element);
    self.len += 1;
    Ok(())
  }

  fn top(&self) -> Result<&T, StackError> {
    self.len.checked_sub(1)
      .and_then(|index| self.storage[index].as_ref())
      .ok_or(StackError::EmptyStack)
  }

  fn pop(&mut self) -> bool {
    if self.is_empty() {
      return false;
    }
    // The stale value is overwritten by the next push into this slot.
    self.len -= 1;
    true
  }
}

impl<T, const N: usize> Default for ArrayStack<T, N> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Debug, const N: usize> Debug for ArrayStack<T, N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}
