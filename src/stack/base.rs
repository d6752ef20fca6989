
use super::error::StackError;

/// A stack-like structure, capable of pushing and popping elements
/// from the top.
///
/// Algorithms in this crate are written against this trait only, so
/// that the backing implementation can be swapped freely.
pub trait StackLike<T> {
  /// Returns true if the stack has no elements.
  fn is_empty(&self) -> bool;

  /// Returns the length of the stack, in elements.
  fn len(&self) -> usize;

  /// Pushes a single element onto the top of the stack. Bounded
  /// implementations return [`StackError::Overflow`] when full, in
  /// which case the stack is unchanged.
  fn push(&mut self, element: T) -> Result<(), StackError>;

  /// Returns a reference to the top element, or
  /// [`StackError::EmptyStack`] if there is none.
  fn top(&self) -> Result<&T, StackError>;

  /// Removes the top element. Returns false, and does nothing, if the
  /// stack is already empty.
  ///
  /// The removed value is not returned. Callers who need it should
  /// [`peek`](StackLike::peek) first.
  fn pop(&mut self) -> bool;

  /// Returns a copy of the top element without removing it.
  fn peek(&self) -> Result<T, StackError>
  where T: Clone {
    self.top().cloned()
  }

  /// Pushes several elements onto the stack in the order we see them
  /// in the iterable. That is, the final element of the iterable will
  /// be at the top of the stack, after this method has executed.
  ///
  /// Stops at the first failed push. Elements pushed before the
  /// failure remain on the stack.
  fn push_several(&mut self, elements: impl IntoIterator<Item = T>) -> Result<(), StackError>
  where Self: Sized {
    for element in elements {
      self.push(element)?;
    }
    Ok(())
  }

  /// As [`StackLike::pop`], but with no result value. Use this
  /// function if you don't care whether the stack was empty.
  fn pop_and_discard(&mut self) {
    let _ = self.pop();
  }

  /// Pops every element off the stack.
  fn clear(&mut self) {
    while self.pop() {}
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  /// Exercises the LIFO contract on any empty stack with room for at
  /// least three elements.
  pub fn check_lifo<S: StackLike<i32>>(mut stack: S) {
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), Err(StackError::EmptyStack));
    stack.push(10).unwrap();
    assert_eq!(stack.peek(), Ok(10));
    stack.push(20).unwrap();
    assert_eq!(stack.peek(), Ok(20));
    stack.push(30).unwrap();
    assert_eq!(stack.len(), 3);
    assert!(stack.pop());
    assert_eq!(stack.peek(), Ok(20));
    assert!(stack.pop());
    assert_eq!(stack.peek(), Ok(10));
    assert!(stack.pop());
    assert!(stack.is_empty());
    assert!(!stack.pop());
    assert!(!stack.pop());
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    // Fresh pushes after draining behave normally.
    stack.push(99).unwrap();
    assert_eq!(stack.peek(), Ok(99));
  }
}
