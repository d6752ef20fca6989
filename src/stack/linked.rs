
use super::base::StackLike;
use super::error::StackError;

use std::fmt::{self, Debug, Formatter};
use std::mem;

struct Node<T> {
  value: T,
  next: Option<Box<Node<T>>>,
}

/// Unbounded stack backed by a singly linked list. The stack owns the
/// top node, and each node owns the node beneath it.
///
/// Cloning produces a deep copy with the same top-to-bottom order.
/// [`ListStack::take_from`] moves the whole chain out of another
/// stack, leaving that stack empty.
pub struct ListStack<T> {
  head: Option<Box<Node<T>>>,
  len: usize,
}

/// Borrowing iterator over a [`ListStack`], from the top down.
pub struct Iter<'a, T> {
  current: Option<&'a Node<T>>,
}

impl<T> ListStack<T> {
  pub fn new() -> Self {
    ListStack {
      head: None,
      len: 0,
    }
  }

  /// Transfers every node of `source` into a new stack. `source` is
  /// left empty and fully usable.
  pub fn take_from(source: &mut ListStack<T>) -> Self {
    mem::take(source)
  }

  /// Iterates from the top of the stack.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { current: self.head.as_deref() }
  }

  fn push_node(&mut self, value: T) {
    let next = self.head.take();
    self.head = Some(Box::new(Node { value, next }));
    self.len += 1;
  }
}

impl<T> StackLike<T> for ListStack<T> {
  fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  fn len(&self) -> usize {
    self.len
  }

  fn push(&mut self, element: T) -> Result<(), StackError> {
    self.push_node(element);
    Ok(())
  }

  fn top(&self) -> Result<&T, StackError> {
    self.head.as_ref().map(|node| &node.value).ok_or(StackError::EmptyStack)
  }

  fn pop(&mut self) -> bool {
    match self.head.take() {
      None => false,
      Some(node) => {
        self.head = node.next;
        self.len -= 1;
        true
      }
    }
  }
}

impl<T: Clone> Clone for ListStack<T> {
  fn clone(&self) -> Self {
    // Collect top-to-bottom, then push bottom-to-top so that the copy
    // ends up with the same top.
    let values: Vec<T> = self.iter().cloned().collect();
    let mut copy = ListStack::new();
    for value in values.into_iter().rev() {
      copy.push_node(value);
    }
    copy
  }
}

/// Unlinks nodes one at a time, so that dropping a long chain does
/// not recurse once per node.
impl<T> Drop for ListStack<T> {
  fn drop(&mut self) {
    let mut current = self.head.take();
    while let Some(mut node) = current {
      current = node.next.take();
    }
  }
}

impl<T> Default for ListStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: PartialEq> PartialEq for ListStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for ListStack<T> {}

impl<T: Debug> Debug for ListStack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Pushes in iteration order, so the last element ends up on top.
impl<T> FromIterator<T> for ListStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut stack = ListStack::new();
    for value in iter {
      stack.push_node(value);
    }
    stack
  }
}

/// Converts a vector to a stack, where the top of the stack is the
/// end of the vector.
impl<T> From<Vec<T>> for ListStack<T> {
  fn from(elements: Vec<T>) -> Self {
    elements.into_iter().collect()
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.current.map(|node| {
      self.current = node.next.as_deref();
      &node.value
    })
  }
}

impl<'a, T> IntoIterator for &'a ListStack<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
