
//! Small string exercises driven by a character stack.
//!
//! Each function comes in two forms. The plain form runs on a
//! [`ListStack`] and cannot fail. The `_with` form accepts any empty
//! [`StackLike<char>`] and reports a bounded stack that fills up.

use crate::stack::{ListStack, StackError, StackLike};

/// Returns true if every `{` is closed by a later `}` in properly
/// nested order, and no `}` appears without an open `{`. All other
/// characters are ignored.
pub fn are_braces_matched(input: &str) -> bool {
  // unwrap: ListStack::push never fails.
  are_braces_matched_with(input, ListStack::new()).unwrap()
}

pub fn are_braces_matched_with<S>(input: &str, mut stack: S) -> Result<bool, StackError>
where S: StackLike<char> {
  for ch in input.chars() {
    match ch {
      '{' => stack.push(ch)?,
      '}' => {
        if !stack.pop() {
          return Ok(false);
        }
      }
      _ => {}
    }
  }
  Ok(stack.is_empty())
}

/// Returns true if the input reads the same forward and backward,
/// compared character by character.
pub fn is_palindrome(input: &str) -> bool {
  // unwrap: ListStack::push never fails.
  is_palindrome_with(input, ListStack::new()).unwrap()
}

pub fn is_palindrome_with<S>(input: &str, stack: S) -> Result<bool, StackError>
where S: StackLike<char> {
  Ok(reverse_string_with(input, stack)? == input)
}

/// Returns the characters of the input in reverse order.
pub fn reverse_string(input: &str) -> String {
  // unwrap: ListStack::push never fails.
  reverse_string_with(input, ListStack::new()).unwrap()
}

pub fn reverse_string_with<S>(input: &str, mut stack: S) -> Result<String, StackError>
where S: StackLike<char> {
  stack.push_several(input.chars())?;
  let mut reversed = String::with_capacity(input.len());
  while let Ok(ch) = stack.peek() {
    reversed.push(ch);
    stack.pop_and_discard();
  }
  Ok(reversed)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stack::{ArrayStack, MIN_ARRAY_SIZE};

  type CharArrayStack = ArrayStack<char, MIN_ARRAY_SIZE>;

  #[test]
  fn test_braces_matched() {
    assert!(are_braces_matched(""));
    assert!(are_braces_matched("{}"));
    assert!(are_braces_matched("a{bc}d"));
    assert!(are_braces_matched("{{}{}}"));
    assert!(are_braces_matched("no braces here"));
    assert!(!are_braces_matched("{"));
    assert!(!are_braces_matched("}"));
    assert!(!are_braces_matched("a{b{c}"));
    assert!(!are_braces_matched("}{"));
    assert!(!are_braces_matched("{}}{"));
  }

  #[test]
  fn test_braces_matched_on_array_stack() {
    assert_eq!(are_braces_matched_with("a{bc}d", CharArrayStack::new()), Ok(true));
    assert_eq!(are_braces_matched_with("a{b{c}", CharArrayStack::new()), Ok(false));
    let deep = "{".repeat(65) + &"}".repeat(65);
    assert_eq!(are_braces_matched_with(&deep, CharArrayStack::new()), Err(StackError::Overflow { capacity: 64 }));
    assert!(are_braces_matched(&deep));
  }

  #[test]
  fn test_palindrome() {
    assert!(is_palindrome(""));
    assert!(is_palindrome("a"));
    assert!(is_palindrome("aa"));
    assert!(is_palindrome("aba"));
    assert!(is_palindrome("abba"));
    assert!(is_palindrome("été"));
    assert!(!is_palindrome("ab"));
    assert!(!is_palindrome("abaa"));
    assert!(!is_palindrome("Aba"));
  }

  #[test]
  fn test_palindrome_agrees_with_reverse() {
    for s in ["", "x", "racecar", "abc", "noon", "ab ba", "a b a"] {
      assert_eq!(is_palindrome(s), s == reverse_string(s), "input {:?}", s);
    }
  }

  #[test]
  fn test_reverse() {
    assert_eq!(reverse_string(""), "");
    assert_eq!(reverse_string("a"), "a");
    assert_eq!(reverse_string("ab"), "ba");
    assert_eq!(reverse_string("abc"), "cba");
    assert_eq!(reverse_string("añb"), "bña");
  }

  #[test]
  fn test_reverse_is_involution() {
    for s in ["", "hello", "a{b}c", "Straße", "12345"] {
      assert_eq!(reverse_string(&reverse_string(s)), s);
    }
  }

  #[test]
  fn test_reverse_on_array_stack() {
    assert_eq!(reverse_string_with("abc", CharArrayStack::new()), Ok(String::from("cba")));
    let long = "x".repeat(65);
    assert_eq!(reverse_string_with(&long, CharArrayStack::new()), Err(StackError::Overflow { capacity: 64 }));
    assert_eq!(is_palindrome_with(&long, CharArrayStack::new()), Err(StackError::Overflow { capacity: 64 }));
    assert_eq!(reverse_string(&long), long);
  }
}
