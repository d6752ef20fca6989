
//! Built-in demonstration run of every lab exercise, checking each
//! against known answers. Used by `stacklab selftest`.

use crate::error::Error;
use crate::parsing::{infix_to_postfix, infix_to_postfix_with};
use crate::queens::EightQueensSolver;
use crate::stack::{ArrayStack, ListStack, StackLike, MIN_ARRAY_SIZE};
use crate::warmup::{are_braces_matched_with, is_palindrome_with, reverse_string_with};

use std::fmt::Debug;

type CharStack = ArrayStack<char, MIN_ARRAY_SIZE>;

const POSTFIX_CASES: [(&str, &str); 12] = [
  ("", ""),
  ("a", "a"),
  ("a+b", "ab+"),
  ("a*b", "ab*"),
  ("a+b*c", "abc*+"),
  ("a+(b*c)", "abc*+"),
  ("(a+(b*c))", "abc*+"),
  ("(a+b)*c", "ab+c*"),
  ("((a+b)*c)", "ab+c*"),
  ("a*b+c", "ab*c+"),
  ("(a*b)+c", "ab*c+"),
  ("((a*b)+c)", "ab*c+"),
];

/// Runs every scenario, stopping at the first failure.
pub fn run_all() -> Result<(), Error> {
  let scenarios: [(&'static str, fn() -> Result<(), Error>); 7] = [
    ("array stack", check_array_stack),
    ("list stack", check_list_stack),
    ("brace matching", check_braces),
    ("palindrome", check_palindrome),
    ("reverse", check_reverse),
    ("infix to postfix", check_postfix),
    ("eight queens", check_queens),
  ];
  for (name, scenario) in scenarios {
    scenario()?;
    tracing::info!("self-test passed: {name}");
  }
  Ok(())
}

fn expect(scenario: &'static str, condition: bool, detail: &str) -> Result<(), Error> {
  if condition {
    Ok(())
  } else {
    Err(Error::scenario_failed(scenario, detail))
  }
}

fn expect_eq<T>(scenario: &'static str, actual: T, expected: T) -> Result<(), Error>
where T: PartialEq + Debug {
  if actual == expected {
    Ok(())
  } else {
    Err(Error::scenario_failed(scenario, format!("expected {:?}, got {:?}", expected, actual)))
  }
}

fn check_basic_operations<S: StackLike<i32>>(scenario: &'static str, stack: &mut S) -> Result<(), Error> {
  expect(scenario, stack.is_empty(), "new stack is not empty")?;
  stack.push(10)?;
  expect_eq(scenario, stack.peek()?, 10)?;
  stack.push(20)?;
  expect_eq(scenario, stack.peek()?, 20)?;
  expect(scenario, stack.pop(), "pop of 20 failed")?;
  expect_eq(scenario, stack.peek()?, 10)?;
  expect(scenario, stack.pop(), "pop of 10 failed")?;
  expect(scenario, stack.is_empty(), "stack not empty after popping everything")
}

fn check_array_stack() -> Result<(), Error> {
  let mut stack = ArrayStack::<i32, MIN_ARRAY_SIZE>::new();
  check_basic_operations("array stack", &mut stack)
}

fn check_list_stack() -> Result<(), Error> {
  const SCENARIO: &str = "list stack";
  let mut stack0 = ListStack::<i32>::new();
  check_basic_operations(SCENARIO, &mut stack0)?;

  stack0.push_several([1, 2, 3])?;
  let stack1 = stack0.clone();
  expect_eq(SCENARIO, stack0.peek()?, 3)?;
  expect_eq(SCENARIO, stack1.peek()?, 3)?;
  expect_eq(SCENARIO, stack1.len(), 3)?;

  let stack2 = ListStack::take_from(&mut stack0);
  expect(SCENARIO, stack0.is_empty(), "moved-from stack is not empty")?;
  expect_eq(SCENARIO, stack2.peek()?, 3)?;
  expect_eq(SCENARIO, stack2, stack1)
}

fn check_braces() -> Result<(), Error> {
  const SCENARIO: &str = "brace matching";
  for (input, expected) in [("", true), ("{}", true), ("a{bc}d", true), ("{", false), ("}", false), ("a{b{c}", false)] {
    expect_eq(SCENARIO, are_braces_matched_with(input, CharStack::new())?, expected)?;
  }
  Ok(())
}

fn check_palindrome() -> Result<(), Error> {
  const SCENARIO: &str = "palindrome";
  for (input, expected) in [("", true), ("a", true), ("aa", true), ("aba", true), ("abba", true), ("ab", false), ("abaa", false)] {
    expect_eq(SCENARIO, is_palindrome_with(input, CharStack::new())?, expected)?;
  }
  Ok(())
}

fn check_reverse() -> Result<(), Error> {
  const SCENARIO: &str = "reverse";
  for (input, expected) in [("", ""), ("a", "a"), ("ab", "ba"), ("abc", "cba")] {
    expect_eq(SCENARIO, reverse_string_with(input, CharStack::new())?.as_str(), expected)?;
  }
  Ok(())
}

fn check_postfix() -> Result<(), Error> {
  const SCENARIO: &str = "infix to postfix";
  for (input, expected) in POSTFIX_CASES {
    expect_eq(SCENARIO, infix_to_postfix_with(input, ArrayStack::<_, MIN_ARRAY_SIZE>::new())?.as_str(), expected)?;
    expect_eq(SCENARIO, infix_to_postfix(input).as_str(), expected)?;
  }
  Ok(())
}

fn check_queens() -> Result<(), Error> {
  const SCENARIO: &str = "eight queens";
  let board = EightQueensSolver::new().try_solve()?;
  let queens: Vec<_> = board.queens().collect();
  expect_eq(SCENARIO, queens.len(), 8)?;
  for (i, &(r1, c1)) in queens.iter().enumerate() {
    for &(r2, c2) in &queens[i + 1..] {
      let attacks = r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2);
      expect(SCENARIO, !attacks, "two queens attack each other")?;
    }
  }
  Ok(())
}
