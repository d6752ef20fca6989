
//! Conversion of infix expressions to postfix notation, via a
//! restricted shunting yard algorithm.

use super::operator::Operator;
use super::tokenizer::{tokenize, Token};
use crate::stack::{ListStack, StackError, StackLike};

/// A value held on the operator stack during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStackValue {
  OpenParen,
  Operator(Operator),
}

impl OpStackValue {
  pub fn symbol(self) -> char {
    match self {
      OpStackValue::OpenParen => '(',
      OpStackValue::Operator(op) => op.symbol(),
    }
  }
}

/// Converts an infix expression to postfix, using an unbounded
/// operator stack.
///
/// Operands are single ASCII letters and the operators are `+`, `-`,
/// `*`, and `/`, all left associative, with parentheses for grouping.
/// The input is not validated. Characters outside the grammar are
/// skipped, an unmatched `)` is ignored, and an unmatched `(` is
/// copied to the end of the output.
pub fn infix_to_postfix(input: &str) -> String {
  // unwrap: ListStack::push never fails.
  infix_to_postfix_with(input, ListStack::new()).unwrap()
}

/// As [`infix_to_postfix`], but with a caller-supplied operator
/// stack, which should be empty. Fails only if the stack refuses a
/// push.
pub fn infix_to_postfix_with<S>(input: &str, mut operator_stack: S) -> Result<String, StackError>
where S: StackLike<OpStackValue> {
  let mut postfix = String::with_capacity(input.len());
  for token in tokenize(input) {
    match token {
      Token::Operand(ch) => {
        postfix.push(ch);
      }
      Token::OpenParen => {
        operator_stack.push(OpStackValue::OpenParen)?;
      }
      Token::CloseParen => {
        while let Ok(OpStackValue::Operator(op)) = operator_stack.peek() {
          postfix.push(op.symbol());
          operator_stack.pop_and_discard();
        }
        // Either the matching paren or nothing at all.
        operator_stack.pop_and_discard();
      }
      Token::Operator(op) => {
        while let Ok(OpStackValue::Operator(stack_op)) = operator_stack.peek() {
          if !compare_precedence(stack_op, op) {
            break;
          }
          postfix.push(stack_op.symbol());
          operator_stack.pop_and_discard();
        }
        operator_stack.push(OpStackValue::Operator(op))?;
      }
    }
  }

  while let Ok(value) = operator_stack.peek() {
    postfix.push(value.symbol());
    operator_stack.pop_and_discard();
  }

  tracing::trace!(input, %postfix, "converted infix expression");
  Ok(postfix)
}

/// Whether `stack_op`, pending on the operator stack, must be emitted
/// before `current_op` is pushed.
fn compare_precedence(stack_op: Operator, current_op: Operator) -> bool {
  stack_op.precedence() >= current_op.precedence()
}
