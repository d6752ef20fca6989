
use std::fmt::{self, Display, Formatter};

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Plus,
  Minus,
  Times,
  Divide,
}

/// The precedence tier of an operator. Every operator in the grammar
/// is left associative, so two tiers are all we need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
  Additive,
  Multiplicative,
}

impl Operator {
  pub const ALL: [Operator; 4] = [Operator::Plus, Operator::Minus, Operator::Times, Operator::Divide];

  pub fn from_symbol(symbol: char) -> Option<Operator> {
    match symbol {
      '+' => Some(Operator::Plus),
      '-' => Some(Operator::Minus),
      '*' => Some(Operator::Times),
      '/' => Some(Operator::Divide),
      _ => None,
    }
  }

  pub fn symbol(self) -> char {
    match self {
      Operator::Plus => '+',
      Operator::Minus => '-',
      Operator::Times => '*',
      Operator::Divide => '/',
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Plus | Operator::Minus => Precedence::Additive,
      Operator::Times | Operator::Divide => Precedence::Multiplicative,
    }
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_symbol_conversion() {
    for op in Operator::ALL {
      assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('('), None);
    assert_eq!(Operator::from_symbol('a'), None);
    assert_eq!(Operator::from_symbol('^'), None);
  }

  #[test]
  fn test_precedence_tiers() {
    assert_eq!(Operator::Plus.precedence(), Operator::Minus.precedence());
    assert_eq!(Operator::Times.precedence(), Operator::Divide.precedence());
    assert!(Operator::Times.precedence() > Operator::Plus.precedence());
  }

  #[test]
  fn test_display() {
    assert_eq!(Operator::Divide.to_string(), "/");
  }
}
