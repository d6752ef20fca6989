
use super::operator::Operator;

/// A single-character token of an infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
  /// A letter, standing for a variable.
  Operand(char),
  Operator(Operator),
  OpenParen,
  CloseParen,
}

impl Token {
  /// Classifies a single character. Characters outside the grammar
  /// (digits, whitespace, punctuation, non-ASCII letters) produce
  /// `None`.
  pub fn classify(ch: char) -> Option<Token> {
    match ch {
      '(' => Some(Token::OpenParen),
      ')' => Some(Token::CloseParen),
      ch if ch.is_ascii_alphabetic() => Some(Token::Operand(ch)),
      ch => Operator::from_symbol(ch).map(Token::Operator),
    }
  }
}

/// Splits the input into tokens, silently dropping any character the
/// grammar doesn't recognize.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
  input.chars().filter_map(Token::classify)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize() {
    let tokens: Vec<_> = tokenize("(a+B)*c").collect();
    assert_eq!(tokens, vec![
      Token::OpenParen,
      Token::Operand('a'),
      Token::Operator(Operator::Plus),
      Token::Operand('B'),
      Token::CloseParen,
      Token::Operator(Operator::Times),
      Token::Operand('c'),
    ]);
  }

  #[test]
  fn test_tokenize_drops_unknown_characters() {
    let tokens: Vec<_> = tokenize(" a 1 - ^b ").collect();
    assert_eq!(tokens, vec![
      Token::Operand('a'),
      Token::Operator(Operator::Minus),
      Token::Operand('b'),
    ]);
    assert_eq!(tokenize("").count(), 0);
    assert_eq!(tokenize("é").count(), 0);
  }
}
