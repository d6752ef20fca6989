use clap::{Args, Parser, Subcommand, ValueEnum};

/// stacklab: stack-driven string exercises and the N-Queens puzzle
#[derive(Parser, Debug)]
#[command(name = "stacklab", version, about, long_about = None)]
pub struct Cli {
  /// Increase verbosity (-v, -vv, -vvv)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Convert an infix expression such as `(a+b)*c` to postfix
  Postfix(PostfixArgs),

  /// Check that every `{` has a matching `}`
  Braces(InputArgs),

  /// Check whether the input reads the same in both directions
  Palindrome(InputArgs),

  /// Print the input reversed
  Reverse(InputArgs),

  /// Solve the eight queens puzzle
  Queens(QueensArgs),

  /// Run every exercise against its known answers
  Selftest,
}

#[derive(Args, Debug)]
pub struct PostfixArgs {
  /// Infix expression over single letters, `+ - * /`, and parentheses
  pub expr: String,

  /// Stack implementation holding pending operators
  #[arg(long, value_enum, default_value_t = Backing::List)]
  pub backing: Backing,
}

#[derive(Args, Debug)]
pub struct InputArgs {
  pub input: String,

  /// Stack implementation used by the exercise
  #[arg(long, value_enum, default_value_t = Backing::List)]
  pub backing: Backing,
}

#[derive(Args, Debug)]
pub struct QueensArgs {
  /// Print the solution as JSON instead of a grid
  #[arg(long)]
  pub json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backing {
  /// Fixed-capacity array stack (64 slots)
  Array,
  /// Unbounded linked-list stack
  List,
}
