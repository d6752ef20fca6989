mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Backing, Cli, Commands};
use stacklab::parsing::{infix_to_postfix, infix_to_postfix_with};
use stacklab::queens::EightQueensSolver;
use stacklab::selftest;
use stacklab::stack::{ArrayStack, MIN_ARRAY_SIZE};
use stacklab::warmup::{
  are_braces_matched, are_braces_matched_with, is_palindrome, is_palindrome_with, reverse_string,
  reverse_string_with,
};
use tracing_subscriber::{fmt, EnvFilter};

type CharStack = ArrayStack<char, MIN_ARRAY_SIZE>;

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_filter = match cli.verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
  fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  match cli.command {
    Commands::Postfix(args) => {
      tracing::debug!(backing = ?args.backing, "converting {:?}", args.expr);
      let postfix = match args.backing {
        Backing::Array => infix_to_postfix_with(&args.expr, ArrayStack::<_, MIN_ARRAY_SIZE>::new())?,
        Backing::List => infix_to_postfix(&args.expr),
      };
      println!("{postfix}");
    }
    Commands::Braces(args) => {
      let matched = match args.backing {
        Backing::Array => are_braces_matched_with(&args.input, CharStack::new())?,
        Backing::List => are_braces_matched(&args.input),
      };
      println!("{matched}");
    }
    Commands::Palindrome(args) => {
      let palindrome = match args.backing {
        Backing::Array => is_palindrome_with(&args.input, CharStack::new())?,
        Backing::List => is_palindrome(&args.input),
      };
      println!("{palindrome}");
    }
    Commands::Reverse(args) => {
      let reversed = match args.backing {
        Backing::Array => reverse_string_with(&args.input, CharStack::new())?,
        Backing::List => reverse_string(&args.input),
      };
      println!("{reversed}");
    }
    Commands::Queens(args) => {
      let mut solver = EightQueensSolver::new();
      if args.json {
        let board = solver.try_solve()?;
        println!("{}", serde_json::to_string_pretty(&board)?);
      } else {
        println!("Eight Queens Solution:\n{}", solver.solve());
      }
    }
    Commands::Selftest => {
      selftest::run_all()?;
      println!("All tests passed successfully.");
    }
  }

  Ok(())
}
