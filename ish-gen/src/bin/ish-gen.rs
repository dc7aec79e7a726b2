use std::io;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use ish_gen::{Generator, BOOLISH_EQ_TEMPLATE};
use log::{info, LevelFilter};

/// Print the `PartialEq<BoolIsh>` impls for the integer types.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
  /// Comma-separated integer types to generate, instead of the built-in list
  #[arg(short, long, value_delimiter = ',', value_parser = NonEmptyStringValueParser::new())]
  types: Option<Vec<String>>,

  /// Log each rendered block to stderr
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .target(env_logger::Target::Stderr)
    .init();

  let generator = match &args.types {
    Some(types) => Generator::new(BOOLISH_EQ_TEMPLATE, types.iter().map(String::as_str))?,
    None => Generator::boolish_int_eq()?,
  };
  info!("generating {} blocks", generator.types().len());

  let stdout = io::stdout();
  generator.write_to(stdout.lock())?;
  Ok(())
}
