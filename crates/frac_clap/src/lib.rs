#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! CLI errors are rendered the same way as the other errors, so let's not use [`clap`][clap].
//!
//! [clap]: https://crates.io/crates/clap

use frac_config::DriverOption;
use log::debug;

mod error;
mod flag;
mod parse;

#[cfg(test)]
mod tests;

pub use error::{ClapError, ClapErrorKind};
pub use flag::{ArgKind, Flag, FLAGS};
pub use parse::parse_cli;

pub fn parse_cli_args() -> Result<DriverOption, ClapError> {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    debug!("parse_cli_args: {args:?}");

    parse_cli(&args)
}

pub fn help_message() -> String {
    let flags = FLAGS.iter().map(
        |flag| {
            let names = match flag.short() {
                Some(short) => format!("{short}, {}", flag.long()),
                None => format!("    {}", flag.long()),
            };
            let names = match flag.param_type() {
                ArgKind::None => names,
                ArgKind::Int => format!("{names} <N>"),
                ArgKind::Expr => format!("{names} <EXPR>"),
            };

            format!("  {names:<22}{}", flag_description(*flag))
        }
    ).collect::<Vec<String>>().join("\n");

    format!(
"Usage: frac [FLAGS] [EXPR...]

Without EXPR, it runs the built-in checks of the rational type.
With EXPR, it evaluates it. An EXPR looks like `1/3 * 2` or `2/6 == 1/3`.

Flags:
{flags}",
    )
}

pub fn version_info() -> String {
    format!("frac {}", env!("CARGO_PKG_VERSION"))
}

fn flag_description(flag: Flag) -> &'static str {
    match flag {
        Flag::Help => "Print this message and quit.",
        Flag::Version => "Print the version and quit.",
        Flag::NoColor => "Do not color the output.",
        Flag::Width => "Width of the labels of check lines. Default: 40",
        Flag::Decimal => "Also print rational results in decimal.",
        Flag::Eval => "Evaluate EXPR instead of running the checks.",
    }
}
