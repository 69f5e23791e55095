#![deny(unused_imports)]

pub const DEFAULT_LABEL_WIDTH: usize = 40;
pub const MIN_LABEL_WIDTH: usize = 1;
pub const MAX_LABEL_WIDTH: usize = 200;

// `--decimal` prints at most this many digits after the decimal point
pub const DECIMAL_DIGITS: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct DriverOption {
    pub mode: DriverMode,

    // `colored` also respects `NO_COLOR`, but `--no-color` always wins
    pub color: bool,

    // labels of check lines are left-aligned and padded to this width
    pub label_width: usize,

    // prints the decimal form next to rational results
    pub show_decimal: bool,
}

impl DriverOption {
    pub fn help_message() -> Self {
        DriverOption::do_this_and_quit(DriverMode::HelpMessage)
    }

    pub fn version_info() -> Self {
        DriverOption::do_this_and_quit(DriverMode::VersionInfo)
    }

    pub fn do_this_and_quit(mode: DriverMode) -> Self {
        DriverOption {
            mode,
            ..DriverOption::default()
        }
    }

    pub fn eval(expr: &str) -> Self {
        DriverOption {
            mode: DriverMode::Eval(expr.to_string()),
            ..DriverOption::default()
        }
    }

    /// for tests: no colors, so that the output can be compared with plain strings
    pub fn plain() -> Self {
        DriverOption {
            color: false,
            ..DriverOption::default()
        }
    }
}

impl Default for DriverOption {
    fn default() -> Self {
        DriverOption {
            mode: DriverMode::Demo,
            color: true,
            label_width: DEFAULT_LABEL_WIDTH,
            show_decimal: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DriverMode {
    /// runs the built-in checks
    Demo,

    /// evaluates a single expression, like `1/3 * 2 == 2/3`
    Eval(String),

    HelpMessage,
    VersionInfo,
}
