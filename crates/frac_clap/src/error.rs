use crate::flag::{Flag, FLAGS};
use frac_error::{RenderError, concat_commas};

#[derive(Clone, Debug, PartialEq)]
pub struct ClapError {
    pub kind: ClapErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClapErrorKind {
    UnknownFlag {
        flag: String,
        similar_flag: Option<Flag>,
    },
    MissingArgument(Flag),

    /// `--decimal=3`
    UnexpectedArgument(Flag, String),
    InvalidInteger(Flag, String),
    NumberNotInRange {
        flag: Flag,
        min: usize,
        max: usize,
        n: usize,
    },
    SameFlagMultipleTimes(Flag),
    EvalWithPositionalArgs,
}

impl ClapError {
    pub fn unknown_flag(flag: &str) -> Self {
        ClapError {
            kind: ClapErrorKind::UnknownFlag {
                flag: flag.to_string(),
                similar_flag: Flag::similar_flag(flag),
            },
        }
    }

    pub fn missing_argument(flag: Flag) -> Self {
        ClapError { kind: ClapErrorKind::MissingArgument(flag) }
    }

    pub fn unexpected_argument(flag: Flag, arg: &str) -> Self {
        ClapError { kind: ClapErrorKind::UnexpectedArgument(flag, arg.to_string()) }
    }

    pub fn invalid_integer(flag: Flag, arg: &str) -> Self {
        ClapError { kind: ClapErrorKind::InvalidInteger(flag, arg.to_string()) }
    }

    pub fn number_not_in_range(flag: Flag, min: usize, max: usize, n: usize) -> Self {
        ClapError { kind: ClapErrorKind::NumberNotInRange { flag, min, max, n } }
    }

    pub fn same_flag_multiple_times(flag: Flag) -> Self {
        ClapError { kind: ClapErrorKind::SameFlagMultipleTimes(flag) }
    }

    pub fn eval_with_positional_args() -> Self {
        ClapError { kind: ClapErrorKind::EvalWithPositionalArgs }
    }
}

impl RenderError for ClapError {
    fn kind_name(&self) -> String {
        match &self.kind {
            ClapErrorKind::UnknownFlag { .. } => "unknown flag",
            ClapErrorKind::MissingArgument(_) => "missing argument",
            ClapErrorKind::UnexpectedArgument(_, _) => "unexpected argument",
            ClapErrorKind::InvalidInteger(_, _) => "invalid integer",
            ClapErrorKind::NumberNotInRange { .. } => "number not in range",
            ClapErrorKind::SameFlagMultipleTimes(_) => "same flag multiple times",
            ClapErrorKind::EvalWithPositionalArgs => "conflicting arguments",
        }.to_string()
    }

    fn message(&self) -> String {
        match &self.kind {
            ClapErrorKind::UnknownFlag { flag, .. } => format!("Unknown flag: `{flag}`."),
            ClapErrorKind::MissingArgument(flag) => format!(
                "Flag `{}` requires {}, but it's missing.",
                flag.long(),
                flag.param_type().render(),
            ),
            ClapErrorKind::UnexpectedArgument(flag, arg) => format!(
                "Flag `{}` doesn't take an argument, but got `{arg}`.",
                flag.long(),
            ),
            ClapErrorKind::InvalidInteger(flag, arg) => format!(
                "Flag `{}` requires an integer, but got `{arg}`.",
                flag.long(),
            ),
            ClapErrorKind::NumberNotInRange { flag, min, max, n } => format!(
                "The argument of `{}` is supposed to be between {min} and {max}, but is {n}.",
                flag.long(),
            ),
            ClapErrorKind::SameFlagMultipleTimes(flag) => format!(
                "Flag `{}` cannot be used multiple times.",
                flag.long(),
            ),
            ClapErrorKind::EvalWithPositionalArgs => String::from(
                "`--eval` and positional arguments cannot be used together.",
            ),
        }
    }

    fn help(&self) -> String {
        match &self.kind {
            ClapErrorKind::UnknownFlag { similar_flag: Some(flag), .. } => format!("Do you mean `{}`?", flag.long()),
            ClapErrorKind::UnknownFlag { .. } => {
                let flags = FLAGS.iter().map(
                    |flag| flag.long().to_string()
                ).collect::<Vec<String>>();

                format!("Available flags are {}.", concat_commas(&flags, "and", "`", "`"))
            },
            ClapErrorKind::EvalWithPositionalArgs => String::from("Either use `frac --eval \"1/3 * 2\"` or `frac 1/3 \"*\" 2`."),
            _ => String::new(),
        }
    }
}
