use crate::error::ClapError;
use crate::flag::{ArgKind, Flag};
use frac_config::{
    DriverMode,
    DriverOption,
    MAX_LABEL_WIDTH,
    MIN_LABEL_WIDTH,
};
use std::collections::HashSet;

/// `args` doesn't include the path of the binary.
pub fn parse_cli(args: &[String]) -> Result<DriverOption, ClapError> {
    let mut result = DriverOption::default();
    let mut seen_flags = HashSet::new();
    let mut positional_args = vec![];
    let mut eval_expr = None;
    let mut show_help = false;
    let mut show_version = false;
    let mut no_more_flags = false;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if no_more_flags || !is_flag(arg) {
            positional_args.push(arg.to_string());
            continue;
        }

        if arg == "--" {
            no_more_flags = true;
            continue;
        }

        // `--width=30`
        let (flag_str, inline_arg) = match arg.split_once('=') {
            Some((flag, arg)) => (flag, Some(arg)),
            None => (arg.as_str(), None),
        };

        let flag = match Flag::from_arg(flag_str) {
            Some(flag) => flag,
            None => {
                return Err(ClapError::unknown_flag(flag_str));
            },
        };

        if !seen_flags.insert(flag) {
            return Err(ClapError::same_flag_multiple_times(flag));
        }

        let flag_arg = match (flag.param_type(), inline_arg) {
            (ArgKind::None, None) => None,
            (ArgKind::None, Some(arg)) => {
                return Err(ClapError::unexpected_argument(flag, arg));
            },
            (_, Some(arg)) => Some(arg.to_string()),
            (_, None) => match args.next() {
                Some(arg) => Some(arg.to_string()),
                None => {
                    return Err(ClapError::missing_argument(flag));
                },
            },
        };

        match (flag, flag_arg) {
            (Flag::Help, _) => {
                show_help = true;
            },
            (Flag::Version, _) => {
                show_version = true;
            },
            (Flag::NoColor, _) => {
                result.color = false;
            },
            (Flag::Decimal, _) => {
                result.show_decimal = true;
            },
            (Flag::Width, Some(arg)) => {
                result.label_width = parse_width(&arg)?;
            },
            (Flag::Eval, Some(arg)) => {
                eval_expr = Some(arg);
            },
            (Flag::Width | Flag::Eval, None) => unreachable!(),
        }
    }

    if show_help {
        result.mode = DriverMode::HelpMessage;
    }

    else if show_version {
        result.mode = DriverMode::VersionInfo;
    }

    else {
        match (eval_expr, positional_args.is_empty()) {
            (Some(_), false) => {
                return Err(ClapError::eval_with_positional_args());
            },
            (Some(expr), true) => {
                result.mode = DriverMode::Eval(expr);
            },
            (None, false) => {
                result.mode = DriverMode::Eval(positional_args.join(" "));
            },
            (None, true) => {
                result.mode = DriverMode::Demo;
            },
        }
    }

    Ok(result)
}

// `-3` is not a valid rational, so it's fine to treat every `-...` as a flag.
// A lone `-` is not a flag.
fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1
}

fn parse_width(arg: &str) -> Result<usize, ClapError> {
    match arg.parse::<usize>() {
        Ok(n) if (MIN_LABEL_WIDTH..=MAX_LABEL_WIDTH).contains(&n) => Ok(n),
        Ok(n) => Err(ClapError::number_not_in_range(Flag::Width, MIN_LABEL_WIDTH, MAX_LABEL_WIDTH, n)),
        Err(_) => Err(ClapError::invalid_integer(Flag::Width, arg)),
    }
}
