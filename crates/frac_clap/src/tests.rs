use crate::{ClapError, ClapErrorKind, Flag, help_message, parse_cli};
use frac_config::{DriverMode, DriverOption};
use frac_error::RenderError;

fn parse(args: &[&str]) -> Result<DriverOption, ClapErrorKind> {
    let args = args.iter().map(|arg| arg.to_string()).collect::<Vec<String>>();

    parse_cli(&args).map_err(|e| e.kind)
}

#[test]
fn valid_args_test() {
    assert_eq!(parse(&[]), Ok(DriverOption::default()));
    assert_eq!(parse(&["--help"]).unwrap().mode, DriverMode::HelpMessage);
    assert_eq!(parse(&["-v"]).unwrap().mode, DriverMode::VersionInfo);

    // help wins
    assert_eq!(parse(&["-v", "-h"]).unwrap().mode, DriverMode::HelpMessage);

    let opt = parse(&["--no-color", "-w", "30", "--decimal"]).unwrap();
    assert_eq!(
        opt,
        DriverOption {
            mode: DriverMode::Demo,
            color: false,
            label_width: 30,
            show_decimal: true,
        },
    );

    assert_eq!(parse(&["--width=12"]).unwrap().label_width, 12);
    assert_eq!(parse(&["--eval", "1/3 * 2"]).unwrap().mode, DriverMode::Eval(String::from("1/3 * 2")));
    assert_eq!(parse(&["1/3", "*", "2"]).unwrap().mode, DriverMode::Eval(String::from("1/3 * 2")));
    assert_eq!(parse(&["--", "--x"]).unwrap().mode, DriverMode::Eval(String::from("--x")));
}

#[test]
fn invalid_args_test() {
    assert_eq!(
        parse(&["--widht", "3"]),
        Err(ClapErrorKind::UnknownFlag { flag: String::from("--widht"), similar_flag: Some(Flag::Width) }),
    );
    assert_eq!(
        parse(&["--xx"]),
        Err(ClapErrorKind::UnknownFlag { flag: String::from("--xx"), similar_flag: None }),
    );
    assert_eq!(parse(&["--width"]), Err(ClapErrorKind::MissingArgument(Flag::Width)));
    assert_eq!(parse(&["--eval"]), Err(ClapErrorKind::MissingArgument(Flag::Eval)));
    assert_eq!(
        parse(&["--width", "wide"]),
        Err(ClapErrorKind::InvalidInteger(Flag::Width, String::from("wide"))),
    );
    assert_eq!(
        parse(&["--width", "0"]),
        Err(ClapErrorKind::NumberNotInRange { flag: Flag::Width, min: 1, max: 200, n: 0 }),
    );
    assert_eq!(
        parse(&["--decimal=yes"]),
        Err(ClapErrorKind::UnexpectedArgument(Flag::Decimal, String::from("yes"))),
    );
    assert_eq!(
        parse(&["--no-color", "--no-color"]),
        Err(ClapErrorKind::SameFlagMultipleTimes(Flag::NoColor)),
    );
    assert_eq!(
        parse(&["--eval", "1/3", "2"]),
        Err(ClapErrorKind::EvalWithPositionalArgs),
    );
}

#[test]
fn help_message_test() {
    let message = help_message();

    for flag in crate::FLAGS.iter() {
        assert!(message.contains(flag.long()), "{}", flag.long());
    }
}

#[test]
fn unknown_flag_help_test() {
    assert_eq!(
        ClapError::unknown_flag("--xx").help(),
        "Available flags are `--help`, `--version`, `--no-color`, `--width`, `--decimal` and `--eval`.",
    );
    assert_eq!(
        ClapError::unknown_flag("--decmal").help(),
        "Do you mean `--decimal`?",
    );
}
