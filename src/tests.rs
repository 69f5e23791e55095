use crate::{ReportLine, check_bool, check_rational, run, run_demo};
use frac_config::{DriverMode, DriverOption};
use frac_number::Rational;

// the demo, exactly as it has to be printed
const DEMO_OUTPUT: &str = "Three: 3/1
One third: 1/3
One third times two                     : PASS    2/3
Two times one third                     : PASS    2/3
Three times one third                   : PASS    1/1
Three times one third                   : PASS    1/1
One third times two                     : PASS    2/3
Two third times one third               : PASS    2/9
One third == one third                  : PASS    true
One third != one forth                  : PASS    true
One third == two sixth                  : PASS    true
One third != three sixth                : PASS    true
athird < athird                         : PASS    false
afourth < athird                        : PASS    true
athird  <= athird                       : PASS    true
athird  <= afourth                      : PASS    false
athird  > athird                        : PASS    false
afourth > athird                        : PASS    false
athird >= athird                        : PASS    true
athird >= afourth                       : PASS    true";

#[test]
fn demo_test() {
    let option = DriverOption::plain();
    let report = run_demo(&option);

    assert_eq!(report.checks().count(), 18);
    assert!(report.all_passed());
    assert_eq!(report.render(&option), DEMO_OUTPUT);

    let result = run(&option);
    assert!(result.success);
    assert_eq!(result.stdout, DEMO_OUTPUT);
}

#[test]
fn check_line_test() {
    let option = DriverOption::plain();

    let passed = check_rational("half", Rational::new(2, 4), Rational::new(1, 2), &option);
    assert!(passed.passed);
    assert_eq!(passed.render(8, false), "half    : PASS    1/2");

    let failed = check_bool("lt", false, true);
    assert!(!failed.passed);
    assert_eq!(failed.render(4, false), "lt  : ** FAIL **    false");

    // labels longer than the width are not truncated
    assert_eq!(check_bool("long label", true, true).render(4, false), "long label: PASS    true");
}

#[test]
fn decimal_output_test() {
    let option = DriverOption {
        show_decimal: true,
        ..DriverOption::plain()
    };

    let line = check_rational("One third", Rational::new(2, 6), Rational::new(1, 3), &option);
    assert_eq!(line.outcome, "1/3 (0.3333333333...)");
    assert_eq!(line.render(10, false), "One third : PASS    1/3 (0.3333333333...)");

    let result = run(&DriverOption {
        color: false,
        show_decimal: true,
        ..DriverOption::eval("1/4")
    });
    assert!(result.success);
    assert_eq!(result.stdout, "1/4 (0.25)");

    // comparisons print booleans, with or without `--decimal`
    let result = run(&DriverOption {
        color: false,
        show_decimal: true,
        ..DriverOption::eval("1/4 < 1/3")
    });
    assert_eq!(result.stdout, "true");

    // the demo keeps passing, and rational lines get the decimal form
    let report = run_demo(&option);
    assert!(report.all_passed());
    assert!(report.render(&option).contains("Two third times one third               : PASS    2/9 (0.2222222222...)"));
}

#[test]
fn report_failure_test() {
    let option = DriverOption::plain();
    let mut report = run_demo(&option);
    report.push_check(check_rational("wrong", Rational::new(1, 3), Rational::new(1, 4), &option));

    assert_eq!(report.failures(), 1);
    assert!(!report.all_passed());
    assert!(matches!(report.lines().last(), Some(ReportLine::Check(check)) if !check.passed));
}

#[test]
fn run_eval_test() {
    let option = DriverOption {
        color: false,
        ..DriverOption::eval("1/3 * 2")
    };
    let result = run(&option);

    assert!(result.success);
    assert_eq!(result.stdout, "2/3");

    let option = DriverOption {
        mode: DriverMode::Eval(String::from("1/0")),
        ..DriverOption::plain()
    };
    let result = run(&option);

    assert!(!result.success);
    assert_eq!(result.stderr, "[Error] divide by zero: `1/0` has a zero denominator.");
}

#[test]
fn run_help_test() {
    let result = run(&DriverOption {
        color: false,
        ..DriverOption::help_message()
    });

    assert!(result.success);
    assert!(result.stdout.contains("--eval"));

    let result = run(&DriverOption {
        color: false,
        ..DriverOption::version_info()
    });

    assert!(result.stdout.starts_with("frac "));
}
