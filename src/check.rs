use colored::Colorize;
use frac_config::{DECIMAL_DIGITS, DriverOption};
use frac_number::Rational;

const PASS: &str = "PASS";
const FAIL: &str = "** FAIL **";

/// `<label>: <PASS|** FAIL **>    <result>`
#[derive(Clone, Debug, PartialEq)]
pub struct CheckLine {
    pub label: String,
    pub passed: bool,

    // already rendered: `2/3` or `true`
    pub outcome: String,
}

impl CheckLine {
    pub fn render(&self, width: usize, color: bool) -> String {
        let verdict = match (self.passed, color) {
            (true, true) => PASS.green().to_string(),
            (false, true) => FAIL.red().to_string(),
            (true, false) => PASS.to_string(),
            (false, false) => FAIL.to_string(),
        };

        format!("{:<width$}: {verdict}    {}", self.label, self.outcome)
    }
}

pub fn check_rational(label: &str, result: Rational, expected: Rational, option: &DriverOption) -> CheckLine {
    let outcome = if option.show_decimal {
        format!("{result} ({})", result.to_decimal_string(DECIMAL_DIGITS))
    }

    else {
        result.to_string()
    };

    CheckLine {
        label: label.to_string(),
        passed: result == expected,
        outcome,
    }
}

pub fn check_bool(label: &str, result: bool, expected: bool) -> CheckLine {
    CheckLine {
        label: label.to_string(),
        passed: result == expected,
        outcome: result.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReportLine {
    /// printed as is
    Info(String),
    Check(CheckLine),
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new() -> Self {
        Report { lines: vec![] }
    }

    pub fn push_info(&mut self, info: String) {
        self.lines.push(ReportLine::Info(info));
    }

    pub fn push_check(&mut self, check: CheckLine) {
        self.lines.push(ReportLine::Check(check));
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn checks(&self) -> impl Iterator<Item = &CheckLine> {
        self.lines.iter().filter_map(
            |line| match line {
                ReportLine::Check(check) => Some(check),
                ReportLine::Info(_) => None,
            }
        )
    }

    pub fn failures(&self) -> usize {
        self.checks().filter(|check| !check.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }

    pub fn render(&self, option: &DriverOption) -> String {
        self.lines.iter().map(
            |line| match line {
                ReportLine::Info(info) => info.to_string(),
                ReportLine::Check(check) => check.render(option.label_width, option.color),
            }
        ).collect::<Vec<String>>().join("\n")
    }
}
