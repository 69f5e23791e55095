#![deny(unused_imports)]

use frac_config::{DECIMAL_DIGITS, DriverMode, DriverOption};
use frac_error::{RenderError, set_color};
use log::info;

pub mod check;
pub mod demo;
pub mod eval;

#[cfg(test)]
mod tests;

pub use check::{CheckLine, Report, ReportLine, check_bool, check_rational};
pub use demo::run_demo;
pub use eval::{EvalError, EvalErrorKind, Value, eval_expr};

pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

pub fn run(option: &DriverOption) -> RunResult {
    // `colored` decides by itself unless it's explicitly turned off
    if !option.color {
        set_color(false);
    }

    info!("run: mode: {:?}", option.mode);

    match &option.mode {
        DriverMode::HelpMessage => RunResult::ok(frac_clap::help_message()),
        DriverMode::VersionInfo => RunResult::ok(frac_clap::version_info()),
        DriverMode::Demo => {
            let report = run_demo(option);
            let failures = report.failures();
            let mut stdout = report.render(option);

            if failures > 0 {
                stdout = format!("{stdout}\n\n{failures} check(s) failed");
            }

            RunResult {
                stdout,
                stderr: String::new(),
                success: failures == 0,
            }
        },
        DriverMode::Eval(expr) => match eval_expr(expr.as_bytes()) {
            Ok(Value::Rational(n)) if option.show_decimal => RunResult::ok(
                format!("{n} ({})", n.to_decimal_string(DECIMAL_DIGITS)),
            ),
            Ok(value) => RunResult::ok(value.to_string()),
            Err(e) => RunResult::err(e.render_error()),
        },
    }
}

impl RunResult {
    pub fn ok(stdout: String) -> Self {
        RunResult {
            stdout,
            stderr: String::new(),
            success: true,
        }
    }

    pub fn err(stderr: String) -> Self {
        RunResult {
            stdout: String::new(),
            stderr,
            success: false,
        }
    }
}
