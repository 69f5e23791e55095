#![deny(unused_imports)]

use frac::run;
use frac_clap::parse_cli_args;
use frac_error::RenderError;

fn main() {
    pretty_env_logger::init();

    let option = match parse_cli_args() {
        Ok(option) => option,
        Err(e) => {
            eprintln!("{}", e.render_error());
            std::process::exit(1);
        },
    };

    let result = run(&option);

    if !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }

    if !result.stderr.is_empty() {
        eprintln!("{}", result.stderr);
    }

    if !result.success {
        std::process::exit(1);
    }
}
