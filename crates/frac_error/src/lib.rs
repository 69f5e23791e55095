#![deny(unused_imports)]

use colored::Colorize;

mod dist;

#[cfg(test)]
mod tests;

pub use dist::substr_edit_distance;

/// All the errors in this workspace are printed through this trait.
pub trait RenderError {
    // name of the error kind
    // no capital letters, no dot
    fn kind_name(&self) -> String;

    // main explanation of this error
    fn message(&self) -> String;

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    fn help(&self) -> String {
        String::new()
    }

    fn render_error(&self) -> String {
        let help = match self.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };

        format!(
            "{} {}: {}{help}",
            render_error_title(),
            self.kind_name(),
            self.message(),
        )
    }
}

pub(crate) fn render_error_title() -> String {
    "[Error]".red().to_string()
}

/// `colored` checks the tty and `NO_COLOR` by itself. This overrides it.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

pub fn concat_commas(list: &[String], term: &str, prefix: &str, suffix: &str) -> String {
    match list.len() {
        0 => String::new(),
        1 => format!("{prefix}{}{suffix}", list[0]),
        2 => format!("{prefix}{}{suffix} {term} {prefix}{}{suffix}", list[0], list[1]),
        _ => format!("{prefix}{}{suffix}, {}", list[0], concat_commas(&list[1..], term, prefix, suffix)),
    }
}
