use console::style;
use std::fmt::Display;

/// Red bold — error prefixes
pub fn error<D: Display>(text: D) -> String {
    style(text).for_stderr().red().bold().to_string()
}

/// Yellow — flags and values the user should retype
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}
