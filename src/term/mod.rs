//! Terminal rendering of machine diagnostics.

use crate::lang::Severity;
use crate::mach::ErrorLog;
use ansi_term::{Colour, Style};

/// One row per record: dimmed line number, bold red errors, yellow warnings.
pub fn paint_log(log: &ErrorLog) -> String {
    let mut s = String::new();
    for (line, error) in log.iter() {
        let style = match error.severity() {
            Severity::Error => Colour::Red.bold(),
            Severity::Warning => Colour::Yellow.normal(),
        };
        s.push_str(&format!(
            "{} {}\n",
            Style::new().dimmed().paint(format!("{:>2}", line)),
            style.paint(error.to_string())
        ));
    }
    s
}
