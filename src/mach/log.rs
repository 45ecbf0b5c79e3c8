use crate::lang::Error;
use std::collections::BTreeMap;

/// Runtime diagnostics per line number.
///
/// A line's records are dropped each time the line runs again, so the log
/// only ever shows what happened on the most recent execution.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    lines: BTreeMap<usize, Vec<Error>>,
}

impl ErrorLog {
    pub fn new() -> ErrorLog {
        ErrorLog::default()
    }

    pub fn reset(&mut self, line: usize) {
        self.lines.remove(&line);
    }

    pub fn push(&mut self, line: usize, error: Error) {
        self.lines.entry(line).or_insert_with(Vec::new).push(error);
    }

    pub fn line(&self, line: usize) -> &[Error] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self, line: usize) -> bool {
        self.line(line).iter().any(Error::is_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Error)> {
        self.lines
            .iter()
            .flat_map(|(line, errors)| errors.iter().map(move |e| (*line, e)))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl std::fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (line, error) in self.iter() {
            writeln!(f, "{}: {} {}", line, error.severity(), error)?;
        }
        Ok(())
    }
}
