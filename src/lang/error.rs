use std::rc::Rc;

/// A diagnostic record attached to one line.
///
/// Syntax errors arrive with the [`Line`](super::Line) from the parser,
/// runtime errors are written into the machine's error log by `step()`.
#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn text(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    DivisionByZero,
    TypeMismatch,
    InvalidJump,
    AmbiguousField,
    JumpClamped,
    InternalError,
}

impl ErrorCode {
    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::JumpClamped => Severity::Warning,
            _ => Severity::Error,
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            InvalidJump => "INVALID JUMP",
            AmbiguousField => "AMBIGUOUS FIELD",
            JumpClamped => "JUMP CLAMPED",
            InternalError => "INTERNAL ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}; {}", self.code.as_str(), self.message)
        }
    }
}

impl std::error::Error for Error {}

/// Contract violations by whoever built the program tree.
///
/// These never come from a script author's mistake. The machine logs
/// them as a single generic record and carries on with the next line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InternalError {
    #[error("malformed number literal `{0}`")]
    Literal(Rc<str>),
    #[error("identifier has an empty name")]
    EmptyIdent,
    #[error("expression is not usable as a statement")]
    NotAStatement,
    #[error("unknown keyword `{0}`")]
    UnknownKeyword(String),
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}
