use crate::lang::{Error, InternalError};

/// Abandons the rest of the current line.
///
/// Every evaluator and executor call returns this on its `Err` side and
/// `step()` is the only place it is caught.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// A script error; the record goes into the line's log as is.
    Error(Error),
    /// The program tree broke its contract.
    Internal(InternalError),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Halt {
        Halt::Error(error)
    }
}

impl From<InternalError> for Halt {
    fn from(error: InternalError) -> Halt {
        Halt::Internal(error)
    }
}
