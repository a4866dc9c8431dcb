//! Application error type.
//!
//! One error type flows through the whole pipeline. Each error carries a
//! `kind` so callers (and tests) can distinguish failure classes, and each
//! kind maps to a stable process exit code.

/// Failure classes surfaced by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or contradictory user-supplied ranges/files.
    Input,
    /// Degree range violating the fitter's contract (`min_degree < 1`).
    InvalidRange,
    /// A requested degree exceeds what the sample count supports.
    UnderdeterminedFit,
    /// A least-squares solve failed on an ill-conditioned design matrix.
    NumericalInstability,
    /// Remote measurement endpoint unreachable or returned an error.
    Transport,
    /// Local filesystem failure (reports, images).
    Io,
    /// The sweep produced no results at all.
    EmptyReport,
}

impl ErrorKind {
    /// Process exit code for this failure class.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::EmptyReport => 1,
            ErrorKind::Input | ErrorKind::InvalidRange | ErrorKind::Io => 2,
            ErrorKind::UnderdeterminedFit => 3,
            ErrorKind::NumericalInstability | ErrorKind::Transport => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRange, message)
    }

    pub fn underdetermined(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnderdeterminedFit, message)
    }

    pub fn numerical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NumericalInstability, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn empty_report(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyReport, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(AppError::empty_report("x").exit_code(), 1);
        assert_eq!(AppError::input("x").exit_code(), 2);
        assert_eq!(AppError::invalid_range("x").exit_code(), 2);
        assert_eq!(AppError::underdetermined("x").exit_code(), 3);
        assert_eq!(AppError::transport("x").exit_code(), 4);
    }
}
