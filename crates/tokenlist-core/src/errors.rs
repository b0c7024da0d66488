use std::path::{Path, PathBuf};

use thiserror::Error;
use tokenlist_core_types::RunId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, test assertions and the single-line message printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Sources
    /// The data directory (or another required location) does not exist
    NotFound,
    /// A relaxed-JSON document could not be parsed
    Parse,
    /// A token record lacks a string `symbol` or `address`
    MissingField,
    /// The same symbol appears twice in one token collection
    DuplicateSymbol,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    /// An internal invariant was violated (indicates a bug)
    InvalidState,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::DuplicateSymbol => "ERR_DUPLICATE_SYMBOL",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::InvalidState => "ERR_INVALID_STATE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, offending path or symbol, run id) needed to act on it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    symbol: Option<String>,
    run_id: Option<RunId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            symbol: None,
            run_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the path of the offending file or directory
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add token symbol context
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Add run id context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the symbol context, if any
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Get the run id context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " {}", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(symbol) = &self.symbol {
            write!(f, " (symbol: {})", symbol)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Validation failures raised by the token model itself
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenListError {
    /// A token record is not a JSON object
    #[error("Token record must be an object, got {found}")]
    NotAnObject { found: String },

    /// A required string field is absent or not a string
    #[error("Token record is missing string field `{field}`")]
    MissingField { field: String },

    /// Two records in one collection share a symbol
    #[error("Duplicate token symbol: {symbol}")]
    DuplicateSymbol { symbol: String },

    /// A classification name outside none/patch/minor/major
    #[error("Unknown change classification: {value}")]
    UnknownClassification { value: String },
}

impl From<TokenListError> for ExError {
    fn from(err: TokenListError) -> Self {
        let message = err.to_string();
        match err {
            TokenListError::NotAnObject { .. } => {
                ExError::new(ExErrorKind::Parse).with_message(message)
            }
            TokenListError::MissingField { .. } => {
                ExError::new(ExErrorKind::MissingField).with_message(message)
            }
            TokenListError::DuplicateSymbol { symbol } => {
                ExError::new(ExErrorKind::DuplicateSymbol)
                    .with_symbol(symbol)
                    .with_message(message)
            }
            TokenListError::UnknownClassification { .. } => {
                ExError::new(ExErrorKind::InvalidState).with_message(message)
            }
        }
    }
}
