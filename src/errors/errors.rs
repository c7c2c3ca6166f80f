use thiserror::Error;

/// Errors produced by the AST layer.
#[derive(Error, Debug)]
pub enum AstError {
    #[error("module {module:?} not found in assembly")]
    ModuleNotFound { module: String },
    #[error("failed to write tree dump: {0}")]
    DumpIo(#[from] std::io::Error),
}

impl AstError {
    /// Returns the error name, used by diagnostic reporters.
    pub fn get_error_name(&self) -> &str {
        match self {
            AstError::ModuleNotFound { .. } => "ModuleNotFound",
            AstError::DumpIo(..) => "DumpIo",
        }
    }
}
