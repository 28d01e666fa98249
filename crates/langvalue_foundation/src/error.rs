//! Error types for `LangValue` coercions.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

use crate::types::Type;

/// Raised when an operation needs one variant and the value holds another.
///
/// This is the only error the value layer produces. Accessors and table
/// operations return it to the caller; the folds in `langvalue_stdlib`
/// skip over it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("coercion error: expected {expected}, got {actual}{}", operation_suffix(.operation))]
pub struct CoercionError {
    /// The type the operation required.
    pub expected: Type,
    /// The type actually encountered.
    pub actual: Type,
    /// The operation that attempted the coercion, if known.
    pub operation: Option<&'static str>,
}

impl CoercionError {
    /// Creates a new coercion error.
    #[must_use]
    pub const fn new(expected: Type, actual: Type) -> Self {
        Self {
            expected,
            actual,
            operation: None,
        }
    }

    /// Records which operation attempted the coercion.
    #[must_use]
    pub const fn in_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }
}

#[allow(clippy::ref_option_ref)]
fn operation_suffix(operation: &Option<&'static str>) -> String {
    operation.map(|op| format!(" in {op}")).unwrap_or_default()
}
