//! Layout errors

/// Errors raised when layout constants are unusable
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A constant is out of range
    #[error("invalid layout constant {name}: {reason}")]
    InvalidConstant {
        /// Dotted constant name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
