//! Structural violations reported by lenses.
//!
//! A Lens asserts that its focus exists. When it does not, the caller's
//! assumption about the data was wrong; that is reported as an
//! [`OpticError`], never as an empty result. Prism misses are not errors and
//! never produce this type.

/// A Lens contract violation.
///
/// # Examples
///
/// ```rust
/// use monoptic::optics::OpticError;
///
/// let error = OpticError::MissingKey { key: "email".to_string() };
/// assert_eq!(
///     error.to_string(),
///     "lens contract violated: required key `email` is missing"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpticError {
    /// A required key is absent from a keyed structure.
    MissingKey {
        /// The key that was looked up.
        key: String,
    },
    /// A key was looked up in a value that is not a keyed structure.
    NotAStructure {
        /// The key that was looked up.
        key: String,
        /// The shape of the value that was found instead.
        found: &'static str,
    },
}

impl OpticError {
    /// Returns the key whose lookup failed.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } | Self::NotAStructure { key, .. } => key,
        }
    }
}

impl std::fmt::Display for OpticError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey { key } => write!(
                formatter,
                "lens contract violated: required key `{key}` is missing"
            ),
            Self::NotAStructure { key, found } => write!(
                formatter,
                "lens contract violated: cannot read key `{key}` from a value of kind `{found}`"
            ),
        }
    }
}

impl std::error::Error for OpticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_structure_display() {
        let error = OpticError::NotAStructure {
            key: "amount".to_string(),
            found: "int",
        };
        assert_eq!(
            error.to_string(),
            "lens contract violated: cannot read key `amount` from a value of kind `int`"
        );
        assert_eq!(error.key(), "amount");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_error: &E) {}
        assert_error(&OpticError::MissingKey { key: "k".to_string() });
    }
}
