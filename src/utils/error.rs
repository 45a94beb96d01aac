use thiserror::Error;

#[derive(Error, Debug)]
pub enum CageError {
    #[error("Cage is empty")]
    EmptyCage,

    #[error("Unknown bird kind: {value}")]
    UnknownKind { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Roster parsing error: {message}")]
    RosterParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CageError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CageError::EmptyCage => "The cage has no birds in it".to_string(),
            CageError::UnknownKind { value } => format!("'{}' is not a known bird", value),
            CageError::IoError(e) => format!("Could not read input: {}", e),
            CageError::SerializationError(e) => format!("Could not encode output: {}", e),
            CageError::RosterParseError { message } => {
                format!("The roster file is not valid: {}", message)
            }
            CageError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CageError::EmptyCage => "Put at least one bird into the cage first",
            CageError::UnknownKind { .. } => "Use one of: bird, sparrow, eagle",
            CageError::IoError(_) => "Check that the roster path exists and is readable",
            CageError::SerializationError(_) => "Retry with --format text",
            CageError::RosterParseError { .. } => {
                "Each [[birds]] entry needs a `kind` key"
            }
            CageError::InvalidConfigValueError { .. } => "Fix the highlighted field and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, CageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cage_message() {
        let err = CageError::EmptyCage;
        assert_eq!(err.to_string(), "Cage is empty");
        assert!(err.user_friendly_message().contains("no birds"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CageError = io.into();
        assert!(matches!(err, CageError::IoError(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
