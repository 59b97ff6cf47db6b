use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    /// The board document could not be parsed at all.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// An action referenced a list, card or tag that does not exist.
    #[error("Missing target: {0}")]
    MissingTarget(String),

    /// Required input was empty or missing.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KanbanError {
    /// Whether the failure is shown to the user as a notice, as opposed to
    /// only being written to the diagnostic log.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            KanbanError::MalformedDocument(_) | KanbanError::Validation(_)
        )
    }

    pub fn missing_list(id: impl std::fmt::Display) -> Self {
        KanbanError::MissingTarget(format!("list {}", id))
    }

    pub fn missing_card(id: impl std::fmt::Display) -> Self {
        KanbanError::MissingTarget(format!("card {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_split() {
        assert!(KanbanError::MalformedDocument("x".into()).is_user_facing());
        assert!(KanbanError::Validation("x".into()).is_user_facing());
        assert!(!KanbanError::missing_card("abc").is_user_facing());
        assert!(!KanbanError::Internal("x".into()).is_user_facing());
    }

    #[test]
    fn test_missing_target_messages() {
        assert_eq!(
            KanbanError::missing_list("todo").to_string(),
            "Missing target: list todo"
        );
    }
}
