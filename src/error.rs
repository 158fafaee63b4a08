use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    /// A deal was requested from a deck with no cards left.
    #[error("deal requested from an empty deck")]
    EmptyDeck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RoundError::EmptyDeck.to_string(),
            "deal requested from an empty deck"
        );
    }
}
