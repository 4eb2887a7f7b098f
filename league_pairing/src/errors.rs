//! Error types for bracket generation and match history validation.

use thiserror::Error;

use crate::swiss::models::ParticipantId;

/// Result type for pairing operations
pub type PairingResult<T> = Result<T, PairingError>;

/// Pairing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// Caller supplied an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Match record references an ID missing from the participant list
    #[error("Match record #{index} references unknown participant: {id}")]
    UnknownParticipant { index: usize, id: ParticipantId },

    /// Participant list contains the same ID twice
    #[error("Duplicate participant ID: {0}")]
    DuplicateParticipant(ParticipantId),

    /// Match record flags contradict each other
    #[error("Malformed match record #{index}: {reason}")]
    MalformedMatch { index: usize, reason: String },

    /// Value is not a non-negative multiple of 0.5
    #[error("Invalid points value: {0}")]
    InvalidPoints(String),
}

impl PairingError {
    pub(crate) fn malformed(index: usize, reason: &str) -> Self {
        Self::MalformedMatch {
            index,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PairingError::InvalidArgument("at least 2 participants are required".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: at least 2 participants are required"
        );
    }

    #[test]
    fn test_malformed_helper() {
        let err = PairingError::malformed(3, "draw with a winner");
        assert_eq!(
            err,
            PairingError::MalformedMatch {
                index: 3,
                reason: "draw with a winner".to_string()
            }
        );
        assert_eq!(err.to_string(), "Malformed match record #3: draw with a winner");
    }
}
