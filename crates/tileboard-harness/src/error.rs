use std::path::PathBuf;

use thiserror::Error;
use tileboard_layout::BoardError;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl HarnessError {
    /// Process exit status: 2 for bad input, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Json(_) | Self::InvalidArgument { .. } => 2,
            Self::Board(BoardError::InvalidConfig { .. } | BoardError::DuplicatePanel { .. }) => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HarnessError;
    use tileboard_core::PanelId;
    use tileboard_layout::BoardError;

    #[test]
    fn invalid_input_exits_with_two() {
        assert_eq!(HarnessError::invalid("width must be positive").exit_code(), 2);
        let duplicate = HarnessError::from(BoardError::DuplicatePanel {
            panel: PanelId::new(3),
        });
        assert_eq!(duplicate.exit_code(), 2);
    }

    #[test]
    fn unknown_panel_is_a_runtime_failure() {
        let error = HarnessError::from(BoardError::UnknownPanel {
            panel: PanelId::new(9),
        });
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "board error: panel 9 is not on the board");
    }

    #[test]
    fn exhausted_ids_is_a_runtime_failure() {
        let error = HarnessError::from(BoardError::IdsExhausted);
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "board error: no panel id left to allocate");
    }
}
