use thiserror::Error;

/// HUD rendering errors
#[derive(Error, Debug)]
pub enum HudError {
    #[error("Invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("Write outside drawable area at x={x}, y={y}")]
    OutOfBounds { x: u16, y: u16 },

    #[error("Terminal I/O failed")]
    Io(#[from] std::io::Error),
}

impl HudError {
    pub(crate) fn invalid(name: &'static str, value: i64, reason: &'static str) -> Self {
        HudError::InvalidArgument { name, value, reason }
    }
}

/// Result type for HUD operations
pub type HudResult<T> = Result<T, HudError>;
