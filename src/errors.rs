use std::fmt::Display;

#[derive(Debug)]
pub enum BadgeError {
    IoError(std::io::Error),
    Json(serde_json::Error),
    MissingField(String),
    OutOfRange(f64),
}

impl std::error::Error for BadgeError {}

impl Display for BadgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeError::IoError(io_error) => write!(f, "Unexpected error: {}", io_error),
            BadgeError::Json(error) => write!(f, "Failed to parse coverage JSON: {}", error),
            BadgeError::MissingField(key) => {
                write!(f, "Missing expected key in coverage JSON: '{}'", key)
            }
            BadgeError::OutOfRange(value) => write!(
                f,
                "Coverage percentage {} is out of valid range 0-100",
                value
            ),
        }
    }
}

impl From<std::io::Error> for BadgeError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<serde_json::Error> for BadgeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
