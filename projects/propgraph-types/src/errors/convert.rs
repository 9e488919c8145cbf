use super::*;

impl From<PropErrorKind> for PropError {
    fn from(value: PropErrorKind) -> Self {
        Self { kind: Box::new(value) }
    }
}

impl From<std::io::Error> for PropError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for PropError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", error))
    }
}
