/// Errors raised by the external product service adapter.
/// Use code-style identifiers for all error variants for i18n compatibility;
/// the payload carries the diagnostic detail that ends up in the logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("service.transport: {0}")]
    Transport(String),
    #[error("service.status: {0}")]
    Status(u16),
    #[error("service.decode: {0}")]
    Decode(String),
    #[error("service.invalid_url: {0}")]
    InvalidUrl(String),
}

impl ServiceError {
    pub fn transport(detail: impl Into<String>) -> Self {
        ServiceError::Transport(detail.into())
    }
    pub fn status(code: u16) -> Self {
        ServiceError::Status(code)
    }
    pub fn decode(detail: impl Into<String>) -> Self {
        ServiceError::Decode(detail.into())
    }

    /// True when the service answered with 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Status(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_not_found_status() {
        assert!(ServiceError::status(404).is_not_found());
        assert!(!ServiceError::status(500).is_not_found());
        assert!(!ServiceError::transport("connection refused").is_not_found());
    }

    #[test]
    fn should_keep_detail_in_display() {
        let err = ServiceError::decode("missing field `price`");
        assert_eq!(err.to_string(), "service.decode: missing field `price`");
    }
}
