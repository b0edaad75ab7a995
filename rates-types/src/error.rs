//! Error types for the FX rates service.

use crate::dto::ErrorBody;

/// Domain-level errors (invalid values at construction time).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),
}

/// Application-level errors (for HTTP responses).
///
/// Each variant carries a stable machine code and maps cleanly to an
/// HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Exchange rate unavailable for {resource}. Try again later.")]
    RateUnavailable { resource: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::RateUnavailable { .. } => "RATE_UNAVAILABLE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> u16 {
        match self {
            AppError::RateUnavailable { .. } => 503,
            AppError::Validation(_) => 400,
            AppError::Internal(_) => 500,
        }
    }

    /// Renders the error as the uniform failure payload.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
            code: self.code().to_string(),
            status: self.status(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_unavailable_maps_to_503() {
        let err = AppError::RateUnavailable {
            resource: "/convert".into(),
        };
        assert_eq!(err.status(), 503);
        assert_eq!(err.code(), "RATE_UNAVAILABLE");
        assert!(err.to_string().contains("/convert"));
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("amount must be positive".into());
        assert_eq!(err.status(), 400);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_error_body_echoes_status() {
        let body = AppError::RateUnavailable {
            resource: "/convert".into(),
        }
        .to_body();
        assert_eq!(body.status, 503);
        assert_eq!(body.code, "RATE_UNAVAILABLE");
    }
}
