use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No internet connection")]
    NoConnection,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load data: {0}")]
    LoadFailed(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// Cuts on a char boundary; bodies are server-controlled and may
    /// contain multibyte text (accented Spanish error messages).
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::LoadFailed(format!("Status {}: {}", status, truncated)),
        }
    }

    /// Spanish message shown to the user when a load fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::NoConnection => "Sin conexión a internet",
            ApiError::ServerError(_) => "Error del servidor",
            ApiError::NotFound(_) => "Datos no encontrados",
            ApiError::LoadFailed(_) => "Error al cargar los datos",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ApiError::NoConnection
        } else {
            ApiError::LoadFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, ""),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, ""),
            ApiError::ServerError(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            ApiError::LoadFailed(_)
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ApiError::NoConnection.user_message(), "Sin conexión a internet");
        assert_eq!(
            ApiError::ServerError(String::new()).user_message(),
            "Error del servidor"
        );
        assert_eq!(
            ApiError::NotFound(String::new()).user_message(),
            "Datos no encontrados"
        );
        assert_eq!(
            ApiError::LoadFailed(String::new()).user_message(),
            "Error al cargar los datos"
        );
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(600);
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &long);
        match err {
            ApiError::ServerError(body) => {
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_truncate_body_multibyte_at_limit() {
        // 'ó' is two bytes and straddles the truncation limit; the cut
        // must land on a char boundary instead of panicking.
        let mut long = "x".repeat(MAX_ERROR_BODY_LENGTH - 1);
        long.push('ó');
        long.push_str(&"x".repeat(100));

        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &long);
        match err {
            ApiError::ServerError(body) => {
                assert!(body.contains("truncated"));
                assert!(!body.contains('ó'));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
