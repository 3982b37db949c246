use axum::http::StatusCode;
use thiserror::Error;

/// Startup failures. Any of these stops the process before the server binds.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Gemini API key not found. Set {0} in the environment or in a .env file")]
    MissingCredential(&'static str),

    #[error("Gemini API key is malformed: {0}")]
    InvalidCredential(String),

    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to configure Gemini client: {0}")]
    Client(String),
}

/// Anything that goes wrong during a call to the remote model.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to Gemini failed: {0}")]
    Transport(String),

    #[error("Gemini returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("could not parse Gemini response: {0}")]
    MalformedResponse(String),

    #[error("prompt was blocked by Gemini ({0})")]
    Blocked(String),

    #[error("Gemini returned no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for InferenceError {
    fn from(error: reqwest::Error) -> Self {
        InferenceError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for InferenceError {
    fn from(error: serde_json::Error) -> Self {
        InferenceError::MalformedResponse(error.to_string())
    }
}

/// Problems with an uploaded file, reported before any model call.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No image was uploaded. Choose a jpg, jpeg or png file")]
    MissingImage,

    #[error("Unsupported file type {0:?}. Upload a jpg, jpeg or png image")]
    UnsupportedType(String),

    #[error("The uploaded file could not be read as an image: {0}")]
    Decode(String),

    #[error("Upload failed: {message}")]
    Upload { status: StatusCode, message: String },
}

impl InputError {
    pub fn status(&self) -> StatusCode {
        match self {
            InputError::Upload { status, .. } => *status,
            InputError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            InputError::MissingImage | InputError::Decode(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<image::ImageError> for InputError {
    fn from(error: image::ImageError) -> Self {
        InputError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_keeps_underlying_message() {
        let err = InferenceError::Service {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini returned 403: API key not valid");
    }

    #[test]
    fn input_error_statuses() {
        assert_eq!(InputError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            InputError::UnsupportedType("gif".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        let too_big = InputError::Upload {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".into(),
        };
        assert_eq!(too_big.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let msg = ConfigurationError::MissingCredential("GEMINI_API_KEY").to_string();
        assert!(msg.contains("GEMINI_API_KEY"));
    }
}
