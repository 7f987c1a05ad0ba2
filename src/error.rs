use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            104 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn missing_location_error() -> Error {
    Error {
        code: 102,
        message: "required location is not set".into(),
    }
}

pub fn invalid_argument_error() -> Error {
    Error {
        code: 103,
        message: "invalid argument".into(),
    }
}

pub fn driver_not_found_error() -> Error {
    Error {
        code: 104,
        message: "driver not found".into(),
    }
}

pub fn invalid_time_format_error() -> Error {
    Error {
        code: 105,
        message: "invalid time format, expected HH:MM".into(),
    }
}

pub fn duplicate_user_error() -> Error {
    Error {
        code: 106,
        message: "username is already taken".into(),
    }
}

pub fn geocoding_error() -> Error {
    Error {
        code: 107,
        message: "could not geocode location name".into(),
    }
}
