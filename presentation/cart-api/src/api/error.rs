use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body rendered by the storefront UI as a transient notification.
/// `message` carries an i18n code such as `cart.out_of_stock`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
