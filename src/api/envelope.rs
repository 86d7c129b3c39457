use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// The `{data, message, status}` wrapper every endpoint returns.
///
/// `data` carries the payload on reads and the first validation error string
/// on failures; write successes omit it entirely. `status` is the boolean
/// success flag, independent of the HTTP status code.
#[derive(Debug)]
pub struct Envelope {
    status_code: StatusCode,
    data: Option<Value>,
    message: String,
    status: bool,
}

pub type HandlerResult = Result<Envelope, crate::error::ApiError>;

impl Envelope {
    /// 200 read success: `{data, message: "get the record", status: true}`.
    pub fn record<T: Serialize>(data: T) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: Some(serialize(data)),
            message: "get the record".to_string(),
            status: true,
        }
    }

    /// The fixed 404 body: `{data: "empty", message: "Not Found", status: false}`.
    pub fn not_found() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            data: Some(json!("empty")),
            message: "Not Found".to_string(),
            status: false,
        }
    }

    /// 404 used by update handlers when the keyed row is missing.
    pub fn update_target_missing() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            data: Some(json!("update fail")),
            message: "Id does not match".to_string(),
            status: false,
        }
    }

    /// 404 used by remove handlers when the keyed row is missing.
    pub fn remove_target_missing() -> Self {
        Self {
            status_code: StatusCode::NOT_FOUND,
            data: Some(json!("no data found")),
            message: "Id does not match /  no records found".to_string(),
            status: false,
        }
    }

    /// 400 validation failure carrying only the first accumulated message.
    pub fn validation_failed(first_message: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            data: Some(Value::String(first_message.into())),
            message: message.into(),
            status: false,
        }
    }

    /// 201 write success; the created entity is not echoed back.
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            data: None,
            message: message.into(),
            status: true,
        }
    }

    /// 200 write success without a payload.
    pub fn updated(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: None,
            message: message.into(),
            status: true,
        }
    }

    /// 204 delete success. No body goes over the wire for 204.
    pub fn deleted() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            data: None,
            message: "delete successfully".to_string(),
            status: true,
        }
    }

    /// 200 success with an explicit payload and message (login).
    pub fn success(data: Value, message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: Some(data),
            message: message.into(),
            status: true,
        }
    }

    /// Failure with an explicit status, payload and message.
    pub fn failure(status_code: StatusCode, data: Value, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: Some(data),
            message: message.into(),
            status: false,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> Value {
        let mut body = json!({
            "message": self.message,
            "status": self.status,
        });
        if let Some(data) = &self.data {
            body["data"] = data.clone();
        }
        body
    }
}

fn serialize<T: Serialize>(data: T) -> Value {
    serde_json::to_value(&data).unwrap_or_else(|e| {
        tracing::error!("failed to serialize response data: {}", e);
        Value::Null
    })
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        if self.status_code == StatusCode::NO_CONTENT {
            return self.status_code.into_response();
        }
        let body = self.body();
        (self.status_code, Json(body)).into_response()
    }
}
