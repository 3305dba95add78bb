// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'a str,
    error: &'a str,
}

#[derive(Serialize)]
struct DeletedBody<'a, T: Serialize> {
    message: &'a str,
    deleted: T,
}

/// Response constructors for the wire contract: success bodies are the raw
/// documents, error bodies are `{"message": ...}`.
pub struct ApiReply;

impl ApiReply {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn message(text: &str) -> HttpResponse {
        HttpResponse::Ok().json(MessageBody { message: text })
    }

    pub fn deleted<T: Serialize>(text: &str, snapshot: T) -> HttpResponse {
        HttpResponse::Ok().json(DeletedBody {
            message: text,
            deleted: snapshot,
        })
    }

    pub fn error(status: StatusCode, text: &str) -> HttpResponse {
        HttpResponse::build(status).json(MessageBody { message: text })
    }

    pub fn bad_request(text: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, text)
    }

    /// Schema-level rejection; keeps the validator's detail in a separate
    /// `error` key next to the fixed human message.
    pub fn validation(detail: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ValidationBody {
            message: "Validation error",
            error: detail,
        })
    }

    pub fn not_found(text: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, text)
    }

    pub fn unauthorized(text: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, text)
    }

    pub fn internal_error(text: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, text)
    }
}
