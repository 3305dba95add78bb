// src/shared/api/admin_guard.rs
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiReply;

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Shared static passphrase for the mutating content routes. `None` leaves
/// the gate open (development default).
#[derive(Clone)]
pub struct AdminTokenConfig(pub Option<String>);

/// Extractor placed on POST/PUT/DELETE content handlers. Read routes and the
/// contact relay never use it.
#[derive(Debug, Clone)]
pub struct AdminAccess;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminAccess {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let expected = req
            .app_data::<web::Data<AdminTokenConfig>>()
            .and_then(|config| config.0.clone());

        let Some(expected) = expected else {
            return ready(Ok(AdminAccess));
        };

        match req
            .headers()
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(token) if token == expected => ready(Ok(AdminAccess)),
            _ => ready(Err(create_api_error(ApiReply::unauthorized(
                "Invalid admin token",
            )))),
        }
    }
}
