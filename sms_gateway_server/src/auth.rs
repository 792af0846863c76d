//! Identity extraction.
//!
//! Authentication itself is the job of an upstream collaborator (a reverse proxy or API gateway) that verifies
//! the caller and attaches their identifier to the request. This module only lifts that identifier off the
//! request; requests that arrive without one are rejected with 401 before any handler logic runs.
use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use log::debug;
use sms_gateway_engine::db_types::UserId;

use crate::errors::ServerError;

/// The header the authentication collaborator uses to attach the caller's identifier.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated (but not yet authorized) caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    pub user_id: UserId,
}

impl FromRequest for RequestIdentity {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(UserId::from);
        ready(match user_id {
            Some(user_id) => Ok(Self { user_id }),
            None => {
                debug!("🔐️ Request arrived without an authenticated identity");
                Err(ServerError::Unauthenticated)
            },
        })
    }
}
