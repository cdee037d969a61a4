use std::str::FromStr;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use guildhall_core::AppError;
use guildhall_domain::UserId;

use crate::error::ApiResult;

/// Header carrying the authenticated member id, set by the upstream auth gateway.
pub const ACTING_MEMBER_HEADER: &str = "x-member-id";

/// Member on whose behalf the request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingMember(pub UserId);

pub async fn require_acting_member(mut request: Request, next: Next) -> ApiResult<Response> {
    let header_value = request
        .headers()
        .get(ACTING_MEMBER_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    let member_id = UserId::from_str(header_value)
        .map_err(|_| AppError::Unauthorized("invalid member identity".to_owned()))?;

    request.extensions_mut().insert(ActingMember(member_id));
    Ok(next.run(request).await)
}
