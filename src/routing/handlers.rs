//! Chat endpoints.
//!
//! Placeholders: each returns a fixed body regardless of input.

use crate::events::{HttpRequest, HttpResponse};
use crate::routing::{HandlerError, InvocationContext};

/// `GET /chat`
pub fn list_chats(
    _request: &HttpRequest,
    _ctx: &InvocationContext,
) -> Result<HttpResponse, HandlerError> {
    Ok(HttpResponse::text(200, "List of chats"))
}

/// `GET /chat/{chat_id}/message`
pub fn list_messages(
    _request: &HttpRequest,
    _ctx: &InvocationContext,
) -> Result<HttpResponse, HandlerError> {
    Ok(HttpResponse::text(200, "List of messages in chat"))
}
