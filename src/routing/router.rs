//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the route table
//! - Log the inbound request before dispatch
//! - Look up the handler for the request's route key
//! - Return the handler result, or an explicit 404
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(1) lookup via HashMap on the parsed key
//! - Handler errors are propagated unchanged

use std::collections::HashMap;

use http::Method;

use crate::events::{HttpRequest, HttpResponse};
use crate::routing::handlers;
use crate::routing::sink::{RequestSink, TracingSink};
use crate::routing::RouteKey;

/// Error type returned by route handlers.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// A registered route handler.
pub type Handler = fn(&HttpRequest, &InvocationContext) -> Result<HttpResponse, HandlerError>;

/// Per-invocation metadata handed to handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_arn: String,
}

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        Self {
            request_id: ctx.request_id.clone(),
            function_arn: ctx.invoked_function_arn.clone(),
        }
    }
}

/// Builder for [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
    routes: HashMap<RouteKey, Handler>,
}

impl RouterBuilder {
    /// Register a handler. A later registration for the same key replaces
    /// the earlier one.
    pub fn route(mut self, method: Method, path_template: &str, handler: Handler) -> Self {
        self.routes.insert(RouteKey::new(method, path_template), handler);
        self
    }

    pub fn build(self) -> Router {
        Router {
            routes: self.routes,
        }
    }
}

/// Immutable route table.
#[derive(Clone)]
pub struct Router {
    routes: HashMap<RouteKey, Handler>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// The chat API route table.
    pub fn chat() -> Self {
        Self::builder()
            .route(Method::GET, "/chat", handlers::list_chats)
            .route(Method::GET, "/chat/{chat_id}/message", handlers::list_messages)
            .build()
    }

    /// Find the handler for a raw gateway route key.
    pub fn lookup(&self, route_key: &str) -> Option<Handler> {
        let key = RouteKey::parse(route_key)?;
        self.routes.get(&key).copied()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Logs each request and dispatches it through a [`Router`].
pub struct Dispatcher<S = TracingSink> {
    router: Router,
    sink: S,
}

impl Dispatcher<TracingSink> {
    pub fn new(router: Router) -> Self {
        Self::with_sink(router, TracingSink::default())
    }
}

impl<S: RequestSink> Dispatcher<S> {
    pub fn with_sink(router: Router, sink: S) -> Self {
        Self { router, sink }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn dispatch(
        &self,
        request: &HttpRequest,
        ctx: &InvocationContext,
    ) -> Result<HttpResponse, HandlerError> {
        let span = tracing::info_span!("dispatch", request_id = %ctx.request_id);
        let _enter = span.enter();

        if let Err(e) = self.sink.record(request) {
            tracing::error!(error = %e, "Failed to serialize request");
            return Ok(HttpResponse::internal_error());
        }

        match self.router.lookup(&request.route_key) {
            Some(handler) => handler(request, ctx),
            None => {
                tracing::debug!(route_key = %request.route_key, "No route matched");
                Ok(HttpResponse::not_found())
            }
        }
    }
}
