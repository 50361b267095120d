//! Chat API proxy integration.

use chat_gateway::events::HttpRequest;
use chat_gateway::observability::init_lambda_logging;
use chat_gateway::routing::{Dispatcher, InvocationContext, Router};
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_lambda_logging();

    let dispatcher = Dispatcher::new(Router::chat());
    tracing::info!(routes = dispatcher.router().route_count(), "Chat router ready");

    let dispatcher = &dispatcher;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<HttpRequest>| async move {
        let ctx = InvocationContext::from(&event.context);
        dispatcher.dispatch(&event.payload, &ctx)
    }))
    .await
}
