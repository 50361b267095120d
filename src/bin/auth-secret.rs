//! Simple-response Lambda authorizer for the admin HTTP API.
//!
//! Allows a request when its `x-amz-secret` header equals `SECRET_VALUE`.

use chat_gateway::config::{load_authorizer_config, loader::env_lookup};
use chat_gateway::events::SimpleAuthorizerRequest;
use chat_gateway::observability::init_lambda_logging;
use chat_gateway::security::SecretHeaderAuthorizer;
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_lambda_logging();

    let config = load_authorizer_config(env_lookup)?;
    let authorizer = SecretHeaderAuthorizer::from_config(&config);
    if !authorizer.has_secret() {
        tracing::warn!("SECRET_VALUE is not set; every request will be denied");
    }
    tracing::info!(header = %authorizer.header_name(), "Secret header authorizer ready");

    let authorizer = &authorizer;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<SimpleAuthorizerRequest>| async move {
            Ok::<_, Error>(authorizer.authorize(&event.payload))
        },
    ))
    .await
}
