//! Policy-document Lambda authorizer for the user API.
//!
//! Defaults to the permissive variant, which allows every request.

use chat_gateway::config::{load_authorizer_config, loader::env_lookup};
use chat_gateway::events::PolicyAuthorizerRequest;
use chat_gateway::observability::init_lambda_logging;
use chat_gateway::security::PolicyAuthorizer;
use lambda_runtime::{service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_lambda_logging();

    let config = load_authorizer_config(env_lookup)?;
    let authorizer = PolicyAuthorizer::from_config(&config);
    if authorizer.is_permissive() {
        tracing::warn!("Policy authorizer is permissive: all requests are allowed");
    }
    tracing::info!(mode = %authorizer.mode(), principal_id = %config.principal_id, "Policy authorizer ready");

    let authorizer = &authorizer;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<PolicyAuthorizerRequest>| async move {
            Ok::<_, Error>(authorizer.authorize(&event.payload))
        },
    ))
    .await
}
