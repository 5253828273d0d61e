use aws_lambda_wsgi::config::AdapterConfig;
use aws_lambda_wsgi::handler::function_handler;
use aws_lambda_wsgi::loader::{AppOptions, AppRegistry};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = AdapterConfig::from_env()?;
    let app = AppRegistry::with_builtin().load(
        &config.app,
        &AppOptions {
            debug: config.debug,
        },
    )?;
    let app = app.as_ref();
    let translator = &config.translator;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        function_handler(app, translator, event)
    }))
    .await
}
