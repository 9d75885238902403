use forwarder::{action::DeleteObject, function_handler, Config, Gateway};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::from_env()?;
    log::info!("delete_object forwarding to {}", config.base_url);
    let gateway = Gateway::new(config)?;

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&gateway, &DeleteObject, event)
    }))
    .await
}
