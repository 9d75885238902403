use forwarder::{action::SendContent, function_handler, Config, Gateway};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::from_env()?;
    log::info!("send_content forwarding to {}", config.base_url);
    let gateway = Gateway::new(config)?;

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(&gateway, &SendContent, event)
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use forwarder::action::Action;

    #[test]
    fn accepts_sample_event() {
        let event = serde_json::from_str::<Value>(include_str!("../tests/data/event.json"))
            .expect("failed to deserialize sample event");
        SendContent.prepare(event).expect("sample event should be accepted");
    }
}
