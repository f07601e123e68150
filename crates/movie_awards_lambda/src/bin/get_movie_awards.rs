use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use movie_awards_lambda::adapters::dynamodb::DynamoDbAwardsStore;
use movie_awards_lambda::handlers::awards::{handle_awards_event, AwardsHandlerConfig};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let table_name = std::env::var("AWARDS_TABLE_NAME")?;
    let min_filter_enabled = std::env::var("MIN_AWARDS_FILTER_ENABLED")
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false);

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Ok(region) = std::env::var("REGION") {
        loader = loader.region(Region::new(region));
    }
    let config = loader.load().await;

    // One client for the process lifetime, shared across invocations.
    let store = DynamoDbAwardsStore::new(aws_sdk_dynamodb::Client::new(&config), table_name);
    let handler_config = AwardsHandlerConfig { min_filter_enabled };

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        let store = &store;
        async move {
            Ok::<_, Error>(handle_awards_event(event.payload, handler_config, store).await)
        }
    }))
    .await
}
