use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use movie_awards_core::contract::AwardRecord;
use serde_json::{Map, Number, Value};

use crate::adapters::store::AwardsStore;

/// DynamoDB-backed awards store.
///
/// Holds the process-lifetime SDK client; constructed once in `main` and
/// shared across invocations. Retry and timeout policy is whatever the SDK
/// defaults provide.
#[derive(Debug, Clone)]
pub struct DynamoDbAwardsStore {
    client: Client,
    table_name: String,
}

impl DynamoDbAwardsStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl AwardsStore for DynamoDbAwardsStore {
    async fn query_awards(
        &self,
        movie_id: i64,
        award_body: &str,
    ) -> Result<Vec<AwardRecord>, String> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("movieId = :m AND awardBody = :a")
            .expression_attribute_values(":m", AttributeValue::N(movie_id.to_string()))
            .expression_attribute_values(":a", AttributeValue::S(award_body.to_string()))
            .send()
            .await
            .map_err(|error| format!("awards table query failed: {error}"))?;

        output.items().iter().map(record_from_item).collect()
    }
}

/// Converts one stored item into the typed record contract.
///
/// The three key attributes are required and type-checked here, at the store
/// boundary; everything else converts to JSON and passes through opaquely.
fn record_from_item(item: &HashMap<String, AttributeValue>) -> Result<AwardRecord, String> {
    let movie_id = number_attribute(item, "movieId")?
        .parse::<i64>()
        .map_err(|_| "attribute 'movieId' is not a valid integer".to_string())?;
    let award_body = string_attribute(item, "awardBody")?.to_string();
    let num_awards = number_attribute(item, "numAwards")?
        .parse::<u64>()
        .map_err(|_| "attribute 'numAwards' is not a non-negative integer".to_string())?;

    let mut extra = Map::new();
    for (name, value) in item {
        if matches!(name.as_str(), "movieId" | "awardBody" | "numAwards") {
            continue;
        }
        if let Some(json) = attribute_to_json(value) {
            extra.insert(name.clone(), json);
        }
    }

    Ok(AwardRecord {
        movie_id,
        award_body,
        num_awards,
        extra,
    })
}

fn string_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, String> {
    match item.get(name) {
        Some(AttributeValue::S(text)) => Ok(text),
        Some(_) => Err(format!("attribute '{name}' has an unexpected type")),
        None => Err(format!("awards item is missing required attribute '{name}'")),
    }
}

fn number_attribute<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, String> {
    match item.get(name) {
        Some(AttributeValue::N(text)) => Ok(text),
        Some(_) => Err(format!("attribute '{name}' has an unexpected type")),
        None => Err(format!("awards item is missing required attribute '{name}'")),
    }
}

fn attribute_to_json(value: &AttributeValue) -> Option<Value> {
    match value {
        AttributeValue::S(text) => Some(Value::String(text.clone())),
        AttributeValue::N(text) => Some(number_to_json(text)),
        AttributeValue::Bool(flag) => Some(Value::Bool(*flag)),
        AttributeValue::Null(_) => Some(Value::Null),
        AttributeValue::L(items) => Some(Value::Array(
            items.iter().filter_map(attribute_to_json).collect(),
        )),
        AttributeValue::M(entries) => {
            let mut object = Map::new();
            for (name, entry) in entries {
                if let Some(json) = attribute_to_json(entry) {
                    object.insert(name.clone(), json);
                }
            }
            Some(Value::Object(object))
        }
        // Binary and set attributes have no JSON counterpart in the response.
        _ => None,
    }
}

fn number_to_json(text: &str) -> Value {
    if let Ok(value) = text.parse::<i64>() {
        return Value::from(value);
    }
    if let Ok(value) = text.parse::<f64>() {
        if let Some(number) = Number::from_f64(value) {
            return Value::Number(number);
        }
    }
    Value::String(text.to_string())
}
