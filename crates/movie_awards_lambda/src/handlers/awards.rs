use movie_awards_core::contract::{parse_lookup_params, AwardRecord};
use movie_awards_core::lookup::{classify_lookup, LookupOutcome};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::adapters::store::AwardsStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Handler configuration. The minimum-awards filter is a deployment toggle,
/// not a separate handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardsHandlerConfig {
    pub min_filter_enabled: bool,
}

/// Answers "what awards has this movie received from this award body".
///
/// Consumes a raw API Gateway proxy event, validates the path parameters,
/// issues one composite-key query against the store, and maps the outcome to
/// a response. Never fails upward: every failure becomes a response.
pub async fn handle_awards_event(
    event: Value,
    config: AwardsHandlerConfig,
    store: &dyn AwardsStore,
) -> ApiGatewayResponse {
    info!(event = %event, "received awards lookup request");

    let award_body = path_parameter(&event, "awardBody");
    let movie_id = path_parameter(&event, "movieId");
    // The no-filter variant never reads the query string.
    let min_awards = if config.min_filter_enabled {
        query_parameter(&event, "min")
    } else {
        None
    };

    let params = match parse_lookup_params(
        award_body.as_deref(),
        movie_id.as_deref(),
        min_awards.as_deref(),
    ) {
        Ok(value) => value,
        Err(param_error) => {
            warn!(error = %param_error, "rejecting awards lookup request");
            return message_response(400, param_error.message());
        }
    };

    let records = match store
        .query_awards(params.movie_id, &params.award_body)
        .await
    {
        Ok(value) => value,
        Err(store_error) => {
            error!(
                error = %store_error,
                movie_id = params.movie_id,
                award_body = %params.award_body,
                "awards lookup failed"
            );
            return error_response(500, "An error occurred while processing the request.");
        }
    };

    match classify_lookup(records, params.min_awards) {
        LookupOutcome::NoMatches => {
            message_response(404, "No awards found for the specified movie and award body.")
        }
        LookupOutcome::FilterExhausted => message_response(400, "Request failed"),
        LookupOutcome::Matches(records) => data_response(&records),
    }
}

fn path_parameter(event: &Value, name: &str) -> Option<String> {
    event
        .get("pathParameters")?
        .get(name)?
        .as_str()
        .map(str::to_string)
}

fn query_parameter(event: &Value, name: &str) -> Option<String> {
    event
        .get("queryStringParameters")?
        .get(name)?
        .as_str()
        .map(str::to_string)
}

fn json_headers() -> Value {
    json!({"Content-Type": "application/json"})
}

fn message_response(status_code: u16, message: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json_headers(),
        body: json!({"message": message}).to_string(),
    }
}

fn error_response(status_code: u16, error: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json_headers(),
        body: json!({"error": error}).to_string(),
    }
}

fn data_response(records: &[AwardRecord]) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json_headers(),
        body: serde_json::to_string(&json!({"data": records}))
            .expect("response payload should serialize"),
    }
}
