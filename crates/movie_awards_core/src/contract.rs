use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the awards table, typed at the store boundary.
///
/// The three named fields form the table contract; anything else the store
/// returns rides along opaquely in `extra` and serializes back out flattened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AwardRecord {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    #[serde(rename = "awardBody")]
    pub award_body: String,
    #[serde(rename = "numAwards")]
    pub num_awards: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Validated lookup parameters. `min_awards` is only ever populated when the
/// minimum-awards filter is enabled for the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupParams {
    pub movie_id: i64,
    pub award_body: String,
    pub min_awards: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    MissingPathParameters,
    InvalidMovieId,
    InvalidMinAwards,
}

impl ParamError {
    pub fn message(&self) -> &'static str {
        match self {
            ParamError::MissingPathParameters => "Missing required path parameters.",
            ParamError::InvalidMovieId => "Path parameter movieId must be an integer.",
            ParamError::InvalidMinAwards => "Query parameter min must be an integer.",
        }
    }
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParamError {}

/// Validates raw path/query parameters into [`LookupParams`].
///
/// Missing or empty path parameters fail before any numeric parsing so the
/// caller can refuse the request without touching the store.
pub fn parse_lookup_params(
    award_body: Option<&str>,
    movie_id: Option<&str>,
    min_awards: Option<&str>,
) -> Result<LookupParams, ParamError> {
    let award_body = match award_body {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ParamError::MissingPathParameters),
    };

    let movie_id = match movie_id {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ParamError::MissingPathParameters),
    };

    let movie_id = movie_id
        .parse::<i64>()
        .map_err(|_| ParamError::InvalidMovieId)?;

    let min_awards = match min_awards {
        Some(value) => Some(
            value
                .parse::<u64>()
                .map_err(|_| ParamError::InvalidMinAwards)?,
        ),
        None => None,
    };

    Ok(LookupParams {
        movie_id,
        award_body: award_body.to_string(),
        min_awards,
    })
}
