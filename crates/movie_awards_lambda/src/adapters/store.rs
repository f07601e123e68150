use async_trait::async_trait;
use movie_awards_core::contract::AwardRecord;

/// Read-only seam over the awards table.
///
/// The handler only ever issues one composite-key query per invocation, so
/// this is the whole surface. Implementations must be safe to share across
/// concurrent invocations.
#[async_trait]
pub trait AwardsStore: Send + Sync {
    async fn query_awards(
        &self,
        movie_id: i64,
        award_body: &str,
    ) -> Result<Vec<AwardRecord>, String>;
}
