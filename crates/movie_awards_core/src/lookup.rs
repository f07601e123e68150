use crate::contract::AwardRecord;

/// Result of classifying a store result set against the optional
/// minimum-awards filter.
///
/// `NoMatches` and `FilterExhausted` are deliberately distinct: the first
/// means the composite key had no rows at all, the second that rows existed
/// but none cleared the caller's threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    NoMatches,
    FilterExhausted,
    Matches(Vec<AwardRecord>),
}

/// Applies the spec's linear outcome machine to a store result set.
///
/// Store order is preserved in `Matches`; the filter keeps records with
/// `num_awards` strictly greater than the threshold.
pub fn classify_lookup(records: Vec<AwardRecord>, min_awards: Option<u64>) -> LookupOutcome {
    if records.is_empty() {
        return LookupOutcome::NoMatches;
    }

    match min_awards {
        Some(threshold) => {
            let filtered: Vec<AwardRecord> = records
                .into_iter()
                .filter(|record| record.num_awards > threshold)
                .collect();
            if filtered.is_empty() {
                LookupOutcome::FilterExhausted
            } else {
                LookupOutcome::Matches(filtered)
            }
        }
        None => LookupOutcome::Matches(records),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;

    fn record(num_awards: u64) -> AwardRecord {
        AwardRecord {
            movie_id: 550,
            award_body: "Oscars".to_string(),
            num_awards,
            extra: Map::new(),
        }
    }

    #[test]
    fn empty_result_is_no_matches() {
        assert_eq!(classify_lookup(Vec::new(), None), LookupOutcome::NoMatches);
    }

    #[test]
    fn empty_result_is_no_matches_even_with_threshold() {
        assert_eq!(
            classify_lookup(Vec::new(), Some(0)),
            LookupOutcome::NoMatches
        );
    }

    #[test]
    fn no_threshold_returns_all_records_in_store_order() {
        let records = vec![record(3), record(1), record(7)];
        assert_eq!(
            classify_lookup(records.clone(), None),
            LookupOutcome::Matches(records)
        );
    }

    #[test]
    fn threshold_is_strictly_exclusive() {
        let outcome = classify_lookup(vec![record(3), record(5), record(6)], Some(5));
        assert_eq!(outcome, LookupOutcome::Matches(vec![record(6)]));
    }

    #[test]
    fn threshold_clearing_nothing_is_filter_exhausted() {
        let outcome = classify_lookup(vec![record(3)], Some(5));
        assert_eq!(outcome, LookupOutcome::FilterExhausted);
    }

    #[test]
    fn threshold_zero_drops_zero_award_records() {
        let outcome = classify_lookup(vec![record(0), record(2)], Some(0));
        assert_eq!(outcome, LookupOutcome::Matches(vec![record(2)]));
    }
}
