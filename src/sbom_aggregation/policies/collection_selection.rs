use crate::sbom_aggregation::domain::CollectionSummary;

/// How a name search narrows down to one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome<'a> {
    /// Nothing matched; the run stops
    NoMatch,
    /// Exactly one match, selected without asking
    Single(&'a CollectionSummary),
    /// Several matches; the operator must pick one
    Ambiguous(&'a [CollectionSummary]),
}

/// CollectionSelectionPolicy decides how many search results need a prompt
/// and interprets the operator's answer
pub struct CollectionSelectionPolicy;

impl CollectionSelectionPolicy {
    pub fn classify(candidates: &[CollectionSummary]) -> SelectionOutcome<'_> {
        match candidates {
            [] => SelectionOutcome::NoMatch,
            [only] => SelectionOutcome::Single(only),
            _ => SelectionOutcome::Ambiguous(candidates),
        }
    }

    /// Resolves a 1-indexed answer against `candidates`
    ///
    /// Anything that is not an integer in `[1, candidates.len()]` yields
    /// `None`. There is no second attempt.
    pub fn pick<'a>(candidates: &'a [CollectionSummary], answer: &str) -> Option<&'a CollectionSummary> {
        let index: usize = answer.trim().parse().ok()?;
        if index == 0 {
            return None;
        }
        candidates.get(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<CollectionSummary> {
        vec![
            CollectionSummary::new("g1", "Payments"),
            CollectionSummary::new("g2", "Payments EU"),
            CollectionSummary::new("g3", "Payments Legacy"),
        ]
    }

    #[test]
    fn test_classify() {
        let all = candidates();
        assert_eq!(CollectionSelectionPolicy::classify(&[]), SelectionOutcome::NoMatch);
        assert_eq!(
            CollectionSelectionPolicy::classify(&all[..1]),
            SelectionOutcome::Single(&all[0])
        );
        assert_eq!(
            CollectionSelectionPolicy::classify(&all),
            SelectionOutcome::Ambiguous(&all[..])
        );
    }

    #[test]
    fn test_pick_valid_indexes() {
        let all = candidates();
        assert_eq!(CollectionSelectionPolicy::pick(&all, "1").unwrap().guid, "g1");
        assert_eq!(CollectionSelectionPolicy::pick(&all, "3").unwrap().guid, "g3");
        assert_eq!(CollectionSelectionPolicy::pick(&all, " 2\n").unwrap().guid, "g2");
    }

    #[test]
    fn test_pick_out_of_range() {
        let all = candidates();
        assert!(CollectionSelectionPolicy::pick(&all, "0").is_none());
        assert!(CollectionSelectionPolicy::pick(&all, "4").is_none());
        assert!(CollectionSelectionPolicy::pick(&all, "-1").is_none());
    }

    #[test]
    fn test_pick_non_numeric() {
        let all = candidates();
        assert!(CollectionSelectionPolicy::pick(&all, "").is_none());
        assert!(CollectionSelectionPolicy::pick(&all, "two").is_none());
        assert!(CollectionSelectionPolicy::pick(&all, "1.0").is_none());
        assert!(CollectionSelectionPolicy::pick(&all, "Payments").is_none());
    }
}
