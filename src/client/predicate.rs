//! Client-side filtering for `*_complete_matching_predicate` operations

/// Field-wise filter over list results. Unset fields match anything.
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Matches every item
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> Predicate<T> for MatchAll {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// True when `expected` is unset or equals a present `actual`
pub fn field_matches(expected: &Option<String>, actual: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual == Some(expected.as_str()),
    }
}
