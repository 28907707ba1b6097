//! Engine-wide ranking constants
//!
//! These values are fixed for every query and are not configurable per call.

/// Maximum number of documents returned by a top-K query
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal and ordered by rating
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Default upper bound on tasks launched by one parallel ranking call
pub const DEFAULT_MAX_PARALLEL_TASKS: usize = 10;

/// Returns true if two relevance values are equal within [`RELEVANCE_EPSILON`]
#[inline]
pub fn relevance_eq(lhs: f64, rhs: f64) -> bool {
    (lhs - rhs).abs() < RELEVANCE_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevance_eq() {
        assert!(relevance_eq(0.5, 0.5 + 1e-9));
        assert!(relevance_eq(0.0, -5e-7));
        assert!(!relevance_eq(0.5, 0.5 + 2e-6));
    }
}
