use crate::geocode::ResolvedRecord;

/// One requester/provider pairing with its distance scores.
///
/// `route_km` stays `None` until (and unless) the refinement stage fills it.
#[derive(Debug, Clone)]
pub struct PairResult {
    /// The requester-side record.
    pub requester: ResolvedRecord,
    /// The provider-side record.
    pub provider: ResolvedRecord,
    /// Great-circle distance in kilometers, rounded to 2 decimals.
    pub great_circle_km: f64,
    /// Route distance in kilometers (2 decimals), when refined successfully.
    pub route_km: Option<f64>,
}
