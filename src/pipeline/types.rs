use crate::geocode::ErrorEntry;
use crate::matrix::PairResult;

/// Everything a run produces: the ranked pairs plus both error lists.
///
/// A record appearing in an error list is never present in the ranked pairs
/// for that dataset's role.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    /// All requester×provider pairs, in final ranked order.
    pub pairs: Vec<PairResult>,
    /// Requester records that could not be resolved.
    pub requester_errors: Vec<ErrorEntry>,
    /// Provider records that could not be resolved.
    pub provider_errors: Vec<ErrorEntry>,
}

impl MatchOutcome {
    /// Shapes the ranked pairs as a table for the result sink.
    ///
    /// Headers are the requester headers, then the provider headers, then
    /// `Km` (and `Route Km` when `include_route` is set; pairs without a
    /// route leave that cell empty).
    pub fn ranked_table(
        &self,
        requester_headers: &[String],
        provider_headers: &[String],
        include_route: bool,
    ) -> (Vec<String>, Vec<Vec<String>>) {
        let mut headers: Vec<String> = Vec::new();
        headers.extend_from_slice(requester_headers);
        headers.extend_from_slice(provider_headers);
        headers.push("Km".to_string());
        if include_route {
            headers.push("Route Km".to_string());
        }

        let rows = self
            .pairs
            .iter()
            .map(|pair| {
                let mut row: Vec<String> = Vec::with_capacity(headers.len());
                row.extend_from_slice(pair.requester.record.fields());
                row.extend_from_slice(pair.provider.record.fields());
                row.push(format!("{:.2}", pair.great_circle_km));
                if include_route {
                    row.push(
                        pair.route_km
                            .map(|km| format!("{km:.2}"))
                            .unwrap_or_default(),
                    );
                }
                row
            })
            .collect();

        (headers, rows)
    }

    /// Shapes both error lists as a table: dataset label, the verbatim
    /// address, and the originating record's fields joined with `" | "`.
    pub fn error_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = vec![
            "Dataset".to_string(),
            "Address".to_string(),
            "Record".to_string(),
        ];

        let rows = self
            .requester_errors
            .iter()
            .chain(&self.provider_errors)
            .map(|entry| {
                vec![
                    entry.role.to_string(),
                    entry.address.clone(),
                    entry.record.fields().join(" | "),
                ]
            })
            .collect();

        (headers, rows)
    }
}
