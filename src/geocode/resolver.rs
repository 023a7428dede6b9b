use tracing::{debug, info};

use crate::cancel::{CancelToken, Cancelled};
use crate::dataset::{Dataset, DatasetRole};
use crate::progress::ProgressSink;

use super::candidates::CandidateBuilder;
use super::client::LookupClient;
use super::provider::GeocodeProvider;
use super::types::{ErrorEntry, Resolution, ResolvedRecord};

/// Resolves one address by walking its candidate queries in order.
pub struct AddressResolver<'a, P: GeocodeProvider> {
    client: &'a LookupClient<P>,
    candidates: CandidateBuilder,
}

impl<'a, P: GeocodeProvider> AddressResolver<'a, P> {
    /// Creates a resolver over `client` with the given candidate strategy.
    pub fn new(client: &'a LookupClient<P>, candidates: CandidateBuilder) -> Self {
        Self { client, candidates }
    }

    /// Tries each candidate query in order and short-circuits on the first
    /// coordinate. Zero candidates (blank address) resolve to `Unresolved`.
    pub async fn resolve(&self, address: &str) -> Resolution {
        for query in self.candidates.candidates(address) {
            if let Some(coordinate) = self.client.lookup(&query).await {
                return Resolution::Resolved(coordinate);
            }
        }
        Resolution::Unresolved
    }
}

/// Output of resolving one whole dataset.
#[derive(Debug, Default)]
pub struct ResolvedDataset {
    /// Records whose address resolved, in input order.
    pub resolved: Vec<ResolvedRecord>,
    /// Records whose address exhausted every candidate, in input order.
    pub errors: Vec<ErrorEntry>,
}

/// Resolves every record of `dataset` sequentially.
///
/// Records are resolved one at a time, so the shared pacer spaces real calls
/// and progress reflects a single in-flight address. Records with a blank
/// address field are silently skipped. A failing record lands in
/// `errors` and never affects subsequent records; cancellation is checked
/// before each record's resolution.
pub async fn resolve_dataset<P: GeocodeProvider>(
    resolver: &AddressResolver<'_, P>,
    dataset: &Dataset,
    address_column: usize,
    role: DatasetRole,
    progress: &mut dyn ProgressSink,
    cancel: &CancelToken,
) -> Result<ResolvedDataset, Cancelled> {
    let total = dataset.len();
    let mut out = ResolvedDataset::default();

    for (index, record) in dataset.records().iter().enumerate() {
        let address = record.field(address_column).unwrap_or_default();
        progress.record(index, total, address);

        if address.trim().is_empty() {
            debug!(role = %role, index, "blank address, skipping record");
            continue;
        }

        cancel.check()?;

        match resolver.resolve(address).await {
            Resolution::Resolved(coordinate) => out.resolved.push(ResolvedRecord {
                record: record.clone(),
                coordinate,
            }),
            Resolution::Unresolved => out.errors.push(ErrorEntry {
                role,
                address: address.to_string(),
                record: record.clone(),
            }),
        }
    }

    info!(
        role = %role,
        total,
        resolved = out.resolved.len(),
        unresolved = out.errors.len(),
        "dataset resolved"
    );

    Ok(out)
}
