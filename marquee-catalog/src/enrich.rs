//! Provider merging for movie enrichment.

use marquee_core::types::{MovieWatchProviders, Provider, RegionAvailability};

/// Merges subscription and purchase providers into one list.
///
/// Subscription providers come first in upstream order, followed by
/// purchase providers whose display name is not already listed.
pub fn merge_providers(availability: RegionAvailability) -> Vec<Provider> {
    let RegionAvailability { mut flatrate, buy, .. } = availability;
    let extra: Vec<Provider> = buy
        .into_iter()
        .filter(|b| !flatrate.iter().any(|f| f.provider_name == b.provider_name))
        .collect();
    flatrate.extend(extra);
    flatrate
}

/// Provider list for `region`, empty if the region is not listed.
pub fn region_providers(body: MovieWatchProviders, region: &str) -> Vec<Provider> {
    body.into_region(region)
        .map(merge_providers)
        .unwrap_or_default()
}
