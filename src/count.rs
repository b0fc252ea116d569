//! Entity counting with the optional OneBusAway source filter.

use crate::gtfs_rt::{FeedEntity, FeedMessage};

/// Counts the feed entities passing the source filter, in feed order.
///
/// With no filter every entity counts. With a filter, an entity counts
/// only when it carries the `source` extension and its value matches the
/// filter exactly (case-sensitive); entities without the extension never
/// match.
pub fn count_entities(feed: &FeedMessage, source: Option<&str>) -> usize {
    feed.entity
        .iter()
        .filter(|entity| source_matches(entity, source))
        .count()
}

fn source_matches(entity: &FeedEntity, source: Option<&str>) -> bool {
    match source {
        None => true,
        Some(wanted) => entity.source.as_deref() == Some(wanted),
    }
}
