//! Protobuf parser for the probe's trimmed GTFS Realtime schema.

use prost::Message;

use crate::gtfs_rt::FeedMessage;

/// Decodes a protobuf-encoded GTFS-RT [`FeedMessage`] from raw bytes.
///
/// Entities missing the OneBusAway extension fields decode with those
/// fields absent; entity payloads outside the trimmed schema are skipped
/// as unknown fields.
///
/// # Errors
///
/// Returns an error if the bytes are not valid protobuf for a
/// `FeedMessage`.
pub fn parse_feed(bytes: &[u8]) -> Result<FeedMessage, prost::DecodeError> {
    FeedMessage::decode(bytes)
}
