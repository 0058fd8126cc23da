/// Parses an entity ID from a raw path segment.
///
/// IDs are handled leniently: a segment that does not parse as an integer is
/// treated as an ID that matches no record, so the caller reports not-found
/// rather than a malformed request.
///
/// # Arguments
/// - `raw` - The path segment to parse
///
/// # Returns
/// - `Some(i32)` - Successfully parsed ID
/// - `None` - The segment is not an integer
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
