use super::entry::AggregateEntry;

/// Case-insensitive substring search over entry names
///
/// Empty or whitespace-only text returns every entry unchanged. Always
/// call this on the full rebuilt set, never on a previous result.
pub fn filter_entries<I: Clone>(entries: &[AggregateEntry<I>], search_text: &str) -> Vec<AggregateEntry<I>> {
    if search_text.trim().is_empty() {
        return entries.to_vec();
    }

    let needle = search_text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
