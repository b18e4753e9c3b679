/// One direct child of the scanned directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub size_mb: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, size_mb: f64) -> Self {
        Self {
            name: name.into(),
            size_mb,
        }
    }
}

/// Sorts largest first and keeps at most `limit` entries. The sort is stable,
/// so equal sizes keep their listing order.
pub fn top_entries(mut entries: Vec<Entry>, limit: usize) -> Vec<Entry> {
    entries.sort_by(|a, b| b.size_mb.total_cmp(&a.size_mb));
    entries.truncate(limit);
    entries
}
