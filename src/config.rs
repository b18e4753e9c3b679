use std::path::PathBuf;

use crate::output::tier::Thresholds;

/// Maximum number of rows in the chart.
pub const TOP_ENTRIES: usize = 15;
/// Columns reserved for the name, the size and the separators.
pub const BAR_RESERVE: usize = 35;
/// Terminal width used when there is no terminal to ask.
pub const FALLBACK_COLUMNS: usize = 80;

#[derive(Clone, Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub limit: usize,
    pub bar_reserve: usize,
    pub fallback_columns: usize,
    pub thresholds: Thresholds,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            limit: TOP_ENTRIES,
            bar_reserve: BAR_RESERVE,
            fallback_columns: FALLBACK_COLUMNS,
            thresholds: Thresholds::default(),
        }
    }
}
