use crate::{
    bytes::MB,
    file_system::entry::Entry,
    output::{
        palette::Palette,
        tier::{Thresholds, Tier},
    },
};

pub const BAR_CHAR: &str = "█";

/// Characters kept from an entry name.
pub const NAME_WIDTH: usize = 15;
/// Width of the name column, including one space of padding.
pub const NAME_COLUMN: usize = NAME_WIDTH + 1;

/// Bar length for `size_mb`, scaled so that `max_size_mb` fills
/// `max_bar_width`. Rounds down; an all-zero chart draws no bars.
pub fn bar_len(size_mb: f64, max_size_mb: f64, max_bar_width: usize) -> usize {
    if max_size_mb > 0.0 {
        ((size_mb / max_size_mb) * max_bar_width as f64).floor() as usize
    } else {
        0
    }
}

/// One row per entry, in the order given.
pub fn make_chart(
    entries: &[Entry],
    max_bar_width: usize,
    thresholds: &Thresholds,
    palette: &Palette,
) -> String {
    let max_size = entries.iter().map(|e| e.size_mb).fold(0.0, f64::max);

    let mut chart = String::new();

    for entry in entries {
        let len = bar_len(entry.size_mb, max_size, max_bar_width);
        let style = palette.for_tier(Tier::classify(entry.size_mb, thresholds));

        let name: String = entry.name.chars().take(NAME_WIDTH).collect();

        chart.push_str(&format!(
            "{name:<name_width$} | {bar} {size:>8.2} {MB}\n",
            name_width = NAME_COLUMN,
            bar = style.apply_to(BAR_CHAR.repeat(len)),
            size = entry.size_mb,
        ));
    }

    chart
}
