use std::path::Path;

use crate::output::palette::Palette;

pub const EMPTY: &str = "Empty.";
pub const SORT_CAPTION: &str = "Sorting: Largest to Smallest";

pub fn make_header(resolved_dir: &Path, palette: &Palette) -> String {
    let title = format!("🥤 SODA: Analyzing {}", resolved_dir.display());
    format!("\n{}\n\n", palette.title.apply_to(title))
}

pub fn make_footer(palette: &Palette) -> String {
    format!("\n{}\n\n", palette.title.apply_to(SORT_CAPTION))
}
