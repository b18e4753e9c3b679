use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{spinner} Scanning... [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {wide_msg}";

/// Progress bar for the per-entry scan. It draws on stderr and stays hidden
/// when stderr is not a terminal.
pub fn scan_progress_bar() -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░ ");

    ProgressBar::new(0).with_style(style)
}
