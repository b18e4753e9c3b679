use std::{
    io::{self, Write},
    path,
};

use indicatif::ProgressBar;
use tracing::debug;

use crate::{
    config::Config,
    file_system::{entry::top_entries, read::read_entries},
    output::{
        chart::make_chart,
        palette::Palette,
        summary::{make_footer, make_header, EMPTY},
        terminal::{max_bar_width, terminal_columns, WidthProbe},
    },
};

/// Scans `config.dir` and renders the full report: a header, the chart of the
/// largest entries and a footer. A missing or unlistable directory yields a
/// single message line instead.
pub fn make_report(
    config: &Config,
    probe: &dyn WidthProbe,
    palette: &Palette,
    progress: &ProgressBar,
) -> String {
    let entries = match read_entries(&config.dir, progress) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(path = %config.dir.display(), error = %err, "scan aborted");
            return format!("{err}\n");
        }
    };

    let columns = terminal_columns(probe, config.fallback_columns);
    let bar_width = max_bar_width(columns, config.bar_reserve);
    debug!(columns, bar_width, "resolved terminal width");

    let entries = top_entries(entries, config.limit);

    let resolved = path::absolute(&config.dir).unwrap_or_else(|_| config.dir.clone());
    let mut report = make_header(&resolved, palette);

    if entries.is_empty() {
        report.push_str(EMPTY);
        report.push('\n');
        return report;
    }

    report.push_str(&make_chart(
        &entries,
        bar_width,
        &config.thresholds,
        palette,
    ));
    report.push_str(&make_footer(palette));

    report
}

pub fn print_report(
    config: &Config,
    probe: &dyn WidthProbe,
    palette: &Palette,
    progress: &ProgressBar,
) -> io::Result<()> {
    let report = make_report(config, probe, palette, progress);

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()
}
