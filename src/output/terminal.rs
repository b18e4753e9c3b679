use console::Term;

/// Reports the terminal's column count, if there is a terminal.
pub trait WidthProbe {
    fn columns(&self) -> Option<usize>;
}

/// Asks the terminal attached to stdout. Redirected output has no width.
pub struct StdoutWidth;

impl WidthProbe for StdoutWidth {
    fn columns(&self) -> Option<usize> {
        Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
    }
}

/// Always answers with the same value.
#[cfg(test)]
pub struct FixedWidth(pub Option<usize>);

#[cfg(test)]
impl WidthProbe for FixedWidth {
    fn columns(&self) -> Option<usize> {
        self.0
    }
}

pub fn terminal_columns(probe: &dyn WidthProbe, fallback: usize) -> usize {
    probe.columns().filter(|&cols| cols > 0).unwrap_or(fallback)
}

/// Columns left for the bar once `reserve` columns go to the name, the size
/// and the separators.
pub fn max_bar_width(columns: usize, reserve: usize) -> usize {
    columns.saturating_sub(reserve)
}
