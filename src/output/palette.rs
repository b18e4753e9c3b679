use console::Style;
use once_cell::sync::Lazy;

use crate::output::tier::Tier;

/// Styles for the three bar tiers and the header/footer title.
#[derive(Clone, Debug)]
pub struct Palette {
    pub low: Style,
    pub medium: Style,
    pub high: Style,
    pub title: Style,
}

static ANSI: Lazy<Palette> = Lazy::new(|| Palette {
    low: Style::new().green().bright().force_styling(true),
    medium: Style::new().yellow().bright().force_styling(true),
    high: Style::new().red().bright().force_styling(true),
    title: Style::new().blue().bright().bold().force_styling(true),
});

impl Palette {
    /// Colored output. Escape codes are written even when stdout is not a
    /// terminal.
    pub fn ansi() -> &'static Palette {
        &ANSI
    }

    /// No styling at all.
    #[cfg(test)]
    pub fn plain() -> Palette {
        Palette {
            low: Style::new(),
            medium: Style::new(),
            high: Style::new(),
            title: Style::new(),
        }
    }

    pub fn for_tier(&self, tier: Tier) -> &Style {
        match tier {
            Tier::Low => &self.low,
            Tier::Medium => &self.medium,
            Tier::High => &self.high,
        }
    }
}
