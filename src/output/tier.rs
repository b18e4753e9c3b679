/// Size band used to pick a bar's color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Lower bounds, in megabytes, of the medium and high tiers. Each bound is
/// inclusive on the upper tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub medium_mb: f64,
    pub high_mb: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            medium_mb: 50.0,
            high_mb: 500.0,
        }
    }
}

impl Tier {
    pub fn classify(size_mb: f64, thresholds: &Thresholds) -> Self {
        if size_mb < thresholds.medium_mb {
            Self::Low
        } else if size_mb < thresholds.high_mb {
            Self::Medium
        } else {
            Self::High
        }
    }
}
