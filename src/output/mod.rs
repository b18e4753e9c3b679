pub mod chart;
pub mod palette;
pub mod progress;
pub mod summary;
pub mod terminal;
pub mod tier;
