use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose entries are charted
    #[arg(default_value = ".")]
    pub dir: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.dir)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::{BAR_RESERVE, FALLBACK_COLUMNS, TOP_ENTRIES};

    #[test]
    fn test_defaults_to_current_dir() {
        let config: Config = Args::try_parse_from(["soda"]).unwrap().into();

        assert_eq!(config.dir, Path::new("."));
        assert_eq!(config.limit, TOP_ENTRIES);
        assert_eq!(config.bar_reserve, BAR_RESERVE);
        assert_eq!(config.fallback_columns, FALLBACK_COLUMNS);
    }

    #[test]
    fn test_positional_dir() {
        let config: Config = Args::try_parse_from(["soda", "/var/log"]).unwrap().into();
        assert_eq!(config.dir, Path::new("/var/log"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["soda", "--size"]).is_err());
        assert!(Args::try_parse_from(["soda", "a", "b"]).is_err());
    }
}
