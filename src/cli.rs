//! Command-line surface of the probe.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gtfs_rt_probe")]
#[command(about = "Probe a GTFS-Realtime feed and report its health", long_about = None)]
pub struct Cli {
    /// Feed endpoint to probe
    #[arg(short = 'u', value_name = "URL")]
    pub url: String,

    /// Entity count at or below which the feed is CRITICAL
    #[arg(short = 'c', value_name = "NUM", default_value_t = 2, allow_negative_numbers = true)]
    pub critical_threshold: i64,

    /// Entity count at or below which the feed is WARNING
    #[arg(short = 'w', value_name = "NUM", default_value_t = 10, allow_negative_numbers = true)]
    pub warning_threshold: i64,

    /// Only count entities whose source extension equals this value
    #[arg(short = 's', value_name = "SOURCE")]
    pub source: Option<String>,
}

/// Immutable probe settings, decoupled from argument parsing and passed
/// explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub url: String,
    pub critical_threshold: i64,
    pub warning_threshold: i64,
    pub source: Option<String>,
}

impl From<Cli> for ProbeConfig {
    fn from(cli: Cli) -> Self {
        ProbeConfig {
            url: cli.url,
            critical_threshold: cli.critical_threshold,
            warning_threshold: cli.warning_threshold,
            source: cli.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let cli = Cli::try_parse_from(["gtfs_rt_probe", "-u", "http://example.com/feed"]).unwrap();
        let config = ProbeConfig::from(cli);

        assert_eq!(config.url, "http://example.com/feed");
        assert_eq!(config.critical_threshold, 2);
        assert_eq!(config.warning_threshold, 10);
        assert!(config.source.is_none());
    }

    #[test]
    fn test_all_options_parsed() {
        let cli = Cli::try_parse_from([
            "gtfs_rt_probe",
            "-u",
            "http://example.com/feed",
            "-c",
            "0",
            "-w",
            "5",
            "-s",
            "mta",
        ])
        .unwrap();
        let config = ProbeConfig::from(cli);

        assert_eq!(config.critical_threshold, 0);
        assert_eq!(config.warning_threshold, 5);
        assert_eq!(config.source.as_deref(), Some("mta"));
    }

    #[test]
    fn test_url_is_required() {
        let result = Cli::try_parse_from(["gtfs_rt_probe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_threshold_must_be_integer() {
        let result =
            Cli::try_parse_from(["gtfs_rt_probe", "-u", "http://example.com/feed", "-c", "two"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_threshold_accepted() {
        let cli =
            Cli::try_parse_from(["gtfs_rt_probe", "-u", "http://example.com/feed", "-c", "-1"])
                .unwrap();
        assert_eq!(cli.critical_threshold, -1);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let result =
            Cli::try_parse_from(["gtfs_rt_probe", "-u", "http://example.com/feed", "-x", "1"]);
        assert!(result.is_err());
    }
}
