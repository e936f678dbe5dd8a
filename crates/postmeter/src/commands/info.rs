//! Info command: package metadata, effective configuration, and the engine's
//! fixed parameters.

use clap::Args;
use owo_colors::OwoColorize;
use postmeter_core::analysis::keywords::MAX_KEYWORDS;
use postmeter_core::analysis::platforms::{BASE_SCORE, PLATFORMS};
use postmeter_core::config::{Config, ConfigSources};
use postmeter_core::text::READING_SPEED_WPM;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_readability: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_sentiment: Option<u8>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let platforms = config
            .platforms
            .as_ref()
            .map(|p| p.iter().map(|p| p.as_str().to_string()).collect());
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            keyword_limit: config.keyword_limit,
            platforms,
            min_readability: config.min_readability,
            min_sentiment: config.min_sentiment,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PlatformLimit {
    name: &'static str,
    max_chars: usize,
}

/// Constants the analysis engine applies regardless of configuration.
#[derive(Debug, Serialize)]
struct EngineInfo {
    platforms: Vec<PlatformLimit>,
    platform_base_score: i32,
    max_keywords: usize,
    reading_speed_wpm: usize,
}

impl EngineInfo {
    fn new() -> Self {
        let platforms = PLATFORMS
            .iter()
            .map(|profile| PlatformLimit {
                name: profile.platform.as_str(),
                max_chars: profile.max_chars,
            })
            .collect();
        Self {
            platforms,
            platform_base_score: BASE_SCORE,
            max_keywords: MAX_KEYWORDS,
            reading_speed_wpm: READING_SPEED_WPM,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    engine: EngineInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
        engine: EngineInfo::new(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        match full_info.config.max_input_bytes {
            Some(max) => println!("{}: {} bytes", "Input limit".dimmed(), max),
            None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
        }

        // Analysis defaults
        println!();
        println!("{}", "Analysis".bold().underline());
        print_opt("Keyword limit", &full_info.config.keyword_limit);
        match full_info.config.platforms {
            Some(ref platforms) => println!("{}: {}", "Platforms".dimmed(), platforms.join(", ")),
            None => println!("{}: {}", "Platforms".dimmed(), "all".dimmed()),
        }
        print_opt("Min readability", &full_info.config.min_readability);
        print_opt("Min sentiment", &full_info.config.min_sentiment);

        println!();
        println!("{}", "Engine".bold().underline());
        let engine = &full_info.engine;
        for limit in &engine.platforms {
            println!("{}: {} chars", limit.name.dimmed(), limit.max_chars);
        }
        println!("{}: {}", "Platform base score".dimmed(), engine.platform_base_score);
        println!("{}: {}", "Max keywords".dimmed(), engine.max_keywords);
        println!("{}: {} wpm", "Reading speed".dimmed(), engine.reading_speed_wpm);
    }

    Ok(())
}

/// Print an optional numeric value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    use owo_colors::OwoColorize;
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postmeter_core::analysis::platforms::Platform;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_reports_analysis_settings() {
        let config = Config {
            keyword_limit: Some(5),
            platforms: Some(vec![Platform::Twitter, Platform::Tiktok]),
            min_sentiment: Some(45),
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &test_sources());
        assert_eq!(info.keyword_limit, Some(5));
        assert_eq!(
            info.platforms,
            Some(vec!["twitter".to_string(), "tiktok".to_string()])
        );
        assert_eq!(info.min_sentiment, Some(45));
        assert_eq!(
            info.max_input_bytes,
            Some(postmeter_core::DEFAULT_MAX_INPUT_BYTES)
        );
    }

    #[test]
    fn test_engine_info_lists_platform_limits() {
        let engine = EngineInfo::new();
        let limits: Vec<_> = engine
            .platforms
            .iter()
            .map(|l| (l.name, l.max_chars))
            .collect();
        assert_eq!(
            limits,
            vec![
                ("twitter", 280),
                ("facebook", 63_206),
                ("instagram", 2_200),
                ("linkedin", 3_000),
                ("tiktok", 150),
            ]
        );
        assert_eq!(engine.platform_base_score, 70);
        assert_eq!(engine.max_keywords, 20);
    }

    #[test]
    fn test_config_info_no_file() {
        let config = Config::default();
        let sources = ConfigSources::default();
        let info = ConfigInfo::from_config(&config, &sources);
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
    }
}
