use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::Write;
use tracing::info;

use crate::config::Config;
use crate::manager::ServerManager;
use crate::report::{listing_line, Summary};

/// Configurations registered when the program starts
pub fn seed_configs() -> Vec<(String, Config)> {
    vec![
        ("web".to_string(), Config::new("webserver", 8080)),
        (
            "api".to_string(),
            Config::new("apiserver", 9000).with_enabled(false),
        ),
        ("db".to_string(), Config::new("database", 5432)),
    ]
}

/// Register the seed configurations and write the report to `out`.
pub fn run<W: Write>(out: &mut W, now: NaiveDateTime) -> Result<ServerManager> {
    run_with(out, seed_configs(), now)
}

/// Register `seeds` in order and write the report to `out`.
///
/// A rejected configuration is reported and skipped; it never stops the
/// remaining seeds from being registered.
pub fn run_with<W, I>(out: &mut W, seeds: I, now: NaiveDateTime) -> Result<ServerManager>
where
    W: Write,
    I: IntoIterator<Item = (String, Config)>,
{
    let mut manager = ServerManager::new();

    for (key, config) in seeds {
        let line = config.to_string();
        match manager.add_config(&key, config) {
            Ok(()) => writeln!(out, "Added config: {} -> {}", key, line)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "All configurations:")?;
    for (key, config) in manager.iter() {
        writeln!(out, "{}", listing_line(key, config))?;
    }

    let summary = Summary::from_manager(&manager, now);
    writeln!(out)?;
    writeln!(out, "Summary: {}", summary.to_pretty_json()?)?;

    info!(
        configs = summary.configs,
        active = summary.active,
        "report written"
    );
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|d| d.and_hms_micro_opt(12, 0, 0, 42))
            .unwrap()
    }

    fn render(seeds: Vec<(String, Config)>) -> (ServerManager, String) {
        let mut buf = Vec::new();
        let manager = run_with(&mut buf, seeds, fixed_time()).unwrap();
        (manager, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_seed_report_transcript() {
        let mut buf = Vec::new();
        let manager = run(&mut buf, fixed_time()).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let expected = "\
Added config: web -> webserver:8080 (enabled)
Added config: api -> apiserver:9000 (disabled)
Added config: db -> database:5432 (enabled)

All configurations:
  web: webserver:8080 (enabled)
  api: apiserver:9000 (disabled)
  db: database:5432 (enabled)

Summary: {
  \"timestamp\": \"2026-10-15T12:00:00.000042\",
  \"configs\": 3,
  \"active\": 2
}
";
        assert_eq!(output, expected);
        assert_eq!(manager.list_configs(), vec!["web", "api", "db"]);
    }

    #[test]
    fn test_invalid_seed_is_reported_and_skipped() {
        let (manager, output) = render(vec![
            ("blank".to_string(), Config::new("", 8080)),
            ("zero".to_string(), Config::new("x", 0)),
            ("web".to_string(), Config::new("webserver", 8080)),
        ]);

        assert!(output.contains("Error: Invalid config for 'blank': name is empty"));
        assert!(output.contains("Error: Invalid config for 'zero': port must be greater than zero"));
        assert!(output.contains("  web: webserver:8080 (enabled)"));
        assert_eq!(manager.list_configs(), vec!["web"]);
    }

    #[test]
    fn test_duplicate_key_reports_latest_value() {
        let (manager, output) = render(vec![
            ("web".to_string(), Config::new("first", 8080)),
            ("web".to_string(), Config::new("second", 8081)),
        ]);

        assert!(output.contains("  web: second:8081 (enabled)"));
        assert!(!output.contains("  web: first:8080"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_empty_seed_list() {
        let (manager, output) = render(Vec::new());

        assert!(manager.is_empty());
        assert!(output.starts_with("\nAll configurations:\n\nSummary: {"));
        assert!(output.contains("\"configs\": 0"));
    }
}
