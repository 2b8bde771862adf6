#[cfg(all(test, unix))]
mod tests {
    use crate::services::{ActivityLogger, LogLevel, SystemRunner};
    use crate::{FetcherConfig, Invocation, ProcessRunner, StatsError, StatsFetcher};
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Temp base dir with an empty `youtube-scrapy-scraper/` inside.
    fn scraper_checkout() -> (TempDir, PathBuf) {
        let base = tempfile::tempdir().unwrap();
        let dir = base.path().join("youtube-scrapy-scraper");
        fs::create_dir(&dir).unwrap();
        (base, dir)
    }

    fn sh_config(base: &TempDir, script: &str) -> FetcherConfig {
        FetcherConfig::default()
            .with_base_dir(base.path())
            .with_program("sh")
            .with_args(["-c", script])
    }

    #[test]
    fn captures_stdout() {
        let (base, dir) = scraper_checkout();
        let inv = Invocation::new("sh", vec!["-c".into(), "printf hello".into()], &dir);
        let out = SystemRunner.run(&inv).unwrap();
        assert_eq!(out.stdout, b"hello");
        assert_eq!(out.exit_code, Some(0));
        drop(base);
    }

    #[test]
    fn decodes_real_child_output() {
        let (base, _dir) = scraper_checkout();
        let cfg = sh_config(&base, r#"printf '{"views": 42}'"#);
        let stats = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap();
        assert_eq!(stats, json!({"views": 42}));
    }

    #[test]
    fn exit_status_is_ignored() {
        let (base, _dir) = scraper_checkout();
        let cfg = sh_config(&base, "printf '[1,2,3]'; exit 1");
        let report = StatsFetcher::new(&SystemRunner, cfg)
            .fetch_stats_report()
            .unwrap();
        assert_eq!(report.payload, json!([1, 2, 3]));
        assert_eq!(report.exit_code, Some(1));
    }

    #[test]
    fn stderr_is_not_inspected() {
        let (base, _dir) = scraper_checkout();
        let cfg = sh_config(&base, "echo 'Traceback: boom' >&2; printf '{\"ok\": true}'");
        let stats = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap();
        assert_eq!(stats, json!({"ok": true}));

        // stderr noise alone does not count as output
        let cfg = sh_config(&base, "echo '{\"ok\": true}' >&2");
        let err = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap_err();
        assert!(matches!(err, StatsError::InvalidResponse));
    }

    #[test]
    fn silent_child_is_invalid_response() {
        let (base, _dir) = scraper_checkout();
        let cfg = sh_config(&base, "true");
        let err = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON response from YouTube scraper.");
    }

    #[test]
    fn runs_inside_scraper_dir() {
        let (base, dir) = scraper_checkout();
        fs::write(dir.join("scraper.sh"), "printf '{\"cwd\": \"%s\"}' \"$(pwd -P)\"\n").unwrap();
        let cfg = FetcherConfig::default()
            .with_base_dir(base.path())
            .with_program("sh")
            .with_args(["scraper.sh"]);

        let stats = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap();
        let expected = fs::canonicalize(&dir).unwrap();
        assert_eq!(stats["cwd"], json!(expected.to_str().unwrap()));
    }

    #[test]
    fn missing_scraper_dir_is_io_error() {
        let base = tempfile::tempdir().unwrap();
        let cfg = sh_config(&base, "printf '{}'");
        let err = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap_err();
        assert!(matches!(err, StatsError::Io(_)), "got {err:?}");
    }

    #[test]
    fn missing_program_is_io_error() {
        let (base, _dir) = scraper_checkout();
        let cfg = FetcherConfig::default()
            .with_base_dir(base.path())
            .with_program("ytstats-no-such-program");
        let err = StatsFetcher::new(&SystemRunner, cfg).fetch_stats().unwrap_err();
        match err {
            StatsError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn activity_entries_format_details() {
        let logger = ActivityLogger::new();
        let entry = logger.info("fetch_stats", Some("succeeded in 12ms"));
        assert_eq!(entry.level, LogLevel::Info);
        assert!(entry.line().ends_with("fetch_stats succeeded in 12ms"));

        let entry = logger.error("fetch_stats", None);
        assert_eq!(entry.level, LogLevel::Error);
        assert!(entry.line().ends_with("UTC fetch_stats"));
    }
}
