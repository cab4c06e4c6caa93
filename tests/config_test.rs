use clap::{CommandFactory, FromArgMatches, Parser};
use fusionview::config::{ChartParams, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(argv);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

fn file_config() -> Config {
    Config {
        chart: ChartParams {
            window_size: 9,
            max_window: 12,
            fallback_score: 4.0,
        },
    }
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (cfg, _) = parse(&[]);
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_merge_only_takes_explicit_flags() {
    let (cli_cfg, matches) = parse(&["--window-size", "3"]);
    let mut cfg = file_config();
    cfg.merge_from_cli(&cli_cfg, &matches);

    assert_eq!(cfg.chart.window_size, 3);
    // Clap defaults must not clobber file values
    assert_eq!(cfg.chart.max_window, 12);
    assert_eq!(cfg.chart.fallback_score, 4.0);
}

#[test]
fn test_merge_without_flags_is_noop() {
    let (cli_cfg, matches) = parse(&[]);
    let mut cfg = file_config();
    cfg.merge_from_cli(&cli_cfg, &matches);
    assert_eq!(cfg, file_config());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"chart": {{"max_window": 30, "fallback_score": 1.5}}}}"#).unwrap();

    let cfg = Config::load_from_file(file.path()).unwrap();
    assert_eq!(cfg.chart.window_size, 5);
    assert_eq!(cfg.chart.max_window, 30);
    assert_eq!(cfg.chart.fallback_score, 1.5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_load_from_file_rejects_garbage() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}
