use fusionview::config::Config;
use fusionview::fusion::load_pairs;
use fusionview::scorer::loader::load_score_table;
use fusionview::scorer::{ScoreTable, Scorer};
use fusionview::FusionError;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn json_file() -> NamedTempFile {
    Builder::new().suffix(".json").tempfile().unwrap()
}

// --- SCORE TABLE LOAD TESTS ---

#[test]
fn test_loader_parses_csv_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,score").unwrap();
    writeln!(file, "A,1.5").unwrap();
    writeln!(file, "c , 2.25").unwrap();

    let table = load_score_table(file.path(), 3.0).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.score('C'), 2.25);
    assert_eq!(table.score('W'), 3.0);
}

#[test]
fn test_loader_parses_json_table() {
    let mut file = json_file();
    writeln!(file, r#"{{"fallback": 1.0, "scores": {{"W": 5.88, "y": 5.63}}}}"#).unwrap();

    let table = load_score_table(file.path(), 99.0).unwrap();
    assert_eq!(table.fallback(), 1.0);
    assert_eq!(table.score('w'), 5.88);
    assert_eq!(table.score('Y'), 5.63);
    assert_eq!(table.score('A'), 1.0);
}

#[test]
fn test_loader_round_trips_reference_csv() {
    let reference = ScoreTable::standard();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,score").unwrap();
    for (symbol, score) in reference.entries() {
        writeln!(file, "{},{}", symbol, score).unwrap();
    }

    let loaded = load_score_table(file.path(), reference.fallback()).unwrap();
    assert_eq!(loaded, reference);
}

#[test]
fn test_loader_rejects_bad_number() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,score").unwrap();
    writeln!(file, "A,abc").unwrap();

    let res = load_score_table(file.path(), 5.0);
    assert!(matches!(res, Err(FusionError::Validation(_))));
}

#[test]
fn test_loader_rejects_negative_score() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,score").unwrap();
    writeln!(file, "A,-2").unwrap();

    assert!(load_score_table(file.path(), 5.0).is_err());
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let res = load_score_table("definitely/not/here.csv", 5.0);
    assert!(matches!(res, Err(FusionError::Io(_))));
}

#[test]
fn test_scorer_uses_config_fallback() {
    let mut config = Config::default();
    config.chart.fallback_score = 2.5;

    let scorer = Scorer::new(None, &config).unwrap();
    assert_eq!(scorer.table.score('X'), 2.5);
    assert_eq!(scorer.table.score('A'), 6.11);
}

#[test]
fn test_scorer_applies_config_fallback_to_json_table() {
    let mut file = json_file();
    writeln!(file, r#"{{"scores": {{"A": 1.0}}}}"#).unwrap();

    let mut config = Config::default();
    config.chart.fallback_score = 2.0;

    let scorer = Scorer::new(Some(file.path()), &config).unwrap();
    assert_eq!(scorer.table.score('A'), 1.0);
    assert_eq!(scorer.table.score('X'), 2.0);
    assert_eq!(scorer.table.fallback(), 2.0);
}

#[test]
fn test_scorer_rejects_invalid_config() {
    let mut config = Config::default();
    config.chart.max_window = 0;
    assert!(matches!(
        Scorer::new(None, &config),
        Err(FusionError::Config(_))
    ));
}

// --- FUSION PAIR LOAD TESTS ---

#[test]
fn test_load_pairs() {
    let mut file = json_file();
    writeln!(
        file,
        r#"[
            {{"hgene_name": "BCR", "tgene_name": "ABL1", "hgene_seq": "MVD", "tgene_seq": "GQG",
              "seq_desc": "Chimeric kinase", "isOutOfFrame": false, "isAnalyzed": true}},
            {{"hgene_name": "TMPRSS2", "tgene_name": "ERG"}}
        ]"#
    )
    .unwrap();

    let pairs = load_pairs(file.path()).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].description(), Some("Chimeric kinase"));
    assert!(pairs[0].is_analyzed);
    assert_eq!(pairs[1].host_sequence, "");
    assert_eq!(pairs[1].description(), None);
}

#[test]
fn test_load_pairs_rejects_malformed_json() {
    let mut file = json_file();
    writeln!(file, "[{{\"hgene_name\": }}]").unwrap();
    assert!(matches!(load_pairs(file.path()), Err(FusionError::Json(_))));
}
