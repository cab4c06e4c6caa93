use fusionview::scorer::{rolling_mean, score_sequence, ScoreTable, Scorer, WindowSize};
use fusionview::FusionError;
use rstest::rstest;

// --- LOOKUP TABLE ---

#[rstest]
#[case('A', 6.11)]
#[case('r', 10.76)]
#[case('d', 2.98)]
#[case('K', 9.47)]
#[case('p', 6.30)]
#[case('X', 5.0)] // Ambiguous residue
#[case('*', 5.0)] // Stop
#[case('-', 5.0)] // Gap
#[case('Z', 5.0)]
fn test_table_lookup(#[case] symbol: char, #[case] expected: f64) {
    let table = ScoreTable::standard();
    assert_eq!(table.score(symbol), expected);
}

#[test]
fn test_alternate_table_is_injected() {
    let table = ScoreTable::from_entries(vec![('A', 1.0), ('G', 2.0)], 0.5).unwrap();
    let scored = score_sequence(&table, "agX");
    let raw: Vec<f64> = scored.iter().map(|r| r.raw_score).collect();
    assert_eq!(raw, vec![1.0, 2.0, 0.5]);
}

// --- CONCRETE SCENARIOS ---

#[test]
fn test_arnd_window_two() {
    let table = ScoreTable::standard();
    let scored = score_sequence(&table, "ARND");
    let raw: Vec<f64> = scored.iter().map(|r| r.raw_score).collect();
    assert_eq!(raw, vec![6.11, 10.76, 5.4, 2.98]);

    let smoothed = rolling_mean(&raw, 2).unwrap();
    assert_eq!(smoothed, vec![None, Some(8.44), Some(8.08), Some(4.19)]);
}

#[test]
fn test_aaaa_window_three() {
    let scorer = Scorer::default();
    let series = scorer.smooth("AAAA", WindowSize::new(3).unwrap());
    assert_eq!(series.window, 3);
    assert_eq!(
        series.smoothed_values(),
        vec![None, None, Some(6.11), Some(6.11)]
    );
}

#[test]
fn test_unknown_symbol_window_one() {
    let scorer = Scorer::default();
    let series = scorer.smooth("Z", WindowSize::new(1).unwrap());
    assert_eq!(series.len(), 1);
    let p = series.points[0];
    assert_eq!(p.residue.position, 1);
    assert_eq!(p.residue.symbol, 'Z');
    assert_eq!(p.residue.raw_score, 5.0);
    assert_eq!(p.rolling_mean, Some(5.0));
}

// --- WINDOW EDGES ---

#[rstest]
#[case(0, true)]
#[case(1, false)]
#[case(20, false)]
#[case(21, true)]
fn test_window_bounds(#[case] size: usize, #[case] rejected: bool) {
    let res = WindowSize::new(size);
    assert_eq!(res.is_err(), rejected);
    if let Err(e) = res {
        assert!(matches!(e, FusionError::InvalidArgument(_)));
    }
}

#[test]
fn test_scorer_window_respects_configured_max() {
    let mut scorer = Scorer::default();
    scorer.params.max_window = 8;
    assert!(scorer.window(8).is_ok());
    assert!(scorer.window(9).is_err());
}

#[test]
fn test_rolling_mean_leaves_input_untouched() {
    let values = vec![1.0, 2.0, 3.0];
    let before = values.clone();
    let _ = rolling_mean(&values, 2).unwrap();
    assert_eq!(values, before);
}

#[test]
fn test_series_serializes_with_chart_keys() {
    let scorer = Scorer::default();
    let series = scorer.smooth("AR", WindowSize::new(2).unwrap());
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["points"][0]["position"], 1);
    assert_eq!(json["points"][0]["aminoAcid"], "A");
    assert_eq!(json["points"][0]["pValue"], 6.11);
    assert!(json["points"][0]["rollingMean"].is_null());
    assert_eq!(json["points"][1]["rollingMean"], 8.44);
}
