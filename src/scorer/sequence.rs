use super::table::{normalize_symbol, ScoreTable};
use super::types::ScoredResidue;

/// One record per input `char`, positions starting at 1.
pub fn score_sequence(table: &ScoreTable, sequence: &str) -> Vec<ScoredResidue> {
    sequence
        .chars()
        .enumerate()
        .map(|(idx, c)| {
            let symbol = normalize_symbol(c);
            ScoredResidue {
                position: idx + 1,
                symbol,
                raw_score: table.score(symbol),
            }
        })
        .collect()
}
