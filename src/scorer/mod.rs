pub mod loader;
pub mod rolling;
pub mod sequence;
pub mod table;
pub mod types;

pub use self::rolling::{rolling_mean, WindowSize, MAX_WINDOW, WINDOW_CEILING};
pub use self::sequence::score_sequence;
pub use self::table::ScoreTable;
pub use self::types::{ScoredResidue, SmoothedPoint, SmoothedSeries};

use crate::config::{ChartParams, Config};
use crate::error::FvResult;
use std::path::Path;
use tracing::debug;

/// A score table paired with the window bounds the caller is allowed to use.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub table: ScoreTable,
    pub params: ChartParams,
}

impl Scorer {
    pub fn new(table_path: Option<&Path>, config: &Config) -> FvResult<Self> {
        config.validate()?;
        let params = config.chart.clone();

        let table = match table_path {
            Some(path) => loader::load_score_table(path, params.fallback_score)?,
            None => {
                debug!("🧪 Using reference residue table");
                ScoreTable::standard().with_fallback(params.fallback_score)?
            }
        };

        Ok(Self { table, params })
    }

    pub fn with_table(table: ScoreTable, params: ChartParams) -> Self {
        Self { table, params }
    }

    pub fn window(&self, size: usize) -> FvResult<WindowSize> {
        WindowSize::bounded(size, self.params.max_window)
    }

    pub fn default_window(&self) -> FvResult<WindowSize> {
        self.window(self.params.window_size)
    }

    pub fn score(&self, sequence: &str) -> Vec<ScoredResidue> {
        score_sequence(&self.table, sequence)
    }

    pub fn smooth(&self, sequence: &str, window: WindowSize) -> SmoothedSeries {
        rolling::smooth(self.score(sequence), window)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::with_table(ScoreTable::standard(), ChartParams::default())
    }
}
