//! Presentation model for cards and the P-value chart modal.
//!
//! Nothing here draws; the binary's `reports` module renders these to the
//! terminal. `ChartView` owns the current window size and the open/closed
//! state, the scorer stays stateless.

use crate::fusion::{FusionPair, StatusBadge};
use crate::scorer::{Scorer, ScoreTable, SmoothedPoint, SmoothedSeries, WindowSize};
use std::sync::Arc;

/// Fixed value axis of the chart.
pub const Y_DOMAIN: (f64, f64) = (0.0, 12.0);

pub const HOST_PANEL_TITLE: &str = "Host Gene Sequence";
pub const TARGET_PANEL_TITLE: &str = "Target Gene Sequence";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Host,
    Target,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequencePanel {
    pub title: &'static str,
    pub gene_name: String,
    pub sequence: String,
}

impl SequencePanel {
    pub fn residue_count(&self) -> usize {
        self.sequence.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub header: String,
    pub badges: [StatusBadge; 2],
    pub description: Option<String>,
    pub host: SequencePanel,
    pub target: SequencePanel,
}

impl CardView {
    pub fn from_pair(pair: &FusionPair) -> Self {
        Self {
            header: format!("{} ⟷ {}", pair.host_gene_name, pair.target_gene_name),
            badges: pair.badges(),
            description: pair.description().map(str::to_string),
            host: SequencePanel {
                title: HOST_PANEL_TITLE,
                gene_name: pair.host_gene_name.clone(),
                sequence: pair.host_sequence.clone(),
            },
            target: SequencePanel {
                title: TARGET_PANEL_TITLE,
                gene_name: pair.target_gene_name.clone(),
                sequence: pair.target_sequence.clone(),
            },
        }
    }

    pub fn panel(&self, side: Side) -> &SequencePanel {
        match side {
            Side::Host => &self.host,
            Side::Target => &self.target,
        }
    }

    /// A closed chart modal for one of the two sequences.
    pub fn chart(&self, side: Side, scorer: Arc<Scorer>, window: WindowSize) -> ChartView {
        let panel = self.panel(side);
        ChartView::new(scorer, &panel.sequence, &panel.gene_name, window)
    }
}

/// Modal chart state. Recomputes the smoothed series lazily and keeps the
/// last result until the window changes.
#[derive(Debug, Clone)]
pub struct ChartView {
    scorer: Arc<Scorer>,
    sequence: String,
    title: String,
    window: WindowSize,
    open: bool,
    cached: Option<SmoothedSeries>,
}

impl ChartView {
    pub fn new(scorer: Arc<Scorer>, sequence: &str, title: &str, window: WindowSize) -> Self {
        Self {
            scorer,
            sequence: sequence.to_string(),
            title: title.to_string(),
            window,
            open: false,
            cached: None,
        }
    }

    pub fn title(&self) -> String {
        format!("{} P-Value Analysis", self.title)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Slider input: saturates into the scorer's allowed range.
    pub fn set_window(&mut self, size: usize) -> WindowSize {
        let next = WindowSize::clamped(size, self.scorer.params.max_window);
        if next != self.window {
            self.window = next;
            self.cached = None;
        }
        next
    }

    pub fn series(&mut self) -> &SmoothedSeries {
        let scorer = &self.scorer;
        let sequence = &self.sequence;
        let window = self.window;
        self.cached
            .get_or_insert_with(|| scorer.smooth(sequence, window))
    }

    pub fn table(&self) -> &ScoreTable {
        &self.scorer.table
    }

    /// Distinct symbols scored with the table's fallback, in first-seen order.
    pub fn fallback_symbols(&mut self) -> Vec<char> {
        let scorer = Arc::clone(&self.scorer);
        let mut missing = Vec::new();
        for point in &self.series().points {
            let symbol = point.residue.symbol;
            if !scorer.table.contains(symbol) && !missing.contains(&symbol) {
                missing.push(symbol);
            }
        }
        missing
    }
}

pub fn tooltip(point: &SmoothedPoint) -> Vec<String> {
    let mut lines = vec![
        format!("Position: {}", point.residue.position),
        format!("Amino Acid: {}", point.residue.symbol),
        format!("P-Value: {:.2}", point.residue.raw_score),
    ];
    if let Some(mean) = point.rolling_mean {
        lines.push(format!("Rolling Mean: {:.2}", mean));
    }
    lines
}

pub fn legend(table: &ScoreTable) -> Vec<String> {
    table
        .entries()
        .iter()
        .map(|(symbol, score)| format!("{}: {}", symbol, score))
        .collect()
}

/// Bar length for `value` on the fixed Y domain; out-of-range values saturate.
pub fn bar_len(value: f64, width: usize) -> usize {
    let (lo, hi) = Y_DOMAIN;
    let frac = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    (frac * width as f64).round() as usize
}
