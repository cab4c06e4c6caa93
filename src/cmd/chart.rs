use crate::reports;
use clap::Args;
use fusionview::config::Config;
use fusionview::scorer::Scorer;
use fusionview::view::ChartView;
use fusionview::{FusionError, FvResult};
use std::sync::Arc;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub sequence: String,

    #[arg(long, default_value = "Sequence")]
    pub title: String,

    /// Print the tooltip for this 1-based position
    #[arg(long)]
    pub inspect: Option<usize>,

    /// Skip the legend below the series
    #[arg(long, default_value_t = false)]
    pub no_legend: bool,
}

pub fn run(args: ChartArgs, scorer: Arc<Scorer>) -> FvResult<()> {
    let window = scorer.default_window()?;
    debug!(
        "Charting {} residues, window {}",
        args.sequence.chars().count(),
        window
    );

    let mut chart = ChartView::new(scorer, &args.sequence, &args.title, window);
    chart.open();
    reports::print_chart(&mut chart, !args.no_legend);

    if let Some(pos) = args.inspect {
        let point = chart
            .series()
            .points
            .iter()
            .find(|p| p.residue.position == pos)
            .copied()
            .ok_or_else(|| {
                FusionError::InvalidArgument(format!(
                    "position {} is outside the sequence (1..={})",
                    pos,
                    args.sequence.chars().count()
                ))
            })?;
        reports::print_tooltip(&point);
    }
    Ok(())
}
