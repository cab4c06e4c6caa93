use crate::reports;
use clap::Args;
use fusionview::config::Config;
use fusionview::fusion::load_pairs;
use fusionview::scorer::Scorer;
use fusionview::view::{CardView, Side};
use fusionview::FvResult;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct CardsArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub input: PathBuf,

    /// Also chart host and target sequences
    #[arg(long, default_value_t = false)]
    pub chart: bool,

    /// Only cards whose host or target gene name contains this text
    #[arg(short, long)]
    pub gene: Option<String>,
}

pub fn run(args: CardsArgs, scorer: Arc<Scorer>) -> FvResult<()> {
    let window = scorer.default_window()?;
    let pairs = load_pairs(&args.input)?;

    let filter = args.gene.as_ref().map(|g| g.to_lowercase());
    let cards: Vec<CardView> = pairs
        .par_iter()
        .filter(|p| match &filter {
            Some(f) => {
                p.host_gene_name.to_lowercase().contains(f)
                    || p.target_gene_name.to_lowercase().contains(f)
            }
            None => true,
        })
        .map(CardView::from_pair)
        .collect();

    if cards.is_empty() {
        println!("No fusion pairs found matching criteria.");
        return Ok(());
    }

    // Series are independent per card; score them in parallel, print in order.
    let charts: Vec<_> = if args.chart {
        cards
            .par_iter()
            .map(|card| {
                [Side::Host, Side::Target].map(|side| {
                    let mut chart = card.chart(side, scorer.clone(), window);
                    chart.series();
                    chart
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    for (idx, card) in cards.iter().enumerate() {
        reports::print_card(card);
        if let Some(pair_charts) = charts.get(idx) {
            for chart in pair_charts {
                let mut chart = chart.clone();
                chart.open();
                reports::print_chart(&mut chart, false);
            }
        }
    }

    reports::print_summary(&cards, &scorer, window);
    Ok(())
}
