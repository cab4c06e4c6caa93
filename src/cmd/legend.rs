use crate::reports;
use clap::Args;
use fusionview::config::Config;
use fusionview::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct LegendArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(scorer: &Scorer) {
    reports::print_legend(&scorer.table);
}
