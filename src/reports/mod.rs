use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fusionview::fusion::StatusBadge;
use fusionview::scorer::{ScoreTable, Scorer, SmoothedPoint, WindowSize};
use fusionview::view::{self, CardView, ChartView, SequencePanel};

const BAR_WIDTH: usize = 24;
const LEGEND_COLS: usize = 4;
const SEQ_WRAP: usize = 60;

fn badge_cell(badge: StatusBadge) -> Cell {
    let color = if badge.is_warning() {
        Color::Yellow
    } else {
        Color::Green
    };
    Cell::new(badge.to_string()).fg(color)
}

fn wrap_sequence(seq: &str) -> String {
    if seq.is_empty() {
        return "(empty)".to_string();
    }
    let chars: Vec<char> = seq.chars().collect();
    chars
        .chunks(SEQ_WRAP)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn panel_cell(panel: &SequencePanel) -> Cell {
    Cell::new(format!(
        "{} ({}, {} aa)\n{}",
        panel.title,
        panel.gene_name,
        panel.residue_count(),
        wrap_sequence(&panel.sequence)
    ))
}

pub fn print_card(card: &CardView) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(&card.header).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![badge_cell(card.badges[0]), badge_cell(card.badges[1])]);

    if let Some(desc) = &card.description {
        table.add_row(vec![
            Cell::new("Sequence Analysis").add_attribute(Attribute::Bold),
            Cell::new(desc),
        ]);
    }

    table.add_row(vec![panel_cell(&card.host), panel_cell(&card.target)]);
    println!("\n{}", table);
}

pub fn print_chart(chart: &mut ChartView, with_legend: bool) {
    if !chart.is_open() {
        return;
    }

    println!("\n📈 {} (window {})", chart.title(), chart.window());
    let missing = chart.fallback_symbols();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new("AA"),
        Cell::new("P-Value").fg(Color::Blue),
        Cell::new("Mean").fg(Color::Cyan),
        Cell::new(format!(
            "{:.0}{:>width$.0}",
            view::Y_DOMAIN.0,
            view::Y_DOMAIN.1,
            width = BAR_WIDTH - 1
        )),
    ]);

    for i in 0..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let series = chart.series();
    for point in &series.points {
        let raw = point.residue.raw_score;
        let mean = match point.rolling_mean {
            Some(m) => format!("{:.2}", m),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(point.residue.position),
            Cell::new(point.residue.symbol),
            Cell::new(format!("{:.2}", raw)).fg(Color::Blue),
            Cell::new(mean).fg(Color::Cyan),
            Cell::new("█".repeat(view::bar_len(raw, BAR_WIDTH))),
        ]);
    }

    if series.is_empty() {
        println!("(no residues)");
    } else {
        println!("{}", table);
    }

    if !missing.is_empty() {
        let symbols: Vec<String> = missing.iter().map(char::to_string).collect();
        println!(
            "Fallback score {} used for: {}",
            chart.table().fallback(),
            symbols.join(", ")
        );
    }

    if with_legend {
        print_legend(chart.table());
    }
}

pub fn print_tooltip(point: &SmoothedPoint) {
    println!();
    for line in view::tooltip(point) {
        println!("  {}", line);
    }
}

pub fn print_legend(score_table: &ScoreTable) {
    println!("\nLegend (fallback {})", score_table.fallback());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for chunk in view::legend(score_table).chunks(LEGEND_COLS) {
        table.add_row(chunk.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{}", table);
}

pub fn print_summary(cards: &[CardView], scorer: &Scorer, window: WindowSize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Fusion").add_attribute(Attribute::Bold),
        Cell::new("Frame"),
        Cell::new("Status"),
        Cell::new("Host aa"),
        Cell::new("Target aa"),
        Cell::new("Host μ").fg(Color::Cyan),
        Cell::new("Target μ").fg(Color::Cyan),
        Cell::new(format!("Peak μ (w={})", window)).fg(Color::Cyan),
    ]);

    for i in 3..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for card in cards {
        let host_mean = mean_score(scorer, &card.host.sequence);
        let target_mean = mean_score(scorer, &card.target.sequence);
        let peak = [&card.host.sequence, &card.target.sequence]
            .iter()
            .flat_map(|seq| scorer.smooth(seq, window).smoothed_values())
            .flatten()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))));

        table.add_row(vec![
            Cell::new(&card.header).add_attribute(Attribute::Bold),
            badge_cell(card.badges[0]),
            badge_cell(card.badges[1]),
            Cell::new(card.host.residue_count()),
            Cell::new(card.target.residue_count()),
            Cell::new(fmt_opt(host_mean)),
            Cell::new(fmt_opt(target_mean)),
            Cell::new(fmt_opt(peak)),
        ]);
    }
    println!("\n{}", table);
}

fn mean_score(scorer: &Scorer, sequence: &str) -> Option<f64> {
    let scored = scorer.score(sequence);
    if scored.is_empty() {
        return None;
    }
    let total: f64 = scored.iter().map(|r| r.raw_score).sum();
    Some(total / scored.len() as f64)
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.2}", x)).unwrap_or_else(|| "-".to_string())
}
