use analytics::SymbolReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Placeholder for metrics that are absent (empty window, indicator
/// warm-up, missing live price).
const ABSENT: &str = "-";

/// Prints the market overview table followed by one interval table per symbol.
pub fn print_dashboard(reports: &[SymbolReport]) {
    println!("Market Overview: Current Price vs. All-Time High");
    println!("{}", overview_table(reports));

    for report in reports {
        println!();
        println!("{} price by interval", report.symbol);
        println!("{}", interval_table(report));
    }
}

fn overview_table(reports: &[SymbolReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Symbol", "All-Time High", "Current Price", "% From ATH"]);

    for report in reports {
        table.add_row(vec![
            Cell::new(&report.symbol),
            price_cell(report.all_time_high),
            price_cell(report.current_price),
            percent_cell(report.percent_from_ath),
        ]);
    }

    table
}

fn interval_table(report: &SymbolReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Interval", "High", "Low", "Close", "SMA 50", "SMA 200", "EMA 50", "EMA 200",
        ]);

    for (name, summary) in &report.intervals {
        match summary {
            Some(s) => {
                table.add_row(vec![
                    Cell::new(name),
                    price_cell(Some(s.high)),
                    price_cell(Some(s.low)),
                    price_cell(Some(s.close)),
                    price_cell(s.indicators.sma_50),
                    price_cell(s.indicators.sma_200),
                    price_cell(s.indicators.ema_50),
                    price_cell(s.indicators.ema_200),
                ]);
            }
            None => {
                let mut row = vec![Cell::new(name)];
                row.extend((0..7).map(|_| Cell::new(ABSENT).set_alignment(CellAlignment::Center)));
                table.add_row(row);
            }
        }
    }

    table
}

fn price_cell(value: Option<Decimal>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("$ {}", v.round_dp(2))).set_alignment(CellAlignment::Right),
        None => Cell::new(ABSENT).set_alignment(CellAlignment::Center),
    }
}

fn percent_cell(value: Option<Decimal>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{v} %")).set_alignment(CellAlignment::Right),
        None => Cell::new(ABSENT).set_alignment(CellAlignment::Center),
    }
}
