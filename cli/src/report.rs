//! Fixed-layout position report.
//!
//! ```text
//!
//! 📊 EquipmentShare Stock Info (EQPT)
//!
//! — Market ———————————————————————————
//! Symbol:             EQPT
//! Last Sale Price:    $12.34
//! Net Change:         +0.12
//! Percent Change:     +0.98%
//! Price Trend:        ▁▂L▄▆H ▲
//!
//! — Your Position ————————————————————
//! Shares:             100
//! Strike Price:       $10.00
//! Position Value:     $1,234.00
//! Unrealized P/L:     $234.00 (23.40%)
//!
//! — Today ————————————————————————————
//! Today's $ Change:   $12.00
//! ```

use corelib::StockQuote;
use market::history::PriceHistory;
use market::position::Position;
use market::trend;

use crate::format::Formatter;

/// Lines in every report.
pub const REPORT_HEIGHT: usize = 18;

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn build(
        fmt: &dyn Formatter,
        quote: &StockQuote,
        history: &PriceHistory,
        position: &Position,
    ) -> Self {
        let snapshot = position.snapshot(quote.last_sale_price, quote.net_change);
        let sparkline = trend::render(&history.points());

        let title = match &quote.company_name {
            Some(name) => format!("📊 {name} Stock Info ({})", history.symbol()),
            None => format!("📊 Stock Info ({})", history.symbol()),
        };

        let pl = fmt.signed(snapshot.unrealized_pl, &fmt.money(snapshot.unrealized_pl));
        let pl_pct = fmt.signed(
            snapshot.unrealized_pl,
            &format!("{:.2}%", snapshot.unrealized_pl_pct),
        );
        let daily = fmt.signed(
            snapshot.daily_dollar_change,
            &fmt.money(snapshot.daily_dollar_change),
        );

        let lines = vec![
            String::new(),
            title,
            String::new(),
            rule("Market"),
            row("Symbol:", &quote.symbol),
            row("Last Sale Price:", &fmt.money(quote.last_sale_price)),
            row("Net Change:", or_na(&quote.net_change_display)),
            row("Percent Change:", or_na(&quote.percent_change_display)),
            row("Price Trend:", &fmt.sparkline(sparkline.as_ref())),
            String::new(),
            rule("Your Position"),
            row("Shares:", &fmt.number(position.shares)),
            row("Strike Price:", &fmt.money(position.strike)),
            row("Position Value:", &fmt.money(snapshot.position_value)),
            row("Unrealized P/L:", &format!("{pl} ({pl_pct})")),
            String::new(),
            rule("Today"),
            row("Today's $ Change:", &daily),
        ];

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

fn rule(title: &str) -> String {
    let fill = RULE_WIDTH.saturating_sub(title.chars().count() + 3);
    format!("— {title} {}", "—".repeat(fill))
}

fn row(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value}")
        .trim_end()
        .to_string()
}

fn or_na(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("N/A")
}
