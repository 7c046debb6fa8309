/// Shares held and the price they were acquired at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub shares: f64,
    pub strike: f64,
}

/// Position valuation at one quote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSnapshot {
    pub position_value: f64,
    pub cost_basis: f64,
    pub unrealized_pl: f64,

    /// Percent of cost basis. `0.0` when the cost basis is zero.
    pub unrealized_pl_pct: f64,

    /// Per-share net change times shares.
    pub daily_dollar_change: f64,
}

impl Position {
    pub fn new(shares: f64, strike: f64) -> Self {
        Self { shares, strike }
    }

    pub fn snapshot(&self, price: f64, net_change_per_share: f64) -> PositionSnapshot {
        let position_value = price * self.shares;
        let cost_basis = self.strike * self.shares;
        let unrealized_pl = position_value - cost_basis;
        let unrealized_pl_pct = if cost_basis != 0.0 {
            unrealized_pl / cost_basis * 100.0
        } else {
            0.0
        };

        PositionSnapshot {
            position_value,
            cost_basis,
            unrealized_pl,
            unrealized_pl_pct,
            daily_dollar_change: net_change_per_share * self.shares,
        }
    }
}
