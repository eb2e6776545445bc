//! Plain-text summary of a report for terminal display.
//!
//! Number formatting lives here rather than in the stats layer; the
//! report JSON always carries plain numeric values.

use crate::stats::Stats;

/// Abbreviate a number to K/M/B for card-style display
pub fn format_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Token amounts carry the currency suffix
pub fn format_chz(value: f64) -> String {
    format!("{} CHZ", format_number(value))
}

/// Render the card block printed by `report --summary`
pub fn render_summary(stats: &Stats, series_days: usize) -> String {
    let rows = [
        ("Unique wallets", format_number(stats.unique_wallets as f64)),
        (
            "Total transactions",
            format_number(stats.total_transactions as f64),
        ),
        ("Gas spent", format_chz(stats.total_gas_used_chz)),
        ("Volume transferred", format_chz(stats.total_chz_transferred)),
        ("Bets received", format_chz(stats.bets_received)),
        (
            "Winnings redistributed",
            format_chz(stats.winnings_redistributed),
        ),
        ("Fees generated", format_chz(stats.fees_generated)),
        ("Days covered", series_days.to_string()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<24} {}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n")
}
