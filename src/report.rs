//! Plain-text report over fetched financial statements.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::statement::{flag, Statement};

/// Text returned by [`statements_report`] for an empty input.
pub const NO_DATA_MESSAGE: &str = "[Error]No statement data found.";

/// How a raw statement value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// `"<value> JPY"`
    Yen,
    /// `"<value> JPY/share"`
    PerShare,
    /// `"<value> JPY/unit"` (REIT distributions)
    PerUnit,
    /// Decimal ratio as a percentage with two decimals
    Ratio,
    /// `"<value> shares"`
    Shares,
}

impl Unit {
    fn format(self, value: &str) -> String {
        match self {
            Unit::Yen => format!("{} JPY", value),
            Unit::PerShare => format!("{} JPY/share", value),
            Unit::PerUnit => format!("{} JPY/unit", value),
            Unit::Shares => format!("{} shares", value),
            Unit::Ratio => match Decimal::from_str(value) {
                Ok(ratio) => {
                    let percent = (ratio * Decimal::ONE_HUNDRED)
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                    format!("{:.2}%", percent)
                }
                Err(_) => format!("{} %", value),
            },
        }
    }
}

struct Section<'a> {
    title: &'static str,
    rows: Vec<(&'static str, &'a String, Unit)>,
}

impl Section<'_> {
    fn is_empty(&self) -> bool {
        self.rows.iter().all(|(_, value, _)| value.is_empty())
    }
}

fn sections(st: &Statement) -> Vec<Section<'_>> {
    use Unit::*;

    vec![
        Section {
            title: "Consolidated P&L",
            rows: vec![
                ("Net sales", &st.net_sales, Yen),
                ("Operating profit", &st.operating_profit, Yen),
                ("Ordinary profit", &st.ordinary_profit, Yen),
                ("Net income", &st.profit, Yen),
                ("EPS", &st.earnings_per_share, PerShare),
                ("Diluted EPS", &st.diluted_earnings_per_share, PerShare),
            ],
        },
        Section {
            title: "Consolidated Financial Position",
            rows: vec![
                ("Total assets", &st.total_assets, Yen),
                ("Equity", &st.equity, Yen),
                ("Equity ratio", &st.equity_to_asset_ratio, Ratio),
                ("BPS", &st.book_value_per_share, PerShare),
            ],
        },
        Section {
            title: "Cash Flows",
            rows: vec![
                ("Operating CF", &st.cash_flows_from_operating_activities, Yen),
                ("Investing CF", &st.cash_flows_from_investing_activities, Yen),
                ("Financing CF", &st.cash_flows_from_financing_activities, Yen),
                ("Cash & equivalents", &st.cash_and_equivalents, Yen),
            ],
        },
        Section {
            title: "Dividend Results",
            rows: vec![
                ("1st quarter-end dividend", &st.result_dividend_per_share_1st_quarter, PerShare),
                ("2nd quarter-end dividend", &st.result_dividend_per_share_2nd_quarter, PerShare),
                ("3rd quarter-end dividend", &st.result_dividend_per_share_3rd_quarter, PerShare),
                ("Year-end dividend", &st.result_dividend_per_share_fiscal_year_end, PerShare),
                ("Annual total dividend", &st.result_dividend_per_share_annual, PerShare),
                ("Distribution per unit (REIT)", &st.distributions_per_unit, PerUnit),
                ("Total dividends paid", &st.result_total_dividend_paid_annual, Yen),
                ("Payout ratio", &st.result_payout_ratio_annual, Ratio),
            ],
        },
        Section {
            title: "Dividend Forecast",
            rows: vec![
                ("1st quarter-end forecast", &st.forecast_dividend_per_share_1st_quarter, PerShare),
                ("2nd quarter-end forecast", &st.forecast_dividend_per_share_2nd_quarter, PerShare),
                ("3rd quarter-end forecast", &st.forecast_dividend_per_share_3rd_quarter, PerShare),
                ("Year-end forecast", &st.forecast_dividend_per_share_fiscal_year_end, PerShare),
                ("Annual total forecast", &st.forecast_dividend_per_share_annual, PerShare),
                (
                    "Distribution per unit forecast (REIT)",
                    &st.forecast_distributions_per_unit,
                    PerUnit,
                ),
                ("(Forecast) payout ratio", &st.forecast_payout_ratio_annual, Ratio),
            ],
        },
        Section {
            title: "Earnings Forecast (Current FY)",
            rows: vec![
                ("Net sales (2Q forecast)", &st.forecast_net_sales_2nd_quarter, Yen),
                ("Operating profit (2Q forecast)", &st.forecast_operating_profit_2nd_quarter, Yen),
                ("Ordinary profit (2Q forecast)", &st.forecast_ordinary_profit_2nd_quarter, Yen),
                ("Net income (2Q forecast)", &st.forecast_profit_2nd_quarter, Yen),
                ("EPS (2Q forecast)", &st.forecast_earnings_per_share_2nd_quarter, PerShare),
                ("Net sales (full-year forecast)", &st.forecast_net_sales, Yen),
                ("Operating profit (full-year)", &st.forecast_operating_profit, Yen),
                ("Ordinary profit (full-year)", &st.forecast_ordinary_profit, Yen),
                ("Net income (full-year)", &st.forecast_profit, Yen),
                ("EPS (full-year)", &st.forecast_earnings_per_share, PerShare),
            ],
        },
        Section {
            title: "Earnings Forecast (Next FY)",
            rows: vec![
                ("Net sales (2Q forecast)", &st.next_year_forecast_net_sales_2nd_quarter, Yen),
                (
                    "Operating profit (2Q forecast)",
                    &st.next_year_forecast_operating_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "Ordinary profit (2Q forecast)",
                    &st.next_year_forecast_ordinary_profit_2nd_quarter,
                    Yen,
                ),
                ("Net income (2Q forecast)", &st.next_year_forecast_profit_2nd_quarter, Yen),
                (
                    "EPS (2Q forecast)",
                    &st.next_year_forecast_earnings_per_share_2nd_quarter,
                    PerShare,
                ),
                ("Net sales (full-year forecast)", &st.next_year_forecast_net_sales, Yen),
                ("Operating profit (full-year)", &st.next_year_forecast_operating_profit, Yen),
                ("Ordinary profit (full-year)", &st.next_year_forecast_ordinary_profit, Yen),
                ("Net income (full-year)", &st.next_year_forecast_profit, Yen),
                ("EPS (full-year)", &st.next_year_forecast_earnings_per_share, PerShare),
            ],
        },
        Section {
            title: "Non-Consolidated Results",
            rows: vec![
                ("Net sales (non-consolidated)", &st.non_consolidated_net_sales, Yen),
                ("Operating profit (non-consolidated)", &st.non_consolidated_operating_profit, Yen),
                ("Ordinary profit (non-consolidated)", &st.non_consolidated_ordinary_profit, Yen),
                ("Net income (non-consolidated)", &st.non_consolidated_profit, Yen),
                ("EPS (non-consolidated)", &st.non_consolidated_earnings_per_share, PerShare),
            ],
        },
        Section {
            title: "Non-Consolidated Forecast (Current FY)",
            rows: vec![
                (
                    "Net sales (2Q forecast, non-consolidated)",
                    &st.forecast_non_consolidated_net_sales_2nd_quarter,
                    Yen,
                ),
                (
                    "Operating profit (2Q forecast, non-consolidated)",
                    &st.forecast_non_consolidated_operating_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "Ordinary profit (2Q forecast, non-consolidated)",
                    &st.forecast_non_consolidated_ordinary_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "Net income (2Q forecast, non-consolidated)",
                    &st.forecast_non_consolidated_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "EPS (2Q forecast, non-consolidated)",
                    &st.forecast_non_consolidated_earnings_per_share_2nd_quarter,
                    PerShare,
                ),
                (
                    "Net sales (full-year forecast, non-consolidated)",
                    &st.forecast_non_consolidated_net_sales,
                    Yen,
                ),
                (
                    "Operating profit (full-year, non-consolidated)",
                    &st.forecast_non_consolidated_operating_profit,
                    Yen,
                ),
                (
                    "Ordinary profit (full-year, non-consolidated)",
                    &st.forecast_non_consolidated_ordinary_profit,
                    Yen,
                ),
                (
                    "Net income (full-year, non-consolidated)",
                    &st.forecast_non_consolidated_profit,
                    Yen,
                ),
                (
                    "EPS (full-year, non-consolidated)",
                    &st.forecast_non_consolidated_earnings_per_share,
                    PerShare,
                ),
            ],
        },
        Section {
            title: "Non-Consolidated Forecast (Next FY)",
            rows: vec![
                (
                    "Net sales (2Q forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_net_sales_2nd_quarter,
                    Yen,
                ),
                (
                    "Operating profit (2Q forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_operating_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "Ordinary profit (2Q forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_ordinary_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "Net income (2Q forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_profit_2nd_quarter,
                    Yen,
                ),
                (
                    "EPS (2Q forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_earnings_per_share_2nd_quarter,
                    PerShare,
                ),
                (
                    "Net sales (full-year forecast, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_net_sales,
                    Yen,
                ),
                (
                    "Operating profit (full-year, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_operating_profit,
                    Yen,
                ),
                (
                    "Ordinary profit (full-year, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_ordinary_profit,
                    Yen,
                ),
                (
                    "Net income (full-year, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_profit,
                    Yen,
                ),
                (
                    "EPS (full-year, non-consolidated)",
                    &st.next_year_forecast_non_consolidated_earnings_per_share,
                    PerShare,
                ),
            ],
        },
    ]
}

fn accounting_notes(st: &Statement) -> Vec<&'static str> {
    [
        (
            &st.material_changes_in_subsidiaries,
            "Significant changes in subsidiaries during the period",
        ),
        (
            &st.significant_changes_in_the_scope_of_consolidation,
            "Significant changes in the scope of consolidation",
        ),
        (
            &st.changes_based_on_revisions_of_accounting_standard,
            "Changes in accounting policy due to revisions of accounting standards",
        ),
        (
            &st.changes_other_than_ones_based_on_revisions_of_accounting_standard,
            "Changes in accounting policy other than those based on revisions",
        ),
        (&st.changes_in_accounting_estimates, "Changes in accounting estimates"),
        (&st.retrospective_restatement, "Retrospective restatement"),
    ]
    .into_iter()
    .filter(|(value, _)| flag(value))
    .map(|(_, note)| note)
    .collect()
}

fn shares_section(st: &Statement) -> Section<'_> {
    Section {
        title: "Shares Outstanding",
        rows: vec![
            (
                "Issued shares at FY-end (incl. treasury)",
                &st.number_of_issued_and_outstanding_shares_at_the_end_of_fiscal_year_including_treasury_stock,
                Unit::Shares,
            ),
            (
                "Treasury shares at FY-end",
                &st.number_of_treasury_stock_at_the_end_of_fiscal_year,
                Unit::Shares,
            ),
            (
                "Average shares during the period",
                &st.average_number_of_shares,
                Unit::Shares,
            ),
        ],
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section<'_>) -> fmt::Result {
    if section.is_empty() {
        return Ok(());
    }
    writeln!(f, "▼{}", section.title)?;
    for (label, value, unit) in &section.rows {
        if !value.is_empty() {
            writeln!(f, "   {}: {}", label, unit.format(value))?;
        }
    }
    Ok(())
}

/// Display adapter rendering statements as a text report.
///
/// Statements are ordered by disclosure date and time. Sections whose
/// values are all empty are left out.
pub struct StatementsReport<'a> {
    statements: Vec<&'a Statement>,
}

impl<'a> StatementsReport<'a> {
    /// Build a report over `statements` without reordering the caller's slice.
    pub fn new(statements: &'a [Statement]) -> Self {
        let mut statements: Vec<&Statement> = statements.iter().collect();
        statements.sort_by(|a, b| {
            (a.disclosed_date.as_str(), a.disclosed_time.as_str())
                .cmp(&(b.disclosed_date.as_str(), b.disclosed_time.as_str()))
        });
        Self { statements }
    }
}

impl fmt::Display for StatementsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str(NO_DATA_MESSAGE);
        }

        for (i, st) in self.statements.iter().enumerate() {
            writeln!(f, "Statement #{}", i + 1)?;
            writeln!(
                f,
                "Disclosure date/time: {} {}",
                st.disclosed_date, st.disclosed_time
            )?;
            writeln!(f, "Document type: {}", st.type_of_document)?;
            if !st.type_of_current_period.is_empty() {
                writeln!(
                    f,
                    "Fiscal period: {} ({} ~ {})",
                    st.type_of_current_period,
                    st.current_period_start_date,
                    st.current_period_end_date
                )?;
            }

            for section in sections(st) {
                write_section(f, &section)?;
            }

            let notes = accounting_notes(st);
            if !notes.is_empty() {
                writeln!(f, "▼Important Accounting Changes / Notes")?;
                for note in notes {
                    writeln!(f, "   {}", note)?;
                }
            }

            write_section(f, &shares_section(st))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render `statements` as a text report.
///
/// Returns [`NO_DATA_MESSAGE`] when `statements` is empty.
pub fn statements_report(statements: &[Statement]) -> String {
    StatementsReport::new(statements).to_string()
}
