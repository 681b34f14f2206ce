//! Financial statement models.

use serde::{Deserialize, Serialize};

/// One disclosure from `/fins/statements`.
///
/// The API delivers every value as a string, with `""` for fields that do
/// not apply to the document. Values are kept verbatim; the accounting
/// change flags are `"true"`/`"false"` strings.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Statement {
    // Disclosure metadata
    pub disclosed_date: String,
    pub disclosed_time: String,
    pub local_code: String,
    pub disclosure_number: String,
    pub type_of_document: String,
    pub type_of_current_period: String,
    pub current_period_start_date: String,
    pub current_period_end_date: String,
    pub current_fiscal_year_start_date: String,
    pub current_fiscal_year_end_date: String,
    pub next_fiscal_year_start_date: String,
    pub next_fiscal_year_end_date: String,

    // Consolidated results
    pub net_sales: String,
    pub operating_profit: String,
    pub ordinary_profit: String,
    pub profit: String,
    pub earnings_per_share: String,
    pub diluted_earnings_per_share: String,
    pub total_assets: String,
    pub equity: String,
    pub equity_to_asset_ratio: String,
    pub book_value_per_share: String,
    pub cash_flows_from_operating_activities: String,
    pub cash_flows_from_investing_activities: String,
    pub cash_flows_from_financing_activities: String,
    pub cash_and_equivalents: String,

    // Dividend results
    pub result_dividend_per_share_1st_quarter: String,
    pub result_dividend_per_share_2nd_quarter: String,
    pub result_dividend_per_share_3rd_quarter: String,
    pub result_dividend_per_share_fiscal_year_end: String,
    pub result_dividend_per_share_annual: String,
    #[serde(rename = "DistributionsPerUnit(REIT)")]
    pub distributions_per_unit: String,
    pub result_total_dividend_paid_annual: String,
    pub result_payout_ratio_annual: String,

    // Dividend forecast
    pub forecast_dividend_per_share_1st_quarter: String,
    pub forecast_dividend_per_share_2nd_quarter: String,
    pub forecast_dividend_per_share_3rd_quarter: String,
    pub forecast_dividend_per_share_fiscal_year_end: String,
    pub forecast_dividend_per_share_annual: String,
    #[serde(rename = "ForecastDistributionsPerUnit(REIT)")]
    pub forecast_distributions_per_unit: String,
    pub forecast_total_dividend_paid_annual: String,
    pub forecast_payout_ratio_annual: String,
    pub next_year_forecast_dividend_per_share_1st_quarter: String,
    pub next_year_forecast_dividend_per_share_2nd_quarter: String,
    pub next_year_forecast_dividend_per_share_3rd_quarter: String,
    pub next_year_forecast_dividend_per_share_fiscal_year_end: String,
    pub next_year_forecast_dividend_per_share_annual: String,
    #[serde(rename = "NextYearForecastDistributionsPerUnit(REIT)")]
    pub next_year_forecast_distributions_per_unit: String,
    pub next_year_forecast_payout_ratio_annual: String,

    // Consolidated forecasts
    pub forecast_net_sales_2nd_quarter: String,
    pub forecast_operating_profit_2nd_quarter: String,
    pub forecast_ordinary_profit_2nd_quarter: String,
    pub forecast_profit_2nd_quarter: String,
    pub forecast_earnings_per_share_2nd_quarter: String,
    pub next_year_forecast_net_sales_2nd_quarter: String,
    pub next_year_forecast_operating_profit_2nd_quarter: String,
    pub next_year_forecast_ordinary_profit_2nd_quarter: String,
    pub next_year_forecast_profit_2nd_quarter: String,
    pub next_year_forecast_earnings_per_share_2nd_quarter: String,
    pub forecast_net_sales: String,
    pub forecast_operating_profit: String,
    pub forecast_ordinary_profit: String,
    pub forecast_profit: String,
    pub forecast_earnings_per_share: String,
    pub next_year_forecast_net_sales: String,
    pub next_year_forecast_operating_profit: String,
    pub next_year_forecast_ordinary_profit: String,
    pub next_year_forecast_profit: String,
    pub next_year_forecast_earnings_per_share: String,

    // Accounting changes
    pub material_changes_in_subsidiaries: String,
    pub significant_changes_in_the_scope_of_consolidation: String,
    pub changes_based_on_revisions_of_accounting_standard: String,
    pub changes_other_than_ones_based_on_revisions_of_accounting_standard: String,
    pub changes_in_accounting_estimates: String,
    pub retrospective_restatement: String,

    // Shares
    pub number_of_issued_and_outstanding_shares_at_the_end_of_fiscal_year_including_treasury_stock:
        String,
    pub number_of_treasury_stock_at_the_end_of_fiscal_year: String,
    pub average_number_of_shares: String,

    // Non-consolidated results
    pub non_consolidated_net_sales: String,
    pub non_consolidated_operating_profit: String,
    pub non_consolidated_ordinary_profit: String,
    pub non_consolidated_profit: String,
    pub non_consolidated_earnings_per_share: String,
    pub non_consolidated_total_assets: String,
    pub non_consolidated_equity: String,
    pub non_consolidated_equity_to_asset_ratio: String,
    pub non_consolidated_book_value_per_share: String,

    // Non-consolidated forecasts
    pub forecast_non_consolidated_net_sales_2nd_quarter: String,
    pub forecast_non_consolidated_operating_profit_2nd_quarter: String,
    pub forecast_non_consolidated_ordinary_profit_2nd_quarter: String,
    pub forecast_non_consolidated_profit_2nd_quarter: String,
    pub forecast_non_consolidated_earnings_per_share_2nd_quarter: String,
    pub next_year_forecast_non_consolidated_net_sales_2nd_quarter: String,
    pub next_year_forecast_non_consolidated_operating_profit_2nd_quarter: String,
    pub next_year_forecast_non_consolidated_ordinary_profit_2nd_quarter: String,
    pub next_year_forecast_non_consolidated_profit_2nd_quarter: String,
    pub next_year_forecast_non_consolidated_earnings_per_share_2nd_quarter: String,
    pub forecast_non_consolidated_net_sales: String,
    pub forecast_non_consolidated_operating_profit: String,
    pub forecast_non_consolidated_ordinary_profit: String,
    pub forecast_non_consolidated_profit: String,
    pub forecast_non_consolidated_earnings_per_share: String,
    pub next_year_forecast_non_consolidated_net_sales: String,
    pub next_year_forecast_non_consolidated_operating_profit: String,
    pub next_year_forecast_non_consolidated_ordinary_profit: String,
    pub next_year_forecast_non_consolidated_profit: String,
    pub next_year_forecast_non_consolidated_earnings_per_share: String,
}

/// Parse one of the API's `"true"`/`"false"` flag strings.
pub(crate) fn flag(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_statement() {
        let json = r#"{
            "DisclosedDate": "2023-01-30",
            "DisclosedTime": "12:00:00",
            "LocalCode": "86970",
            "TypeOfDocument": "3QFinancialStatements_Consolidated_IFRS",
            "NetSales": "100529000000",
            "ResultDividendPerShare1stQuarter": "0.0",
            "DistributionsPerUnit(REIT)": "",
            "ForecastDistributionsPerUnit(REIT)": "1200",
            "NumberOfIssuedAndOutstandingSharesAtTheEndOfFiscalYearIncludingTreasuryStock": "528578441",
            "MaterialChangesInSubsidiaries": "false",
            "RetrospectiveRestatement": "true",
            "SomeFieldAddedLater": "ignored"
        }"#;

        let st: Statement = serde_json::from_str(json).unwrap();
        assert_eq!(st.disclosed_date, "2023-01-30");
        assert_eq!(st.local_code, "86970");
        assert_eq!(st.net_sales, "100529000000");
        assert_eq!(st.result_dividend_per_share_1st_quarter, "0.0");
        assert_eq!(st.forecast_distributions_per_unit, "1200");
        assert_eq!(
            st.number_of_issued_and_outstanding_shares_at_the_end_of_fiscal_year_including_treasury_stock,
            "528578441"
        );
        assert!(st.operating_profit.is_empty());
        assert!(!flag(&st.material_changes_in_subsidiaries));
        assert!(flag(&st.retrospective_restatement));
    }
}
