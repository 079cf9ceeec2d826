//! Income-statement line items requested from the timeseries endpoint, in
//! display order (top of the statement first).

pub(crate) const INCOME_STATEMENT_KEYS: &[&str] = &[
    "TotalRevenue",
    "OperatingRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "OperatingExpense",
    "SellingGeneralAndAdministration",
    "GeneralAndAdministrativeExpense",
    "SellingAndMarketingExpense",
    "ResearchAndDevelopment",
    "DepreciationAndAmortizationInIncomeStatement",
    "OtherOperatingExpenses",
    "OperatingIncome",
    "NetNonOperatingInterestIncomeExpense",
    "InterestIncomeNonOperating",
    "InterestExpenseNonOperating",
    "OtherIncomeExpense",
    "SpecialIncomeCharges",
    "WriteOff",
    "OtherNonOperatingIncomeExpenses",
    "EarningsFromEquityInterest",
    "PretaxIncome",
    "TaxProvision",
    "NetIncomeContinuousOperations",
    "NetIncomeDiscontinuousOperations",
    "NetIncomeIncludingNoncontrollingInterests",
    "MinorityInterests",
    "NetIncome",
    "PreferredStockDividends",
    "NetIncomeCommonStockholders",
    "DilutedNIAvailtoComStockholders",
    "BasicEPS",
    "DilutedEPS",
    "BasicAverageShares",
    "DilutedAverageShares",
    "TotalOperatingIncomeAsReported",
    "TotalExpenses",
    "NetIncomeFromContinuingAndDiscontinuedOperation",
    "NormalizedIncome",
    "InterestIncome",
    "InterestExpense",
    "NetInterestIncome",
    "EBIT",
    "EBITDA",
    "ReconciledCostOfRevenue",
    "ReconciledDepreciation",
    "NetIncomeFromContinuingOperationNetMinorityInterest",
    "TotalUnusualItemsExcludingGoodwill",
    "TotalUnusualItems",
    "NormalizedEBITDA",
    "TaxRateForCalcs",
    "TaxEffectOfUnusualItems",
];

/// Turns a camel-case provider key into a spaced label.
///
/// Runs of capitals are kept together as acronyms: `NormalizedEBITDA` becomes
/// `Normalized EBITDA`, `DilutedNIAvailtoComStockholders` becomes
/// `Diluted NI Availto Com Stockholders`.
pub(crate) fn pretty_label(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let word_start = !prev.is_uppercase() || next_is_lower;
            if word_start {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}
