use serde::{Deserialize, Serialize};

use crate::services::loan_estimator::{
    format_currency, CurrencyLocale, LoanEstimate, TenureUnit, FIXED_PROCESSING_FEE,
    MAX_DISPLAY_RATE_PERCENT, MAX_DISPLAY_TENURE_MONTHS,
};

// Request para estimar un préstamo. Los campos ausentes se tratan como 0
// y el estimador los normaliza, igual que hacía la calculadora del sitio.
#[derive(Debug, Deserialize)]
pub struct EstimateLoanRequest {
    #[serde(default)]
    pub on_road_price: f64,
    #[serde(default)]
    pub down_payment: f64,
    #[serde(default)]
    pub annual_flat_rate_percent: f64,
    #[serde(default)]
    pub tenure_value: i64,
    #[serde(default)]
    pub tenure_unit: TenureUnit,
    #[serde(default)]
    pub locale: CurrencyLocale,
}

// Response con los importes crudos y su versión formateada para mostrar
#[derive(Debug, Serialize)]
pub struct EstimateLoanResponse {
    pub financed_principal: f64,
    pub tenure_months: u32,
    pub tenure_years: f64,
    pub total_interest: f64,
    pub total_payable: f64,
    pub monthly_payment: f64,
    pub formatted: FormattedAmounts,
}

#[derive(Debug, Serialize)]
pub struct FormattedAmounts {
    pub financed_principal: String,
    pub total_interest: String,
    pub total_payable: String,
    pub monthly_payment: String,
}

impl EstimateLoanResponse {
    pub fn from_estimate(estimate: LoanEstimate, locale: CurrencyLocale) -> Self {
        Self {
            financed_principal: estimate.financed_principal,
            tenure_months: estimate.tenure_months,
            tenure_years: estimate.tenure_years,
            total_interest: estimate.total_interest,
            total_payable: estimate.total_payable,
            monthly_payment: estimate.monthly_payment,
            formatted: FormattedAmounts {
                financed_principal: format_currency(estimate.financed_principal, locale),
                total_interest: format_currency(estimate.total_interest, locale),
                total_payable: format_currency(estimate.total_payable, locale),
                monthly_payment: format_currency(estimate.monthly_payment, locale),
            },
        }
    }
}

// Request para convertir el plazo al cambiar de unidad en la interfaz
#[derive(Debug, Deserialize)]
pub struct ConvertTenureRequest {
    #[serde(default)]
    pub value: i64,
    pub from_unit: TenureUnit,
    pub to_unit: TenureUnit,
}

#[derive(Debug, Serialize)]
pub struct ConvertTenureResponse {
    pub value: i64,
    pub unit: TenureUnit,
}

// Condiciones de la calculadora. Los topes son sugerencias para los sliders
// del sitio: la fórmula acepta valores mayores.
#[derive(Debug, Serialize)]
pub struct LoanTermsResponse {
    pub currency: String,
    pub fixed_processing_fee: f64,
    pub max_rate_percent: f64,
    pub min_tenure_months: u32,
    pub max_tenure_months: u32,
    pub max_tenure_years: u32,
}

impl LoanTermsResponse {
    pub fn current() -> Self {
        Self {
            currency: "INR".to_string(),
            fixed_processing_fee: FIXED_PROCESSING_FEE,
            max_rate_percent: MAX_DISPLAY_RATE_PERCENT,
            min_tenure_months: 1,
            max_tenure_months: MAX_DISPLAY_TENURE_MONTHS,
            max_tenure_years: MAX_DISPLAY_TENURE_MONTHS / 12,
        }
    }
}
