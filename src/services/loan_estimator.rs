//! Servicio de estimación de préstamos con interés plano
//!
//! El interés se calcula una sola vez sobre el principal original para todo
//! el plazo (sin saldo decreciente ni tabla de amortización):
//!
//!   principal     = max(precio - entrada, 0) + cargo fijo
//!   meses         = plazo normalizado a meses (suelo de 1)
//!   interés total = principal × (tasa/100) × (meses/12)
//!   cuota mensual = (principal + interés total) / meses
//!
//! La estimación es una función pura y total: las entradas inválidas se
//! normalizan en lugar de rechazarse, y cualquier valor no finito se
//! sustituye por 0 antes de devolver el resultado.

use serde::{Deserialize, Serialize};

/// Cargo fijo de tramitación que se suma siempre al principal financiado
pub const FIXED_PROCESSING_FEE: f64 = 8000.0;

/// Tope de tasa que muestran los sliders del sitio (la fórmula no lo impone)
pub const MAX_DISPLAY_RATE_PERCENT: f64 = 36.0;

/// Tope de plazo en meses que muestran los sliders del sitio
pub const MAX_DISPLAY_TENURE_MONTHS: u32 = 120;

/// Unidad en la que el cliente expresa el plazo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    Months,
    Years,
}

impl Default for TenureUnit {
    fn default() -> Self {
        TenureUnit::Months
    }
}

/// Moneda/idioma de presentación de importes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyLocale {
    #[serde(rename = "en-in")]
    EnIn,
    #[serde(rename = "en-us")]
    EnUs,
}

impl Default for CurrencyLocale {
    fn default() -> Self {
        CurrencyLocale::EnIn
    }
}

/// Entrada del estimador
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateRequest {
    pub on_road_price: f64,
    pub down_payment: f64,
    pub annual_flat_rate_percent: f64,
    pub tenure_value: i64,
    pub tenure_unit: TenureUnit,
}

/// Resultado derivado del estimador: todos los campos son finitos y >= 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanEstimate {
    pub financed_principal: f64,
    pub tenure_months: u32,
    pub tenure_years: f64,
    pub total_interest: f64,
    pub total_payable: f64,
    pub monthly_payment: f64,
}

/// Sustituir valores no finitos por 0
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Normalizar el plazo a meses. El suelo de 1 garantiza meses >= 1 aunque
/// llegue un 0 o un valor negativo que se colara de la validación del caller.
fn tenure_to_months(value: i64, unit: TenureUnit) -> u32 {
    let floored = value.max(1);
    let months = match unit {
        TenureUnit::Months => floored,
        TenureUnit::Years => floored.saturating_mul(12),
    };
    months.min(u32::MAX as i64) as u32
}

/// Calcular la estimación del préstamo.
///
/// No muta la entrada, no hace I/O y nunca falla: una entrada degenerada
/// produce una estimación degenerada (cercana a cero), no un error.
pub fn estimate(request: &EstimateRequest) -> LoanEstimate {
    // Importes a >= 0 (los ausentes llegan ya como 0 desde el DTO)
    let price = finite_or_zero(request.on_road_price).max(0.0);
    let down = finite_or_zero(request.down_payment).max(0.0);

    // Principal base tras la entrada, nunca negativo
    let base = (price - down).max(0.0);
    let principal = base + FIXED_PROCESSING_FEE;

    let months = tenure_to_months(request.tenure_value, request.tenure_unit);
    let years = months as f64 / 12.0;

    let rate_decimal = finite_or_zero(request.annual_flat_rate_percent).max(0.0) / 100.0;

    // Interés simple sobre el plazo completo
    let interest = principal * rate_decimal * years;
    let total = principal + interest;
    let monthly = if months > 0 { total / months as f64 } else { 0.0 };

    LoanEstimate {
        financed_principal: finite_or_zero(principal),
        tenure_months: months,
        tenure_years: finite_or_zero(years),
        total_interest: finite_or_zero(interest),
        total_payable: finite_or_zero(total),
        monthly_payment: finite_or_zero(monthly),
    }
}

/// Convertir el plazo entre unidades conservando la magnitud.
///
/// Se usa cuando la interfaz cambia de unidad: MESES → AÑOS redondea
/// value/12 y AÑOS → MESES redondea value×12 (redondeo half-away-from-zero),
/// siempre con suelo de 1.
pub fn convert_tenure(value: i64, from: TenureUnit, to: TenureUnit) -> i64 {
    if from == to {
        return value.max(1);
    }
    let converted = if from == TenureUnit::Months {
        (value as f64 / 12.0).round()
    } else {
        (value as f64 * 12.0).round()
    };
    (converted as i64).max(1)
}

/// Formatear un importe como moneda sin decimales.
///
/// Total para 0, valores enormes y fracciones: los no finitos se tratan
/// como 0 y las fracciones se redondean a la unidad entera más próxima.
pub fn format_currency(amount: f64, locale: CurrencyLocale) -> String {
    let whole = finite_or_zero(amount).max(0.0).round() as u128;
    match locale {
        CurrencyLocale::EnIn => format!("₹{}", group_digits_indian(&whole.to_string())),
        CurrencyLocale::EnUs => format!("${}", group_digits_thousands(&whole.to_string())),
    }
}

/// Agrupación india: últimos 3 dígitos y luego grupos de 2 (1,23,45,678)
fn group_digits_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Agrupación occidental en grupos de 3 (1,234,567)
fn group_digits_thousands(digits: &str) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut i = digits.len();
    while i > 3 {
        groups.push(&digits[i - 3..i]);
        i -= 3;
    }
    groups.push(&digits[..i]);
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        price: f64,
        down: f64,
        rate: f64,
        tenure_value: i64,
        tenure_unit: TenureUnit,
    ) -> EstimateRequest {
        EstimateRequest {
            on_road_price: price,
            down_payment: down,
            annual_flat_rate_percent: rate,
            tenure_value,
            tenure_unit,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected ~{}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_estimate_24_months() {
        // 120000 - 20000 + 8000 de cargo = 108000 a 11% plano por 2 años
        let result = estimate(&request(120_000.0, 20_000.0, 11.0, 24, TenureUnit::Months));
        assert_eq!(result.financed_principal, 108_000.0);
        assert_eq!(result.tenure_months, 24);
        assert_eq!(result.tenure_years, 2.0);
        assert_close(result.total_interest, 23_760.0);
        assert_close(result.total_payable, 131_760.0);
        assert_close(result.monthly_payment, 5_490.0);
    }

    #[test]
    fn test_estimate_years_equivalent_to_months() {
        // 2 años y 24 meses deben producir exactamente el mismo resultado
        let months = estimate(&request(120_000.0, 20_000.0, 11.0, 24, TenureUnit::Months));
        let years = estimate(&request(120_000.0, 20_000.0, 11.0, 2, TenureUnit::Years));
        assert_eq!(months, years);
    }

    #[test]
    fn test_estimate_full_down_payment_leaves_fee() {
        // Entrada completa: solo se financia el cargo de tramitación
        let result = estimate(&request(50_000.0, 50_000.0, 5.0, 12, TenureUnit::Months));
        assert_eq!(result.financed_principal, 8_000.0);
        assert_close(result.total_interest, 400.0);
        assert_close(result.total_payable, 8_400.0);
        assert_close(result.monthly_payment, 700.0);
    }

    #[test]
    fn test_estimate_down_payment_above_price() {
        // La entrada mayor que el precio no produce un principal negativo
        let result = estimate(&request(10_000.0, 15_000.0, 10.0, 12, TenureUnit::Months));
        assert_eq!(result.financed_principal, FIXED_PROCESSING_FEE);
    }

    #[test]
    fn test_estimate_zero_rate() {
        let result = estimate(&request(120_000.0, 20_000.0, 0.0, 24, TenureUnit::Months));
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_payable, result.financed_principal);
    }

    #[test]
    fn test_estimate_negative_inputs_clamped() {
        let result = estimate(&request(-5_000.0, -1_000.0, -3.0, 12, TenureUnit::Months));
        assert_eq!(result.financed_principal, FIXED_PROCESSING_FEE);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_estimate_tenure_floor() {
        // Plazo 0 o negativo se trata como 1, en ambas unidades
        let months = estimate(&request(100_000.0, 0.0, 10.0, 0, TenureUnit::Months));
        assert_eq!(months.tenure_months, 1);

        let years = estimate(&request(100_000.0, 0.0, 10.0, -3, TenureUnit::Years));
        assert_eq!(years.tenure_months, 12);
    }

    #[test]
    fn test_estimate_non_finite_substituted_with_zero() {
        let result = estimate(&request(
            100_000.0,
            0.0,
            f64::INFINITY,
            24,
            TenureUnit::Months,
        ));
        // La tasa infinita desborda interés, total y cuota: todos caen a 0
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_payable, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.financed_principal, 108_000.0);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let req = request(123_456.0, 7_890.0, 11.5, 36, TenureUnit::Months);
        assert_eq!(estimate(&req), estimate(&req));
    }

    #[test]
    fn test_estimate_payments_add_up() {
        let result = estimate(&request(250_000.0, 50_000.0, 9.5, 30, TenureUnit::Months));
        let reconstructed = result.monthly_payment * result.tenure_months as f64;
        assert!((reconstructed - result.total_payable).abs() < 1e-6);
    }

    #[test]
    fn test_convert_tenure_months_to_years() {
        assert_eq!(convert_tenure(24, TenureUnit::Months, TenureUnit::Years), 2);
        // 30/12 = 2.5 redondea alejándose de cero
        assert_eq!(convert_tenure(30, TenureUnit::Months, TenureUnit::Years), 3);
        // Menos de medio año cae al suelo de 1
        assert_eq!(convert_tenure(5, TenureUnit::Months, TenureUnit::Years), 1);
    }

    #[test]
    fn test_convert_tenure_years_to_months() {
        assert_eq!(convert_tenure(2, TenureUnit::Years, TenureUnit::Months), 24);
        assert_eq!(convert_tenure(0, TenureUnit::Years, TenureUnit::Months), 1);
        assert_eq!(convert_tenure(-4, TenureUnit::Years, TenureUnit::Months), 1);
    }

    #[test]
    fn test_convert_tenure_same_unit_keeps_floor() {
        assert_eq!(convert_tenure(18, TenureUnit::Months, TenureUnit::Months), 18);
        assert_eq!(convert_tenure(0, TenureUnit::Years, TenureUnit::Years), 1);
    }

    #[test]
    fn test_convert_tenure_round_trip() {
        // El viaje de ida y vuelta no recupera v: queda el valor redondeado
        for v in [5_i64, 24, 30, 100] {
            let trip = convert_tenure(
                convert_tenure(v, TenureUnit::Months, TenureUnit::Years),
                TenureUnit::Years,
                TenureUnit::Months,
            );
            let expected = (((v as f64 / 12.0).round() * 12.0).round() as i64).max(1);
            assert_eq!(trip, expected);
        }
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(108_000.0, CurrencyLocale::EnIn), "₹1,08,000");
        assert_eq!(format_currency(5_490.0, CurrencyLocale::EnIn), "₹5,490");
        assert_eq!(format_currency(131_760.0, CurrencyLocale::EnIn), "₹1,31,760");
        assert_eq!(
            format_currency(12_345_678.0, CurrencyLocale::EnIn),
            "₹1,23,45,678"
        );
        assert_eq!(format_currency(0.0, CurrencyLocale::EnIn), "₹0");
        assert_eq!(format_currency(999.0, CurrencyLocale::EnIn), "₹999");
    }

    #[test]
    fn test_format_currency_us_grouping() {
        assert_eq!(format_currency(1_234_567.0, CurrencyLocale::EnUs), "$1,234,567");
        assert_eq!(format_currency(42.0, CurrencyLocale::EnUs), "$42");
    }

    #[test]
    fn test_format_currency_total_over_odd_inputs() {
        // Fracciones se redondean; no finitos caen a 0
        assert_eq!(format_currency(5_490.4, CurrencyLocale::EnIn), "₹5,490");
        assert_eq!(format_currency(5_490.5, CurrencyLocale::EnIn), "₹5,491");
        assert_eq!(format_currency(f64::NAN, CurrencyLocale::EnIn), "₹0");
        assert_eq!(format_currency(f64::INFINITY, CurrencyLocale::EnIn), "₹0");
    }
}
