//! Pure display formatting for transaction fields.
//!
//! Everything here is side-effect free. Malformed input never fails a render;
//! each formatter falls back to a fixed sentinel string instead.

use crate::transaction::TransactionKind;

/// Zero-amount string shown when a value cannot be parsed.
pub const ZERO_CURRENCY: &str = "R$ 0,00";

/// Sentinel shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Data inválida";

/// Visual category of a status badge. Colors are assigned by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// A classified status: fixed label for known statuses, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub category: StatusCategory,
}

/// Visual accent for a monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueAccent {
    Neutral,
    Positive,
    Negative,
}

/// Format a decimal string as Brazilian reais: "1234.5" becomes "R$ 1.234,50".
///
/// Unparseable or non-finite input yields [`ZERO_CURRENCY`].
pub fn format_currency(value: &str) -> String {
    let parsed: f64 = match value.trim().parse() {
        Ok(v) if f64::is_finite(v) => v,
        _ => return ZERO_CURRENCY.to_string(),
    };

    let cents = (parsed.abs() * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let formatted = format!("R$ {},{:02}", whole, cents % 100);
    if parsed < 0.0 && cents > 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

// Insert a '.' between every group of three digits, from the right.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format an ISO-8601 timestamp as "dd/mm/YYYY HH:MM".
///
/// The timestamp is rendered in the offset it carries so output does not
/// depend on the machine's time zone. Timestamps without an offset are
/// accepted as naive date-times. Anything else yields [`INVALID_DATE`].
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%d/%m/%Y %H:%M").to_string();
    }
    INVALID_DATE.to_string()
}

/// Map a raw status onto its badge. Matching is case-insensitive; the five
/// known statuses get fixed labels, anything else falls back to a neutral
/// badge carrying the raw text.
pub fn classify_status(status: &str) -> StatusBadge {
    let (label, category) = match status.to_lowercase().as_str() {
        "pending" => ("Pendente", StatusCategory::Warning),
        "completed" => ("Concluído", StatusCategory::Success),
        "received" => ("Recebido", StatusCategory::Success),
        "failed" => ("Falhou", StatusCategory::Danger),
        "cancelled" => ("Cancelado", StatusCategory::Neutral),
        _ => {
            return StatusBadge {
                label: status.to_string(),
                category: StatusCategory::Neutral,
            }
        }
    };
    StatusBadge {
        label: label.to_string(),
        category,
    }
}

/// Fixed display label for a transaction kind.
pub fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::CashIn => "Depósito",
        TransactionKind::CashOut => "Saque",
    }
}

/// Accent for a value cell: a literal zero is neutral; anything else,
/// including unparseable values, follows the kind (positive for deposits,
/// negative for withdrawals).
pub fn value_accent(kind: TransactionKind, value: &str) -> ValueAccent {
    // Only an actual zero compares equal here; NaN from unparseable input
    // does not, so those values keep the kind accent.
    let parsed: f64 = value.trim().parse().unwrap_or(f64::NAN);
    if parsed == 0.0 {
        return ValueAccent::Neutral;
    }
    match kind {
        TransactionKind::CashIn => ValueAccent::Positive,
        TransactionKind::CashOut => ValueAccent::Negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== format_currency tests ====================

    #[test]
    fn test_format_currency_simple() {
        assert_eq!(format_currency("150.50"), "R$ 150,50");
    }

    #[test]
    fn test_format_currency_pads_cents() {
        assert_eq!(format_currency("1234.5"), "R$ 1.234,50");
        assert_eq!(format_currency("7"), "R$ 7,00");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency("1000000"), "R$ 1.000.000,00");
        assert_eq!(format_currency("999"), "R$ 999,00");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency("0.005"), "R$ 0,01");
        assert_eq!(format_currency("2.999"), "R$ 3,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency("-12.34"), "-R$ 12,34");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency("0"), "R$ 0,00");
        assert_eq!(format_currency("-0.0"), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_unparseable_falls_back() {
        assert_eq!(format_currency("abc"), ZERO_CURRENCY);
        assert_eq!(format_currency(""), ZERO_CURRENCY);
        assert_eq!(format_currency("12,50"), ZERO_CURRENCY);
    }

    #[test]
    fn test_format_currency_non_finite_falls_back() {
        assert_eq!(format_currency("inf"), ZERO_CURRENCY);
        assert_eq!(format_currency("NaN"), ZERO_CURRENCY);
    }

    // ==================== format_date tests ====================

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "15/01/2024 10:30");
    }

    #[test]
    fn test_format_date_keeps_offset() {
        // Rendered in the offset the timestamp carries, not UTC.
        assert_eq!(format_date("2024-01-15T10:30:00-03:00"), "15/01/2024 10:30");
    }

    #[test]
    fn test_format_date_naive() {
        assert_eq!(format_date("2024-12-31T23:59:59"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date_fractional_seconds() {
        assert_eq!(format_date("2024-01-15T10:30:00.123Z"), "15/01/2024 10:30");
    }

    #[test]
    fn test_format_date_invalid_falls_back() {
        assert_eq!(format_date("not a date"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2024-13-40T99:99:99Z"), INVALID_DATE);
    }

    // ==================== classify_status tests ====================

    #[test]
    fn test_classify_status_known_values() {
        assert_eq!(classify_status("pending").label, "Pendente");
        assert_eq!(classify_status("pending").category, StatusCategory::Warning);
        assert_eq!(classify_status("completed").label, "Concluído");
        assert_eq!(classify_status("completed").category, StatusCategory::Success);
        assert_eq!(classify_status("received").label, "Recebido");
        assert_eq!(classify_status("received").category, StatusCategory::Success);
        assert_eq!(classify_status("failed").label, "Falhou");
        assert_eq!(classify_status("failed").category, StatusCategory::Danger);
        assert_eq!(classify_status("cancelled").label, "Cancelado");
        assert_eq!(classify_status("cancelled").category, StatusCategory::Neutral);
    }

    #[test]
    fn test_classify_status_is_case_insensitive() {
        assert_eq!(classify_status("PENDING"), classify_status("pending"));
        assert_eq!(classify_status("Pending"), classify_status("pending"));
        assert_eq!(classify_status("CoMpLeTeD"), classify_status("completed"));
    }

    #[test]
    fn test_classify_status_unknown_keeps_raw_text() {
        let badge = classify_status("Processing");
        assert_eq!(badge.label, "Processing");
        assert_eq!(badge.category, StatusCategory::Neutral);
    }

    // ==================== kind / accent tests ====================

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(TransactionKind::CashIn), "Depósito");
        assert_eq!(kind_label(TransactionKind::CashOut), "Saque");
    }

    #[test]
    fn test_value_accent_zero_is_neutral() {
        assert_eq!(value_accent(TransactionKind::CashIn, "0"), ValueAccent::Neutral);
        assert_eq!(value_accent(TransactionKind::CashOut, "0.00"), ValueAccent::Neutral);
    }

    #[test]
    fn test_value_accent_follows_kind() {
        assert_eq!(value_accent(TransactionKind::CashIn, "10.00"), ValueAccent::Positive);
        assert_eq!(value_accent(TransactionKind::CashOut, "10.00"), ValueAccent::Negative);
    }

    #[test]
    fn test_value_accent_unparseable_follows_kind() {
        assert_eq!(value_accent(TransactionKind::CashIn, "oops"), ValueAccent::Positive);
        assert_eq!(value_accent(TransactionKind::CashOut, "oops"), ValueAccent::Negative);
    }
}
