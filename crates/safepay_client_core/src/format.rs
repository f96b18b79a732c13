//! Display formatting for amounts and timestamps (en-IN conventions).

use chrono::{DateTime, Utc};

use crate::models::{Transaction, TransactionKind};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Two decimals with Indian digit grouping: 1234567.891 -> "12,34,567.89".
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let grouped = group_indian(integer_part);
    // no negative zero
    if value < 0.0 && formatted != "0.00" {
        format!("-{}.{}", grouped, decimal_part)
    } else {
        format!("{}.{}", grouped, decimal_part)
    }
}

/// Last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

pub fn format_inr(value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, format_amount(-value))
    } else {
        format!("{}{}", CURRENCY_SYMBOL, format_amount(value))
    }
}

/// "-₹120.00" for money sent, "+₹120.00" for money received.
pub fn signed_amount(tx: &Transaction) -> String {
    let sign = match tx.kind {
        TransactionKind::Sent => '-',
        TransactionKind::Received => '+',
    };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, format_amount(tx.amount.abs()))
}

/// RFC 3339 timestamp as "15 Oct 2026, 02:30 pm" (UTC). Unparseable input is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%-d %b %Y, %I:%M %P").to_string(),
        Err(_) => raw.to_string(),
    }
}
