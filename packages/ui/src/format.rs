//! Display helpers for amounts, timestamps and product blurbs.

use chrono::{DateTime, Local, Utc};

/// Group digits by thousands: `1234567` → `"1,234,567"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"50,000 VND"`
pub fn format_vnd(amount: i64) -> String {
    format!("{} VND", format_amount(amount))
}

/// Local wall-clock time, day first.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S %d/%m/%Y").to_string()
}

/// First `max_chars` characters followed by an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}
