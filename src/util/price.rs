//! Price rendering for integer-cent amounts.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Render an integer-cent amount as `"$d.cc"`, always with two decimals.
///
/// Integer arithmetic throughout; no floating point, so cents stay exact.
#[must_use]
pub fn format_price_cents(price_cents: i64) -> String {
    let sign = if price_cents < 0 { "-" } else { "" };
    let cents = price_cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}
