use cashcast_core::model::Cents;

/// Group an unsigned whole-unit amount with thousands separators
fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format an amount in cents, e.g. `-$1,234.56`
pub fn format_cents(value: Cents) -> String {
    let abs_value = value.unsigned_abs();
    let units = group_thousands(abs_value / 100);
    let cents = abs_value % 100;

    if value >= 0 {
        format!("${units}.{cents:02}")
    } else {
        format!("-${units}.{cents:02}")
    }
}

/// Format without cents (shorter format for tight columns), rounding half away from zero
pub fn format_cents_short(value: Cents) -> String {
    let abs_value = value.unsigned_abs();
    let units = group_thousands((abs_value + 50) / 100);

    if value >= 0 {
        format!("${units}")
    } else {
        format!("-${units}")
    }
}
