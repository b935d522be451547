//! Input parsing shared by the portal forms.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// A strictly positive amount of money.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err("Enter an amount greater than zero."),
    }
}

/// A positive record id typed by the user.
pub(crate) fn parse_id(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Enter a valid id."),
    }
}

/// Whether `raw` is a calendar date written as `YYYY-MM-DD`.
pub(crate) fn is_iso_date(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) = (year.parse::<i32>(), month.parse::<u8>(), day.parse::<u8>()) else {
        return false;
    };
    time::Month::try_from(month)
        .and_then(|month| time::Date::from_calendar_date(year, month, day))
        .is_ok()
}

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
pub(crate) fn is_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

pub(crate) fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
