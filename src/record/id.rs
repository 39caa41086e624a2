//! Record id normalization and assignment.
//!
//! Ids are stored as strings, but a hand-edited file may carry JSON numbers.
//! Both sides of every comparison go through [`normalize_id`] so that `"3"`,
//! `3` and `3.0` all address the same record.

use serde_json::Value;

/// Coerce a stored id value to its string form.
///
/// Strings are returned as-is, numbers are rendered without a trailing `.0`
/// when integral. Any other JSON kind has no id form.
pub fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                        (f as i64).to_string()
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

/// Loose id equality: the stored value matches when its normalized form
/// equals the requested id.
pub fn id_matches(stored: &Value, requested: &str) -> bool {
    normalize_id(stored).is_some_and(|id| id == requested)
}

/// Leading integer of an id, read the way `parseInt` reads it: optional
/// whitespace and sign, then as many digits as there are. `"3abc"` is 3,
/// `"-2"` is -2, `"abc"` has none. Magnitudes past `u64::MAX` saturate.
fn numeric_id(id: &str) -> Option<i128> {
    let trimmed = id.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let magnitude = digits.fold(0u64, |acc, b| {
        seen = true;
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    if !seen {
        return None;
    }
    let value = i128::from(magnitude);
    Some(if negative { -value } else { value })
}

/// Next id for a collection: one past the largest numeric id, never below
/// `"1"`. Ids without a leading integer are skipped. `None` once the largest
/// id is `u64::MAX`.
pub fn next_id<'a, I>(ids: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let max = ids
        .into_iter()
        .filter_map(normalize_id)
        .filter_map(|id| numeric_id(&id))
        .max()
        .unwrap_or(0)
        .max(0);
    u64::try_from(max)
        .ok()?
        .checked_add(1)
        .map(|next| next.to_string())
}
