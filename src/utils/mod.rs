// Utility helpers for the personalization engine: signal-key normalization
// and the standard bucketing scheme for price and delivery-time signals.

/// Lowercase and trim a raw signal key. Affinity keys are case-insensitive
/// except in the product dimension, which stores stringified numeric ids.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Discretizes continuous or free-text candidate fields into opaque bucket
/// keys. The engine never interprets the returned strings; any scheme works
/// as long as it is stable across calls within a session. An empty string
/// means "no bucket" and contributes no signal.
pub trait Bucketer {
    fn price_bucket(&self, price: f64) -> String;
    fn eta_bucket(&self, eta_text: &str) -> String;
}

/// Default bucketing scheme shipped with the engine.
///
/// Prices fall into five bands; delivery estimates are keyed off the first
/// integer found in the raw text (the optimistic end of a "2-4 days" range).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBucketer;

impl Bucketer for StandardBucketer {
    fn price_bucket(&self, price: f64) -> String {
        if !price.is_finite() || price <= 0.0 {
            return String::new();
        }
        let bucket = if price < 15.0 {
            "budget"
        } else if price < 40.0 {
            "low"
        } else if price < 90.0 {
            "mid"
        } else if price < 180.0 {
            "high"
        } else {
            "premium"
        };
        bucket.to_string()
    }

    fn eta_bucket(&self, eta_text: &str) -> String {
        let days = match leading_integer(eta_text) {
            Some(days) => days,
            None => return String::new(),
        };
        let bucket = match days {
            0 => "same-day",
            1..=2 => "express",
            3..=5 => "standard",
            _ => "extended",
        };
        bucket.to_string()
    }
}

/// First unsigned integer appearing in the text, if any.
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
