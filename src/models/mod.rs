use serde::{Deserialize, Serialize};

/// Product candidate as seen by the ranking engine.
///
/// Candidates arrive already filtered and paginated by the catalog query
/// layer; the engine only orders them. Fields the upstream feeds cannot
/// guarantee are optional, and an absent field simply contributes no signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    /// Categories in descending specificity; the first entry is the primary
    /// category used for affinity lookups.
    pub categories: Vec<String>,
    pub store_name: String,
    pub gender: Option<Gender>,
    pub price: Option<f64>,
    /// Raw delivery estimate text, e.g. "2-4 days"; bucketed by the caller's
    /// `Bucketer` before it is used as a signal key.
    pub eta_text: Option<String>,
    /// Authoritative popularity counter supplied by the remote counter
    /// service; the engine only reads it.
    pub remote_view_count: u64,
}

impl Product {
    /// First category, or the empty string when the list is empty.
    pub fn primary_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or("")
    }
}

/// Normalized product gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Women,
    Men,
    Unisex,
    Kids,
}

impl Gender {
    /// Parse a raw upstream value. Unknown values map to `None` rather than
    /// an error; a missing gender just contributes no signal.
    pub fn from_raw(raw: &str) -> Option<Gender> {
        match raw.trim().to_lowercase().as_str() {
            "women" | "woman" | "female" | "f" | "ladies" => Some(Gender::Women),
            "men" | "man" | "male" | "m" | "gents" => Some(Gender::Men),
            "unisex" | "all" | "everyone" => Some(Gender::Unisex),
            "kids" | "children" | "child" | "junior" => Some(Gender::Kids),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Gender::Women => "women",
            Gender::Men => "men",
            Gender::Unisex => "unisex",
            Gender::Kids => "kids",
        }
    }
}

/// Candidate paired with its score, produced and consumed within a single
/// ranking call.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub product: Product,
    pub score: f64,
}
