//! Request and response types for the search API.
//!
//! Response shapes are decoded into typed structs at the boundary. Keys the
//! renderer cannot do without (`total-hits`, `Ranked-objects`, `results`) are
//! required and surface as decode errors; per-record display fields are
//! optional and resolved by the renderer's fallback rules.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Fixed index queried by the organization endpoint.
pub const ORGANIZATION_INDEX: &str = "organizations_v3";

/// Inclusive bounds for the number of results a form may request.
pub const MIN_RESULT_SIZE: u8 = 1;
pub const MAX_RESULT_SIZE: u8 = 50;

// ============================================================================
// Languages and hierarchy depths
// ============================================================================

/// Languages served by `/search/{language}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Az,
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Az, Language::En, Language::Ru];

    /// Path segment and field-name infix for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::Az => "az",
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Az => "Azerbaijani",
            Language::En => "English",
            Language::Ru => "Russian",
        }
    }

    /// Example query shown in an empty query field.
    pub fn placeholder(self) -> &'static str {
        match self {
            Language::Az => "alüminium lövhələr",
            Language::En => "aluminium sheets",
            Language::Ru => "алюминиевые листы",
        }
    }

    /// Wire key holding this language's name at `depth`, e.g. `name_en_d4`.
    pub fn name_key(self, depth: Depth) -> String {
        format!("name_{}_d{}", self.code(), depth.level())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Level in the product taxonomy, from broad category (D1) to product (D4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    D1,
    D2,
    D3,
    D4,
}

impl Depth {
    pub const ALL: [Depth; 4] = [Depth::D1, Depth::D2, Depth::D3, Depth::D4];

    pub fn level(self) -> u8 {
        match self {
            Depth::D1 => 1,
            Depth::D2 => 2,
            Depth::D3 => 3,
            Depth::D4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Depth::D1 => "Category (D1)",
            Depth::D2 => "Subcategory (D2)",
            Depth::D3 => "Sub-subcategory (D3)",
            Depth::D4 => "Product (D4)",
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /search/{language}`.
///
/// `language` selects the endpoint and `use_spelling` drives the query
/// pipeline; neither is part of the JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub size: u8,
    pub alpha: f64,
    pub use_vector: bool,
    #[serde(skip_serializing)]
    pub language: Language,
    #[serde(skip_serializing)]
    pub use_spelling: bool,
}

/// Body of `POST /spellingcorrection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellingRequest<'a> {
    pub query: &'a str,
}

/// Body of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRequest {
    pub search_term: String,
    index: &'static str,
    pub size: u8,
}

impl OrganizationRequest {
    pub fn new(search_term: impl Into<String>, size: u8) -> Self {
        Self {
            search_term: search_term.into(),
            index: ORGANIZATION_INDEX,
            size,
        }
    }

    pub fn index(&self) -> &'static str {
        self.index
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response of the spelling-correction endpoint.
///
/// A missing `corrected_query` means the service proposed no correction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpellingCorrection {
    #[serde(default, rename = "corrected_query", alias = "correctedQuery")]
    pub corrected_query: Option<String>,
}

/// Response of `POST /search/{language}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "total-hits", alias = "totalHits")]
    pub total_hits: u64,
    #[serde(rename = "Ranked-objects", alias = "rankedObjects")]
    pub ranked_objects: Vec<Hit>,
}

/// One ranked result.
///
/// The record lives under `_source` when the service passes through raw
/// index hits; otherwise the hit object is the record itself. The score comes
/// from `_score`, falling back to the record's own `score`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub source: ProductRecord,
    pub score: Option<f64>,
}

#[derive(Deserialize)]
struct RawHit {
    #[serde(rename = "_source", default)]
    source: Option<ProductRecord>,
    #[serde(rename = "_score", default)]
    score: Option<f64>,
    #[serde(flatten)]
    inline: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Hit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawHit::deserialize(deserializer)?;
        let source = match raw.source {
            Some(source) => source,
            None => ProductRecord::deserialize(Value::Object(raw.inline))
                .map_err(de::Error::custom)?,
        };
        // A zero `_score` defers to the record's own score when it has one.
        let score = raw
            .score
            .filter(|s| *s != 0.0)
            .or(source.score)
            .or(raw.score);
        Ok(Hit { source, score })
    }
}

/// Names of one language at each taxonomy depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthNames {
    pub d1: Option<String>,
    pub d2: Option<String>,
    pub d3: Option<String>,
    pub d4: Option<String>,
}

impl DepthNames {
    pub fn get(&self, depth: Depth) -> Option<&str> {
        match depth {
            Depth::D1 => self.d1.as_deref(),
            Depth::D2 => self.d2.as_deref(),
            Depth::D3 => self.d3.as_deref(),
            Depth::D4 => self.d4.as_deref(),
        }
    }
}

/// Per-language name table of a product record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageNames {
    pub az: DepthNames,
    pub en: DepthNames,
    pub ru: DepthNames,
}

impl LanguageNames {
    pub fn for_language(&self, language: Language) -> &DepthNames {
        match language {
            Language::Az => &self.az,
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

/// An HS code entry as returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawProductRecord")]
pub struct ProductRecord {
    pub code: Option<String>,
    pub names: LanguageNames,
    pub path: Option<String>,
    pub tradings: Vec<Trading>,
    pub score: Option<f64>,
}

impl ProductRecord {
    pub fn name(&self, language: Language, depth: Depth) -> Option<&str> {
        self.names.for_language(language).get(depth)
    }
}

#[derive(Deserialize)]
struct RawProductRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    code: Option<String>,
    #[serde(default)]
    name_az_d1: Option<String>,
    #[serde(default)]
    name_az_d2: Option<String>,
    #[serde(default)]
    name_az_d3: Option<String>,
    #[serde(default)]
    name_az_d4: Option<String>,
    #[serde(default)]
    name_en_d1: Option<String>,
    #[serde(default)]
    name_en_d2: Option<String>,
    #[serde(default)]
    name_en_d3: Option<String>,
    #[serde(default)]
    name_en_d4: Option<String>,
    #[serde(default)]
    name_ru_d1: Option<String>,
    #[serde(default)]
    name_ru_d2: Option<String>,
    #[serde(default)]
    name_ru_d3: Option<String>,
    #[serde(default)]
    name_ru_d4: Option<String>,
    #[serde(default, rename = "Path", alias = "path")]
    path: Option<String>,
    #[serde(default)]
    tradings: Option<Vec<Trading>>,
    #[serde(default)]
    score: Option<f64>,
}

impl From<RawProductRecord> for ProductRecord {
    fn from(raw: RawProductRecord) -> Self {
        Self {
            code: raw.code,
            names: LanguageNames {
                az: DepthNames {
                    d1: raw.name_az_d1,
                    d2: raw.name_az_d2,
                    d3: raw.name_az_d3,
                    d4: raw.name_az_d4,
                },
                en: DepthNames {
                    d1: raw.name_en_d1,
                    d2: raw.name_en_d2,
                    d3: raw.name_en_d3,
                    d4: raw.name_en_d4,
                },
                ru: DepthNames {
                    d1: raw.name_ru_d1,
                    d2: raw.name_ru_d2,
                    d3: raw.name_ru_d3,
                    d4: raw.name_ru_d4,
                },
            },
            path: raw.path,
            tradings: raw.tradings.unwrap_or_default(),
            score: raw.score,
        }
    }
}

/// Buy/sell/transport relationship attached to a product code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trading {
    #[serde(default)]
    pub trade_type: Option<String>,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub in_vehicle_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub out_vehicle_id: Option<String>,
}

/// Response of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationResult {
    #[serde(rename = "total-hits", alias = "totalHits")]
    pub total_hits: u64,
    pub results: Vec<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, rename = "additional_info", alias = "additionalInfo")]
    pub additional_info: Option<Value>,
}

/// Identifiers arrive as strings or bare numbers depending on the index.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}
