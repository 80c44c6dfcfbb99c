//! Turns API responses into display blocks.
//!
//! Everything here is pure: the same response always yields the same blocks.

use crate::types::{Depth, Hit, Language, Organization, OrganizationResult, ProductRecord, SearchResponse, Trading};

pub const NO_NAME: &str = "No Name";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_PATH: &str = "-";
pub const NO_RESULTS: &str = "No results found.";
pub const NO_TRADINGS: &str = "No trading info";

/// One result, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBlock {
    /// 1-based rank.
    pub index: usize,
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
    pub sections: Vec<BlockSection>,
}

impl DisplayBlock {
    pub fn heading(&self) -> String {
        format!("#{} - {}", self.index, self.title)
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Titled list of lines nested under a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub total_hits: u64,
    pub summary: String,
    pub blocks: Vec<DisplayBlock>,
}

impl RenderedResults {
    /// Zero hits is a valid answer, distinct from a failure.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

pub fn format_score(score: Option<f64>) -> Option<String> {
    score.filter(|s| s.is_finite()).map(|s| format!("{:.4}", s))
}

/// Title of a product hit: depth-4 name, then code, then a placeholder.
pub fn display_name(record: &ProductRecord, language: Language) -> String {
    record
        .name(language, Depth::D4)
        .or(record.code.as_deref())
        .unwrap_or(NO_NAME)
        .to_string()
}

pub fn render_search(response: &SearchResponse, language: Language) -> RenderedResults {
    let blocks = response
        .ranked_objects
        .iter()
        .enumerate()
        .map(|(i, hit)| product_block(i + 1, hit, language))
        .collect();
    RenderedResults {
        total_hits: response.total_hits,
        summary: format!("Found {} hits", response.total_hits),
        blocks,
    }
}

pub fn render_organizations(result: &OrganizationResult) -> RenderedResults {
    let blocks = result
        .results
        .iter()
        .enumerate()
        .map(|(i, org)| organization_block(i + 1, org))
        .collect();
    RenderedResults {
        total_hits: result.total_hits,
        summary: format!("Found {} organizations", result.total_hits),
        blocks,
    }
}

fn product_block(index: usize, hit: &Hit, language: Language) -> DisplayBlock {
    let record = &hit.source;
    let mut fields = vec![("Code", or_missing(record.code.as_deref()))];
    if let Some(score) = format_score(hit.score) {
        fields.push(("Score", score));
    }
    for depth in Depth::ALL {
        fields.push((depth.label(), or_missing(record.name(language, depth))));
    }
    fields.push((
        "Full Path",
        record.path.clone().unwrap_or_else(|| NO_PATH.to_string()),
    ));

    let lines = if record.tradings.is_empty() {
        vec![NO_TRADINGS.to_string()]
    } else {
        record.tradings.iter().flat_map(trading_lines).collect()
    };

    DisplayBlock {
        index,
        title: display_name(record, language),
        fields,
        sections: vec![BlockSection {
            title: "Tradings",
            lines,
        }],
    }
}

fn trading_lines(trading: &Trading) -> Vec<String> {
    let mut lines = vec![format!(
        "• {} ({})",
        or_missing(trading.trade_name.as_deref()),
        or_missing(trading.trade_type.as_deref())
    )];
    if let Some(id) = non_blank(trading.in_vehicle_id.as_deref()) {
        lines.push(format!("  In: Vehicle {}", id));
    }
    if let Some(id) = non_blank(trading.out_vehicle_id.as_deref()) {
        lines.push(format!("  Out: Vehicle {}", id));
    }
    lines
}

fn organization_block(index: usize, org: &Organization) -> DisplayBlock {
    let mut fields = vec![
        ("Name", or_missing(org.name.as_deref())),
        ("Abbreviation", or_missing(org.abbreviation.as_deref())),
        ("ID", or_missing(org.id.as_deref())),
    ];
    if let Some(score) = format_score(org.score) {
        fields.push(("Score", score));
    }

    let mut sections = Vec::new();
    if let Some(info) = org.additional_info.as_ref().filter(|v| !is_empty_json(v)) {
        let pretty = serde_json::to_string_pretty(info).unwrap_or_else(|_| info.to_string());
        sections.push(BlockSection {
            title: "Additional Info",
            lines: pretty.lines().map(str::to_string).collect(),
        });
    }

    DisplayBlock {
        index,
        title: or_missing(org.name.as_deref()),
        fields,
        sections,
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_empty_json(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}
