use colored::*;
use rankwell::RankwellError;
use rankwell::storage::StorageError;
use rankwell::core::{SearchHit, SearchResults};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Longest title shown in hit listings, in characters
pub const TITLE_MAX_CHARS: usize = 75;

pub struct CliColors;

impl CliColors {
    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn score() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }
}

/// Machine-readable code and message for a RankwellError
pub fn error_code(error: &RankwellError) -> (&'static str, String) {
    match error {
        RankwellError::Storage(e @ StorageError::NotFound(_)) => ("NOT_FOUND", e.to_string()),
        RankwellError::Storage(e) => ("STORAGE_ERROR", e.to_string()),
        RankwellError::Configuration(msg) => ("CONFIGURATION_ERROR", msg.clone()),
        RankwellError::Logging(e) => ("LOGGING_ERROR", e.to_string()),
        RankwellError::InvalidRequest(msg) => ("INVALID_REQUEST", msg.clone()),
        RankwellError::Other(msg) => ("ERROR", msg.clone()),
    }
}

/// Output a RankwellError in structured JSON format
pub fn output_error_json(error: &RankwellError, output_format: &str) {
    if output_format == "json" {
        let (code, message) = error_code(error);

        let error_response = json!({
            "error": true,
            "code": code,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Trim a title and shorten it to [`TITLE_MAX_CHARS`], ending in "..."
pub fn truncate_title(title: &str) -> String {
    let title = title.trim();
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_string();
    }

    let mut short: String = title.chars().take(TITLE_MAX_CHARS - 3).collect();
    short.push_str("...");
    short
}

/// The fields of a hit shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitSummary {
    pub id: u64,
    pub title: String,
    pub pubdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl From<&SearchHit> for HitSummary {
    fn from(hit: &SearchHit) -> Self {
        let document = &hit.document;
        Self {
            id: document.id,
            title: truncate_title(&document.title),
            pubdate: document.published_at.format("%Y-%m-%d").to_string(),
            score: hit.score,
            metadata: document
                .metadata
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

pub fn print_hits(results: &SearchResults, limit: Option<usize>, output_format: &str) {
    let shown = limit.unwrap_or(results.hits.len()).min(results.hits.len());
    let summaries: Vec<HitSummary> = results.hits[..shown].iter().map(HitSummary::from).collect();

    if output_format == "json" {
        let response = json!({
            "sort": results.sort,
            "total": results.len(),
            "results": summaries,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }

    if summaries.is_empty() {
        println!("{}", format_info("No documents found."));
        return;
    }

    println!(
        "{}",
        format_info(&format!(
            "Found {} documents (sorted by {}):",
            results.len(),
            results.sort
        ))
    );
    println!();

    println!(
        "{:<8} {:<10} {:<10} {}",
        "ID".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Date".color(CliColors::muted()).bold(),
        "Title".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(80).color(CliColors::muted()));

    for summary in &summaries {
        let score = summary
            .score
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<8} {:<10} {:<10} {}",
            summary.id.to_string().color(CliColors::info()),
            score.color(CliColors::score()),
            summary.pubdate.color(CliColors::muted()),
            summary.title.color(CliColors::primary())
        );
    }

    if shown < results.len() {
        println!();
        println!(
            "{}",
            format!("... {} more", results.len() - shown).color(CliColors::muted())
        );
    }
}

pub fn print_breakdowns(results: &SearchResults, limit: Option<usize>, output_format: &str) {
    let shown = limit.unwrap_or(results.hits.len()).min(results.hits.len());
    let hits = &results.hits[..shown];

    if output_format == "json" {
        let rows: Vec<_> = hits
            .iter()
            .map(|hit| {
                json!({
                    "id": hit.document.id,
                    "title": truncate_title(&hit.document.title),
                    "score": hit.score,
                    "breakdown": hit.breakdown,
                })
            })
            .collect();
        let response = json!({ "sort": results.sort, "results": rows });
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }

    if hits.iter().all(|hit| hit.breakdown.is_none()) {
        println!(
            "{}",
            format_warning(&format!(
                "Sort mode '{}' does not score documents; use --orderby relevance",
                results.sort
            ))
        );
        return;
    }

    for hit in hits {
        let Some(breakdown) = hit.breakdown else {
            continue;
        };

        println!(
            "{} {}",
            format!("#{}", hit.document.id).color(CliColors::info()).bold(),
            truncate_title(&hit.document.title).color(CliColors::primary())
        );
        println!(
            "  {:<10} {}",
            "keyword".color(CliColors::muted()),
            format!("{:.4}", breakdown.keyword).color(CliColors::score())
        );
        println!(
            "  {:<10} {}",
            "taxonomy".color(CliColors::muted()),
            format!("{:.4}", breakdown.taxonomy).color(CliColors::score())
        );
        println!(
            "  {:<10} {}",
            "total".color(CliColors::muted()).bold(),
            format!("{:.4}", breakdown.total()).color(CliColors::score()).bold()
        );
    }
}
