//! Generated FS documents and their export formats

use crate::error::{FsForgeError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title line of the metadata preamble
pub const DOCUMENT_TITLE: &str = "# SAP S/4HANA 功能说明书 (FS)";

/// Model output with its metadata preamble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub content: String,
    pub module_type: String,
    pub complexity: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedDocument {
    /// Full text: preamble followed by the model output
    pub fn render(&self) -> String {
        format!(
            "---\n{}\n**生成时间**: {}\n**模块**: {}\n**复杂度**: {}\n\n---\n\n{}",
            DOCUMENT_TITLE,
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.module_type,
            self.complexity,
            self.content
        )
    }
}

/// Wrap raw model output with the generation metadata
pub fn add_metadata(
    content: &str,
    module_type: &str,
    complexity: &str,
    generated_at: DateTime<Utc>,
) -> GeneratedDocument {
    GeneratedDocument {
        content: content.to_string(),
        module_type: module_type.to_string(),
        complexity: complexity.to_string(),
        generated_at,
    }
}

/// Download format for a rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = FsForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            other => Err(FsForgeError::validation(format!("不支持的导出格式: {}", other))),
        }
    }
}

/// Download file name, e.g. `fs_MM_Medium.md`.
///
/// Only the module prefix before the first space is used.
pub fn export_filename(module_type: &str, complexity: &str, format: ExportFormat) -> String {
    let module = module_type.split(' ').next().unwrap_or_default();
    let sanitize = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect()
    };
    format!(
        "fs_{}_{}.{}",
        sanitize(module),
        sanitize(complexity),
        format.extension()
    )
}

/// `Content-Disposition` value for a download.
///
/// `filename` carries an ASCII fallback; `filename*` (RFC 5987) carries the
/// real UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    if fallback == filename {
        format!("attachment; filename=\"{}\"", filename)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(filename)
        )
    }
}

/// Render a document in the requested format
pub fn export(document: &str, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(document.to_string()),
        ExportFormat::Html => render_html(document),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Minimal Markdown to HTML conversion: headings, bold, list items.
///
/// Anything else (tables, code) passes through as escaped text.
pub fn render_html(markdown: &str) -> Result<String> {
    let bold = Regex::new(r"\*\*(.+?)\*\*")
        .map_err(|e| FsForgeError::internal(e.to_string()))?;
    let mut body = String::with_capacity(markdown.len() * 2);

    for line in markdown.lines() {
        let escaped = escape_html(line);
        let inline = bold.replace_all(&escaped, "<strong>$1</strong>");

        if let Some(rest) = inline.strip_prefix("### ") {
            body.push_str(&format!("<h3>{}</h3>\n", rest));
        } else if let Some(rest) = inline.strip_prefix("## ") {
            body.push_str(&format!("<h2>{}</h2>\n", rest));
        } else if let Some(rest) = inline.strip_prefix("# ") {
            body.push_str(&format!("<h1>{}</h1>\n", rest));
        } else if let Some(rest) = inline.trim_start().strip_prefix("- ") {
            body.push_str(&format!("<li>{}</li>\n", rest));
        } else {
            body.push_str(&inline);
            body.push_str("<br>\n");
        }
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>SAP FS</title></head>\n<body>\n{}</body>\n</html>\n",
        body
    ))
}
