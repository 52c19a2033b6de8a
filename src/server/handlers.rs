//! Request handlers

use super::AppState;
use crate::document::{content_disposition, export_filename, ExportFormat};
use crate::error::{FsForgeError, Result};
use crate::llm::FsRequest;
use crate::prompts::{complexity_description, ModuleCategory, COMPLEXITY_LEVELS};
use crate::types::Provider;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
///
/// Every field may be absent or `null`; both count as empty.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateBody {
    pub requirement: Option<String>,
    pub module_type: Option<String>,
    pub complexity: Option<String>,
    pub reference_text: Option<String>,
    pub api_key: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

impl From<GenerateBody> for FsRequest {
    fn from(body: GenerateBody) -> Self {
        Self {
            requirement: body.requirement.unwrap_or_default(),
            module_type: body.module_type.unwrap_or_default(),
            complexity: body.complexity.unwrap_or_default(),
            reference_text: body.reference_text,
            api_key: body.api_key.unwrap_or_default(),
            provider: body.provider.unwrap_or_default(),
            model: body.model,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// Body of `POST /api/export`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportBody {
    pub document: Option<String>,
    pub module_type: Option<String>,
    pub complexity: Option<String>,
    pub format: Option<String>,
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| FsForgeError::validation(rejection.body_text()))
}

pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let request: FsRequest = json_body(payload)?.into();

    match state.generator.generate(&request).await {
        Ok(document) => Ok(Json(GenerateResponse {
            result: document.render(),
        })),
        Err(e) => {
            if e.is_client_error() {
                tracing::info!(error = %e, "Rejected generation request");
            } else {
                tracing::error!(error = %e, "Generation error");
            }
            Err(e)
        }
    }
}

pub async fn export(payload: std::result::Result<Json<ExportBody>, JsonRejection>) -> Result<Response> {
    let body = json_body(payload)?;
    let document = body.document.unwrap_or_default();
    if document.trim().is_empty() {
        return Err(FsForgeError::validation("没有可导出的文档"));
    }

    let format: ExportFormat = body.format.unwrap_or_default().parse()?;
    let filename = export_filename(
        &body.module_type.unwrap_or_default(),
        &body.complexity.unwrap_or_default(),
        format,
    );
    let rendered = crate::document::export(&document, format)?;

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        rendered,
    )
        .into_response())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub name: String,
    pub label: String,
    pub default_model: String,
    pub models: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LabeledItem {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub providers: Vec<ProviderInfo>,
    pub modules: Vec<LabeledItem>,
    pub complexities: Vec<LabeledItem>,
}

pub async fn catalog() -> Json<Catalog> {
    let providers = Provider::ALL
        .iter()
        .map(|p| ProviderInfo {
            name: p.as_str().to_string(),
            label: p.to_string(),
            default_model: p.default_model().to_string(),
            models: p.allowed_models().iter().map(|m| m.to_string()).collect(),
        })
        .collect();

    let modules = ModuleCategory::ALL
        .iter()
        .map(|m| LabeledItem {
            label: m.label().to_string(),
            description: m.description().to_string(),
        })
        .collect();

    let complexities = COMPLEXITY_LEVELS
        .iter()
        .map(|level| LabeledItem {
            label: level.to_string(),
            description: complexity_description(level).to_string(),
        })
        .collect();

    Json(Catalog {
        providers,
        modules,
        complexities,
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
