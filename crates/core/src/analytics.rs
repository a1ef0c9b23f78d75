//! Analytics dashboard payloads.
//!
//! These records describe the JSON the dashboard consumes. They carry no
//! behavior; lists the dashboard treats as opaque stay `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client-side analytics store state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsState {
    pub loading: bool,
    pub error: Option<String>,
    pub token_details: Vec<Value>,
    pub app_token_details: Vec<Value>,
    pub org_doc_list: Vec<Value>,
    pub organization_details: Vec<Value>,
    pub org_user_list: Vec<Value>,
    pub user_app_wise_token_detail: Vec<Value>,
}

/// Token usage series for one named consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsageData {
    pub name: String,
    pub token_usage_details: Vec<TokenDetail>,
}

/// A single day of token usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDetail {
    pub date: String,
    pub total_tokens: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppTokenUsage {
    pub name: String,
    pub total_tokens: i64,
}

/// How often a document was cited as a source, with the questions that cited it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_source: String,
    pub reference_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Value>>,
}
