//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer over stdio so AI assistants can score Spanish text.
//! The server is a presentation layer: each `#[tool]` method delegates to
//! `lexile_es_core` and only formats the result.
//!
//! Tools:
//! - `get_info`: package name, version, and description
//! - `analyze_text`: Lexile report for one text
//! - `compare_texts`: several texts ordered by Lexile

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use lexile_es_core::{Analyzer, compare_texts, render_comparison, render_outcome};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_info_format")]
    pub format: String,
}

fn default_info_format() -> String {
    "text".to_string()
}

fn default_result_format() -> String {
    "json".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// Spanish text to analyze.
    pub text: String,
    /// Output format: "json" (default) or "text".
    #[serde(default = "default_result_format")]
    pub format: String,
}

/// A named text for comparison.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NamedText {
    /// Label shown in the comparison.
    pub name: String,
    /// Spanish text to analyze.
    pub text: String,
}

/// Parameters for the `compare_texts` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareTextsParams {
    /// Texts to compare.
    pub texts: Vec<NamedText>,
    /// Output format: "json" (default) or "text".
    #[serde(default = "default_result_format")]
    pub format: String,
}

/// MCP server scoring Spanish text on the Lexile scale.
///
/// One analyzer is shared by every request.
#[derive(Clone)]
pub struct LexileServer {
    analyzer: Arc<Analyzer>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for LexileServer {
    fn default() -> Self {
        Self::new(
            Analyzer::new(),
            Some(lexile_es_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

#[tool_router]
impl LexileServer {
    /// Create a server around `analyzer`, rejecting texts over `max_input_bytes`.
    pub fn new(analyzer: Analyzer, max_input_bytes: Option<usize>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Estimate the reading level of one text.
    #[tool(
        description = "Estimate the Lexile reading level of a Spanish text and map it to a Chilean school grade. Returns lexile, range, grade, level, age, confidence, and statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", bytes = params.text.len(), "executing MCP tool");
        self.check_size(params.text.len())?;

        let outcome = self.analyzer.analyze(&params.text);
        let text = if params.format == "text" {
            render_outcome(&outcome)
        } else {
            serde_json::to_string_pretty(&outcome)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        };

        tracing::info!(
            tool = "analyze_text",
            lexile = outcome.report().map(|r| r.lexile),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compare several texts.
    #[tool(
        description = "Compare the reading level of several named Spanish texts. Texts that cannot be scored are skipped; the rest are ordered from easiest to hardest."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_texts(
        &self,
        Parameters(params): Parameters<CompareTextsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_texts", count = params.texts.len(), "executing MCP tool");
        self.check_size(params.texts.iter().map(|t| t.text.len()).sum())?;

        let pairs: Vec<(&str, &str)> = params
            .texts
            .iter()
            .map(|t| (t.name.as_str(), t.text.as_str()))
            .collect();
        let entries = compare_texts(&self.analyzer, &pairs);

        let text = if params.format == "text" {
            render_comparison(&entries)
        } else {
            serde_json::to_string_pretty(&entries)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        };

        tracing::info!(tool = "compare_texts", scored = entries.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for LexileServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text to estimate the reading level of Spanish text \
                 and compare_texts to rank several texts.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
