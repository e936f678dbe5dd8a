//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes the analytics engine over the MCP protocol, making it
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library that
//! the CLI commands use: each `#[tool]` method delegates to a core library
//! function and returns its report as pretty JSON.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use postmeter_core::analysis::platforms::Platform;
use postmeter_core::analysis::{self, keywords, platforms, sentiment};
use postmeter_core::{readability, text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take only text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

/// Parameters for the `extract_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractKeywordsParams {
    /// The text to analyze.
    pub text: String,
    /// How many keywords to return (at most 20).
    pub limit: Option<usize>,
}

/// Parameters for the `evaluate_platforms` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct EvaluatePlatformsParams {
    /// The text to analyze.
    pub text: String,
    /// Platforms to score: twitter, facebook, instagram, linkedin, tiktok. Omit for all.
    pub platforms: Option<Vec<String>>,
}

/// MCP server exposing the text analytics engine to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct AnalyticsServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    keyword_limit: Option<usize>,
    platforms: Option<Vec<Platform>>,
}

impl Default for AnalyticsServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl AnalyticsServer {
    /// Create a new MCP server instance with no input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: None,
            keyword_limit: None,
            platforms: None,
        }
    }

    /// Reject text larger than `max` bytes.
    pub fn with_max_input_bytes(mut self, max: Option<usize>) -> Self {
        self.max_input_bytes = max;
        self
    }

    /// Default number of keywords returned when a call gives no limit.
    pub fn with_keyword_limit(mut self, limit: Option<usize>) -> Self {
        self.keyword_limit = limit;
        self
    }

    /// Default platform selection when a call names none.
    pub fn with_platforms(mut self, platforms: Option<Vec<Platform>>) -> Self {
        self.platforms = platforms;
        self
    }

    fn check_input(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
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
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
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

    /// Run the full analysis.
    #[tool(
        description = "Analyze a social media post: word/sentence stats, sentiment, keywords, Flesch readability, suitability for Twitter, Facebook, Instagram, LinkedIn and TikTok, and improvement suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = analysis::analyze(&params.text);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            suggestions = report.suggestions.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score readability using Flesch Reading Ease.
    #[tool(
        description = "Score readability of text. Returns the Flesch Reading Ease score (higher is easier), grade band, and sentence/word/syllable counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn score_readability(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_readability", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = readability::score_readability(&params.text);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "score_readability",
            score = report.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Classify sentiment.
    #[tool(
        description = "Classify sentiment of text as Positive, Neutral, or Negative with a 0-100 score."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_sentiment(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_sentiment", "executing MCP tool");
        self.check_input(&params.text)?;

        let report = sentiment::analyze_sentiment(&params.text);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_sentiment",
            label = report.label.as_str(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Extract ranked keywords.
    #[tool(
        description = "Extract the most frequent keywords (stop words and short words excluded), ranked by count."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn extract_keywords(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ExtractKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_keywords", limit = ?params.limit, "executing MCP tool");
        self.check_input(&params.text)?;

        let mut ranked = keywords::extract_keywords(&params.text);
        if let Some(limit) = params.limit.or(self.keyword_limit) {
            ranked.truncate(limit);
        }
        let json = to_json(&ranked)?;

        tracing::info!(
            tool = "extract_keywords",
            count = ranked.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score platform suitability.
    #[tool(
        description = "Score how well text fits each social platform (0-100), with character counts, a preview fitted to the platform limit, and a platform tip."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn evaluate_platforms(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<EvaluatePlatformsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "evaluate_platforms", platforms = ?params.platforms, "executing MCP tool");
        self.check_input(&params.text)?;

        let selected = match params.platforms {
            Some(names) => Some(
                names
                    .iter()
                    .map(|name| name.parse::<Platform>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| McpError::invalid_params(e, None))?,
            ),
            None => self.platforms.clone(),
        };

        let stats = text::lexical_stats(&params.text);
        let reports: Vec<_> = platforms::evaluate_platforms(&params.text, &stats)
            .into_iter()
            .filter(|r| selected.as_ref().is_none_or(|s| s.is_empty() || s.contains(&r.platform)))
            .collect();
        let json = to_json(&reports)?;

        tracing::info!(
            tool = "evaluate_platforms",
            count = reports.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for AnalyticsServer {
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
                "{} MCP server. Use analyze_text for a full report on a social media draft, or the \
                 individual tools for readability, sentiment, keywords, and platform fit.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
