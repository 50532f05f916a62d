//! doughcalc MCP Server Implementation
//!
//! Implements the MCP server with all calculator, recipe and widget tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::dough::{Quantity, StageDurations};
use crate::models::RecipeCreate;
use crate::store::{RecipeRepository, WidgetRepository};
use crate::tools::calculator;
use crate::tools::catalog;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;
use crate::tools::widgets::{self, WidgetRegistration};

/// doughcalc MCP Service
#[derive(Clone)]
pub struct DoughService {
    status_tracker: Arc<StatusTracker>,
    recipes: Arc<dyn RecipeRepository>,
    widgets: Arc<dyn WidgetRepository>,
    tool_router: ToolRouter<DoughService>,
}

impl DoughService {
    pub fn new(recipes: Arc<dyn RecipeRepository>, widgets: Arc<dyn WidgetRepository>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            recipes,
            widgets,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateDoughParams {
    /// Number of dough balls
    pub num_balls: u32,
    /// Weight of one ball in grams
    pub ball_weight: f64,
    /// Water as a percentage of flour (e.g. 65 for 65%)
    pub hydration_percent: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    /// Batch size the ingredient amounts are written for
    pub base_amount: f64,
    /// Batch size to scale to
    pub target_amount: f64,
    /// Ingredient name to amount
    pub ingredients: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Value to convert
    pub value: f64,
    /// Source unit symbol
    pub from_unit: String,
    /// Target unit symbol
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlanProductionParams {
    /// When the pizzas should be finished. RFC 3339 (2025-06-14T19:00:00+02:00) or local (2025-06-14T19:00)
    pub finish_time: String,
    /// Kneading minutes (default 10)
    pub knet: Option<u32>,
    /// Bulk fermentation minutes (default 120)
    pub stockgare: Option<u32>,
    /// Portioning minutes (default 15)
    pub portionier: Option<u32>,
    /// Ball proof minutes (default 60)
    pub stueckgare: Option<u32>,
    /// Baking minutes (default 30)
    pub back: Option<u32>,
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateRecipeParams {
    /// Name of the recipe
    pub name: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeIdParams {
    /// Recipe ID
    pub id: String,
}

// ============================================================================
// Widget Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RegisterWidgetParams {
    /// Unique public key for the widget
    pub key: String,
    /// Display name
    pub name: String,
    /// Theme name (optional)
    pub theme: Option<String>,
    /// Widget configuration object (optional)
    pub config: Option<Map<String, Value>>,
    /// Domains allowed to embed the widget; "*.example.com" wildcards allowed. Omit to allow all.
    pub allowed_domains: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetEmbedCodeParams {
    /// Widget key
    pub widget_key: String,
    /// Domain the widget will be embedded on
    pub domain: String,
    /// Theme override (optional)
    pub theme: Option<String>,
    /// Configuration override (optional)
    pub config: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteWidgetParams {
    /// Widget ID to delete
    pub id: i64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DoughService {
    // --- Status ---

    #[tool(description = "Get the current status of the doughcalc service including build info, store counts, and process information")]
    fn doughcalc_status(&self) -> Result<CallToolResult, McpError> {
        let status = self
            .status_tracker
            .get_status(self.recipes.as_ref(), self.widgets.as_ref())
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for formulating, scaling and scheduling pizza dough. Call this when unsure how to use the calculator tools.")]
    fn dough_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::DOUGH_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(DOUGH_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate flour, water and salt (2% of flour) in grams for a number of dough balls at a given hydration")]
    fn calculate_dough(&self, Parameters(p): Parameters<CalculateDoughParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_dough(p.num_balls, p.ball_weight, p.hydration_percent)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Scale ingredient amounts from a base batch size to a target batch size")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::scale_recipe(p.base_amount, p.target_amount, &p.ingredients)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Convert a weight between g, kg, mg, lb, oz and t")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::convert(Quantity::Weight, p.value, &p.from_unit, &p.to_unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Convert a length between m, cm, mm, km, in, ft, yd and mi")]
    fn convert_length(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::convert(Quantity::Length, p.value, &p.from_unit, &p.to_unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the available weight and length unit symbols")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&calculator::list_units())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Plan dough production backward from a finish time: knet, stockgare, portionier, stueckgare and back stages. Omitted stage minutes use defaults.")]
    fn plan_production(&self, Parameters(p): Parameters<PlanProductionParams>) -> Result<CallToolResult, McpError> {
        let durations = StageDurations::with_overrides(p.knet, p.stockgare, p.portionier, p.stueckgare, p.back);
        let result = calculator::plan_production(&p.finish_time, durations)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Catalogs ---

    #[tool(description = "List pizza styles with origin and characteristics")]
    fn list_pizza_styles(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&catalog::list_pizza_styles())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List preferment methods (Poolish, Biga, ...) with ratios, fermentation time and temperature")]
    fn list_preferment_methods(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&catalog::list_preferment_methods())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Recipes ---

    #[tool(description = "Store a new recipe")]
    fn create_recipe(&self, Parameters(p): Parameters<CreateRecipeParams>) -> Result<CallToolResult, McpError> {
        let data = RecipeCreate {
            name: p.name, ingredients: p.ingredients, instructions: p.instructions,
            prep_time: p.prep_time, cook_time: p.cook_time,
        };
        let result = recipes::create_recipe(self.recipes.as_ref(), data).map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get a stored recipe by ID")]
    fn get_recipe(&self, Parameters(p): Parameters<RecipeIdParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::get_recipe(self.recipes.as_ref(), &p.id).map_err(|e| McpError::invalid_params(e, None))?;
        let json = match result {
            Some(recipe) => serde_json::to_string_pretty(&recipe),
            None => serde_json::to_string_pretty(&serde_json::json!({"error": "Recipe not found", "id": p.id})),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List stored recipes")]
    fn list_recipes(&self) -> Result<CallToolResult, McpError> {
        let result = recipes::list_recipes(self.recipes.as_ref()).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Delete a stored recipe by ID")]
    fn delete_recipe(&self, Parameters(p): Parameters<RecipeIdParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::delete_recipe(self.recipes.as_ref(), &p.id).map_err(|e| McpError::invalid_params(e, None))?;
        let json = match result {
            Some(deleted) => serde_json::to_string_pretty(&deleted),
            None => serde_json::to_string_pretty(&serde_json::json!({"error": "Recipe not found", "id": p.id})),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Widgets ---

    #[tool(description = "Register an embeddable calculator widget with optional theme, config and domain allowlist")]
    fn register_widget(&self, Parameters(p): Parameters<RegisterWidgetParams>) -> Result<CallToolResult, McpError> {
        let data = WidgetRegistration {
            key: p.key, name: p.name, theme: p.theme, config: p.config, allowed_domains: p.allowed_domains,
        };
        let result = widgets::register_widget(self.widgets.as_ref(), data).map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List registered widgets")]
    fn list_widgets(&self) -> Result<CallToolResult, McpError> {
        let result = widgets::list_widgets(self.widgets.as_ref()).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Generate the HTML embed code for a widget on a given domain")]
    fn get_widget_embed_code(&self, Parameters(p): Parameters<GetEmbedCodeParams>) -> Result<CallToolResult, McpError> {
        let result = widgets::get_widget_embed_code(
            self.widgets.as_ref(), &p.widget_key, &p.domain, p.theme.as_deref(), p.config.as_ref(),
        ).map_err(|e| McpError::invalid_params(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Delete a registered widget by ID")]
    fn delete_widget(&self, Parameters(p): Parameters<DeleteWidgetParams>) -> Result<CallToolResult, McpError> {
        let result = widgets::delete_widget(self.widgets.as_ref(), p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(deleted) => serde_json::to_string_pretty(&deleted),
            None => Ok(format!(r#"{{"error": "Widget not found", "id": {}}}"#, p.id)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DoughService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "doughcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Pizza Dough Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Pizza Dough Calculator - dough formulation, recipe scaling, unit conversion and production planning. \
                 Call dough_instructions first if unsure. \
                 Calculator: calculate_dough, scale_recipe, convert_weight, convert_length, list_units, plan_production. \
                 Reference: list_pizza_styles, list_preferment_methods. \
                 Recipes: create/get/list/delete_recipe. \
                 Widgets: register_widget, list_widgets, get_widget_embed_code, delete_widget."
                    .into(),
            ),
        }
    }
}
