//! Pokebat MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes the battle session as tools over stdio.

use std::sync::Arc;

use anyhow::{Context, Result};
use pokebat::catalog::InMemoryCatalog;
use pokebat::config::ServerConfig;
use pokebat::errors::SessionError;
use pokebat::session::BattleSession;
use pokebat::telemetry::init_tracing;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::io::{stdin, stdout};

#[derive(Clone)]
pub struct BattleService {
    tool_router: ToolRouter<BattleService>,
    session: Arc<BattleSession>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct StartBattleRequest {
    #[schemars(description = "Ordered creature names or dex numbers for player 1")]
    pub player1_pokemon: Vec<String>,
    #[schemars(description = "Ordered creature names or dex numbers for player 2")]
    pub player2_pokemon: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SubmitActionRequest {
    #[schemars(description = "Acting party: 'player1' or 'player2'")]
    pub player_id: String,
    #[schemars(description = "Action to take: 'attack' or 'defend'")]
    pub action: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupCreatureRequest {
    #[schemars(description = "Creature name or national dex number")]
    pub name: String,
}

#[tool_router]
impl BattleService {
    pub fn new(session: Arc<BattleSession>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            session,
        }
    }

    #[tool(description = "Start a new battle, replacing any battle in progress")]
    async fn start_battle(
        &self,
        Parameters(request): Parameters<StartBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            self.session
                .start_battle(&request.player1_pokemon, &request.player2_pokemon),
        ))
    }

    #[tool(description = "Submit an attack or defend action for the party whose turn it is")]
    async fn submit_action(
        &self,
        Parameters(request): Parameters<SubmitActionRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(
            self.session
                .submit_action(&request.player_id, &request.action),
        ))
    }

    #[tool(description = "Get the current battle state")]
    async fn get_battle_state(&self) -> Result<CallToolResult, McpError> {
        Ok(respond(self.session.get_state()))
    }

    #[tool(description = "Look up a creature's base stats by name or dex number")]
    async fn lookup_creature(
        &self,
        Parameters(request): Parameters<LookupCreatureRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(respond(self.session.lookup_creature(&request.name)))
    }
}

#[tool_handler]
impl ServerHandler for BattleService {}

/// Session failures are reported to the model as tool errors, not protocol errors.
fn respond<T: Serialize>(result: Result<T, SessionError>) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(err) => CallToolResult::error(vec![Content::text(format!(
                "Error: failed to encode result: {}",
                err
            ))]),
        },
        Err(err) => {
            let body = json!({ "error": err.to_string(), "kind": err.kind() });
            CallToolResult::error(vec![Content::text(body.to_string())])
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let catalog = InMemoryCatalog::load(&config.catalog_path).with_context(|| {
        format!(
            "failed to load creature catalog from {}",
            config.catalog_path.display()
        )
    })?;
    tracing::info!(creatures = catalog.len(), "Pokebat MCP server starting");

    let session = Arc::new(BattleSession::from_config(&config, Arc::new(catalog)));
    let service = BattleService::new(session);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("server running, waiting for shutdown");

    let quit_reason = server.waiting().await?;
    tracing::info!(?quit_reason, "Pokebat MCP server exiting");
    Ok(())
}
