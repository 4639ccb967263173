//! JSON-RPC 2.0 dispatch onto a `BattleSession`.
//!
//! The handler is transport-neutral: it turns one request line into one
//! response line. `serve_connection` runs that loop over any async byte
//! stream, which is how the TCP server drives it.

use crate::errors::{BattleError, SessionError};
use crate::session::BattleSession;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
/// Application errors: the battle or catalog rejected the request.
pub const DOMAIN_ERROR: i64 = -32000;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    fn new(code: i64, kind: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(json!({ "kind": kind })),
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            METHOD_NOT_FOUND,
            "method_not_found",
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, "invalid_params", message)
    }
}

impl From<SessionError> for RpcError {
    fn from(err: SessionError) -> Self {
        let code = match &err {
            SessionError::Battle(BattleError::InvalidAction(_))
            | SessionError::Battle(BattleError::UnknownParty(_)) => INVALID_PARAMS,
            SessionError::LockPoisoned => INTERNAL_ERROR,
            _ => DOMAIN_ERROR,
        };
        Self::new(code, err.kind(), err.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct StartBattleParams {
    pub player1_pokemon: Vec<String>,
    pub player2_pokemon: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActionParams {
    pub player_id: String,
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub name: String,
}

pub struct RpcHandler {
    session: Arc<BattleSession>,
}

impl RpcHandler {
    pub fn new(session: Arc<BattleSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Arc<BattleSession> {
        &self.session
    }

    /// Handles one request line. Blank lines produce no response.
    pub fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Err(err) => error_response(
                Value::Null,
                RpcError::new(PARSE_ERROR, "parse_error", format!("Parse error: {}", err)),
            ),
            Ok(raw) => {
                let id = raw.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<RpcRequest>(raw) {
                    Err(err) => error_response(
                        id,
                        RpcError::new(
                            INVALID_REQUEST,
                            "invalid_request",
                            format!("Invalid request: {}", err),
                        ),
                    ),
                    Ok(request) => match self.handle_request(&request.method, request.params) {
                        Ok(result) => json!({ "jsonrpc": "2.0", "id": request.id, "result": result }),
                        Err(err) => error_response(request.id, err),
                    },
                }
            }
        };

        Some(response.to_string())
    }

    pub fn handle_request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "start_battle" => {
                let params: StartBattleParams = parse_params(params)?;
                let snapshot = self
                    .session
                    .start_battle(&params.player1_pokemon, &params.player2_pokemon)?;
                to_result(&snapshot)
            }
            "submit_action" => {
                let params: ActionParams = parse_params(params)?;
                let snapshot = self
                    .session
                    .submit_action(&params.player_id, &params.action)?;
                to_result(&snapshot)
            }
            "get_state" => to_result(&self.session.get_state()?),
            "lookup_creature" => {
                let params: LookupParams = parse_params(params)?;
                to_result(&self.session.lookup_creature(&params.name)?)
            }
            _ => Err(RpcError::method_not_found(method)),
        }
    }
}

/// Reads newline-delimited requests from `stream` and writes one response
/// line per request until the peer closes.
pub async fn serve_connection<S>(handler: Arc<RpcHandler>, stream: S) -> std::io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(mut response) = handler.handle_line(&line) {
            response.push('\n');
            writer.write_all(response.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    Ok(())
}

fn parse_params<T: for<'de> Deserialize<'de>>(params: Value) -> Result<T, RpcError> {
    serde_json::from_value(params).map_err(|err| RpcError::invalid_params(err.to_string()))
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value)
        .map_err(|err| RpcError::new(INTERNAL_ERROR, "internal", err.to_string()))
}

fn error_response(id: Value, error: RpcError) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": error })
}
