//! The LSP host around the core library.
//!
//! Thin by intent: this module only tracks open documents, loads settings,
//! and forwards requests to [`hover`](crate::hover),
//! [`codeactions`](crate::codeactions) and [`template`](crate::template).
//! Validation diagnostics arrive from the client inside each code-action
//! request context; this server never produces its own.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    CodeActionOrCommand, CodeActionParams, CodeActionProviderCapability, CodeActionResponse,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    ExecuteCommandOptions, ExecuteCommandParams, Hover, HoverParams, HoverProviderCapability,
    InitializeParams, InitializeResult, InitializedParams, MessageType, ServerCapabilities,
    ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind, Url,
};
use tower_lsp::{Client, LanguageServer};

use crate::{codeactions, config::Settings, hover, template};

/// Command identifier for template generation via `workspace/executeCommand`.
pub const GENERATE_TEMPLATE_COMMAND: &str = "manifest.generateTemplate";

pub struct Backend {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, String>>>,
    settings: Arc<RwLock<Settings>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }
}

/// Extract `(provider, objects)` from executeCommand arguments.
///
/// The first argument is the provider identifier; the optional second is an
/// array of read-object names. A missing second argument means "all
/// objects".
fn parse_generate_args(arguments: &[Value]) -> Option<(String, Option<Vec<String>>)> {
    let provider = arguments.first().and_then(Value::as_str)?.to_string();
    let objects = match arguments.get(1) {
        Some(value) => Some(serde_json::from_value(value.clone()).ok()?),
        None => None,
    };
    Some((provider, objects))
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        #[allow(deprecated)]
        let root_dir = params.root_uri.as_ref().and_then(|uri| uri.to_file_path().ok());

        match Settings::new(root_dir.as_deref()) {
            Ok(settings) => *self.settings.write().await = settings,
            Err(err) => {
                tracing::warn!("Falling back to default settings: {err}");
            }
        }

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "manifest-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                code_action_provider: Some(CodeActionProviderCapability::Simple(true)),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![GENERATE_TEMPLATE_COMMAND.to_string()],
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "manifest-ls initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.documents
            .write()
            .await
            .insert(params.text_document.uri, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the complete document.
        if let Some(change) = params.content_changes.into_iter().next_back() {
            self.documents
                .write()
                .await
                .insert(params.text_document.uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.write().await.remove(&params.text_document.uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let documents = self.documents.read().await;
        let Some(text) = documents.get(&uri) else {
            return Ok(None);
        };
        let settings = self.settings.read().await;

        Ok(hover::hover(text, position, &settings))
    }

    async fn code_action(&self, params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;

        let documents = self.documents.read().await;
        let text = documents.get(&uri).map(String::as_str).unwrap_or_default();
        let settings = self.settings.read().await;

        let actions = codeactions::compute_repairs(text, &params.context.diagnostics, &settings)
            .iter()
            .map(|repair| CodeActionOrCommand::CodeAction(codeactions::to_code_action(&uri, repair)))
            .collect::<Vec<_>>();

        Ok(Some(actions))
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        if params.command != GENERATE_TEMPLATE_COMMAND {
            return Ok(None);
        }

        let Some((provider, objects)) = parse_generate_args(&params.arguments) else {
            self.client
                .show_message(
                    MessageType::ERROR,
                    format!("{GENERATE_TEMPLATE_COMMAND} expects a provider identifier"),
                )
                .await;
            return Ok(None);
        };

        let settings = self.settings.read().await.clone();
        let yaml = match objects {
            Some(objects) => template::synthesize(&provider, &objects, &settings),
            None => template::synthesize_complete(&provider, &settings),
        };

        self.client
            .show_message(
                MessageType::INFO,
                format!("Sample manifest created for {provider}"),
            )
            .await;

        Ok(Some(Value::String(yaml)))
    }
}
