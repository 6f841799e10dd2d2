//! Web interface: a single chat-style page with a requirements box and a
//! status line, plus a JSON endpoint driving the generation workflow.
//!
//! Runs bind to localhost by default; the share flag binds all interfaces
//! so the link can be opened from other machines.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::agent::AgentBackend;
use crate::generator::{run_generation_workflow, GeneratorConfig, RunStatus};

/// Network configuration for the web interface
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub port: u16,
    pub share: bool,
}

struct AppState {
    backend: Arc<dyn AgentBackend>,
    config: GeneratorConfig,
    /// One generation at a time; the output directory is shared.
    run_lock: tokio::sync::Mutex<()>,
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    requirements: String,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    status: RunStatus,
    message: String,
    missing_files: Vec<String>,
    diagnostic: Option<String>,
}

/// Serve the web UI until the process is stopped.
pub async fn serve(
    backend: Arc<dyn AgentBackend>,
    config: GeneratorConfig,
    serve_config: ServeConfig,
) -> Result<()> {
    let state = Arc::new(AppState {
        backend,
        config,
        run_lock: tokio::sync::Mutex::new(()),
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let host: IpAddr = if serve_config.share {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    } else {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    };
    let addr = SocketAddr::new(host, serve_config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    println!("Web UI on http://{}", listener.local_addr()?);
    if serve_config.share {
        println!("Listening on all interfaces; the link can be shared on your network.");
    }

    axum::serve(listener, app).await.context("Web server failed")
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    if request.requirements.trim().is_empty() {
        return Json(GenerateResponse {
            status: RunStatus::Failure,
            message: "❌ Please enter the requirements.".to_string(),
            missing_files: Vec::new(),
            diagnostic: None,
        });
    }

    let _guard = state.run_lock.lock().await;

    match run_generation_workflow(state.backend.as_ref(), &request.requirements, &state.config)
        .await
    {
        Ok(result) => Json(GenerateResponse {
            status: result.status,
            message: result.status_line(),
            missing_files: result.missing_files,
            diagnostic: result.diagnostic,
        }),
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "generation run errored");
            Json(GenerateResponse {
                status: RunStatus::Failure,
                message: format!("❌ An error occurred: {}", e),
                missing_files: Vec::new(),
                diagnostic: Some(format!("{:#}", e)),
            })
        }
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>devcrew — system generator</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; height: 12rem; font-family: inherit; padding: .5rem; }
  button { padding: .5rem 1.5rem; font-size: 1rem; cursor: pointer; }
  #status { margin-top: 1rem; padding: .75rem; background: #f4f4f4; white-space: pre-wrap; min-height: 1.5rem; }
</style>
</head>
<body>
<h1>🛠️ devcrew</h1>
<p>Describe the system you want and click <b>Generate</b>.</p>
<textarea id="req" placeholder="Describe your system here..."></textarea>
<p><button id="go">🚀 Generate System</button></p>
<div id="status"></div>
<script>
const status = document.getElementById('status');
document.getElementById('go').addEventListener('click', async () => {
  status.textContent = '⏳ Generating your system, please wait...';
  try {
    const res = await fetch('/api/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ requirements: document.getElementById('req').value }),
    });
    const body = await res.json();
    status.textContent = body.message + (body.diagnostic ? '\n' + body.diagnostic : '');
  } catch (err) {
    status.textContent = '❌ Request failed: ' + err;
  }
});
</script>
</body>
</html>
"#;
