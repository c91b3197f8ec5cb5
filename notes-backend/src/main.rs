//! Notes backend service.
//!
//! Default: http://127.0.0.1:5001/api/notes

use notes_backend::config::Config;
use notes_backend::summarizer::{GeminiSummarizer, Summarizer};
use notes_backend::{router, AppState, NoteStore};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::load();

    let store = match NoteStore::open(&config.db_path).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to open {}: {}", config.db_path.display(), e);
            std::process::exit(1);
        }
    };

    let summarizer: Option<Arc<dyn Summarizer>> = match &config.google_api_key {
        Some(key) => {
            log::info!("Summarizing with {}", config.gemini_model);
            Some(Arc::new(GeminiSummarizer::new(
                &config.gemini_api_url,
                &config.gemini_model,
                key,
            )))
        }
        None => {
            log::warn!("GOOGLE_API_KEY not set, summarize requests will fail");
            None
        }
    };

    let state = Arc::new(AppState::new(store, summarizer));
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    log::info!("Notes backend listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Received Ctrl+C, shutting down");
}
