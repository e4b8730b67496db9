use std::sync::Arc;

use anyhow::Result;
use summarist::backend::ollama::OllamaBackend;
use summarist::config::Config;
use summarist::summarizer::SummarizerService;
use summarist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {e:#}");
            eprintln!("\n💡 Fix the config file or delete it to fall back to defaults.");
            return Ok(());
        }
    };

    if config.logging.enabled {
        logger::init_file_logging()?;
    }

    let backend = OllamaBackend::from_config(&config.backend);
    let service = SummarizerService::new(Arc::new(backend));

    // Run the TUI application
    ui::run_app(service, &config).await?;

    Ok(())
}
