//! Terminal client entry point.
use std::io;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::{HasStats, PcgRng};
use mud_client::{App, CliConfig, logging};
use runtime::FileSaveRepository;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    logging::setup_logging(&config.log_dir, config.session_id.as_deref())?;

    let runtime = &config.runtime;
    let seed = runtime.resolve_seed();
    tracing::info!(
        seed,
        slot = %runtime.save_slot,
        save_dir = %runtime.save_dir.display(),
        "Starting game"
    );

    let repo = FileSaveRepository::new(&runtime.save_dir).with_context(|| {
        format!(
            "failed to open save directory {}",
            runtime.save_dir.display()
        )
    })?;
    let content = match &runtime.data_dir {
        Some(dir) => ContentFactory::new(dir.clone()),
        None => ContentFactory::builtin(),
    };

    let mut app = App::new(io::stdin().lock(), io::stdout(), repo, &runtime.save_slot);
    let mut game = app.start(&content, PcgRng::new(seed))?;
    app.run(&mut game)?;

    tracing::info!(
        player = game.player().name(),
        level = game.player().level(),
        "Game over"
    );
    Ok(())
}
