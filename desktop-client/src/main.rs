mod config;
mod sprites;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};
use std::path::PathBuf;

use config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
use sprites::SpriteStore;
use ui::SnakeApp;

const STATUS_AREA_HEIGHT: f32 = 80.0;

#[derive(Parser)]
#[command(name = "snake_canvas")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the default config to `--config` before starting.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", args.config.display());
    }
    let config = config_manager.get_config()?;
    log!("Using config from {}", args.config.display());

    let settings = config.game.to_settings();
    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Field {}x{} cells, tick every {:?}, seed {}",
        settings.field_size().columns(),
        settings.field_size().rows(),
        settings.tick_interval,
        rng.seed()
    );

    let sprite_store = SpriteStore::new();
    sprites::spawn_loader(PathBuf::from(&config.sprites.directory), sprite_store.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                settings.width as f32 + 16.0,
                settings.height as f32 + STATUS_AREA_HEIGHT,
            ])
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(settings, rng, sprite_store)))),
    )?;

    Ok(())
}
