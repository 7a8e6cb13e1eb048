use anyhow::{Context, Result};

use selectbox::config::Config;
use selectbox::item::SelectItem;
use selectbox::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let items = match args.next().as_deref() {
        Some("generate-config") => {
            let path = Config::get_default_config_path()?;
            Config::generate_default_config(path)?;
            return Ok(());
        }
        Some(path) => Some(load_items(path)?),
        None => None,
    };

    let config = Config::load()?;
    logger::init(&config.logging)?;

    ui::run_app(config, items).await?;

    Ok(())
}

/// Load a caller-supplied item collection from a JSON file:
/// `[{"key": "1", "label": "Apple"}, ...]`
fn load_items(path: &str) -> Result<Vec<SelectItem>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read items file: {}", path))?;
    let items: Vec<SelectItem> =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse items file: {}", path))?;
    Ok(items)
}
