use anyhow::Context;
use cage::utils::logger;
use cage::{Bird, Cage, CageError, CliConfig, OutputFormat, RosterConfig};
use clap::Parser;

/// 記錄使用者看得懂的錯誤訊息與建議，再往上傳
fn report(e: CageError) -> CageError {
    tracing::error!("❌ {}", e.user_friendly_message());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    e
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cage");
    tracing::debug!("CLI config: {:?}", config);

    let cage = match &config.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path);
            RosterConfig::from_file(path)
                .and_then(RosterConfig::into_cage)
                .map_err(report)
                .with_context(|| format!("failed to load roster '{}'", path))?
        }
        None => Cage::from_animals(vec![Bird::sparrow(), Bird::eagle()]),
    };

    match config.format {
        OutputFormat::Text => cage.print_sorted(),
        OutputFormat::Json => {
            let json = cage
                .render_sorted_json()
                .map_err(report)
                .context("failed to encode bird names as JSON")?;
            println!("{}", json);
        }
    }

    tracing::info!("✅ Printed {} birds", cage.len());
    Ok(())
}
