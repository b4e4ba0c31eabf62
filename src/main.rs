use anyhow::Context;
use clap::Parser;

use callkit::cli::Cli;
use callkit::logging::init_tracing;
use callkit::ui::overlay::verify_children;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    if cli.check {
        let children = verify_children(&config.menu.children)?;
        println!(
            "Configuration OK: menu '{}' with {} children",
            config.menu.trigger,
            children.len()
        );
        return Ok(());
    }

    let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::debug!(path = %log_path.display(), "Starting demo");

    callkit::ui::run(&config)
}
