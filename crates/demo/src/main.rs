use anyhow::Context;
use stockroom_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    tracing::debug!(?config, "starting demo");

    let stdout = std::io::stdout();
    stockroom_demo::run(&config, &mut stdout.lock()).context("failed to write demo output")?;
    Ok(())
}
