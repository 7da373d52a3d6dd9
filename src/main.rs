use collkit::config::{DemoConfig, OutputFormat};
use collkit::demo;

use tracing::subscriber;
use tracing_subscriber::FmtSubscriber;

pub fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.max_level()?)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(subscriber)?;

    let report = demo::run(&config)?;
    match config.format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
