//! Prints the audio device list through the typed record view.

use anyhow::{Context, Result};
use sysprofiler::{ProfilerConfig, Registry, schema};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry = Registry::new(ProfilerConfig::from_env()?);
    let audio = registry
        .category::<schema::Audio>()
        .get_data()
        .context("reading audio devices")?;

    println!("{}", audio.render());

    let Some(items) = audio.as_items() else {
        return Ok(());
    };
    println!("{}:", items.name);
    for device in &items.items {
        println!(
            "  {}: manufacturer={} sample_rate={} transport={}",
            device.name,
            device.coreaudio_device_manufacturer.as_deref().unwrap_or("-"),
            device
                .coreaudio_device_srate
                .map(|rate| rate.to_string())
                .unwrap_or_else(|| "-".to_string()),
            device.coreaudio_device_transport.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
