use anyhow::{Context, Result};
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    boxcast_core::init()?;

    let config = boxcast_core::Config::load_or_default()?;
    let coordinator = boxcast_core::Coordinator::new(config)?;

    // Sole positional argument: an ISO-8601 date. Defaults to today.
    let date = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<NaiveDate>()
            .with_context(|| format!("invalid date {arg:?}, expected YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };

    tracing::info!("Running prediction for {}", date);
    let prediction = coordinator.predict(date).await?;

    let tag = if prediction.is_full() { "full" } else { "partial" };
    println!("Prediction for {date}: {tag}");
    println!(
        "Annotated image written to {}",
        coordinator
            .config()
            .paths
            .output_dir
            .join(boxcast_core::OUTPUT_FILE)
            .display()
    );

    Ok(())
}
