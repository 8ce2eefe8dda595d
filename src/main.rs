use std::path::PathBuf;

use slidecraft::khuta;

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(khuta::OUTPUT_FILE));

    let deck = khuta::build()?;
    deck.finalize(&output)?;

    println!("Presentation saved to: {}", output.display());
    Ok(())
}
