use anyhow::Context;
use catalog::{
    application::create_category::use_case::CreateCategoryUseCase, config::Config,
    import::import_lines, infrastructure::persistence::in_memory::InMemoryCatalog,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured fallback; logs go to stderr so stdout
    // carries only the JSON output.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &config.import_path {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open import file {}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let cancellation = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(cancellation.clone()));

    let catalog = InMemoryCatalog::new();
    let create_category = CreateCategoryUseCase::new(
        Arc::new(catalog.repository()),
        Arc::new(catalog.unit_of_work()),
    );

    let mut stdout = tokio::io::stdout();
    let summary = import_lines(
        reader,
        &mut stdout,
        &create_category,
        &cancellation,
        config.fail_fast,
    )
    .await?;

    let committed = catalog.committed_count().await;
    tracing::info!(
        created = summary.created,
        rejected = summary.rejected,
        committed,
        "Import finished"
    );

    if summary.cancelled {
        // A pending stdin read sits on the blocking pool and would keep the
        // runtime from shutting down.
        std::process::exit(130);
    }
    Ok(())
}

async fn cancel_on_ctrl_c(cancellation: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Ctrl+C received, cancelling import");
        cancellation.cancel();
    }
}
