//! JSON-lines import of categories.
//!
//! Each non-blank line is a `CreateCategoryInput`. Created categories are
//! written to the output as one JSON object per line.

use crate::application::create_category::{dto::CreateCategoryInput, use_case::CreateCategoryUseCase};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub rejected: usize,
    pub cancelled: bool,
}

/// Imports every record from `reader` until EOF or cancellation.
///
/// Cancellation is observed while waiting for the next line, so an idle
/// interactive input does not delay it.
///
/// # Errors
///
/// Returns an error when reading or writing fails, or when `fail_fast` is set
/// and a record is malformed or rejected by the use case.
pub async fn import_lines<R, W>(
    reader: R,
    output: &mut W,
    create_category: &CreateCategoryUseCase,
    cancellation: &CancellationToken,
    fail_fast: bool,
) -> anyhow::Result<ImportSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut line_number = 0usize;
    let mut summary = ImportSummary::default();

    loop {
        let line = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                warn!("Import cancelled after line {}", line_number);
                summary.cancelled = true;
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };

        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<CreateCategoryInput>(&line) {
            Ok(input) => create_category
                .execute(input, cancellation)
                .await
                .map_err(anyhow::Error::from),
            Err(e) => Err(anyhow::Error::from(e).context("Malformed record")),
        };

        match result {
            Ok(created) => {
                summary.created += 1;
                let mut json = serde_json::to_vec(&created)?;
                json.push(b'\n');
                output.write_all(&json).await?;
            }
            Err(e) => {
                summary.rejected += 1;
                warn!("Line {} rejected: {:#}", line_number, e);
                if fail_fast {
                    return Err(e.context(format!("Import stopped at line {}", line_number)));
                }
            }
        }
    }

    output.flush().await?;
    Ok(summary)
}
