//! JSON-lines transport for the color panel.
//!
//! Each input line is one panel request; each `updateData` pushed by the
//! panel is written as one output line. Lines that do not parse are logged
//! and skipped, and a request the manager rejects does not end the session.

use crate::error::AppResult;
use async_trait::async_trait;
use engine::ColorSpaceError;
use engine::common::ColorSpaceResult;
use engine::panel::{ColorSpacePanel, PanelRequest, PanelUpdate, PanelView};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// A [`PanelView`] writing one JSON document per line.
pub struct JsonLinesView<W> {
    output: Mutex<W>,
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesView<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> PanelView for JsonLinesView<W> {
    async fn post_message(&self, update: PanelUpdate) -> ColorSpaceResult<()> {
        let mut line = serde_json::to_string(&update)?;
        line.push('\n');

        let mut output = self.output.lock().await;
        output
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ColorSpaceError::View(format!("output closed: {e}")))?;
        output
            .flush()
            .await
            .map_err(|e| ColorSpaceError::View(format!("output closed: {e}")))
    }
}

/// Attach a JSON-lines view to `panel` and serve requests from `input` until
/// it ends. Returns the number of requests handled.
pub async fn run_panel_bridge<R, W>(
    panel: &ColorSpacePanel,
    input: R,
    output: W,
) -> AppResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    panel
        .resolve_view(Arc::new(JsonLinesView::new(output)))
        .await?;

    let mut handled = 0;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: PanelRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Ignoring panel message that does not parse: {e}");
                continue;
            }
        };

        log::debug!("Panel request: {request:?}");
        if let Err(e) = panel.handle_message(request).await {
            log::error!("Panel request failed: {e}");
            continue;
        }
        handled += 1;
    }

    log::debug!("Panel input closed after {handled} requests");
    Ok(handled)
}
