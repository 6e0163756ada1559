//! JSON export of a computed dashboard frame.

use crate::DashboardArgs;
use anyhow::Context;
use isone_dashboard::{DashboardFrame, DrawRequest, RecordingRenderer};
use log::info;
use serde::Serialize;
use std::path::Path;

/// A frame plus the draw calls a renderer would receive for it.
#[derive(Serialize)]
pub struct FrameExport<'a> {
    pub frame: &'a DashboardFrame,
    pub draw_requests: Vec<DrawRequest>,
}

impl<'a> FrameExport<'a> {
    pub fn new(frame: &'a DashboardFrame) -> Self {
        let mut renderer = RecordingRenderer::new();
        frame.render_into(&mut renderer);
        FrameExport {
            frame,
            draw_requests: renderer.take(),
        }
    }
}

/// Load, compute and write a frame for the requested filter to `output`.
pub async fn run_export(args: &DashboardArgs, output: &Path) -> anyhow::Result<()> {
    let (dashboard, filter) = args.load().await?;
    let frame = dashboard.compute(&filter);
    let export = FrameExport::new(&frame);
    let json = serde_json::to_string_pretty(&export)?;
    tokio::fs::write(output, json)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "Export complete: {} draw calls written to {}",
        export.draw_requests.len(),
        output.display()
    );
    Ok(())
}
