//! Capture driver: runs the Playwright helper and supervises it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use super::playwright::{
    ensure_node_available, ensure_playwright_available, map_helper_error,
    map_helper_status_error, map_spawn_error, ScriptResult, CAPTURE_SCRIPT,
};
use crate::{Result, SnapError, Viewport};

/// Default timeout for page navigation.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default delay for CSS transitions/animations to settle after the reveal
/// pass, before the screenshot is taken.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(900);

/// Default timeout for the entire capture helper process.
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(45);

/// Configuration options for a page capture.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// The Node.js command to use (default: "node").
    pub node_command: String,
    /// Viewport dimensions for the browser.
    pub viewport: Viewport,
    /// Whether to run in headless mode.
    pub headless: bool,
    /// Timeout for page navigation (waits for network idle).
    pub navigation_timeout: Duration,
    /// Animation settle delay between the reveal pass and the screenshot.
    pub settle_delay: Duration,
    /// Timeout for the entire capture helper process.
    pub process_timeout: Duration,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            viewport: Viewport::default(),
            headless: true,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            settle_delay: DEFAULT_SETTLE_DELAY,
            process_timeout: DEFAULT_PROCESS_TIMEOUT,
        }
    }
}

/// Result of a successful page capture.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// Path the screenshot was written to.
    pub output_path: PathBuf,
    /// Viewport used for rendering.
    pub viewport: Viewport,
    /// Time the capture took end to end.
    pub elapsed: Duration,
}

/// Renders `url` in a headless browser and writes a full-page screenshot to
/// `output_path`.
///
/// The page is navigated until network idle, every `.reveal` element gains
/// the `visible` class, and the settle delay elapses before the capture.
/// The helper process is killed if it exceeds the process timeout.
pub async fn capture_page(
    url: &str,
    output_path: &Path,
    options: &CaptureOptions,
    progress: Option<&dyn Fn(&str)>,
) -> Result<CaptureResult> {
    let log = |message: &str| {
        if let Some(cb) = progress {
            cb(message);
        }
    };

    log(&format!(
        "Launching headless browser for {} ({}, nav {:?}, settle {:?})…",
        url, options.viewport, options.navigation_timeout, options.settle_delay
    ));

    // Fail fast if node or playwright are missing before spawning the helper.
    ensure_node_available(&options.node_command).await?;
    ensure_playwright_available(&options.node_command).await?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut cmd = Command::new(&options.node_command);
    cmd.arg("-e")
        .arg(CAPTURE_SCRIPT)
        .arg(url)
        .arg(options.viewport.width.to_string())
        .arg(options.viewport.height.to_string())
        .arg(options.navigation_timeout.as_millis().to_string())
        .arg(options.settle_delay.as_millis().to_string())
        .arg(output_path.to_string_lossy().to_string())
        .arg(if options.headless { "1" } else { "0" })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    log("Navigating and waiting for network idle…");
    let start = Instant::now();
    let mut child = cmd
        .spawn()
        .map_err(|err| map_spawn_error(err, &options.node_command))?;

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout_pipe {
            let _ = out.read_to_end(&mut buf).await;
        }
        buf
    });

    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut err) = stderr_pipe {
            let _ = err.read_to_end(&mut buf).await;
        }
        buf
    });

    let status = match timeout(options.process_timeout, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(err)) => return Err(SnapError::Io(err)),
        Err(_) => {
            let _ = child.kill().await;
            let _ = child.wait().await;
            return Err(SnapError::browser(format!(
                "Capture helper timed out after {:?}",
                options.process_timeout
            )));
        }
    };

    let stdout = stdout_task.await.unwrap_or_else(|_| Vec::new());
    let stderr = stderr_task.await.unwrap_or_else(|_| Vec::new());

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr);
        return Err(map_helper_error(status.to_string(), &stderr));
    }

    let stdout = String::from_utf8_lossy(&stdout);
    let result: ScriptResult = serde_json::from_str(&stdout).map_err(|_| {
        SnapError::browser(format!("Unexpected capture helper output: {}", stdout.trim()))
    })?;

    if result.status != "ok" {
        let message = result.message.unwrap_or_else(|| "no details".to_string());
        return Err(map_helper_status_error(&result.status, message));
    }

    log(&format!(
        "Capture finished in {:.1}s",
        start.elapsed().as_secs_f32()
    ));

    Ok(CaptureResult {
        output_path: output_path.to_path_buf(),
        viewport: options.viewport,
        elapsed: start.elapsed(),
    })
}
