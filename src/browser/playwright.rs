//! Playwright helper for headless page capture.
//!
//! The capture itself runs in an inline Node.js script: launch chromium,
//! navigate, force scroll-reveal elements visible, wait for transitions to
//! settle, write a full-page screenshot. This module holds that script plus
//! the Node/Playwright availability checks and error mapping.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{Result, SnapError};

/// Inline capture script.
///
/// argv: url, width, height, navTimeoutMs, settleMs, screenshotPath,
/// headlessFlag. Elements carrying the `reveal` class are given the `visible`
/// class before the settle wait so scroll-triggered animations end up in
/// their revealed state on the capture.
pub(crate) const CAPTURE_SCRIPT: &str = r#"
const [, url, width, height, navTimeout, settleMs, screenshotPath, headlessFlag] = process.argv;

async function run() {
  let browser;
  try {
    const { chromium } = require('playwright');
    browser = await chromium.launch({ headless: headlessFlag !== '0' });
    const context = await browser.newContext({
      viewport: {
        width: parseInt(width, 10),
        height: parseInt(height, 10)
      }
    });
    const page = await context.newPage();

    await page.goto(url, { waitUntil: 'networkidle', timeout: parseInt(navTimeout, 10) });

    await page.evaluate(() => {
      document.querySelectorAll('.reveal').forEach(el => el.classList.add('visible'));
    });
    await page.waitForTimeout(parseInt(settleMs, 10));

    await page.screenshot({ path: screenshotPath, fullPage: true });

    console.log(JSON.stringify({ status: 'ok' }));
  } catch (err) {
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status: 'error', message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Timeout for checking node/playwright availability.
pub(crate) const NODE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Script to check if Playwright is installed.
const PLAYWRIGHT_CHECK_SCRIPT: &str = "require('playwright'); process.stdout.write('ok');";

/// Result line printed by the capture script.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ScriptResult {
    pub status: String,
    pub message: Option<String>,
}

/// Maps a spawn error to an appropriate SnapError.
pub(crate) fn map_spawn_error(err: io::Error, command: &str) -> SnapError {
    if err.kind() == io::ErrorKind::NotFound {
        SnapError::browser(format!(
            "Unable to spawn capture helper; '{}' was not found on PATH",
            command
        ))
    } else {
        SnapError::Io(err)
    }
}

/// Maps capture-helper stderr output to an appropriate SnapError.
pub(crate) fn map_helper_error(status_text: impl Into<String>, stderr: &str) -> SnapError {
    if let Ok(result) = serde_json::from_str::<ScriptResult>(stderr) {
        let message = result.message.unwrap_or_else(|| "no details".to_string());
        return map_helper_status_error(&result.status, message);
    }

    if stderr
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        return SnapError::browser(
            "Playwright npm package is missing; install with `npm install playwright`.",
        );
    }

    SnapError::browser(format!(
        "Capture helper exited with status {}: {}",
        status_text.into(),
        stderr.trim()
    ))
}

/// Maps a status line reported by the capture script to an appropriate SnapError.
pub(crate) fn map_helper_status_error(status: &str, message: String) -> SnapError {
    if message
        .to_ascii_lowercase()
        .contains("cannot find module 'playwright'")
    {
        SnapError::browser(
            "Playwright npm package is missing; install with `npm install playwright`.",
        )
    } else {
        SnapError::browser(format!("Capture helper error (status {status}): {message}"))
    }
}

/// Ensures Node.js is available on the system.
pub(crate) async fn ensure_node_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.status())
        .await
        .map_err(|_| {
            SnapError::browser(format!(
                "Timed out checking node availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !status.success() {
        return Err(SnapError::browser(format!(
            "Node command {:?} is not available (exit {})",
            node_command, status
        )));
    }

    Ok(())
}

/// Ensures the Playwright npm package is installed.
pub(crate) async fn ensure_playwright_available(node_command: &str) -> Result<()> {
    let mut cmd = Command::new(node_command);
    cmd.arg("-e")
        .arg(PLAYWRIGHT_CHECK_SCRIPT)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let output = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.output())
        .await
        .map_err(|_| {
            SnapError::browser(format!(
                "Timed out checking Playwright availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_error(err, node_command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(map_helper_error(format!("{:?}", output.status), &stderr));
    }

    Ok(())
}
