//! sitesnap library
//!
//! Two small dev-tool components behind one library: a static file responder
//! for serving a site directory over HTTP, and a capture driver that renders
//! a page in headless chromium and writes an auto-numbered full-page
//! screenshot.
//!
//! # Module Overview
//!
//! - [`server`] - Static file responder (path-to-file mapping, content types)
//! - [`browser`] - Headless browser capture via a Playwright helper
//! - [`naming`] - Sequential `screenshot-<n>` output file naming
//! - [`config`] - Optional TOML configuration
//! - [`viewport`] - Capture viewport dimensions
//! - [`error`] - Error types and remediation payloads
//!
//! # Example
//!
//! ```no_run
//! use sitesnap_lib::{capture_page, next_screenshot_path, CaptureOptions};
//! use std::path::Path;
//!
//! # async fn example() -> sitesnap_lib::Result<()> {
//! let output = next_screenshot_path(Path::new("temporary screenshots"), "hero")?;
//! let result = capture_page(
//!     "http://localhost:3000",
//!     &output,
//!     &CaptureOptions::default(),
//!     None,
//! )
//! .await?;
//! println!("Screenshot saved to: {}", result.output_path.display());
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod naming;
pub mod server;
pub mod viewport;

pub use browser::{
    capture_page, CaptureOptions, CaptureResult, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT, DEFAULT_SETTLE_DELAY,
};
pub use config::{CaptureConfig, Config, ServerConfig, Timeouts};
pub use error::{ErrorCategory, ErrorPayload, Result, SnapError};
pub use naming::{
    next_screenshot_path, next_sequence, parse_sequence, screenshot_filename, SCREENSHOT_PREFIX,
};
pub use server::{content_type_for, resolve_request_path, router, serve, DEFAULT_PORT};
pub use viewport::Viewport;
