//! Browser automation for full-page capture.
//!
//! Pages are rendered by Playwright's chromium, driven through an inline
//! Node.js helper script.
//!
//! # Example
//!
//! ```no_run
//! use sitesnap_lib::{capture_page, CaptureOptions};
//! use std::path::Path;
//!
//! # async fn example() -> sitesnap_lib::Result<()> {
//! let options = CaptureOptions::default();
//! let result = capture_page(
//!     "http://localhost:3000",
//!     Path::new("screenshot-1.png"),
//!     &options,
//!     None,
//! )
//! .await?;
//! println!("Screenshot saved to: {}", result.output_path.display());
//! # Ok(())
//! # }
//! ```

mod capture;
mod playwright;

pub use capture::{
    capture_page, CaptureOptions, CaptureResult, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT, DEFAULT_SETTLE_DELAY,
};
