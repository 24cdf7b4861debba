use std::path::PathBuf;
use std::process::ExitCode;

use sitesnap_lib::{capture_page, naming, CaptureOptions, Config, Viewport};

use super::render_error;

/// Run the capture command.
pub async fn run_capture(
    config_path: Option<PathBuf>,
    verbose: bool,
    url: String,
    label: String,
) -> ExitCode {
    let config = match Config::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };

    if let Err(err) = url::Url::parse(&url) {
        return render_error(err.into());
    }

    let output_path = match naming::next_screenshot_path(&config.capture.output_dir, &label) {
        Ok(path) => path,
        Err(err) => return render_error(err),
    };

    let options = CaptureOptions {
        node_command: config.capture.node_command,
        viewport: Viewport::default(),
        headless: config.capture.headless,
        navigation_timeout: config.capture.timeouts.navigation,
        settle_delay: config.capture.timeouts.settle,
        process_timeout: config.capture.timeouts.process,
    };

    let progress = |message: &str| eprintln!("{message}");
    let progress: Option<&dyn Fn(&str)> = if verbose { Some(&progress) } else { None };

    match capture_page(&url, &output_path, &options, progress).await {
        Ok(result) => {
            println!("Screenshot saved to: {}", result.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err),
    }
}
