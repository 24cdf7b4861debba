mod capture;
mod serve;

use std::io::IsTerminal;
use std::process::ExitCode;

use sitesnap_lib::SnapError;

pub use capture::run_capture;
pub use serve::run_serve;

/// Render an error to stderr and return the fatal exit code.
pub(crate) fn render_error(err: SnapError) -> ExitCode {
    let colorize = std::io::stderr().is_terminal();
    let payload = err.to_payload();
    eprintln!("{} {}", color("[ERROR]", "31", colorize), payload.message);
    if let Some(remediation) = payload.remediation {
        eprintln!("Hint: {remediation}");
    }
    // Exit code 2 marks fatal errors.
    ExitCode::from(2)
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_returns_fatal_exit_code() {
        let code = render_error(SnapError::config("boom"));
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(2)));
    }

    #[test]
    fn color_wraps_text_only_when_enabled() {
        assert_eq!(color("x", "31", false), "x");
        assert_eq!(color("x", "31", true), "\x1b[31mx\x1b[0m");
    }
}
