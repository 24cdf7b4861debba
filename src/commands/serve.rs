use std::path::PathBuf;
use std::process::ExitCode;

use sitesnap_lib::{server, Config, SnapError};
use tokio::net::TcpListener;

use super::render_error;

/// Run the serve command.
pub async fn run_serve(config_path: Option<PathBuf>, verbose: bool) -> ExitCode {
    let config = match Config::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err),
    };

    if verbose {
        eprintln!(
            "Serving {} on port {}",
            config.server.root.display(),
            config.server.port
        );
    }

    let addr = bind_addr(config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            return render_error(SnapError::config(format!(
                "Failed to bind {}: {}",
                addr, err
            )))
        }
    };

    println!("Server running at http://localhost:{}", config.server.port);

    match server::serve(listener, config.server.root).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err),
    }
}

/// The server listens on all interfaces; the startup line advertises the
/// localhost URL.
fn bind_addr(port: u16) -> String {
    format!("0.0.0.0:{port}")
}

#[cfg(test)]
mod tests {
    use super::bind_addr;

    #[test]
    fn bind_addr_listens_on_all_interfaces() {
        assert_eq!(bind_addr(3000), "0.0.0.0:3000");
    }
}
