use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitesnap")]
#[command(
    version,
    about = "Static dev server and auto-numbered full-page screenshot tool",
    long_about = "sitesnap\n\nModes:\n- serve: serve the site directory over HTTP on port 3000.\n- capture: render a URL in headless chromium and save a full-page screenshot\n  named screenshot-<n>.png (or screenshot-<n>-<label>.png) in the output\n  directory.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) overriding the built-in defaults for port/root/output dir/timeouts"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the site directory over HTTP
    Serve,

    /// Capture a full-page screenshot of a URL
    Capture {
        #[arg(
            default_value = "http://localhost:3000",
            help = "Target URL to capture"
        )]
        url: String,

        #[arg(
            default_value = "",
            help = "Optional label appended to the screenshot filename"
        )]
        label: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn capture_defaults_to_localhost_and_empty_label() {
        let cli = Cli::parse_from(["sitesnap", "capture"]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Capture { url, label } => {
                assert_eq!(url, "http://localhost:3000");
                assert_eq!(label, "");
            }
            _ => panic!("expected capture command"),
        }
    }

    #[test]
    fn capture_accepts_positional_url_and_label() {
        let cli = Cli::parse_from(["sitesnap", "capture", "http://localhost:8080", "hero"]);

        match cli.command {
            Commands::Capture { url, label } => {
                assert_eq!(url, "http://localhost:8080");
                assert_eq!(label, "hero");
            }
            _ => panic!("expected capture command"),
        }
    }

    #[test]
    fn serve_takes_no_arguments() {
        let cli = Cli::parse_from(["sitesnap", "serve"]);
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::parse_from(["sitesnap", "--verbose", "serve", "--config", "snap.toml"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("snap.toml"))
        );
    }
}
