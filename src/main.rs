use clap::Parser;
use clap::error::ErrorKind;
use jwtdecode::{Alphabet, Inspector, Palette};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: jwtdecode <jwt_token>";

/// Print the header and payload of a JWT as colorized JSON
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The encoded token (header.payload.signature)
    token: String,

    /// Decode segments with the URL-safe Base64 alphabet (`-` and `_`)
    #[arg(long)]
    url_safe: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if let Err(io) = e.print() {
                tracing::debug!(error = %io, "printing help failed");
            }
            return;
        }
        Err(e) => {
            tracing::debug!(error = %e, "invalid arguments");
            println!("{USAGE}");
            return;
        }
    };

    let inspector = Inspector::new()
        .alphabet(if cli.url_safe {
            Alphabet::UrlSafe
        } else {
            Alphabet::Standard
        })
        .palette(if cli.no_color {
            Palette::plain()
        } else {
            Palette::ansi()
        })
        .build();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = inspector.write_claims(&mut out, &cli.token) {
        tracing::debug!(error = ?e, "inspection failed");
        if let Err(io) = writeln!(out, "failed to write claims = {e}") {
            tracing::debug!(error = %io, "printing failure message failed");
        }
    }
    if let Err(io) = out.flush() {
        tracing::debug!(error = %io, "flushing stdout failed");
    }
}
