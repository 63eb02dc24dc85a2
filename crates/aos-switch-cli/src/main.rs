//! Command-line entry point for running commands on an ArubaOS-Switch.
//!
//! Every invocation opens a session, performs one operation and logs out.

use aos_switch_client::{
    ApiVersion, ClientInit, RequestOptions,
    constants::{defaults, env_var},
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::{Method, StatusCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "aos-switch", version, about = "Run commands on an ArubaOS-Switch over REST")]
struct Cli {
    /// Switch origin, e.g. https://switch.example
    #[arg(long, env = env_var::ORIGIN)]
    origin: String,
    /// REST API version tag (v1..v8)
    #[arg(long = "api-version", env = env_var::VERSION, default_value = "v1")]
    api_version: ApiVersion,
    #[arg(short = 'u', long, env = env_var::USERNAME, default_value = defaults::USERNAME)]
    username: String,
    #[arg(
        short = 'p',
        long,
        env = env_var::PASSWORD,
        default_value = defaults::PASSWORD,
        hide_env_values = true
    )]
    password: String,
    /// Connection timeout in milliseconds
    #[arg(long)]
    connect_timeout_ms: Option<u64>,
    /// Whole-request timeout in milliseconds
    #[arg(long)]
    read_timeout_ms: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a CLI command and print its output
    Run {
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },
    /// Send a raw REST request under /rest/<version> and print the response body
    Request {
        method: String,
        path: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
}

impl Cli {
    fn client_init(&self) -> ClientInit {
        let mut init = ClientInit::new(&self.origin)
            .with_version(self.api_version)
            .with_auth(&self.username, &self.password);
        init.connect_timeout_ms = self.connect_timeout_ms;
        init.read_timeout_ms = self.read_timeout_ms;
        init
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Build request options from the raw method name and optional JSON body
fn request_options(method: &str, body: Option<&str>) -> anyhow::Result<RequestOptions> {
    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP method '{}'", method))?;
    let mut options = RequestOptions::new(method);
    if let Some(body) = body {
        let body: serde_json::Value =
            serde_json::from_str(body).context("request body is not valid JSON")?;
        options = options.with_json(body);
    }
    Ok(options)
}

fn check_status(path: &str, status: StatusCode) -> anyhow::Result<()> {
    if !status.is_success() {
        anyhow::bail!("request to {} failed with status {}", path, status);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let init = cli.client_init();
    debug!("Using {}", init.base_url());

    match cli.command {
        Command::Run { command } => {
            let command = command.join(" ");
            let output = aos_switch_client::run_once(init, &command)
                .await
                .with_context(|| format!("running '{}'", command))?;
            println!("{}", output);
        }
        Command::Request { method, path, body } => {
            let options = request_options(&method, body.as_deref())?;
            debug!("{} {}", options.method(), path);

            let response = aos_switch_client::request_once(init, &path, options).await?;
            let status = response.status();
            let text = response.text().await?;
            println!("{}", text);
            check_status(&path, status)?;
        }
    }

    Ok(())
}
