use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use obscurify::{
    cli,
    config::{self, Config, StoreBackend},
    error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web server
    Serve(ServeOptions),

    /// Exchange a refresh token for a new access token
    Refresh(RefreshOptions),

    /// List users that have logged in
    Users,

    /// List the summary texts
    Summaries,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    addr: Option<String>,

    /// Keep users and summaries in memory only
    #[clap(long)]
    memory: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RefreshOptions {
    refresh_token: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Serve(opt) => {
            if let Some(addr) = opt.addr {
                config.server_addr = addr;
            }
            if opt.memory {
                config.store = StoreBackend::Memory;
            }
            cli::serve(config).await
        }
        Command::Refresh(opt) => cli::refresh(config, opt.refresh_token).await,
        Command::Users => cli::users(config).await,
        Command::Summaries => cli::summaries(config).await,
        Command::Completions(_) => {}
    }
}
