use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use genrelist::{cli, config, error};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Filter a playlist by genre and publish the result
    Run(RunOptions),

    /// Show what a run would publish, without writing anything
    Preview(PreviewOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RunOptions {
    /// Source playlist to read tracks from
    #[clap(long)]
    pub playlist: String,

    /// Genre substring to match against artist genre tags
    #[clap(long, default_value = "r&b")]
    pub genre: String,

    /// Name of the published playlist (defaults to "only <genre>")
    #[clap(long)]
    pub name: Option<String>,

    /// Description of the published playlist
    #[clap(long)]
    pub description: Option<String>,

    /// Make the published playlist public
    #[clap(long)]
    pub public: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewOptions {
    /// Source playlist to read tracks from
    #[clap(long)]
    pub playlist: String,

    /// Genre substring to match against artist genre tags
    #[clap(long, default_value = "r&b")]
    pub genre: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Run(opt) => {
            cli::run(opt.playlist, opt.genre, opt.name, opt.description, opt.public).await
        }
        Command::Preview(opt) => cli::preview(opt.playlist, opt.genre).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
