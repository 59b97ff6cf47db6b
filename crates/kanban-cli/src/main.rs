mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(cli.data_dir).await?;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => handlers::board::show(&ctx),
        Commands::Board(board_cmd) => {
            handlers::board::handle(&mut ctx, board_cmd.action).await?;
        }
        Commands::List(list_cmd) => {
            handlers::list::handle(&mut ctx, list_cmd.action).await?;
        }
        Commands::Card(card_cmd) => {
            handlers::card::handle(&mut ctx, card_cmd.action).await?;
        }
        Commands::Tag(tag_cmd) => {
            handlers::tag::handle(&mut ctx, tag_cmd.action).await?;
        }
        Commands::Checklist(checklist_cmd) => {
            handlers::checklist::handle(&mut ctx, checklist_cmd.action).await?;
        }
        Commands::Export(args) => {
            handlers::export::handle_export(&ctx, args).await?;
        }
        Commands::Import(args) => {
            handlers::export::handle_import(&mut ctx, args).await?;
        }
        Commands::Reset { yes } => {
            handlers::export::handle_reset(&mut ctx, yes).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
