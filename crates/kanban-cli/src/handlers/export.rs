use crate::cli::{ExportArgs, ImportArgs};
use crate::context::CliContext;
use crate::output;
use kanban_session::Intent;

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> anyhow::Result<()> {
    if args.stdout {
        let export = ctx.session.export()?;
        println!("{}", export.contents);
        return Ok(());
    }

    let path = match args.output {
        Some(path) => path,
        None => std::env::current_dir()?.join(ctx.session.export()?.file_name),
    };
    let export = ctx
        .session
        .export_to(&path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;

    output::output_success(serde_json::json!({
        "file": path.display().to_string(),
        "suggested_name": export.file_name,
    }));
    Ok(())
}

pub async fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let outcome = ctx.session.import_file(&args.file).await;
    if outcome.failed() {
        let message = outcome
            .notice
            .map(|n| n.message().to_string())
            .or(outcome.error)
            .unwrap_or_default();
        output::output_error(&message);
    }

    let board = ctx.session.board();
    output::output_success(serde_json::json!({
        "message": outcome.notice.map(|n| n.message().to_string()),
        "title": board.title,
        "lists": board.lists.len(),
        "cards": board.card_count(),
    }));
    Ok(())
}

pub async fn handle_reset(ctx: &mut CliContext, confirmed: bool) -> anyhow::Result<()> {
    if !confirmed {
        output::output_error("Resetting discards the whole board. Re-run with --yes to confirm.");
    }
    ctx.dispatch(Intent::Reset { confirmed }).await?;
    output::output_success(ctx.session.view());
    Ok(())
}
