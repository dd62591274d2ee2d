use crate::cli::ui;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mkdir",
    about = "Create a directory (and missing ancestors) under the storage root"
)]
pub struct MkdirCommand {
    path: String,

    /// Fail when the leaf directory already exists
    #[arg(long)]
    fail_if_exists: bool,
}

pub async fn execute(command: MkdirCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let handle = service
        .create_dir(&command.path, command.fail_if_exists)
        .await?;
    ui::display_success(&format!("Created {}", handle.path.display()));
    Ok(())
}
