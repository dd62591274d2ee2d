use crate::cli::ui;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "touch",
    about = "Create a file (and missing ancestor directories) under the storage root"
)]
pub struct TouchCommand {
    path: String,

    /// Fail when the file already exists
    #[arg(long)]
    fail_if_exists: bool,
}

pub async fn execute(command: TouchCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let handle = service
        .create_file(&command.path, command.fail_if_exists)
        .await?;
    ui::display_success(&format!("Created {}", handle.path.display()));
    Ok(())
}
