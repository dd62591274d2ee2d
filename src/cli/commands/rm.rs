use crate::cli::ui;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rm", about = "Remove a file or directory under the storage root")]
pub struct RmCommand {
    path: String,

    /// Remove a directory and everything beneath it
    #[arg(short, long)]
    recursive: bool,

    /// Skip the confirmation prompt for recursive removal
    #[arg(short = 'y', long)]
    yes: bool,
}

pub async fn execute(command: RmCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();

    if command.recursive {
        if !command.yes {
            let confirmed = inquire::Confirm::new(&format!(
                "Remove directory {} and all of its contents?",
                command.path
            ))
            .with_default(false)
            .prompt()?;
            if !confirmed {
                ui::display_info("Aborted");
                return Ok(());
            }
        }
        service.remove_dir(&command.path).await?;
    } else {
        service.remove_file(&command.path).await?;
    }

    ui::display_success(&format!("Removed {}", command.path));
    Ok(())
}
