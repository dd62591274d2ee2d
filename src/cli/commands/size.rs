use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "size",
    about = "Total size in bytes of a file or directory tree under the storage root"
)]
pub struct SizeCommand {
    path: String,

    /// Treat the path as a file rather than a directory
    #[arg(long)]
    file: bool,
}

pub async fn execute(command: SizeCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let bytes = if command.file {
        service.get_file_size(&command.path).await?
    } else {
        service.get_directory_size(&command.path).await?
    };
    println!("{} bytes", bytes);
    Ok(())
}
