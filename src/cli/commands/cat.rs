use crate::service::{FileData, ReadFormat};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "cat", about = "Print a file under the storage root")]
pub struct CatCommand {
    path: String,

    /// Output representation: text, data-url, binary-string, array-buffer, or a 0-3 code
    #[arg(short, long, default_value = "text")]
    format: ReadFormat,
}

pub async fn execute(command: CatCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let data = service.read_file(&command.path, command.format).await?;

    match data {
        FileData::Text(text) | FileData::DataUrl(text) | FileData::Binary(text) => {
            println!("{}", text);
        }
        FileData::Buffer(bytes) => {
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}
