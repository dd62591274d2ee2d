use crate::cli::ui;
use clap::Parser;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "write", about = "Write data to a file under the storage root")]
pub struct WriteCommand {
    path: String,

    /// Literal data to write; reads stdin when omitted
    data: Option<String>,
}

pub async fn execute(command: WriteCommand) -> anyhow::Result<()> {
    let data = match command.data {
        Some(data) => data,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let service = crate::FileService::new();
    service.write_file(&command.path, data.as_bytes()).await?;
    ui::display_success(&format!("Wrote {} bytes to {}", data.len(), command.path));
    Ok(())
}
