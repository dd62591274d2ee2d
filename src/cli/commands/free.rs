use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "free", about = "Available bytes on device storage")]
pub struct FreeCommand {}

pub async fn execute(_command: FreeCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let bytes = service.calculate_free_space().await?;
    println!("{} bytes free", bytes);
    Ok(())
}
