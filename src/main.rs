#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    use clap::Parser;
    use mobilefs_rs::cli::{Cli, Commands};
    use mobilefs_rs::cli::{
        run_cat, run_free, run_ls, run_mkdir, run_rm, run_size, run_touch, run_write,
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::Ls(cmd) => {
            run_ls(cmd).await?;
        }
        Commands::Mkdir(cmd) => {
            run_mkdir(cmd).await?;
        }
        Commands::Touch(cmd) => {
            run_touch(cmd).await?;
        }
        Commands::Rm(cmd) => {
            run_rm(cmd).await?;
        }
        Commands::Cat(cmd) => {
            run_cat(cmd).await?;
        }
        Commands::Write(cmd) => {
            run_write(cmd).await?;
        }
        Commands::Size(cmd) => {
            run_size(cmd).await?;
        }
        Commands::Free(cmd) => {
            run_free(cmd).await?;
        }
    }

    Ok(())
}
