use crate::storage::EntryKind;
use clap::Parser;
use comfy_table::Table;

#[derive(Parser, Debug)]
#[command(name = "ls", about = "List the entries of a directory under the storage root")]
pub struct LsCommand {
    path: String,

    #[arg(short, long)]
    json: bool,
}

pub async fn execute(command: LsCommand) -> anyhow::Result<()> {
    let service = crate::FileService::new();
    let entries = service.get_directory_contents(&command.path).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Directory {} is empty", command.path);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Kind", "Path"]);
    for entry in &entries {
        let kind = match entry.kind {
            EntryKind::Directory => "dir",
            EntryKind::File => "file",
        };
        table.add_row(vec![
            entry.name.clone(),
            kind.to_string(),
            entry.path.display().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
