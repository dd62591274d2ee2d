use crate::cli::commands::{
    CatCommand, FreeCommand, LsCommand, MkdirCommand, RmCommand, SizeCommand, TouchCommand,
    WriteCommand,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "App-private storage CLI for Rust", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Touch(TouchCommand),
    Rm(RmCommand),
    Cat(CatCommand),
    Write(WriteCommand),
    Size(SizeCommand),
    Free(FreeCommand),
}
