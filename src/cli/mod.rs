pub mod cli;
pub mod commands;
pub mod ui;

pub use cli::{Cli, Commands};
pub use commands::{
    run_cat, run_free, run_ls, run_mkdir, run_rm, run_size, run_touch, run_write,
};
