pub mod cat;
pub mod free;
pub mod ls;
pub mod mkdir;
pub mod rm;
pub mod size;
pub mod touch;
pub mod write;

pub use cat::CatCommand;
pub use free::FreeCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use rm::RmCommand;
pub use size::SizeCommand;
pub use touch::TouchCommand;
pub use write::WriteCommand;

pub use cat::execute as run_cat;
pub use free::execute as run_free;
pub use ls::execute as run_ls;
pub use mkdir::execute as run_mkdir;
pub use rm::execute as run_rm;
pub use size::execute as run_size;
pub use touch::execute as run_touch;
pub use write::execute as run_write;
