pub mod host;
pub mod os;

pub use host::{HostEnv, NativeHost};
pub use os::OsFamily;
