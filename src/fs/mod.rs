//! FileSystem capability for testable workspace inspection

mod local;
mod mock;
mod port;

pub use local::{FsError, LocalFileSystem};
pub use mock::MockFileSystem;
pub use port::FileSystem;
