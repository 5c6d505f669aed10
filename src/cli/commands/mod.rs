pub mod init;
pub mod sync;
pub mod translate;
