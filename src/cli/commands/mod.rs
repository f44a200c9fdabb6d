pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod project;
pub mod sync;
