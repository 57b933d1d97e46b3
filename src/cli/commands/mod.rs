pub mod calc;
pub mod config;
pub mod init;
pub mod shell;
