pub mod config;
pub mod goal;
pub mod init;
pub mod month;
pub mod purge;
pub mod status;
pub mod track;
pub mod week;
