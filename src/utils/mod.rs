pub mod constants;
pub mod files;
pub mod logger;
