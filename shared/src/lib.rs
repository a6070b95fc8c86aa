pub mod error;
pub mod log;
pub mod s3;
