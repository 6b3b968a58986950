pub mod error;
pub mod flash;
pub mod health;
pub mod pages;
pub mod records;

pub use error::AppError;
