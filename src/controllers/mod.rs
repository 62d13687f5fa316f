pub mod file_response;
pub mod health;
pub mod podcast;
