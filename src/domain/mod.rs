pub mod podcast;
pub mod transcript;
