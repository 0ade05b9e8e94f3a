pub mod history;
pub mod system;
pub mod upload;
