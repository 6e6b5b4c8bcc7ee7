// Event handling modules
pub mod file_operations;
pub mod gallery_management;
pub mod helpers;
pub mod input_handling;
pub mod profile_management;
pub mod session_management;
pub mod viewers;

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
