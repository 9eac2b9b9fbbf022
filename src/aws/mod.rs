pub mod account;
pub mod arn;

// Re-export commonly used types (functions should be accessed via module path)
pub use arn::RoleArn;
