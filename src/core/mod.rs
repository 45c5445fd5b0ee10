pub mod add;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
