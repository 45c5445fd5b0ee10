pub mod product_code;

pub use product_code::ProductCode;
