pub mod category;
pub mod shared;
