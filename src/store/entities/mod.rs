pub mod prelude;

pub mod product;
pub mod user;
