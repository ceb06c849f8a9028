pub use super::{product::Entity as Product, user::Entity as User};
