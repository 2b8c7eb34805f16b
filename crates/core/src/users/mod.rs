mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{PasswordChange, ProfileUpdate, UserProfile};
pub use users_service::UserService;
pub use users_traits::{UserApiTrait, UserServiceTrait};
