pub use super::application::Entity as Application;
pub use super::document::Entity as Document;
pub use super::scholarship::Entity as Scholarship;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;
