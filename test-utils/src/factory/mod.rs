//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each entity
//! has a `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let scholarship = factory::create_scholarship(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, scholarship, application) =
//!         factory::helpers::create_application_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```

pub mod application;
pub mod document;
pub mod helpers;
pub mod scholarship;
pub mod user;
pub mod user_profile;

pub use application::create_application;
pub use document::create_document;
pub use scholarship::create_scholarship;
pub use user::{create_admin, create_user};
pub use user_profile::create_user_profile;
