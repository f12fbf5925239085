//! Domain entities representing core business objects.

pub mod admin;
pub mod table;
pub mod token;
pub mod upload;
pub mod user;

// Re-export commonly used types
pub use admin::Admin;
pub use table::{NewTable, Table, TablePatch};
pub use token::{AuthToken, Claims, TOKEN_EXPIRY_SECONDS};
pub use upload::{AvatarUpload, ALLOWED_AVATAR_TYPES};
pub use user::{Role, User, DEFAULT_AVATAR};
