pub mod admin_guard;
pub mod json_config;
pub mod patch_field;
pub mod response;
pub mod validate;

pub use admin_guard::{AdminAccess, AdminTokenConfig};
pub use patch_field::PatchField;
pub use response::ApiReply;
