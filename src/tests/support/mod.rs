pub mod app_state_builder;
pub mod stubs;

mod fixtures;

pub use fixtures::{certification_record, experience_record};
