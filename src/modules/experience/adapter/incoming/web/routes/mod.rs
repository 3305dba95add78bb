mod create_experience;
mod delete_experience;
mod get_experiences;
mod update_experience;

pub use create_experience::create_experience_handler;
pub use delete_experience::delete_experience_handler;
pub use get_experiences::get_experiences_handler;
pub use update_experience::update_experience_handler;
