mod send_message;

pub use send_message::send_contact_handler;
