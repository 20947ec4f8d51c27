/// Plain message error used during boot and CLI handling.
pub mod custom_error;
