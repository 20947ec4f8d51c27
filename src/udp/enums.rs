pub mod request;
pub mod response;
pub mod request_parse_error;
