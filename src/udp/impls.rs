pub mod request_parse_error;
pub mod request;
pub mod response;
pub mod connection_id_manager;
pub mod parse_pool;
pub mod udp_server;
