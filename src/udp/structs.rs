pub mod connection_id;
pub mod transaction_id;
pub mod connect_request;
pub mod connect_response;
pub mod announce_request;
pub mod announce_response;
pub mod scrape_request;
pub mod scrape_response;
pub mod torrent_scrape_statistics;
pub mod error_response;
pub mod connection_id_manager;
pub mod packet_job;
pub mod parse_pool;
pub mod udp_server;
