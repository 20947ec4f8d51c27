//! UDP tracker protocol (BEP 15).
//!
//! # Protocol Overview
//!
//! 1. Client sends a connect request carrying the protocol magic
//! 2. Server answers with a connection id bound to the client endpoint
//! 3. Client uses that id for announce and scrape requests
//!
//! # Message Types
//!
//! - **Connect** (action=0): obtain a connection id
//! - **Announce** (action=1): register and receive compact peers of the requester's family
//! - **Scrape** (action=2): seed/leech numbers for up to 74 hashes
//! - **Error** (action=3): message text, transaction id echoed
//!
//! Connection ids are stateless: see [`structs::connection_id_manager::ConnectionIdManager`].
//! Receive tasks only queue packets; worker tasks decode, run the tracker
//! services and send the reply.

/// Request, response and parse error enumerations.
pub mod enums;

/// Implementation blocks for packet codecs and the server.
pub mod impls;

/// Wire messages and server state.
pub mod structs;

/// Protocol constants and service bootstrap.
#[allow(clippy::module_inception)]
pub mod udp;
