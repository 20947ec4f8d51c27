/// Announce event as sent by the client.
pub mod announce_event;

/// Stopped acknowledgement or a full announce result.
pub mod announce_outcome;

/// Peer list in compact or dictionary form.
pub mod announce_peers;

/// Client and server error taxonomy of the services.
pub mod tracker_error;

/// Store lookups that can miss.
pub mod store_error;

/// Baseline provider hint in compact or dictionary form.
pub mod baseline_hint;
