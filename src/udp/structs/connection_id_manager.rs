/// Issues and checks connection ids without keeping per-client state.
///
/// An id is the first 8 bytes of `sha1(secret | bucket | ip | port)`, where
/// `bucket = now / lifetime`. Ids from the current and the previous bucket are
/// accepted, so an id lives between one and two lifetimes.
pub struct ConnectionIdManager {
    pub(crate) secret: [u8; 32],
    pub(crate) lifetime: u64,
}
