/// Trusted seed offered next to the peer list, in the form the client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineHint {
    /// Pooled 6 or 18 byte address.
    Compact(Vec<u8>),
    /// Bencoded `{peer id, ip, port}` dictionary.
    Verbose(Vec<u8>),
}
