/// Opaque client value echoed in every reply.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct TransactionId(pub i32);
