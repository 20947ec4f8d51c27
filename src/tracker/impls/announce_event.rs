use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Wire value used by the UDP protocol; unknown values read as `None`.
    #[inline]
    pub fn from_i32(i: i32) -> Self {
        match i {
            1 => Self::Completed,
            2 => Self::Started,
            3 => Self::Stopped,
            _ => Self::None,
        }
    }

    #[inline]
    pub fn to_i32(&self) -> i32 {
        *self as i32
    }

    /// HTTP `event` parameter; empty and unknown values read as `None`.
    pub fn from_query(value: &[u8]) -> Self {
        match value {
            b"completed" => Self::Completed,
            b"started" => Self::Started,
            b"stopped" => Self::Stopped,
            _ => Self::None,
        }
    }
}
