use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

impl PeerId {
    /// Copies a raw 20-byte value, `None` for any other length.
    pub fn from_slice(data: &[u8]) -> Option<PeerId> {
        <[u8; 20]>::try_from(data).ok().map(PeerId)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for PeerId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = PeerId([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = std::array::TryFromSliceError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Ok(PeerId(<[u8; 20]>::try_from(data)?))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::ser::Serialize for PeerId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for PeerId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = PeerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<PeerId>().map_err(|e| E::custom(format!("expected 40 character hex string: {e}")))
            }
        }

        des.deserialize_str(HexVisitor)
    }
}
