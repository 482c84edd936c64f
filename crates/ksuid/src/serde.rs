use crate::Ksuid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the canonical 27-character base62 string.
impl Serialize for Ksuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.encode().as_str())
    }
}

/// Deserializes from the canonical base62 string via
/// [`Ksuid::from_encoded`].
impl<'de> Deserialize<'de> for Ksuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KsuidVisitor;

        impl serde::de::Visitor<'_> for KsuidVisitor {
            type Value = Ksuid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a base62 encoded KSUID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ksuid::from_encoded(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(KsuidVisitor)
    }
}
