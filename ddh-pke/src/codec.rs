//! Serde helpers for key and ciphertext material.
//!
//! Big integers are written as decimal strings so files stay readable and independent of
//! the limb size of the big-integer library; octet strings are written as standard Base64.

/// `#[serde(with = "decimal")]` for a single `BigUint`.
pub mod decimal {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<BigUint>().map_err(D::Error::custom)
    }
}

/// `#[serde(with = "decimal_array")]` for a fixed-size array of `BigUint`.
pub mod decimal_array {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        values: &[BigUint; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| value.to_str_radix(10)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[BigUint; N], D::Error> {
        let texts = Vec::<String>::deserialize(deserializer)?;
        let values = texts
            .iter()
            .map(|text| text.parse::<BigUint>().map_err(D::Error::custom))
            .collect::<Result<Vec<_>, _>>()?;

        values.try_into().map_err(|values: Vec<BigUint>| {
            D::Error::invalid_length(values.len(), &"fixed-size array")
        })
    }
}

/// `#[serde(with = "base64_octets")]` for a `Vec<u8>`.
pub mod base64_octets {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(octets: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(octets))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "decimal")]
        value: BigUint,
        #[serde(with = "decimal_array")]
        values: [BigUint; 3],
        #[serde(with = "base64_octets")]
        octets: Vec<u8>,
    }

    fn sample() -> Sample {
        Sample {
            value: BigUint::from(123456789012345678901234567890u128),
            values: [BigUint::from(1u32), BigUint::from(22u32), BigUint::from(333u32)],
            octets: b"hi!".to_vec(),
        }
    }

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"value":"123456789012345678901234567890","values":["1","22","333"],"octets":"aGkh"}"#
        );
    }

    #[test]
    fn test_deserialize() {
        let json =
            r#"{"value":"123456789012345678901234567890","values":["1","22","333"],"octets":"aGkh"}"#;
        let parsed: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_rejects_wrong_array_length() {
        let json =
            r#"{"value":"1","values":["1","22"],"octets":""}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }

    #[test]
    fn test_rejects_non_decimal() {
        let json =
            r#"{"value":"0x10","values":["1","22","333"],"octets":""}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }
}
