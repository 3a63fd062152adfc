// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Strict hexadecimal decoding of caller supplied inputs

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("odd number of hex characters: {length}")]
    OddLength { length: usize },
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("{length} bytes exceed the maximum of {max_length} bytes")]
    TooLong { length: usize, max_length: usize },
}

/// Decode a hex string into at most `max_bytes` bytes
///
/// Both upper and lower case digits are accepted. Signs, whitespace and a `0x` prefix are not.
/// Either the whole string is decoded or no bytes are returned at all.
pub fn decode(hex: &str, max_bytes: usize) -> Result<Vec<u8>, Error> {
    if hex.len() % 2 != 0 {
        return Err(Error::OddLength { length: hex.len() });
    }

    let length = hex.len() / 2;

    // Reject before allocating anything for the decoded bytes
    if length > max_bytes {
        return Err(Error::TooLong {
            length,
            max_length: max_bytes,
        });
    }

    hex::decode(hex).map_err(|error| match error {
        hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidCharacter {
            character: c,
            index,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            Error::OddLength { length: hex.len() }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_string_decodes_to_nothing() {
        assert_eq!(decode("", 0), Ok(Vec::new()));
        assert_eq!(decode("", 64), Ok(Vec::new()));
    }

    #[test]
    fn digit_pairs_are_most_significant_nibble_first() {
        assert_eq!(decode("aa", 64), Ok(vec![0xaa]));
        assert_eq!(decode("0f10", 64), Ok(vec![0x0f, 0x10]));
        assert_eq!(decode("aAbB0fFF", 4), Ok(vec![0xaa, 0xbb, 0x0f, 0xff]));
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(decode("a", 64), Err(Error::OddLength { length: 1 }));
        assert_eq!(decode("abc", 64), Err(Error::OddLength { length: 3 }));
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        assert_eq!(
            decode("zz", 64),
            Err(Error::InvalidCharacter {
                character: 'z',
                index: 0
            })
        );
        assert_eq!(
            decode("00g0", 64),
            Err(Error::InvalidCharacter {
                character: 'g',
                index: 2
            })
        );
    }

    #[test]
    fn lenient_integer_syntax_is_rejected() {
        for hex in ["+a", "-a", " a", "a ", "0x", "0x0a"] {
            assert!(decode(hex, 64).is_err(), "{hex:?} was accepted");
        }
    }

    #[test]
    fn bound_is_inclusive() {
        let at_bound = "ab".repeat(64);
        let over_bound = "ab".repeat(65);

        assert_eq!(decode(&at_bound, 64).map(|bytes| bytes.len()), Ok(64));
        assert_eq!(
            decode(&over_bound, 64),
            Err(Error::TooLong {
                length: 65,
                max_length: 64
            })
        );
    }

    proptest! {
        #[test]
        fn encoded_bytes_decode_to_themselves(bytes in proptest::collection::vec(any::<u8>(), 0..=512)) {
            prop_assert_eq!(decode(&hex::encode(&bytes), 512), Ok(bytes.clone()));
            prop_assert_eq!(decode(&hex::encode_upper(&bytes), 512), Ok(bytes));
        }

        #[test]
        fn odd_length_always_fails(hex in "([0-9a-fA-F]{2}){0,64}[0-9a-fA-F]") {
            prop_assert_eq!(decode(&hex, 512), Err(Error::OddLength { length: hex.len() }));
        }

        #[test]
        fn any_non_hex_character_fails(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
            character in any::<char>().prop_filter("non-hex", |character| !character.is_ascii_hexdigit()),
            position in any::<proptest::sample::Index>(),
        ) {
            let mut hex = hex::encode(&bytes);
            // Character boundaries are guaranteed since the encoded string is ASCII
            hex.insert(position.index(hex.len() + 1), character);

            prop_assert!(decode(&hex, usize::MAX).is_err());

            hex.push(character);

            prop_assert!(decode(&hex, usize::MAX).is_err());
        }

        #[test]
        fn oversized_input_never_yields_bytes(bytes in proptest::collection::vec(any::<u8>(), 65..256)) {
            prop_assert_eq!(
                decode(&hex::encode(&bytes), 64),
                Err(Error::TooLong { length: bytes.len(), max_length: 64 })
            );
        }
    }
}
