// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Size bounded caller inputs that are bound into the attestation document

use crate::hex_codec;

pub const NONCE_MAX_LEN: usize = 64;
pub const USER_DATA_MAX_LEN: usize = 512;

/// Caller supplied nonce, bound into the document to prevent replay
pub type Nonce = BoundedBytes<NONCE_MAX_LEN>;
/// Caller supplied application context
pub type UserData = BoundedBytes<USER_DATA_MAX_LEN>;

/// An owned byte buffer of at most `N` bytes
///
/// Only constructed from a fully decoded hex string, so a truncated buffer cannot exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedBytes<const N: usize> {
    bytes: Vec<u8>,
}

impl<const N: usize> BoundedBytes<N> {
    pub const MAX_LEN: usize = N;

    pub fn from_hex(hex: &str) -> Result<Self, hex_codec::Error> {
        let bytes = hex_codec::decode(hex, N)?;

        assert!(bytes.len() <= N);

        Ok(Self { bytes })
    }

    /// The field was not supplied
    pub fn absent() -> Self {
        Self { bytes: Vec::new() }
    }

    /// The bytes to send, or `None` if nothing should be bound
    pub fn present(&self) -> Option<&[u8]> {
        (!self.is_empty()).then_some(self.as_slice())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Names an input in diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Nonce,
    UserData,
}

impl Field {
    pub fn max_len(self) -> usize {
        match self {
            Field::Nonce => Nonce::MAX_LEN,
            Field::UserData => UserData::MAX_LEN,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Nonce => write!(formatter, "nonce"),
            Field::UserData => write!(formatter, "user data"),
        }
    }
}
