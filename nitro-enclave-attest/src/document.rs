// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

/// Largest attestation document the NSM hands out
pub const MAX_DOCUMENT_SIZE: usize = 16 * 1024;

/// An opaque, COSE signed attestation document as returned by the NSM
///
/// The bytes are never parsed or modified, only passed on to the relying party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttestationDocument {
    bytes: Vec<u8>,
}

impl AttestationDocument {
    /// Returns the bytes back if they exceed [`MAX_DOCUMENT_SIZE`]
    pub fn new(bytes: Vec<u8>) -> Result<Self, Vec<u8>> {
        if bytes.len() > MAX_DOCUMENT_SIZE {
            return Err(bytes);
        }

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the raw document without any framing
    pub fn emit(&self, mut writer: impl std::io::Write) -> std::io::Result<()> {
        writer.write_all(self.as_ref())?;
        writer.flush()
    }
}

impl AsRef<[u8]> for AttestationDocument {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
