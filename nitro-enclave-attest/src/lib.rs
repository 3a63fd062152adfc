// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Request an attestation document from the Nitro Secure Module (NSM)
//!
//! Validates the optional hex-encoded nonce and user data, binds them into an NSM attestation
//! request and returns the document untouched, ready to be passed on to a relying party.

pub mod document;
pub mod hex_codec;
pub mod input;
pub mod request;
pub mod security_module;

pub use aws_nitro_enclaves_nsm_api::api as nsm_api;
pub use document::AttestationDocument;
pub use input::{Field, Nonce, UserData};
pub use security_module::{Nsm, RequestError, SecurityModule};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "invalid {field} hex string, must be of even length and at most {} hex characters",
        .field.max_len() * 2
    )]
    InvalidHexInput {
        field: Field,
        #[source]
        source: hex_codec::Error,
    },
    #[error("failed to initialize the Nitro Secure Module")]
    ModuleUnavailable,
    #[error("failed to get attestation document")]
    AttestationRequestFailed(#[from] RequestError),
}

/// Request an attestation document binding the given hex-encoded nonce and user data
///
/// Missing and empty inputs are not bound. Both inputs are validated before the security module
/// is touched.
pub fn attestation_document<Module: SecurityModule>(
    module: &Module,
    nonce_hex: Option<&str>,
    user_data_hex: Option<&str>,
) -> Result<AttestationDocument, Error> {
    let nonce = decode::<{ input::NONCE_MAX_LEN }>(Field::Nonce, nonce_hex)?;
    let user_data = decode::<{ input::USER_DATA_MAX_LEN }>(Field::UserData, user_data_hex)?;

    let request = request::assemble(Some(&nonce), Some(&user_data));

    log::debug!(
        "Requesting attestation document (nonce: {} bytes, user data: {} bytes, PCRs: {:?})",
        nonce.len(),
        user_data.len(),
        request.pcr_selection(),
    );

    let handle = module.init()?;
    let document = module.attestation_document(&handle, request)?;

    log::debug!("Received attestation document of {} bytes", document.len());

    Ok(document)
}

fn decode<const N: usize>(
    field: Field,
    hex: Option<&str>,
) -> Result<input::BoundedBytes<N>, Error> {
    hex.map(input::BoundedBytes::from_hex)
        .transpose()
        .map(|bytes| bytes.unwrap_or_else(input::BoundedBytes::absent))
        .map_err(|source| Error::InvalidHexInput { field, source })
}
