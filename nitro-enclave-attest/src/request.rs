// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Shapes the decoded inputs into an NSM attestation request

use crate::input::{Nonce, UserData};
use aws_nitro_enclaves_nsm_api::api as nsm_api;

/// The fields to bind into the attestation document
///
/// A field is either present with at least one byte or omitted. The NSM does not bind omitted
/// fields, so an empty field is never sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttestationRequest<'a> {
    nonce: Option<&'a [u8]>,
    user_data: Option<&'a [u8]>,
}

/// Combine the optional inputs into a request, treating empty inputs as absent
pub fn assemble<'a>(
    nonce: Option<&'a Nonce>,
    user_data: Option<&'a UserData>,
) -> AttestationRequest<'a> {
    let nonce = nonce.and_then(Nonce::present);
    let user_data = user_data.and_then(UserData::present);

    debug_assert!(nonce.is_none_or(|nonce| nonce.len() <= Nonce::MAX_LEN));
    debug_assert!(user_data.is_none_or(|user_data| user_data.len() <= UserData::MAX_LEN));

    AttestationRequest { nonce, user_data }
}

impl<'a> AttestationRequest<'a> {
    pub fn nonce(&self) -> Option<&'a [u8]> {
        self.nonce
    }

    pub fn user_data(&self) -> Option<&'a [u8]> {
        self.user_data
    }

    /// PCRs are never selected; the NSM attestation request has no field for them
    pub fn pcr_selection(&self) -> &'static [u16] {
        &[]
    }
}

impl From<AttestationRequest<'_>> for nsm_api::Request {
    fn from(request: AttestationRequest<'_>) -> Self {
        nsm_api::Request::Attestation {
            user_data: request.user_data.map(|user_data| user_data.to_vec().into()),
            nonce: request.nonce.map(|nonce| nonce.to_vec().into()),
            public_key: None,
        }
    }
}
