// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Interface to the security module that issues attestation documents
//!
//! The production implementation is [`Nsm`]. Anything else implementing [`SecurityModule`] can
//! stand in for it, e.g. in tests without Nitro hardware.

mod nsm;

pub use nsm::{Nsm, NsmHandle};

use crate::document::AttestationDocument;
use crate::request::AttestationRequest;
use aws_nitro_enclaves_nsm_api::api as nsm_api;

/// Why the security module did not return a document
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("NSM error response: {0:?}")]
    ErrorResponse(nsm_api::ErrorCode),
    #[error("unexpected NSM response")]
    UnexpectedResponse,
    #[error("attestation document of {size} bytes exceeds the maximum size")]
    DocumentTooLarge { size: usize },
    #[error("{0}")]
    Rejected(String),
}

pub trait SecurityModule {
    /// Session with the module, released when dropped
    type Handle;

    /// Open a session with the module
    ///
    /// Fails with [`crate::Error::ModuleUnavailable`].
    fn init(&self) -> Result<Self::Handle, crate::Error>;

    /// Request an attestation document, blocking until the module answers
    ///
    /// Fails with [`crate::Error::AttestationRequestFailed`].
    fn attestation_document(
        &self,
        handle: &Self::Handle,
        request: AttestationRequest<'_>,
    ) -> Result<AttestationDocument, crate::Error>;
}
