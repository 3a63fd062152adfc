// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::{RequestError, SecurityModule};
use crate::document::AttestationDocument;
use crate::request::AttestationRequest;
use aws_nitro_enclaves_nsm_api::{api as nsm_api, driver};

/// The Nitro Secure Module of the enclave, accessed through its device driver
#[derive(Clone, Copy, Debug, Default)]
pub struct Nsm;

/// Open descriptor of the NSM device
#[derive(Debug)]
pub struct NsmHandle {
    fd: i32,
}

impl Drop for NsmHandle {
    fn drop(&mut self) {
        driver::nsm_exit(self.fd);
    }
}

impl SecurityModule for Nsm {
    type Handle = NsmHandle;

    fn init(&self) -> Result<Self::Handle, crate::Error> {
        let fd = driver::nsm_init();

        if fd < 0 {
            return Err(crate::Error::ModuleUnavailable);
        }

        log::debug!("NSM device opened");

        Ok(NsmHandle { fd })
    }

    fn attestation_document(
        &self,
        handle: &Self::Handle,
        request: AttestationRequest<'_>,
    ) -> Result<AttestationDocument, crate::Error> {
        let response = driver::nsm_process_request(handle.fd, request.into());

        attestation_document_from_response(response)
            .map_err(crate::Error::AttestationRequestFailed)
    }
}

fn attestation_document_from_response(
    response: nsm_api::Response,
) -> Result<AttestationDocument, RequestError> {
    match response {
        nsm_api::Response::Attestation { document } => AttestationDocument::new(document)
            .map_err(|document| RequestError::DocumentTooLarge {
                size: document.len(),
            }),
        nsm_api::Response::Error(error_code) => Err(RequestError::ErrorResponse(error_code)),
        _ => Err(RequestError::UnexpectedResponse),
    }
}
