// Copyright 2025 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

/// Request an attestation document from the Nitro Secure Module and write it to stdout
#[derive(clap::Parser)]
#[command(version)]
struct Arguments {
    /// Hex-encoded nonce to optionally include (up to 64 bytes)
    nonce: Option<String>,
    /// Hex-encoded user data to optionally include (up to 512 bytes)
    user_data: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let arguments: Arguments = clap::Parser::parse();

    let attestation_document = nitro_enclave_attest::attestation_document(
        &nitro_enclave_attest::Nsm,
        arguments.nonce.as_deref(),
        arguments.user_data.as_deref(),
    )?;

    attestation_document.emit(std::io::stdout().lock())?;

    Ok(())
}
