use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Failure surface shared by every client operation.
///
/// Nothing here is retried internally: each variant reflects either a caller
/// error, a stale local address, or a remote business-rule rejection that
/// retrying unchanged would reproduce.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A seed exceeded the runtime's derivation limits. Always a local
    /// construction bug; seeds are never truncated to fit.
    #[error("seed of {seed_len} bytes exceeds the {limit}-byte derivation limit")]
    SeedTooLong { seed_len: usize, limit: usize },

    /// The seed material supplied does not match the entity kind's template.
    #[error("seed template for {kind} expects {expected} address inputs, got {got}")]
    SeedMaterialMismatch {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// No off-curve bump exists for the seed set. Practically unreachable for
    /// well-formed seeds but surfaced rather than panicking.
    #[error("no valid bump found for seed set of {kind}")]
    BumpNotFound { kind: &'static str },

    /// A remote read during dependency resolution came back empty. Fatal to
    /// the whole operation; usually a stale or wrong caller-supplied address,
    /// or a deleted ancestor.
    #[error("account {address} not found on the ledger")]
    AccountNotFound { address: Pubkey },

    /// An account exists but its discriminator names a different record type
    /// than the resolution step expected.
    #[error("account {address} is not a {expected} record")]
    UnexpectedRecordKind {
        address: Pubkey,
        expected: &'static str,
    },

    /// An account's data could not be decoded as the expected record.
    #[error("failed to decode record at {address}: {reason}")]
    RecordDecode { address: Pubkey, reason: String },

    /// The primary actor of an operation was supplied as a bare address, but
    /// the operation cannot be submitted without their signature. Checked
    /// locally before any network mutation.
    #[error("actor {actor} must sign this operation but no key material was supplied")]
    MissingRequiredSignature { actor: Pubkey },

    /// A consistency double-check failed: an address re-derived from fetched
    /// record data disagrees with the address the caller supplied. Never
    /// silently corrected.
    #[error("derived address {derived} does not match expected address {expected}")]
    AddressMismatch { expected: Pubkey, derived: Pubkey },

    /// Instruction argument encoding failed before submission.
    #[error("failed to encode instruction arguments: {reason}")]
    Encode { reason: String },

    /// The forum program refused the transaction. Carried verbatim; this
    /// client does not reinterpret the program's business rules.
    #[error("program rejected the transaction: {reason}")]
    RemoteRejection { reason: String },

    /// Transport-level RPC failure outside the protocol's error taxonomy.
    #[error("rpc transport failure: {0}")]
    Rpc(#[source] Box<solana_client::client_error::ClientError>),
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        ClientError::Rpc(Box::new(err))
    }
}
