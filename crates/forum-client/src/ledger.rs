//! Ledger access boundary.
//!
//! The orchestrator takes its read/submit capability as an explicit
//! dependency rather than reaching for a global client, so tests can run
//! every operation against an in-process fake. `RpcLedger` is the production
//! implementation over a blocking RPC connection.

use anchor_lang::{AccountDeserialize, Discriminator};
use solana_account_decoder::UiAccountEncoding;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::Transaction;

use crate::error::ClientError;

/// Raw account contents as read from the ledger.
#[derive(Debug, Clone)]
pub struct AccountData {
    pub lamports: u64,
    pub data: Vec<u8>,
    pub owner: Pubkey,
}

/// A memcmp filter over the forum program's accounts. Offsets index into the
/// wire-compatible record layout; an off-by-one silently matches nothing, so
/// offsets live next to the record structs they describe (see `state`).
#[derive(Debug, Clone)]
pub struct RecordFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl RecordFilter {
    /// Filter on a record type's 8-byte discriminator.
    pub fn discriminator<T: Discriminator>() -> Self {
        RecordFilter {
            offset: 0,
            bytes: T::DISCRIMINATOR.to_vec(),
        }
    }

    /// Filter on a pubkey field at a fixed byte offset.
    pub fn pubkey_at(offset: usize, key: &Pubkey) -> Self {
        RecordFilter {
            offset,
            bytes: key.to_bytes().to_vec(),
        }
    }
}

/// Read and submit capability against the remote ledger.
///
/// Implementations must tolerate concurrent in-flight requests; the client
/// never mutates local state between calls.
pub trait Ledger {
    /// Read one account. `Ok(None)` means the account does not exist, which
    /// callers translate to `AccountNotFound` when the account was required.
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError>;

    /// Read all forum-program accounts matching every filter.
    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[RecordFilter],
    ) -> Result<Vec<(Pubkey, AccountData)>, ClientError>;

    /// Sign and send one instruction as a transaction. The only step of an
    /// operation that may fail remotely; program refusals surface as
    /// `RemoteRejection` carrying the program's error verbatim.
    fn submit(
        &self,
        instruction: Instruction,
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, ClientError>;
}

/// Fetch and decode one typed record, enforcing the discriminator.
pub fn fetch_record<L, T>(ledger: &L, address: &Pubkey) -> Result<T, ClientError>
where
    L: Ledger + ?Sized,
    T: AccountDeserialize + Discriminator,
{
    let account = ledger
        .fetch_raw(address)?
        .ok_or(ClientError::AccountNotFound { address: *address })?;
    decode_record(address, &account.data)
}

/// Decode a typed record from raw account data, enforcing the discriminator.
pub fn decode_record<T>(address: &Pubkey, data: &[u8]) -> Result<T, ClientError>
where
    T: AccountDeserialize + Discriminator,
{
    if data.len() < 8 || data[..8] != T::DISCRIMINATOR[..8] {
        return Err(ClientError::UnexpectedRecordKind {
            address: *address,
            expected: std::any::type_name::<T>().rsplit("::").next().unwrap_or("record"),
        });
    }
    T::try_deserialize(&mut &data[..]).map_err(|err| ClientError::RecordDecode {
        address: *address,
        reason: err.to_string(),
    })
}

/// Production ledger over a blocking RPC connection.
pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn new(url: impl ToString) -> Self {
        RpcLedger {
            rpc: RpcClient::new_with_commitment(url.to_string(), CommitmentConfig::confirmed()),
        }
    }

    pub fn from_rpc_client(rpc: RpcClient) -> Self {
        RpcLedger { rpc }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

impl Ledger for RpcLedger {
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())?;
        Ok(response.value.map(|account| AccountData {
            lamports: account.lamports,
            data: account.data,
            owner: account.owner,
        }))
    }

    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[RecordFilter],
    ) -> Result<Vec<(Pubkey, AccountData)>, ClientError> {
        let rpc_filters = filters
            .iter()
            .map(|f| RpcFilterType::Memcmp(Memcmp::new_raw_bytes(f.offset, f.bytes.clone())))
            .collect();
        let config = RpcProgramAccountsConfig {
            filters: Some(rpc_filters),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.rpc.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        let accounts = self
            .rpc
            .get_program_accounts_with_config(program_id, config)?;
        Ok(accounts
            .into_iter()
            .map(|(address, account)| {
                (
                    address,
                    AccountData {
                        lamports: account.lamports,
                        data: account.data,
                        owner: account.owner,
                    },
                )
            })
            .collect())
    }

    fn submit(
        &self,
        instruction: Instruction,
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, ClientError> {
        let blockhash = self.rpc.get_latest_blockhash()?;
        let transaction =
            Transaction::new_signed_with_payer(&[instruction], Some(payer), signers, blockhash);
        self.rpc
            .send_and_confirm_transaction(&transaction)
            .map_err(submit_error)
    }
}

/// A failed send is the program's refusal only when the error carries a
/// transaction error; everything else is transport trouble and keeps its
/// RPC shape so callers can tell the two apart.
fn submit_error(err: solana_client::client_error::ClientError) -> ClientError {
    match err.get_transaction_error() {
        Some(tx_err) => ClientError::RemoteRejection {
            reason: tx_err.to_string(),
        },
        None => ClientError::Rpc(Box::new(err)),
    }
}
