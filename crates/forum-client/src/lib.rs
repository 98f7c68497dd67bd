//! Client-side orchestration for an on-chain Q&A forum program.
//!
//! The program stores every forum entity (profiles, questions, answers,
//! comments, big notes, challenges, submissions and their escrows) in a
//! program-derived account. This crate owns the off-chain half of that
//! contract:
//!
//! - deriving entity addresses from their seed material ([`pda`], [`graph`]),
//! - resolving the accounts an instruction needs by walking parent
//!   references on fetched records ([`resolver`]),
//! - collecting exactly the required signers for each call ([`signer`]),
//! - assembling and submitting instructions through a pluggable ledger
//!   backend ([`ledger`], [`ops::ForumClient`]).
//!
//! Operations follow a fixed pipeline: resolve records, derive addresses,
//! assemble the instruction with explicit bumps in its args, then submit.
//! Nothing is signed or sent before every prerequisite check has passed.
//!
//! ```no_run
//! use forum_client::{Actor, ForumClient, RpcLedger};
//! use solana_sdk::signature::Keypair;
//!
//! let ledger = RpcLedger::new("https://api.devnet.solana.com".to_string());
//! let client = ForumClient::new(ledger);
//! let owner = Actor::from(Keypair::new());
//! let forum = solana_sdk::pubkey::Pubkey::new_unique();
//! let created = client.create_user_profile(&forum, &owner)?;
//! println!("profile at {}", created.user_profile);
//! # Ok::<(), forum_client::ClientError>(())
//! ```

use anchor_lang::declare_id;

// On-chain program this client targets.
declare_id!("ForfDtfQbd2E33qQXRFdE6X6aGrCBwPkDcKhAEYzQzsm");

pub mod constants;
pub mod error;
pub mod graph;
pub mod ledger;
pub mod ops;
pub mod pda;
pub mod resolver;
pub mod signer;
pub mod state;

pub use error::ClientError;
pub use ledger::{fetch_record, AccountData, Ledger, RecordFilter, RpcLedger};
pub use ops::ForumClient;
pub use signer::{Actor, SignerSet};
