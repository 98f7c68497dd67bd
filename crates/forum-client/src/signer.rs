//! Actor and signer-set resolution.
//!
//! An actor parameter is either a bare public key (an external wallet will
//! co-sign the transaction) or a full keypair we hold. Every operation runs
//! each of its actors through the same resolution: the address always lands
//! in the account list, the key material lands in the signer set only when
//! we hold it.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::error::ClientError;

/// An operation participant: a key we control, or an address someone else
/// signs for.
#[derive(Debug)]
pub enum Actor {
    /// Externally signed; contributes nothing to the local signer set.
    Known(Pubkey),
    /// Locally held key material; signs the transaction.
    Owned(Keypair),
}

impl Actor {
    pub fn address(&self) -> Pubkey {
        match self {
            Actor::Known(address) => *address,
            Actor::Owned(keypair) => keypair.pubkey(),
        }
    }

    pub fn keypair(&self) -> Option<&Keypair> {
        match self {
            Actor::Known(_) => None,
            Actor::Owned(keypair) => Some(keypair),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Actor::Owned(_))
    }
}

impl From<Pubkey> for Actor {
    fn from(address: Pubkey) -> Self {
        Actor::Known(address)
    }
}

impl From<Keypair> for Actor {
    fn from(keypair: Keypair) -> Self {
        Actor::Owned(keypair)
    }
}

/// Signers accumulated while assembling one transaction. Deduplicated by
/// address; order of first insertion is preserved.
#[derive(Debug, Default)]
pub struct SignerSet<'a> {
    keypairs: Vec<&'a Keypair>,
}

impl<'a> SignerSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an actor: returns its address, adding its keypair to the set
    /// when we hold one.
    pub fn add(&mut self, actor: &'a Actor) -> Pubkey {
        if let Actor::Owned(keypair) = actor {
            self.push(keypair);
        }
        actor.address()
    }

    /// Resolve a primary actor whose signature the operation cannot proceed
    /// without. Fails before any network call rather than submitting a
    /// transaction the program is guaranteed to reject.
    pub fn require(&mut self, actor: &'a Actor) -> Result<Pubkey, ClientError> {
        match actor {
            Actor::Owned(keypair) => {
                self.push(keypair);
                Ok(keypair.pubkey())
            }
            Actor::Known(address) => Err(ClientError::MissingRequiredSignature {
                actor: *address,
            }),
        }
    }

    /// Add a keypair that is not an actor parameter (e.g. the fresh account
    /// keypair when creating a forum).
    pub fn push(&mut self, keypair: &'a Keypair) {
        let address = keypair.pubkey();
        if !self.keypairs.iter().any(|k| k.pubkey() == address) {
            self.keypairs.push(keypair);
        }
    }

    pub fn as_slice(&self) -> &[&'a Keypair] {
        &self.keypairs
    }

    pub fn addresses(&self) -> Vec<Pubkey> {
        self.keypairs.iter().map(|k| k.pubkey()).collect()
    }

    pub fn len(&self) -> usize {
        self.keypairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypairs.is_empty()
    }
}
