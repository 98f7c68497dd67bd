//! Instruction orchestration.
//!
//! Every operation follows the same four-phase shape: resolve ancestor
//! records, derive every address in the account list, assemble the ordered
//! account metas plus instruction arguments, and submit with the resolved
//! signer set. Account ordering and writable/signer flags are part of the
//! program's wire contract; bumps ride in the arguments because the program
//! does not re-derive them.
//!
//! All local failures (resolution, signer requirements, consistency checks)
//! abort before any network-mutating call; only the final submit can fail
//! remotely, surfaced verbatim as `RemoteRejection`.

pub mod answer;
pub mod big_note;
pub mod challenge;
pub mod comment;
pub mod forum;
pub mod profile;
pub mod question;

pub use answer::*;
pub use big_note::*;
pub use challenge::*;
pub use comment::*;
pub use forum::*;
pub use profile::*;
pub use question::*;

use anchor_lang::{AccountDeserialize, AnchorSerialize, Discriminator};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tracing::debug;

use crate::error::ClientError;
use crate::ledger::{decode_record, fetch_record, Ledger, RecordFilter};
use crate::pda;
use crate::resolver::Resolver;
use crate::signer::SignerSet;
use crate::state::{
    AboutMe, Answer, BigNote, BigNoteBountyPda, BountyPda, Challenge, Comment, Forum,
    ProposedContribution, Question, Submission, UserProfile, VerificationApplication,
    VerificationFeePda, PARENT_REF_OFFSET,
};

/// Anchor-style instruction discriminator: `sha256("<namespace>:<name>")[..8]`.
pub fn anchor_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash.to_bytes()[..8]);
    disc
}

/// Discriminator of a global program instruction.
pub fn ix_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("global", name)
}

fn ix_data<T: AnchorSerialize>(name: &str, args: &T) -> Result<Vec<u8>, ClientError> {
    let mut data = ix_discriminator(name).to_vec();
    args.serialize(&mut data)
        .map_err(|err| ClientError::Encode {
            reason: err.to_string(),
        })?;
    Ok(data)
}

/// Client for the forum program. Holds the program id and the ledger
/// capability; shared freely across concurrent operations since nothing here
/// is mutated.
pub struct ForumClient<L: Ledger> {
    program_id: Pubkey,
    ledger: L,
}

impl<L: Ledger> ForumClient<L> {
    /// Client against the canonical program id.
    pub fn new(ledger: L) -> Self {
        Self::with_program_id(crate::ID, ledger)
    }

    /// Client against a custom deployment of the program.
    pub fn with_program_id(program_id: Pubkey, ledger: L) -> Self {
        ForumClient { program_id, ledger }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub(crate) fn resolver(&self) -> Resolver<'_, L> {
        Resolver::new(&self.ledger)
    }

    /// Phase 4 of every operation: encode, sign and send.
    pub(crate) fn submit_ix<T: AnchorSerialize>(
        &self,
        name: &str,
        accounts: Vec<AccountMeta>,
        args: &T,
        payer: &Pubkey,
        signers: &SignerSet<'_>,
    ) -> Result<Signature, ClientError> {
        let data = ix_data(name, args)?;
        let instruction = Instruction {
            program_id: self.program_id,
            accounts,
            data,
        };
        debug!(
            op = name,
            accounts = instruction.accounts.len(),
            signers = signers.len(),
            "submitting instruction"
        );
        self.ledger.submit(instruction, payer, signers.as_slice())
    }

    /// Derive the profile PDA for `owner` and confirm it matches the profile
    /// address a fetched record points at. A mismatch means the caller's
    /// actor is not the owner the record was created under; this fails closed
    /// rather than submitting a transaction addressed to the wrong profile.
    pub(crate) fn checked_profile(
        &self,
        owner: &Pubkey,
        recorded_profile: &Pubkey,
    ) -> Result<(Pubkey, u8), ClientError> {
        let (derived, bump) = pda::find_user_profile(owner, &self.program_id);
        if derived != *recorded_profile {
            return Err(ClientError::AddressMismatch {
                expected: *recorded_profile,
                derived,
            });
        }
        Ok((derived, bump))
    }

    fn list_records<T>(
        &self,
        extra: Vec<RecordFilter>,
    ) -> Result<Vec<(Pubkey, T)>, ClientError>
    where
        T: AccountDeserialize + Discriminator,
    {
        let mut filters = vec![RecordFilter::discriminator::<T>()];
        filters.extend(extra);
        let accounts = self
            .ledger
            .fetch_program_accounts(&self.program_id, &filters)?;
        accounts
            .into_iter()
            .map(|(address, account)| {
                decode_record(&address, &account.data).map(|record| (address, record))
            })
            .collect()
    }
}

/// Typed single fetches and filtered listings (the `fetchAll` surface).
impl<L: Ledger> ForumClient<L> {
    pub fn fetch_forum(&self, address: &Pubkey) -> Result<Forum, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_user_profile(&self, address: &Pubkey) -> Result<UserProfile, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_about_me(&self, address: &Pubkey) -> Result<AboutMe, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_question(&self, address: &Pubkey) -> Result<Question, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_answer(&self, address: &Pubkey) -> Result<Answer, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_comment(&self, address: &Pubkey) -> Result<Comment, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_big_note(&self, address: &Pubkey) -> Result<BigNote, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_proposed_contribution(
        &self,
        address: &Pubkey,
    ) -> Result<ProposedContribution, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_challenge(&self, address: &Pubkey) -> Result<Challenge, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_submission(&self, address: &Pubkey) -> Result<Submission, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_bounty_pda(&self, address: &Pubkey) -> Result<BountyPda, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_big_note_bounty_pda(
        &self,
        address: &Pubkey,
    ) -> Result<BigNoteBountyPda, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_verification_application(
        &self,
        address: &Pubkey,
    ) -> Result<VerificationApplication, ClientError> {
        fetch_record(&self.ledger, address)
    }

    pub fn fetch_verification_fee_pda(
        &self,
        address: &Pubkey,
    ) -> Result<VerificationFeePda, ClientError> {
        fetch_record(&self.ledger, address)
    }

    /// All profiles created under a forum.
    pub fn list_user_profiles(&self, forum: &Pubkey) -> Result<Vec<(Pubkey, UserProfile)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, forum)])
    }

    /// All questions in a forum.
    pub fn list_questions(&self, forum: &Pubkey) -> Result<Vec<(Pubkey, Question)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, forum)])
    }

    /// All answers to a question.
    pub fn list_answers(&self, question: &Pubkey) -> Result<Vec<(Pubkey, Answer)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, question)])
    }

    /// All comments on a piece of content, of whatever kind.
    pub fn list_comments(&self, commented_on: &Pubkey) -> Result<Vec<(Pubkey, Comment)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, commented_on)])
    }

    /// All big notes in a forum.
    pub fn list_big_notes(&self, forum: &Pubkey) -> Result<Vec<(Pubkey, BigNote)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, forum)])
    }

    /// All contributions proposed against a big note.
    pub fn list_proposed_contributions(
        &self,
        big_note: &Pubkey,
    ) -> Result<Vec<(Pubkey, ProposedContribution)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, big_note)])
    }

    /// All challenges issued in a forum.
    pub fn list_challenges(&self, forum: &Pubkey) -> Result<Vec<(Pubkey, Challenge)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, forum)])
    }

    /// All submissions against a challenge.
    pub fn list_submissions(
        &self,
        challenge: &Pubkey,
    ) -> Result<Vec<(Pubkey, Submission)>, ClientError> {
        self.list_records(vec![RecordFilter::pubkey_at(PARENT_REF_OFFSET, challenge)])
    }
}
