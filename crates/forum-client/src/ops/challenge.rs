//! Challenge and submission lifecycle.
//!
//! Challenges are issued by moderators, so unlike the other content families
//! their seeds skip the authoring profile: the forum plus the seed key alone
//! pin the address. Submissions use the full content seed shape.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use anchor_lang::system_program;

use crate::error::ClientError;
use crate::ledger::Ledger;
use crate::pda;
use crate::signer::{Actor, SignerSet};
use crate::state::{Challenge, ContentRef, Submission};

use super::ForumClient;

/// Result of `create_challenge`. Persist `challenge_seed`.
#[derive(Debug, Clone)]
pub struct ChallengeCreated {
    pub challenge: Pubkey,
    pub challenge_bump: u8,
    pub challenge_seed: Pubkey,
    pub signature: Signature,
}

/// Result of `create_submission`. Persist `submission_seed`.
#[derive(Debug, Clone)]
pub struct SubmissionCreated {
    pub submission: Pubkey,
    pub submission_bump: u8,
    pub submission_seed: Pubkey,
    pub forum: Pubkey,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateChallengeArgs {
    pub challenge_seed: Pubkey,
    pub challenge_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
    pub reward: u64,
    pub challenge_expires_ts: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditChallengeArgs {
    pub challenge_seed: Pubkey,
    pub challenge_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
    pub challenge_expires_ts: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteChallengeArgs {
    pub challenge_seed: Pubkey,
    pub challenge_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateSubmissionArgs {
    pub submission_seed: Pubkey,
    pub submission_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditSubmissionArgs {
    pub submission_seed: Pubkey,
    pub submission_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteSubmissionArgs {
    pub submission_seed: Pubkey,
    pub submission_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Issue a challenge in a forum. Moderator operation; the program funds
    /// per-submission rewards from the challenge's own balance.
    pub fn create_challenge(
        &self,
        forum: &Pubkey,
        moderator: &Actor,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
        reward: u64,
        challenge_expires_ts: i64,
    ) -> Result<ChallengeCreated, ClientError> {
        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let challenge_seed = seed_keypair.pubkey();
        let (challenge, challenge_bump) =
            pda::find_challenge(forum, &challenge_seed, &self.program_id());

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(challenge, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateChallengeArgs {
            challenge_seed,
            challenge_bump,
            title,
            tags,
            content,
            reward,
            challenge_expires_ts,
        };
        let signature =
            self.submit_ix("create_challenge", accounts, &args, &moderator_key, &signers)?;

        Ok(ChallengeCreated {
            challenge,
            challenge_bump,
            challenge_seed,
            signature,
        })
    }

    /// Edit a challenge. Moderator operation; seed and forum come off the
    /// challenge's record.
    pub fn edit_challenge(
        &self,
        moderator: &Actor,
        challenge: &Pubkey,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
        challenge_expires_ts: i64,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Challenge = resolver.record(challenge)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(*challenge, false),
            AccountMeta::new(moderator_key, true),
        ];
        let args = EditChallengeArgs {
            challenge_seed: record.challenge_seed,
            challenge_bump: record.bump,
            title,
            tags,
            content,
            challenge_expires_ts,
        };
        self.submit_ix("edit_challenge", accounts, &args, &moderator_key, &signers)
    }

    /// Close a challenge, returning rent and any unspent reward balance to
    /// `receiver`. Moderator operation.
    pub fn delete_challenge(
        &self,
        moderator: &Actor,
        challenge: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Challenge = resolver.record(challenge)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(*challenge, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteChallengeArgs {
            challenge_seed: record.challenge_seed,
            challenge_bump: record.bump,
        };
        self.submit_ix("delete_challenge", accounts, &args, &moderator_key, &signers)
    }

    /// Respond to a challenge. The challenge's forum comes off its record;
    /// a fresh seed keypair is minted for the submission's address.
    pub fn create_submission(
        &self,
        challenge: &Pubkey,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<SubmissionCreated, ClientError> {
        let mut resolver = self.resolver();
        let record: Challenge = resolver.record(challenge)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let submission_seed = seed_keypair.pubkey();
        let (submission, submission_bump) = pda::find_submission(
            &record.forum,
            &user_profile,
            &submission_seed,
            &self.program_id(),
        );

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new(*challenge, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(submission, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateSubmissionArgs {
            submission_seed,
            submission_bump,
            content,
        };
        let signature =
            self.submit_ix("create_submission", accounts, &args, &owner_key, &signers)?;

        Ok(SubmissionCreated {
            submission,
            submission_bump,
            submission_seed,
            forum: record.forum,
            signature,
        })
    }

    /// Edit a submission. The owning profile is checked by re-derivation.
    pub fn edit_submission(
        &self,
        profile_owner: &Actor,
        submission: &Pubkey,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Submission = resolver.record(submission)?;
        let challenge: Challenge = resolver.record(&record.challenge)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new_readonly(challenge.forum, false),
            AccountMeta::new_readonly(record.challenge, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*submission, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditSubmissionArgs {
            submission_seed: record.submission_seed,
            submission_bump: record.bump,
            content,
        };
        self.submit_ix("edit_submission", accounts, &args, &owner_key, &signers)
    }

    /// Close a submission, returning rent to `receiver`.
    pub fn delete_submission(
        &self,
        profile_owner: &Actor,
        submission: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Submission = resolver.record(submission)?;
        let challenge: Challenge = resolver.record(&record.challenge)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new(challenge.forum, false),
            AccountMeta::new(record.challenge, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*submission, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteSubmissionArgs {
            submission_seed: record.submission_seed,
            submission_bump: record.bump,
        };
        self.submit_ix("delete_submission", accounts, &args, &owner_key, &signers)
    }
}
