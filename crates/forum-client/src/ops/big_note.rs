//! Big note lifecycle: CRUD, bounty, proposed contributions, verification.
//!
//! Each big note owns up to three derived sub-accounts: a bounty escrow, a
//! verification application record and a verification fee escrow, all
//! derived from the note's address alone.

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
use crate::state::{BigNote, ContentRef, ProposedContribution};

use super::ForumClient;

/// Result of `create_big_note`. Persist `big_note_seed`: without it the
/// note's address cannot be re-derived.
#[derive(Debug, Clone)]
pub struct BigNoteCreated {
    pub big_note: Pubkey,
    pub big_note_bump: u8,
    pub big_note_seed: Pubkey,
    pub bounty_pda: Pubkey,
    pub bounty_pda_bump: u8,
    pub forum_treasury: Pubkey,
    pub signature: Signature,
}

/// Result of `propose_contribution`. Persist `contribution_seed`.
#[derive(Debug, Clone)]
pub struct ContributionProposed {
    pub proposed_contribution: Pubkey,
    pub contribution_bump: u8,
    pub contribution_seed: Pubkey,
    pub signature: Signature,
}

/// Result of `apply_for_verification`: the application record and its fee
/// escrow, both derived from the note's address.
#[derive(Debug, Clone)]
pub struct VerificationApplied {
    pub verification_application: Pubkey,
    pub verification_application_bump: u8,
    pub verification_fee_pda: Pubkey,
    pub verification_fee_pda_bump: u8,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateBigNoteArgs {
    pub big_note_seed: Pubkey,
    pub big_note_bump: u8,
    pub bounty_pda_bump: u8,
    pub forum_treasury_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
    pub bounty_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditBigNoteArgs {
    pub big_note_seed: Pubkey,
    pub big_note_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteBigNoteArgs {
    pub big_note_seed: Pubkey,
    pub big_note_bump: u8,
    pub bounty_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct SupplementBigNoteBountyArgs {
    pub bounty_pda_bump: u8,
    pub supplement_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct RefundBigNoteBountyArgs {
    pub bounty_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct ProposeContributionArgs {
    pub contribution_seed: Pubkey,
    pub contribution_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct SettleContributionArgs {
    pub contribution_seed: Pubkey,
    pub contribution_bump: u8,
    pub bounty_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct ApplyForVerificationArgs {
    pub verification_application_bump: u8,
    pub verification_fee_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct SettleVerificationArgs {
    pub verification_application_bump: u8,
    pub verification_fee_pda_bump: u8,
    pub forum_treasury_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Post a big note with a bounty. Mints the note's seed keypair and
    /// derives its bounty escrow.
    pub fn create_big_note(
        &self,
        forum: &Pubkey,
        profile_owner: &Actor,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
        bounty_amount: u64,
    ) -> Result<BigNoteCreated, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let big_note_seed = seed_keypair.pubkey();
        let (big_note, big_note_bump) =
            pda::find_big_note(forum, &user_profile, &big_note_seed, &self.program_id());
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(&big_note, &self.program_id());
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(forum, &self.program_id());

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(big_note, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateBigNoteArgs {
            big_note_seed,
            big_note_bump,
            bounty_pda_bump,
            forum_treasury_bump,
            title,
            tags,
            content,
            bounty_amount,
        };
        let signature =
            self.submit_ix("create_big_note", accounts, &args, &owner_key, &signers)?;

        Ok(BigNoteCreated {
            big_note,
            big_note_bump,
            big_note_seed,
            bounty_pda,
            bounty_pda_bump,
            forum_treasury,
            signature,
        })
    }

    /// Edit a big note. Seed recovered from the record, owner checked by
    /// re-derivation.
    pub fn edit_big_note(
        &self,
        profile_owner: &Actor,
        big_note: &Pubkey,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditBigNoteArgs {
            big_note_seed: record.big_note_seed,
            big_note_bump: record.bump,
            title,
            tags,
            content,
        };
        self.submit_ix("edit_big_note", accounts, &args, &owner_key, &signers)
    }

    /// Moderator edit of someone else's big note.
    pub fn edit_big_note_moderator(
        &self,
        moderator: &Actor,
        big_note: &Pubkey,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(moderator_key, true),
        ];
        let args = EditBigNoteArgs {
            big_note_seed: record.big_note_seed,
            big_note_bump: record.bump,
            title,
            tags,
            content,
        };
        self.submit_ix(
            "edit_big_note_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Close a big note, refunding any live bounty and returning rent.
    pub fn delete_big_note(
        &self,
        profile_owner: &Actor,
        big_note: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteBigNoteArgs {
            big_note_seed: record.big_note_seed,
            big_note_bump: record.bump,
            bounty_pda_bump,
        };
        self.submit_ix("delete_big_note", accounts, &args, &owner_key, &signers)
    }

    /// Moderator close of someone else's big note.
    pub fn delete_big_note_moderator(
        &self,
        moderator: &Actor,
        big_note: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteBigNoteArgs {
            big_note_seed: record.big_note_seed,
            big_note_bump: record.bump,
            bounty_pda_bump,
        };
        self.submit_ix(
            "delete_big_note_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Add lamports to a big note's bounty escrow.
    pub fn supplement_big_note_bounty(
        &self,
        supplementor: &Actor,
        big_note: &Pubkey,
        supplement_amount: u64,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let supplementor_key = signers.require(supplementor)?;
        let (supplementor_profile, _) =
            pda::find_user_profile(&supplementor_key, &self.program_id());
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(supplementor_profile, false),
            AccountMeta::new(supplementor_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = SupplementBigNoteBountyArgs {
            bounty_pda_bump,
            supplement_amount,
        };
        self.submit_ix(
            "supplement_big_note_bounty",
            accounts,
            &args,
            &supplementor_key,
            &signers,
        )
    }

    /// Refund a big note's bounty to a supplementor. Moderator operation.
    pub fn refund_big_note_bounty(
        &self,
        moderator: &Actor,
        big_note: &Pubkey,
        supplementor: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());
        let (supplementor_profile, _) =
            pda::find_user_profile(supplementor, &self.program_id());
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new_readonly(supplementor_profile, false),
            AccountMeta::new(*supplementor, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = RefundBigNoteBountyArgs { bounty_pda_bump };
        self.submit_ix(
            "refund_big_note_bounty",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Offer a contribution against a big note. Mints the contribution's
    /// seed keypair; the note's forum is resolved off its record.
    pub fn propose_contribution(
        &self,
        big_note: &Pubkey,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<ContributionProposed, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let contribution_seed = seed_keypair.pubkey();
        let (proposed_contribution, contribution_bump) = pda::find_proposed_contribution(
            &record.forum,
            &user_profile,
            &contribution_seed,
            &self.program_id(),
        );

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(proposed_contribution, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = ProposeContributionArgs {
            contribution_seed,
            contribution_bump,
            content,
        };
        let signature =
            self.submit_ix("propose_contribution", accounts, &args, &owner_key, &signers)?;

        Ok(ContributionProposed {
            proposed_contribution,
            contribution_bump,
            contribution_seed,
            signature,
        })
    }

    /// Accept a pending contribution. Only the note's owner; awards the
    /// note's bounty escrow to the contributor.
    pub fn accept_proposed_contribution(
        &self,
        profile_owner: &Actor,
        proposed_contribution: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.settle_contribution("accept_proposed_contribution", profile_owner, proposed_contribution)
    }

    /// Reject a pending contribution. Only the note's owner.
    pub fn reject_proposed_contribution(
        &self,
        profile_owner: &Actor,
        proposed_contribution: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.settle_contribution("reject_proposed_contribution", profile_owner, proposed_contribution)
    }

    fn settle_contribution(
        &self,
        name: &str,
        profile_owner: &Actor,
        proposed_contribution: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let contribution: ProposedContribution = resolver.record(proposed_contribution)?;
        let note: BigNote = resolver.record(&contribution.big_note)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (owner_profile, _) = self.checked_profile(&owner_key, &note.user_profile)?;
        let (bounty_pda, bounty_pda_bump) =
            pda::find_big_note_bounty_pda(&contribution.big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(note.forum, false),
            AccountMeta::new(contribution.big_note, false),
            AccountMeta::new(*proposed_contribution, false),
            AccountMeta::new(owner_profile, false),
            AccountMeta::new(contribution.user_profile, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = SettleContributionArgs {
            contribution_seed: contribution.contribution_seed,
            contribution_bump: contribution.bump,
            bounty_pda_bump,
        };
        self.submit_ix(name, accounts, &args, &owner_key, &signers)
    }

    /// Apply for verification of a big note. Derives the application record
    /// and its fee escrow from the note's address; the fee is escrowed until
    /// a moderator settles the application.
    pub fn apply_for_verification(
        &self,
        profile_owner: &Actor,
        big_note: &Pubkey,
    ) -> Result<VerificationApplied, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let (verification_application, verification_application_bump) =
            pda::find_verification_application(big_note, &self.program_id());
        let (verification_fee_pda, verification_fee_pda_bump) =
            pda::find_verification_fee_pda(big_note, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(verification_application, false),
            AccountMeta::new(verification_fee_pda, false),
            AccountMeta::new_readonly(user_profile, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = ApplyForVerificationArgs {
            verification_application_bump,
            verification_fee_pda_bump,
        };
        let signature = self.submit_ix(
            "apply_for_big_note_verification",
            accounts,
            &args,
            &owner_key,
            &signers,
        )?;

        Ok(VerificationApplied {
            verification_application,
            verification_application_bump,
            verification_fee_pda,
            verification_fee_pda_bump,
            signature,
        })
    }

    /// Accept a verification application: the note becomes Verified and the
    /// escrowed fee is swept to the forum treasury. Moderator operation.
    pub fn accept_verification(
        &self,
        moderator: &Actor,
        big_note: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.settle_verification("accept_big_note_verification", moderator, big_note)
    }

    /// Reject a verification application: the note falls back to Unverified
    /// and the escrowed fee returns to the applicant. Moderator operation.
    pub fn reject_verification(
        &self,
        moderator: &Actor,
        big_note: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.settle_verification("reject_big_note_verification", moderator, big_note)
    }

    fn settle_verification(
        &self,
        name: &str,
        moderator: &Actor,
        big_note: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: BigNote = resolver.record(big_note)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());
        let (verification_application, verification_application_bump) =
            pda::find_verification_application(big_note, &self.program_id());
        let (verification_fee_pda, verification_fee_pda_bump) =
            pda::find_verification_fee_pda(big_note, &self.program_id());
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(&record.forum, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*big_note, false),
            AccountMeta::new(verification_application, false),
            AccountMeta::new(verification_fee_pda, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = SettleVerificationArgs {
            verification_application_bump,
            verification_fee_pda_bump,
            forum_treasury_bump,
        };
        self.submit_ix(name, accounts, &args, &moderator_key, &signers)
    }
}
