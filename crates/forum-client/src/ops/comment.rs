//! Comment lifecycle.
//!
//! A comment's parent is a generic address: question, answer, big note or
//! proposed contribution. Resolution always starts by fetching the parent to
//! learn its kind, then walks upward to the forum.

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
use crate::state::{Comment, ContentRef};

use super::ForumClient;

/// Result of `leave_comment`. Persist `comment_seed`.
#[derive(Debug, Clone)]
pub struct CommentCreated {
    pub comment: Pubkey,
    pub comment_bump: u8,
    pub comment_seed: Pubkey,
    pub forum: Pubkey,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct LeaveCommentArgs {
    pub comment_seed: Pubkey,
    pub comment_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditCommentArgs {
    pub comment_seed: Pubkey,
    pub comment_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteCommentArgs {
    pub comment_seed: Pubkey,
    pub comment_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Comment on any piece of content. The parent's forum is resolved by
    /// chasing its record chain (at most one hop past the parent itself).
    pub fn leave_comment(
        &self,
        commented_on: &Pubkey,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<CommentCreated, ClientError> {
        let mut resolver = self.resolver();
        let forum = resolver.forum_of_content(commented_on)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let comment_seed = seed_keypair.pubkey();
        let (comment, comment_bump) =
            pda::find_comment(&forum, &user_profile, &comment_seed, &self.program_id());

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new(*commented_on, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(comment, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = LeaveCommentArgs {
            comment_seed,
            comment_bump,
            content,
        };
        let signature = self.submit_ix("leave_comment", accounts, &args, &owner_key, &signers)?;

        Ok(CommentCreated {
            comment,
            comment_bump,
            comment_seed,
            forum,
            signature,
        })
    }

    /// Edit a comment. Seed comes off the comment's record; the forum is
    /// resolved through the commented-on chain.
    pub fn edit_comment(
        &self,
        profile_owner: &Actor,
        comment: &Pubkey,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Comment = resolver.record(comment)?;
        let forum = resolver.forum_of_content(&record.commented_on)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new_readonly(forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*comment, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditCommentArgs {
            comment_seed: record.comment_seed,
            comment_bump: record.bump,
            content,
        };
        self.submit_ix("edit_comment", accounts, &args, &owner_key, &signers)
    }

    /// Moderator edit of someone else's comment.
    pub fn edit_comment_moderator(
        &self,
        moderator: &Actor,
        comment: &Pubkey,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Comment = resolver.record(comment)?;
        let forum = resolver.forum_of_content(&record.commented_on)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*comment, false),
            AccountMeta::new(moderator_key, true),
        ];
        let args = EditCommentArgs {
            comment_seed: record.comment_seed,
            comment_bump: record.bump,
            content,
        };
        self.submit_ix(
            "edit_comment_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Close a comment, returning rent to `receiver`.
    pub fn delete_comment(
        &self,
        profile_owner: &Actor,
        comment: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Comment = resolver.record(comment)?;
        let forum = resolver.forum_of_content(&record.commented_on)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*comment, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteCommentArgs {
            comment_seed: record.comment_seed,
            comment_bump: record.bump,
        };
        self.submit_ix("delete_comment", accounts, &args, &owner_key, &signers)
    }

    /// Moderator close of someone else's comment.
    pub fn delete_comment_moderator(
        &self,
        moderator: &Actor,
        comment: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Comment = resolver.record(comment)?;
        let forum = resolver.forum_of_content(&record.commented_on)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*comment, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteCommentArgs {
            comment_seed: record.comment_seed,
            comment_bump: record.bump,
        };
        self.submit_ix(
            "delete_comment_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }
}
