//! Forum lifecycle: the root entity every other account hangs off.

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
use crate::state::{ForumConstants, ForumFees};

use super::ForumClient;

/// Everything derived while creating a forum, returned so the caller never
/// re-derives.
#[derive(Debug, Clone)]
pub struct ForumCreated {
    pub forum: Pubkey,
    pub forum_authority: Pubkey,
    pub forum_authority_bump: u8,
    pub forum_treasury: Pubkey,
    pub forum_treasury_bump: u8,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateForumArgs {
    pub forum_name: String,
    pub forum_fees: ForumFees,
    pub forum_constants: ForumConstants,
    pub forum_authority_bump: u8,
    pub forum_treasury_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditForumArgs {
    pub forum_fees: ForumFees,
    pub forum_constants: ForumConstants,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CloseForumArgs {
    pub forum_treasury_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Create a forum. The forum account itself is keypair-created, not a
    /// PDA, so `forum_keypair` must co-sign; the manager pays and becomes the
    /// forum's authority for fees, moderators and closure.
    pub fn create_forum(
        &self,
        manager: &Actor,
        forum_keypair: &Keypair,
        forum_name: String,
        forum_fees: ForumFees,
        forum_constants: ForumConstants,
    ) -> Result<ForumCreated, ClientError> {
        let forum = forum_keypair.pubkey();
        let (forum_authority, forum_authority_bump) =
            pda::find_forum_authority(&forum, &self.program_id());
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(&forum, &self.program_id());

        let mut signers = SignerSet::new();
        let manager_key = signers.require(manager)?;
        signers.push(forum_keypair);

        let accounts = vec![
            AccountMeta::new(forum, true),
            AccountMeta::new_readonly(forum_authority, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new(manager_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateForumArgs {
            forum_name,
            forum_fees,
            forum_constants,
            forum_authority_bump,
            forum_treasury_bump,
        };
        let signature = self.submit_ix("create_forum", accounts, &args, &manager_key, &signers)?;

        Ok(ForumCreated {
            forum,
            forum_authority,
            forum_authority_bump,
            forum_treasury,
            forum_treasury_bump,
            signature,
        })
    }

    /// Update a forum's fee schedule and limits. Manager only.
    pub fn edit_forum(
        &self,
        manager: &Actor,
        forum: &Pubkey,
        forum_fees: ForumFees,
        forum_constants: ForumConstants,
    ) -> Result<Signature, ClientError> {
        let mut signers = SignerSet::new();
        let manager_key = signers.require(manager)?;

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new(manager_key, true),
        ];
        let args = EditForumArgs {
            forum_fees,
            forum_constants,
        };
        self.submit_ix("edit_forum", accounts, &args, &manager_key, &signers)
    }

    /// Close a forum and sweep its treasury to `receiver`. The program
    /// refuses while child accounts remain; closing order is leaves first.
    pub fn close_forum(
        &self,
        manager: &Actor,
        forum: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(forum, &self.program_id());

        let mut signers = SignerSet::new();
        let manager_key = signers.require(manager)?;

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new(manager_key, true),
            AccountMeta::new(*receiver, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CloseForumArgs {
            forum_treasury_bump,
        };
        self.submit_ix("close_forum", accounts, &args, &manager_key, &signers)
    }
}
