//! Answer lifecycle.

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
use crate::state::{Answer, ContentRef};

use super::ForumClient;

/// Result of `answer_question`. Persist `answer_seed`: it is required to
/// re-derive the answer's address and is never regenerated.
#[derive(Debug, Clone)]
pub struct AnswerCreated {
    pub answer: Pubkey,
    pub answer_bump: u8,
    pub answer_seed: Pubkey,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct AnswerQuestionArgs {
    pub answer_seed: Pubkey,
    pub answer_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditAnswerArgs {
    pub answer_seed: Pubkey,
    pub answer_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteAnswerArgs {
    pub answer_seed: Pubkey,
    pub answer_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Post an answer to a question. The question's forum is resolved off
    /// its record; a fresh seed keypair is minted for the answer's address.
    pub fn answer_question(
        &self,
        question: &Pubkey,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<AnswerCreated, ClientError> {
        let mut resolver = self.resolver();
        let forum = resolver.forum_of_content(question)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        let seed_keypair = Keypair::new();
        let answer_seed = seed_keypair.pubkey();
        let (answer, answer_bump) =
            pda::find_answer(&forum, &user_profile, &answer_seed, &self.program_id());

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(answer, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = AnswerQuestionArgs {
            answer_seed,
            answer_bump,
            content,
        };
        let signature =
            self.submit_ix("answer_question", accounts, &args, &owner_key, &signers)?;

        Ok(AnswerCreated {
            answer,
            answer_bump,
            answer_seed,
            signature,
        })
    }

    /// Edit an answer. Seed and origin come off the answer's own record.
    pub fn edit_answer(
        &self,
        profile_owner: &Actor,
        answer: &Pubkey,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Answer = resolver.record(answer)?;
        let forum = resolver.forum_of_content(&record.question)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new_readonly(forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*answer, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditAnswerArgs {
            answer_seed: record.answer_seed,
            answer_bump: record.bump,
            content,
        };
        self.submit_ix("edit_answer", accounts, &args, &owner_key, &signers)
    }

    /// Moderator edit of someone else's answer.
    pub fn edit_answer_moderator(
        &self,
        moderator: &Actor,
        answer: &Pubkey,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Answer = resolver.record(answer)?;
        let forum = resolver.forum_of_content(&record.question)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*answer, false),
            AccountMeta::new(moderator_key, true),
        ];
        let args = EditAnswerArgs {
            answer_seed: record.answer_seed,
            answer_bump: record.bump,
            content,
        };
        self.submit_ix(
            "edit_answer_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Close an answer, returning rent to `receiver`.
    pub fn delete_answer(
        &self,
        profile_owner: &Actor,
        answer: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Answer = resolver.record(answer)?;
        let forum = resolver.forum_of_content(&record.question)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*answer, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteAnswerArgs {
            answer_seed: record.answer_seed,
            answer_bump: record.bump,
        };
        self.submit_ix("delete_answer", accounts, &args, &owner_key, &signers)
    }

    /// Moderator close of someone else's answer.
    pub fn delete_answer_moderator(
        &self,
        moderator: &Actor,
        answer: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Answer = resolver.record(answer)?;
        let forum = resolver.forum_of_content(&record.question)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new(forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*answer, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteAnswerArgs {
            answer_seed: record.answer_seed,
            answer_bump: record.bump,
        };
        self.submit_ix(
            "delete_answer_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }
}
