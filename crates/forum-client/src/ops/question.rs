//! Question lifecycle: ask/edit/delete, bounty supplement/refund, and answer
//! acceptance.

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
use crate::state::{Answer, ContentRef, Question};

use super::ForumClient;

/// Result of `ask_question`.
///
/// `question_seed` is the capability token for this question: it is the only
/// way to re-derive the address, and it is never regenerated. Persist it (or
/// read it back off the fetched record later).
#[derive(Debug, Clone)]
pub struct QuestionCreated {
    pub question: Pubkey,
    pub question_bump: u8,
    pub question_seed: Pubkey,
    pub bounty_pda: Pubkey,
    pub bounty_pda_bump: u8,
    pub forum_treasury: Pubkey,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct AskQuestionArgs {
    pub question_seed: Pubkey,
    pub question_bump: u8,
    pub bounty_pda_bump: u8,
    pub forum_treasury_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
    pub bounty_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditQuestionArgs {
    pub question_seed: Pubkey,
    pub question_bump: u8,
    pub title: String,
    pub tags: Vec<String>,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteQuestionArgs {
    pub question_seed: Pubkey,
    pub question_bump: u8,
    pub bounty_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct SupplementQuestionBountyArgs {
    pub bounty_pda_bump: u8,
    pub supplement_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct RefundQuestionBountyArgs {
    pub bounty_pda_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct AcceptAnswerArgs {
    pub bounty_pda_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Post a question with a bounty. This is the only phase where new seed
    /// material is minted: a fresh seed keypair whose public half becomes
    /// part of the question's address and is returned to the caller.
    pub fn ask_question(
        &self,
        forum: &Pubkey,
        profile_owner: &Actor,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
        bounty_amount: u64,
    ) -> Result<QuestionCreated, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());

        // Seed keypair: derivation material only, never a signer.
        let seed_keypair = Keypair::new();
        let question_seed = seed_keypair.pubkey();

        let (question, question_bump) =
            pda::find_question(forum, &user_profile, &question_seed, &self.program_id());
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(&question, &self.program_id());
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(forum, &self.program_id());

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(question, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = AskQuestionArgs {
            question_seed,
            question_bump,
            bounty_pda_bump,
            forum_treasury_bump,
            title,
            tags,
            content,
            bounty_amount,
        };
        let signature = self.submit_ix("ask_question", accounts, &args, &owner_key, &signers)?;

        Ok(QuestionCreated {
            question,
            question_bump,
            question_seed,
            bounty_pda,
            bounty_pda_bump,
            forum_treasury,
            signature,
        })
    }

    /// Edit a question. The seed is recovered from the question's own record,
    /// never regenerated, and the caller must be the recorded owner.
    pub fn edit_question(
        &self,
        profile_owner: &Actor,
        question: &Pubkey,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditQuestionArgs {
            question_seed: record.question_seed,
            question_bump: record.bump,
            title,
            tags,
            content,
        };
        self.submit_ix("edit_question", accounts, &args, &owner_key, &signers)
    }

    /// Moderator edit of someone else's question. Resolves the moderator's
    /// own profile (to prove standing) and the owner's profile off the
    /// question record; the program enforces the moderator flag.
    pub fn edit_question_moderator(
        &self,
        moderator: &Actor,
        question: &Pubkey,
        title: String,
        tags: Vec<String>,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(moderator_key, true),
        ];
        let args = EditQuestionArgs {
            question_seed: record.question_seed,
            question_bump: record.bump,
            title,
            tags,
            content,
        };
        self.submit_ix(
            "edit_question_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Close a question, refunding any live bounty and returning rent to
    /// `receiver`.
    pub fn delete_question(
        &self,
        profile_owner: &Actor,
        question: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = self.checked_profile(&owner_key, &record.user_profile)?;
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(question, &self.program_id());

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteQuestionArgs {
            question_seed: record.question_seed,
            question_bump: record.bump,
            bounty_pda_bump,
        };
        self.submit_ix("delete_question", accounts, &args, &owner_key, &signers)
    }

    /// Moderator close of someone else's question.
    pub fn delete_question_moderator(
        &self,
        moderator: &Actor,
        question: &Pubkey,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(question, &self.program_id());

        let accounts = vec![
            AccountMeta::new(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(record.user_profile, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteQuestionArgs {
            question_seed: record.question_seed,
            question_bump: record.bump,
            bounty_pda_bump,
        };
        self.submit_ix(
            "delete_question_moderator",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Add lamports to a question's bounty escrow. Any profiled user may
    /// supplement; the supplementor's profile is derived from their key and
    /// included without an existence pre-check (the program decides).
    pub fn supplement_question_bounty(
        &self,
        supplementor: &Actor,
        question: &Pubkey,
        supplement_amount: u64,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let supplementor_key = signers.require(supplementor)?;
        let (supplementor_profile, _) =
            pda::find_user_profile(&supplementor_key, &self.program_id());
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(question, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(supplementor_profile, false),
            AccountMeta::new(supplementor_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = SupplementQuestionBountyArgs {
            bounty_pda_bump,
            supplement_amount,
        };
        self.submit_ix(
            "supplement_question_bounty",
            accounts,
            &args,
            &supplementor_key,
            &signers,
        )
    }

    /// Refund a question's bounty to a supplementor. Moderator operation;
    /// the supplementor is a raw pubkey, distinct from the question's owner,
    /// and their profile is derived from it.
    pub fn refund_question_bounty(
        &self,
        moderator: &Actor,
        question: &Pubkey,
        supplementor: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let record: Question = resolver.record(question)?;

        let mut signers = SignerSet::new();
        let moderator_key = signers.require(moderator)?;
        let (moderator_profile, _) =
            pda::find_user_profile(&moderator_key, &self.program_id());
        let (supplementor_profile, _) =
            pda::find_user_profile(supplementor, &self.program_id());
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(question, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(record.forum, false),
            AccountMeta::new_readonly(moderator_profile, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new_readonly(supplementor_profile, false),
            AccountMeta::new(*supplementor, false),
            AccountMeta::new(moderator_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = RefundQuestionBountyArgs { bounty_pda_bump };
        self.submit_ix(
            "refund_question_bounty",
            accounts,
            &args,
            &moderator_key,
            &signers,
        )
    }

    /// Accept an answer, awarding the bounty escrow to the answerer. Only
    /// the question's owner may accept; the answerer's profile comes off the
    /// answer record.
    pub fn accept_answer(
        &self,
        profile_owner: &Actor,
        question: &Pubkey,
        answer: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let question_record: Question = resolver.record(question)?;
        let answer_record: Answer = resolver.record(answer)?;

        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (asker_profile, _) =
            self.checked_profile(&owner_key, &question_record.user_profile)?;
        let (bounty_pda, bounty_pda_bump) = pda::find_bounty_pda(question, &self.program_id());

        let accounts = vec![
            AccountMeta::new_readonly(question_record.forum, false),
            AccountMeta::new(*question, false),
            AccountMeta::new(*answer, false),
            AccountMeta::new(asker_profile, false),
            AccountMeta::new(answer_record.user_profile, false),
            AccountMeta::new(bounty_pda, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = AcceptAnswerArgs { bounty_pda_bump };
        self.submit_ix("accept_answer", accounts, &args, &owner_key, &signers)
    }
}
