#![allow(dead_code)]

//! In-process ledger fake.
//!
//! Implements the `Ledger` capability over a `HashMap` and emulates the
//! program's effects for the instructions the tests exercise: accounts are
//! materialized on create, moderator standing gates the moderator variants,
//! and escrows enforce monotonic state transitions. Submitted instructions
//! are recorded so tests can assert on what actually went out.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anchor_lang::{AccountDeserialize, AccountSerialize, AnchorDeserialize};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;

use forum_client::ops::{
    ix_discriminator, AnswerQuestionArgs, AskQuestionArgs, CreateAboutMeArgs, CreateBigNoteArgs,
    CreateChallengeArgs, CreateForumArgs, CreateSubmissionArgs, EditBigNoteArgs,
    EditChallengeArgs, EditQuestionArgs, EditSubmissionArgs, LeaveCommentArgs,
    ProposeContributionArgs, SupplementBigNoteBountyArgs, SupplementQuestionBountyArgs,
};
use forum_client::state::{
    AboutMe, Answer, BigNote, BigNoteBountyPda, BountyPda, Challenge, Comment, ContentRef,
    ContributionState, EscrowState, Forum, ForumConstants, ForumCounts, ForumFees,
    ProposedContribution, Question, Submission, SubmissionState, UserProfile,
    VerificationApplication, VerificationFeePda, VerificationState,
};
use forum_client::{AccountData, Actor, ClientError, ForumClient, Ledger, RecordFilter};

pub const PROFILE_FEE: u64 = 10;
pub const QUESTION_FEE: u64 = 5;
pub const VERIFICATION_FEE: u64 = 20;

pub struct FakeLedger {
    accounts: RefCell<HashMap<Pubkey, AccountData>>,
    fetches: Cell<usize>,
    submissions: RefCell<Vec<Instruction>>,
}

impl FakeLedger {
    pub fn new() -> Self {
        FakeLedger {
            accounts: RefCell::new(HashMap::new()),
            fetches: Cell::new(0),
            submissions: RefCell::new(Vec::new()),
        }
    }

    /// Remote single-account reads issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.borrow().len()
    }

    pub fn last_submission(&self) -> Instruction {
        self.submissions
            .borrow()
            .last()
            .expect("no instruction was submitted")
            .clone()
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts
            .borrow()
            .get(address)
            .map(|a| a.lamports)
            .unwrap_or(0)
    }

    /// Seed the store with a typed record, bypassing any instruction.
    pub fn plant_record<T: AccountSerialize>(&self, address: Pubkey, record: &T, lamports: u64) {
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        self.accounts.borrow_mut().insert(
            address,
            AccountData {
                lamports,
                data,
                owner: forum_client::ID,
            },
        );
    }

    fn read<T: AccountDeserialize>(&self, address: &Pubkey) -> T {
        let store = self.accounts.borrow();
        let account = store
            .get(address)
            .unwrap_or_else(|| panic!("emulated program: account {address} missing"));
        T::try_deserialize(&mut &account.data[..]).unwrap()
    }

    fn write<T: AccountSerialize>(&self, address: &Pubkey, record: &T) {
        let lamports = self.lamports(address);
        self.plant_record(*address, record, lamports);
    }

    fn credit(&self, address: &Pubkey, amount: u64) {
        let mut store = self.accounts.borrow_mut();
        let account = store.entry(*address).or_insert_with(|| AccountData {
            lamports: 0,
            data: Vec::new(),
            owner: anchor_lang::system_program::ID,
        });
        account.lamports += amount;
    }

    fn set_lamports(&self, address: &Pubkey, amount: u64) {
        if let Some(account) = self.accounts.borrow_mut().get_mut(address) {
            account.lamports = amount;
        }
    }

    fn remove(&self, address: &Pubkey) {
        self.accounts.borrow_mut().remove(address);
    }

    fn reject(reason: &str) -> ClientError {
        ClientError::RemoteRejection {
            reason: reason.to_string(),
        }
    }

    fn require_moderator(&self, moderator_profile: &Pubkey) -> Result<(), ClientError> {
        let profile: UserProfile = self.read(moderator_profile);
        if !profile.is_moderator {
            return Err(Self::reject("custom program error: NotModerator"));
        }
        Ok(())
    }

    fn require_escrow_available(&self, bounty: &EscrowState) -> Result<(), ClientError> {
        if *bounty != EscrowState::Available {
            return Err(Self::reject("custom program error: BountyNotAvailable"));
        }
        Ok(())
    }

    /// Apply an instruction's effects to the store. Only the instructions the
    /// tests drive are emulated; anything else is accepted without effect.
    fn apply(&self, ix: &Instruction) -> Result<(), ClientError> {
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        let disc = &ix.data[..8];
        let args = &mut &ix.data[8..];

        if self.apply_core(disc, &keys, args)? {
            return Ok(());
        }
        if self.apply_big_note(disc, &keys, args)? {
            return Ok(());
        }
        self.apply_challenge(disc, &keys, args)?;
        Ok(())
    }

    /// Forum, profile, question, answer and comment instructions.
    fn apply_core(
        &self,
        disc: &[u8],
        keys: &[Pubkey],
        args: &mut &[u8],
    ) -> Result<bool, ClientError> {
        if disc == ix_discriminator("create_forum") {
            let args = CreateForumArgs::deserialize(args).unwrap();
            let forum = Forum {
                forum_manager: keys[3],
                forum_authority_bump: args.forum_authority_bump,
                forum_treasury_bump: args.forum_treasury_bump,
                forum_fees: args.forum_fees,
                forum_constants: args.forum_constants,
                forum_counts: ForumCounts::default(),
                forum_name: args.forum_name,
            };
            self.plant_record(keys[0], &forum, 1);
            self.credit(&keys[2], 0);
        } else if disc == ix_discriminator("create_user_profile") {
            let mut forum: Forum = self.read(&keys[0]);
            forum.forum_counts.forum_profile_count += 1;
            self.credit(&keys[1], forum.forum_fees.profile_fee);
            self.write(&keys[0], &forum);
            let profile = UserProfile {
                profile_owner: keys[3],
                forum: keys[0],
                profile_created_ts: 0,
                most_recent_engagement_ts: 0,
                questions_asked: 0,
                questions_answered: 0,
                comments_added: 0,
                answers_accepted: 0,
                big_notes_posted: 0,
                challenges_submitted: 0,
                reputation_score: 0,
                is_moderator: false,
                has_about_me: false,
                profile_pic_mint: None,
            };
            self.plant_record(keys[2], &profile, 1);
        } else if disc == ix_discriminator("create_about_me") {
            let args = CreateAboutMeArgs::deserialize(args).unwrap();
            let mut profile: UserProfile = self.read(&keys[0]);
            profile.has_about_me = true;
            self.write(&keys[0], &profile);
            let about_me = AboutMe {
                user_profile: keys[0],
                about_me_created_ts: 0,
                most_recent_update_ts: 0,
                content: args.content,
            };
            self.plant_record(keys[1], &about_me, 1);
        } else if disc == ix_discriminator("add_moderator")
            || disc == ix_discriminator("remove_moderator")
        {
            let forum: Forum = self.read(&keys[0]);
            if forum.forum_manager != keys[3] {
                return Err(Self::reject("custom program error: NotForumManager"));
            }
            let mut profile: UserProfile = self.read(&keys[1]);
            profile.is_moderator = disc == ix_discriminator("add_moderator");
            self.write(&keys[1], &profile);
        } else if disc == ix_discriminator("ask_question") {
            let args = AskQuestionArgs::deserialize(args).unwrap();
            let mut forum: Forum = self.read(&keys[0]);
            forum.forum_counts.forum_question_count += 1;
            self.credit(&keys[1], forum.forum_fees.question_fee);
            self.write(&keys[0], &forum);
            let question = Question {
                question_seed: args.question_seed,
                forum: keys[0],
                user_profile: keys[2],
                bump: args.question_bump,
                question_posted_ts: 0,
                most_recent_engagement_ts: 0,
                bounty_amount: args.bounty_amount,
                bounty_awarded: false,
                title: args.title,
                tags: args.tags,
                content: args.content,
            };
            self.plant_record(keys[3], &question, 1);
            let bounty = BountyPda {
                question: keys[3],
                state: EscrowState::Available,
                bump: args.bounty_pda_bump,
            };
            self.plant_record(keys[4], &bounty, args.bounty_amount);
        } else if disc == ix_discriminator("edit_question") {
            let args = EditQuestionArgs::deserialize(args).unwrap();
            let mut question: Question = self.read(&keys[2]);
            question.title = args.title;
            question.tags = args.tags;
            question.content = args.content;
            self.write(&keys[2], &question);
        } else if disc == ix_discriminator("edit_question_moderator") {
            self.require_moderator(&keys[1])?;
            let args = EditQuestionArgs::deserialize(args).unwrap();
            let mut question: Question = self.read(&keys[3]);
            question.title = args.title;
            question.tags = args.tags;
            question.content = args.content;
            self.write(&keys[3], &question);
        } else if disc == ix_discriminator("delete_question") {
            self.remove(&keys[2]);
            self.remove(&keys[3]);
        } else if disc == ix_discriminator("delete_question_moderator") {
            self.require_moderator(&keys[1])?;
            self.remove(&keys[3]);
            self.remove(&keys[4]);
        } else if disc == ix_discriminator("supplement_question_bounty") {
            let args = SupplementQuestionBountyArgs::deserialize(args).unwrap();
            let bounty: BountyPda = self.read(&keys[2]);
            self.require_escrow_available(&bounty.state)?;
            self.credit(&keys[2], args.supplement_amount);
            let mut question: Question = self.read(&keys[1]);
            question.bounty_amount += args.supplement_amount;
            self.write(&keys[1], &question);
        } else if disc == ix_discriminator("refund_question_bounty") {
            self.require_moderator(&keys[1])?;
            let mut bounty: BountyPda = self.read(&keys[3]);
            self.require_escrow_available(&bounty.state)?;
            bounty.state = EscrowState::Refunded;
            let refund = self.lamports(&keys[3]);
            self.set_lamports(&keys[3], 0);
            self.credit(&keys[5], refund);
            self.write(&keys[3], &bounty);
        } else if disc == ix_discriminator("accept_answer") {
            let mut bounty: BountyPda = self.read(&keys[5]);
            self.require_escrow_available(&bounty.state)?;
            bounty.state = EscrowState::Awarded;
            self.set_lamports(&keys[5], 0);
            self.write(&keys[5], &bounty);
            let mut question: Question = self.read(&keys[1]);
            question.bounty_awarded = true;
            self.write(&keys[1], &question);
            let mut answer: Answer = self.read(&keys[2]);
            answer.accepted_answer = true;
            self.write(&keys[2], &answer);
        } else if disc == ix_discriminator("answer_question") {
            let args = AnswerQuestionArgs::deserialize(args).unwrap();
            let answer = Answer {
                answer_seed: args.answer_seed,
                question: keys[1],
                user_profile: keys[2],
                bump: args.answer_bump,
                answer_posted_ts: 0,
                most_recent_engagement_ts: 0,
                accepted_answer: false,
                content: args.content,
            };
            self.plant_record(keys[3], &answer, 1);
        } else if disc == ix_discriminator("leave_comment") {
            let args = LeaveCommentArgs::deserialize(args).unwrap();
            let comment = Comment {
                comment_seed: args.comment_seed,
                commented_on: keys[1],
                user_profile: keys[2],
                bump: args.comment_bump,
                comment_posted_ts: 0,
                most_recent_engagement_ts: 0,
                content: args.content,
            };
            self.plant_record(keys[3], &comment, 1);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Big note, contribution and verification instructions.
    fn apply_big_note(
        &self,
        disc: &[u8],
        keys: &[Pubkey],
        args: &mut &[u8],
    ) -> Result<bool, ClientError> {
        if disc == ix_discriminator("create_big_note") {
            let args = CreateBigNoteArgs::deserialize(args).unwrap();
            let mut forum: Forum = self.read(&keys[0]);
            forum.forum_counts.forum_big_notes_count += 1;
            self.credit(&keys[1], forum.forum_fees.big_notes_submission_fee);
            self.write(&keys[0], &forum);
            let note = BigNote {
                big_note_seed: args.big_note_seed,
                forum: keys[0],
                user_profile: keys[2],
                bump: args.big_note_bump,
                big_note_created_ts: 0,
                most_recent_update_ts: 0,
                bounty_amount: args.bounty_amount,
                bounty_awarded: false,
                verification_state: VerificationState::Unverified,
                title: args.title,
                tags: args.tags,
                content: args.content,
            };
            self.plant_record(keys[3], &note, 1);
            let bounty = BigNoteBountyPda {
                big_note: keys[3],
                state: EscrowState::Available,
                bump: args.bounty_pda_bump,
            };
            self.plant_record(keys[4], &bounty, args.bounty_amount);
        } else if disc == ix_discriminator("edit_big_note") {
            let args = EditBigNoteArgs::deserialize(args).unwrap();
            let mut note: BigNote = self.read(&keys[2]);
            note.title = args.title;
            note.tags = args.tags;
            note.content = args.content;
            self.write(&keys[2], &note);
        } else if disc == ix_discriminator("edit_big_note_moderator") {
            self.require_moderator(&keys[1])?;
            let args = EditBigNoteArgs::deserialize(args).unwrap();
            let mut note: BigNote = self.read(&keys[3]);
            note.title = args.title;
            note.tags = args.tags;
            note.content = args.content;
            self.write(&keys[3], &note);
        } else if disc == ix_discriminator("delete_big_note") {
            self.remove(&keys[2]);
            self.remove(&keys[3]);
        } else if disc == ix_discriminator("delete_big_note_moderator") {
            self.require_moderator(&keys[1])?;
            self.remove(&keys[3]);
            self.remove(&keys[4]);
        } else if disc == ix_discriminator("supplement_big_note_bounty") {
            let args = SupplementBigNoteBountyArgs::deserialize(args).unwrap();
            let bounty: BigNoteBountyPda = self.read(&keys[2]);
            self.require_escrow_available(&bounty.state)?;
            self.credit(&keys[2], args.supplement_amount);
            let mut note: BigNote = self.read(&keys[1]);
            note.bounty_amount += args.supplement_amount;
            self.write(&keys[1], &note);
        } else if disc == ix_discriminator("refund_big_note_bounty") {
            self.require_moderator(&keys[1])?;
            let mut bounty: BigNoteBountyPda = self.read(&keys[3]);
            self.require_escrow_available(&bounty.state)?;
            bounty.state = EscrowState::Refunded;
            let refund = self.lamports(&keys[3]);
            self.set_lamports(&keys[3], 0);
            self.credit(&keys[5], refund);
            self.write(&keys[3], &bounty);
        } else if disc == ix_discriminator("propose_contribution") {
            let args = ProposeContributionArgs::deserialize(args).unwrap();
            let contribution = ProposedContribution {
                contribution_seed: args.contribution_seed,
                big_note: keys[1],
                user_profile: keys[2],
                bump: args.contribution_bump,
                contribution_proposed_ts: 0,
                most_recent_engagement_ts: 0,
                state: ContributionState::Pending,
                content: args.content,
            };
            self.plant_record(keys[3], &contribution, 1);
        } else if disc == ix_discriminator("accept_proposed_contribution") {
            let mut contribution: ProposedContribution = self.read(&keys[2]);
            if contribution.state != ContributionState::Pending {
                return Err(Self::reject("custom program error: ContributionSettled"));
            }
            contribution.state = ContributionState::Accepted;
            self.write(&keys[2], &contribution);
            let mut bounty: BigNoteBountyPda = self.read(&keys[5]);
            self.require_escrow_available(&bounty.state)?;
            bounty.state = EscrowState::Awarded;
            self.set_lamports(&keys[5], 0);
            self.write(&keys[5], &bounty);
            let mut note: BigNote = self.read(&keys[1]);
            note.bounty_awarded = true;
            self.write(&keys[1], &note);
        } else if disc == ix_discriminator("reject_proposed_contribution") {
            let mut contribution: ProposedContribution = self.read(&keys[2]);
            if contribution.state != ContributionState::Pending {
                return Err(Self::reject("custom program error: ContributionSettled"));
            }
            contribution.state = ContributionState::Rejected;
            self.write(&keys[2], &contribution);
        } else if disc == ix_discriminator("apply_for_big_note_verification") {
            let mut note: BigNote = self.read(&keys[1]);
            if note.verification_state != VerificationState::Unverified {
                return Err(Self::reject("custom program error: VerificationPending"));
            }
            note.verification_state = VerificationState::AppliedForVerification;
            self.write(&keys[1], &note);
            let forum: Forum = self.read(&keys[0]);
            let application = VerificationApplication {
                big_note: keys[1],
                applicant_profile: keys[4],
                applied_ts: 0,
                bump: 255,
            };
            self.plant_record(keys[2], &application, 1);
            let fee_pda = VerificationFeePda {
                big_note: keys[1],
                bump: 255,
            };
            self.plant_record(keys[3], &fee_pda, forum.forum_fees.verification_fee);
        } else if disc == ix_discriminator("accept_big_note_verification") {
            self.require_moderator(&keys[2])?;
            let mut note: BigNote = self.read(&keys[4]);
            if note.verification_state != VerificationState::AppliedForVerification {
                return Err(Self::reject("custom program error: NoVerificationPending"));
            }
            note.verification_state = VerificationState::Verified;
            self.write(&keys[4], &note);
            let fee = self.lamports(&keys[6]);
            self.credit(&keys[1], fee);
            self.remove(&keys[5]);
            self.remove(&keys[6]);
        } else if disc == ix_discriminator("reject_big_note_verification") {
            self.require_moderator(&keys[2])?;
            let mut note: BigNote = self.read(&keys[4]);
            if note.verification_state != VerificationState::AppliedForVerification {
                return Err(Self::reject("custom program error: NoVerificationPending"));
            }
            note.verification_state = VerificationState::Unverified;
            self.write(&keys[4], &note);
            self.remove(&keys[5]);
            self.remove(&keys[6]);
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Challenge and submission instructions.
    fn apply_challenge(
        &self,
        disc: &[u8],
        keys: &[Pubkey],
        args: &mut &[u8],
    ) -> Result<bool, ClientError> {
        if disc == ix_discriminator("create_challenge") {
            self.require_moderator(&keys[1])?;
            let args = CreateChallengeArgs::deserialize(args).unwrap();
            let challenge = Challenge {
                challenge_seed: args.challenge_seed,
                forum: keys[0],
                moderator_profile: keys[1],
                bump: args.challenge_bump,
                challenge_posted_ts: 0,
                challenge_expires_ts: args.challenge_expires_ts,
                reward: args.reward,
                title: args.title,
                tags: args.tags,
                content: args.content,
            };
            self.plant_record(keys[2], &challenge, 1);
        } else if disc == ix_discriminator("edit_challenge") {
            self.require_moderator(&keys[1])?;
            let args = EditChallengeArgs::deserialize(args).unwrap();
            let mut challenge: Challenge = self.read(&keys[2]);
            challenge.title = args.title;
            challenge.tags = args.tags;
            challenge.content = args.content;
            challenge.challenge_expires_ts = args.challenge_expires_ts;
            self.write(&keys[2], &challenge);
        } else if disc == ix_discriminator("delete_challenge") {
            self.require_moderator(&keys[1])?;
            self.remove(&keys[2]);
        } else if disc == ix_discriminator("create_submission") {
            let args = CreateSubmissionArgs::deserialize(args).unwrap();
            let submission = Submission {
                submission_seed: args.submission_seed,
                challenge: keys[1],
                user_profile: keys[2],
                bump: args.submission_bump,
                submission_posted_ts: 0,
                most_recent_engagement_ts: 0,
                state: SubmissionState::Pending,
                content: args.content,
            };
            self.plant_record(keys[3], &submission, 1);
        } else if disc == ix_discriminator("edit_submission") {
            let args = EditSubmissionArgs::deserialize(args).unwrap();
            let mut submission: Submission = self.read(&keys[3]);
            submission.content = args.content;
            self.write(&keys[3], &submission);
        } else if disc == ix_discriminator("delete_submission") {
            self.remove(&keys[3]);
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl Ledger for FakeLedger {
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<AccountData>, ClientError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.accounts.borrow().get(address).cloned())
    }

    fn fetch_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[RecordFilter],
    ) -> Result<Vec<(Pubkey, AccountData)>, ClientError> {
        let store = self.accounts.borrow();
        Ok(store
            .iter()
            .filter(|(_, account)| account.owner == *program_id)
            .filter(|(_, account)| {
                filters.iter().all(|f| {
                    account
                        .data
                        .get(f.offset..f.offset + f.bytes.len())
                        .map(|window| window == f.bytes)
                        .unwrap_or(false)
                })
            })
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }

    fn submit(
        &self,
        instruction: Instruction,
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> Result<Signature, ClientError> {
        let signer_keys: Vec<Pubkey> = signers.iter().map(|k| k.pubkey()).collect();
        if !signer_keys.contains(payer) {
            return Err(FakeLedger::reject("fee payer did not sign"));
        }
        for meta in &instruction.accounts {
            if meta.is_signer && !signer_keys.contains(&meta.pubkey) {
                return Err(FakeLedger::reject("missing required signature"));
            }
        }
        self.submissions.borrow_mut().push(instruction.clone());
        self.apply(&instruction)?;
        Ok(Signature::default())
    }
}

pub fn setup() -> ForumClient<FakeLedger> {
    ForumClient::new(FakeLedger::new())
}

pub fn test_fees() -> ForumFees {
    ForumFees {
        profile_fee: PROFILE_FEE,
        question_fee: QUESTION_FEE,
        big_notes_submission_fee: 5,
        challenge_submission_fee: 5,
        question_bounty_minimum: 1,
        big_notes_bounty_minimum: 1,
        verification_fee: VERIFICATION_FEE,
    }
}

pub fn test_constants() -> ForumConstants {
    ForumConstants {
        max_tags_length: 3,
        max_title_length: 256,
        max_url_length: 256,
        min_inactivity_period: 86_400,
    }
}

/// Create a forum under a fresh keypair and return its address.
pub fn create_test_forum(client: &ForumClient<FakeLedger>, manager: &Actor) -> Pubkey {
    let forum_keypair = Keypair::new();
    let created = client
        .create_forum(
            manager,
            &forum_keypair,
            "testnet-forum".to_string(),
            test_fees(),
            test_constants(),
        )
        .unwrap();
    created.forum
}

/// Create a profile for `actor` and grant it moderator standing.
pub fn grant_moderator(
    client: &ForumClient<FakeLedger>,
    manager: &Actor,
    forum: &Pubkey,
    actor: &Actor,
) -> Pubkey {
    let created = client.create_user_profile(forum, actor).unwrap();
    client
        .add_moderator(manager, forum, &created.user_profile)
        .unwrap();
    created.user_profile
}

/// Create a forum, a member profile, and a question asked by that member.
pub fn forum_with_question(
    client: &ForumClient<FakeLedger>,
    manager: &Actor,
    member: &Actor,
    bounty: u64,
) -> (Pubkey, Pubkey) {
    let forum = create_test_forum(client, manager);
    client.create_user_profile(&forum, member).unwrap();
    let created = client
        .ask_question(
            &forum,
            member,
            "How do PDAs work?".to_string(),
            vec!["solana".to_string()],
            ContentRef::inline("Seeds in, address out?"),
            bounty,
        )
        .unwrap();
    (forum, created.question)
}

/// Create a forum, a member profile, and a big note posted by that member.
pub fn forum_with_big_note(
    client: &ForumClient<FakeLedger>,
    manager: &Actor,
    member: &Actor,
    bounty: u64,
) -> (Pubkey, Pubkey) {
    let forum = create_test_forum(client, manager);
    client.create_user_profile(&forum, member).unwrap();
    let created = client
        .create_big_note(
            &forum,
            member,
            "Anchor account cookbook".to_string(),
            vec!["anchor".to_string()],
            ContentRef::inline("Patterns for PDA-backed records"),
            bounty,
        )
        .unwrap();
    (forum, created.big_note)
}
