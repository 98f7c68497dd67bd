//! Mirrors of the forum program's on-chain records.
//!
//! Layouts and discriminators must match the program byte for byte: these
//! structs drive both account deserialization and the memcmp filter offsets
//! used for bulk queries. Records are fetched, never mutated locally; the
//! on-chain copy is the sole source of truth for seed material.

use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INLINE_CONTENT_LEN, MAX_NAME_LEN, MAX_TAGS, MAX_TAG_LEN, MAX_TITLE_LEN};

/// Byte offset of the parent back-reference used by "list children of X"
/// memcmp filters.
///
/// Content records lay out their own seed pubkey first and their parent
/// reference second; `UserProfile` (owner then forum) and `Challenge` (seed
/// then forum) land their forum reference at the same offset, so every
/// listing filter shares this one constant.
pub const PARENT_REF_OFFSET: usize = 40;

/// Fee schedule charged by a forum. Opaque protocol configuration: the
/// program enforces it, this client only carries it.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
    Serialize, Deserialize,
)]
pub struct ForumFees {
    /// Flat fee in lamports for creating a user profile
    pub profile_fee: u64,
    /// Flat fee in lamports for posting a question
    pub question_fee: u64,
    /// Flat fee in lamports for posting a big note
    pub big_notes_submission_fee: u64,
    /// Flat fee in lamports for submitting against a challenge
    pub challenge_submission_fee: u64,
    /// Minimum bounty in lamports a question must carry
    pub question_bounty_minimum: u64,
    /// Minimum bounty in lamports a big note must carry
    pub big_notes_bounty_minimum: u64,
    /// Fee in lamports escrowed with a big note verification application
    pub verification_fee: u64,
}

/// Per-forum content limits.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
    Serialize, Deserialize,
)]
pub struct ForumConstants {
    /// Maximum number of tags on a question or big note
    pub max_tags_length: u8,
    /// Maximum byte length of a content title
    pub max_title_length: u16,
    /// Maximum byte length of a URL stored on a record
    pub max_url_length: u16,
    /// Minimum seconds of inactivity before stale content may be reclaimed
    pub min_inactivity_period: i64,
}

/// Running counters maintained by the program as children are created.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct ForumCounts {
    pub forum_profile_count: u64,
    pub forum_question_count: u64,
    pub forum_answer_count: u64,
    pub forum_comment_count: u64,
    pub forum_big_notes_count: u64,
}

/// Root entity of the protocol. Not a PDA: created from a fresh keypair by
/// the forum manager. Owns a treasury PDA and an authority PDA used as the
/// signing identity for program-internal transfers.
#[account]
#[derive(InitSpace)]
pub struct Forum {
    /// Manager identity with authority over fees, moderators and closure
    pub forum_manager: Pubkey,
    /// Bump of the forum authority PDA (seeds: forum address alone)
    pub forum_authority_bump: u8,
    /// Bump of the forum treasury PDA (seeds: "treasury" + forum address)
    pub forum_treasury_bump: u8,
    pub forum_fees: ForumFees,
    pub forum_constants: ForumConstants,
    pub forum_counts: ForumCounts,
    /// Display name, not used in any derivation
    #[max_len(MAX_NAME_LEN)]
    pub forum_name: String,
}

/// One profile per owner. Seeds: `"user_profile"` + owner key.
#[account]
#[derive(InitSpace)]
pub struct UserProfile {
    /// Wallet that owns and signs for this profile (offset 8)
    pub profile_owner: Pubkey,
    /// Forum this profile was created under (offset 40)
    pub forum: Pubkey,
    pub profile_created_ts: i64,
    pub most_recent_engagement_ts: i64,
    pub questions_asked: u64,
    pub questions_answered: u64,
    pub comments_added: u64,
    pub answers_accepted: u64,
    pub big_notes_posted: u64,
    pub challenges_submitted: u64,
    pub reputation_score: u64,
    /// Grants access to the moderator instruction variants
    pub is_moderator: bool,
    pub has_about_me: bool,
    /// Optional NFT mint used as the profile picture
    pub profile_pic_mint: Option<Pubkey>,
}

/// At most one per profile. Seeds: `"about_me"` + user profile address.
#[account]
#[derive(InitSpace)]
pub struct AboutMe {
    /// Owning profile (offset 8)
    pub user_profile: Pubkey,
    pub about_me_created_ts: i64,
    pub most_recent_update_ts: i64,
    pub content: ContentRef,
}

/// Content payload: either short inline text or a hash pointing at off-chain
/// storage. Variable-length, so records keep it after all filterable fields.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub enum ContentRef {
    Inline {
        #[max_len(MAX_INLINE_CONTENT_LEN)]
        text: String,
    },
    DataHash { hash: [u8; 32] },
}

impl ContentRef {
    pub fn inline(text: impl Into<String>) -> Self {
        ContentRef::Inline { text: text.into() }
    }

    pub fn data_hash(hash: [u8; 32]) -> Self {
        ContentRef::DataHash { hash }
    }
}

/// Question record. Seeds: `"question"` + forum + user profile + seed key.
///
/// `question_seed` is the public half of a keypair generated once at creation
/// and required to re-derive this address forever after. It is stored here so
/// edits can recover it; the derived address itself is never stored.
#[account]
#[derive(InitSpace, Debug)]
pub struct Question {
    /// Seed key minted at creation (offset 8)
    pub question_seed: Pubkey,
    /// Parent forum (offset 40)
    pub forum: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    /// PDA bump, passed back to the program on every touch
    pub bump: u8,
    pub question_posted_ts: i64,
    pub most_recent_engagement_ts: i64,
    /// Lamports escrowed in this question's bounty PDA
    pub bounty_amount: u64,
    pub bounty_awarded: bool,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_TAGS, MAX_TAG_LEN)]
    pub tags: Vec<String>,
    pub content: ContentRef,
}

/// Answer record. Seeds: `"answer"` + forum + user profile + seed key.
#[account]
#[derive(InitSpace, Debug)]
pub struct Answer {
    /// Seed key minted at creation (offset 8)
    pub answer_seed: Pubkey,
    /// Question this answers (offset 40)
    pub question: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    pub bump: u8,
    pub answer_posted_ts: i64,
    pub most_recent_engagement_ts: i64,
    pub accepted_answer: bool,
    pub content: ContentRef,
}

/// Comment record. Seeds: `"comment"` + forum + user profile + seed key.
///
/// The parent is a generic "commented on" address: a question, answer, big
/// note or proposed contribution. The record does not say which; resolving a
/// comment's forum therefore starts by fetching the parent to learn its kind.
#[account]
#[derive(InitSpace, Debug)]
pub struct Comment {
    /// Seed key minted at creation (offset 8)
    pub comment_seed: Pubkey,
    /// Commented-on content of any kind (offset 40)
    pub commented_on: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    pub bump: u8,
    pub comment_posted_ts: i64,
    pub most_recent_engagement_ts: i64,
    pub content: ContentRef,
}

/// Verification lifecycle of a big note.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum VerificationState {
    #[default]
    Unverified,
    AppliedForVerification,
    Verified,
}

/// Big note record. Seeds: `"big_note"` + forum + user profile + seed key.
#[account]
#[derive(InitSpace, Debug)]
pub struct BigNote {
    /// Seed key minted at creation (offset 8)
    pub big_note_seed: Pubkey,
    /// Parent forum (offset 40)
    pub forum: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    pub bump: u8,
    pub big_note_created_ts: i64,
    pub most_recent_update_ts: i64,
    /// Lamports escrowed in this note's bounty PDA
    pub bounty_amount: u64,
    pub bounty_awarded: bool,
    pub verification_state: VerificationState,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_TAGS, MAX_TAG_LEN)]
    pub tags: Vec<String>,
    pub content: ContentRef,
}

/// Lifecycle of a proposed contribution. Accepted and Rejected are terminal.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum ContributionState {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Candidate content offered against a big note.
/// Seeds: `"proposed_contribution"` + forum + user profile + seed key.
#[account]
#[derive(InitSpace, Debug)]
pub struct ProposedContribution {
    /// Seed key minted at creation (offset 8)
    pub contribution_seed: Pubkey,
    /// Big note this is offered against (offset 40)
    pub big_note: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    pub bump: u8,
    pub contribution_proposed_ts: i64,
    pub most_recent_engagement_ts: i64,
    pub state: ContributionState,
    pub content: ContentRef,
}

/// Moderator-issued task. Seeds: `"challenge"` + forum + seed key.
#[account]
#[derive(InitSpace)]
pub struct Challenge {
    /// Seed key minted at creation (offset 8)
    pub challenge_seed: Pubkey,
    /// Parent forum (offset 40)
    pub forum: Pubkey,
    /// Profile of the issuing moderator (offset 72)
    pub moderator_profile: Pubkey,
    pub bump: u8,
    pub challenge_posted_ts: i64,
    pub challenge_expires_ts: i64,
    /// Lamports paid out per accepted submission
    pub reward: u64,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_TAGS, MAX_TAG_LEN)]
    pub tags: Vec<String>,
    pub content: ContentRef,
}

/// Lifecycle of a challenge submission.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum SubmissionState {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// User response to a challenge.
/// Seeds: `"submission"` + forum + user profile + seed key.
#[account]
#[derive(InitSpace)]
pub struct Submission {
    /// Seed key minted at creation (offset 8)
    pub submission_seed: Pubkey,
    /// Challenge this responds to (offset 40)
    pub challenge: Pubkey,
    /// Authoring profile (offset 72)
    pub user_profile: Pubkey,
    pub bump: u8,
    pub submission_posted_ts: i64,
    pub most_recent_engagement_ts: i64,
    pub state: SubmissionState,
    pub content: ContentRef,
}

/// Lifecycle of a bounty escrow. Transitions are monotonic: once Awarded or
/// Refunded, an escrow never returns to Available.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub enum EscrowState {
    #[default]
    Available,
    Awarded,
    Refunded,
}

/// Bounty escrow for a question. Seeds: `"bounty_pda"` + question address.
#[account]
#[derive(InitSpace, Debug)]
pub struct BountyPda {
    /// Question this escrow funds (offset 8)
    pub question: Pubkey,
    pub state: EscrowState,
    pub bump: u8,
}

/// Bounty escrow for a big note. Seeds: `"bignote_bounty_pda"` + note address.
#[account]
#[derive(InitSpace)]
pub struct BigNoteBountyPda {
    /// Big note this escrow funds (offset 8)
    pub big_note: Pubkey,
    pub state: EscrowState,
    pub bump: u8,
}

/// Verification application record for a big note.
/// Seeds: `"verification_application"` + note address.
#[account]
#[derive(InitSpace)]
pub struct VerificationApplication {
    /// Big note under verification (offset 8)
    pub big_note: Pubkey,
    /// Profile that applied (offset 40)
    pub applicant_profile: Pubkey,
    pub applied_ts: i64,
    pub bump: u8,
}

/// Fee escrow attached to a verification application.
/// Seeds: `"verification_fee_pda"` + note address.
#[account]
#[derive(InitSpace)]
pub struct VerificationFeePda {
    /// Big note under verification (offset 8)
    pub big_note: Pubkey,
    pub bump: u8,
}
