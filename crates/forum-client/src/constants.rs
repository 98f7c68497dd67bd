/// PDA seeds used by the forum program for account derivation
pub mod seeds {
    /// Seed for the forum treasury account
    pub const TREASURY: &[u8] = b"treasury";

    /// Seed for user profile accounts
    pub const USER_PROFILE: &[u8] = b"user_profile";

    /// Seed for about-me accounts
    pub const ABOUT_ME: &[u8] = b"about_me";

    /// Seed for question accounts
    pub const QUESTION: &[u8] = b"question";

    /// Seed for answer accounts
    pub const ANSWER: &[u8] = b"answer";

    /// Seed for comment accounts
    pub const COMMENT: &[u8] = b"comment";

    /// Seed for big note accounts
    pub const BIG_NOTE: &[u8] = b"big_note";

    /// Seed for proposed contribution accounts
    pub const PROPOSED_CONTRIBUTION: &[u8] = b"proposed_contribution";

    /// Seed for challenge accounts
    pub const CHALLENGE: &[u8] = b"challenge";

    /// Seed for submission accounts
    pub const SUBMISSION: &[u8] = b"submission";

    /// Seed for question bounty escrow accounts
    pub const BOUNTY_PDA: &[u8] = b"bounty_pda";

    /// Seed for big note bounty escrow accounts
    pub const BIG_NOTE_BOUNTY_PDA: &[u8] = b"bignote_bounty_pda";

    /// Seed for big note verification application accounts
    pub const VERIFICATION_APPLICATION: &[u8] = b"verification_application";

    /// Seed for big note verification fee escrow accounts
    pub const VERIFICATION_FEE_PDA: &[u8] = b"verification_fee_pda";
}

/// Maximum byte length of a single PDA seed accepted by the runtime
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds in a single PDA derivation
pub const MAX_SEEDS: usize = 16;

/// Maximum number of tags on a question or big note
pub const MAX_TAGS: usize = 3;

/// Maximum byte length of a single tag
pub const MAX_TAG_LEN: usize = 24;

/// Maximum byte length of a content title
pub const MAX_TITLE_LEN: usize = 256;

/// Maximum byte length of inline content stored on a record
pub const MAX_INLINE_CONTENT_LEN: usize = 512;

/// Maximum byte length of a name stored on a forum
pub const MAX_NAME_LEN: usize = 64;
