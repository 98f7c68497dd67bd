//! Deterministic address derivation for every entity in the protocol.
//!
//! Pure functions, no I/O: collaborators that only need an address (a
//! treasury, a bounty escrow) call these directly without performing a full
//! operation. The bump search order is the runtime's descending off-curve
//! search and is never reimplemented here, so derived addresses stay
//! wire-compatible with the program.

use solana_sdk::pubkey::Pubkey;

use crate::constants::{seeds, MAX_SEEDS, MAX_SEED_LEN};
use crate::error::ClientError;
use crate::graph::{EntityKind, SeedPart};

/// Derive a PDA from raw seed bytes, surfacing limit violations instead of
/// panicking. Same (address, bump) for the same inputs, always.
pub fn derive_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    if seeds.len() > MAX_SEEDS {
        return Err(ClientError::SeedTooLong {
            seed_len: seeds.len(),
            limit: MAX_SEEDS,
        });
    }
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(ClientError::SeedTooLong {
                seed_len: seed.len(),
                limit: MAX_SEED_LEN,
            });
        }
    }
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or(ClientError::BumpNotFound { kind: "raw seeds" })
}

/// Derive an entity address from the graph's seed template and the address
/// inputs it consumes, in template order.
///
/// The typed `find_*` helpers below are the ergonomic surface; this entry
/// point exists so the resolver and tests derive through the same table.
pub fn derive_entity(
    kind: EntityKind,
    inputs: &[&Pubkey],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    let template = kind.seed_template();
    let expected = kind.address_input_count();
    if inputs.len() != expected {
        return Err(ClientError::SeedMaterialMismatch {
            kind: kind.name(),
            expected,
            got: inputs.len(),
        });
    }
    let mut seed_bytes: Vec<&[u8]> = Vec::with_capacity(template.len());
    let mut next_input = inputs.iter();
    for part in template {
        match part {
            SeedPart::Tag(tag) => seed_bytes.push(tag),
            SeedPart::Parent(_) | SeedPart::SeedKey | SeedPart::RawPubkey => {
                let key = next_input.next().ok_or(ClientError::SeedMaterialMismatch {
                    kind: kind.name(),
                    expected,
                    got: inputs.len(),
                })?;
                seed_bytes.push(key.as_ref());
            }
        }
    }
    derive_address(&seed_bytes, program_id)
}

/// Forum authority PDA: the signing identity for program-internal transfers.
/// Seeds: the forum address alone.
pub fn find_forum_authority(forum: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[forum.as_ref()], program_id)
}

/// Forum treasury PDA, the destination for protocol fees.
pub fn find_forum_treasury(forum: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::TREASURY, forum.as_ref()], program_id)
}

/// User profile PDA for a wallet. One per owner, forum recorded on-chain.
pub fn find_user_profile(profile_owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::USER_PROFILE, profile_owner.as_ref()], program_id)
}

/// About-me PDA for a profile.
pub fn find_about_me(user_profile: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::ABOUT_ME, user_profile.as_ref()], program_id)
}

/// Question PDA. `question_seed` is the seed keypair's public half, minted at
/// creation and recoverable only from the question record afterwards.
pub fn find_question(
    forum: &Pubkey,
    user_profile: &Pubkey,
    question_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::QUESTION,
            forum.as_ref(),
            user_profile.as_ref(),
            question_seed.as_ref(),
        ],
        program_id,
    )
}

/// Answer PDA.
pub fn find_answer(
    forum: &Pubkey,
    user_profile: &Pubkey,
    answer_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::ANSWER,
            forum.as_ref(),
            user_profile.as_ref(),
            answer_seed.as_ref(),
        ],
        program_id,
    )
}

/// Comment PDA.
pub fn find_comment(
    forum: &Pubkey,
    user_profile: &Pubkey,
    comment_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::COMMENT,
            forum.as_ref(),
            user_profile.as_ref(),
            comment_seed.as_ref(),
        ],
        program_id,
    )
}

/// Big note PDA.
pub fn find_big_note(
    forum: &Pubkey,
    user_profile: &Pubkey,
    big_note_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::BIG_NOTE,
            forum.as_ref(),
            user_profile.as_ref(),
            big_note_seed.as_ref(),
        ],
        program_id,
    )
}

/// Proposed contribution PDA.
pub fn find_proposed_contribution(
    forum: &Pubkey,
    user_profile: &Pubkey,
    contribution_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::PROPOSED_CONTRIBUTION,
            forum.as_ref(),
            user_profile.as_ref(),
            contribution_seed.as_ref(),
        ],
        program_id,
    )
}

/// Challenge PDA. Challenges hang directly off the forum.
pub fn find_challenge(
    forum: &Pubkey,
    challenge_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::CHALLENGE, forum.as_ref(), challenge_seed.as_ref()],
        program_id,
    )
}

/// Submission PDA.
pub fn find_submission(
    forum: &Pubkey,
    user_profile: &Pubkey,
    submission_seed: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::SUBMISSION,
            forum.as_ref(),
            user_profile.as_ref(),
            submission_seed.as_ref(),
        ],
        program_id,
    )
}

/// Bounty escrow PDA for a question. Derived from the question address
/// alone; no chain walk needed.
pub fn find_bounty_pda(question: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::BOUNTY_PDA, question.as_ref()], program_id)
}

/// Bounty escrow PDA for a big note.
pub fn find_big_note_bounty_pda(big_note: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::BIG_NOTE_BOUNTY_PDA, big_note.as_ref()], program_id)
}

/// Verification application PDA for a big note.
pub fn find_verification_application(big_note: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::VERIFICATION_APPLICATION, big_note.as_ref()],
        program_id,
    )
}

/// Verification fee escrow PDA for a big note.
pub fn find_verification_fee_pda(big_note: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::VERIFICATION_FEE_PDA, big_note.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_id() -> Pubkey {
        crate::ID
    }

    #[test]
    fn derivation_is_deterministic() {
        let forum = Pubkey::new_unique();
        let a = find_forum_treasury(&forum, &program_id());
        let b = find_forum_treasury(&forum, &program_id());
        assert_eq!(a, b);
    }

    #[test]
    fn typed_helpers_agree_with_graph_template() {
        let forum = Pubkey::new_unique();
        let profile = Pubkey::new_unique();
        let seed = Pubkey::new_unique();

        let typed = find_question(&forum, &profile, &seed, &program_id());
        let tabled =
            derive_entity(EntityKind::Question, &[&forum, &profile, &seed], &program_id())
                .unwrap();
        assert_eq!(typed, tabled);

        let typed = find_bounty_pda(&profile, &program_id());
        let tabled = derive_entity(EntityKind::BountyPda, &[&profile], &program_id()).unwrap();
        assert_eq!(typed, tabled);

        let typed = find_forum_authority(&forum, &program_id());
        let tabled =
            derive_entity(EntityKind::ForumAuthority, &[&forum], &program_id()).unwrap();
        assert_eq!(typed, tabled);
    }

    #[test]
    fn oversized_seed_is_rejected_not_truncated() {
        let long = [7u8; 48];
        let err = derive_address(&[seeds::QUESTION, &long], &program_id()).unwrap_err();
        assert!(matches!(
            err,
            ClientError::SeedTooLong { seed_len: 48, .. }
        ));
    }

    #[test]
    fn wrong_input_arity_is_rejected() {
        let forum = Pubkey::new_unique();
        let err = derive_entity(EntityKind::Question, &[&forum], &program_id()).unwrap_err();
        assert!(matches!(err, ClientError::SeedMaterialMismatch { .. }));
    }
}
