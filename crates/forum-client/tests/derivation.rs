mod common;

use common::*;
use forum_client::pda;
use forum_client::resolver::Resolver;
use forum_client::signer::Actor;
use forum_client::ClientError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

#[test]
fn test_derivation_is_deterministic() {
    let forum = Pubkey::new_unique();
    let profile = Pubkey::new_unique();
    let seed = Pubkey::new_unique();

    let first = pda::find_question(&forum, &profile, &seed, &forum_client::ID);
    let second = pda::find_question(&forum, &profile, &seed, &forum_client::ID);
    assert_eq!(first, second, "same inputs must derive the same address");

    let other_seed = Pubkey::new_unique();
    let third = pda::find_question(&forum, &profile, &other_seed, &forum_client::ID);
    assert_ne!(first.0, third.0, "a different seed must move the address");
}

#[test]
fn test_oversized_seed_is_rejected_locally() {
    let long = [0u8; 33];
    let err = pda::derive_address(&[&long], &forum_client::ID).unwrap_err();
    assert!(
        matches!(err, ClientError::SeedTooLong { seed_len: 33, .. }),
        "expected SeedTooLong, got {err:?}"
    );
}

#[test]
fn test_seed_material_recovered_from_record_re_derives_address() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let member = Actor::from(Keypair::new());
    let (_, question) = forum_with_question(&client, &manager, &member, 50);

    // A caller holding nothing but the address can recover every derivation
    // input from the record chain.
    let mut resolver = Resolver::new(client.ledger());
    let origin = resolver.content_origin(&question).unwrap();
    let (derived, _) = pda::find_question(
        &origin.forum,
        &origin.user_profile,
        &origin.seed,
        &client.program_id(),
    );
    assert_eq!(derived, question, "recovered seed material must round-trip");
}

#[test]
fn test_escrow_addresses_hang_off_the_content_address_alone() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let member = Actor::from(Keypair::new());
    let (_, question) = forum_with_question(&client, &manager, &member, 50);

    let (bounty, _) = pda::find_bounty_pda(&question, &client.program_id());
    let fetched = client.fetch_bounty_pda(&bounty).unwrap();
    assert_eq!(
        fetched.question, question,
        "escrow derived from the question address must point back at it"
    );
}
