mod common;

use common::*;
use forum_client::signer::Actor;
use forum_client::state::ContentRef;
use forum_client::ClientError;
use solana_sdk::signature::Keypair;

#[test]
fn test_moderator_edit_without_standing_is_submitted_and_rejected() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let author = Actor::from(Keypair::new());
    let bystander = Actor::from(Keypair::new());
    let (forum, question) = forum_with_question(&client, &manager, &author, 10);
    client.create_user_profile(&forum, &bystander).unwrap();

    let submissions_before = client.ledger().submission_count();

    // Standing is program state, not client state: the operation assembles
    // and submits, and the program refuses it.
    let err = client
        .edit_question_moderator(
            &bystander,
            &question,
            "cleaned up".to_string(),
            vec![],
            ContentRef::inline("tidy"),
        )
        .unwrap_err();

    assert!(
        matches!(err, ClientError::RemoteRejection { .. }),
        "expected the program's refusal, got {err:?}"
    );
    assert_eq!(
        client.ledger().submission_count(),
        submissions_before + 1,
        "the instruction must actually have been submitted"
    );
    assert_eq!(
        client.fetch_question(&question).unwrap().title,
        "How do PDAs work?",
        "a rejected edit leaves the record untouched"
    );
}

#[test]
fn test_moderator_edit_with_standing_succeeds() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let author = Actor::from(Keypair::new());
    let moderator = Actor::from(Keypair::new());
    let (forum, question) = forum_with_question(&client, &manager, &author, 10);
    let mod_profile = client.create_user_profile(&forum, &moderator).unwrap();
    client
        .add_moderator(&manager, &forum, &mod_profile.user_profile)
        .unwrap();

    client
        .edit_question_moderator(
            &moderator,
            &question,
            "cleaned up".to_string(),
            vec![],
            ContentRef::inline("tidy"),
        )
        .unwrap();

    assert_eq!(client.fetch_question(&question).unwrap().title, "cleaned up");
}

#[test]
fn test_moderator_delete_removes_question_and_escrow() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let author = Actor::from(Keypair::new());
    let moderator = Actor::from(Keypair::new());
    let (forum, question) = forum_with_question(&client, &manager, &author, 10);
    let mod_profile = client.create_user_profile(&forum, &moderator).unwrap();
    client
        .add_moderator(&manager, &forum, &mod_profile.user_profile)
        .unwrap();

    client
        .delete_question_moderator(&moderator, &question, &moderator.address())
        .unwrap();

    let err = client.fetch_question(&question).unwrap_err();
    assert!(
        matches!(err, ClientError::AccountNotFound { address } if address == question),
        "deleted question must be gone, got {err:?}"
    );
    let (bounty_pda, _) =
        forum_client::pda::find_bounty_pda(&question, &client.program_id());
    let err = client.fetch_bounty_pda(&bounty_pda).unwrap_err();
    assert!(
        matches!(err, ClientError::AccountNotFound { .. }),
        "escrow closes with its question, got {err:?}"
    );
}

#[test]
fn test_revoked_moderator_loses_the_variant() {
    let client = setup();
    let manager = Actor::from(Keypair::new());
    let author = Actor::from(Keypair::new());
    let moderator = Actor::from(Keypair::new());
    let (forum, question) = forum_with_question(&client, &manager, &author, 10);
    let mod_profile = client.create_user_profile(&forum, &moderator).unwrap();
    client
        .add_moderator(&manager, &forum, &mod_profile.user_profile)
        .unwrap();
    client
        .remove_moderator(&manager, &forum, &mod_profile.user_profile)
        .unwrap();

    let err = client
        .edit_question_moderator(
            &moderator,
            &question,
            "nope".to_string(),
            vec![],
            ContentRef::inline("nope"),
        )
        .unwrap_err();
    assert!(matches!(err, ClientError::RemoteRejection { .. }));
}
