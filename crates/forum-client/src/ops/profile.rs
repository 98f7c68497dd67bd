//! User profile and about-me lifecycle, plus moderator grant/revoke.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use anchor_lang::system_program;

use crate::error::ClientError;
use crate::ledger::Ledger;
use crate::pda;
use crate::signer::{Actor, SignerSet};
use crate::state::{ContentRef, UserProfile};

use super::ForumClient;

#[derive(Debug, Clone)]
pub struct ProfileCreated {
    pub user_profile: Pubkey,
    pub user_profile_bump: u8,
    pub forum_treasury: Pubkey,
    pub signature: Signature,
}

#[derive(Debug, Clone)]
pub struct AboutMeCreated {
    pub about_me: Pubkey,
    pub about_me_bump: u8,
    pub user_profile: Pubkey,
    pub signature: Signature,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateUserProfileArgs {
    pub user_profile_bump: u8,
    pub forum_treasury_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditUserProfileArgs {
    pub user_profile_bump: u8,
    pub profile_pic_mint: Option<Pubkey>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteUserProfileArgs {
    pub user_profile_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct CreateAboutMeArgs {
    pub about_me_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct EditAboutMeArgs {
    pub about_me_bump: u8,
    pub content: ContentRef,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct DeleteAboutMeArgs {
    pub about_me_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct ModeratorArgs {
    pub user_profile_bump: u8,
}

impl<L: Ledger> ForumClient<L> {
    /// Create the profile of `profile_owner` in a forum. The profile fee is
    /// swept to the forum treasury by the program.
    pub fn create_user_profile(
        &self,
        forum: &Pubkey,
        profile_owner: &Actor,
    ) -> Result<ProfileCreated, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;

        let (user_profile, user_profile_bump) =
            pda::find_user_profile(&owner_key, &self.program_id());
        let (forum_treasury, forum_treasury_bump) =
            pda::find_forum_treasury(forum, &self.program_id());

        let accounts = vec![
            AccountMeta::new(*forum, false),
            AccountMeta::new(forum_treasury, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateUserProfileArgs {
            user_profile_bump,
            forum_treasury_bump,
        };
        let signature =
            self.submit_ix("create_user_profile", accounts, &args, &owner_key, &signers)?;

        Ok(ProfileCreated {
            user_profile,
            user_profile_bump,
            forum_treasury,
            signature,
        })
    }

    /// Update the profile picture reference on the caller's own profile.
    pub fn edit_user_profile(
        &self,
        profile_owner: &Actor,
        profile_pic_mint: Option<Pubkey>,
    ) -> Result<Signature, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, user_profile_bump) =
            pda::find_user_profile(&owner_key, &self.program_id());

        let accounts = vec![
            AccountMeta::new(user_profile, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditUserProfileArgs {
            user_profile_bump,
            profile_pic_mint,
        };
        self.submit_ix("edit_user_profile", accounts, &args, &owner_key, &signers)
    }

    /// Close the caller's profile, returning rent to `receiver`. The forum's
    /// profile counter is decremented, so the forum rides along writable.
    pub fn delete_user_profile(
        &self,
        profile_owner: &Actor,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, user_profile_bump) =
            pda::find_user_profile(&owner_key, &self.program_id());

        // The record, not the caller, knows which forum it was created under.
        let mut resolver = self.resolver();
        let profile: UserProfile = resolver.record(&user_profile)?;

        let accounts = vec![
            AccountMeta::new(profile.forum, false),
            AccountMeta::new(user_profile, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteUserProfileArgs { user_profile_bump };
        self.submit_ix("delete_user_profile", accounts, &args, &owner_key, &signers)
    }

    /// Create the about-me record attached to the caller's profile.
    pub fn create_about_me(
        &self,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<AboutMeCreated, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());
        let (about_me, about_me_bump) = pda::find_about_me(&user_profile, &self.program_id());

        let accounts = vec![
            AccountMeta::new(user_profile, false),
            AccountMeta::new(about_me, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ];
        let args = CreateAboutMeArgs {
            about_me_bump,
            content,
        };
        let signature =
            self.submit_ix("create_about_me", accounts, &args, &owner_key, &signers)?;

        Ok(AboutMeCreated {
            about_me,
            about_me_bump,
            user_profile,
            signature,
        })
    }

    /// Replace the about-me content.
    pub fn edit_about_me(
        &self,
        profile_owner: &Actor,
        content: ContentRef,
    ) -> Result<Signature, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());
        let (about_me, about_me_bump) = pda::find_about_me(&user_profile, &self.program_id());

        let accounts = vec![
            AccountMeta::new(user_profile, false),
            AccountMeta::new(about_me, false),
            AccountMeta::new(owner_key, true),
        ];
        let args = EditAboutMeArgs {
            about_me_bump,
            content,
        };
        self.submit_ix("edit_about_me", accounts, &args, &owner_key, &signers)
    }

    /// Close the about-me record, returning rent to `receiver`.
    pub fn delete_about_me(
        &self,
        profile_owner: &Actor,
        receiver: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut signers = SignerSet::new();
        let owner_key = signers.require(profile_owner)?;
        let (user_profile, _) = pda::find_user_profile(&owner_key, &self.program_id());
        let (about_me, about_me_bump) = pda::find_about_me(&user_profile, &self.program_id());

        let accounts = vec![
            AccountMeta::new(user_profile, false),
            AccountMeta::new(about_me, false),
            AccountMeta::new(owner_key, true),
            AccountMeta::new(*receiver, false),
        ];
        let args = DeleteAboutMeArgs { about_me_bump };
        self.submit_ix("delete_about_me", accounts, &args, &owner_key, &signers)
    }

    /// Grant moderator standing to a profile. Manager only.
    ///
    /// The caller supplies only the profile address; the owner is fetched
    /// from the record and the profile re-derived from that owner as a
    /// consistency check before anything is submitted.
    pub fn add_moderator(
        &self,
        manager: &Actor,
        forum: &Pubkey,
        user_profile: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.set_moderator_standing("add_moderator", manager, forum, user_profile)
    }

    /// Revoke moderator standing from a profile. Manager only.
    pub fn remove_moderator(
        &self,
        manager: &Actor,
        forum: &Pubkey,
        user_profile: &Pubkey,
    ) -> Result<Signature, ClientError> {
        self.set_moderator_standing("remove_moderator", manager, forum, user_profile)
    }

    fn set_moderator_standing(
        &self,
        name: &str,
        manager: &Actor,
        forum: &Pubkey,
        user_profile: &Pubkey,
    ) -> Result<Signature, ClientError> {
        let mut resolver = self.resolver();
        let profile: UserProfile = resolver.record(user_profile)?;
        let (_, user_profile_bump) =
            self.checked_profile(&profile.profile_owner, user_profile)?;

        let mut signers = SignerSet::new();
        let manager_key = signers.require(manager)?;

        let accounts = vec![
            AccountMeta::new_readonly(*forum, false),
            AccountMeta::new(*user_profile, false),
            AccountMeta::new_readonly(profile.profile_owner, false),
            AccountMeta::new(manager_key, true),
        ];
        let args = ModeratorArgs { user_profile_bump };
        self.submit_ix(name, accounts, &args, &manager_key, &signers)
    }
}
