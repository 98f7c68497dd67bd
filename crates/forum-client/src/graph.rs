//! Static schema of the protocol's entity kinds: which seeds each address
//! takes, and how entities chain to their parents.
//!
//! This table is the single source of truth shared by the address deriver and
//! the dependency resolver. It must stay in lockstep with the program's own
//! seed scheme; drift produces addresses the program rejects as missing at
//! submission time.

use crate::constants::seeds;

/// Every addressable entity kind in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Forum,
    ForumAuthority,
    ForumTreasury,
    UserProfile,
    AboutMe,
    Question,
    Answer,
    Comment,
    BigNote,
    ProposedContribution,
    Challenge,
    Submission,
    BountyPda,
    BigNoteBountyPda,
    VerificationApplication,
    VerificationFeePda,
}

/// One component of an entity's seed list, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPart {
    /// Literal tag bytes
    Tag(&'static [u8]),
    /// Address of the named parent entity
    Parent(EntityKind),
    /// Public half of the seed keypair minted at creation
    SeedKey,
    /// A raw pubkey that is neither a parent address nor a seed key
    /// (e.g. a profile owner's wallet)
    RawPubkey,
}

/// How an entity reaches its parent during dependency resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentEdge {
    /// No parent reference; the entity is a root or stores its origin inline
    None,
    /// Back-reference to exactly this kind
    Fixed(EntityKind),
    /// Back-reference to content of a kind only learned by fetching it
    /// (question, answer, big note or proposed contribution)
    AnyContent,
}

impl EntityKind {
    /// Required seed components, in order. Empty for `Forum`, which is a
    /// keypair-created account rather than a PDA.
    pub const fn seed_template(self) -> &'static [SeedPart] {
        match self {
            EntityKind::Forum => &[],
            EntityKind::ForumAuthority => &[SeedPart::Parent(EntityKind::Forum)],
            EntityKind::ForumTreasury => &[
                SeedPart::Tag(seeds::TREASURY),
                SeedPart::Parent(EntityKind::Forum),
            ],
            EntityKind::UserProfile => {
                &[SeedPart::Tag(seeds::USER_PROFILE), SeedPart::RawPubkey]
            }
            EntityKind::AboutMe => &[
                SeedPart::Tag(seeds::ABOUT_ME),
                SeedPart::Parent(EntityKind::UserProfile),
            ],
            EntityKind::Question => &[
                SeedPart::Tag(seeds::QUESTION),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::Answer => &[
                SeedPart::Tag(seeds::ANSWER),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::Comment => &[
                SeedPart::Tag(seeds::COMMENT),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::BigNote => &[
                SeedPart::Tag(seeds::BIG_NOTE),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::ProposedContribution => &[
                SeedPart::Tag(seeds::PROPOSED_CONTRIBUTION),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::Challenge => &[
                SeedPart::Tag(seeds::CHALLENGE),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::SeedKey,
            ],
            EntityKind::Submission => &[
                SeedPart::Tag(seeds::SUBMISSION),
                SeedPart::Parent(EntityKind::Forum),
                SeedPart::Parent(EntityKind::UserProfile),
                SeedPart::SeedKey,
            ],
            EntityKind::BountyPda => &[
                SeedPart::Tag(seeds::BOUNTY_PDA),
                SeedPart::Parent(EntityKind::Question),
            ],
            EntityKind::BigNoteBountyPda => &[
                SeedPart::Tag(seeds::BIG_NOTE_BOUNTY_PDA),
                SeedPart::Parent(EntityKind::BigNote),
            ],
            EntityKind::VerificationApplication => &[
                SeedPart::Tag(seeds::VERIFICATION_APPLICATION),
                SeedPart::Parent(EntityKind::BigNote),
            ],
            EntityKind::VerificationFeePda => &[
                SeedPart::Tag(seeds::VERIFICATION_FEE_PDA),
                SeedPart::Parent(EntityKind::BigNote),
            ],
        }
    }

    /// The parent reference stored on this kind's record.
    pub const fn parent_edge(self) -> ParentEdge {
        match self {
            EntityKind::Forum => ParentEdge::None,
            EntityKind::ForumAuthority | EntityKind::ForumTreasury => {
                ParentEdge::Fixed(EntityKind::Forum)
            }
            // A profile stores its forum inline; no chain walk is needed.
            EntityKind::UserProfile => ParentEdge::None,
            EntityKind::AboutMe => ParentEdge::Fixed(EntityKind::UserProfile),
            // Questions, big notes and challenges store their forum inline.
            EntityKind::Question | EntityKind::BigNote | EntityKind::Challenge => ParentEdge::None,
            EntityKind::Answer => ParentEdge::Fixed(EntityKind::Question),
            EntityKind::Comment => ParentEdge::AnyContent,
            EntityKind::ProposedContribution => ParentEdge::Fixed(EntityKind::BigNote),
            EntityKind::Submission => ParentEdge::Fixed(EntityKind::Challenge),
            EntityKind::BountyPda => ParentEdge::Fixed(EntityKind::Question),
            EntityKind::BigNoteBountyPda
            | EntityKind::VerificationApplication
            | EntityKind::VerificationFeePda => ParentEdge::Fixed(EntityKind::BigNote),
        }
    }

    /// Upper bound on the remote reads needed to recover this kind's forum
    /// starting from its own address. The deepest chain in the protocol is
    /// comment -> answer -> question -> forum.
    pub const fn max_resolution_hops(self) -> usize {
        match self {
            EntityKind::Forum => 1,
            // One read of the record itself; the forum is inline.
            EntityKind::ForumAuthority
            | EntityKind::ForumTreasury
            | EntityKind::UserProfile
            | EntityKind::Question
            | EntityKind::BigNote
            | EntityKind::Challenge => 1,
            EntityKind::AboutMe
            | EntityKind::Answer
            | EntityKind::ProposedContribution
            | EntityKind::Submission
            | EntityKind::BountyPda
            | EntityKind::BigNoteBountyPda
            | EntityKind::VerificationApplication
            | EntityKind::VerificationFeePda => 2,
            // Worst case: comment on an answer, then through the question.
            EntityKind::Comment => 4,
        }
    }

    /// Number of address inputs (parents, seed keys, raw pubkeys) the seed
    /// template consumes beyond its literal tags.
    pub const fn address_input_count(self) -> usize {
        let mut count = 0;
        let template = self.seed_template();
        let mut i = 0;
        while i < template.len() {
            match template[i] {
                SeedPart::Tag(_) => {}
                _ => count += 1,
            }
            i += 1;
        }
        count
    }

    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Forum => "Forum",
            EntityKind::ForumAuthority => "ForumAuthority",
            EntityKind::ForumTreasury => "ForumTreasury",
            EntityKind::UserProfile => "UserProfile",
            EntityKind::AboutMe => "AboutMe",
            EntityKind::Question => "Question",
            EntityKind::Answer => "Answer",
            EntityKind::Comment => "Comment",
            EntityKind::BigNote => "BigNote",
            EntityKind::ProposedContribution => "ProposedContribution",
            EntityKind::Challenge => "Challenge",
            EntityKind::Submission => "Submission",
            EntityKind::BountyPda => "BountyPda",
            EntityKind::BigNoteBountyPda => "BigNoteBountyPda",
            EntityKind::VerificationApplication => "VerificationApplication",
            EntityKind::VerificationFeePda => "VerificationFeePda",
        }
    }
}
