//! Dependency resolution: recover the seed material of any ancestor from one
//! known descendant address.
//!
//! Each operation gets a fresh resolver. Every fetched account is cached for
//! the life of the call, so a chain walk issues exactly one remote read per
//! hop and never refetches an address it has already seen. A missing hop is
//! fatal to the whole operation; there is no partial-progress checkpoint.

use std::collections::HashMap;

use anchor_lang::{AccountDeserialize, Discriminator};
use solana_sdk::pubkey::Pubkey;
use tracing::trace;

use crate::error::ClientError;
use crate::graph::{EntityKind, ParentEdge};
use crate::ledger::{decode_record, AccountData, Ledger};
use crate::state::{Answer, BigNote, Comment, ProposedContribution, Question};

/// The seed material shared by every content entity: the forum and authoring
/// profile it was created under, plus the seed key minted at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentOrigin {
    pub forum: Pubkey,
    pub user_profile: Pubkey,
    pub seed: Pubkey,
}

/// A content record of a kind learned only by fetching it.
#[derive(Debug, Clone)]
pub enum ContentRecord {
    Question(Question),
    Answer(Answer),
    Comment(Comment),
    BigNote(BigNote),
    ProposedContribution(ProposedContribution),
}

impl ContentRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            ContentRecord::Question(_) => EntityKind::Question,
            ContentRecord::Answer(_) => EntityKind::Answer,
            ContentRecord::Comment(_) => EntityKind::Comment,
            ContentRecord::BigNote(_) => EntityKind::BigNote,
            ContentRecord::ProposedContribution(_) => EntityKind::ProposedContribution,
        }
    }

    pub fn user_profile(&self) -> Pubkey {
        match self {
            ContentRecord::Question(q) => q.user_profile,
            ContentRecord::Answer(a) => a.user_profile,
            ContentRecord::Comment(c) => c.user_profile,
            ContentRecord::BigNote(n) => n.user_profile,
            ContentRecord::ProposedContribution(p) => p.user_profile,
        }
    }

    pub fn seed(&self) -> Pubkey {
        match self {
            ContentRecord::Question(q) => q.question_seed,
            ContentRecord::Answer(a) => a.answer_seed,
            ContentRecord::Comment(c) => c.comment_seed,
            ContentRecord::BigNote(n) => n.big_note_seed,
            ContentRecord::ProposedContribution(p) => p.contribution_seed,
        }
    }

    /// The inline forum reference, for kinds whose graph edge is
    /// `ParentEdge::None`.
    pub fn forum(&self) -> Option<Pubkey> {
        match self {
            ContentRecord::Question(q) => Some(q.forum),
            ContentRecord::BigNote(n) => Some(n.forum),
            ContentRecord::Answer(_)
            | ContentRecord::Comment(_)
            | ContentRecord::ProposedContribution(_) => None,
        }
    }

    /// The parent back-reference, for kinds whose graph edge points at
    /// another record.
    pub fn parent(&self) -> Option<Pubkey> {
        match self {
            ContentRecord::Question(_) | ContentRecord::BigNote(_) => None,
            ContentRecord::Answer(a) => Some(a.question),
            ContentRecord::Comment(c) => Some(c.commented_on),
            ContentRecord::ProposedContribution(p) => Some(p.big_note),
        }
    }
}

/// One operation's view of the ledger: chained reads with a per-call cache.
pub struct Resolver<'a, L: Ledger + ?Sized> {
    ledger: &'a L,
    cache: HashMap<Pubkey, AccountData>,
    reads: usize,
}

impl<'a, L: Ledger + ?Sized> Resolver<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Resolver {
            ledger,
            cache: HashMap::new(),
            reads: 0,
        }
    }

    /// Remote reads issued so far in this call.
    pub fn reads(&self) -> usize {
        self.reads
    }

    fn fetch(&mut self, address: &Pubkey) -> Result<AccountData, ClientError> {
        if let Some(account) = self.cache.get(address) {
            return Ok(account.clone());
        }
        let account = self
            .ledger
            .fetch_raw(address)?
            .ok_or(ClientError::AccountNotFound { address: *address })?;
        self.reads += 1;
        trace!(address = %address, hop = self.reads, "resolver fetched account");
        self.cache.insert(*address, account.clone());
        Ok(account)
    }

    /// Fetch and decode one typed record.
    pub fn record<T>(&mut self, address: &Pubkey) -> Result<T, ClientError>
    where
        T: AccountDeserialize + Discriminator,
    {
        let account = self.fetch(address)?;
        decode_record(address, &account.data)
    }

    /// Fetch a content account and learn its kind from the discriminator.
    pub fn content_record(&mut self, address: &Pubkey) -> Result<ContentRecord, ClientError> {
        let account = self.fetch(address)?;
        let data = &account.data;
        if data.len() >= 8 {
            if data[..8] == Question::DISCRIMINATOR[..8] {
                return Ok(ContentRecord::Question(decode_record(address, data)?));
            }
            if data[..8] == Answer::DISCRIMINATOR[..8] {
                return Ok(ContentRecord::Answer(decode_record(address, data)?));
            }
            if data[..8] == Comment::DISCRIMINATOR[..8] {
                return Ok(ContentRecord::Comment(decode_record(address, data)?));
            }
            if data[..8] == BigNote::DISCRIMINATOR[..8] {
                return Ok(ContentRecord::BigNote(decode_record(address, data)?));
            }
            if data[..8] == ProposedContribution::DISCRIMINATOR[..8] {
                return Ok(ContentRecord::ProposedContribution(decode_record(
                    address, data,
                )?));
            }
        }
        Err(ClientError::UnexpectedRecordKind {
            address: *address,
            expected: "content",
        })
    }

    /// Walk parent references until a record carrying its forum inline is
    /// reached. The walk is driven by the entity graph's parent edges and
    /// bounded by its deepest chain.
    pub fn forum_of_content(&mut self, address: &Pubkey) -> Result<Pubkey, ClientError> {
        let mut current = *address;
        for _ in 0..EntityKind::Comment.max_resolution_hops() {
            let record = self.content_record(&current)?;
            match record.kind().parent_edge() {
                ParentEdge::None => {
                    return record.forum().ok_or(ClientError::UnexpectedRecordKind {
                        address: current,
                        expected: "content with an inline forum reference",
                    });
                }
                ParentEdge::Fixed(_) | ParentEdge::AnyContent => {
                    current = record.parent().ok_or(ClientError::UnexpectedRecordKind {
                        address: current,
                        expected: "content with a parent reference",
                    })?;
                }
            }
        }
        // Deeper than the graph allows: a comment chained onto comments, or
        // a corrupted parent reference.
        Err(ClientError::UnexpectedRecordKind {
            address: current,
            expected: "content with an inline forum reference",
        })
    }

    /// Resolve the full seed material of a content entity from its address.
    pub fn content_origin(&mut self, address: &Pubkey) -> Result<ContentOrigin, ClientError> {
        let record = self.content_record(address)?;
        let forum = match record.forum() {
            Some(forum) => forum,
            None => {
                let parent = record.parent().ok_or(ClientError::UnexpectedRecordKind {
                    address: *address,
                    expected: "content with a parent reference",
                })?;
                self.forum_of_content(&parent)?
            }
        };
        Ok(ContentOrigin {
            forum,
            user_profile: record.user_profile(),
            seed: record.seed(),
        })
    }
}
