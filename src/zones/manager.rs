//! Zone manager: the arena that owns every card list.
//!
//! Each zone's cards live in exactly one `CardList` inside the `ZoneManager`.
//! Everything else, scripts included, refers to a zone through a
//! `ZoneHandle`. A script that pushes onto `Hand` therefore mutates the hand
//! itself, never a copy of it.
//!
//! Lists are ordered front-to-back: index 0 is the front (the card `Pop`
//! returns), the last index is the bottom.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// Ordered, mutable sequence of cards backing a zone.
///
/// `im::Vector` keeps front insertion and removal cheap and makes cloning a
/// whole game state O(1).
pub type CardList = Vector<EntityId>;

/// The kinds of zone a script can reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Shared by all players.
    Board,
    Hand,
    Field,
    Graveyard,
    Deck,
}

impl ZoneKind {
    /// Zones every player owns one of.
    pub const PER_PLAYER: [ZoneKind; 4] = [
        ZoneKind::Hand,
        ZoneKind::Field,
        ZoneKind::Graveyard,
        ZoneKind::Deck,
    ];

    /// Name as written in scripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneKind::Board => "Board",
            ZoneKind::Hand => "Hand",
            ZoneKind::Field => "Field",
            ZoneKind::Graveyard => "Graveyard",
            ZoneKind::Deck => "Deck",
        }
    }

    /// Whether a single instance of this zone is shared by every player.
    #[must_use]
    pub const fn is_shared(self) -> bool {
        matches!(self, ZoneKind::Board)
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to a card list owned by a `ZoneManager`.
///
/// Handles are only meaningful for the manager that minted them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneHandle(pub u32);

impl ZoneHandle {
    /// Get the raw arena index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    fn slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ZoneSlot {
    kind: ZoneKind,
    owner: Option<PlayerId>,
    cards: CardList,
}

/// Owns the card lists of every zone in a match.
///
/// ## Usage
///
/// ```
/// use ccg_script::core::{EntityId, PlayerId};
/// use ccg_script::zones::{ZoneKind, ZoneManager};
///
/// let mut zones = ZoneManager::new();
/// let hand = zones.create_zone(ZoneKind::Hand, Some(PlayerId::new(0)));
///
/// if let Some(cards) = zones.cards_mut(hand) {
///     cards.push_back(EntityId(10));
///     cards.push_front(EntityId(11));
/// }
///
/// assert_eq!(zones.cards(hand).and_then(|c| c.front()), Some(&EntityId(11)));
/// assert_eq!(zones.locate(EntityId(10)), Some(hand));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZoneManager {
    slots: Vec<ZoneSlot>,
}

impl ZoneManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new, empty zone and return its handle.
    pub fn create_zone(&mut self, kind: ZoneKind, owner: Option<PlayerId>) -> ZoneHandle {
        let handle = ZoneHandle(self.slots.len() as u32);
        self.slots.push(ZoneSlot {
            kind,
            owner,
            cards: CardList::new(),
        });
        handle
    }

    /// Cards in a zone, front first. `None` for a foreign handle.
    #[must_use]
    pub fn cards(&self, zone: ZoneHandle) -> Option<&CardList> {
        self.slots.get(zone.slot()).map(|s| &s.cards)
    }

    /// Mutable access to a zone's cards. `None` for a foreign handle.
    pub fn cards_mut(&mut self, zone: ZoneHandle) -> Option<&mut CardList> {
        self.slots.get_mut(zone.slot()).map(|s| &mut s.cards)
    }

    /// The kind of a zone, or `None` for a foreign handle.
    #[must_use]
    pub fn kind(&self, zone: ZoneHandle) -> Option<ZoneKind> {
        self.slots.get(zone.slot()).map(|s| s.kind)
    }

    /// The owner of a zone. `None` for shared zones and foreign handles.
    #[must_use]
    pub fn owner(&self, zone: ZoneHandle) -> Option<PlayerId> {
        self.slots.get(zone.slot()).and_then(|s| s.owner)
    }

    /// Find the zone currently holding a card.
    #[must_use]
    pub fn locate(&self, entity: EntityId) -> Option<ZoneHandle> {
        self.slots
            .iter()
            .position(|s| s.cards.contains(&entity))
            .map(|i| ZoneHandle(i as u32))
    }

    /// Number of zones allocated.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.slots.len()
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.slots.iter().map(|s| s.cards.len()).sum()
    }
}
