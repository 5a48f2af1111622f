//! Reference match state.
//!
//! `GameState` owns every zone of a match in a `ZoneManager` and implements
//! `GameContext`, so it can be handed straight to the evaluator. Hosts with
//! their own state model implement the trait themselves instead.
//!
//! Layout per match:
//! - one shared Board
//! - per player: Hand, Field, Graveyard, Deck

use rustc_hash::FxHashMap;

use super::config::MatchConfig;
use super::entity::EntityId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::CardInstance;
use crate::script::GameContext;
use crate::zones::{CardList, ZoneHandle, ZoneKind, ZoneManager};

/// Zone handles belonging to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerZones {
    pub hand: ZoneHandle,
    pub field: ZoneHandle,
    pub graveyard: ZoneHandle,
    pub deck: ZoneHandle,
}

impl PlayerZones {
    fn get(&self, kind: ZoneKind) -> Option<ZoneHandle> {
        match kind {
            ZoneKind::Hand => Some(self.hand),
            ZoneKind::Field => Some(self.field),
            ZoneKind::Graveyard => Some(self.graveyard),
            ZoneKind::Deck => Some(self.deck),
            ZoneKind::Board => None,
        }
    }
}

/// Complete match state: zones, cards, active player, RNG.
#[derive(Clone, Debug)]
pub struct GameState {
    active_player: PlayerId,
    zones: ZoneManager,
    board: ZoneHandle,
    player_zones: PlayerMap<PlayerZones>,
    cards: FxHashMap<EntityId, CardInstance>,
    rng: GameRng,
    next_entity_id: EntityId,
}

impl GameState {
    /// Create a match with `player_count` players and an RNG seed.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self::from_config(&MatchConfig::new(player_count).with_seed(seed))
    }

    /// Create a match from configuration.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        let mut zones = ZoneManager::new();
        let board = zones.create_zone(ZoneKind::Board, None);
        let player_zones = PlayerMap::new(config.player_count, |player| PlayerZones {
            hand: zones.create_zone(ZoneKind::Hand, Some(player)),
            field: zones.create_zone(ZoneKind::Field, Some(player)),
            graveyard: zones.create_zone(ZoneKind::Graveyard, Some(player)),
            deck: zones.create_zone(ZoneKind::Deck, Some(player)),
        });

        Self {
            active_player: PlayerId::new(0),
            zones,
            board,
            player_zones,
            cards: FxHashMap::default(),
            rng: GameRng::new(config.seed),
            next_entity_id: EntityId::new(1),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_zones.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Set the active player.
    pub fn set_active_player(&mut self, player: PlayerId) {
        assert!(player.index() < self.player_count(), "No such player: {player}");
        self.active_player = player;
    }

    /// Hand the turn to the next player in seat order.
    pub fn pass_turn(&mut self) {
        self.active_player = self.active_player.next(self.player_count());
    }

    // === Zones ===

    /// Handle of a player's zone (or the board).
    #[must_use]
    pub fn zone_handle(&self, kind: ZoneKind, player: PlayerId) -> ZoneHandle {
        self.player_zones[player].get(kind).unwrap_or(self.board)
    }

    /// Snapshot of a player's zone (or the board), front first.
    ///
    /// `CardList` is persistent, so the copy is O(1) and later mutations of
    /// the zone do not show through it.
    #[must_use]
    pub fn zone_cards(&self, kind: ZoneKind, player: PlayerId) -> CardList {
        self.zones
            .cards(self.zone_handle(kind, player))
            .cloned()
            .unwrap_or_default()
    }

    /// Handles of a player's zones.
    #[must_use]
    pub fn player_zones(&self, player: PlayerId) -> &PlayerZones {
        &self.player_zones[player]
    }

    /// The shared board.
    #[must_use]
    pub fn board(&self) -> ZoneHandle {
        self.board
    }

    /// The zone manager.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    // === Cards ===

    /// Create a card owned by `owner` and append it to the bottom of a zone.
    pub fn spawn_card(
        &mut self,
        name: impl Into<String>,
        owner: PlayerId,
        kind: ZoneKind,
    ) -> EntityId {
        self.spawn_instance(CardInstance::new(self.next_entity_id, name, owner), kind, owner)
    }

    /// Create a card with no owner and append it to the board.
    pub fn spawn_neutral(&mut self, name: impl Into<String>) -> EntityId {
        let card = CardInstance::neutral(self.next_entity_id, name);
        self.place(card, self.board)
    }

    /// Create a card with power set.
    pub fn spawn_unit(
        &mut self,
        name: impl Into<String>,
        owner: PlayerId,
        kind: ZoneKind,
        power: i64,
    ) -> EntityId {
        let card = CardInstance::new(self.next_entity_id, name, owner).with_power(power);
        self.spawn_instance(card, kind, owner)
    }

    fn spawn_instance(&mut self, card: CardInstance, kind: ZoneKind, owner: PlayerId) -> EntityId {
        let zone = self.zone_handle(kind, owner);
        self.place(card, zone)
    }

    fn place(&mut self, card: CardInstance, zone: ZoneHandle) -> EntityId {
        let id = card.entity_id;
        self.next_entity_id = id.next();
        // Every handle in `player_zones` and `board` was minted by `self.zones`.
        if let Some(cards) = self.zones.cards_mut(zone) {
            cards.push_back(id);
        }
        self.cards.insert(id, card);
        id
    }

    /// Get a card instance.
    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Get a mutable card instance.
    pub fn card_mut(&mut self, id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Find which zone currently holds a card.
    #[must_use]
    pub fn locate(&self, id: EntityId) -> Option<ZoneHandle> {
        self.zones.locate(id)
    }
}

impl GameContext for GameState {
    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn player(&self, number: i64) -> Option<PlayerId> {
        PlayerId::from_number(number, self.player_count())
    }

    fn zone(&self, kind: ZoneKind, player: PlayerId) -> ZoneHandle {
        self.zone_handle(kind, player)
    }

    fn cards(&self, zone: ZoneHandle) -> Option<&CardList> {
        self.zones.cards(zone)
    }

    fn cards_mut(&mut self, zone: ZoneHandle) -> Option<&mut CardList> {
        self.zones.cards_mut(zone)
    }

    fn rng(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}
