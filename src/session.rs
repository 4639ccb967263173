//! One battle at a time, shared between concurrent request handlers.
//!
//! `BattleSession` owns the live `BattleState` behind a mutex. Every
//! operation that reads or mutates it holds the lock for the whole
//! check-then-act, so two submissions racing for the same turn resolve as
//! one success and one `NotYourTurn`.

use crate::battle::engine;
use crate::battle::snapshot::BattleSnapshot;
use crate::battle::state::{BattleRules, BattleState, PlayerAction};
use crate::catalog::CreatureCatalog;
use crate::config::ServerConfig;
use crate::errors::{SessionError, SessionResult};
use crate::party::{build_party, PartyId, RosterPolicy};
use schema::CreatureStats;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct SessionSlot {
    battle: Option<BattleState>,
    battles_started: u64,
}

pub struct BattleSession {
    catalog: Arc<dyn CreatureCatalog>,
    rules: BattleRules,
    roster_policy: RosterPolicy,
    slot: Mutex<SessionSlot>,
}

impl BattleSession {
    pub fn new(
        catalog: Arc<dyn CreatureCatalog>,
        rules: BattleRules,
        roster_policy: RosterPolicy,
    ) -> Self {
        Self {
            catalog,
            rules,
            roster_policy,
            slot: Mutex::new(SessionSlot::default()),
        }
    }

    pub fn from_config(config: &ServerConfig, catalog: Arc<dyn CreatureCatalog>) -> Self {
        Self::new(catalog, config.rules, config.roster_policy)
    }

    pub fn rules(&self) -> BattleRules {
        self.rules
    }

    pub fn roster_policy(&self) -> RosterPolicy {
        self.roster_policy
    }

    /// Builds both parties and replaces any existing battle with a new one
    /// at turn 1. A roster failure leaves the current battle in place.
    pub fn start_battle(
        &self,
        player1_roster: &[String],
        player2_roster: &[String],
    ) -> SessionResult<BattleSnapshot> {
        let player1 = build_party(
            self.catalog.as_ref(),
            PartyId::Player1,
            PartyId::Player1.default_display_name(),
            player1_roster,
            self.roster_policy,
        )?;
        let player2 = build_party(
            self.catalog.as_ref(),
            PartyId::Player2,
            PartyId::Player2.default_display_name(),
            player2_roster,
            self.roster_policy,
        )?;

        let mut slot = self.lock()?;
        slot.battles_started += 1;
        let battle_id = format!("battle-{}", slot.battles_started);
        let state = BattleState::new(battle_id.clone(), player1, player2, self.rules);
        let snapshot = BattleSnapshot::from(&state);
        if let Some(previous) = slot.battle.replace(state) {
            tracing::info!(previous = %previous.battle_id, "replacing active battle");
        }

        tracing::info!(
            battle = %battle_id,
            player1 = ?player1_roster,
            player2 = ?player2_roster,
            "battle started"
        );
        Ok(snapshot)
    }

    /// Parses the wire tags and submits the action. Unknown parties and
    /// actions are rejected before the battle is touched.
    pub fn submit_action(&self, party: &str, action: &str) -> SessionResult<BattleSnapshot> {
        let party: PartyId = party.parse()?;
        let action: PlayerAction = action.parse()?;
        self.submit(party, action)
    }

    pub fn submit(&self, party: PartyId, action: PlayerAction) -> SessionResult<BattleSnapshot> {
        let mut slot = self.lock()?;
        let state = slot.battle.as_mut().ok_or(SessionError::NoActiveBattle)?;

        match engine::submit_action(state, party, action) {
            Ok(_) => Ok(BattleSnapshot::from(&*state)),
            Err(err) => {
                tracing::warn!(
                    battle = %state.battle_id,
                    party = %party,
                    action = %action,
                    error = %err,
                    "action rejected"
                );
                Err(err.into())
            }
        }
    }

    pub fn get_state(&self) -> SessionResult<BattleSnapshot> {
        let slot = self.lock()?;
        slot.battle
            .as_ref()
            .map(BattleSnapshot::from)
            .ok_or(SessionError::NoActiveBattle)
    }

    /// Runs `f` against the live battle under the session lock.
    pub fn with_state<T>(&self, f: impl FnOnce(&BattleState) -> T) -> SessionResult<T> {
        let slot = self.lock()?;
        slot.battle.as_ref().map(f).ok_or(SessionError::NoActiveBattle)
    }

    pub fn lookup_creature(&self, identifier: &str) -> SessionResult<CreatureStats> {
        Ok(self.catalog.lookup(identifier)?)
    }

    fn lock(&self) -> SessionResult<MutexGuard<'_, SessionSlot>> {
        self.slot.lock().map_err(|_| SessionError::LockPoisoned)
    }
}
