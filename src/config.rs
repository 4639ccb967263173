//! Runtime configuration read from the environment.
use crate::battle::state::BattleRules;
use crate::party::RosterPolicy;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_CATALOG_PATH: &str = "data/creatures";

/// Settings shared by the demo runner and both servers.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory of creature records or a bundle file.
    pub catalog_path: PathBuf,
    pub roster_policy: RosterPolicy,
    pub rules: BattleRules,
    /// Seed for the demo's action policy. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            roster_policy: RosterPolicy::default(),
            rules: BattleRules::default(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEBAT_ADDR` - Listen address (default: 127.0.0.1:8080)
    /// - `POKEBAT_CATALOG` - Catalog directory or bundle (default: data/creatures)
    /// - `POKEBAT_ROSTER_POLICY` - `reject` or `placeholder` (default: reject)
    /// - `POKEBAT_MOVE_POWER` - Power of the canonical move (default: 40)
    /// - `POKEBAT_DEFEND_BOOST` - Boost granted by one Defend (default: 100)
    /// - `POKEBAT_DEFENSE_DIVISOR` - Mass divisor for defense (default: 10, min 1)
    /// - `POKEBAT_SEED` - Demo RNG seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(addr) = read_env::<SocketAddr>("POKEBAT_ADDR") {
            config.addr = addr;
        }
        if let Some(path) = read_env::<PathBuf>("POKEBAT_CATALOG") {
            config.catalog_path = path;
        }
        if let Some(policy) = read_env::<RosterPolicy>("POKEBAT_ROSTER_POLICY") {
            config.roster_policy = policy;
        }
        if let Some(power) = read_env::<u16>("POKEBAT_MOVE_POWER") {
            config.rules.move_power = power;
        }
        if let Some(boost) = read_env::<u16>("POKEBAT_DEFEND_BOOST") {
            config.rules.defend_boost = boost;
        }
        if let Some(divisor) = read_env::<u16>("POKEBAT_DEFENSE_DIVISOR") {
            config.rules.defense_divisor = divisor.max(1);
        }
        config.seed = read_env::<u64>("POKEBAT_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
