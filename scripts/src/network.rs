use cw_orch::daemon::networks::{NEUTRON_1, PION_1};
use cw_orch::environment::ChainInfo;

/// Native denomination on both networks.
pub const NATIVE_DENOM: &str = "untrn";

/// Attached to every owner-only call.
pub const ONE_UNIT_DEPOSIT: u128 = 1;

/// Computation budget handed to every transaction.
pub const GAS_BUDGET: u64 = 3_000_000;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
}

impl Network {
    pub fn chain(&self) -> ChainInfo {
        match self {
            Network::Testnet => PION_1,
            Network::Mainnet => NEUTRON_1,
        }
    }

    /// Directory name under the credential store.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn denom(&self) -> &'static str {
        NATIVE_DENOM
    }
}
