use cw_orch::{anyhow, prelude::*};
use orch_interface::nft_collection::Cw721Collection;

use crate::{
    coin_flip::CoinFlip,
    credentials::KeyStore,
    network::{Network, GAS_BUDGET},
    transfer::NativeTransfer,
};

const MIN_GAS_ENV: &str = "CW_ORCH_MIN_GAS";

/// A daemon signing as one stored account.
pub struct Session {
    pub daemon: Daemon,
    pub network: Network,
    pub account: Addr,
}

/// Opens a connection to `network` signed by the stored key of `account`.
pub fn login(network: Network, account: &str) -> anyhow::Result<Session> {
    let credential = KeyStore::from_env()?.load(network.name(), account)?;

    // An explicit setting in the environment takes precedence
    if std::env::var(MIN_GAS_ENV).is_err() {
        std::env::set_var(MIN_GAS_ENV, GAS_BUDGET.to_string());
    }

    let daemon = Daemon::builder(network.chain())
        .mnemonic(credential.mnemonic.clone())
        .build()?;
    let address = daemon.sender_addr();

    if let Some(expected) = &credential.address {
        if expected != address.as_str() {
            anyhow::bail!(
                "key for {} derives {}, expected {}",
                account,
                address,
                expected
            );
        }
    }

    log::info!("signing as {} ({}) on {}", account, address, network.name());

    Ok(Session {
        daemon,
        network,
        account: address,
    })
}

impl Session {
    pub fn coin_flip(&self) -> CoinFlip<Daemon> {
        CoinFlip::new(self.daemon.clone(), self.network.denom())
    }

    /// The coin-flip contract deployed at `contract`. The address is not validated.
    pub fn coin_flip_at(&self, contract: &str) -> CoinFlip<Daemon> {
        CoinFlip::at(
            self.daemon.clone(),
            self.network.denom(),
            &Addr::unchecked(contract),
        )
    }

    pub fn collection_at(&self, nft_contract: &str) -> Cw721Collection<Daemon> {
        let collection = Cw721Collection::new(self.daemon.clone());
        collection.set_address(&Addr::unchecked(nft_contract));
        collection
    }

    pub fn native_transfer(&self) -> NativeTransfer {
        NativeTransfer::new(self.daemon.clone(), self.network.denom())
    }
}
