use cw_orch::{anyhow, prelude::*};
use nft_distribution::{
    distribute, eligible_holders, enumerate_holders, equal_share, Enumeration, PayoutReport,
    TokenLookup, Transfer,
};
use orch_interface::nft_collection::Cw721Collection;

use crate::{coin_flip::CoinFlip, collection::CollectionLookup};

/// Pays out the contract's NFT balance to the holders of `collection`.
///
/// The balance is pulled into `operator` first and then sent on, one transfer per
/// eligible token. Nothing is checkpointed, so a second run pays again out of
/// whatever balance has accumulated since.
pub fn retrieve_nft<Chain: CwEnv, T: Transfer + ?Sized>(
    coin_flip: &CoinFlip<Chain>,
    collection: &Cw721Collection<Chain>,
    operator: &Addr,
    transfer: &T,
    enumeration: &Enumeration,
) -> anyhow::Result<PayoutReport> {
    let lookup = CollectionLookup::new(collection);
    let total_supply = lookup.total_supply()?;
    log::info!("{} has {} tokens", collection.addr_str()?, total_supply);

    let holders = enumerate_holders(&lookup, total_supply, enumeration)?;
    let eligible = eligible_holders(holders);

    let nft_balance = coin_flip.contract_state()?.nft_balance;
    log::info!(
        "nft balance {} across {} eligible tokens",
        nft_balance,
        eligible.len()
    );
    // Both checks run before any funds leave the contract
    let share = equal_share(nft_balance, eligible.len())?;
    if share.amount.is_zero() {
        log::warn!(
            "nft balance {} is smaller than the {} eligible tokens, leaving it in the contract",
            nft_balance,
            eligible.len()
        );
        return Ok(PayoutReport {
            share,
            ledger: vec![],
            failures: vec![],
        });
    }

    coin_flip.retrieve_nft_funds(vec![operator.to_string()])?;

    let report = distribute(transfer, &eligible, nft_balance)?;
    if !report.failures.is_empty() {
        log::warn!(
            "{} of {} transfers failed",
            report.failures.len(),
            eligible.len()
        );
    }

    Ok(report)
}
