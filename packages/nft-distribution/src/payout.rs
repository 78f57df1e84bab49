use cosmwasm_schema::cw_serde;
use cosmwasm_std::{OverflowError, Uint128};

use crate::{equal_share, DistributionError, HolderRecord, Share};

/// Native-token payment from the operator account.
pub trait Transfer {
    /// Sends `amount` to `recipient` and returns the transaction hash.
    fn transfer(&self, recipient: &str, amount: Uint128) -> anyhow::Result<String>;
}

#[cw_serde]
pub struct LedgerEntry {
    pub owner_id: String,
    #[serde(rename = "nft_id")]
    pub token_id: String,
    pub transfer_value: Uint128,
    pub receipt: String,
}

#[cw_serde]
pub struct FailedTransfer {
    pub owner_id: String,
    #[serde(rename = "nft_id")]
    pub token_id: String,
    pub error: String,
}

#[cw_serde]
pub struct PayoutReport {
    pub share: Share,
    pub ledger: Vec<LedgerEntry>,
    pub failures: Vec<FailedTransfer>,
}

impl PayoutReport {
    pub fn total_paid(&self) -> Result<Uint128, OverflowError> {
        self.ledger
            .iter()
            .try_fold(Uint128::zero(), |accumulator, entry| {
                accumulator.checked_add(entry.transfer_value)
            })
    }

    /// The ledger as a single JSON array.
    pub fn ledger_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.ledger)
    }
}

/// Pays every holder an equal share of `balance`, one transfer at a time.
///
/// A failed transfer is logged and skipped; it is never retried and does not stop the batch.
/// There is no checkpoint, so running this again pays again.
pub fn distribute<T: Transfer + ?Sized>(
    transfer: &T,
    holders: &[HolderRecord],
    balance: Uint128,
) -> Result<PayoutReport, DistributionError> {
    let share = equal_share(balance, holders.len())?;
    let mut ledger = Vec::with_capacity(holders.len());
    let mut failures = vec![];

    if share.amount.is_zero() {
        log::warn!(
            "balance {} is smaller than the {} eligible holders, nothing to send",
            balance,
            holders.len()
        );
        return Ok(PayoutReport {
            share,
            ledger,
            failures,
        });
    }

    for (position, holder) in holders.iter().enumerate() {
        log::info!(
            "{}/{}: token {} -> {}",
            position + 1,
            holders.len(),
            holder.token_id,
            holder.owner_id
        );

        match transfer.transfer(&holder.owner_id, share.amount) {
            Ok(receipt) => ledger.push(LedgerEntry {
                owner_id: holder.owner_id.clone(),
                token_id: holder.token_id.clone(),
                transfer_value: share.amount,
                receipt,
            }),
            Err(err) => {
                log::error!(
                    "transfer of {} to {} for token {} failed: {:?}",
                    share.amount,
                    holder.owner_id,
                    holder.token_id,
                    err
                );
                log::error!(
                    "ledger so far: {}",
                    serde_json::to_string(&ledger).unwrap_or_default()
                );
                failures.push(FailedTransfer {
                    owner_id: holder.owner_id.clone(),
                    token_id: holder.token_id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(PayoutReport {
        share,
        ledger,
        failures,
    })
}
