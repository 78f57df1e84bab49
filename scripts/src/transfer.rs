use cosmwasm_std::{coins, Coin, Uint128};
use cw_orch::{anyhow, prelude::*};
use nft_distribution::Transfer;

/// Bank sends signed by the session account.
pub struct NativeTransfer {
    daemon: Daemon,
    denom: String,
}

impl NativeTransfer {
    pub fn new(daemon: Daemon, denom: impl Into<String>) -> Self {
        NativeTransfer {
            daemon,
            denom: denom.into(),
        }
    }
}

impl Transfer for NativeTransfer {
    fn transfer(&self, recipient: &str, amount: Uint128) -> anyhow::Result<String> {
        let (recipient, funds) = bank_send_args(recipient, amount, &self.denom)?;
        let response = self
            .daemon
            .rt_handle
            .block_on(self.daemon.sender().bank_send(recipient.as_str(), funds))?;
        Ok(response.txhash)
    }
}

/// Recipient and funds of a single bank send. The chain rejects empty sends, so they fail here.
pub(crate) fn bank_send_args(
    recipient: &str,
    amount: Uint128,
    denom: &str,
) -> anyhow::Result<(Addr, Vec<Coin>)> {
    let recipient = recipient.trim();
    if recipient.is_empty() {
        anyhow::bail!("missing recipient for {} {}", amount, denom);
    }
    if amount.is_zero() {
        anyhow::bail!("refusing to send 0 {} to {}", denom, recipient);
    }

    Ok((Addr::unchecked(recipient), coins(amount.u128(), denom)))
}
