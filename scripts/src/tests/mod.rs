mod coin_flip;
mod credentials;
mod helpers;

pub(crate) const PREFIX: &str = "neutron";
pub(crate) const OWNER: &str = "ismellike";
pub(crate) const DENOM: &str = "untrn";
pub(crate) const INITIAL_BALANCE: u128 = 1_000_000;
