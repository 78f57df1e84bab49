use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_schema::cw_serde;
use itertools::Itertools;

use crate::DistributionError;

/// One token of the collection and the account holding it.
#[cw_serde]
pub struct HolderRecord {
    pub token_id: String,
    pub owner_id: String,
    /// Approved spender -> approval id. Non-empty while the token is listed or delegated.
    #[serde(default)]
    pub approved_account_ids: BTreeMap<String, u64>,
}

impl HolderRecord {
    pub fn new(token_id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        HolderRecord {
            token_id: token_id.into(),
            owner_id: owner_id.into(),
            approved_account_ids: BTreeMap::new(),
        }
    }

    pub fn is_listed(&self) -> bool {
        !self.approved_account_ids.is_empty()
    }
}

/// Read-only view of an NFT collection.
pub trait TokenLookup {
    /// Number of live tokens reported by the collection.
    fn total_supply(&self) -> anyhow::Result<u64>;

    /// Looks up a single token. `None` means nothing is minted under `token_id`.
    fn token(&self, token_id: &str) -> anyhow::Result<Option<HolderRecord>>;

    /// Lists token ids in the collection's own order.
    fn token_ids(&self, start_after: Option<String>, limit: u32) -> anyhow::Result<Vec<String>>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// List ids in pages of this size instead of probing sequential indices.
    pub page_size: Option<u32>,
    /// Give up once this index (or listing position, when paging) is passed.
    pub max_index: Option<u64>,
}

/// Collects one record per live token until `total_supply` records are found.
pub fn enumerate_holders<L: TokenLookup + ?Sized>(
    lookup: &L,
    total_supply: u64,
    options: &Enumeration,
) -> Result<Vec<HolderRecord>, DistributionError> {
    match options.page_size {
        Some(page_size) => enumerate_paged(lookup, total_supply, page_size.max(1), options.max_index),
        None => enumerate_by_index(lookup, total_supply, options.max_index),
    }
}

/// Probes ids "0", "1", ... Gaps (burned or never minted) advance the cursor but not the count.
fn enumerate_by_index<L: TokenLookup + ?Sized>(
    lookup: &L,
    total_supply: u64,
    max_index: Option<u64>,
) -> Result<Vec<HolderRecord>, DistributionError> {
    let mut holders = Vec::new();
    let mut index = 0u64;

    while (holders.len() as u64) < total_supply {
        if let Some(max_index) = max_index {
            if index > max_index {
                return Err(DistributionError::EnumerationIncomplete {
                    max_index,
                    found: holders.len() as u64,
                    total_supply,
                });
            }
        }

        log::debug!("{}/{} found, probing token {}", holders.len(), total_supply, index);
        match lookup.token(&index.to_string())? {
            Some(record) => holders.push(record),
            None => log::debug!("no token at index {}", index),
        }
        index += 1;
    }

    Ok(holders)
}

fn enumerate_paged<L: TokenLookup + ?Sized>(
    lookup: &L,
    total_supply: u64,
    page_size: u32,
    max_index: Option<u64>,
) -> Result<Vec<HolderRecord>, DistributionError> {
    let mut holders = Vec::new();
    let mut seen = BTreeSet::new();
    let mut start_after: Option<String> = None;
    let mut position = 0u64;

    'pages: while (holders.len() as u64) < total_supply {
        let page = lookup.token_ids(start_after.take(), page_size)?;
        let Some(last) = page.last().cloned() else {
            log::warn!(
                "collection listing ended with {} of {} tokens found",
                holders.len(),
                total_supply
            );
            break;
        };

        for token_id in page {
            if (holders.len() as u64) >= total_supply {
                break 'pages;
            }
            if let Some(max_index) = max_index {
                if position > max_index {
                    return Err(DistributionError::EnumerationIncomplete {
                        max_index,
                        found: holders.len() as u64,
                        total_supply,
                    });
                }
            }
            position += 1;

            if !seen.insert(token_id.clone()) {
                continue;
            }
            if let Some(record) = lookup.token(&token_id)? {
                holders.push(record);
            }
        }

        start_after = Some(last);
    }

    Ok(holders)
}

/// Drops every holder whose token carries an approval, keeping the original order.
pub fn eligible_holders(holders: Vec<HolderRecord>) -> Vec<HolderRecord> {
    let (listed, eligible): (Vec<_>, Vec<_>) =
        holders.into_iter().partition(HolderRecord::is_listed);

    if !listed.is_empty() {
        log::info!(
            "skipping {} listed tokens: {}",
            listed.len(),
            listed.iter().map(|holder| &holder.token_id).join(", ")
        );
    }

    eligible
}
