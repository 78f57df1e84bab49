use cw721::OwnerOfResponse;
use cw_orch::{anyhow, prelude::*};
use nft_distribution::{HolderRecord, TokenLookup};
use orch_interface::nft_collection::Cw721Collection;

/// Reads holders out of a cw721 collection.
pub struct CollectionLookup<'a, Chain> {
    collection: &'a Cw721Collection<Chain>,
}

impl<'a, Chain: CwEnv> CollectionLookup<'a, Chain> {
    pub fn new(collection: &'a Cw721Collection<Chain>) -> Self {
        CollectionLookup { collection }
    }
}

impl<Chain: CwEnv> TokenLookup for CollectionLookup<'_, Chain> {
    fn total_supply(&self) -> anyhow::Result<u64> {
        Ok(self.collection.num_tokens()?)
    }

    fn token(&self, token_id: &str) -> anyhow::Result<Option<HolderRecord>> {
        match self.collection.owner_of(token_id) {
            Ok(response) => Ok(Some(holder_record(token_id, response))),
            Err(err) if is_missing_token(&format!("{err} {err:?}")) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn token_ids(&self, start_after: Option<String>, limit: u32) -> anyhow::Result<Vec<String>> {
        Ok(self.collection.all_tokens(start_after, Some(limit))?)
    }
}

/// Approval ids are the approval's position in the owner's response.
pub fn holder_record(token_id: &str, response: OwnerOfResponse) -> HolderRecord {
    let mut record = HolderRecord::new(token_id, response.owner);
    record.approved_account_ids = response
        .approvals
        .into_iter()
        .enumerate()
        .map(|(index, approval)| (approval.spender, index as u64))
        .collect();
    record
}

/// cw721-base answers a query for an unminted id with storage's not-found error
/// for its `TokenInfo` entry. Any other failure is a real lookup error.
pub(crate) fn is_missing_token(error: &str) -> bool {
    error.contains("TokenInfo") && error.contains(" not found")
}
