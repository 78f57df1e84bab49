use cw_orch::environment::ChainInfoOwned;
use cw_orch::interface;
use cw_orch::prelude::*;

use cosmwasm_std::Empty;
use cw721::{NumTokensResponse, OwnerOfResponse, TokensResponse};
use cw721_base::msg::{ExecuteMsg as GenExecuteMsg, InstantiateMsg, QueryMsg as GenQueryMsg};
use cw721_base::Extension;

pub type ExecuteMsg = GenExecuteMsg<Extension, Empty>;
pub type QueryMsg = GenQueryMsg<Empty>;

pub const CONTRACT_ID: &str = "cw721_base";

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, Empty, id = CONTRACT_ID)]
pub struct Cw721Collection;

impl<Chain> Uploadable for Cw721Collection<Chain> {
    /// Return the path to the wasm file corresponding to the contract
    fn wasm(_chain: &ChainInfoOwned) -> WasmPath {
        artifacts_dir_from_workspace!()
            .find_wasm_path(CONTRACT_ID)
            .unwrap()
    }
    /// Returns a CosmWasm contract wrapper
    fn wrapper() -> Box<dyn MockContract<Empty>> {
        Box::new(
            ContractWrapper::new_with_empty(
                cw721_base::entry::execute,
                cw721_base::entry::instantiate,
                cw721_base::entry::query,
            )
            .with_migrate(cw721_base::entry::migrate),
        )
    }
}

impl<Chain: CwEnv> Cw721Collection<Chain> {
    /// Instantiates a fresh collection from the stored code id. `minter` also becomes admin.
    pub fn create(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        minter: &Addr,
    ) -> Result<Addr, CwOrchError> {
        self.instantiate(
            &InstantiateMsg {
                name: name.into(),
                symbol: symbol.into(),
                minter: minter.to_string(),
            },
            Some(minter),
            None,
        )?;
        self.address()
    }

    /// The collection's live token count.
    pub fn num_tokens(&self) -> Result<u64, CwOrchError> {
        let response: NumTokensResponse = self.query(&QueryMsg::NumTokens {})?;
        Ok(response.count)
    }

    /// Owner and unexpired approvals of a single token.
    pub fn owner_of(&self, token_id: impl Into<String>) -> Result<OwnerOfResponse, CwOrchError> {
        self.query(&QueryMsg::OwnerOf {
            token_id: token_id.into(),
            include_expired: Some(false),
        })
    }

    pub fn all_tokens(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<String>, CwOrchError> {
        let response: TokensResponse = self.query(&QueryMsg::AllTokens { start_after, limit })?;
        Ok(response.tokens)
    }

    pub fn mint(
        &self,
        token_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Chain::Response, CwOrchError> {
        self.execute(
            &ExecuteMsg::Mint {
                token_id: token_id.into(),
                owner: owner.into(),
                token_uri: None,
                extension: None,
            },
            None,
        )
    }
}
