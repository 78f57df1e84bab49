use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use coin_flip_interface::{parse_amount, FeeParamError, FeeParams};
use cw_orch::{anyhow, prelude::*};
use network::Network;
use nft_distribution::Enumeration;
use session::login;

mod coin_flip;
mod collection;
mod credentials;
mod distribute;
mod network;
mod session;
mod transfer;
#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(author, version, about = "Operate the coin-flip contract", long_about = None)]
struct Cli {
    /// Network to connect to
    #[arg(short, long, value_enum, global = true, default_value_t = Network::Testnet)]
    network: Network,

    #[command(subcommand)]
    command: Commands,
}

/// The seven fee and bet parameters, as decimal integers.
#[derive(Args, Debug, Clone, PartialEq)]
struct FeeArgs {
    nft_fee: String,
    dev_fee: String,
    house_fee: String,
    win_multiplier: String,
    max_bet: String,
    min_bet: String,
    min_balance_fraction: String,
}

impl FeeArgs {
    fn to_params(&self) -> Result<FeeParams, FeeParamError> {
        Ok(FeeParams {
            nft_fee: parse_amount("nft_fee", &self.nft_fee)?,
            dev_fee: parse_amount("dev_fee", &self.dev_fee)?,
            house_fee: parse_amount("house_fee", &self.house_fee)?,
            win_multiplier: parse_amount("win_multiplier", &self.win_multiplier)?,
            max_bet: parse_amount("max_bet", &self.max_bet)?,
            min_bet: parse_amount("min_bet", &self.min_bet)?,
            min_balance_fraction: parse_amount(
                "min_balance_fraction",
                &self.min_balance_fraction,
            )?,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a contract binary and print its code id
    Deploy {
        account: String,
        binary_path: PathBuf,
    },
    /// Instantiate an uploaded code id with the signer as owner
    Initialize {
        owner: String,
        #[arg(value_name = "CONTRACT")]
        code_id: u64,
        #[command(flatten)]
        fees: FeeArgs,
    },
    /// Replace the fee and bet parameters
    UpdateState {
        owner: String,
        contract: String,
        #[command(flatten)]
        fees: FeeArgs,
    },
    /// Toggle the panic button, withdrawing `withdrawal_amount` to the owner
    EmergencyPanic {
        owner: String,
        contract: String,
        withdrawal_amount: String,
    },
    /// Print the contract state
    GetState { owner: String, contract: String },
    /// Withdraw the developer balance to the owner
    RetrieveDev { owner: String, contract: String },
    /// Pay the NFT balance out to holders of `nft_contract`
    RetrieveNft {
        owner: String,
        contract: String,
        nft_contract: String,
        /// List token ids in pages instead of probing "0", "1", ...
        #[arg(long)]
        page_size: Option<u32>,
        /// Stop with an error once this index is passed
        #[arg(long)]
        max_index: Option<u64>,
    },
    /// Deposit funds into the caller's playing balance
    Deposit {
        account: String,
        contract: String,
        amount: String,
    },
    /// Bet out of the deposited balance
    Play {
        account: String,
        contract: String,
        /// "true" or "false"
        choice: String,
        bet_size: String,
    },
    /// Instantiate a cw721 collection with the signer as minter
    InitNft {
        owner: String,
        code_id: u64,
        name: String,
        symbol: String,
    },
    /// Mint `token_id` to `receiver`
    MintNft {
        minter: String,
        nft_contract: String,
        receiver: String,
        token_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok(); // Used to load the `.env` file if any
    dotenv::from_filename(".env.keys").ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    run(cli.network, cli.command)
}

fn run(network: Network, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Deploy {
            account,
            binary_path,
        } => {
            orch_interface::coin_flip::use_wasm_at(binary_path)?;
            let session = login(network, &account)?;

            let code_id = session.coin_flip().deploy()?;
            println!("{code_id}");
        }
        Commands::Initialize {
            owner,
            code_id,
            fees,
        } => {
            let fees = fees.to_params()?;
            let session = login(network, &owner)?;

            let address = session
                .coin_flip()
                .initialize(code_id, &session.account, fees)?;
            println!("{address}");
        }
        Commands::UpdateState {
            owner,
            contract,
            fees,
        } => {
            let fees = fees.to_params()?;
            let session = login(network, &owner)?;

            let response = session.coin_flip_at(&contract).update_contract(fees)?;
            println!("{response:#?}");
        }
        Commands::EmergencyPanic {
            owner,
            contract,
            withdrawal_amount,
        } => {
            let withdrawal_balance = parse_amount("withdrawal_amount", &withdrawal_amount)?;
            let session = login(network, &owner)?;

            let response = session
                .coin_flip_at(&contract)
                .emergency_panic(withdrawal_balance)?;
            println!("{response:#?}");
        }
        Commands::GetState { owner, contract } => {
            let session = login(network, &owner)?;

            let state = session.coin_flip_at(&contract).contract_state()?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Commands::RetrieveDev { owner, contract } => {
            let session = login(network, &owner)?;

            let response = session.coin_flip_at(&contract).retrieve_dev_funds()?;
            println!("{response:#?}");
        }
        Commands::RetrieveNft {
            owner,
            contract,
            nft_contract,
            page_size,
            max_index,
        } => {
            let session = login(network, &owner)?;

            let report = distribute::retrieve_nft(
                &session.coin_flip_at(&contract),
                &session.collection_at(&nft_contract),
                &session.account,
                &session.native_transfer(),
                &Enumeration {
                    page_size,
                    max_index,
                },
            )?;

            log::info!(
                "paid {} of {} per token, {} left over",
                report.total_paid()?,
                report.share.amount,
                report.share.remainder
            );
            println!("{}", report.ledger_json()?);

            if !report.failures.is_empty() {
                eprintln!("{}", serde_json::to_string(&report.failures)?);
            }
        }
        Commands::Deposit {
            account,
            contract,
            amount,
        } => {
            let amount = parse_amount("amount", &amount)?;
            let session = login(network, &account)?;

            let response = session.coin_flip_at(&contract).deposit(amount)?;
            println!("{response:#?}");
        }
        Commands::Play {
            account,
            contract,
            choice,
            bet_size,
        } => {
            let bet_type: bool = choice
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("choice must be true or false, got {:?}", choice))?;
            let bet_size = parse_amount("bet_size", &bet_size)?;
            let session = login(network, &account)?;

            let response = session.coin_flip_at(&contract).play(bet_type, bet_size)?;
            println!("{response:#?}");
        }
        Commands::InitNft {
            owner,
            code_id,
            name,
            symbol,
        } => {
            let session = login(network, &owner)?;

            let collection = orch_interface::nft_collection::Cw721Collection::new(
                session.daemon.clone(),
            );
            collection.set_code_id(code_id);
            let address = collection.create(name, symbol, &session.account)?;
            println!("{address}");
        }
        Commands::MintNft {
            minter,
            nft_contract,
            receiver,
            token_id,
        } => {
            let session = login(network, &minter)?;

            let response = session
                .collection_at(&nft_contract)
                .mint(token_id, receiver)?;
            println!("{response:#?}");
        }
    }

    Ok(())
}
