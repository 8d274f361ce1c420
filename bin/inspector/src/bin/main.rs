use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use config::NetworkType;
use inspector::{block_scope, check_allowance, check_balance, config::Config, inspect_token};
use std::path::Path;
use token::Erc20;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "erc20", version, about = "Inspect ERC-20 tokens over JSON-RPC")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// RPC endpoint, overrides the configured one
    #[arg(long, env = "ERC20_RPC_URL")]
    rpc_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show name, symbol, decimals and total supply
    Info { token: String },
    /// Balance of a holder
    Balance {
        token: String,
        holder: Address,
        #[arg(long)]
        block: Option<u64>,
    },
    /// Remaining allowance of a spender
    Allowance {
        token: String,
        owner: Address,
        spender: Address,
        #[arg(long)]
        block: Option<u64>,
    },
    /// Calldata for transfer(to, amount), amount in token units
    EncodeTransfer {
        token: String,
        to: Address,
        amount: String,
    },
    /// Calldata for approve(spender, amount), amount in token units
    EncodeApprove {
        token: String,
        spender: Address,
        amount: String,
    },
}

impl Command {
    fn token(&self) -> &str {
        match self {
            Self::Info { token }
            | Self::Balance { token, .. }
            | Self::Allowance { token, .. }
            | Self::EncodeTransfer { token, .. }
            | Self::EncodeApprove { token, .. } => token,
        }
    }
}

fn load_config(cli: &Cli) -> eyre::Result<Config> {
    let mut config = if Path::new(&cli.config).exists() {
        info!("Loading config: {}", cli.config);
        Config::from_file(&cli.config)?
    } else {
        let rpc_url = cli
            .rpc_url
            .clone()
            .ok_or_else(|| eyre::eyre!("no config at {} and no --rpc-url given", cli.config))?;
        Config::new(rpc_url, NetworkType::Mainnet)
    };

    if let Some(rpc_url) = &cli.rpc_url {
        config.rpc_url = rpc_url.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let network = config.network_config();
    let address = inspector::resolve_token(&network, cli.command.token())?;

    let rpc = client::create_rpc(&config.rpc_url).await?;
    let chain_id = rpc.chain_id().await?;
    if chain_id != network.chain_id {
        tracing::warn!(
            expected = network.chain_id,
            found = chain_id,
            "Node chain id differs from configured network"
        );
    }

    let erc20 = Erc20::new(rpc)?;
    let token = erc20.deployed_at(address);

    match &cli.command {
        Command::Info { .. } => {
            let summary = inspect_token(&token, &network).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
        }
        Command::Balance { holder, block, .. } => {
            let report = check_balance(&token, *holder, block_scope(*block)).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Command::Allowance {
            owner,
            spender,
            block,
            ..
        } => {
            let report = check_allowance(&token, *owner, *spender, block_scope(*block)).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Command::EncodeTransfer { to, amount, .. } => {
            let amount = token.base_units(amount).await?;
            let calldata = token.encode_transfer(*to, amount)?;
            print_calldata(cli.json, token.address(), &calldata)?;
        }
        Command::EncodeApprove {
            spender, amount, ..
        } => {
            let amount = token.base_units(amount).await?;
            let calldata = token.encode_approve(*spender, amount)?;
            print_calldata(cli.json, token.address(), &calldata)?;
        }
    }

    Ok(())
}

fn print_calldata(json: bool, to: Address, calldata: &[u8]) -> eyre::Result<()> {
    let data = alloy_primitives::hex::encode_prefixed(calldata);
    if json {
        let value = serde_json::json!({ "to": to, "data": data });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", data);
    }
    Ok(())
}
