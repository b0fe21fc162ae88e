// This file is part of Pmfund.
//
// Pmfund is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Pmfund is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Pmfund.
// If not, see https://www.gnu.org/licenses/.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use clap::{Args, Parser};
use pmfund_provider::{new_alloy_provider, AlloyPaymasterV0_6, AlloyPaymasterV0_7, Paymaster};
use pmfund_types::{ChainSpec, PaymasterVersion};
use secrecy::{ExposeSecret, SecretString};

mod balance;
mod deposit;
mod tracing;

/// Main entry point for the CLI
///
/// Resolves the configuration, derives the signing identity, constructs the
/// network client, and runs the operations selected by the flags. Any error
/// propagates to `main`, which reports it and exits non-zero.
pub async fn run() -> anyhow::Result<()> {
    let opt = Cli::parse();
    let _guard = tracing::configure_logging(&opt.logs)?;
    tracing::debug!("Parsed CLI options: {:#?}", opt);

    let (rpc_url, private_key) = opt.common.required_values()?;

    let chain_spec = opt.common.chain_spec();
    let signer = private_key
        .expose_secret()
        .parse::<PrivateKeySigner>()
        .context("should create signer")?
        .with_chain_id(Some(chain_spec.id));
    tracing::info!(
        "Funding from {:?} on chain {}",
        signer.address(),
        chain_spec.id
    );

    let provider = new_alloy_provider(rpc_url, signer)?;
    let handles = PaymasterHandles {
        v0_6: AlloyPaymasterV0_6::new(
            chain_spec.paymaster_address(PaymasterVersion::V0_6),
            provider.clone(),
        ),
        v0_7: AlloyPaymasterV0_7::new(
            chain_spec.paymaster_address(PaymasterVersion::V0_7),
            provider,
        ),
    };

    execute(
        &opt.operations,
        &handles,
        opt.common.paymaster_version,
        opt.common.deposit_amount,
    )
    .await
}

/// Run the selected operations against the paymaster handle matching the
/// configured version.
///
/// Check-balance runs before deposit when both flags are given; a failure in
/// the former aborts the run. The deposit is issued only to the selected
/// version's contract.
async fn execute<P6, P7>(
    ops: &OperationArgs,
    handles: &PaymasterHandles<P6, P7>,
    version: PaymasterVersion,
    deposit_amount: U256,
) -> anyhow::Result<()>
where
    P6: Paymaster,
    P7: Paymaster,
{
    if !ops.check_balance && !ops.deposit {
        tracing::warn!("no operation flags given, nothing to do");
        return Ok(());
    }

    let paymaster = handles.select(version);
    if ops.check_balance {
        balance::check_balance(paymaster).await?;
    }
    if ops.deposit {
        deposit::deposit(paymaster, deposit_amount).await?;
    }
    Ok(())
}

/// One paymaster handle per interface version
struct PaymasterHandles<P6, P7> {
    v0_6: P6,
    v0_7: P7,
}

impl<P6, P7> PaymasterHandles<P6, P7>
where
    P6: Paymaster,
    P7: Paymaster,
{
    fn select(&self, version: PaymasterVersion) -> &dyn Paymaster {
        match version {
            PaymasterVersion::V0_6 => &self.v0_6,
            PaymasterVersion::V0_7 => &self.v0_7,
        }
    }
}

/// CLI options
#[derive(Debug, Parser)]
#[command(name = "pmfund")]
struct Cli {
    #[clap(flatten)]
    common: CommonArgs,

    #[clap(flatten)]
    operations: OperationArgs,

    #[clap(flatten)]
    logs: LogsArgs,
}

/// CLI operation flags
#[derive(Debug, Args)]
#[command(next_help_heading = "Operations")]
struct OperationArgs {
    /// Read and report the selected paymaster's entry point deposit
    #[arg(long = "check-balance", name = "check-balance")]
    check_balance: bool,

    /// Deposit the configured amount into the selected paymaster
    #[arg(long = "deposit", name = "deposit")]
    deposit: bool,
}

/// CLI common options
#[derive(Debug, Args)]
#[command(next_help_heading = "Common")]
struct CommonArgs {
    /// ETH Node HTTP URL to connect to
    #[arg(long = "rpc_url", name = "rpc_url", env = "RPC_URL")]
    rpc_url: Option<String>,

    /// Private key of the funding account, hex with 0x prefix
    #[arg(
        long = "private_key",
        name = "private_key",
        env = "PRIVATE_KEY",
        value_parser = parse_secret
    )]
    private_key: Option<SecretString>,

    /// Paymaster interface version to target
    #[arg(
        long = "paymaster_version",
        name = "paymaster_version",
        env = "PAYMASTER_VERSION",
        default_value = "v0_7",
        value_parser = PaymasterVersion::from_str
    )]
    paymaster_version: PaymasterVersion,

    /// Amount of native currency to deposit, in whole units (ether)
    #[arg(
        long = "deposit_amount",
        name = "deposit_amount",
        env = "DEPOSIT_AMOUNT",
        default_value = "1",
        value_parser = alloy_primitives::utils::parse_ether
    )]
    deposit_amount: U256,

    /// Chain id the signing identity is bound to
    #[arg(long = "chain_id", name = "chain_id", env = "CHAIN_ID")]
    chain_id: Option<u64>,

    /// Override the v0.6 paymaster contract address
    #[arg(
        long = "paymaster_address_v0_6",
        name = "paymaster_address_v0_6",
        env = "PAYMASTER_ADDRESS_V0_6",
        value_parser = Address::from_str
    )]
    paymaster_address_v0_6: Option<Address>,

    /// Override the v0.7 paymaster contract address
    #[arg(
        long = "paymaster_address_v0_7",
        name = "paymaster_address_v0_7",
        env = "PAYMASTER_ADDRESS_V0_7",
        value_parser = Address::from_str
    )]
    paymaster_address_v0_7: Option<Address>,
}

impl CommonArgs {
    /// The RPC endpoint and funding key, both of which must be present and
    /// non-empty before any connection is made. The key stays wrapped; the
    /// caller exposes it only to derive the signer.
    fn required_values(&self) -> anyhow::Result<(&str, &SecretString)> {
        let rpc_url = self
            .rpc_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .context("RPC_URL is not set")?;
        let private_key = self
            .private_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())
            .context("PRIVATE_KEY is not set")?;
        Ok((rpc_url, private_key))
    }

    fn chain_spec(&self) -> ChainSpec {
        let mut chain_spec = ChainSpec::default();
        if let Some(id) = self.chain_id {
            chain_spec.id = id;
        }
        if let Some(address) = self.paymaster_address_v0_6 {
            chain_spec.paymaster_address_v0_6 = address;
        }
        if let Some(address) = self.paymaster_address_v0_7 {
            chain_spec.paymaster_address_v0_7 = address;
        }
        chain_spec
    }
}

/// CLI options for logging
#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
struct LogsArgs {
    /// Log file
    ///
    /// If not provided, logs will be written to stdout
    #[arg(long = "log.file", name = "log.file", env = "LOG_FILE", default_value = None)]
    file: Option<String>,

    /// Log JSON
    ///
    /// If set, logs will be written in JSON format
    #[arg(
        long = "log.json",
        name = "log.json",
        env = "LOG_JSON",
        required = false,
        num_args = 0
    )]
    json: bool,
}

/// Converts a &str into a SecretString
fn parse_secret(s: &str) -> Result<SecretString, String> {
    Ok(s.to_string().into())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy_primitives::{utils::parse_ether, TxHash};
    use mockall::{predicate::eq, Sequence};
    use pmfund_provider::{MockPaymaster, ProviderError, ProviderResult};

    use super::*;

    fn ops(check_balance: bool, deposit: bool) -> OperationArgs {
        OperationArgs {
            check_balance,
            deposit,
        }
    }

    fn one_ether() -> U256 {
        parse_ether("1").unwrap()
    }

    fn common_args() -> CommonArgs {
        CommonArgs {
            rpc_url: Some("http://localhost:8545".to_string()),
            private_key: Some("0xaa".to_string().into()),
            paymaster_version: PaymasterVersion::V0_7,
            deposit_amount: one_ether(),
            chain_id: None,
            paymaster_address_v0_6: None,
            paymaster_address_v0_7: None,
        }
    }

    #[tokio::test]
    async fn no_flags_is_a_no_op() {
        // no expectations set, so any call on either handle panics
        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7: MockPaymaster::new(),
        };

        execute(
            &ops(false, false),
            &handles,
            PaymasterVersion::V0_7,
            one_ether(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn check_balance_reads_selected_version_once() {
        let mut v0_7 = MockPaymaster::new();
        v0_7.expect_get_deposit()
            .times(1)
            .returning(|| Ok(one_ether()));
        v0_7.expect_version().return_const(PaymasterVersion::V0_7);

        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7,
        };

        execute(
            &ops(true, false),
            &handles,
            PaymasterVersion::V0_7,
            one_ether(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn deposit_writes_configured_amount_once() {
        let amount = parse_ether("2.5").unwrap();

        let mut v0_7 = MockPaymaster::new();
        v0_7.expect_deposit()
            .with(eq(amount))
            .times(1)
            .returning(|_| Ok(TxHash::ZERO));
        v0_7.expect_version().return_const(PaymasterVersion::V0_7);

        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7,
        };

        execute(&ops(false, true), &handles, PaymasterVersion::V0_7, amount)
            .await
            .unwrap();
    }

    // A v0.6 deposit must not also fund the v0.7 contract.
    #[tokio::test]
    async fn v0_6_deposit_does_not_touch_v0_7() {
        let amount = one_ether();

        let mut v0_6 = MockPaymaster::new();
        v0_6.expect_deposit()
            .with(eq(amount))
            .times(1)
            .returning(|_| Ok(TxHash::ZERO));
        v0_6.expect_version().return_const(PaymasterVersion::V0_6);

        let mut v0_7 = MockPaymaster::new();
        v0_7.expect_deposit().never();
        v0_7.expect_get_deposit().never();

        let handles = PaymasterHandles { v0_6, v0_7 };

        execute(&ops(false, true), &handles, PaymasterVersion::V0_6, amount)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn check_balance_runs_before_deposit() {
        let mut seq = Sequence::new();
        let mut v0_7 = MockPaymaster::new();
        v0_7.expect_get_deposit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(U256::ZERO));
        v0_7.expect_deposit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(TxHash::ZERO));
        v0_7.expect_version().return_const(PaymasterVersion::V0_7);

        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7,
        };

        execute(
            &ops(true, true),
            &handles,
            PaymasterVersion::V0_7,
            one_ether(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn check_balance_failure_aborts_before_deposit() {
        let mut v0_7 = MockPaymaster::new();
        v0_7.expect_get_deposit()
            .times(1)
            .returning(|| Err(ProviderError::Other(anyhow::anyhow!("rpc unreachable"))));
        v0_7.expect_deposit().never();

        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7,
        };

        let result = execute(
            &ops(true, true),
            &handles,
            PaymasterVersion::V0_7,
            one_ether(),
        )
        .await;
        assert!(result.is_err());
    }

    /// Paymaster with persistent deposit state, standing in for an on-chain
    /// contract across sequential runs.
    struct FakePaymaster {
        deposit: Mutex<U256>,
    }

    #[async_trait::async_trait]
    impl Paymaster for FakePaymaster {
        fn address(&self) -> Address {
            Address::ZERO
        }

        fn version(&self) -> PaymasterVersion {
            PaymasterVersion::V0_7
        }

        async fn get_deposit(&self) -> ProviderResult<U256> {
            Ok(*self.deposit.lock().unwrap())
        }

        async fn deposit(&self, value: U256) -> ProviderResult<TxHash> {
            let mut deposit = self.deposit.lock().unwrap();
            *deposit += value;
            Ok(TxHash::ZERO)
        }
    }

    #[tokio::test]
    async fn deposit_then_check_balance_round_trip() {
        let initial = one_ether();
        let amount = parse_ether("2.5").unwrap();
        let fake = FakePaymaster {
            deposit: Mutex::new(initial),
        };
        let handles = PaymasterHandles {
            v0_6: MockPaymaster::new(),
            v0_7: fake,
        };

        execute(&ops(false, true), &handles, PaymasterVersion::V0_7, amount)
            .await
            .unwrap();
        execute(&ops(true, false), &handles, PaymasterVersion::V0_7, amount)
            .await
            .unwrap();

        assert_eq!(
            handles.v0_7.get_deposit().await.unwrap(),
            initial + amount
        );
    }

    #[test]
    fn missing_or_empty_required_values_are_errors() {
        let mut args = common_args();
        args.rpc_url = None;
        let err = args.required_values().unwrap_err();
        assert!(err.to_string().contains("RPC_URL"));

        args.rpc_url = Some(String::new());
        let err = args.required_values().unwrap_err();
        assert!(err.to_string().contains("RPC_URL"));

        args = common_args();
        args.private_key = None;
        let err = args.required_values().unwrap_err();
        assert!(err.to_string().contains("PRIVATE_KEY"));

        args.private_key = Some("".to_string().into());
        let err = args.required_values().unwrap_err();
        assert!(err.to_string().contains("PRIVATE_KEY"));
    }

    #[test]
    fn present_required_values_resolve() {
        let args = common_args();
        let (rpc_url, private_key) = args.required_values().unwrap();
        assert_eq!(rpc_url, "http://localhost:8545");
        assert_eq!(private_key.expose_secret(), "0xaa");
    }

    #[test]
    fn chain_spec_defaults_and_overrides() {
        let mut args = common_args();
        assert_eq!(args.chain_spec(), ChainSpec::default());

        args.chain_id = Some(8453);
        args.paymaster_address_v0_7 = Some(Address::repeat_byte(0xab));
        let chain_spec = args.chain_spec();
        assert_eq!(chain_spec.id, 8453);
        assert_eq!(
            chain_spec.paymaster_address(PaymasterVersion::V0_7),
            Address::repeat_byte(0xab)
        );
        assert_eq!(
            chain_spec.paymaster_address(PaymasterVersion::V0_6),
            ChainSpec::default().paymaster_address_v0_6
        );
    }
}
