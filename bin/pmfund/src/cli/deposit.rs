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

use alloy_primitives::{TxHash, U256};
use anyhow::Context;
use pmfund_provider::Paymaster;
use pmfund_types::{format_ether, PaymasterVersion};

/// Deposit `amount` wei into the paymaster's entry point balance and report
/// the mined transaction on stdout.
pub(super) async fn deposit(paymaster: &dyn Paymaster, amount: U256) -> anyhow::Result<()> {
    let tx_hash = paymaster
        .deposit(amount)
        .await
        .context("should deposit into paymaster")?;
    println!("{}", deposit_line(paymaster.version(), amount, tx_hash));
    Ok(())
}

fn deposit_line(version: PaymasterVersion, amount: U256, tx_hash: TxHash) -> String {
    format!(
        "Funded VerifyingPaymaster {version}: {} ETH (tx {tx_hash})",
        format_ether(amount)
    )
}
