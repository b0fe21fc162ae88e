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

use alloy_primitives::U256;
use anyhow::Context;
use pmfund_provider::Paymaster;
use pmfund_types::{format_ether, PaymasterVersion};

/// Read the paymaster's entry point deposit and report it on stdout.
pub(super) async fn check_balance(paymaster: &dyn Paymaster) -> anyhow::Result<()> {
    let deposit = paymaster
        .get_deposit()
        .await
        .context("should read paymaster deposit")?;
    println!("{}", balance_line(paymaster.version(), deposit));
    Ok(())
}

fn balance_line(version: PaymasterVersion, deposit: U256) -> String {
    format!(
        "Current balance of VerifyingPaymaster {version}: {} ETH",
        format_ether(deposit)
    )
}
