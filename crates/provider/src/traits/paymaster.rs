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

use alloy_primitives::{Address, TxHash, U256};
#[cfg(feature = "test-utils")]
use mockall::automock;
use pmfund_types::PaymasterVersion;

use super::error::ProviderResult;

/// Trait for interacting with a verifying paymaster contract
#[cfg_attr(feature = "test-utils", automock)]
#[async_trait::async_trait]
pub trait Paymaster: Send + Sync {
    /// Address of the paymaster contract
    fn address(&self) -> Address;

    /// Interface version of the paymaster contract
    fn version(&self) -> PaymasterVersion;

    /// Get the paymaster's current deposit with its entry point, in wei
    async fn get_deposit(&self) -> ProviderResult<U256>;

    /// Deposit `value` wei of native currency into the paymaster's entry
    /// point balance. Waits for the transaction to mine and returns its
    /// hash; a reverted transaction is an error.
    async fn deposit(&self, value: U256) -> ProviderResult<TxHash>;
}
