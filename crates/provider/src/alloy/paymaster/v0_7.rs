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
use alloy_provider::Provider as AlloyProvider;
use alloy_transport::Transport;
use pmfund_contracts::v0_7::VerifyingPaymaster::VerifyingPaymasterInstance;
use pmfund_types::PaymasterVersion;

use crate::{Paymaster, ProviderError, ProviderResult};

/// Verifying paymaster provider for v0.7
pub struct PaymasterProvider<AP, T> {
    verifying_paymaster: VerifyingPaymasterInstance<T, AP>,
}

impl<AP, T> PaymasterProvider<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    /// Create a new `PaymasterProvider` instance for v0.7
    pub fn new(paymaster_address: Address, provider: AP) -> Self {
        Self {
            verifying_paymaster: VerifyingPaymasterInstance::new(paymaster_address, provider),
        }
    }
}

#[async_trait::async_trait]
impl<AP, T> Paymaster for PaymasterProvider<AP, T>
where
    T: Transport + Clone,
    AP: AlloyProvider<T>,
{
    fn address(&self) -> Address {
        *self.verifying_paymaster.address()
    }

    fn version(&self) -> PaymasterVersion {
        PaymasterVersion::V0_7
    }

    async fn get_deposit(&self) -> ProviderResult<U256> {
        let ret = self.verifying_paymaster.getDeposit().call().await?;
        Ok(ret._0)
    }

    async fn deposit(&self, value: U256) -> ProviderResult<TxHash> {
        let call = self.verifying_paymaster.deposit().value(value);
        let pending = call.send().await?;
        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(ProviderError::TransactionReverted {
                tx_hash: receipt.transaction_hash,
            });
        }
        Ok(receipt.transaction_hash)
    }
}
