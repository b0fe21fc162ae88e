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

use alloy_primitives::TxHash;
use alloy_provider::PendingTransactionError;
use alloy_transport::TransportError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error enumeration for the provider traits.
///
/// None of these are recoverable; the caller reports and exits.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// RPC transport error
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Contract call error
    #[error(transparent)]
    ContractCall(#[from] alloy_contract::Error),
    /// Error while waiting for a transaction to mine
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
    /// Transaction was mined but reverted
    #[error("transaction {tx_hash} reverted")]
    TransactionReverted {
        /// Hash of the reverted transaction
        tx_hash: TxHash,
    },
    /// Internal errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
