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

use alloy_primitives::{address, Address};

use crate::PaymasterVersion;

/// Chain id of the Sepolia testnet, the default target chain.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

const PAYMASTER_ADDRESS_V0_6: Address = address!("9E23b350C3fd3316C813dea7C2B688E2A5611916");
const PAYMASTER_ADDRESS_V0_7: Address = address!("9119FDfC6076e9072E2fE74Be79F14660ed00687");

/// Description of the target chain and the verifying paymaster deployments
/// on it.
///
/// Defaults carry the fixed deployment addresses for each interface version.
/// Every field can be overridden from the CLI for chains with different
/// deployments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainSpec {
    /// Chain id, used to bind the signing identity to the target chain
    pub id: u64,
    /// Address of the v0.6 verifying paymaster deployment
    pub paymaster_address_v0_6: Address,
    /// Address of the v0.7 verifying paymaster deployment
    pub paymaster_address_v0_7: Address,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self {
            id: SEPOLIA_CHAIN_ID,
            paymaster_address_v0_6: PAYMASTER_ADDRESS_V0_6,
            paymaster_address_v0_7: PAYMASTER_ADDRESS_V0_7,
        }
    }
}

impl ChainSpec {
    /// The paymaster deployment address for the given interface version
    pub fn paymaster_address(&self, version: PaymasterVersion) -> Address {
        match version {
            PaymasterVersion::V0_6 => self.paymaster_address_v0_6,
            PaymasterVersion::V0_7 => self.paymaster_address_v0_7,
        }
    }
}
