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

// Contracts from https://github.com/eth-infinitism/account-abstraction/tree/releases/v0.7/contracts

use alloy_sol_macro::sol;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug, PartialEq, Eq)]
    interface VerifyingPaymaster {
        function deposit() external payable;

        function getDeposit() external view returns (uint256);

        function withdrawTo(address payable withdrawAddress, uint256 amount) external;

        function addStake(uint32 unstakeDelaySec) external payable;

        function unlockStake() external;

        function withdrawStake(address payable withdrawAddress) external;

        function entryPoint() external view returns (address);

        function verifyingSigner() external view returns (address);
    }
}
