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

use strum::{Display, EnumString};

/// ERC-4337 verifying paymaster interface version
///
/// The two revisions are structurally similar but live at different
/// addresses and are not interchangeable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum PaymasterVersion {
    /// Version 0.6
    #[strum(serialize = "v0_6", serialize = "v0.6", to_string = "V0.6")]
    V0_6,
    /// Version 0.7
    #[strum(serialize = "v0_7", serialize = "v0.7", to_string = "V0.7")]
    V0_7,
}
