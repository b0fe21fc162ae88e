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

#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Pmfund domain types
//!
//! Chain description, paymaster interface versioning, and native currency
//! formatting shared by the provider crate and the CLI.

mod chain;
pub use chain::{ChainSpec, SEPOLIA_CHAIN_ID};

mod currency;
pub use currency::format_ether;

mod version;
pub use version::PaymasterVersion;
