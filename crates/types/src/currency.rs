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

use alloy_primitives::{utils, U256};

/// Format a wei amount as a decimal ether string with trailing zeros
/// trimmed, so 10^18 wei renders as "1" rather than "1.000000000000000000".
pub fn format_ether(amount: U256) -> String {
    let formatted = utils::format_ether(amount);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ether_renders_as_one() {
        assert_eq!(format_ether(U256::from(1_000_000_000_000_000_000_u128)), "1");
    }

    #[test]
    fn fractional_amounts_keep_significant_digits() {
        assert_eq!(
            format_ether(U256::from(1_500_000_000_000_000_000_u128)),
            "1.5"
        );
        assert_eq!(format_ether(U256::from(1_u8)), "0.000000000000000001");
    }

    #[test]
    fn zero_renders_as_zero() {
        assert_eq!(format_ether(U256::ZERO), "0");
    }

    #[test]
    fn whole_amounts_above_one() {
        assert_eq!(
            format_ether(U256::from(10_000_000_000_000_000_000_u128)),
            "10"
        );
    }
}
