// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use crate::currency::{Gas, GAS_UNIT};

/// Decimal places shown for GAS amounts in full precision
pub const GAS_PRECISION: u32 = 8;
/// Decimal places shown for GAS amounts in compact displays
pub const GAS_SHORT_PRECISION: u32 = 4;

/// Format a fiat valuation with two decimal places, always shown
///
/// ```
/// use neo_wallet::format_fiat;
///
/// assert_eq!(format_fiat(1.0), "1.00");
/// assert_eq!(format_fiat(1234.567), "1,234.57");
/// ```
pub fn format_fiat(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}.{}", group_thousands(whole), frac)
}

/// Format a GAS amount at fixed precision, truncating rather than
/// rounding anything beyond the shown decimals
///
/// Accepts anything convertible into [Gas]: floats are whole-GAS
/// amounts, raw integers are [crate::currency::Fixed8] units. The full
/// form carries all [GAS_PRECISION] decimals and suits tooltips and
/// exports; the short form keeps dashboards readable.
pub fn format_gas(value: impl Into<Gas>, short: bool) -> String {
    let raw = value.into().as_fixed8();
    let whole = group_thousands(&(raw / GAS_UNIT).to_string());
    let frac = raw % GAS_UNIT;
    if short {
        let scale = 10u64.pow(GAS_PRECISION - GAS_SHORT_PRECISION);
        format!("{}.{:04}", whole, frac / scale)
    } else {
        format!("{}.{:08}", whole, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiat_always_two_decimals() {
        assert_eq!(format_fiat(1.0), "1.00");
        assert_eq!(format_fiat(0.0), "0.00");
        assert_eq!(format_fiat(25.5), "25.50");
    }

    #[test]
    fn fiat_rounds_and_groups() {
        assert_eq!(format_fiat(1234.567), "1,234.57");
        assert_eq!(format_fiat(1000000.0), "1,000,000.00");
    }

    #[test]
    fn gas_full_precision() {
        assert_eq!(format_gas(0.5, false), "0.50000000");
        assert_eq!(format_gas(12.0, false), "12.00000000");
        assert_eq!(format_gas(1500.25, false), "1,500.25000000");
    }

    #[test]
    fn gas_short_truncates() {
        // 2.999999999 must not round up to 3.0000
        assert_eq!(format_gas(2.999999999, true), "2.9999");
        assert_eq!(format_gas(1.23456789, true), "1.2345");
        assert_eq!(format_gas(7.0, true), "7.0000");
    }

    #[test]
    fn gas_from_raw_units() {
        // claims endpoints report amounts in raw units
        assert_eq!(format_gas(586_435u64, false), "0.00586435");
        assert_eq!(format_gas(250_000_000u64, true), "2.5000");
    }
}
