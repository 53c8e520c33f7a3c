// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) NEO WALLET CONTRIBUTORS. All rights reserved.

use core::cmp::Ordering;
use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, Deref, Sub};
use std::str::FromStr;

/// The underlying integer unit of GAS, with 8 decimal places of precision
pub type Fixed8 = u64;

/// Number of [Fixed8] units in one GAS
pub const GAS_UNIT: Fixed8 = 100_000_000;
const GAS_UNIT_F: f64 = GAS_UNIT as f64;

/// An amount of the GAS utility asset
///
/// Amounts are held in their raw [Fixed8] representation, so arithmetic
/// and comparisons are exact. Conversions from floats truncate any
/// precision beyond the eighth decimal place.
#[derive(Copy, Clone, Eq)]
pub struct Gas(Fixed8);

impl Gas {
    /// Create an amount from a whole-GAS float
    pub fn from(value: f64) -> Self {
        Self((value * GAS_UNIT_F) as Fixed8)
    }

    /// Create an amount from raw [Fixed8] units, as returned by the
    /// claims and history endpoints
    pub fn from_fixed8(value: Fixed8) -> Self {
        Self(value)
    }

    /// The amount in raw [Fixed8] units
    pub fn as_fixed8(&self) -> Fixed8 {
        self.0
    }

    /// The amount in whole GAS
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / GAS_UNIT_F
    }
}

/// Addition
impl Add for Gas {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Subtraction
impl Sub for Gas {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Equality
impl PartialEq for Gas {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl PartialEq<Fixed8> for Gas {
    fn eq(&self, other: &Fixed8) -> bool {
        self.as_fixed8() == *other
    }
}
impl PartialEq<f64> for Gas {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

/// Comparison
impl PartialOrd for Gas {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
impl PartialOrd<Fixed8> for Gas {
    fn partial_cmp(&self, other: &Fixed8) -> Option<Ordering> {
        self.as_fixed8().partial_cmp(other)
    }
}
impl PartialOrd<f64> for Gas {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.as_f64().partial_cmp(other)
    }
}

/// Floats are whole-GAS amounts
impl From<f64> for Gas {
    fn from(val: f64) -> Self {
        Self::from(val)
    }
}

/// Raw integers are [Fixed8] units
impl From<Fixed8> for Gas {
    fn from(raw: Fixed8) -> Self {
        Self(raw)
    }
}

/// Strings are parsed as whole-GAS floats
impl FromStr for Gas {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        f64::from_str(s).map(Gas::from)
    }
}

/// Gas derefs into its raw [Fixed8] amount
impl Deref for Gas {
    type Target = Fixed8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl fmt::Debug for Gas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}
