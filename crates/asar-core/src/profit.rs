//! Fixed-point profit values.
//!
//! Profits are stored in tenths as `i64`, so sums and comparisons in the
//! search frontier are exact.  The text format accepts integers or numbers
//! with a single fractional digit (`120`, `-4`, `87.5`).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::{AsarError, AsarResult};

const TENTHS: i64 = 10;

/// A profit amount in tenths of a unit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profit(i64);

impl Profit {
    pub const ZERO: Profit = Profit(0);
    /// One whole unit.
    pub const ONE: Profit = Profit(TENTHS);

    #[inline]
    pub const fn from_tenths(tenths: i64) -> Profit {
        Profit(tenths)
    }

    #[inline]
    pub const fn whole(units: i64) -> Profit {
        Profit(units * TENTHS)
    }

    #[inline]
    pub fn tenths(self) -> i64 {
        self.0
    }

    /// `true` if the value has no fractional part.
    #[inline]
    pub fn is_integral(self) -> bool {
        self.0 % TENTHS == 0
    }

    pub fn parse(s: &str) -> AsarResult<Profit> {
        let invalid = || AsarError::InvalidProfit(s.to_owned());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let frac = match frac_part {
            None => 0,
            Some(f) if f.len() == 1 && f.as_bytes()[0].is_ascii_digit() => (f.as_bytes()[0] - b'0') as i64,
            Some(_) => return Err(invalid()),
        };
        let units: i64 = int_part.parse().map_err(|_| invalid())?;
        let magnitude = units
            .checked_mul(TENTHS)
            .and_then(|t| t.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Profit(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for Profit {
    type Output = Profit;
    #[inline]
    fn add(self, rhs: Profit) -> Profit {
        Profit(self.0 + rhs.0)
    }
}

impl Sub for Profit {
    type Output = Profit;
    #[inline]
    fn sub(self, rhs: Profit) -> Profit {
        Profit(self.0 - rhs.0)
    }
}

impl Sum for Profit {
    fn sum<I: Iterator<Item = Profit>>(iter: I) -> Profit {
        iter.fold(Profit::ZERO, Add::add)
    }
}

impl FromStr for Profit {
    type Err = AsarError;
    fn from_str(s: &str) -> AsarResult<Profit> {
        Profit::parse(s)
    }
}

impl fmt::Display for Profit {
    /// Integral values print without a fraction, others with one digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = if self.is_integral() { ProfitFormat::Integer } else { ProfitFormat::OneDecimal };
        f.write_str(&format.render(*self))
    }
}

// ── ProfitFormat ──────────────────────────────────────────────────────────────

/// How the total profit line is rendered.
///
/// A domain whose profits are all integral reports integers; otherwise every
/// total is printed with one decimal, even when it happens to be whole.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfitFormat {
    #[default]
    Integer,
    OneDecimal,
}

impl ProfitFormat {
    /// Pick the format for a set of input profits.
    pub fn for_profits<I: IntoIterator<Item = Profit>>(profits: I) -> ProfitFormat {
        if profits.into_iter().all(Profit::is_integral) {
            ProfitFormat::Integer
        } else {
            ProfitFormat::OneDecimal
        }
    }

    pub fn render(self, profit: Profit) -> String {
        let sign = if profit.0 < 0 { "-" } else { "" };
        let abs = profit.0.unsigned_abs();
        let (units, tenths) = (abs / TENTHS as u64, abs % TENTHS as u64);
        match self {
            // Integer domains never produce a fractional total.
            ProfitFormat::Integer => format!("{sign}{units}"),
            ProfitFormat::OneDecimal => format!("{sign}{units}.{tenths}"),
        }
    }
}
