// An exact rational number lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::{RationalError, RationalResult};

/// 辗转相除法求最大公约数，结果非负
///
/// 在绝对值上计算，因此对任意 `i128` 输入都不会溢出。
/// `gcd(0, 0)` 约定为 `0`。
///
/// # 示例
/// ```
/// # use rational64::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(0, -7), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(a: i128, b: i128) -> u128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// square and multiply, bails out on the first overflowing step
pub(crate) fn checked_ipow(base: i128, exp: u64) -> RationalResult<i128> {
    let (mut base, mut exp, mut acc) = (base, exp, 1i128);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.checked_mul(base).ok_or(RationalError::Overflow)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base).ok_or(RationalError::Overflow)?;
        }
    }
    Ok(acc)
}
