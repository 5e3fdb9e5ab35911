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

/// 分数运算中可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    /// 分母为零，或者除数为零
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// 指数不是非负整数
    #[error("exponent must be a non-negative integer, got `{0}`")]
    InvalidExponent(String),

    /// 最简形式的分子或分母超出 `i64` 范围
    #[error("result does not fit in a 64-bit numerator/denominator")]
    Overflow,

    /// 截断后的整数超出目标类型范围
    #[error("value is out of range for the target integer type")]
    OutOfRange,
}

pub type RationalResult<T> = Result<T, RationalError>;
