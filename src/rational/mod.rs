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


//! # rational
//!
//! 提供精确的有理数运算，始终保持最简形式
//!
//! # 核心功能
//! - 基本四则运算 (`+`, `-`, `*`, `/` 等) 与非负整数次幂
//! - 与整数类型的混合运算和比较
//! - 最简形式与带分数形式的字符串输出
//! - 单位分数、真分数、相邻分数等判定
//!
//! 所有运算都有返回 `Result` 的 `checked_*` 版本；运算符版本在出错时 panic。

pub(crate) mod utils;

use std::{
    cmp::Ordering, fmt::{self, Display, Formatter}, hash::{Hash, Hasher}, ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign
    }
};

use crate::error::{RationalError, RationalResult};
use utils::{checked_ipow, gcd};

/// 有理数类型，使用 `i64` 存储分子分母
///
/// 分母恒为正，分子分母互素，零表示为 `0/1`。
/// 中间结果使用 `i128` 计算，只有最终结果超出 `i64` 时才会报告溢出。
///
/// # 示例 - 基础使用
/// ```
/// use rational64::Rational;
///
/// let a = Rational::new(3, 4).unwrap(); // 3/4
/// let b = Rational::from(2);            // 2/1
/// assert_eq!(a + b, Rational::new(11, 4).unwrap());
/// assert_eq!((a + b).to_string(), "11/4");
/// assert_eq!((a + b).as_mixed_number(), "2 + 3/4");
/// ```
///
/// # 错误处理
/// ```
/// # use rational64::{Rational, RationalError};
/// let half = Rational::new(1, 2).unwrap();
///
/// assert_eq!(Rational::new(1, 0), Err(RationalError::ZeroDenominator));
/// assert_eq!(half.checked_div(0), Err(RationalError::ZeroDenominator));
/// assert!(matches!(half.checked_pow(-1), Err(RationalError::InvalidExponent(_))));
/// ```
#[derive(Debug, Clone, Copy, Eq)]
pub struct Rational {
    nume: i64,
    deno: i64,
}

impl Rational {
    pub const ZERO: Self = Self { nume: 0, deno: 1 };
    pub const ONE: Self = Self { nume: 1, deno: 1 };

    /// 创建新分数，自动化简为最简形式
    ///
    /// # 参数
    /// - `nume`: 分子
    /// - `deno`: 分母 (非零，负分母会把符号移到分子上)
    ///
    /// # 错误
    /// - 分母为零时返回 [`RationalError::ZeroDenominator`]
    /// - 化简后仍超出 `i64` 时返回 [`RationalError::Overflow`]
    ///
    /// # 示例
    /// ```
    /// # use rational64::{Rational, RationalError};
    ///
    /// let normal = Rational::new(4, -2).unwrap(); // -2/1
    /// assert_eq!(normal, Rational::from(-2));
    /// assert_eq!((normal.numerator(), normal.denominator()), (-2, 1));
    ///
    /// assert_eq!(Rational::new(1, 0), Err(RationalError::ZeroDenominator));
    /// assert_eq!(Rational::new(i64::MIN, -1), Err(RationalError::Overflow));
    /// ```
    pub fn new(nume: i64, deno: i64) -> RationalResult<Self> {
        Self::from_wide(nume as i128, deno as i128)
    }

    fn from_wide(nume: i128, deno: i128) -> RationalResult<Self> {
        if deno == 0 {
            return Err(RationalError::ZeroDenominator);
        }

        let (nume, deno) = if deno < 0 {
            (
                nume.checked_neg().ok_or(RationalError::Overflow)?,
                deno.checked_neg().ok_or(RationalError::Overflow)?,
            )
        } else {
            (nume, deno)
        };

        // deno > 0 here, so the divisor is at least 1 and no larger than deno
        let gcd_val = gcd(nume, deno) as i128;
        let (nume, deno) = (nume / gcd_val, deno / gcd_val);

        Ok(Self {
            nume: i64::try_from(nume).map_err(|_| RationalError::Overflow)?,
            deno: i64::try_from(deno).map_err(|_| RationalError::Overflow)?,
        })
    }

    fn wide(self) -> (i128, i128) {
        (self.nume as i128, self.deno as i128)
    }

    /// 分子（带符号）
    pub fn numerator(&self) -> i64 {
        self.nume
    }

    /// 分母（恒为正）
    pub fn denominator(&self) -> i64 {
        self.deno
    }

    /// 以带分数形式输出
    ///
    /// 整数部分与余数都按绝对值计算，负号只出现在最前面。
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// assert_eq!(Rational::new(5, 2).unwrap().as_mixed_number(), "2 + 1/2");
    /// assert_eq!(Rational::new(-7, 2).unwrap().as_mixed_number(), "-3 + 1/2");
    /// assert_eq!(Rational::new(-1, 2).unwrap().as_mixed_number(), "-1/2");
    /// assert_eq!(Rational::from(5).as_mixed_number(), "5");
    /// assert_eq!(Rational::ZERO.as_mixed_number(), "0");
    /// ```
    pub fn as_mixed_number(&self) -> String {
        let (nume_abs, deno_abs) = (self.nume.unsigned_abs(), self.deno.unsigned_abs());
        let sign = if self.is_negative() { "-" } else { "" };

        let quotient = nume_abs / deno_abs;
        let remainder = nume_abs % deno_abs;

        if remainder == 0 {
            format!("{sign}{quotient}")
        } else if quotient == 0 {
            self.to_string()
        } else {
            format!("{sign}{quotient} + {remainder}/{deno_abs}")
        }
    }

    /// 正值返回 true，否则返回 false
    pub fn is_positive(&self) -> bool {
        self.nume > 0
    }

    /// 负值返回 true，否则返回 false
    pub fn is_negative(&self) -> bool {
        self.nume < 0
    }

    /// 零值返回 true，否则返回 false
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// assert!(Rational::new(0, 7).unwrap().is_zero());
    /// assert!(!Rational::new(-2, 3).unwrap().is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.nume == 0
    }

    /// 分母为 1 时返回 true
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// assert!(Rational::new(6, 3).unwrap().is_integer());
    /// assert!(Rational::ZERO.is_integer());
    /// assert!(!Rational::new(1, 2).unwrap().is_integer());
    /// ```
    pub fn is_integer(&self) -> bool {
        self.deno == 1
    }

    /// 真分数（绝对值严格小于 1）返回 true
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// assert!(Rational::new(-1, 2).unwrap().is_proper());
    /// assert!(Rational::ZERO.is_proper());
    /// assert!(!Rational::ONE.is_proper());
    /// assert!(!Rational::new(5, 3).unwrap().is_proper());
    /// ```
    pub fn is_proper(&self) -> bool {
        self.nume.unsigned_abs() < self.deno.unsigned_abs()
    }

    /// 单位分数（分子为 ±1 且分母大于 1）返回 true
    ///
    /// `1/1` 与 `-1/1` 是整数，不算单位分数。
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// assert!(Rational::new(1, 5).unwrap().is_unit());
    /// assert!(Rational::new(-1, 5).unwrap().is_unit());
    /// assert!(!Rational::new(1, 1).unwrap().is_unit());
    /// assert!(!Rational::new(2, 3).unwrap().is_unit());
    /// ```
    pub fn is_unit(&self) -> bool {
        self.nume.unsigned_abs() == 1 && self.deno > 1
    }

    /// 两数之差的绝对值恰好为 1 时返回 true
    ///
    /// 差值在 `i128` 中计算，不会溢出，也不会失败。
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(3, 2).unwrap();
    /// let b = Rational::new(1, 2).unwrap();
    /// assert!(a.is_adjacent_to(&b));
    /// assert!(b.is_adjacent_to(&a));
    /// assert!(!b.is_adjacent_to(&Rational::new(1, 3).unwrap()));
    /// ```
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        // |a/b - c/d| == 1  <=>  |a*d - c*b| == b*d
        (a * d - c * b).unsigned_abs() == (b * d).unsigned_abs()
    }

    /// 绝对值
    ///
    /// # 错误
    /// 分子为 `i64::MIN` 时返回 [`RationalError::Overflow`]
    pub fn checked_abs(self) -> RationalResult<Self> {
        Ok(Self {
            nume: self.nume.checked_abs().ok_or(RationalError::Overflow)?,
            deno: self.deno,
        })
    }

    /// 绝对值
    ///
    /// # Panics
    /// 分子为 `i64::MIN` 时 panic，见 [`Rational::checked_abs`]
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(-2, 3).unwrap();
    /// assert_eq!(a.abs(), Rational::new(2, 3).unwrap());
    /// assert_eq!(Rational::ZERO.abs(), Rational::ZERO);
    /// ```
    pub fn abs(self) -> Self {
        self.checked_abs().unwrap_or_else(|err| panic!("{err}"))
    }

    /// 相反数
    ///
    /// # 错误
    /// 分子为 `i64::MIN` 时返回 [`RationalError::Overflow`]
    pub fn checked_neg(self) -> RationalResult<Self> {
        Ok(Self {
            nume: self.nume.checked_neg().ok_or(RationalError::Overflow)?,
            deno: self.deno,
        })
    }

    /// 倒数
    ///
    /// # 错误
    /// 零没有倒数，返回 [`RationalError::ZeroDenominator`]
    ///
    /// # 示例
    /// ```
    /// # use rational64::{Rational, RationalError};
    /// let a = Rational::new(-2, 3).unwrap();
    /// assert_eq!(a.checked_recip(), Rational::new(-3, 2));
    /// assert_eq!(Rational::ZERO.checked_recip(), Err(RationalError::ZeroDenominator));
    /// ```
    pub fn checked_recip(self) -> RationalResult<Self> {
        let (a, b) = self.wide();
        Self::from_wide(b, a)
    }

    /// 倒数
    ///
    /// # Panics
    /// 对零取倒数时 panic
    pub fn recip(self) -> Self {
        self.checked_recip().unwrap_or_else(|err| panic!("{err}"))
    }

    /// 加法：`(a*d + c*b) / (b*d)`
    ///
    /// # 示例
    /// ```
    /// # use rational64::{Rational, RationalError};
    /// let a = Rational::new(1, 2).unwrap();
    /// assert_eq!(a.checked_add(Rational::new(2, 3).unwrap()), Rational::new(7, 6));
    /// assert_eq!(a.checked_add(1), Rational::new(3, 2));
    /// assert_eq!(Rational::from(i64::MAX).checked_add(1), Err(RationalError::Overflow));
    /// ```
    pub fn checked_add<T: IntoRational>(self, rhs: T) -> RationalResult<Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_rational()?.wide();
        let nume = (a * d).checked_add(c * b).ok_or(RationalError::Overflow)?;
        Self::from_wide(nume, b * d)
    }

    /// 减法：`(a*d - c*b) / (b*d)`
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(2, 3).unwrap();
    /// assert_eq!(a.checked_sub(Rational::new(1, 2).unwrap()), Rational::new(1, 6));
    /// assert_eq!(a.checked_sub(a), Ok(Rational::ZERO));
    /// ```
    pub fn checked_sub<T: IntoRational>(self, rhs: T) -> RationalResult<Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_rational()?.wide();
        let nume = (a * d).checked_sub(c * b).ok_or(RationalError::Overflow)?;
        Self::from_wide(nume, b * d)
    }

    /// 乘法：`(a*c) / (b*d)`
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// assert_eq!(a.checked_mul(Rational::new(2, 3).unwrap()), Rational::new(1, 3));
    /// assert_eq!(a.checked_mul(2), Ok(Rational::ONE));
    /// ```
    pub fn checked_mul<T: IntoRational>(self, rhs: T) -> RationalResult<Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.into_rational()?.wide();
        Self::from_wide(a * c, b * d)
    }

    /// 除法：`(a*d) / (b*c)`
    ///
    /// # 错误
    /// 除数为零（整数 0 或者值为零的分数）时返回 [`RationalError::ZeroDenominator`]
    ///
    /// # 示例
    /// ```
    /// # use rational64::{Rational, RationalError};
    /// let a = Rational::new(1, 2).unwrap();
    /// assert_eq!(a.checked_div(Rational::new(2, 3).unwrap()), Rational::new(3, 4));
    /// assert_eq!(a.checked_div(2), Rational::new(1, 4));
    /// assert_eq!(a.checked_div(Rational::ZERO), Err(RationalError::ZeroDenominator));
    /// ```
    pub fn checked_div<T: IntoRational>(self, rhs: T) -> RationalResult<Self> {
        let rhs = rhs.into_rational()?;
        if rhs.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }

        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::from_wide(a * d, b * c)
    }

    /// 非负整数次幂：`(a^n) / (b^n)`
    ///
    /// 指数可以是任意整数类型；负数以及任何浮点数（即使是 `2.0`）都会被拒绝，
    /// 不会被解释为倒数或开方。
    ///
    /// # 错误
    /// - 指数不是非负整数时返回 [`RationalError::InvalidExponent`]
    /// - 结果超出 `i64` 时返回 [`RationalError::Overflow`]
    ///
    /// # 示例
    /// ```
    /// # use rational64::{Rational, RationalError};
    /// let a = Rational::new(-2, 3).unwrap();
    /// assert_eq!(a.checked_pow(3), Rational::new(-8, 27));
    /// assert_eq!(a.checked_pow(0u32), Ok(Rational::ONE));
    /// assert!(matches!(a.checked_pow(-1), Err(RationalError::InvalidExponent(_))));
    /// assert!(matches!(a.checked_pow(1.5), Err(RationalError::InvalidExponent(_))));
    /// ```
    pub fn checked_pow<E: Exponent>(self, exp: E) -> RationalResult<Self> {
        let exp = exp.into_exponent()?;
        let (a, b) = self.wide();
        Self::from_wide(checked_ipow(a, exp)?, checked_ipow(b, exp)?)
    }

    /// 非负整数次幂
    ///
    /// # Panics
    /// 出错时 panic，见 [`Rational::checked_pow`]
    pub fn pow<E: Exponent>(self, exp: E) -> Self {
        self.checked_pow(exp).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// 可以作为 [`Rational::checked_pow`] 指数的类型
///
/// 整数类型在非负时转换成功；浮点类型总是被拒绝。
pub trait Exponent {
    /// 转换为 `u64` 指数，不是非负整数时返回 [`RationalError::InvalidExponent`]
    fn into_exponent(self) -> RationalResult<u64>;
}

macro_rules! impl_exponent_for_integer {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                fn into_exponent(self) -> RationalResult<u64> {
                    u64::try_from(self).map_err(|_| RationalError::InvalidExponent(self.to_string()))
                }
            }
        )*
    };
}

macro_rules! impl_exponent_for_float {
    ($($t:ty),*) => {
        $(
            impl Exponent for $t {
                fn into_exponent(self) -> RationalResult<u64> {
                    Err(RationalError::InvalidExponent(self.to_string()))
                }
            }
        )*
    };
}

impl_exponent_for_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_exponent_for_float!(f32, f64);

/// 可以作为运算符右操作数的类型
///
/// 包括 [`Rational`] 本身和所有整数类型，整数 `n` 视为 `n/1`。
/// 超出 `i64` 的宽整数转换失败，返回 [`RationalError::Overflow`]。
pub trait IntoRational {
    /// 转换为分数
    fn into_rational(self) -> RationalResult<Rational>;
}

impl IntoRational for Rational {
    fn into_rational(self) -> RationalResult<Rational> {
        Ok(self)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: IntoRational> Add<T> for Rational {
    type Output = Self;

    /// 分数加法
    ///
    /// # Panics
    /// 结果溢出时 panic，使用 [`Rational::checked_add`] 获取错误
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(1, 3).unwrap();
    /// assert_eq!(a + b, Rational::new(5, 6).unwrap());
    /// assert_eq!(a + 1, Rational::new(3, 2).unwrap());
    /// ```
    fn add(self, rhs: T) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: IntoRational> Sub<T> for Rational {
    type Output = Self;

    /// 分数减法
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(1, 3).unwrap();
    /// assert_eq!(a - b, Rational::new(1, 6).unwrap());
    /// assert_eq!(a - 1, Rational::new(-1, 2).unwrap());
    /// ```
    fn sub(self, rhs: T) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: IntoRational> Mul<T> for Rational {
    type Output = Self;

    /// 分数乘法
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(1, 3).unwrap();
    /// assert_eq!(a * b, Rational::new(1, 6).unwrap());
    /// assert_eq!(a * 3, Rational::new(3, 2).unwrap());
    /// assert!((a * 0).is_zero());
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: IntoRational> Div<T> for Rational {
    type Output = Self;

    /// 分数除法
    ///
    /// # Panics
    /// 除数为零时 panic，使用 [`Rational::checked_div`] 获取错误
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// let b = Rational::new(1, 3).unwrap();
    /// assert_eq!(a / b, Rational::new(3, 2).unwrap());
    /// assert_eq!(a / 3, Rational::new(1, 6).unwrap());
    /// ```
    ///
    /// ```should_panic
    /// # use rational64::Rational;
    /// let _ = Rational::ONE / 0;
    /// ```
    fn div(self, rhs: T) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: IntoRational> AddAssign<T> for Rational {
    /// 实现 `+=` 操作
    ///
    /// 在数值上与 `+` 的行为相同
    ///
    /// # 示例
    /// ```rust
    /// # use rational64::Rational;
    /// let mut a = Rational::new(1, 2).unwrap();
    /// let mut b = Rational::new(1, 3).unwrap();
    /// a += b;
    /// b += 3;
    /// assert_eq!(a, Rational::new(5, 6).unwrap());
    /// assert_eq!(b, Rational::new(10, 3).unwrap());
    /// ```
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: IntoRational> SubAssign<T> for Rational {
    /// 实现 `-=` 操作
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: IntoRational> MulAssign<T> for Rational {
    /// 实现 `*=` 操作
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: IntoRational> DivAssign<T> for Rational {
    /// 实现 `/=` 操作
    ///
    /// 在数值上与 `/` 的行为相同
    ///
    /// # 示例
    /// ```rust
    /// # use rational64::Rational;
    /// let mut a = Rational::new(1, 2).unwrap();
    /// let mut b = Rational::new(1, 3).unwrap();
    /// a /= b;
    /// b /= 3;
    /// assert_eq!(a, Rational::new(3, 2).unwrap());
    /// assert_eq!(b, Rational::new(1, 9).unwrap());
    /// ```
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl Neg for Rational {
    type Output = Self;

    /// 取反
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(1, 2).unwrap();
    /// assert_eq!(-a, Rational::new(-1, 2).unwrap());
    /// assert!((-Rational::ZERO).is_zero());
    /// ```
    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Display for Rational {
    /// 最简形式输出
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// let a = Rational::new(2, 4).unwrap();
    /// let b = Rational::new(1, -2).unwrap();
    /// assert_eq!(a.to_string(), "1/2");
    /// assert_eq!(b.to_string(), "-1/2");
    /// assert_eq!(Rational::from(5).to_string(), "5");
    /// assert_eq!(Rational::ZERO.to_string(), "0");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.deno == 1 {
            write!(f, "{}", self.nume)
        } else {
            write!(f, "{}/{}", self.nume, self.deno)
        }
    }
}

impl PartialEq for Rational {
    /// 交叉相乘判断是否相等
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// 使用交叉相乘比较，避免精度损失
    ///
    /// 两个分母都为正，所以 `a/b < c/d  <=>  a*d < c*b`。
    ///
    /// # 示例
    /// ```
    /// # use rational64::Rational;
    /// # use std::cmp::Ordering;
    ///
    /// let a = Rational::new(3, 4).unwrap();
    /// let b = Rational::new(2, 3).unwrap();
    /// assert_eq!(a.cmp(&b), Ordering::Greater);
    /// assert!(Rational::new(-1, 2).unwrap() < Rational::ZERO);
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        (a * d).cmp(&(c * b))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nume.hash(state);
        self.deno.hash(state);
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self { nume: value as i64, deno: 1 }
                }
            }

            impl IntoRational for $t {
                fn into_rational(self) -> RationalResult<Rational> {
                    Ok(Rational::from(self))
                }
            }

            impl PartialEq<$t> for Rational {
                fn eq(&self, other: &$t) -> bool {
                    *self == Rational::from(*other)
                }
            }

            impl PartialOrd<$t> for Rational {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp(&Rational::from(*other)))
                }
            }
        )*
    };
}

// lossless into i64
impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);

macro_rules! impl_try_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Rational {
                type Error = RationalError;

                /// 超出 `i64` 时返回 [`RationalError::Overflow`]
                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    i64::try_from(value)
                        .map(Rational::from)
                        .map_err(|_| RationalError::Overflow)
                }
            }

            impl IntoRational for $t {
                fn into_rational(self) -> RationalResult<Rational> {
                    Rational::try_from(self)
                }
            }

            impl PartialEq<$t> for Rational {
                fn eq(&self, other: &$t) -> bool {
                    self.partial_cmp(other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$t> for Rational {
                /// 超出 `i64` 的整数大于（或小于）任何分数
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    match Rational::try_from(*other) {
                        Ok(other) => Some(self.cmp(&other)),
                        Err(_) if *other > 0 => Some(Ordering::Less),
                        Err(_) => Some(Ordering::Greater),
                    }
                }
            }
        )*
    };
}

impl_try_from_wide_integer!(u64, u128, usize, i128, isize);

macro_rules! impl_from_for_float {
    ($($t:ty),*) => {
        $(
            impl From<Rational> for $t {
                /// 近似转换为浮点数，有精度损失
                fn from(value: Rational) -> Self {
                    value.nume as $t / value.deno as $t
                }
            }
        )*
    };
}

impl_from_for_float!(f32, f64);

macro_rules! impl_try_from_for_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Rational> for $t {
                type Error = RationalError;

                /// 向零截断后转换
                fn try_from(value: Rational) -> Result<Self, Self::Error> {
                    let integer = value.nume / value.deno;
                    <$t>::try_from(integer).map_err(|_| RationalError::OutOfRange)
                }
            }
        )*
    };
}

impl_try_from_for_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
