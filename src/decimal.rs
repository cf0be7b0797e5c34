/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use anyhow::{bail, Error};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{
	Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Hard cap on the number of fractional digits a division will produce.
/// Quotients that do not terminate (e.g. 1/3) are truncated here, with
/// no rounding of the final digit, so every division is a bounded
/// computation.
pub const MAX_DIGITS_AFTER_DECIMAL: usize = 1000;

/// An arbitrary-precision signed decimal number backed by a plain
/// sequence of base-ten digits. It is exact for every value that can be
/// written as a finite decimal string, which vastly exceeds the range of
/// any native numeric type; the intended users are accounting and
/// scientific callers for whom binary rounding error and fixed-width
/// overflow are both unacceptable.
///
/// Every value a caller can observe is in canonical form: no redundant
/// leading or trailing zero digits, and zero is never negative. All
/// operators hand back new values rather than mutating their operands.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Decimal {
	/// Single decimal digits (0-9), least significant first.
	digits: Vec<u8>,

	/// Is always false if the value is zero, else is intuitive.
	is_negative: bool,

	/// How many of the stored digits, counted from the least
	/// significant end, fall after the decimal point. Zero means the
	/// value is an integer.
	decimal_position: usize,
}

impl Decimal {
	pub fn zero() -> Self {
		Self {
			digits: vec![0],
			is_negative: false,
			decimal_position: 0,
		}
	}

	/// Parses a plain decimal string: an optional leading minus sign,
	/// digits, and at most one decimal point. A point with nothing
	/// before it (".5") gets an implicit leading zero. Anything else,
	/// including a string with no digits at all, is rejected rather
	/// than coerced to zero.
	pub fn from_str(input: &str) -> Result<Self, Error> {
		let is_negative = input.starts_with('-');
		let sanitized = input.strip_prefix('-').unwrap_or(input);

		let mut digits = Vec::with_capacity(sanitized.len());
		let mut decimal_position = None;

		// Scan right to left so digits land least significant first
		for c in sanitized.chars().rev() {
			match c {
				'0'..='9' => digits.push(c as u8 - b'0'),
				'.' if decimal_position.is_none() => {
					decimal_position = Some(digits.len());
				},
				_ => bail!("Invalid decimal format: {:?}", input),
			}
		}

		if digits.is_empty() {
			bail!("Invalid decimal format: {:?}", input);
		}

		let decimal_position = decimal_position.unwrap_or(0);

		if decimal_position == digits.len() {
			digits.push(0);
		}

		let mut out = Self {
			digits,
			is_negative,
			decimal_position,
		};
		out.normalize();
		Ok(out)
	}

	pub fn from_u128(amount: u128) -> Self {
		let mut digits = vec![];

		let mut n = amount;
		while n != 0 {
			digits.push((n % 10) as u8);
			n /= 10;
		}

		if digits.is_empty() {
			digits.push(0);
		}

		Self {
			digits,
			is_negative: false,
			decimal_position: 0,
		}
	}

	pub fn from_i128(amount: i128) -> Self {
		let mut out = Self::from_u128(amount.unsigned_abs());
		out.is_negative = amount < 0;
		out
	}

	pub fn abs(&self) -> Self {
		Self {
			is_negative: false,
			..self.clone()
		}
	}

	pub fn negate(&mut self) {
		if self.is_zero() {
			self.is_negative = false;
		} else {
			self.is_negative = !self.is_negative;
		}
	}

	pub fn is_zero(&self) -> bool {
		self.digits.iter().all(|&d| d == 0)
	}

	pub fn is_negative(&self) -> bool {
		self.is_negative
	}

	/// Division that surfaces a zero divisor as an error instead of a
	/// panic. Quotients are exact when they terminate and truncated
	/// after MAX_DIGITS_AFTER_DECIMAL fractional digits when they do
	/// not.
	pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
		if rhs.is_zero() {
			bail!("Attempt to divide by zero");
		}

		Ok(Self::divide(self, rhs))
	}

	fn num_digits(&self) -> usize {
		self.digits.len()
	}

	/// Digit lookup by position, with implicit leading zeroes above the
	/// stored width.
	fn digit_at(&self, i: usize) -> u32 {
		self.digits.get(i).map(|&d| d as u32).unwrap_or(0)
	}

	fn num_digits_before_decimal(&self) -> usize {
		self.num_digits() - self.decimal_position
	}

	/// Canonicalizes the representation in place without changing the
	/// numeric value: strips leading zero digits (never past the single
	/// digit the integer part needs), then trailing zero digits on the
	/// fractional side only. An all-zero digit sequence collapses to
	/// canonical zero, which also clears the sign. Idempotent.
	fn normalize(&mut self) {
		if self.is_zero() {
			*self = Self::zero();
			return;
		}

		let mut leading = 0;
		for &d in self.digits.iter().rev() {
			if d != 0 {
				break;
			}
			leading += 1;
		}
		let removable = leading.min(self.num_digits_before_decimal() - 1);
		self.digits.truncate(self.num_digits() - removable);

		let mut trailing = 0;
		for &d in self.digits.iter() {
			if d != 0 {
				break;
			}
			trailing += 1;
		}
		let removable = trailing.min(self.decimal_position);
		self.digits.drain(..removable);
		self.decimal_position -= removable;
	}

	/// Copy of self with extra zero digits below the least significant
	/// end, pushing the decimal position out to match. Magnitude is
	/// preserved; only the stored width changes.
	fn with_additional_trailing_zeroes(&self, count: usize) -> Self {
		let mut digits = vec![0u8; count];
		digits.extend_from_slice(&self.digits);

		Self {
			digits,
			is_negative: self.is_negative,
			decimal_position: self.decimal_position + count,
		}
	}

	/// Pads whichever operand has fewer fractional digits so both come
	/// back with the same decimal position.
	fn line_up_decimal_positions(a: &Self, b: &Self) -> (Self, Self) {
		if a.decimal_position > b.decimal_position {
			let padded = b.with_additional_trailing_zeroes(
				a.decimal_position - b.decimal_position,
			);
			(a.clone(), padded)
		} else {
			let padded = a.with_additional_trailing_zeroes(
				b.decimal_position - a.decimal_position,
			);
			(padded, b.clone())
		}
	}

	/// Multiplies by 10^power by pulling the decimal point right,
	/// widening with zero digits once the fractional side runs out.
	fn mult_power10(&self, power: usize) -> Self {
		let mut out = if self.decimal_position >= power {
			let mut out = self.clone();
			out.decimal_position -= power;
			out
		} else {
			let mut digits = vec![0u8; power - self.decimal_position];
			digits.extend_from_slice(&self.digits);

			Self {
				digits,
				is_negative: self.is_negative,
				decimal_position: 0,
			}
		};

		out.normalize();
		out
	}

	/// Divides by 10^power by pushing the decimal point left, widening
	/// with zero digits so the integer part keeps at least one digit.
	fn divide_power10(&self, power: usize) -> Self {
		let mut out = self.clone();
		out.decimal_position += power;

		if out.num_digits() <= out.decimal_position {
			let target = out.decimal_position + 1;
			out.digits.resize(target, 0);
		}

		out
	}

	/// Compares by magnitude alone, relying on canonical
	/// representations: the wider integer part wins outright, and a tie
	/// is settled digit by digit from the most significant end after
	/// lining up decimal positions.
	fn cmp_magnitudes(a: &Self, b: &Self) -> Ordering {
		match a
			.num_digits_before_decimal()
			.cmp(&b.num_digits_before_decimal())
		{
			Ordering::Equal => {},
			unequal => return unequal,
		}

		let (a, b) = Self::line_up_decimal_positions(a, b);

		for i in (0..a.num_digits().max(b.num_digits())).rev() {
			match a.digit_at(i).cmp(&b.digit_at(i)) {
				Ordering::Equal => {},
				unequal => return unequal,
			}
		}

		Ordering::Equal
	}

	/// Schoolbook digit-wise addition over magnitudes; sign handling is
	/// the caller's problem. The carry is a plain integer accumulator,
	/// drained into further digits once both operands are exhausted.
	fn add_magnitudes(a: &Self, b: &Self) -> Self {
		let (a, b) = Self::line_up_decimal_positions(a, b);
		let max_digits = a.num_digits().max(b.num_digits());

		let mut digits = Vec::with_capacity(max_digits + 1);
		let mut carry = 0u32;

		let mut i = 0;
		while i < max_digits || carry > 0 {
			let sum = carry + a.digit_at(i) + b.digit_at(i);
			digits.push((sum % 10) as u8);
			carry = sum / 10;
			i += 1;
		}

		let mut out = Self {
			digits,
			is_negative: false,
			decimal_position: a.decimal_position,
		};
		out.normalize();
		out
	}

	/// Schoolbook digit-wise subtraction over magnitudes with a ripple
	/// borrow. The minuend must be at least as large as the subtrahend;
	/// the borrow walk mutates a local scratch copy only.
	fn sub_magnitudes(a: &Self, b: &Self) -> Self {
		let (mut a, b) = Self::line_up_decimal_positions(a, b);
		let max_digits = a.num_digits().max(b.num_digits());

		let mut digits = Vec::with_capacity(max_digits);

		for i in 0..max_digits {
			let mut difference = a.digit_at(i);

			if difference < b.digit_at(i) {
				difference += 10;

				// Walk toward the more significant digits, turning
				// zeroes into nines until one can pay the borrow
				let mut borrow_index = i + 1;
				while a.digit_at(borrow_index) == 0 {
					a.digits[borrow_index] = 9;
					borrow_index += 1;
				}
				a.digits[borrow_index] -= 1;
			}

			digits.push((difference - b.digit_at(i)) as u8);
		}

		let mut out = Self {
			digits,
			is_negative: false,
			decimal_position: a.decimal_position,
		};
		out.normalize();
		out
	}

	/// Product of a single digit and a magnitude, by repeated addition.
	/// The digit is below ten, so the loop is tightly bounded.
	fn mult_single_digit(digit: u32, n: &Self) -> Self {
		let mut result = Self::zero();

		for _ in 0..digit {
			result = Self::add_magnitudes(&result, n);
		}

		result
	}

	/// Long division over magnitudes, one dividend digit at a time from
	/// the most significant end. Once the dividend is exhausted the
	/// remainder is extended with implicit zero digits to produce
	/// fractional digits, up to MAX_DIGITS_AFTER_DECIMAL of them. The
	/// divisor must be nonzero.
	fn divide(a: &Self, b: &Self) -> Self {
		let is_negative = a.is_negative != b.is_negative;

		let scale = a.decimal_position.max(b.decimal_position);
		let dividend = a.mult_power10(scale).abs();
		let divisor = b.mult_power10(scale).abs();

		// Quotient digits accumulate most significant first
		let mut quotient = Vec::with_capacity(dividend.num_digits());
		let mut remainder = Self::zero();

		for i in (0..dividend.num_digits()).rev() {
			remainder = Self::add_magnitudes(
				&remainder.mult_power10(1),
				&Self::from_u128(dividend.digit_at(i) as u128),
			);
			quotient.push(Self::next_quotient_digit(&mut remainder, &divisor));
		}

		let mut digits_after_decimal = 0;
		while !remainder.is_zero()
			&& digits_after_decimal < MAX_DIGITS_AFTER_DECIMAL
		{
			remainder = remainder.mult_power10(1);
			quotient.push(Self::next_quotient_digit(&mut remainder, &divisor));
			digits_after_decimal += 1;
		}

		quotient.reverse();

		let mut out = Self {
			digits: quotient,
			is_negative,
			decimal_position: digits_after_decimal,
		};
		out.normalize();
		out
	}

	/// Counts how many whole times the divisor fits into the remainder
	/// by repeated subtraction, leaving the rest behind. The count is
	/// below ten whenever the remainder came from a single bring-down
	/// step, so this is a unary search over one digit.
	fn next_quotient_digit(remainder: &mut Self, divisor: &Self) -> u8 {
		let mut count = 0u8;

		while *remainder >= *divisor {
			*remainder = Self::sub_magnitudes(remainder, divisor);
			count += 1;
		}

		count
	}
}

impl Default for Decimal {
	fn default() -> Self {
		Self::zero()
	}
}

impl fmt::Display for Decimal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut formatted = String::with_capacity(self.num_digits() + 2);

		for i in (0..self.num_digits()).rev() {
			formatted
				.push(std::char::from_digit(self.digit_at(i), 10).unwrap());
			if self.decimal_position > 0 && i == self.decimal_position {
				formatted.push('.');
			}
		}

		if self.is_negative {
			write!(f, "-{}", formatted)
		} else {
			write!(f, "{}", formatted)
		}
	}
}

// -----------------
// -- BOILERPLATE --
// -----------------

impl Add for Decimal {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		match (self.is_negative, rhs.is_negative) {
			(true, false) => rhs - -self,
			(false, true) => self - -rhs,
			(true, true) => -(-self + -rhs),
			(false, false) => Self::add_magnitudes(&self, &rhs),
		}
	}
}

impl AddAssign for Decimal {
	fn add_assign(&mut self, rhs: Self) {
		*self = self.clone() + rhs;
	}
}

impl Sum for Decimal {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Decimal::zero(), |acc, value| acc + value)
	}
}

impl Sub for Decimal {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		match (self.is_negative, rhs.is_negative) {
			(true, false) => -(-self + rhs),
			(false, true) => self + -rhs,
			(true, true) => -rhs - -self,
			(false, false) => {
				// Keeping the minuend on top means the borrow in the
				// digit loop can never run off the most significant end
				if rhs > self {
					-Self::sub_magnitudes(&rhs, &self)
				} else {
					Self::sub_magnitudes(&self, &rhs)
				}
			},
		}
	}
}

impl SubAssign for Decimal {
	fn sub_assign(&mut self, rhs: Self) {
		*self = self.clone() - rhs;
	}
}

impl Mul for Decimal {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		let is_negative = self.is_negative != rhs.is_negative;

		let (a, b) = Self::line_up_decimal_positions(&self, &rhs);
		let num_after_decimal = a.decimal_position;

		// Scale both operands to integers, multiply, then scale the
		// product back down by both adjustments at once
		let a = a.abs().mult_power10(num_after_decimal);
		let b = b.abs().mult_power10(num_after_decimal);

		let mut result = Self::zero();
		for i in 0..a.num_digits() {
			let partial = Self::mult_single_digit(a.digit_at(i), &b);
			result = Self::add_magnitudes(&result, &partial.mult_power10(i));
		}

		let mut out = result.divide_power10(2 * num_after_decimal);
		out.is_negative = is_negative;
		out.normalize();
		out
	}
}

impl MulAssign for Decimal {
	fn mul_assign(&mut self, rhs: Self) {
		*self = self.clone() * rhs;
	}
}

impl Div for Decimal {
	type Output = Self;

	fn div(self, rhs: Self) -> Self::Output {
		if rhs.is_zero() {
			panic!("Attempt to divide by zero");
		}

		Self::divide(&self, &rhs)
	}
}

impl DivAssign for Decimal {
	fn div_assign(&mut self, rhs: Self) {
		*self = self.clone() / rhs;
	}
}

impl Neg for Decimal {
	type Output = Self;

	fn neg(mut self) -> Self::Output {
		self.negate();
		self
	}
}

impl PartialOrd for Decimal {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Decimal {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative, other.is_negative) {
			(true, false) => Ordering::Less,
			(false, true) => Ordering::Greater,
			(true, true) => Self::cmp_magnitudes(other, self),
			(false, false) => Self::cmp_magnitudes(self, other),
		}
	}
}
