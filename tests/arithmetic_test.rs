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
use bigdec::{Decimal, MAX_DIGITS_AFTER_DECIMAL};

fn parse(input: &str) -> Decimal {
	Decimal::from_str(input)
		.unwrap_or_else(|e| panic!("{:?} failed to parse: {}", input, e))
}

fn check_addition(a: &str, b: &str, expected: &str) {
	assert_eq!(
		(parse(a) + parse(b)).to_string(),
		expected,
		"{} + {} should be {}",
		a,
		b,
		expected
	);
}

fn check_subtraction(a: &str, b: &str, expected: &str) {
	assert_eq!(
		(parse(a) - parse(b)).to_string(),
		expected,
		"{} - {} should be {}",
		a,
		b,
		expected
	);
}

fn check_multiplication(a: &str, b: &str, expected: &str) {
	assert_eq!(
		(parse(a) * parse(b)).to_string(),
		expected,
		"{} * {} should be {}",
		a,
		b,
		expected
	);
}

fn check_division(a: &str, b: &str, expected: &str) {
	assert_eq!(
		(parse(a) / parse(b)).to_string(),
		expected,
		"{} / {} should be {}",
		a,
		b,
		expected
	);
}

fn check_less_than(a: &str, b: &str, expected: bool) {
	assert_eq!(
		parse(a) < parse(b),
		expected,
		"{} < {} should be {}",
		a,
		b,
		expected
	);
}

fn check_greater_than(a: &str, b: &str, expected: bool) {
	assert_eq!(
		parse(a) > parse(b),
		expected,
		"{} > {} should be {}",
		a,
		b,
		expected
	);
}

#[test]
fn test_addition() {
	check_addition("0", "0", "0");
	check_addition("1", "0", "1");
	check_addition("1", "1", "2");
	check_addition("1234", "1234", "2468");
	check_addition("97654321", "812345512", "909999833");

	check_addition("1", "-1", "0");
	check_addition("-1234", "-3456", "-4690");
	check_addition("-3456", "1234", "-2222");

	check_addition("1.5", "2.25", "3.75");
	check_addition("3", "1.23456", "4.23456");
	check_addition("1.23456", "3", "4.23456");
}

#[test]
fn test_subtraction() {
	check_subtraction("0", "0", "0");
	check_subtraction("1", "0", "1");
	check_subtraction("1", "1", "0");
	check_subtraction("2468", "1234", "1234");
	check_subtraction("97654321", "812345512", "-714691191");

	check_subtraction("1", "-1", "2");
	check_subtraction("-1234", "-3456", "2222");
	check_subtraction("-3456", "1234", "-4690");

	check_subtraction("1.5", "2.25", "-0.75");
	check_subtraction("3", "1.23456", "1.76544");
	check_subtraction("1.23456", "3", "-1.76544");
}

#[test]
fn test_multiplication() {
	check_multiplication("0", "0", "0");
	check_multiplication("1", "0", "0");
	check_multiplication("1", "1", "1");
	check_multiplication("2468", "1234", "3045512");
	check_multiplication("97654321", "812345512", "79329049391757352");

	check_multiplication("1", "-1", "-1");
	check_multiplication("-1234", "-3456", "4264704");
	check_multiplication("-3456", "1234", "-4264704");

	check_multiplication("1.5", "2.25", "3.375");
	check_multiplication("3", "1.23456", "3.70368");
	check_multiplication("-1.23456", "3", "-3.70368");
}

#[test]
fn test_division() {
	check_division("0", "1", "0");
	check_division("1", "2", "0.5");
	check_division("5", "2", "2.5");
	check_division(
		"21542184597952765727218712792342",
		"100000000000000000000000000000000",
		"0.21542184597952765727218712792342",
	);
	check_division(
		"-21542184597952765727218712792342",
		"100000000000000000000000000000000",
		"-0.21542184597952765727218712792342",
	);
	check_division(
		"-21542184597952765727218712792342",
		"-100000000000000000000000000000000",
		"0.21542184597952765727218712792342",
	);
}

#[test]
fn test_division_of_repeating_decimal_truncates() {
	let zero_point_3_repeating =
		format!("0.{}", "3".repeat(MAX_DIGITS_AFTER_DECIMAL));
	check_division("1", "3", &zero_point_3_repeating);
}

#[test]
fn test_less_than() {
	check_less_than("0", "0", false);
	check_less_than("1", "0", false);
	check_less_than("0", "1", true);
	check_less_than("1234", "123", false);
	check_less_than("2468", "2468", false);
	check_less_than("45681565515", "45681566515", true);

	check_less_than("1234", "-1234", false);
	check_less_than("-3456", "1234", true);
	check_less_than("-1234", "-3456", false);

	check_less_than("1.23456789", "2.5", true);
	check_less_than("3.1", "4", true);
	check_less_than("5", "4.75", false);
}

#[test]
fn test_greater_than() {
	check_greater_than("0", "0", false);
	check_greater_than("1", "0", true);
	check_greater_than("0", "1", false);
	check_greater_than("1234", "123", true);
	check_greater_than("2468", "2468", false);
	check_greater_than("45681565515", "45681566515", false);

	check_greater_than("1234", "-1234", true);
	check_greater_than("-3456", "1234", false);
	check_greater_than("-1234", "-3456", true);

	check_greater_than("1.23456789", "2.5", false);
	check_greater_than("3.1", "4", false);
	check_greater_than("5", "4.75", true);
}
