//! CLI output formatting.

/// Format a value with `precision` significant digits, `%g` style.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`; trailing zeros are removed in both notations.
#[must_use]
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Round once in scientific form so the exponent reflects any carry.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let precision_i32 = i32::try_from(precision).unwrap_or(i32::MAX);

    if exp < -4 || exp >= precision_i32 {
        with_exponent(trim_fraction(mantissa), exp)
    } else {
        let decimals = usize::try_from(precision_i32 - 1 - exp).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Join a mantissa and a decimal exponent in `e±NN` form.
fn with_exponent(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format an input parameter in shortest round-trip form, keeping a decimal
/// point on whole numbers (`1.0`, `2.5`, `-3.0`). Very large or small
/// magnitudes switch to `1e+16` / `1.5e-07` notation.
#[must_use]
pub fn format_param(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => with_exponent(mantissa, exp),
            Err(_) => repr,
        },
        None => repr,
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Join values as a comma-separated `%g` list.
#[must_use]
pub fn format_terms(terms: &[f64], precision: usize) -> String {
    terms
        .iter()
        .map(|&t| format_g(t, precision))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_g_integers() {
        assert_eq!(format_g(100.0, 6), "100");
        assert_eq!(format_g(31.0, 6), "31");
        assert_eq!(format_g(-2.0, 6), "-2");
        assert_eq!(format_g(0.0, 6), "0");
    }

    #[test]
    fn format_g_fractions() {
        assert_eq!(format_g(0.5, 6), "0.5");
        assert_eq!(format_g(1.0 / 3.0, 6), "0.333333");
        assert_eq!(format_g(123.456789, 6), "123.457");
        assert_eq!(format_g(0.0001, 6), "0.0001");
    }

    #[test]
    fn format_g_scientific() {
        assert_eq!(format_g(1_000_000.0, 6), "1e+06");
        assert_eq!(format_g(1_234_567.0, 6), "1.23457e+06");
        assert_eq!(format_g(0.00001, 6), "1e-05");
        assert_eq!(format_g(-6.02e23, 6), "-6.02e+23");
    }

    #[test]
    fn format_g_rounding_carry() {
        assert_eq!(format_g(999_999.5, 6), "1e+06");
        assert_eq!(format_g(9.9996, 3), "10");
    }

    #[test]
    fn format_g_non_finite() {
        assert_eq!(format_g(f64::INFINITY, 6), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_g(f64::NAN, 6), "nan");
    }

    #[test]
    fn format_param_keeps_decimal_point() {
        assert_eq!(format_param(1.0), "1.0");
        assert_eq!(format_param(-2.5), "-2.5");
        assert_eq!(format_param(0.0001), "0.0001");
        assert_eq!(format_param(1e15), "1000000000000000.0");
    }

    #[test]
    fn format_param_exponent_is_signed_and_padded() {
        assert_eq!(format_param(1e-5), "1e-05");
        assert_eq!(format_param(1e16), "1e+16");
        assert_eq!(format_param(-1.5e-7), "-1.5e-07");
        assert_eq!(format_param(2.5e200), "2.5e+200");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }

    #[test]
    fn format_terms_joins() {
        assert_eq!(format_terms(&[1.0, 2.0, 4.5], 6), "1, 2, 4.5");
        assert_eq!(format_terms(&[], 6), "");
    }
}
