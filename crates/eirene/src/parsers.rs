//! Library of parser functions

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::one_of;
use nom::combinator::{all_consuming, opt, value};
use nom::number::complete::double;
use nom::IResult;

/// First token of a comment line written by EIRENE
pub const COMMENT_MARKER: &str = "*eirene";

// ! Boolean checks

/// Check for a comment line
///
/// Only lines whose first whitespace-delimited token is exactly the marker
/// count. Blank lines are not comments, they just carry no tokens.
pub fn is_comment(i: &str) -> bool {
    i.split_whitespace().next() == Some(COMMENT_MARKER)
}

// ! Parser combinators

/// A complete floating point literal, nothing trailing
///
/// Accepts decimal and exponential notation, e.g. `-1.0`, `2.5E-03`, `7`,
/// as well as signed non-finite literals like `-Infinity` and `nan`.
pub fn number(i: &str) -> IResult<&str, f64> {
    all_consuming(alt((non_finite, double)))(i)
}

/// Optionally signed `infinity`, `inf`, or `nan` in any case
///
/// Fortran runtimes write overflowed values as `Infinity`/`-Infinity`, which
/// `double` alone does not recognise.
fn non_finite(i: &str) -> IResult<&str, f64> {
    let (i, sign) = opt(one_of("+-"))(i)?;
    // longest tag first so `inf` never stops short of `infinity`
    let (i, v) = alt((
        value(f64::INFINITY, tag_no_case("infinity")),
        value(f64::INFINITY, tag_no_case("inf")),
        value(f64::NAN, tag_no_case("nan")),
    ))(i)?;
    Ok((i, if sign == Some('-') { -v } else { v }))
}

/// Parse a single data token, `None` if it is not a number
pub fn token_value(token: &str) -> Option<f64> {
    number(token).ok().map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment("*eirene data field ...."));
        assert!(is_comment("   *eirene"));
        assert!(is_comment("*eirene\tflux"));

        // the marker has to be the whole first token
        assert!(!is_comment("*eirene2 comment"));
        assert!(!is_comment("*EIRENE comment"));
        assert!(!is_comment("1.0 *eirene"));

        // blank lines are skipped elsewhere, not as comments
        assert!(!is_comment(""));
        assert!(!is_comment("    "));
    }

    #[test]
    fn number_literals() {
        assert_eq!(token_value("1.0"), Some(1.0));
        assert_eq!(token_value("-2.5E-03"), Some(-2.5e-3));
        assert_eq!(token_value("0.12345e+02"), Some(12.345));
        assert_eq!(token_value("7"), Some(7.0));
        assert_eq!(token_value("+3."), Some(3.0));
    }

    #[test]
    fn non_finite_literals() {
        for token in ["inf", "+inf", "INF", "infinity", "Infinity", "+Infinity"] {
            assert_eq!(token_value(token), Some(f64::INFINITY), "{token}");
        }
        for token in ["-inf", "-Inf", "-infinity", "-Infinity", "-INFINITY"] {
            assert_eq!(token_value(token), Some(f64::NEG_INFINITY), "{token}");
        }
        for token in ["nan", "NaN", "-nan", "+NAN"] {
            assert!(token_value(token).is_some_and(f64::is_nan), "{token}");
        }

        // still has to be the whole token
        assert_eq!(token_value("infinit"), None);
        assert_eq!(token_value("-infx"), None);
        assert_eq!(token_value("--inf"), None);
        assert_eq!(token_value("nan1"), None);
    }

    #[test]
    fn rejects_partial_numbers() {
        assert_eq!(token_value("abc"), None);
        assert_eq!(token_value("1.0x"), None);
        assert_eq!(token_value("1.0-2.0"), None);
        assert_eq!(token_value(""), None);
    }
}
