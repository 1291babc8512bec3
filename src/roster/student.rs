use serde::{Deserialize, Serialize};

/// One row of the roster as served by the grades endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// NaN when the last edit could not be read as a number.
    pub score: f64,
}

impl Student {
    pub fn score_text(&self) -> String {
        format_score(self.score)
    }
}

/// Read a score the way the score field hands it over: skip leading
/// whitespace, accept one sign, then take the leading run of decimal digits.
/// Anything after the digits is ignored. No digits yields NaN.
pub fn parse_score(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return f64::NAN;
    }

    match digits.parse::<f64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// Display text for a score: whole numbers without a fraction, everything
/// else in its shortest round-tripping form.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "NaN".to_string()
    } else if score.is_infinite() {
        let name = if score > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if score == 0.0 {
        // covers -0.0
        "0".to_string()
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_score("85"), 85.0);
        assert_eq!(parse_score("0"), 0.0);
        assert_eq!(parse_score("-12"), -12.0);
        assert_eq!(parse_score("+7"), 7.0);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_score("85abc"), 85.0);
        assert_eq!(parse_score("3.7"), 3.0);
        assert_eq!(parse_score("  42  "), 42.0);
        assert_eq!(parse_score("1e3"), 1.0);
    }

    #[test]
    fn unreadable_input_is_nan() {
        for input in ["", "   ", "abc", "-", "+", ".5", "- 5"] {
            assert!(parse_score(input).is_nan(), "expected NaN for {:?}", input);
        }
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(format_score(80.0), "80");
        assert_eq!(format_score(-3.0), "-3");
        assert_eq!(format_score(-0.0), "0");
    }

    #[test]
    fn fractions_print_shortest_form() {
        assert_eq!(format_score(80.5), "80.5");
        assert_eq!(format_score(250.0 / 3.0), "83.33333333333333");
    }

    #[test]
    fn non_finite_scores_have_names() {
        assert_eq!(format_score(f64::NAN), "NaN");
        assert_eq!(format_score(f64::INFINITY), "Infinity");
        assert_eq!(format_score(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn deserializes_integer_and_fractional_scores() {
        let students: Vec<Student> = serde_json::from_str(
            r#"[{"id": 1, "name": "Ada", "score": 91}, {"id": 2, "name": "Linus", "score": 77.5}]"#,
        )
        .expect("valid roster json");

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].score_text(), "91");
        assert_eq!(students[1].score, 77.5);
    }
}
