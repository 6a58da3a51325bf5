use crate::config::COORDINATE_DISPLAY_DECIMALS;
use crate::error::ValidationError;
use crate::lead::{ContactSubmission, Coordinate, Field};
use once_cell::sync::Lazy;
use regex::Regex;

// Plain amount, optional decimal part with either separator
static BILL_AMOUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+([.,]\d+)?$").expect("bill amount pattern is valid"));

/// Fields still left empty, in display order.
pub fn missing_fields(submission: &ContactSubmission) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|&f| submission.get(f).is_empty())
        .collect()
}

/// Presence checks run before anything is sent.
///
/// Text fields are checked first, so a blank form reports
/// [`ValidationError::MissingFields`] even when no coordinate is set.
pub fn validate_submission(submission: &ContactSubmission) -> Result<Coordinate, ValidationError> {
    if !missing_fields(submission).is_empty() {
        return Err(ValidationError::MissingFields);
    }
    submission.coordinate.ok_or(ValidationError::MissingLocation)
}

/// Whether the monthly bill reads as a plain amount such as `150` or `89,90`.
///
/// Advisory only: a mismatch is logged, never blocks submission.
pub fn bill_looks_numeric(input: &str) -> bool {
    BILL_AMOUNT_REGEX.is_match(input.trim())
}

/// Render a coordinate as `lat, lng` with fixed precision.
pub fn format_coordinate(coordinate: &Coordinate) -> String {
    format!(
        "{:.prec$}, {:.prec$}",
        coordinate.latitude,
        coordinate.longitude,
        prec = COORDINATE_DISPLAY_DECIMALS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            last_name: "Dupont".into(),
            first_name: "Jean".into(),
            email: "jean@example.fr".into(),
            phone: "0612345678".into(),
            monthly_bill_amount: "150".into(),
            coordinate: Some(Coordinate::new(48.8566, 2.3522)),
        }
    }

    #[test]
    fn any_single_empty_field_is_reported() {
        for field in Field::ALL {
            let mut sub = filled();
            sub.set(field, String::new());
            assert_eq!(missing_fields(&sub), vec![field]);
            assert_eq!(validate_submission(&sub), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn fields_are_checked_before_location() {
        let sub = ContactSubmission::default();
        assert_eq!(validate_submission(&sub), Err(ValidationError::MissingFields));

        let mut sub = filled();
        sub.coordinate = None;
        assert_eq!(validate_submission(&sub), Err(ValidationError::MissingLocation));
    }

    #[test]
    fn origin_is_a_valid_location() {
        let mut sub = filled();
        sub.coordinate = Some(Coordinate::new(0.0, 0.0));
        assert_eq!(validate_submission(&sub), Ok(Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn bill_amount_shapes() {
        assert!(bill_looks_numeric("150"));
        assert!(bill_looks_numeric(" 89,90 "));
        assert!(bill_looks_numeric("120.5"));
        assert!(!bill_looks_numeric("-20"));
        assert!(!bill_looks_numeric("beaucoup"));
    }

    #[test]
    fn coordinates_render_with_six_decimals() {
        assert_eq!(
            format_coordinate(&Coordinate::new(48.8566, 2.3522)),
            "48.856600, 2.352200"
        );
    }
}
