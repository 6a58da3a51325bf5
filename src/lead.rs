//! Lead data model and the webhook wire format.

use crate::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::error::{UnknownField, ValidationError};
use crate::utils::validate_submission;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A point picked on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Fallback map center when nothing has been selected yet.
    pub const fn default_center() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

/// The five text inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nom,
    Prenom,
    Email,
    Telephone,
    FactureElectricite,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Nom,
        Field::Prenom,
        Field::Email,
        Field::Telephone,
        Field::FactureElectricite,
    ];

    /// Value of the input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nom => "nom",
            Field::Prenom => "prenom",
            Field::Email => "email",
            Field::Telephone => "telephone",
            Field::FactureElectricite => "factureElectricite",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nom => "Nom *",
            Field::Prenom => "Prénom *",
            Field::Email => "Email *",
            Field::Telephone => "Téléphone *",
            Field::FactureElectricite => "Facture mensuelle d'électricité (€) *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Nom => "Votre nom",
            Field::Prenom => "Votre prénom",
            Field::Email => "votre@email.fr",
            Field::Telephone => "06 12 34 56 78",
            Field::FactureElectricite => "150",
        }
    }

    /// HTML `type` of the input.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Nom | Field::Prenom => "text",
            Field::Email => "email",
            Field::Telephone => "tel",
            Field::FactureElectricite => "number",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSubmission {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub monthly_bill_amount: String,
    pub coordinate: Option<Coordinate>,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nom => &self.last_name,
            Field::Prenom => &self.first_name,
            Field::Email => &self.email,
            Field::Telephone => &self.phone,
            Field::FactureElectricite => &self.monthly_bill_amount,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Nom => &mut self.last_name,
            Field::Prenom => &mut self.first_name,
            Field::Email => &mut self.email,
            Field::Telephone => &mut self.phone,
            Field::FactureElectricite => &mut self.monthly_bill_amount,
        };
        *slot = value;
    }

    /// Validate and build the request body stamped with `submitted_at`.
    pub fn to_payload(
        &self,
        submitted_at: DateTime<Utc>,
    ) -> Result<WebhookPayload, ValidationError> {
        let coordonnees_gps = validate_submission(self)?;
        Ok(WebhookPayload {
            nom: self.last_name.clone(),
            prenom: self.first_name.clone(),
            email: self.email.clone(),
            telephone: self.phone.clone(),
            facture_mensuelle_electricite: self.monthly_bill_amount.clone(),
            coordonnees_gps,
            date_soumission: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub facture_mensuelle_electricite: String,
    pub coordonnees_gps: Coordinate,
    pub date_soumission: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn field_names_parse_back() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("adresse".parse::<Field>().is_err());
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut sub = ContactSubmission::default();
        sub.set(Field::Telephone, "0612345678".into());
        assert_eq!(sub.phone, "0612345678");
        assert_eq!(
            sub,
            ContactSubmission {
                phone: "0612345678".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn payload_uses_wire_names_and_iso_timestamp() {
        let sub = ContactSubmission {
            last_name: "Dupont".into(),
            first_name: "Jean".into(),
            email: "jean@example.fr".into(),
            phone: "0612345678".into(),
            monthly_bill_amount: "150".into(),
            coordinate: Some(Coordinate::new(48.8566, 2.3522)),
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let body = serde_json::to_string(&sub.to_payload(at).unwrap()).unwrap();

        assert!(body.contains(r#""nom":"Dupont""#));
        assert!(body.contains(r#""facture_mensuelle_electricite":"150""#));
        assert!(body.contains(r#""coordonnees_gps":{"latitude":48.8566,"longitude":2.3522}"#));
        assert!(body.contains(r#""date_soumission":"2024-05-01T09:30:00.000Z""#));
    }

    #[test]
    fn no_payload_for_incomplete_submission() {
        let sub = ContactSubmission::default();
        assert_eq!(sub.to_payload(Utc::now()), Err(ValidationError::MissingFields));
    }
}
