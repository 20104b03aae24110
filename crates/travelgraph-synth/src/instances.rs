//! Fixture individuals and their statement reification.
//!
//! A small registry of concrete named individuals (the user, one trip, a few
//! non-travel distractors) that gets reified alongside the schema. Like the
//! schema, reification is idempotent.

use serde::{Deserialize, Serialize};
use travelgraph_model::ns;
use travelgraph_model::{Datatype, Iri, Literal, Statement, Term};

/// Value of an instance property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceValue {
    /// Reference to another individual by its `kb:` key.
    Ref(String),
    Text(String),
    Date(String),
}

impl InstanceValue {
    fn term(&self) -> Term {
        match self {
            InstanceValue::Ref(key) => Term::Node(Iri::kb(key)),
            InstanceValue::Text(text) => Term::Literal(Literal::plain(text.clone())),
            InstanceValue::Date(date) => {
                Term::Literal(Literal::typed(date.clone(), Datatype::Date))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDef {
    /// `kb:` key of the individual, e.g. `user/me`.
    pub key: String,
    pub class: String,
    pub properties: Vec<(String, Vec<InstanceValue>)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRegistry {
    pub instances: Vec<InstanceDef>,
}

fn inst(key: &str, class: &str, properties: &[(&str, &[InstanceValue])]) -> InstanceDef {
    InstanceDef {
        key: key.to_string(),
        class: class.to_string(),
        properties: properties
            .iter()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
            .collect(),
    }
}

fn node(key: &str) -> InstanceValue {
    InstanceValue::Ref(key.to_string())
}

fn text(value: &str) -> InstanceValue {
    InstanceValue::Text(value.to_string())
}

fn date(value: &str) -> InstanceValue {
    InstanceValue::Date(value.to_string())
}

impl InstanceRegistry {
    /// Fixture individuals: travel facts for `user/me` plus non-travel
    /// distractors (bank accounts, a doctor's appointment) that exercise the
    /// schema's non-travel classes.
    pub fn travel_default() -> Self {
        Self {
            instances: vec![
                inst(
                    "user/me",
                    "User",
                    &[("hasBankAccount", &[node("bankaccount/12345")])],
                ),
                inst(
                    "user/john_doe",
                    "User",
                    &[("hasBankAccount", &[node("bankaccount/67890")])],
                ),
                inst(
                    "notification/trip1",
                    "Notification",
                    &[("aboutTrip", &[node("trip/london_2025-05-20")])],
                ),
                inst("notification/promo1", "Notification", &[]),
                inst(
                    "message/london_trip",
                    "Message",
                    &[
                        ("mentionsTravel", &[text("London")]),
                        ("discussesTravelWith", &[node("user/contact1")]),
                    ],
                ),
                inst("message/meeting_reminder", "Message", &[]),
                inst(
                    "booking/123",
                    "TravelAppBooking",
                    &[("hasBookingDetails", &[node("booking_details/123")])],
                ),
                inst("booking/non_travel", "Booking", &[]),
                inst(
                    "browsing_history/london",
                    "BrowsingHistory",
                    &[("browsedFor", &[text("London")])],
                ),
                inst("browsing_history/recipes", "BrowsingHistory", &[]),
                inst(
                    "calendar_event/london_trip",
                    "CalendarEvent",
                    &[
                        ("atLocation", &[text("London")]),
                        ("onEventDate", &[date("2025-05-20")]),
                    ],
                ),
                inst("calendar_event/doctor_appt", "CalendarEvent", &[]),
                inst(
                    "social_media_activity/london_post",
                    "SocialMediaActivity",
                    &[("sharedPost", &[text("London")])],
                ),
                inst(
                    "social_media_activity/general_post",
                    "SocialMediaActivity",
                    &[],
                ),
                inst(
                    "local_search/restaurants",
                    "LocalSearch",
                    &[
                        ("searchQuery", &[text("restaurants near me")]),
                        ("hasResult", &[node("restaurant/1")]),
                    ],
                ),
                inst("local_search/directions", "LocalSearch", &[]),
                inst(
                    "trip/london_2025-05-20",
                    "Trip",
                    &[
                        ("hasDestination", &[text("London")]),
                        ("hasTravelDate", &[date("2025-05-20")]),
                        ("usesModeOfTransport", &[text("flight")]),
                    ],
                ),
                inst("destination/london", "City", &[]),
                inst("destination/uk", "Country", &[]),
                inst("destination/karnataka", "State", &[]),
                inst("application/makemytrip", "Application", &[]),
                inst("airline/emirates", "Airline", &[]),
                inst("hotel/ritz_london", "Hotel", &[]),
                inst("transportmode/flight", "TransportMode", &[]),
                inst("attraction/london_eye", "Attraction", &[]),
                inst(
                    "bankaccount/12345",
                    "BankAccount",
                    &[("accountNumber", &[text("12345")])],
                ),
                inst(
                    "bankaccount/67890",
                    "BankAccount",
                    &[("accountNumber", &[text("67890")])],
                ),
            ],
        }
    }

    /// Emit one type assertion per individual plus one statement per
    /// property value.
    pub fn reify(&self) -> Vec<Statement> {
        let mut out = Vec::new();
        for instance in &self.instances {
            let subject = Iri::kb(&instance.key);
            out.push(Statement::new(
                subject.clone(),
                Iri::new(ns::RDF_TYPE),
                Iri::kb(&instance.class),
            ));
            for (name, values) in &instance.properties {
                for value in values {
                    out.push(Statement::new(
                        subject.clone(),
                        Iri::kb(name),
                        value.term(),
                    ));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reification_is_idempotent() {
        let registry = InstanceRegistry::travel_default();
        let first: HashSet<Statement> = registry.reify().into_iter().collect();
        let second: HashSet<Statement> = registry.reify().into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_instance_gets_a_type_assertion() {
        let registry = InstanceRegistry::travel_default();
        let statements = registry.reify();
        let typed: HashSet<&str> = statements
            .iter()
            .filter(|s| s.is_type_assertion())
            .map(|s| s.subject.as_str())
            .collect();
        for instance in &registry.instances {
            assert!(typed.contains(Iri::kb(&instance.key).as_str()));
        }
    }

    #[test]
    fn date_values_carry_the_date_datatype() {
        let registry = InstanceRegistry::travel_default();
        let statements = registry.reify();
        let stmt = statements
            .iter()
            .find(|s| s.predicate.local_name() == "hasTravelDate")
            .expect("trip travel date");
        let lit = stmt.object.as_literal().expect("literal object");
        assert_eq!(lit.datatype, Some(Datatype::Date));
        assert_eq!(lit.lexical, "2025-05-20");
    }
}
