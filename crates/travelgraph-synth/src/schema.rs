//! Class/property schema registry and its statement reification.
//!
//! The registry is plain data, independent of the event generators. Reifying
//! it is idempotent: two calls over the same registry produce the same
//! statement set.

use serde::{Deserialize, Serialize};
use travelgraph_model::ns;
use travelgraph_model::{Iri, Literal, Statement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub description: String,
    /// Parent class names; multiple inheritance is permitted.
    pub parents: Vec<String>,
    /// Property names the class exposes (descriptive metadata; domains are
    /// declared on the properties themselves).
    pub properties: Vec<String>,
}

/// Range of a property: another class, or a primitive literal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeRef {
    Class(String),
    Date,
    Str,
}

impl RangeRef {
    fn iri(&self) -> Iri {
        match self {
            RangeRef::Class(name) => Iri::kb(name),
            RangeRef::Date => Iri::new(ns::XSD_DATE),
            RangeRef::Str => Iri::new(ns::XSD_STRING),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub domain: String,
    pub range: RangeRef,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySchema {
    pub classes: Vec<ClassDef>,
    pub properties: Vec<PropertyDef>,
}

fn class(name: &str, description: &str, parents: &[&str], properties: &[&str]) -> ClassDef {
    ClassDef {
        name: name.to_string(),
        description: description.to_string(),
        parents: parents.iter().map(|s| s.to_string()).collect(),
        properties: properties.iter().map(|s| s.to_string()).collect(),
    }
}

fn prop(name: &str, domain: &str, range: RangeRef, description: &str) -> PropertyDef {
    PropertyDef {
        name: name.to_string(),
        domain: domain.to_string(),
        range,
        description: description.to_string(),
    }
}

fn cls(name: &str) -> RangeRef {
    RangeRef::Class(name.to_string())
}

impl OntologySchema {
    /// The travel-footprint ontology: user activity classes, the travel
    /// domain hierarchy, and the non-travel distractor classes.
    pub fn travel_default() -> Self {
        Self {
            classes: vec![
                class(
                    "User",
                    "Represents a user of the system.",
                    &[],
                    &[
                        "hasNotification",
                        "hasMessage",
                        "hasBooking",
                        "hasBrowsingHistory",
                        "hasCalendarEvent",
                        "hasSocialMediaActivity",
                        "hasLocalSearch",
                        "hasBankAccount",
                    ],
                ),
                class(
                    "Notification",
                    "Represents a notification.",
                    &["Event"],
                    &["aboutTrip"],
                ),
                class(
                    "Message",
                    "Represents a message.",
                    &[],
                    &["mentionsTravel", "discussesTravelWith"],
                ),
                class(
                    "TravelAppBooking",
                    "Represents a booking made through a travel app.",
                    &["Booking"],
                    &["hasBookingDetails"],
                ),
                class(
                    "BrowsingHistory",
                    "Represents user's browsing history.",
                    &[],
                    &["browsedFor"],
                ),
                class(
                    "CalendarEvent",
                    "Represents an event from user's calendar.",
                    &[],
                    &["atLocation", "onEventDate"],
                ),
                class(
                    "SocialMediaActivity",
                    "Represents user's activity on social media.",
                    &[],
                    &["sharedPost", "interactedWithFriend"],
                ),
                class(
                    "LocalSearch",
                    "Represents user's local search activity.",
                    &[],
                    &["searchQuery", "hasResult"],
                ),
                class(
                    "Trip",
                    "Represents a travel event or journey.",
                    &["Event"],
                    &["hasDestination", "hasTravelDate", "usesModeOfTransport"],
                ),
                class(
                    "Destination",
                    "Represents a location of travel.",
                    &["Place"],
                    &[],
                ),
                class("City", "A specific city.", &["Destination"], &[]),
                class("Country", "A country.", &["Destination"], &[]),
                class("State", "A state.", &["Destination"], &[]),
                class("Event", "A general event.", &[], &[]),
                class("Booking", "A travel booking.", &["Event"], &["bookingId"]),
                class(
                    "Application",
                    "A software application.",
                    &["Software"],
                    &[],
                ),
                class("Airline", "An airline company.", &["Organization"], &[]),
                class("Hotel", "A hotel.", &["Place"], &[]),
                class("Place", "A general place.", &[], &[]),
                class("Organization", "A general organization.", &[], &[]),
                class("Software", "A general software.", &[], &[]),
                class("TransportMode", "A mode of transportation.", &[], &[]),
                class("Attraction", "A tourist attraction.", &["Place"], &[]),
                class(
                    "BankAccount",
                    "User's bank account.",
                    &[],
                    &["accountNumber"],
                ),
            ],
            properties: vec![
                prop(
                    "hasNotification",
                    "User",
                    cls("Notification"),
                    "Relates a user to a notification.",
                ),
                prop(
                    "aboutTrip",
                    "Notification",
                    cls("Trip"),
                    "Relates a notification to a trip.",
                ),
                prop(
                    "hasMessage",
                    "User",
                    cls("Message"),
                    "Relates a user to a message.",
                ),
                prop(
                    "mentionsTravel",
                    "Message",
                    cls("Destination"),
                    "Indicates a destination mentioned in a message.",
                ),
                prop(
                    "discussesTravelWith",
                    "Message",
                    cls("User"),
                    "Indicates a user with whom travel is discussed.",
                ),
                prop(
                    "hasBooking",
                    "User",
                    cls("TravelAppBooking"),
                    "Relates a user to a travel app booking.",
                ),
                prop(
                    "hasBookingDetails",
                    "TravelAppBooking",
                    cls("Booking"),
                    "Relates a travel app booking to booking details",
                ),
                prop(
                    "hasDestination",
                    "Trip",
                    cls("Destination"),
                    "Relates a trip to its destination.",
                ),
                prop(
                    "hasTravelDate",
                    "Trip",
                    RangeRef::Date,
                    "Relates a trip to its date.",
                ),
                prop(
                    "usesModeOfTransport",
                    "Trip",
                    cls("TransportMode"),
                    "Mode of transport used for the trip",
                ),
                prop(
                    "bookedVia",
                    "Booking",
                    cls("Application"),
                    "Relates a booking to the application used.",
                ),
                prop(
                    "onAirline",
                    "Booking",
                    cls("Airline"),
                    "Relates a booking to the airline.",
                ),
                prop(
                    "operatedBy",
                    "Booking",
                    cls("Organization"),
                    "Company operating the transport.",
                ),
                prop(
                    "includesStayAt",
                    "Booking",
                    cls("Hotel"),
                    "Hotel included in the booking",
                ),
                prop("bookingId", "Booking", RangeRef::Str, "Booking Identifier"),
                prop(
                    "hasBrowsingHistory",
                    "User",
                    cls("BrowsingHistory"),
                    "Relates a user to their browsing history.",
                ),
                prop(
                    "browsedFor",
                    "BrowsingHistory",
                    cls("Destination"),
                    "Indicates a destination a user browsed for.",
                ),
                prop(
                    "hasCalendarEvent",
                    "User",
                    cls("CalendarEvent"),
                    "Relates a user to a calendar event.",
                ),
                prop(
                    "atLocation",
                    "CalendarEvent",
                    cls("Destination"),
                    "Location of Calendar Event",
                ),
                prop(
                    "onEventDate",
                    "CalendarEvent",
                    RangeRef::Date,
                    "Date of Calendar Event",
                ),
                prop(
                    "hasSocialMediaActivity",
                    "User",
                    cls("SocialMediaActivity"),
                    "User's social media activity",
                ),
                prop(
                    "sharedPost",
                    "SocialMediaActivity",
                    cls("Destination"),
                    "Destination shared in social media post",
                ),
                prop(
                    "interactedWithFriend",
                    "SocialMediaActivity",
                    cls("User"),
                    "User interacted with friend",
                ),
                prop(
                    "hasLocalSearch",
                    "User",
                    cls("LocalSearch"),
                    "User performed local search",
                ),
                prop(
                    "searchQuery",
                    "LocalSearch",
                    RangeRef::Str,
                    "Local Search query",
                ),
                prop(
                    "hasResult",
                    "LocalSearch",
                    RangeRef::Str,
                    "Result of local search",
                ),
                prop(
                    "hasBankAccount",
                    "User",
                    cls("BankAccount"),
                    "User has a bank account",
                ),
                prop(
                    "accountNumber",
                    "BankAccount",
                    RangeRef::Str,
                    "Bank account number",
                ),
            ],
        }
    }

    /// Emit the schema as statements: a type assertion, a comment and the
    /// parent-class links per class; a type assertion, a comment and
    /// domain/range links per property.
    pub fn reify(&self) -> Vec<Statement> {
        let mut out = Vec::new();
        for class in &self.classes {
            let class_iri = Iri::kb(&class.name);
            out.push(Statement::new(
                class_iri.clone(),
                Iri::new(ns::RDF_TYPE),
                Iri::new(ns::RDFS_CLASS),
            ));
            out.push(Statement::new(
                class_iri.clone(),
                Iri::new(ns::RDFS_COMMENT),
                Literal::plain(class.description.clone()),
            ));
            for parent in &class.parents {
                out.push(Statement::new(
                    class_iri.clone(),
                    Iri::new(ns::RDFS_SUBCLASS_OF),
                    Iri::kb(parent),
                ));
            }
        }
        for property in &self.properties {
            let prop_iri = Iri::kb(&property.name);
            out.push(Statement::new(
                prop_iri.clone(),
                Iri::new(ns::RDF_TYPE),
                Iri::new(ns::RDF_PROPERTY),
            ));
            out.push(Statement::new(
                prop_iri.clone(),
                Iri::new(ns::RDFS_COMMENT),
                Literal::plain(property.description.clone()),
            ));
            out.push(Statement::new(
                prop_iri.clone(),
                Iri::new(ns::RDFS_DOMAIN),
                Iri::kb(&property.domain),
            ));
            out.push(Statement::new(
                prop_iri,
                Iri::new(ns::RDFS_RANGE),
                property.range.iri(),
            ));
        }
        out
    }
}
