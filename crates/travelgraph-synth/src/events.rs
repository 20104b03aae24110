//! The seven category generators.
//!
//! Each generator is a pure function of the vocabulary, the configuration
//! and the random source. Per event it emits a small required statement
//! group, then decides each optional enrichment independently against its
//! [`crate::prob`] constant. Enrichment sub-groups are atomic: either every
//! statement of the enrichment is pushed or none is.

use chrono::{Duration, NaiveDate};
use travelgraph_model::ns;
use travelgraph_model::{Iri, Literal, Statement};

use crate::config::GeneratorConfig;
use crate::location::pick_location;
use crate::prob;
use crate::rng::XorShift64;
use crate::vocab::Vocabulary;

pub const NOTIFICATION_COUNT: usize = 10;
pub const MESSAGE_COUNT: usize = 10;
pub const BOOKING_COUNT: usize = 10;
pub const BROWSING_COUNT: usize = 10;
pub const CALENDAR_COUNT: usize = 5;
pub const SOCIAL_COUNT: usize = 7;
pub const LOCAL_SEARCH_COUNT: usize = 5;

const GENERAL_INFO_CONTENT: &[&str] = &[
    "New features available!",
    "Check out our latest blog post.",
    "Important security update.",
];

const NOTIFICATION_SUBJECT_KINDS: &[&str] = &["TravelOffer", "EventReminder", "GeneralInfo"];

fn typed(subject: Iri, class: &str) -> Statement {
    Statement::typed(subject, Iri::kb(class))
}

fn date_literal(date: NaiveDate) -> Literal {
    Literal::typed(
        date.format("%Y-%m-%d").to_string(),
        travelgraph_model::Datatype::Date,
    )
}

fn days_ahead(cfg: &GeneratorConfig, rng: &mut XorShift64, lo: i64, hi: i64) -> NaiveDate {
    cfg.today() + Duration::days(rng.int_in(lo, hi))
}

// ============================================================================
// Notifications
// ============================================================================

pub fn notification_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    for i in 0..NOTIFICATION_COUNT {
        let notif = Iri::kb_instance("Notification", &format!("notif_{i}"));
        out.push(typed(notif.clone(), "Notification"));
        out.push(Statement::new(
            cfg.user.clone(),
            Iri::kb("receivedNotificationAbout"),
            notif.clone(),
        ));

        let received = cfg.now - Duration::hours(rng.int_in(1, 72));
        out.push(Statement::new(
            notif.clone(),
            Iri::kb("whenReceived"),
            Literal::typed(
                received.format("%Y-%m-%dT%H:%M:%S").to_string(),
                travelgraph_model::Datatype::DateTime,
            ),
        ));

        if rng.chance(prob::NOTIFICATION_SUBJECT) {
            let kind = *rng.pick(NOTIFICATION_SUBJECT_KINDS);
            let thing = Iri::kb_instance(kind, &format!("{}_{i}", kind.to_lowercase()));
            out.push(Statement::new(
                notif.clone(),
                Iri::kb("hasSubject"),
                thing.clone(),
            ));
            out.push(typed(thing.clone(), kind));

            match kind {
                "TravelOffer" => {
                    if rng.chance(prob::NOTIFICATION_OFFER_DESTINATION) {
                        let location = pick_location(vocab, rng);
                        out.push(Statement::new(
                            thing,
                            Iri::kb("hasDestination"),
                            location.iri(),
                        ));
                        out.push(typed(location.iri(), "Location"));
                    }
                }
                "EventReminder" => {
                    if rng.chance(prob::NOTIFICATION_REMINDER_DATE) {
                        let event_date = days_ahead(cfg, rng, 1, 30);
                        out.push(Statement::new(
                            thing,
                            Iri::kb("onDate"),
                            date_literal(event_date),
                        ));
                    }
                }
                _ => {
                    if rng.chance(prob::NOTIFICATION_INFO_LABEL) {
                        let content = *rng.pick(GENERAL_INFO_CONTENT);
                        out.push(Statement::new(
                            thing,
                            Iri::new(ns::RDFS_LABEL),
                            Literal::plain(content),
                        ));
                    }
                }
            }
        } else {
            let content = *rng.pick(GENERAL_INFO_CONTENT);
            out.push(Statement::new(
                notif.clone(),
                Iri::new(ns::RDFS_LABEL),
                Literal::plain(content),
            ));
        }

        if rng.chance(prob::NOTIFICATION_APP) {
            let app = rng.pick(&vocab.travel_apps);
            let app_iri = Iri::kb_instance("travelapp", app);
            out.push(typed(app_iri.clone(), "TravelApp"));
            out.push(Statement::new(notif, Iri::kb("notifiedBy"), app_iri));
        }
    }
    out
}

// ============================================================================
// Messages
// ============================================================================

pub fn message_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    for i in 0..MESSAGE_COUNT {
        let message = Iri::kb_instance("Message", &i.to_string());
        out.push(typed(message.clone(), "Message"));

        let contact = Iri::kb_instance("Contact", &rng.int_in(1000, 9999).to_string());
        out.push(typed(contact.clone(), "Contact"));

        let location = pick_location(vocab, rng);
        out.push(typed(location.iri(), "Location"));

        if rng.chance(prob::MESSAGE_TRAVEL_TALK) {
            out.push(Statement::new(
                message.clone(),
                Iri::kb("mentionedTravelTo"),
                location.iri(),
            ));
            out.push(Statement::new(
                message.clone(),
                Iri::kb("discussedTravelWith"),
                contact.clone(),
            ));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("hasMessage"),
                message.clone(),
            ));
        }
        if rng.chance(prob::MESSAGE_TRANSPORT_MODE) {
            let mode = rng.pick(&vocab.modes_of_transport);
            let mode_iri = Iri::kb_instance("modeoftransport", mode);
            out.push(typed(mode_iri, "ModeOfTransport"));
            out.push(Statement::new(
                message.clone(),
                Iri::kb("discussedTravelModeFor"),
                location.iri(),
            ));
        }
        if rng.chance(prob::MESSAGE_TRAVEL_DATE) {
            out.push(Statement::new(
                message.clone(),
                Iri::kb("mentionedTravelDateFor"),
                location.iri(),
            ));
        }
        if rng.chance(prob::MESSAGE_HOTEL) {
            let hotel = rng.pick(&vocab.hotels);
            let hotel_iri = Iri::kb_instance("hotel", hotel);
            out.push(typed(hotel_iri, "Hotel"));
            out.push(Statement::new(
                message,
                Iri::kb("askedAboutHotelIn"),
                location.iri(),
            ));
        }
    }
    out
}

// ============================================================================
// Bookings (travel app)
// ============================================================================

pub fn booking_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();

    // One app per run: the user books everything through it.
    let app = rng.pick(&vocab.travel_apps);
    let app_iri = Iri::kb_instance("travelapp", app);
    out.push(typed(app_iri.clone(), "TravelApp"));

    for i in 0..BOOKING_COUNT {
        let booking = Iri::kb_instance("Booking", &i.to_string());
        out.push(typed(booking.clone(), "Booking"));
        out.push(Statement::new(
            cfg.user.clone(),
            Iri::kb("bookedTravelTo"),
            booking.clone(),
        ));
        out.push(Statement::new(
            booking.clone(),
            Iri::kb("bookedVia"),
            app_iri.clone(),
        ));

        let location = pick_location(vocab, rng);
        out.push(Statement::new(
            booking.clone(),
            Iri::kb("hasDestination"),
            location.iri(),
        ));
        out.push(typed(location.iri(), "Location"));

        let travel_date = days_ahead(cfg, rng, 1, 120);
        out.push(Statement::new(
            booking.clone(),
            Iri::kb("hasTravelDate"),
            date_literal(travel_date),
        ));

        if rng.chance(prob::BOOKING_TRANSPORT_MODE) {
            let mode = rng.pick(&vocab.modes_of_transport).clone();
            let mode_iri = Iri::kb_instance("modeoftransport", &mode);
            out.push(typed(mode_iri.clone(), "ModeOfTransport"));
            out.push(Statement::new(booking.clone(), Iri::kb("uses"), mode_iri));

            // Flight and ground operators are mutually exclusive branches.
            if mode == "flight" {
                if rng.chance(prob::BOOKING_FLIGHT_AIRLINE) {
                    let airline = rng.pick(&vocab.airlines);
                    let airline_iri = Iri::kb_instance("airline", airline);
                    out.push(typed(airline_iri.clone(), "Airline"));
                    out.push(Statement::new(
                        booking.clone(),
                        Iri::kb("onAirline"),
                        airline_iri,
                    ));
                }
            } else if (mode == "train" || mode == "bus")
                && rng.chance(prob::BOOKING_GROUND_OPERATOR)
            {
                let company = Iri::kb_instance("transportcompany", &rng.int_in(1, 20).to_string());
                out.push(typed(company.clone(), "TransportCompany"));
                out.push(Statement::new(
                    booking.clone(),
                    Iri::kb("operatedBy"),
                    company,
                ));
            }
        }
        if rng.chance(prob::BOOKING_HOTEL_STAY) {
            let hotel = rng.pick(&vocab.hotels);
            let hotel_iri = Iri::kb_instance("hotel", hotel);
            out.push(typed(hotel_iri.clone(), "Hotel"));
            out.push(Statement::new(
                booking.clone(),
                Iri::kb("includesStayAt"),
                hotel_iri.clone(),
            ));
            out.push(Statement::new(hotel_iri, Iri::kb("locatedIn"), location.iri()));
        }
    }
    out
}

// ============================================================================
// Browsing history
// ============================================================================

pub fn browsing_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    for i in 0..BROWSING_COUNT {
        let location = pick_location(vocab, rng);
        out.push(typed(location.iri(), "Location"));

        if rng.chance(prob::BROWSING_LOCATION) {
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("browsedAbout"),
                location.iri(),
            ));
        }
        if rng.chance(prob::BROWSING_SEARCH) {
            let templates = [
                format!("things to do in {}", location.name),
                format!("best hotels {}", location.name),
                format!("flights to {}", location.name),
                format!("train tickets to {}", location.name),
            ];
            let term = rng.pick(&templates).clone();
            // The search event is a named individual; the free-text query
            // only ever appears as a literal value on it.
            let query = Iri::kb_instance("LocalSearchQuery", &format!("browse_{i}"));
            out.push(typed(query.clone(), "LocalSearchQuery"));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("performedLocalSearch"),
                query.clone(),
            ));
            out.push(Statement::new(
                query,
                Iri::kb("searchedFor"),
                Literal::plain(term),
            ));
        }
        if rng.chance(prob::BROWSING_ATTRACTION) {
            let attraction = Iri::kb_instance(
                "attraction",
                &format!("{}_{}", location.name, rng.int_in(1, 5)),
            );
            out.push(typed(attraction.clone(), "Attraction"));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("showedInterestIn"),
                attraction.clone(),
            ));
            out.push(Statement::new(
                attraction,
                Iri::kb("locatedIn"),
                location.iri(),
            ));
        }
        if rng.chance(prob::BROWSING_REGION) {
            let region = rng.pick(&vocab.regions_europe);
            let region_iri = Iri::kb_instance("region", region);
            out.push(typed(region_iri.clone(), "Region"));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("researchedRegion"),
                region_iri,
            ));
        }
    }
    out
}

// ============================================================================
// Calendar events
// ============================================================================

pub fn calendar_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    for i in 0..CALENDAR_COUNT {
        let event = Iri::kb_instance("CalendarEvent", &i.to_string());
        out.push(typed(event.clone(), "CalendarEvent"));
        out.push(Statement::new(
            cfg.user.clone(),
            Iri::kb("hasCalendarEvent"),
            event.clone(),
        ));

        // Calendar events are pinned to a fixture month.
        let event_date = NaiveDate::from_ymd_opt(2025, 5, rng.int_in(1, 31) as u32)
            .expect("May has 31 days");
        out.push(Statement::new(
            event.clone(),
            Iri::kb("onDate"),
            date_literal(event_date),
        ));

        let mut attached = None;
        if rng.chance(prob::CALENDAR_LOCATION) {
            let location = pick_location(vocab, rng);
            out.push(Statement::new(
                event.clone(),
                Iri::kb("locatedAt"),
                location.iri(),
            ));
            out.push(typed(location.iri(), "Location"));
            attached = Some(location);
        }

        // Local-event enrichment only when the event actually resolved to
        // the city of Bengaluru.
        if let Some(location) = attached {
            if location.is_bengaluru() && rng.chance(prob::CALENDAR_LOCAL_EVENT) {
                let local_event = rng.pick(&vocab.events_bengaluru);
                let event_iri = Iri::kb_instance("event", local_event);
                out.push(typed(event_iri.clone(), "Event"));
                out.push(Statement::new(event, Iri::kb("isRelatedTo"), event_iri));
            }
        }
    }
    out
}

// ============================================================================
// Social media
// ============================================================================

pub fn social_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    for i in 0..SOCIAL_COUNT {
        let post = Iri::kb_instance("Post", &i.to_string());
        out.push(typed(post.clone(), "Post"));
        out.push(Statement::new(
            cfg.user.clone(),
            Iri::kb("sharedPostAbout"),
            post.clone(),
        ));

        let location = pick_location(vocab, rng);
        out.push(typed(location.iri(), "Location"));

        if rng.chance(prob::SOCIAL_MENTION) {
            out.push(Statement::new(
                post.clone(),
                Iri::kb("mentionsLocation"),
                location.iri(),
            ));
        }
        if rng.chance(prob::SOCIAL_FRIEND) {
            let friend = Iri::kb_instance("friend", &rng.int_in(100, 500).to_string());
            out.push(typed(friend.clone(), "Friend"));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("interactedWithFriendAbout"),
                friend.clone(),
            ));
            if rng.chance(prob::SOCIAL_FRIEND_SHARED_INTEREST) {
                let friend_location = pick_location(vocab, rng);
                out.push(Statement::new(
                    friend,
                    Iri::kb("alsoInterestedIn"),
                    friend_location.iri(),
                ));
            }
        }
        if location.is_bengaluru() && rng.chance(prob::SOCIAL_CHECKIN) {
            let attraction = rng.pick(&vocab.local_attractions_bengaluru);
            let attraction_iri = Iri::kb_instance("attraction", attraction);
            out.push(typed(attraction_iri.clone(), "Attraction"));
            out.push(Statement::new(
                cfg.user.clone(),
                Iri::kb("checkedInAt"),
                attraction_iri.clone(),
            ));
            out.push(Statement::new(
                attraction_iri,
                Iri::kb("locatedIn"),
                location.iri(),
            ));
        }
    }
    out
}

// ============================================================================
// Local search (feature-gated demo category)
// ============================================================================

pub fn local_search_statements(
    vocab: &Vocabulary,
    cfg: &GeneratorConfig,
    rng: &mut XorShift64,
) -> Vec<Statement> {
    let mut out = Vec::new();
    if !cfg.local_search.active_on(cfg.today()) {
        return out;
    }

    for i in 0..LOCAL_SEARCH_COUNT {
        let templates = [
            "restaurants near me".to_string(),
            format!("hotels in {}", rng.pick(&vocab.states_india)),
            format!("tourist places in {}", rng.pick(&vocab.cities)),
        ];
        let query_text = rng.pick(&templates).clone();

        let query = Iri::kb_instance("LocalSearchQuery", &i.to_string());
        out.push(typed(query.clone(), "LocalSearchQuery"));
        out.push(Statement::new(
            cfg.user.clone(),
            Iri::kb("performedLocalSearch"),
            query.clone(),
        ));
        out.push(Statement::new(
            query.clone(),
            Iri::kb("searchedFor"),
            Literal::plain(query_text.clone()),
        ));

        let kind = *rng.pick(&["restaurant", "hotel", "attraction"]);
        let result = Iri::kb_instance(kind, &format!("{kind}_{}", rng.int_in(1, 300)));
        out.push(Statement::new(
            query,
            Iri::kb("hasSearchResult"),
            result.clone(),
        ));
        out.push(typed(result.clone(), &capitalize(kind)));

        if query_text.contains("hotels in") {
            let state = rng.pick(&vocab.states_india);
            let state_iri = Iri::kb_instance("state", state);
            out.push(typed(state_iri.clone(), "Location"));
            out.push(Statement::new(result, Iri::kb("locatedIn"), state_iri));
        } else if query_text.contains("tourist places") {
            let city = rng.pick(&vocab.cities);
            let city_iri = Iri::kb_instance("location", city);
            out.push(typed(city_iri.clone(), "Location"));
            out.push(Statement::new(result, Iri::kb("locatedIn"), city_iri));
        } else if query_text.contains("restaurants") {
            let bengaluru = Iri::kb_instance("location", "Bengaluru");
            out.push(typed(bengaluru.clone(), "Location"));
            out.push(Statement::new(result, Iri::kb("locatedIn"), bengaluru));
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
