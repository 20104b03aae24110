//! Per-enrichment inclusion probabilities.
//!
//! Tuning constants, not a statistical model of real traveler behavior.

pub const NOTIFICATION_SUBJECT: f64 = 0.6;
pub const NOTIFICATION_OFFER_DESTINATION: f64 = 0.5;
pub const NOTIFICATION_REMINDER_DATE: f64 = 0.3;
pub const NOTIFICATION_INFO_LABEL: f64 = 0.2;
pub const NOTIFICATION_APP: f64 = 0.3;

pub const MESSAGE_TRAVEL_TALK: f64 = 0.7;
pub const MESSAGE_TRANSPORT_MODE: f64 = 0.4;
pub const MESSAGE_TRAVEL_DATE: f64 = 0.3;
pub const MESSAGE_HOTEL: f64 = 0.2;

pub const BOOKING_TRANSPORT_MODE: f64 = 0.6;
pub const BOOKING_FLIGHT_AIRLINE: f64 = 0.5;
pub const BOOKING_GROUND_OPERATOR: f64 = 0.4;
pub const BOOKING_HOTEL_STAY: f64 = 0.4;

pub const BROWSING_LOCATION: f64 = 0.8;
pub const BROWSING_SEARCH: f64 = 0.5;
pub const BROWSING_ATTRACTION: f64 = 0.3;
pub const BROWSING_REGION: f64 = 0.2;

pub const CALENDAR_LOCATION: f64 = 0.7;
pub const CALENDAR_LOCAL_EVENT: f64 = 0.4;

pub const SOCIAL_MENTION: f64 = 0.6;
pub const SOCIAL_FRIEND: f64 = 0.4;
pub const SOCIAL_FRIEND_SHARED_INTEREST: f64 = 0.5;
pub const SOCIAL_CHECKIN: f64 = 0.3;
