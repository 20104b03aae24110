//! Fixed vocabulary tables the generators draw from.
//!
//! Generators never invent domain terms: every city, airline or hotel in the
//! output comes from these tables. The only free draws are the documented
//! numeric-id ranges (contacts, bookings, friends, transport companies,
//! posts, search results).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub cities: Vec<String>,
    pub countries: Vec<String>,
    pub states_india: Vec<String>,
    pub modes_of_transport: Vec<String>,
    pub travel_apps: Vec<String>,
    pub airlines: Vec<String>,
    pub hotels: Vec<String>,
    pub events_bengaluru: Vec<String>,
    pub local_attractions_bengaluru: Vec<String>,
    pub regions_europe: Vec<String>,
}

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            cities: strings(&[
                "London",
                "Paris",
                "New York",
                "Tokyo",
                "Rome",
                "Sydney",
                "Berlin",
                "Barcelona",
                "Amsterdam",
                "Dubai",
                "Bengaluru",
            ]),
            countries: strings(&[
                "United Kingdom",
                "France",
                "United States",
                "Japan",
                "Italy",
                "Australia",
                "Germany",
                "Spain",
                "Netherlands",
                "United Arab Emirates",
                "India",
            ]),
            states_india: strings(&["Karnataka", "Maharashtra", "Tamil Nadu", "Delhi"]),
            modes_of_transport: strings(&["flight", "train", "bus", "car", "cruise", "metro"]),
            travel_apps: strings(&[
                "MakeMyTrip",
                "Goibibo",
                "Booking.com",
                "Airbnb",
                "Expedia",
                "IRCTC Rail Connect",
            ]),
            airlines: strings(&[
                "Emirates",
                "Qatar Airways",
                "Singapore Airlines",
                "Air India",
                "British Airways",
                "IndiGo",
            ]),
            hotels: strings(&[
                "The Ritz-Carlton",
                "Four Seasons",
                "Mandarin Oriental",
                "Taj Hotels",
                "Hyatt",
                "The Leela Palace",
            ]),
            events_bengaluru: strings(&[
                "Bengaluru International Film Festival",
                "Namma Bengaluru Habba",
                "Karaga Festival",
            ]),
            local_attractions_bengaluru: strings(&[
                "Bangalore Palace",
                "Lalbagh Botanical Garden",
                "Vidhana Soudha",
                "Cubbon Park",
            ]),
            regions_europe: strings(&["Tuscany", "Bavaria", "Andalusia"]),
        }
    }
}
