//! Activity Suggestions
//!
//! Suggestions come from a static table keyed by city. Lookup trims and
//! lowercases the requested name; unknown cities get three generic items
//! built from the name exactly as the caller typed it.

use serde::{Deserialize, Serialize};

/// A suggested activity for a destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionItem {
    pub name: String,
    pub category: String,
    pub estimated_cost: f64,
    pub rating: f64,
    pub image_url: String,
}

struct Entry {
    name: &'static str,
    category: &'static str,
    estimated_cost: f64,
    rating: f64,
    image_url: &'static str,
}

impl Entry {
    fn to_item(&self) -> SuggestionItem {
        SuggestionItem {
            name: self.name.to_string(),
            category: self.category.to_string(),
            estimated_cost: self.estimated_cost,
            rating: self.rating,
            image_url: self.image_url.to_string(),
        }
    }
}

const PARIS: &[Entry] = &[
    Entry {
        name: "Eiffel Tower Visit",
        category: "Sightseeing",
        estimated_cost: 30.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1511739001486-6bfe10ce785f?w=600",
    },
    Entry {
        name: "Louvre Museum Tour",
        category: "Culture",
        estimated_cost: 22.0,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1499856871958-5b9627545d1a?w=600",
    },
    Entry {
        name: "Seine River Cruise",
        category: "Leisure",
        estimated_cost: 18.0,
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=600",
    },
];

const TOKYO: &[Entry] = &[
    Entry {
        name: "Tokyo Food Tour",
        category: "Dining",
        estimated_cost: 75.0,
        rating: 4.9,
        image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=600",
    },
    Entry {
        name: "Senso-ji Temple Visit",
        category: "Culture",
        estimated_cost: 0.0,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=600",
    },
    Entry {
        name: "Shibuya Crossing Night Walk",
        category: "Sightseeing",
        estimated_cost: 10.0,
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1542051841857-5f90071e7989?w=600",
    },
];

const LONDON: &[Entry] = &[
    Entry {
        name: "British Museum Tour",
        category: "Culture",
        estimated_cost: 0.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad?w=600",
    },
    Entry {
        name: "London Eye Ride",
        category: "Sightseeing",
        estimated_cost: 35.0,
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1529655683826-aba9b3e77383?w=600",
    },
    Entry {
        name: "Borough Market Tasting",
        category: "Dining",
        estimated_cost: 40.0,
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1533929736458-ca588d08c8be?w=600",
    },
];

const ROME: &[Entry] = &[
    Entry {
        name: "Colosseum Guided Tour",
        category: "Culture",
        estimated_cost: 45.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=600",
    },
    Entry {
        name: "Trastevere Food Walk",
        category: "Dining",
        estimated_cost: 60.0,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1515542622106-78bda8ba0e5b?w=600",
    },
    Entry {
        name: "Vatican Museums Visit",
        category: "Culture",
        estimated_cost: 25.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1531572753322-ad063cecc140?w=600",
    },
];

const NEW_YORK: &[Entry] = &[
    Entry {
        name: "Central Park Bike Tour",
        category: "Outdoors",
        estimated_cost: 40.0,
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=600",
    },
    Entry {
        name: "Broadway Show",
        category: "Entertainment",
        estimated_cost: 120.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1485871981521-5b1fd3805eee?w=600",
    },
    Entry {
        name: "Statue of Liberty Ferry",
        category: "Sightseeing",
        estimated_cost: 25.0,
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1485738422979-f5c462d49f74?w=600",
    },
];

const BALI: &[Entry] = &[
    Entry {
        name: "Ubud Rice Terrace Trek",
        category: "Outdoors",
        estimated_cost: 20.0,
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=600",
    },
    Entry {
        name: "Uluwatu Temple Sunset",
        category: "Culture",
        estimated_cost: 5.0,
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1555400038-63f5ba517a47?w=600",
    },
    Entry {
        name: "Balinese Cooking Class",
        category: "Dining",
        estimated_cost: 35.0,
        rating: 4.9,
        image_url: "https://images.unsplash.com/photo-1518548419970-58e3b4079ab2?w=600",
    },
];

const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=600";

fn table_entries(normalized_city: &str) -> Option<&'static [Entry]> {
    match normalized_city {
        "paris" => Some(PARIS),
        "tokyo" => Some(TOKYO),
        "london" => Some(LONDON),
        "rome" => Some(ROME),
        "new york" => Some(NEW_YORK),
        "bali" => Some(BALI),
        _ => None,
    }
}

fn fallback_items(city: &str) -> Vec<SuggestionItem> {
    let item = |name: String, category: &str, estimated_cost: f64, rating: f64| SuggestionItem {
        name,
        category: category.to_string(),
        estimated_cost,
        rating,
        image_url: FALLBACK_IMAGE_URL.to_string(),
    };

    vec![
        item(format!("Explore {} City Center", city), "Sightseeing", 0.0, 4.5),
        item(format!("Local Food Tour in {}", city), "Dining", 50.0, 4.6),
        item(format!("{} Museum Visit", city), "Culture", 20.0, 4.3),
    ]
}

/// Suggestions for `city`
///
/// Known cities match regardless of case and surrounding whitespace. Any
/// other input yields three generic items that echo `city` unchanged.
pub fn suggestions_for(city: &str) -> Vec<SuggestionItem> {
    let normalized = city.trim().to_lowercase();
    match table_entries(&normalized) {
        Some(entries) => entries.iter().map(Entry::to_item).collect(),
        None => fallback_items(city),
    }
}
