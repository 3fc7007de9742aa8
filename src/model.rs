// Data structures for rooms and guests

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

// Room categories on offer. The categories differ only in their fixed
// feature description; price and capacity vary per room, not per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
}

impl RoomType {
    pub fn describe_features(&self) -> &'static str {
        match self {
            RoomType::Standard => "Basic and comfortable accommodation",
            RoomType::Deluxe => "Enhanced amenities and more spacious",
            RoomType::Suite => "Luxurious with separate living area and premium services",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub capacity: u32,
    pub in_service: bool,
}

impl Room {
    // New rooms start in service
    pub fn new(
        id: impl Into<String>,
        room_type: RoomType,
        price_per_night: f64,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            room_type,
            price_per_night,
            capacity,
            in_service: true,
        }
    }

    pub fn describe_features(&self) -> &'static str {
        self.room_type.describe_features()
    }

    pub fn set_in_service(&mut self, in_service: bool) {
        self.in_service = in_service;
    }
}

// Room identity, equality and the natural sort order are the id alone,
// ascending. A registry never holds two rooms with the same id.
impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Room {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Room {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} - {} (Service: {}, ${:.2}/night, Capacity: {})",
            self.id,
            self.room_type,
            if self.in_service { "Yes" } else { "No" },
            self.price_per_night,
            self.capacity
        )
    }
}

// Guests are created through Hotel::register_guest, which assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub email: String,
}

// Guest equality and hashing are based solely on the id
impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Guest {}

impl Hash for Guest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guest: {} (ID: {})", self.name, self.id)
    }
}
