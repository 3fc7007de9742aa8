// Hotel manager: room and guest registries, availability checks and the
// booking lifecycle. All state is in memory and owned by the manager for
// its whole lifetime; rooms and bookings are never removed, only their
// in-service flag or status changes.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Guest, Room};

// Error types for guest registration and booking operations
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Guest name cannot be empty")]
    EmptyGuestName,

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("Room ID {0} not found")]
    RoomNotFound(String),

    #[error("Booking ID {0} not found")]
    BookingNotFound(String),

    #[error("Room {room_id} is not available from {check_in} to {check_out}")]
    RoomUnavailable {
        room_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

// Broad classification for callers that only care whether the input was
// malformed or the operation hit a state conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IllegalState,
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::RoomUnavailable { .. } => ErrorKind::IllegalState,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", name)
    }
}

// A reservation of one room by one guest for a half-open date range.
// Guest and room are referenced by id; the manager owns both records and
// never deletes them, so the ids always resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub guest_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

impl Booking {
    // A booking must cover at least one night
    pub fn new(
        id: impl Into<String>,
        guest_id: impl Into<String>,
        room_id: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self {
            id: id.into(),
            guest_id: guest_id.into(),
            room_id: room_id.into(),
            check_in,
            check_out,
            status: BookingStatus::Confirmed,
        })
    }

    // Stay ranges are half-open: the check-out day itself is free for the
    // next arrival
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in < self.check_out && check_out > self.check_in
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking {}: guest {} in room {}, {} to {} ({})",
            self.id, self.guest_id, self.room_id, self.check_in, self.check_out, self.status
        )
    }
}

// Per-room availability label for a date selection that may still be
// incomplete or reversed. Mirrors what a booking screen shows next to
// each room while the user is picking dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    InvalidDates,
    SelectDates,
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AvailabilityStatus::Available => "Yes",
            AvailabilityStatus::Unavailable => "No",
            AvailabilityStatus::InvalidDates => "Invalid Dates",
            AvailabilityStatus::SelectDates => "Select Dates",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug)]
pub struct Hotel {
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    bookings: Vec<Booking>,
    next_guest_id: u64,
    next_booking_id: u64,
}

impl Hotel {
    pub fn new() -> Self {
        Self {
            rooms: Vec::new(),
            guests: Vec::new(),
            bookings: Vec::new(),
            next_guest_id: 1,
            next_booking_id: 1,
        }
    }

    // Registers a room. Invalid or duplicate registrations are reported
    // and skipped rather than raised, since room setup is static; returns
    // whether the room was added.
    pub fn add_room(&mut self, room: Room) -> bool {
        if room.id.is_empty() {
            warn!("Rejected room with empty id");
            return false;
        }
        if self.find_room(&room.id).is_some() {
            warn!("Room with ID {} already exists, skipping", room.id);
            return false;
        }
        info!(
            "{} room {} added: {}",
            room.room_type,
            room.id,
            room.describe_features()
        );
        self.rooms.push(room);
        true
    }

    pub fn find_room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    // Snapshot copy in insertion order; callers sort by the natural Room
    // order for display
    pub fn all_rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    pub fn set_room_in_service(
        &mut self,
        room_id: &str,
        in_service: bool,
    ) -> Result<(), BookingError> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        room.set_in_service(in_service);
        Ok(())
    }

    // Guest ids are "G" + a per-hotel counter starting at 1; ids are never
    // reused
    pub fn register_guest(&mut self, name: &str, email: &str) -> Result<Guest, BookingError> {
        if name.trim().is_empty() {
            return Err(BookingError::EmptyGuestName);
        }
        let guest = Guest {
            id: format!("G{}", self.next_guest_id),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.next_guest_id += 1;
        info!("Guest {} registered with ID {}", guest.name, guest.id);
        self.guests.push(guest.clone());
        Ok(guest)
    }

    pub fn all_guests(&self) -> Vec<Guest> {
        self.guests.clone()
    }

    // A room is free when it is in service and no confirmed booking for it
    // overlaps the half-open range [check_in, check_out). Reversed or
    // zero-length ranges are never available. Cancelled bookings never
    // block.
    pub fn is_room_available(
        &self,
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        if check_out <= check_in {
            return false;
        }
        if !room.in_service {
            return false;
        }
        // Linear scan over the full booking history
        !self.bookings.iter().any(|b| {
            b.room_id == room.id
                && b.status == BookingStatus::Confirmed
                && b.overlaps(check_in, check_out)
        })
    }

    // Display support: availability label for a possibly incomplete date
    // selection
    pub fn availability_status(
        &self,
        room: &Room,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
    ) -> AvailabilityStatus {
        match (check_in, check_out) {
            (Some(ci), Some(co)) if co <= ci => AvailabilityStatus::InvalidDates,
            (Some(ci), Some(co)) => {
                if self.is_room_available(room, ci, co) {
                    AvailabilityStatus::Available
                } else {
                    AvailabilityStatus::Unavailable
                }
            }
            _ => AvailabilityStatus::SelectDates,
        }
    }

    // Creates a confirmed booking after validating, in order: the date
    // range, the room id, and availability. The guest is taken as given
    // and is not required to be registered with this hotel.
    pub fn create_booking(
        &mut self,
        guest: &Guest,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange);
        }
        let room = self
            .find_room(room_id)
            .ok_or_else(|| BookingError::RoomNotFound(room_id.to_string()))?;
        if !self.is_room_available(room, check_in, check_out) {
            return Err(BookingError::RoomUnavailable {
                room_id: room.id.clone(),
                check_in,
                check_out,
            });
        }

        let booking = Booking::new(
            format!("B{}", self.next_booking_id),
            guest.id.clone(),
            room.id.clone(),
            check_in,
            check_out,
        )?;
        self.next_booking_id += 1;
        info!(
            "Booking {} created for {} in room {} from {} to {}",
            booking.id, guest.name, booking.room_id, check_in, check_out
        );
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    pub fn find_booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    // Snapshot copy of the booking history in insertion order, cancelled
    // records included
    pub fn all_bookings(&self) -> Vec<Booking> {
        self.bookings.clone()
    }

    // Sets the booking to Cancelled in place; the record stays in the
    // history and the room is immediately free for the range again.
    // Cancelling an already cancelled booking is a no-op, not an error.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<(), BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

        if booking.status == BookingStatus::Cancelled {
            info!("Booking {} is already cancelled", booking.id);
            return Ok(());
        }
        booking.status = BookingStatus::Cancelled;
        info!("Booking {} cancelled", booking.id);
        Ok(())
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}
