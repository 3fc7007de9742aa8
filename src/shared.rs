// Thread-safe wrapper around the hotel manager.
//
// The manager itself mutates through &mut self and takes no locks. When
// several users share one hotel, every operation here runs as a single
// critical section, so the availability check and the booking append
// inside create_booking cannot interleave with another writer.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::hotel::{Booking, BookingError, Hotel};
use crate::model::{Guest, Room};

// Clones share the same underlying hotel
#[derive(Clone, Default)]
pub struct SharedHotel {
    inner: Arc<Mutex<Hotel>>,
}

impl SharedHotel {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Hotel::new())),
        }
    }

    pub fn add_room(&self, room: Room) -> bool {
        self.inner.lock().add_room(room)
    }

    // Lookups return owned clones; references cannot escape the lock
    pub fn find_room(&self, room_id: &str) -> Option<Room> {
        self.inner.lock().find_room(room_id).cloned()
    }

    pub fn all_rooms(&self) -> Vec<Room> {
        self.inner.lock().all_rooms()
    }

    pub fn set_room_in_service(
        &self,
        room_id: &str,
        in_service: bool,
    ) -> Result<(), BookingError> {
        self.inner.lock().set_room_in_service(room_id, in_service)
    }

    pub fn register_guest(&self, name: &str, email: &str) -> Result<Guest, BookingError> {
        self.inner.lock().register_guest(name, email)
    }

    pub fn all_guests(&self) -> Vec<Guest> {
        self.inner.lock().all_guests()
    }

    // Resolves the room under the same lock as the scan; an unknown id is
    // simply not available
    pub fn is_room_available(
        &self,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        let hotel = self.inner.lock();
        match hotel.find_room(room_id) {
            Some(room) => hotel.is_room_available(room, check_in, check_out),
            None => false,
        }
    }

    pub fn create_booking(
        &self,
        guest: &Guest,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, BookingError> {
        self.inner
            .lock()
            .create_booking(guest, room_id, check_in, check_out)
    }

    pub fn find_booking(&self, booking_id: &str) -> Option<Booking> {
        self.inner.lock().find_booking(booking_id).cloned()
    }

    pub fn all_bookings(&self) -> Vec<Booking> {
        self.inner.lock().all_bookings()
    }

    pub fn cancel_booking(&self, booking_id: &str) -> Result<(), BookingError> {
        self.inner.lock().cancel_booking(booking_id)
    }
}
