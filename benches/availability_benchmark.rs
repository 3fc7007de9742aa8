use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_booking::{Hotel, Room, RoomType};
use rand::{thread_rng, Rng};

const ROOMS_COUNT: u32 = 50;

// Packs one-night stays back to back until the history holds exactly
// `bookings_count` confirmed bookings across the room block
fn seeded_hotel(bookings_count: usize) -> Hotel {
    let mut hotel = Hotel::new();
    for i in 0..ROOMS_COUNT {
        hotel.add_room(Room::new(
            format!("S{:03}", i),
            RoomType::Standard,
            75.0,
            2,
        ));
    }
    let guest = hotel
        .register_guest("Bench Guest", "bench@example.com")
        .expect("guest name is non-empty");

    let season_start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut created = 0;
    'rooms: for i in 0..ROOMS_COUNT {
        let room_id = format!("S{:03}", i);
        for night in 0..365 {
            if created == bookings_count {
                break 'rooms;
            }
            let check_in = season_start + Duration::days(night);
            hotel
                .create_booking(&guest, &room_id, check_in, check_in + Duration::days(1))
                .expect("seed bookings never overlap");
            created += 1;
        }
    }
    hotel
}

// Benchmark for the availability scan against growing booking histories
pub fn availability_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_availability");

    for bookings_count in [100, 1_000, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(bookings_count),
            bookings_count,
            |b, &bookings_count| {
                let hotel = seeded_hotel(bookings_count);
                let season_start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
                let mut rng = thread_rng();

                b.iter(|| {
                    let room_id = format!("S{:03}", rng.gen_range(0..ROOMS_COUNT));
                    let room = hotel.find_room(&room_id).unwrap();
                    let check_in = season_start + Duration::days(rng.gen_range(0..363));
                    let check_out = check_in + Duration::days(2);
                    black_box(hotel.is_room_available(room, check_in, check_out))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, availability_benchmark);
criterion_main!(benches);
