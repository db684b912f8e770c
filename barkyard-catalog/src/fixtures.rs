use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::store::CatalogStore;
use crate::yard::{Amenity, Yard};

use Amenity::*;

/// Slot start hours published for every demo yard: 8a, 10a, noon, 2p, 4p.
const SLOT_HOURS: [u32; 5] = [8, 10, 12, 14, 16];

/// One slot per published hour per day, for `days` days from `first_date`.
fn demo_slots(first_date: NaiveDate, days: u32) -> Vec<NaiveDateTime> {
    let mut slots = Vec::with_capacity(days as usize * SLOT_HOURS.len());
    for offset in 0..days {
        let day = first_date + Duration::days(offset as i64);
        for &hour in &SLOT_HOURS {
            if let Some(slot) = day.and_hms_opt(hour, 0, 0) {
                slots.push(slot);
            }
        }
    }
    slots
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The demo catalog: twelve yards around western Washington, all publishing
/// the same availability horizon.
pub fn demo_yards(first_date: NaiveDate, days: u32) -> Vec<Yard> {
    let slots = demo_slots(first_date, days);

    vec![
        Yard {
            id: "ridge-creek".into(),
            name: "Ridge Creek Yard".into(),
            desc: "Secure fencing and shade by the creek.".into(),
            price: 18.0,
            lat: 47.6062,
            lng: -122.3321,
            fenced: true,
            water: true,
            acres: 0.75,
            amenities: vec![Fenced, Shade, Water],
            slots: slots.clone(),
            photos: strs(&["/photos/ridge-1.jpg", "/photos/ridge-2.jpg"]),
            host_notes: Some("Please keep the gate latched.".into()),
        },
        Yard {
            id: "meadow-shade".into(),
            name: "Meadow Shade Acre".into(),
            desc: "Open meadow with trees and privacy fence.".into(),
            price: 15.0,
            lat: 47.6588,
            lng: -117.4260,
            fenced: true,
            water: false,
            acres: 1.2,
            amenities: vec![Fenced, Shade],
            slots: slots.clone(),
            photos: strs(&["/photos/meadow-1.jpg"]),
            host_notes: Some("Park in the gravel area by the barn.".into()),
        },
        Yard {
            id: "tacoma-trails".into(),
            name: "Tacoma Trail Access".into(),
            desc: "Large fenced area near hiking trails.".into(),
            price: 22.0,
            lat: 47.2529,
            lng: -122.4443,
            fenced: true,
            water: true,
            acres: 2.0,
            amenities: vec![Fenced, Water, Parking],
            slots: slots.clone(),
            photos: strs(&["/photos/tacoma-1.jpg"]),
            host_notes: Some("Trail access right next to the yard!".into()),
        },
        Yard {
            id: "bellingham-bay".into(),
            name: "Bellingham Bay View".into(),
            desc: "Scenic yard with water views and shade.".into(),
            price: 25.0,
            lat: 48.7519,
            lng: -122.4787,
            fenced: true,
            water: false,
            acres: 1.5,
            amenities: vec![Fenced, Shade, PrivateEntrance],
            slots: slots.clone(),
            photos: strs(&["/photos/bellingham-1.jpg", "/photos/bellingham-2.jpg"]),
            host_notes: Some("Beautiful bay views from the yard.".into()),
        },
        Yard {
            id: "ocean-beach".into(),
            name: "Ocean Beach Paradise".into(),
            desc: "Beachfront access for water-loving dogs.".into(),
            price: 35.0,
            lat: 47.9073,
            lng: -124.1707,
            fenced: false,
            water: true,
            acres: 0.25,
            amenities: vec![Water, Beach],
            slots: slots.clone(),
            photos: strs(&["/photos/beach-1.jpg"]),
            host_notes: Some("Beach access available. No fencing - supervision required.".into()),
        },
        Yard {
            id: "evergreen-field".into(),
            name: "Evergreen Open Field".into(),
            desc: "Massive open field perfect for running.".into(),
            price: 12.0,
            lat: 47.4698,
            lng: -122.2331,
            fenced: false,
            water: false,
            acres: 5.0,
            amenities: vec![Parking],
            slots: slots.clone(),
            photos: strs(&["/photos/field-1.jpg"]),
            host_notes: Some("Wide open space - bring your own water.".into()),
        },
        Yard {
            id: "swimming-cove".into(),
            name: "Swimming Cove Resort".into(),
            desc: "Private pool and lake access for dogs.".into(),
            price: 45.0,
            lat: 47.6205,
            lng: -121.9831,
            fenced: true,
            water: true,
            acres: 0.8,
            amenities: vec![Fenced, Water, Pool, Lake],
            slots: slots.clone(),
            photos: strs(&["/photos/pool-1.jpg"]),
            host_notes: Some("Both pool and lake swimming available!".into()),
        },
        Yard {
            id: "agility-training".into(),
            name: "Agility Training Ground".into(),
            desc: "Professional agility equipment setup.".into(),
            price: 28.0,
            lat: 47.5480,
            lng: -122.1344,
            fenced: true,
            water: false,
            acres: 0.6,
            amenities: vec![Fenced, Agility, Equipment],
            slots: slots.clone(),
            photos: strs(&["/photos/agility-1.jpg"]),
            host_notes: Some("Full agility course with jumps, tunnels, and weaves.".into()),
        },
        Yard {
            id: "small-dog-haven".into(),
            name: "Small Dog Haven".into(),
            desc: "Specially designed for dogs under 25 lbs.".into(),
            price: 20.0,
            lat: 47.6740,
            lng: -122.2181,
            fenced: true,
            water: false,
            acres: 0.3,
            amenities: vec![Fenced, SmallDogFriendly, Shade],
            slots: slots.clone(),
            photos: strs(&["/photos/small-1.jpg"]),
            host_notes: Some("Perfect size for little pups. Low fence height.".into()),
        },
        Yard {
            id: "hiking-basecamp".into(),
            name: "Hiking Trail Basecamp".into(),
            desc: "Secure staging area for mountain hikes.".into(),
            price: 16.0,
            lat: 47.4502,
            lng: -121.4779,
            fenced: true,
            water: true,
            acres: 1.0,
            amenities: vec![Fenced, Water, HikingTrails, Parking],
            slots: slots.clone(),
            photos: strs(&["/photos/hiking-1.jpg"]),
            host_notes: Some("Trail access to Mount Baker National Forest.".into()),
        },
        Yard {
            id: "indoor-pavilion".into(),
            name: "Indoor Play Pavilion".into(),
            desc: "Weather-protected indoor play space.".into(),
            price: 30.0,
            lat: 47.6097,
            lng: -122.3331,
            fenced: true,
            water: false,
            acres: 0.4,
            amenities: vec![Fenced, Indoor, Climate],
            slots: slots.clone(),
            photos: strs(&["/photos/indoor-1.jpg"]),
            host_notes: Some("Climate controlled space for all weather play.".into()),
        },
        Yard {
            id: "luxury-estate".into(),
            name: "Luxury Estate Grounds".into(),
            desc: "Premium fenced estate with all amenities.".into(),
            price: 60.0,
            lat: 47.6219,
            lng: -122.3563,
            fenced: true,
            water: true,
            acres: 3.5,
            amenities: vec![Fenced, Water, Pool, Agility, Shade, Parking, Restroom],
            slots,
            photos: strs(&["/photos/luxury-1.jpg"]),
            host_notes: Some("Premium experience with all amenities included.".into()),
        },
    ]
}

/// Demo catalog wrapped in a store, ready to hand to the api layer.
pub fn seed_catalog(first_date: NaiveDate, days: u32) -> CatalogStore {
    CatalogStore::new(demo_yards(first_date, days))
}
