use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Amenity tags shown on yard listings. Wire names are the variant names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Amenity {
    Fenced,
    Shade,
    Water,
    Lighting,
    Parking,
    PrivateEntrance,
    Beach,
    Pool,
    Lake,
    Agility,
    Equipment,
    SmallDogFriendly,
    HikingTrails,
    Indoor,
    Climate,
    Restroom,
}

/// Card-sized projection returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YardSummary {
    pub id: String,
    pub name: String,
    /// Hourly rate in USD.
    pub price: f64,
    pub lat: f64,
    pub lng: f64,
    pub fenced: bool,
    pub water: bool,
    pub acres: f64,
    pub amenities: Vec<Amenity>,
}

/// A bookable private outdoor space.
///
/// `slots` are yard-local start timestamps; each opens a 2-hour booking
/// window. The catalog never mutates a yard after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yard {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Hourly rate in USD.
    pub price: f64,
    pub lat: f64,
    pub lng: f64,
    pub fenced: bool,
    pub water: bool,
    pub acres: f64,
    pub amenities: Vec<Amenity>,
    pub slots: Vec<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_notes: Option<String>,
}

impl Yard {
    /// Slot starts falling on the given calendar date, in published order.
    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.slots
            .iter()
            .copied()
            .filter(move |slot| slot.date() == date)
    }

    pub fn summary(&self) -> YardSummary {
        YardSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            lat: self.lat,
            lng: self.lng,
            fenced: self.fenced,
            water: self.water,
            acres: self.acres,
            amenities: self.amenities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_yard() -> Yard {
        let day = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
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
            amenities: vec![Amenity::Fenced, Amenity::Shade, Amenity::Water],
            slots: vec![
                day.and_hms_opt(8, 0, 0).unwrap(),
                day.and_hms_opt(10, 0, 0).unwrap(),
                day.succ_opt().unwrap().and_hms_opt(8, 0, 0).unwrap(),
            ],
            photos: vec!["/photos/ridge-1.jpg".into()],
            host_notes: Some("Please keep the gate latched.".into()),
        }
    }

    #[test]
    fn test_slots_on_filters_by_date() {
        let yard = sample_yard();
        let day = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
        let on_day: Vec<_> = yard.slots_on(day).collect();
        assert_eq!(on_day.len(), 2);
        assert!(on_day.iter().all(|slot| slot.date() == day));
    }

    #[test]
    fn test_wire_shape_uses_camel_case_and_iso_slots() {
        let yard = sample_yard();
        let json = serde_json::to_value(&yard).unwrap();
        assert_eq!(json["hostNotes"], "Please keep the gate latched.");
        assert_eq!(json["slots"][0], "2025-11-13T08:00:00");
        assert_eq!(json["amenities"][2], "Water");
    }
}
