use crate::core::Storage;
use crate::domain::model::{Hotel, ReservationStatus, StoreData};
use crate::store::JsonStore;
use crate::utils::error::{BatchError, Result};

const KIND: &str = "Hotel";

/// Fields of a hotel that may be changed after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<u32>,
}

impl HotelChanges {
    /// Builds changes from `key=value` pairs. Unknown keys are logged and ignored.
    pub fn from_assignments(assignments: &[(String, String)]) -> Result<Self> {
        let mut changes = Self::default();
        for (key, value) in assignments {
            match key.as_str() {
                "name" => changes.name = Some(value.clone()),
                "location" => changes.location = Some(value.clone()),
                "rooms" => {
                    let rooms = value.trim().parse().map_err(|_| BatchError::InvalidInput {
                        message: format!("rooms must be a non-negative integer, got '{}'", value),
                    })?;
                    changes.rooms = Some(rooms);
                }
                other => tracing::warn!("Field '{}' is not modifiable", other),
            }
        }
        Ok(changes)
    }

    fn apply(self, hotel: &mut Hotel) {
        if let Some(name) = self.name {
            hotel.name = name;
        }
        if let Some(location) = self.location {
            hotel.location = location;
        }
        if let Some(rooms) = self.rooms {
            hotel.rooms = rooms;
        }
    }
}

/// Rooms minus active reservations; `None` for an unknown hotel.
/// Negative when rooms were reduced below the active reservations.
pub fn available_rooms_in(data: &StoreData, hotel_id: &str) -> Option<i64> {
    let hotel = data.hotels.get(hotel_id)?;
    let occupied = data
        .reservations
        .values()
        .filter(|r| r.hotel_id == hotel_id && r.status == ReservationStatus::Active)
        .count() as i64;
    Some(i64::from(hotel.rooms) - occupied)
}

pub fn render_hotel(hotel: &Hotel) -> String {
    format!(
        "Hotel    : {}\nName     : {}\nLocation : {}\nRooms    : {}",
        hotel.hotel_id, hotel.name, hotel.location, hotel.rooms
    )
}

fn not_found(hotel_id: &str) -> BatchError {
    BatchError::NotFound {
        kind: KIND,
        id: hotel_id.to_string(),
    }
}

impl<S: Storage> JsonStore<S> {
    pub async fn create_hotel(&self, hotel: Hotel) -> Result<()> {
        let mut data = self.load().await?;
        if data.hotels.contains_key(&hotel.hotel_id) {
            return Err(BatchError::DuplicateId {
                kind: KIND,
                id: hotel.hotel_id,
            });
        }

        tracing::info!("Creating hotel {}", hotel.hotel_id);
        data.hotels.insert(hotel.hotel_id.clone(), hotel);
        self.save(&data).await
    }

    pub async fn delete_hotel(&self, hotel_id: &str) -> Result<()> {
        let mut data = self.load().await?;
        if data.hotels.remove(hotel_id).is_none() {
            return Err(not_found(hotel_id));
        }

        tracing::info!("Deleted hotel {}", hotel_id);
        self.save(&data).await
    }

    pub async fn get_hotel(&self, hotel_id: &str) -> Result<Hotel> {
        let data = self.load().await?;
        data.hotels.get(hotel_id).cloned().ok_or_else(|| not_found(hotel_id))
    }

    pub async fn display_hotel(&self, hotel_id: &str) -> Result<String> {
        Ok(render_hotel(&self.get_hotel(hotel_id).await?))
    }

    pub async fn modify_hotel(&self, hotel_id: &str, changes: HotelChanges) -> Result<Hotel> {
        let mut data = self.load().await?;
        let hotel = data.hotels.get_mut(hotel_id).ok_or_else(|| not_found(hotel_id))?;
        changes.apply(hotel);
        let updated = hotel.clone();

        self.save(&data).await?;
        Ok(updated)
    }

    /// Available rooms for a hotel; an unknown hotel is logged and reports zero.
    pub async fn available_rooms(&self, hotel_id: &str) -> Result<i64> {
        let data = self.load().await?;
        match available_rooms_in(&data, hotel_id) {
            Some(available) => Ok(available),
            None => {
                tracing::error!("Hotel '{}' not found", hotel_id);
                Ok(0)
            }
        }
    }
}
