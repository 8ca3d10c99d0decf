use crate::core::Storage;
use crate::domain::model::{Reservation, ReservationStatus};
use crate::store::hotels::available_rooms_in;
use crate::store::JsonStore;
use crate::utils::error::{BatchError, Result};
use chrono::NaiveDate;

const KIND: &str = "Reservation";
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_id: String,
    pub check_in: String,
    pub check_out: String,
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| BatchError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn validate_stay(check_in: &str, check_out: &str) -> Result<()> {
    let arrival = parse_date(check_in)?;
    let departure = parse_date(check_out)?;
    if departure < arrival {
        return Err(BatchError::InvalidDate {
            value: check_out.to_string(),
            reason: format!("check-out is before check-in ({})", check_in),
        });
    }
    Ok(())
}

pub fn render_reservation(reservation: &Reservation) -> String {
    format!(
        "Reservation : {}\nCustomer    : {}\nHotel       : {}\nCheck-in    : {}\nCheck-out   : {}\nStatus      : {}",
        reservation.reservation_id,
        reservation.customer_id,
        reservation.hotel_id,
        reservation.check_in,
        reservation.check_out,
        reservation.status
    )
}

fn not_found(reservation_id: &str) -> BatchError {
    BatchError::NotFound {
        kind: KIND,
        id: reservation_id.to_string(),
    }
}

impl<S: Storage> JsonStore<S> {
    /// Books a room. Rejects, in this order: a reused reservation id, an unknown
    /// customer, an unknown hotel, a full hotel, and malformed dates.
    pub async fn create_reservation(&self, request: NewReservation) -> Result<Reservation> {
        let mut data = self.load().await?;

        if data.reservations.contains_key(&request.reservation_id) {
            return Err(BatchError::DuplicateId {
                kind: KIND,
                id: request.reservation_id,
            });
        }
        if !data.customers.contains_key(&request.customer_id) {
            return Err(BatchError::NotFound {
                kind: "Customer",
                id: request.customer_id,
            });
        }
        match available_rooms_in(&data, &request.hotel_id) {
            None => {
                return Err(BatchError::NotFound {
                    kind: "Hotel",
                    id: request.hotel_id,
                })
            }
            Some(available) if available <= 0 => {
                return Err(BatchError::NoRoomsAvailable {
                    hotel_id: request.hotel_id,
                })
            }
            Some(_) => {}
        }
        validate_stay(&request.check_in, &request.check_out)?;

        let reservation = Reservation {
            reservation_id: request.reservation_id,
            customer_id: request.customer_id,
            hotel_id: request.hotel_id,
            check_in: request.check_in,
            check_out: request.check_out,
            status: ReservationStatus::Active,
        };

        tracing::info!(
            "Reservation {} created for customer {} at hotel {}",
            reservation.reservation_id,
            reservation.customer_id,
            reservation.hotel_id
        );
        data.reservations
            .insert(reservation.reservation_id.clone(), reservation.clone());
        self.save(&data).await?;
        Ok(reservation)
    }

    pub async fn cancel_reservation(&self, reservation_id: &str) -> Result<()> {
        let mut data = self.load().await?;
        let reservation = data
            .reservations
            .get_mut(reservation_id)
            .ok_or_else(|| not_found(reservation_id))?;

        if reservation.status == ReservationStatus::Cancelled {
            return Err(BatchError::AlreadyCancelled {
                reservation_id: reservation_id.to_string(),
            });
        }
        reservation.status = ReservationStatus::Cancelled;

        tracing::info!("Reservation {} cancelled", reservation_id);
        self.save(&data).await
    }

    pub async fn get_reservation(&self, reservation_id: &str) -> Result<Reservation> {
        let data = self.load().await?;
        data.reservations
            .get(reservation_id)
            .cloned()
            .ok_or_else(|| not_found(reservation_id))
    }

    pub async fn display_reservation(&self, reservation_id: &str) -> Result<String> {
        Ok(render_reservation(
            &self.get_reservation(reservation_id).await?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Customer, Hotel};
    use crate::store::testing::store;
    use crate::testing::MockStorage;

    fn request(id: &str, customer: &str, hotel: &str) -> NewReservation {
        NewReservation {
            reservation_id: id.to_string(),
            customer_id: customer.to_string(),
            hotel_id: hotel.to_string(),
            check_in: "10/04/2026".to_string(),
            check_out: "25/04/2026".to_string(),
        }
    }

    async fn seeded() -> (JsonStore<MockStorage>, MockStorage) {
        let (store, storage) = store();
        store
            .create_hotel(Hotel {
                hotel_id: "H1".to_string(),
                name: "The big apple".to_string(),
                location: "NYC".to_string(),
                rooms: 3,
            })
            .await
            .unwrap();
        store
            .create_customer(Customer {
                customer_id: "C1".to_string(),
                name: "Mario Jimenez".to_string(),
                email: "mjim@gmail.com".to_string(),
                phone: String::new(),
            })
            .await
            .unwrap();
        (store, storage)
    }

    #[tokio::test]
    async fn test_create_reservation_takes_a_room() {
        let (store, _) = seeded().await;
        let reservation = store.create_reservation(request("R1", "C1", "H1")).await.unwrap();

        assert_eq!(reservation.status, ReservationStatus::Active);
        assert_eq!(store.get_reservation("R1").await.unwrap().hotel_id, "H1");
        assert_eq!(store.available_rooms("H1").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_cancel_restores_room() {
        let (store, _) = seeded().await;
        store.create_reservation(request("R1", "C1", "H1")).await.unwrap();
        store.cancel_reservation("R1").await.unwrap();

        assert_eq!(
            store.get_reservation("R1").await.unwrap().status,
            ReservationStatus::Cancelled
        );
        assert_eq!(store.available_rooms("H1").await.unwrap(), 3);
        assert!(matches!(
            store.cancel_reservation("R1").await,
            Err(BatchError::AlreadyCancelled { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_rejections() {
        let (store, _) = seeded().await;
        store.create_reservation(request("R1", "C1", "H1")).await.unwrap();

        assert!(matches!(
            store.create_reservation(request("R1", "C1", "H1")).await,
            Err(BatchError::DuplicateId { .. })
        ));
        assert!(matches!(
            store.create_reservation(request("R2", "customer1", "H1")).await,
            Err(BatchError::NotFound { kind: "Customer", .. })
        ));
        assert!(matches!(
            store.create_reservation(request("R2", "C1", "hotel1")).await,
            Err(BatchError::NotFound { kind: "Hotel", .. })
        ));
    }

    #[tokio::test]
    async fn test_full_hotel_rejects_reservation() {
        let (store, _) = seeded().await;
        store
            .create_hotel(Hotel {
                hotel_id: "HHTTLL".to_string(),
                name: "Boutique Hotel".to_string(),
                location: "BCN".to_string(),
                rooms: 1,
            })
            .await
            .unwrap();

        store
            .create_reservation(request("R1", "C1", "HHTTLL"))
            .await
            .unwrap();
        assert!(matches!(
            store.create_reservation(request("R2", "C1", "HHTTLL")).await,
            Err(BatchError::NoRoomsAvailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_dates_rejected() {
        let (store, _) = seeded().await;

        let mut bad_format = request("R1", "C1", "H1");
        bad_format.check_in = "2026-04-10".to_string();
        assert!(matches!(
            store.create_reservation(bad_format).await,
            Err(BatchError::InvalidDate { .. })
        ));

        let mut reversed = request("R2", "C1", "H1");
        reversed.check_out = "01/04/2026".to_string();
        assert!(matches!(
            store.create_reservation(reversed).await,
            Err(BatchError::InvalidDate { .. })
        ));
        assert_eq!(store.available_rooms("H1").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_corrupt_file_means_unknown_customer() {
        let (store, storage) = store();
        storage.put("tc.json", b"{json no valido}").await;
        assert!(matches!(
            store.create_reservation(request("R1", "C1", "H1")).await,
            Err(BatchError::NotFound { kind: "Customer", .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_and_display_missing_reservation() {
        let (store, _) = seeded().await;
        assert!(matches!(
            store.cancel_reservation("RV1").await,
            Err(BatchError::NotFound { .. })
        ));
        assert!(store.display_reservation("RV1").await.is_err());
    }

    #[tokio::test]
    async fn test_status_serialized_with_file_labels() {
        let (store, storage) = seeded().await;
        store.create_reservation(request("R1", "C1", "H1")).await.unwrap();
        let written = String::from_utf8(storage.get_file("tc.json").await.unwrap()).unwrap();
        assert!(written.contains("\"status\": \"activa\""));

        let text = store.display_reservation("R1").await.unwrap();
        assert!(text.contains("Status      : activa"));
    }
}
