//! Read-only client for the vehicle catalog. The catalog lives behind
//! Supabase edge functions; every response uses the standard
//! `{success, data, error}` envelope.

use std::time::Duration;

use futures::future::join_all;
use log::{debug, warn};

use crate::config::HostConfig;
use crate::error::BookingError;
use crate::models::booking::{ApiEnvelope, VehicleImageData, VehicleListData};
use crate::models::vehicle::{CatalogForm, Vehicle, VehicleImage};

const REQUEST_TIMEOUT_SECS: u64 = 15;

pub struct CatalogService {
    http_client: reqwest::Client,
    config: HostConfig,
}

impl CatalogService {
    pub fn new(config: HostConfig) -> Result<Self, BookingError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BookingError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client, config })
    }

    /// Fetch the vehicles visible for the configured form slug, optionally
    /// filtered by vehicle type, then fan out one image request per vehicle.
    /// A failed image fetch degrades that vehicle to an empty gallery rather
    /// than failing the whole listing.
    pub async fn fetch_vehicles(
        &self,
        vehicle_type: Option<&str>,
    ) -> Result<(Vec<Vehicle>, Vec<CatalogForm>), BookingError> {
        let mut params: Vec<(&str, &str)> = vec![("form_slug", self.config.form_slug.as_str())];
        if let Some(vehicle_type) = vehicle_type {
            params.push(("type", vehicle_type));
        }

        let response = self
            .http_client
            .get(self.config.functions_url("listVehicles"))
            .bearer_auth(&self.config.supabase_key)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingError::Network(format!(
                "catalog responded with HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<VehicleListData> = response.json().await?;
        let data = match (envelope.success, envelope.data) {
            (true, Some(data)) => data,
            _ => {
                return Err(BookingError::Network(
                    envelope.error.unwrap_or_else(|| "failed to fetch vehicles".to_string()),
                ))
            }
        };

        debug!("catalog returned {} vehicles", data.vehicles.len());

        // One image request per vehicle, in parallel.
        let image_fetches = data
            .vehicles
            .iter()
            .map(|vehicle| self.fetch_vehicle_images(&vehicle.id));
        let image_results = join_all(image_fetches).await;

        let mut vehicles = data.vehicles;
        for (vehicle, images) in vehicles.iter_mut().zip(image_results) {
            match images {
                Ok(images) => vehicle.images = images,
                Err(e) => {
                    warn!("failed to fetch images for vehicle {}: {}", vehicle.id, e);
                    vehicle.images = Vec::new();
                }
            }
        }

        Ok((vehicles, data.forms))
    }

    /// Gallery images for one vehicle, sorted by display rank.
    pub async fn fetch_vehicle_images(&self, vehicle_id: &str) -> Result<Vec<VehicleImage>, BookingError> {
        let response = self
            .http_client
            .get(self.config.functions_url("listImages"))
            .bearer_auth(&self.config.supabase_key)
            .query(&[("vehicle_id", vehicle_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingError::Network(format!(
                "image listing responded with HTTP {}",
                response.status()
            )));
        }

        let envelope: ApiEnvelope<VehicleImageData> = response.json().await?;
        match (envelope.success, envelope.data) {
            (true, Some(data)) => {
                let mut images = data.images;
                sort_by_rank(&mut images);
                Ok(images)
            }
            _ => Err(BookingError::Network(
                envelope
                    .error
                    .unwrap_or_else(|| "failed to fetch vehicle images".to_string()),
            )),
        }
    }
}

/// Gallery order follows the editor-assigned rank, lowest first.
fn sort_by_rank(images: &mut [VehicleImage]) {
    images.sort_by_key(|image| image.rank);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, rank: i32) -> VehicleImage {
        VehicleImage {
            id: id.to_string(),
            vehicle_id: "veh-limo-1".to_string(),
            url: format!("https://cdn.example.com/{}.jpg", id),
            rank,
            created_at: None,
        }
    }

    #[test]
    fn orders_images_by_ascending_rank() {
        let mut images = vec![image("rear", 3), image("front", 1), image("interior", 2)];

        sort_by_rank(&mut images);

        let ids: Vec<&str> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["front", "interior", "rear"]);
    }

    #[test]
    fn keeps_upload_order_for_tied_ranks() {
        let mut images = vec![image("first-upload", 1), image("second-upload", 1)];

        sort_by_rank(&mut images);

        assert_eq!(images[0].id, "first-upload");
        assert_eq!(images[1].id, "second-upload");
    }
}
