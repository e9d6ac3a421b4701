use serde::{Deserialize, Serialize};

/// Fixed price table for a vehicle: the three hourly tiers plus the flat
/// airport-transfer rate, in whole currency units.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct RateCard {
    pub hour_1: i64,
    pub hour_2: i64,
    pub hour_3: i64,
    pub airport: i64,
}

/// Catalog entity owned by the remote vehicle catalog. The core only reads
/// it; mutation happens in the back office.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub max_passengers: u32,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub images: Vec<VehicleImage>,
    pub pricing: RateCard,
}

/// A single gallery image; `rank` determines display order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehicleImage {
    pub id: String,
    pub vehicle_id: String,
    pub url: String,
    pub rank: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A catalog view ("form") grouping vehicles for one embedding context.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogForm {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub form_type: String,
}
