//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend schema field-for-field
//! (including its PascalCase feature names) so serde round-trips stay
//! lossless and the prediction models receive exactly the columns they were
//! trained on.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub company: String,
}

/// Body for `POST /users/`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub company: String,
}

/// Body for `PUT /users/me/`.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub company: String,
}

/// Response of `POST /token`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Feature record for `POST /predict/sales`.
///
/// Categorical inputs arrive one-hot expanded: a `West` region is encoded as
/// all three region flags set to `0`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesFeatures {
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Customers")]
    pub customers: f64,
    #[serde(rename = "Marketing_Spend")]
    pub marketing_spend: f64,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: u32,
    #[serde(rename = "Region_East")]
    pub region_east: u8,
    #[serde(rename = "Region_North")]
    pub region_north: u8,
    #[serde(rename = "Region_South")]
    pub region_south: u8,
    #[serde(rename = "Promotion_Yes")]
    pub promotion_yes: u8,
    #[serde(rename = "Holiday_Yes")]
    pub holiday_yes: u8,
}

/// Response of `POST /predict/sales`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SalesPrediction {
    pub prediction: f64,
    /// Model confidence, when the backend reports one.
    #[serde(default)]
    pub accuracy_percentage: Option<f64>,
}

/// Sensor/telemetry record for `POST /predict/maintenance`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaintenanceReading {
    #[serde(rename = "Sensor1")]
    pub sensor1: f64,
    #[serde(rename = "Sensor2")]
    pub sensor2: f64,
    #[serde(rename = "Sensor3")]
    pub sensor3: f64,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Pressure")]
    pub pressure: f64,
    #[serde(rename = "Vibration")]
    pub vibration: f64,
}

/// Response of `POST /predict/maintenance`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MaintenanceVerdict {
    /// `1` indicates failure risk, `0` normal operation.
    pub prediction: i64,
    pub probability: f64,
}

/// Body for `POST /chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatPrompt {
    pub prompt: String,
}

/// Response of `POST /chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Error body the backend attaches to rejected requests.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
