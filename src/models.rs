//! Data Models
//! Mission: Travel request records and service configuration

use clap::Parser;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Stored travel request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub destination: Option<String>,
    pub interests: Option<String>,
    pub num_travelers: Option<f64>,
    pub cost_per_person: Option<f64>,
    pub email: Option<String>,
}

/// Travel request as submitted by a client. Every field is optional.
///
/// Number fields take either a JSON number or a numeric string (form
/// clients send `"3"`). An empty string counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTravelRequest {
    pub destination: Option<String>,
    pub interests: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub num_travelers: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub cost_per_person: Option<f64>,
    pub email: Option<String>,
}

impl NewTravelRequest {
    pub fn into_record(self, id: String) -> TravelRequest {
        TravelRequest {
            id,
            destination: self.destination,
            interests: self.interests,
            num_travelers: self.num_travelers,
            cost_per_person: self.cost_per_person,
            email: self.email,
        }
    }
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid number: {:?}", text)))?
        }
    };

    // "NaN" and "inf" parse as f64 but cannot be stored or sent back as JSON
    if !value.is_finite() {
        return Err(de::Error::custom("number must be finite"));
    }
    Ok(Some(value))
}

/// Application configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "travel-desk")]
#[command(about = "Travel request intake service with admin review")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// SQLite database file (":memory:" for a throwaway database)
    #[arg(long, env = "DATABASE_PATH", default_value = "travel_desk.db")]
    pub database_path: String,

    /// Secret used to sign admin tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,
}
