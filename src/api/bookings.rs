use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::state::fields::{BookingField, BookingFields};
use crate::state::stepper;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("bookings backend is not configured")]
    Config,
    #[error("booking is missing {0:?}")]
    Incomplete(BookingField),
    #[error("failed to encode booking: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend rejected booking with status {status}")]
    Rejected { status: u16 },
}

/// One row of the `prenotazioni` table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BookingRecord {
    #[serde(rename = "nome")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "eta")]
    pub age: u8,
    #[serde(rename = "genere")]
    pub gender: String,
    #[serde(rename = "luogo")]
    pub location: String,
    #[serde(rename = "interessi")]
    pub interests: Option<String>,
    #[serde(rename = "conosciuto")]
    pub referral: String,
    #[serde(rename = "data")]
    pub submitted_at: String,
}

impl BookingRecord {
    pub fn from_fields(fields: &BookingFields, now: DateTime<Utc>) -> Result<Self, SubmissionError> {
        let gender = fields.gender.ok_or(SubmissionError::Incomplete(BookingField::Gender))?;
        let referral = fields.referral.ok_or(SubmissionError::Incomplete(BookingField::Referral))?;
        let interests = fields.interests.trim();

        Ok(Self {
            full_name: fields.full_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            age: stepper::clamp_age(&fields.age),
            gender: gender.column_value().to_string(),
            location: fields.location.trim().to_string(),
            interests: (!interests.is_empty()).then(|| interests.to_string()),
            referral: referral.column_value().to_string(),
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// Inserts one booking through the Supabase REST endpoint.
pub async fn insert_booking(record: &BookingRecord) -> Result<(), SubmissionError> {
    let base = config::get_supabase_url();
    let key = config::get_supabase_anon_key();
    if base.is_empty() {
        return Err(SubmissionError::Config);
    }

    let url = format!("{}/rest/v1/{}", base.trim_end_matches('/'), config::BOOKINGS_TABLE);
    debug!("POST {}", url);
    let response = Request::post(&url)
        .header("apikey", key)
        .header("Authorization", &format!("Bearer {}", key))
        .header("Prefer", "return=minimal")
        .json(&[record])
        .map_err(|e| SubmissionError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SubmissionError::Rejected { status: response.status() });
    }
    info!("booking stored");
    Ok(())
}
