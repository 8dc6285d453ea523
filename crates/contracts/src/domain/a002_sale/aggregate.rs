use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One completed sale, as delivered by the `sales` REST resource.
///
/// Timestamps are kept as the raw wire text: the collaborator has shipped
/// several formats over time and a malformed date must not fail the whole
/// payload. Resolution happens in [`SaleRecord::effective_date`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Opaque identifier assigned by the collaborator.
    pub id: String,

    /// Reference to a Product (a001). Not owned by this record.
    pub product_id: String,

    /// Denormalized display name, may be stale relative to the catalog.
    pub product_name: Option<String>,

    /// Units sold. Absent means 0.
    pub quantity: Option<i64>,

    /// Price per unit. Absent means 0.
    pub unit_price: Option<f64>,

    /// Timestamp the sale was made, as raw text.
    pub sale_date: Option<String>,

    /// Record-creation timestamp, used when `sale_date` is absent.
    pub created_at: Option<String>,

    pub customer_name: Option<String>,

    pub notes: Option<String>,
}

impl SaleRecord {
    /// Units sold with the missing-is-zero rule applied.
    pub fn units(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Amount charged per unit, 0 when absent.
    pub fn price(&self) -> f64 {
        self.unit_price.unwrap_or(0.0)
    }

    /// Calendar date this sale belongs to.
    ///
    /// `sale_date` wins when present (even blank-padded); an absent or blank
    /// `sale_date` falls back to `created_at`. A present but malformed
    /// timestamp yields `None` and the record drops out of every time
    /// bucket rather than aborting aggregation.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        let raw = self
            .sale_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.created_at.as_deref())?;
        parse_date(raw)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Sale id cannot be empty".into());
        }
        if self.product_id.trim().is_empty() {
            return Err("Sale must reference a product".into());
        }
        if self.quantity.unwrap_or(0) < 0 {
            return Err("Quantity cannot be negative".into());
        }
        if self.unit_price.unwrap_or(0.0) < 0.0 {
            return Err("Unit price cannot be negative".into());
        }
        Ok(())
    }
}

/// Parse the timestamp shapes the collaborator has been observed to emit:
/// RFC 3339, ISO date-time with or without the `T` separator, bare date.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
