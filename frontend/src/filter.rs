use chrono::{NaiveDate, TimeZone};

use crate::model::{Payment, PaymentStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    /// Value used by the status dropdown.
    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown dropdown values fall back to no filtering.
    pub fn from_value(value: &str) -> Self {
        value
            .parse::<PaymentStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    fn admits(&self, status: PaymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Criteria for narrowing the payment list. Every active criterion must hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_name: String,
    pub status: StatusFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.search_name.trim().is_empty()
            || self.status != StatusFilter::All
            || self.start_date.is_some()
            || self.end_date.is_some()
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Day bounds are whole calendar days in `tz`: start of `start_date` through end of `end_date`.
    pub fn matches<Tz: TimeZone>(&self, payment: &Payment, tz: &Tz) -> bool {
        let needle = self.search_name.trim();
        if !needle.is_empty() {
            let needle = needle.to_lowercase();
            match payment.patient_name() {
                Some(name) if name.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        if !self.status.admits(payment.status) {
            return false;
        }

        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        let created_on = payment.created_at.with_timezone(tz).date_naive();
        if matches!(self.start_date, Some(start) if created_on < start) {
            return false;
        }
        if matches!(self.end_date, Some(end) if created_on > end) {
            return false;
        }
        true
    }

    /// Matching payments in source order.
    pub fn apply<'a, Tz: TimeZone>(&self, payments: &'a [Payment], tz: &Tz) -> Vec<&'a Payment> {
        payments
            .iter()
            .filter(|payment| self.matches(payment, tz))
            .collect()
    }
}

/// Parses the `YYYY-MM-DD` value of a date input; empty or malformed means unset.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
