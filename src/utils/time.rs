use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar date used for applied/contact stamps and the dashboard week window.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
