use crate::common::*;

#[doc = "`epoch + offset` days, failing when the date leaves chrono's supported range."]
pub fn add_days(epoch: NaiveDate, offset: u64) -> anyhow::Result<NaiveDate> {
    epoch.checked_add_days(Days::new(offset)).ok_or_else(|| {
        anyhow!(
            "[time_utils->add_days] Date overflow: {} + {} days",
            epoch,
            offset
        )
    })
}

#[doc = "Calendar month key in `YYYY-MM` form. Keys sort chronologically."]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[doc = "Month of year, 1-12."]
pub fn month_of_year(date: NaiveDate) -> u32 {
    date.month()
}

pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
#[doc = "Parses a `YYYY-MM-DD` date string."]
pub fn parse_ymd(date_str: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| anyhow!("[time_utils->parse_ymd] Invalid date '{}': {:?}", date_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_is_zero_padded() {
        let date = parse_ymd("2023-03-09").unwrap();
        assert_eq!(month_key(date), "2023-03");
        assert_eq!(month_of_year(date), 3);
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        let epoch = parse_ymd("2023-12-31").unwrap();
        assert_eq!(add_days(epoch, 1).unwrap(), parse_ymd("2024-01-01").unwrap());
        assert_eq!(add_days(epoch, 0).unwrap(), epoch);
    }

    #[test]
    fn month_name_falls_back_for_out_of_range() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_ymd("2023/01/01").is_err());
    }
}
