use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::query::QueryParams;
use crate::domain::types::ReportType;
use crate::forms::FormError;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Current filter values of the search form.
///
/// Edits never touch the network; [`SearchForm::to_query_params`] produces
/// the snapshot that a submit sends. Changing any filter resets `page` to 1
/// so a new result set can never be entered at an out-of-range page; only
/// explicit pagination edits keep the current page.
#[derive(Debug, Clone, Deserialize, Validate, PartialEq, Eq)]
pub struct SearchForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Empty means "all subscribers"; normalized away on conversion.
    #[validate(length(max = 120))]
    pub subscriber_name: String,
    pub report_type: ReportType,
    #[validate(range(min = 1))]
    pub page: usize,
    #[validate(range(min = 1))]
    pub page_size: usize,
}

impl SearchForm {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            subscriber_name: String::new(),
            report_type: ReportType::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Applies one field edit, addressed by the endpoint's field names.
    ///
    /// Unknown names are rejected before anything changes. Filter edits
    /// (everything except `page`/`pageSize`) reset `page` to 1.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match name {
            "startDate" => self.start_date = parse_date("startDate", value)?,
            "endDate" => self.end_date = parse_date("endDate", value)?,
            "subscriberName" => self.subscriber_name = value.to_string(),
            "reportType" => self.report_type = value.parse()?,
            "page" => self.page = parse_positive("page", value)?,
            "pageSize" => self.page_size = parse_positive("pageSize", value)?,
            other => return Err(FormError::UnknownField(other.to_string())),
        }

        if !matches!(name, "page" | "pageSize") {
            self.page = 1;
        }

        Ok(())
    }

    /// Snapshot used by the next submit. Trims the subscriber name and maps
    /// empty to `None`: an empty input means "no filter", never a literal
    /// empty-string match.
    pub fn to_query_params(&self) -> QueryParams {
        QueryParams {
            start_date: self.start_date,
            end_date: self.end_date,
            subscriber_name: Some(self.subscriber_name.trim().to_string())
                .filter(|s| !s.is_empty()),
            report_type: self.report_type,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

fn parse_positive(field: &'static str, value: &str) -> Result<usize, FormError> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SearchForm {
        SearchForm::new(
            "2025-10-01".parse().unwrap(),
            "2025-10-31".parse().unwrap(),
        )
    }

    #[test]
    fn test_filter_edits_reset_page_to_one() {
        for (name, value) in [
            ("startDate", "2025-09-01"),
            ("endDate", "2025-11-30"),
            ("subscriberName", "ECOBANK"),
            ("reportType", "detailed"),
        ] {
            let mut form = form();
            form.set_field("page", "7").unwrap();
            form.set_field(name, value).unwrap();
            assert_eq!(form.page, 1, "{name} should reset the page");
        }
    }

    #[test]
    fn test_pagination_edits_keep_the_current_page() {
        let mut form = form();
        form.set_field("page", "7").unwrap();
        form.set_field("pageSize", "25").unwrap();

        assert_eq!(form.page, 7);
        assert_eq!(form.page_size, 25);
    }

    #[test]
    fn test_unknown_field_is_rejected_without_changes() {
        let mut form = form();
        let before = form.clone();

        let err = form.set_field("sortOrder", "asc").unwrap_err();

        assert!(matches!(err, FormError::UnknownField(name) if name == "sortOrder"));
        assert_eq!(form, before);
    }

    #[test]
    fn test_invalid_report_type_is_rejected_before_dispatch() {
        let mut form = form();
        let err = form.set_field("reportType", "weekly").unwrap_err();
        assert!(matches!(err, FormError::InvalidReportType(_)));
    }

    #[test]
    fn test_zero_page_is_rejected() {
        let mut form = form();
        assert!(form.set_field("page", "0").is_err());
        assert!(form.set_field("pageSize", "ten").is_err());
    }

    #[test]
    fn test_empty_subscriber_becomes_no_filter() {
        let mut form = form();
        form.set_field("subscriberName", "   ").unwrap();
        assert_eq!(form.to_query_params().subscriber_name, None);

        form.set_field("subscriberName", " ECOBANK ").unwrap();
        assert_eq!(
            form.to_query_params().subscriber_name.as_deref(),
            Some("ECOBANK")
        );
    }
}
