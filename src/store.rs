//! Search Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on each input.

use reactive_stores::Store;

use crate::dates::{check_date_order, compute_days, DateField, DateOrderError};
use crate::models::{SearchQuery, TravelType};

/// Editable fields of the travel search form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SearchFormState {
    /// Departure date, `YYYY-MM-DD` or empty
    pub start_date: String,
    /// Return date, `YYYY-MM-DD` or empty
    pub end_date: String,
    /// Budget in TWD as typed
    pub budget: String,
    pub destination: String,
    pub travel_type: Option<TravelType>,
}

/// Type alias for the form store
pub type SearchFormStore = Store<SearchFormState>;

impl SearchFormState {
    /// Set the departure date; cleared again if it falls after the return date
    pub fn set_start_date(&mut self, value: String) -> Result<(), DateOrderError> {
        self.start_date = value;
        check_date_order(DateField::Start, &self.start_date, &self.end_date)
            .inspect_err(|_| self.start_date.clear())
    }

    /// Set the return date; cleared again if it falls before the departure date
    pub fn set_end_date(&mut self, value: String) -> Result<(), DateOrderError> {
        self.end_date = value;
        check_date_order(DateField::End, &self.start_date, &self.end_date)
            .inspect_err(|_| self.end_date.clear())
    }

    /// Trip length for the current dates
    pub fn days(&self) -> Option<i64> {
        compute_days(&self.start_date, &self.end_date)
    }

    /// Build the outbound payload from the current input
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            days: self.days(),
            budget: self.budget.clone(),
            destination: self.destination.clone(),
            travel_type: self.travel_type.map(|t| t.as_str()).unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SearchFormState {
        SearchFormState {
            start_date: "2024-07-01".to_string(),
            end_date: "2024-07-08".to_string(),
            budget: "50000".to_string(),
            destination: "大阪".to_string(),
            travel_type: Some(TravelType::Food),
        }
    }

    #[test]
    fn test_reversed_end_date_is_cleared() {
        let mut state = SearchFormState::default();
        state.set_start_date("2024-07-10".to_string()).unwrap();

        let err = state.set_end_date("2024-07-01".to_string()).unwrap_err();
        assert_eq!(err.field, DateField::End);
        assert!(state.end_date.is_empty());
        assert_eq!(state.start_date, "2024-07-10");
    }

    #[test]
    fn test_reversed_start_date_is_cleared() {
        let mut state = SearchFormState::default();
        state.set_end_date("2024-07-01".to_string()).unwrap();

        let err = state.set_start_date("2024-07-10".to_string()).unwrap_err();
        assert_eq!(err.field, DateField::Start);
        assert!(state.start_date.is_empty());
        assert_eq!(state.end_date, "2024-07-01");
    }

    #[test]
    fn test_same_day_trip_is_accepted() {
        let mut state = SearchFormState::default();
        state.set_start_date("2024-07-10".to_string()).unwrap();
        state.set_end_date("2024-07-10".to_string()).unwrap();
        assert_eq!(state.days(), Some(0));
    }

    #[test]
    fn test_single_date_is_not_validated() {
        let mut state = SearchFormState::default();
        assert!(state.set_end_date("2024-07-10".to_string()).is_ok());
        assert_eq!(state.days(), None);
    }

    #[test]
    fn test_to_query() {
        let query = filled().to_query();
        assert_eq!(query.start_date, "2024-07-01");
        assert_eq!(query.end_date, "2024-07-08");
        assert_eq!(query.days, Some(7));
        assert_eq!(query.budget, "50000");
        assert_eq!(query.destination, "大阪");
        assert_eq!(query.travel_type, "food");
    }

    #[test]
    fn test_to_query_without_travel_type() {
        let state = SearchFormState { travel_type: None, ..filled() };
        assert_eq!(state.to_query().travel_type, "");
    }
}
