// ============================================================================
// FILTER CRITERIA - Snapshot puro del estado de filtros
// ============================================================================

use chrono::NaiveDate;

use crate::models::{ParcelStatus, PaymentStatus};

/// Criterios de filtro del dashboard. Es un valor plano: el motor de
/// consulta (`viewmodels::parcels_viewmodel`) es una función pura de
/// (colección, criterios) y este snapshot es todo su input.
///
/// `None` en `status`/`payment` equivale al valor "All" del selector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: Option<ParcelStatus>,
    pub payment: Option<PaymentStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Parsear un límite de fecha tal como llega del input `type="date"`.
    /// Entrada vacía o no parseable => sin límite, nunca un error.
    pub fn parse_date_bound(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// ¿Hay algún criterio activo?
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.status.is_some()
            || self.payment.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_bound() {
        assert_eq!(
            FilterCriteria::parse_date_bound("2023-10-27"),
            NaiveDate::from_ymd_opt(2023, 10, 27)
        );
        assert_eq!(FilterCriteria::parse_date_bound(" 2023-10-27 "), NaiveDate::from_ymd_opt(2023, 10, 27));
    }

    #[test]
    fn test_malformed_bound_is_absent() {
        assert_eq!(FilterCriteria::parse_date_bound(""), None);
        assert_eq!(FilterCriteria::parse_date_bound("   "), None);
        assert_eq!(FilterCriteria::parse_date_bound("27/10/2023"), None);
        assert_eq!(FilterCriteria::parse_date_bound("not-a-date"), None);
        assert_eq!(FilterCriteria::parse_date_bound("2023-13-45"), None);
    }

    #[test]
    fn test_default_criteria_is_inactive() {
        assert!(!FilterCriteria::default().is_active());
        let with_term = FilterCriteria {
            search_term: "TRK".to_string(),
            ..Default::default()
        };
        assert!(with_term.is_active());
    }
}
