// ============================================================================
// PARCELS VIEWMODEL - Motor de consulta de parcels
// ============================================================================
// Función pura sobre (colección, criterios): el mismo snapshot produce
// siempre el mismo resultado, en el orden original de la colección.
// Escaneo O(n) con cortocircuito de predicados; sin índices ni memos
// (el dataset es pequeño y local a la sesión).
// ============================================================================

use chrono::NaiveDate;

use crate::models::{FilterCriteria, Parcel, ParcelStatus};

/// Subconjunto de la colección que satisface TODOS los criterios activos,
/// preservando el orden original (filtro estable, sin re-orden).
pub fn filter_parcels(parcels: &[Parcel], criteria: &FilterCriteria) -> Vec<Parcel> {
    parcels
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect()
}

/// Ids visibles tras el filtro (para el select-all y el checkbox de cabecera)
pub fn visible_ids(parcels: &[Parcel], criteria: &FilterCriteria) -> Vec<String> {
    parcels
        .iter()
        .filter(|p| matches(p, criteria))
        .map(|p| p.id.clone())
        .collect()
}

fn matches(parcel: &Parcel, criteria: &FilterCriteria) -> bool {
    matches_search(parcel, &criteria.search_term)
        && criteria.status.map_or(true, |wanted| parcel.status == wanted)
        && criteria.payment.map_or(true, |wanted| parcel.payment_status == wanted)
        && matches_date_range(parcel, criteria.date_from, criteria.date_to)
}

/// Término vacío: pasa todo. El id y el destinatario se comparan sin
/// mayúsculas; el teléfono por contención literal (los números no tienen
/// mayúsculas que normalizar).
fn matches_search(parcel: &Parcel, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    parcel.id.to_lowercase().contains(&needle)
        || parcel.recipient.to_lowercase().contains(&needle)
        || parcel.phone.contains(term)
}

/// Cada límite se comprueba solo si está presente. A granularidad de día,
/// "inicio de dateFrom" y "fin de dateTo" colapsan en comparaciones
/// inclusivas de fecha. Una fecha de registro no parseable no puede
/// satisfacer un límite activo.
fn matches_date_range(parcel: &Parcel, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let date = match parse_record_date(&parcel.date) {
        Some(d) => d,
        None => return false,
    };
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}

fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Recuentos agregados sobre la colección COMPLETA (sin filtrar),
/// para las tarjetas de resumen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParcelStats {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub delivered: usize,
}

impl ParcelStats {
    pub fn compute(parcels: &[Parcel]) -> Self {
        let mut stats = ParcelStats {
            total: parcels.len(),
            ..ParcelStats::default()
        };
        for parcel in parcels {
            match parcel.status {
                ParcelStatus::Pending | ParcelStatus::Hold => stats.pending += 1,
                ParcelStatus::InTransit
                | ParcelStatus::AssignedForDelivery
                | ParcelStatus::AtSorting => stats.in_transit += 1,
                ParcelStatus::Delivered => stats.delivered += 1,
                ParcelStatus::Cancelled | ParcelStatus::AtDeliveryHub => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{seed_parcels, ParcelType, PaymentStatus};

    fn seed() -> Vec<Parcel> {
        seed_parcels().unwrap()
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    fn ids(parcels: &[Parcel]) -> Vec<&str> {
        parcels.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_all_in_order() {
        let parcels = seed();
        let filtered = filter_parcels(&parcels, &criteria());
        assert_eq!(ids(&filtered), ids(&parcels));
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let parcels = seed();
        let c = FilterCriteria {
            payment: Some(PaymentStatus::Paid),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        // Subsecuencia: cada resultado aparece en la colección, en el
        // mismo orden relativo.
        let mut cursor = 0;
        for parcel in &filtered {
            let pos = parcels[cursor..]
                .iter()
                .position(|p| p.id == parcel.id)
                .expect("resultado fuera de la colección o desordenado");
            cursor += pos + 1;
        }
    }

    #[test]
    fn test_search_id_is_case_insensitive() {
        let parcels = seed();
        let c = FilterCriteria {
            search_term: "trk89236".to_string(),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89236"]);
    }

    #[test]
    fn test_search_recipient_is_case_insensitive() {
        let parcels = seed();
        for term in ["jasim", "JASIM", "Jasim Ud"] {
            let c = FilterCriteria {
                search_term: term.to_string(),
                ..criteria()
            };
            assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89236"], "term: {}", term);
        }
    }

    #[test]
    fn test_search_phone_is_substring() {
        let parcels = seed();
        let c = FilterCriteria {
            search_term: "01934-5".to_string(),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89236"]);
    }

    #[test]
    fn test_search_matches_any_of_the_three_fields() {
        let parcels = seed();
        // "89238" está solo en el id de TRK89238 (ejemplo de la suite de
        // referencia)
        let c = FilterCriteria {
            search_term: "89238".to_string(),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89238"]);

        // Sin coincidencias en ninguno de los tres campos
        let c = FilterCriteria {
            search_term: "zzz-no-match".to_string(),
            ..criteria()
        };
        assert!(filter_parcels(&parcels, &c).is_empty());
    }

    #[test]
    fn test_status_filter_exact_match() {
        let parcels = seed();
        let c = FilterCriteria {
            status: Some(ParcelStatus::Pending),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89236"]);

        let c = FilterCriteria {
            status: Some(ParcelStatus::Hold),
            ..criteria()
        };
        let holds = filter_parcels(&parcels, &c);
        assert_eq!(holds.len(), 3);
        assert!(holds.iter().all(|p| p.status == ParcelStatus::Hold));
    }

    #[test]
    fn test_all_status_is_noop() {
        let parcels = seed();
        let with_none = filter_parcels(&parcels, &criteria());
        assert_eq!(with_none.len(), parcels.len());
    }

    #[test]
    fn test_payment_filter() {
        let parcels = seed();
        let c = FilterCriteria {
            payment: Some(PaymentStatus::Unpaid),
            ..criteria()
        };
        let unpaid = filter_parcels(&parcels, &c);
        assert!(unpaid.iter().all(|p| p.payment_status == PaymentStatus::Unpaid));
        assert_eq!(unpaid.len(), 4);
    }

    #[test]
    fn test_date_range_empty_bounds_match_all() {
        let parcels = seed();
        let c = FilterCriteria {
            date_from: None,
            date_to: None,
            ..criteria()
        };
        assert_eq!(filter_parcels(&parcels, &c).len(), parcels.len());
    }

    #[test]
    fn test_date_from_excludes_older() {
        let parcels = seed();
        let c = FilterCriteria {
            date_from: NaiveDate::from_ymd_opt(2023, 10, 27),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert!(filtered.iter().all(|p| p.date.as_str() >= "2023-10-27"));
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_date_to_excludes_newer() {
        let parcels = seed();
        let c = FilterCriteria {
            date_to: NaiveDate::from_ymd_opt(2023, 10, 26),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert!(filtered.iter().all(|p| p.date.as_str() <= "2023-10-26"));
        assert_eq!(filtered.len(), 5);
    }

    #[test]
    fn test_single_day_range() {
        let parcels = seed();
        let day = NaiveDate::from_ymd_opt(2023, 10, 27);
        let c = FilterCriteria {
            date_from: day,
            date_to: day,
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89236"]);
    }

    #[test]
    fn test_unparseable_record_date_fails_active_bound() {
        let mut parcels = seed();
        parcels[0].date = "pronto".to_string();
        let broken_id = parcels[0].id.clone();

        // Sin límites activos el registro sigue visible
        let all = filter_parcels(&parcels, &criteria());
        assert!(all.iter().any(|p| p.id == broken_id));

        // Con cualquier límite activo queda excluido
        let c = FilterCriteria {
            date_from: NaiveDate::from_ymd_opt(2023, 1, 1),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert!(!filtered.iter().any(|p| p.id == broken_id));
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let parcels = seed();
        // Hold + Unpaid: TRK89235 y TRK89243
        let c = FilterCriteria {
            status: Some(ParcelStatus::Hold),
            payment: Some(PaymentStatus::Unpaid),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89235", "TRK89243"]);

        // ...y acotado al 2023-10-28 queda solo TRK89235
        let c = FilterCriteria {
            status: Some(ParcelStatus::Hold),
            payment: Some(PaymentStatus::Unpaid),
            date_from: NaiveDate::from_ymd_opt(2023, 10, 28),
            date_to: NaiveDate::from_ymd_opt(2023, 10, 28),
            ..criteria()
        };
        assert_eq!(ids(&filter_parcels(&parcels, &c)), ["TRK89235"]);
    }

    #[test]
    fn test_same_snapshot_is_deterministic() {
        let parcels = seed();
        let c = FilterCriteria {
            search_term: "a".to_string(),
            payment: Some(PaymentStatus::Paid),
            ..criteria()
        };
        assert_eq!(filter_parcels(&parcels, &c), filter_parcels(&parcels, &c));
    }

    #[test]
    fn test_visible_ids_mirror_filtered_parcels() {
        let parcels = seed();
        let c = FilterCriteria {
            status: Some(ParcelStatus::Hold),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert_eq!(
            visible_ids(&parcels, &c),
            filtered.iter().map(|p| p.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_stats_partition_counts() {
        let parcels = seed();
        let stats = ParcelStats::compute(&parcels);
        assert_eq!(stats.total, 9);
        assert_eq!(stats.pending, 4); // 1 Pending + 3 Hold
        assert_eq!(stats.in_transit, 2); // In Transit + At Sorting
        assert_eq!(stats.delivered, 1);
    }

    #[test]
    fn test_stats_ignore_active_filters() {
        // Los agregados van sobre la colección completa, no sobre la vista
        let parcels = seed();
        let c = FilterCriteria {
            status: Some(ParcelStatus::Delivered),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert_eq!(filtered.len(), 1);
        assert_eq!(ParcelStats::compute(&parcels).total, 9);
    }

    #[test]
    fn test_fragile_express_types_do_not_affect_filtering() {
        let parcels = seed();
        let c = FilterCriteria {
            search_term: "sumaiya".to_string(),
            ..criteria()
        };
        let filtered = filter_parcels(&parcels, &c);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].parcel_type, ParcelType::Express);
    }
}
