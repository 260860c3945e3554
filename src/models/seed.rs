// ============================================================================
// SEED DATA - Dataset mock embebido
// ============================================================================
// Los registros se construyen UNA sola vez al arrancar y nunca se mutan
// fuera del ParcelStore. Es el único paso falible del arranque.
// ============================================================================

use crate::models::Parcel;

const SEED_JSON: &str = include_str!("seed_parcels.json");

/// Parsear el dataset embebido
pub fn seed_parcels() -> Result<Vec<Parcel>, String> {
    serde_json::from_str(SEED_JSON).map_err(|e| format!("Error parseando seed de parcels: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParcelStatus, PaymentStatus};
    use std::collections::HashSet;

    #[test]
    fn test_seed_parses() {
        let parcels = seed_parcels().unwrap();
        assert_eq!(parcels.len(), 9);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let parcels = seed_parcels().unwrap();
        let ids: HashSet<&str> = parcels.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), parcels.len());
    }

    #[test]
    fn test_seed_reference_records() {
        let parcels = seed_parcels().unwrap();
        let trk89236 = parcels.iter().find(|p| p.id == "TRK89236").unwrap();
        assert_eq!(trk89236.status, ParcelStatus::Pending);
        assert_eq!(trk89236.date, "2023-10-27");
        assert_eq!(trk89236.payment_status, PaymentStatus::Unpaid);

        let trk89238 = parcels.iter().find(|p| p.id == "TRK89238").unwrap();
        assert_eq!(trk89238.status, ParcelStatus::InTransit);
        assert_eq!(trk89238.date, "2023-10-26");
    }

    #[test]
    fn test_seed_dates_are_well_formed() {
        for parcel in seed_parcels().unwrap() {
            assert!(
                chrono::NaiveDate::parse_from_str(&parcel.date, "%Y-%m-%d").is_ok(),
                "fecha inválida en {}",
                parcel.id
            );
        }
    }
}
