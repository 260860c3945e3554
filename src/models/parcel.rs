// ============================================================================
// PARCEL MODEL - Registro de envío y enumeraciones cerradas
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado del ciclo de vida de un parcel.
/// El valor "All" del selector NO es un estado: en Rust se modela como
/// `None` en el filtro, nunca como valor de un registro.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ParcelStatus {
    Delivered,
    #[serde(rename = "In Transit")]
    InTransit,
    Pending,
    Cancelled,
    #[serde(rename = "At Sorting")]
    AtSorting,
    #[serde(rename = "Assigned for delivery")]
    AssignedForDelivery,
    #[serde(rename = "At Delivery Hub")]
    AtDeliveryHub,
    Hold,
}

impl ParcelStatus {
    /// Todos los estados, en el orden del selector de la toolbar
    pub const ALL: [ParcelStatus; 8] = [
        ParcelStatus::Pending,
        ParcelStatus::AtSorting,
        ParcelStatus::AtDeliveryHub,
        ParcelStatus::AssignedForDelivery,
        ParcelStatus::InTransit,
        ParcelStatus::Delivered,
        ParcelStatus::Hold,
        ParcelStatus::Cancelled,
    ];

    /// Etiqueta legible (la misma que viaja en el JSON del dataset)
    pub fn label(&self) -> &'static str {
        match self {
            ParcelStatus::Delivered => "Delivered",
            ParcelStatus::InTransit => "In Transit",
            ParcelStatus::Pending => "Pending",
            ParcelStatus::Cancelled => "Cancelled",
            ParcelStatus::AtSorting => "At Sorting",
            ParcelStatus::AssignedForDelivery => "Assigned for delivery",
            ParcelStatus::AtDeliveryHub => "At Delivery Hub",
            ParcelStatus::Hold => "Hold",
        }
    }

    /// Parsear desde la etiqueta del selector ("All" no es un estado)
    pub fn from_label(label: &str) -> Option<ParcelStatus> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }

    /// Clase CSS del badge de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            ParcelStatus::Delivered => "status-delivered",
            ParcelStatus::InTransit => "status-in-transit",
            ParcelStatus::Pending => "status-pending",
            ParcelStatus::Cancelled => "status-cancelled",
            ParcelStatus::AtSorting => "status-at-sorting",
            ParcelStatus::AssignedForDelivery => "status-assigned",
            ParcelStatus::AtDeliveryHub => "status-hub",
            ParcelStatus::Hold => "status-hold",
        }
    }

    /// Icono del badge
    pub fn icon(&self) -> &'static str {
        match self {
            ParcelStatus::Delivered => "✅",
            ParcelStatus::InTransit => "🚚",
            ParcelStatus::Pending => "🕐",
            ParcelStatus::Cancelled => "⛔",
            ParcelStatus::AtSorting => "📦",
            ParcelStatus::AssignedForDelivery => "🧑",
            ParcelStatus::AtDeliveryHub => "📍",
            ParcelStatus::Hold => "⏸",
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estado de pago del COD
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 2] = [PaymentStatus::Paid, PaymentStatus::Unpaid];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }

    pub fn from_label(label: &str) -> Option<PaymentStatus> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "payment-paid",
            PaymentStatus::Unpaid => "payment-unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tipo de servicio del envío
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ParcelType {
    Standard,
    Express,
    Fragile,
}

impl ParcelType {
    pub fn label(&self) -> &'static str {
        match self {
            ParcelType::Standard => "Standard",
            ParcelType::Express => "Express",
            ParcelType::Fragile => "Fragile",
        }
    }
}

impl fmt::Display for ParcelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Registro de un envío. La colección es inmutable durante la sesión;
/// las únicas mutaciones pasan por `ParcelStore` (alta/baja explícitas).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: String,
    pub recipient: String,
    pub address: String,
    pub phone: String,
    /// Importes pre-formateados, solo display (no se parsean ni suman)
    pub cod: String,
    pub delivery_charge: String,
    pub cod_charge: String,
    pub status: ParcelStatus,
    pub payment_status: PaymentStatus,
    /// Fecha calendario en formato YYYY-MM-DD
    pub date: String,
    /// Hora con marcador AM/PM, opcional
    #[serde(default)]
    pub time: Option<String>,
    pub weight: String,
    #[serde(rename = "type")]
    pub parcel_type: ParcelType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label_round_trip() {
        for status in ParcelStatus::ALL {
            assert_eq!(ParcelStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(ParcelStatus::from_label("All"), None);
        assert_eq!(ParcelStatus::from_label("in transit"), None);
    }

    #[test]
    fn test_payment_label_round_trip() {
        for payment in PaymentStatus::ALL {
            assert_eq!(PaymentStatus::from_label(payment.label()), Some(payment));
        }
        assert_eq!(PaymentStatus::from_label("All"), None);
    }

    #[test]
    fn test_parcel_json_shape() {
        let json = r#"{
            "id": "TRK00001",
            "recipient": "Rahul Ahmed",
            "address": "Mirpur-10, Dhaka",
            "phone": "01712-345678",
            "cod": "৳ 2,500",
            "deliveryCharge": "৳ 60",
            "codCharge": "৳ 25",
            "status": "In Transit",
            "paymentStatus": "Paid",
            "date": "2023-10-26",
            "time": "10:24 AM",
            "weight": "2.5 kg",
            "type": "Standard"
        }"#;
        let parcel: Parcel = serde_json::from_str(json).unwrap();
        assert_eq!(parcel.status, ParcelStatus::InTransit);
        assert_eq!(parcel.payment_status, PaymentStatus::Paid);
        assert_eq!(parcel.parcel_type, ParcelType::Standard);
        assert_eq!(parcel.delivery_charge, "৳ 60");
        assert_eq!(parcel.time.as_deref(), Some("10:24 AM"));

        // El shape camelCase se conserva al serializar
        let back = serde_json::to_string(&parcel).unwrap();
        assert!(back.contains("\"deliveryCharge\""));
        assert!(back.contains("\"paymentStatus\":\"Paid\""));
        assert!(back.contains("\"type\":\"Standard\""));
        assert!(back.contains("\"status\":\"In Transit\""));
    }
}
