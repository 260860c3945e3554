// ============================================================================
// EXPORT SERVICE - Exportación CSV de la selección
// ============================================================================
// La construcción del documento es pura; la descarga (Blob + <a> temporal)
// es el único efecto y vive detrás del límite wasm.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::document;
use crate::models::Parcel;

pub const CSV_HEADER: &str =
    "ID,Recipient,Address,Phone,COD,Delivery Charge,COD Charge,Status,Payment,Date,Weight,Type";

/// Construir el documento CSV. Los campos de texto libre y los importes
/// van entre comillas dobles, con las comillas internas duplicadas.
pub fn build_csv(parcels: &[Parcel]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for p in parcels {
        let row = [
            p.id.clone(),
            quote(&p.recipient),
            quote(&p.address),
            p.phone.clone(),
            quote(&p.cod),
            quote(&p.delivery_charge),
            quote(&p.cod_charge),
            p.status.label().to_string(),
            p.payment_status.label().to_string(),
            p.date.clone(),
            p.weight.clone(),
            p.parcel_type.label().to_string(),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Nombre de archivo con timestamp unix en milisegundos
pub fn export_filename() -> String {
    format!("parcel_batch_{}.csv", js_sys::Date::now() as u64)
}

/// Ofrecer el CSV como descarga vía Blob y un <a> temporal
pub fn download_csv(csv: &str) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&export_filename());
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;

    log::info!("⬇️ CSV exportado ({} bytes)", csv.len());
    Ok(())
}
