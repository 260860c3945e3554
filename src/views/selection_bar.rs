// ============================================================================
// SELECTION BAR VIEW - Barra flotante de acciones en lote
// ============================================================================
// Visible solo con selección no vacía. Label/Invoice Print anuncian los
// ids objetivo y nada más; Export CSV sí genera y descarga el documento.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::services::{build_csv, download_csv};
use crate::state::app_state::AppState;

pub fn render_selection_bar(state: &AppState) -> Result<Element, JsValue> {
    if state.selection.borrow().is_empty() {
        return Ok(ElementBuilder::new("div")?.class("selection-bar hidden").build());
    }

    let count = state.selection.borrow().len();
    let bar = ElementBuilder::new("div")?.class("selection-bar").build();

    // Contador
    let counter = ElementBuilder::new("div")?.class("selection-count").build();
    append_child(
        &counter,
        &ElementBuilder::new("span")?.class("count-bubble").text(&count.to_string()).build(),
    )?;
    append_child(
        &counter,
        &ElementBuilder::new("span")?.text("Parcels Selected").build(),
    )?;
    append_child(&bar, &counter)?;

    // Stub: anuncia los ids objetivo y nada más
    let labels_btn = ElementBuilder::new("button")?.class("bar-btn").text("🖨 Label Print").build();
    {
        let state = state.clone();
        on_click(&labels_btn, move |e| {
            e.stop_propagation();
            announce(&format!("Printing Labels for: {}", selected_ids_csv(&state)));
        })?;
    }
    append_child(&bar, &labels_btn)?;

    let invoices_btn = ElementBuilder::new("button")?.class("bar-btn").text("🧾 Invoice Print").build();
    {
        let state = state.clone();
        on_click(&invoices_btn, move |e| {
            e.stop_propagation();
            announce(&format!("Generating Invoices for: {}", selected_ids_csv(&state)));
        })?;
    }
    append_child(&bar, &invoices_btn)?;

    // Export CSV real: selección en orden de colección
    let export_btn = ElementBuilder::new("button")?.class("bar-btn").text("⬇ Export CSV").build();
    {
        let state = state.clone();
        on_click(&export_btn, move |e| {
            e.stop_propagation();
            let csv = build_csv(&state.selected_parcels());
            if let Err(e) = download_csv(&csv) {
                log::error!("❌ Error exportando CSV: {:?}", e);
            }
        })?;
    }
    append_child(&bar, &export_btn)?;

    // Limpiar selección
    let clear_btn = ElementBuilder::new("button")?.class("bar-btn clear").text("✕").build();
    {
        let state = state.clone();
        on_click(&clear_btn, move |e| {
            e.stop_propagation();
            state.clear_selection();
        })?;
    }
    append_child(&bar, &clear_btn)?;

    Ok(bar)
}

fn selected_ids_csv(state: &AppState) -> String {
    state
        .selected_parcels()
        .iter()
        .map(|p| p.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn announce(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
