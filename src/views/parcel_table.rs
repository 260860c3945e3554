// ============================================================================
// PARCEL TABLE VIEW - Tabla filtrable con selección y menú por fila
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Parcel;
use crate::services::copy_text;
use crate::state::app_state::AppState;

const COLUMNS: [&str; 10] = [
    "Created Date",
    "Tracking ID",
    "Recipient",
    "Mobile Number",
    "COD Amount",
    "Deliv. Charge",
    "COD Charge",
    "Type",
    "Status",
    "Payment",
];

/// Renderizar el panel de la tabla: cabecera con checkbox de cobertura,
/// filas de la vista filtrada en orden estable y pie con el contador.
pub fn render_parcel_table(state: &AppState) -> Result<Element, JsValue> {
    let visible = state.visible_parcels();
    let visible_ids: Vec<String> = visible.iter().map(|p| p.id.clone()).collect();

    let panel = ElementBuilder::new("div")?.class("table-panel").build();
    let scroll = ElementBuilder::new("div")?.class("table-scroll").build();
    let table = ElementBuilder::new("table")?.class("parcel-table").build();

    append_child(&table, &render_head(state, &visible_ids)?)?;
    append_child(&table, &render_body(state, &visible)?)?;
    append_child(&scroll, &table)?;
    append_child(&panel, &scroll)?;
    append_child(&panel, &render_footer(visible.len())?)?;

    Ok(panel)
}

fn render_head(state: &AppState, visible_ids: &[String]) -> Result<Element, JsValue> {
    let thead = ElementBuilder::new("thead")?.build();
    let row = ElementBuilder::new("tr")?.build();

    // Checkbox de cabecera: refleja la cobertura de la vista ACTUAL y
    // opera solo sobre ella (nunca sobre la colección completa)
    let th_check = ElementBuilder::new("th")?.class("col-check").build();
    let covers_all = state.selection.borrow().covers_all(visible_ids);
    let checkbox = render_checkbox(covers_all)?;
    {
        let state = state.clone();
        on_click(&checkbox, move |e| {
            e.stop_propagation();
            state.toggle_select_all();
        })?;
    }
    append_child(&th_check, &checkbox)?;
    append_child(&row, &th_check)?;

    for column in COLUMNS {
        let th = ElementBuilder::new("th")?.text(column).build();
        append_child(&row, &th)?;
    }
    let th_actions = ElementBuilder::new("th")?.class("col-actions").text("Actions").build();
    append_child(&row, &th_actions)?;

    append_child(&thead, &row)?;
    Ok(thead)
}

fn render_body(state: &AppState, visible: &[Parcel]) -> Result<Element, JsValue> {
    let tbody = ElementBuilder::new("tbody")?.build();

    if visible.is_empty() {
        append_child(&tbody, &render_empty_row(state.criteria().is_active())?)?;
        return Ok(tbody);
    }

    for parcel in visible {
        append_child(&tbody, &render_row(state, parcel)?)?;
    }
    Ok(tbody)
}

fn render_row(state: &AppState, parcel: &Parcel) -> Result<Element, JsValue> {
    let is_selected = state.selection.borrow().contains(&parcel.id);
    let row = ElementBuilder::new("tr")?
        .class(if is_selected { "parcel-row selected" } else { "parcel-row" })
        .attr("data-id", &parcel.id)?
        .build();

    // Checkbox de fila
    let td_check = ElementBuilder::new("td")?.class("col-check").build();
    let checkbox = render_checkbox(is_selected)?;
    {
        let state = state.clone();
        let id = parcel.id.clone();
        on_click(&checkbox, move |e| {
            e.stop_propagation();
            state.toggle_selected(&id);
        })?;
    }
    append_child(&td_check, &checkbox)?;
    append_child(&row, &td_check)?;

    // Fecha + hora
    let td_date = ElementBuilder::new("td")?.class("cell-date").build();
    append_child(&td_date, &ElementBuilder::new("div")?.text(&parcel.date).build())?;
    if let Some(time) = &parcel.time {
        append_child(&td_date, &ElementBuilder::new("div")?.class("cell-sub").text(time).build())?;
    }
    append_child(&row, &td_date)?;

    // Tracking ID + copia + peso
    let td_id = ElementBuilder::new("td")?.build();
    let id_line = ElementBuilder::new("div")?.class("cell-id-line").build();
    append_child(&id_line, &ElementBuilder::new("span")?.class("parcel-id").text(&parcel.id).build())?;
    append_child(&id_line, &render_copy_button(state, format!("id:{}", parcel.id), parcel.id.clone())?)?;
    append_child(&td_id, &id_line)?;
    append_child(&td_id, &ElementBuilder::new("div")?.class("cell-sub").text(&parcel.weight).build())?;
    append_child(&row, &td_id)?;

    // Destinatario + dirección
    let td_recipient = ElementBuilder::new("td")?.build();
    append_child(&td_recipient, &ElementBuilder::new("p")?.class("cell-recipient").text(&parcel.recipient).build())?;
    append_child(&td_recipient, &ElementBuilder::new("p")?.class("cell-address").text(&parcel.address).build())?;
    append_child(&row, &td_recipient)?;

    // Teléfono + copia
    let td_phone = ElementBuilder::new("td")?.class("cell-phone").build();
    append_child(&td_phone, &ElementBuilder::new("span")?.text(&parcel.phone).build())?;
    append_child(&td_phone, &render_copy_button(state, format!("phone:{}", parcel.id), parcel.phone.clone())?)?;
    append_child(&row, &td_phone)?;

    // Importes (pre-formateados, solo display)
    append_child(&row, &ElementBuilder::new("td")?.class("cell-cod").text(&parcel.cod).build())?;
    append_child(&row, &ElementBuilder::new("td")?.class("cell-amount").text(&parcel.delivery_charge).build())?;
    append_child(&row, &ElementBuilder::new("td")?.class("cell-amount").text(&parcel.cod_charge).build())?;

    // Tipo
    let td_type = ElementBuilder::new("td")?.class("cell-type").build();
    append_child(&td_type, &ElementBuilder::new("span")?.class("type-badge").text(parcel.parcel_type.label()).build())?;
    append_child(&row, &td_type)?;

    // Estado
    let td_status = ElementBuilder::new("td")?.build();
    let status_badge = ElementBuilder::new("span")?
        .class(&format!("status-badge {}", parcel.status.css_class()))
        .text(&format!("{} {}", parcel.status.icon(), parcel.status.label()))
        .build();
    append_child(&td_status, &status_badge)?;
    append_child(&row, &td_status)?;

    // Pago
    let td_payment = ElementBuilder::new("td")?.build();
    let payment_badge = ElementBuilder::new("span")?
        .class(&format!("payment-badge {}", parcel.payment_status.css_class()))
        .text(parcel.payment_status.label())
        .build();
    append_child(&td_payment, &payment_badge)?;
    append_child(&row, &td_payment)?;

    // Acciones (menú por fila)
    let td_actions = ElementBuilder::new("td")?.class("col-actions").build();
    append_child(&td_actions, &render_row_menu(state, parcel)?)?;
    append_child(&row, &td_actions)?;

    Ok(row)
}

/// Menú de acciones de una fila. Edit/Complain son affordances sin
/// backing (igual que el Add de la cabecera); Delete sí muta el store.
fn render_row_menu(state: &AppState, parcel: &Parcel) -> Result<Element, JsValue> {
    let is_open = state.active_menu_id.borrow().as_deref() == Some(parcel.id.as_str());

    let wrapper = ElementBuilder::new("div")?.class("row-menu-wrapper").build();
    let button = ElementBuilder::new("button")?
        .class(if is_open { "row-menu-btn open" } else { "row-menu-btn" })
        .text("⋮")
        .build();
    {
        let state = state.clone();
        let id = parcel.id.clone();
        on_click(&button, move |e| {
            e.stop_propagation();
            let next = {
                let active = state.active_menu_id.borrow();
                if active.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id.clone())
                }
            };
            state.set_active_menu(next);
        })?;
    }
    append_child(&wrapper, &button)?;

    if is_open {
        let menu = ElementBuilder::new("div")?.class("row-menu").build();

        let edit = ElementBuilder::new("button")?.class("row-menu-item").text("✏️ Edit").build();
        append_child(&menu, &edit)?;

        let delete = ElementBuilder::new("button")?.class("row-menu-item danger").text("🗑 Delete").build();
        {
            let state = state.clone();
            let id = parcel.id.clone();
            on_click(&delete, move |e| {
                e.stop_propagation();
                if let Err(e) = state.remove_parcel(&id) {
                    log::error!("❌ Error eliminando parcel: {}", e);
                }
            })?;
        }
        append_child(&menu, &delete)?;

        let complain = ElementBuilder::new("button")?.class("row-menu-item").text("💬 Complain").build();
        append_child(&menu, &complain)?;

        append_child(&wrapper, &menu)?;
    }

    Ok(wrapper)
}

fn render_copy_button(state: &AppState, key: String, text_to_copy: String) -> Result<Element, JsValue> {
    let is_copied = state.copied_id.borrow().as_deref() == Some(key.as_str());
    let button = ElementBuilder::new("button")?
        .class(if is_copied { "copy-btn copied" } else { "copy-btn" })
        .attr("data-copy-key", &key)?
        .attr("title", "Copy to clipboard")?
        .text(if is_copied { "✓" } else { "⧉" })
        .build();
    {
        let state = state.clone();
        on_click(&button, move |e| {
            e.stop_propagation();
            copy_text(&text_to_copy);
            state.set_copied(Some(key.clone()));

            // Resetear el feedback a los 2s, salvo que otra copia lo pise
            let state = state.clone();
            let key = key.clone();
            Timeout::new(2_000, move || {
                let still_current = state.copied_id.borrow().as_deref() == Some(key.as_str());
                if still_current {
                    state.set_copied(None);
                }
            })
            .forget();
        })?;
    }
    Ok(button)
}

fn render_checkbox(checked: bool) -> Result<Element, JsValue> {
    let checkbox = ElementBuilder::new("input")?
        .class("row-check")
        .attr("type", "checkbox")?
        .build();
    if checked {
        checkbox.set_attribute("checked", "")?;
    }
    Ok(checkbox)
}

fn render_empty_row(has_active_filters: bool) -> Result<Element, JsValue> {
    let message = if has_active_filters {
        "No parcels found matching your search."
    } else {
        "No parcels in this batch yet."
    };
    let row = ElementBuilder::new("tr")?.build();
    let cell = ElementBuilder::new("td")?
        .class("empty-row")
        .attr("colspan", "12")?
        .build();
    append_child(&cell, &ElementBuilder::new("div")?.class("empty-icon").text("📦").build())?;
    append_child(&cell, &ElementBuilder::new("p")?.text(message).build())?;
    append_child(&row, &cell)?;
    Ok(row)
}

fn render_footer(result_count: usize) -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("div")?.class("table-footer").build();

    let summary = ElementBuilder::new("p")?.class("results-summary").build();
    append_child(&summary, &ElementBuilder::new("span")?.text("Showing ").build())?;
    append_child(
        &summary,
        &ElementBuilder::new("span")?
            .class("results-count")
            .text(&result_count.to_string())
            .build(),
    )?;
    append_child(&summary, &ElementBuilder::new("span")?.text(" results").build())?;
    append_child(&footer, &summary)?;

    // Paginación visual (sin datos reales detrás)
    let pager = ElementBuilder::new("div")?.class("pager").build();
    let prev = ElementBuilder::new("button")?
        .class("pager-btn")
        .attr("disabled", "")?
        .text("Previous")
        .build();
    let next = ElementBuilder::new("button")?.class("pager-btn").text("Next").build();
    append_child(&pager, &prev)?;
    append_child(&pager, &next)?;
    append_child(&footer, &pager)?;

    Ok(footer)
}
