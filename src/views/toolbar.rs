// ============================================================================
// TOOLBAR VIEW - Búsqueda, filtros de estado/pago y rango de fechas
// ============================================================================
// Los inputs guardan su propio valor en el DOM: los cambios de filtro solo
// re-renderizan la tabla, nunca la toolbar (el foco no se pierde al teclear).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, event_input_value, event_select_value, on_change, on_input, ElementBuilder};
use crate::models::{ParcelStatus, PaymentStatus};
use crate::state::app_state::AppState;

pub fn render_toolbar(state: &AppState) -> Result<Element, JsValue> {
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();

    // Búsqueda por ID, destinatario o móvil
    let search = ElementBuilder::new("input")?
        .class("search-input")
        .attr("type", "text")?
        .attr("placeholder", "Search by ID, Name or Mobile...")?
        .attr("value", &state.search_term.borrow())?
        .build();
    {
        let state = state.clone();
        on_input(&search, move |e| {
            if let Some(value) = event_input_value(&e) {
                state.set_search_term(value);
            }
        })?;
    }
    append_child(&toolbar, &search)?;

    // Selector de estado ("All" vive solo aquí, nunca en un registro)
    let current_status = *state.status_filter.borrow();
    let status_select = ElementBuilder::new("select")?.class("filter-select").build();
    append_option(&status_select, "All", "All Statuses", current_status.is_none())?;
    for status in ParcelStatus::ALL {
        append_option(
            &status_select,
            status.label(),
            status.label(),
            current_status == Some(status),
        )?;
    }
    {
        let state = state.clone();
        on_change(&status_select, move |e| {
            if let Some(value) = event_select_value(&e) {
                state.set_status_filter(ParcelStatus::from_label(&value));
            }
        })?;
    }
    append_child(&toolbar, &status_select)?;

    // Selector de pago
    let current_payment = *state.payment_filter.borrow();
    let payment_select = ElementBuilder::new("select")?.class("filter-select").build();
    append_option(&payment_select, "All", "All Payments", current_payment.is_none())?;
    for payment in PaymentStatus::ALL {
        append_option(
            &payment_select,
            payment.label(),
            payment.label(),
            current_payment == Some(payment),
        )?;
    }
    {
        let state = state.clone();
        on_change(&payment_select, move |e| {
            if let Some(value) = event_select_value(&e) {
                state.set_payment_filter(PaymentStatus::from_label(&value));
            }
        })?;
    }
    append_child(&toolbar, &payment_select)?;

    // Rango de fechas (un límite mal formado cuenta como ausente)
    let date_from = render_date_input("date-from", &state.date_from_raw.borrow())?;
    {
        let state = state.clone();
        on_change(&date_from, move |e| {
            if let Some(value) = event_input_value(&e) {
                state.set_date_from(value);
            }
        })?;
    }
    append_child(&toolbar, &date_from)?;

    let date_to = render_date_input("date-to", &state.date_to_raw.borrow())?;
    {
        let state = state.clone();
        on_change(&date_to, move |e| {
            if let Some(value) = event_input_value(&e) {
                state.set_date_to(value);
            }
        })?;
    }
    append_child(&toolbar, &date_to)?;

    Ok(toolbar)
}

fn render_date_input(id: &str, value: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("date-input")
        .attr("type", "date")?
        .attr("id", id)?
        .attr("value", value)?
        .build();
    Ok(input)
}

fn append_option(select: &Element, value: &str, label: &str, selected: bool) -> Result<(), JsValue> {
    let mut option = ElementBuilder::new("option")?.attr("value", value)?.text(label);
    if selected {
        option = option.attr("selected", "selected")?;
    }
    append_child(select, &option.build())
}
