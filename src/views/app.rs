// ============================================================================
// APP VIEW - Composición del dashboard completo
// ============================================================================
// Cada región incremental vive bajo un contenedor con id fijo; las
// actualizaciones parciales reemplazan solo el contenido del contenedor.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::APP_VERSION;
use crate::views::{render_parcel_table, render_selection_bar, render_stat_cards, render_toolbar};

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("dashboard").build();

    append_child(&root, &render_header()?)?;

    let stats_wrap = ElementBuilder::new("div")?.attr("id", "stats-wrap")?.build();
    append_child(&stats_wrap, &render_stat_cards(&state.stats())?)?;
    append_child(&root, &stats_wrap)?;

    append_child(&root, &render_toolbar(state)?)?;

    let table_wrap = ElementBuilder::new("div")?.attr("id", "parcel-table-wrap")?.build();
    append_child(&table_wrap, &render_parcel_table(state)?)?;
    append_child(&root, &table_wrap)?;

    let bar_wrap = ElementBuilder::new("div")?.attr("id", "selection-bar-wrap")?.build();
    append_child(&bar_wrap, &render_selection_bar(state)?)?;
    append_child(&root, &bar_wrap)?;

    append_child(&root, &render_footer()?)?;

    Ok(root)
}

fn render_header() -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("dashboard-header").build();

    let titles = ElementBuilder::new("div")?.build();
    append_child(
        &titles,
        &ElementBuilder::new("h1")?
            .class("dashboard-title")
            .text("📦 Logistics Parcel Dashboard")
            .build(),
    )?;
    append_child(
        &titles,
        &ElementBuilder::new("p")?
            .class("dashboard-subtitle")
            .text("Track and manage your shipment lifecycle")
            .build(),
    )?;
    append_child(&header, &titles)?;

    // Affordance sin backing: el alta de parcels no tiene formulario
    let add_btn = ElementBuilder::new("button")?.class("add-btn").text("＋ Add New Parcel").build();
    on_click(&add_btn, move |e| {
        e.stop_propagation();
        log::info!("➕ Add New Parcel: affordance visual, sin mutación detrás");
    })?;
    append_child(&header, &add_btn)?;

    Ok(header)
}

fn render_footer() -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?.class("dashboard-footer").build();
    append_child(
        &footer,
        &ElementBuilder::new("p")?
            .text(&format!("Logistics Intelligence System • Stable Build v{}", APP_VERSION))
            .build(),
    )?;
    Ok(footer)
}
