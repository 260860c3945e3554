// ============================================================================
// STAT CARDS VIEW - Tarjetas de resumen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::viewmodels::ParcelStats;

/// Renderizar la fila de tarjetas de resumen (recuentos sobre la
/// colección completa, no sobre la vista filtrada)
pub fn render_stat_cards(stats: &ParcelStats) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("stats-grid").build();

    append_child(&grid, &render_stat_card("Total Parcels", stats.total, "📦", "icon-neutral")?)?;
    append_child(&grid, &render_stat_card("Pending", stats.pending, "🕐", "icon-yellow")?)?;
    append_child(&grid, &render_stat_card("In Transit", stats.in_transit, "🚚", "icon-blue")?)?;
    append_child(&grid, &render_stat_card("Delivered", stats.delivered, "✅", "icon-green")?)?;

    Ok(grid)
}

fn render_stat_card(label: &str, value: usize, icon: &str, icon_class: &str) -> Result<Element, JsValue> {
    let head = ElementBuilder::new("div")?
        .class("stat-card-head")
        .child(ElementBuilder::new("p")?.class("stat-label").text(label).build())?
        .child(
            ElementBuilder::new("span")?
                .class(&format!("stat-icon {}", icon_class))
                .text(icon)
                .build(),
        )?
        .build();

    let card = ElementBuilder::new("div")?
        .class("stat-card")
        .child(head)?
        .child(
            ElementBuilder::new("h3")?
                .class("stat-value")
                .text(&value.to_string())
                .build(),
        )?
        .build();
    Ok(card)
}
