// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo se reconstruye la región afectada por el cambio de estado, sin
// re-renderizar la aplicación entera. Si el contenedor esperado no está
// en el DOM, se devuelve un error "needs full render" y lib.rs cae al
// re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, query_selector_all, set_inner_html, set_text_content};
use crate::state::app_state::AppState;
use crate::views::{render_parcel_table, render_selection_bar, render_stat_cards};

/// Reemplazar el contenido de un contenedor por una vista recién renderizada
fn swap_into(container_id: &str, view: Element) -> Result<(), JsValue> {
    let container = get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} missing, needs full render", container_id)))?;
    set_inner_html(&container, "");
    append_child(&container, &view)
}

/// Re-renderizar la tabla de parcels (vista filtrada + checkbox de cabecera
/// + contador de resultados)
pub fn update_parcel_table(state: &AppState) -> Result<(), JsValue> {
    swap_into("parcel-table-wrap", render_parcel_table(state)?)
}

/// Re-renderizar la barra flotante de selección
pub fn update_selection_bar(state: &AppState) -> Result<(), JsValue> {
    swap_into("selection-bar-wrap", render_selection_bar(state)?)
}

/// Re-renderizar las tarjetas de resumen (solo cambia si muta la colección)
pub fn update_stats_cards(state: &AppState) -> Result<(), JsValue> {
    swap_into("stats-wrap", render_stat_cards(&state.stats())?)
}

/// Marcar/desmarcar el feedback "copiado" de los botones de copia sin
/// tocar el resto de la tabla
pub fn update_copy_feedback(state: &AppState) -> Result<(), JsValue> {
    let copied = state.copied_id.borrow().clone();
    let buttons = query_selector_all(".copy-btn")?;
    for button in buttons.iter() {
        let Ok(button) = button.dyn_into::<Element>() else {
            continue;
        };
        let key = button.get_attribute("data-copy-key");
        if key.is_some() && key == copied {
            button.class_list().add_1("copied")?;
            set_text_content(&button, "✓");
        } else {
            button.class_list().remove_1("copied")?;
            set_text_content(&button, "⧉");
        }
    }
    Ok(())
}
