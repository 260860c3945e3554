// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::dom::incremental::{
    update_copy_feedback, update_parcel_table, update_selection_bar, update_stats_cards,
};
use crate::models::{seed_parcels, ParcelStore};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación: localizar #app y construir la colección
    /// desde el seed embebido (el único paso falible del arranque)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let parcels = seed_parcels().map_err(|e| JsValue::from_str(&e))?;
        let store = ParcelStore::new(parcels).map_err(|e| JsValue::from_str(&e))?;
        log::info!("📦 Dataset cargado: {} parcels", store.len());

        Ok(Self {
            state: AppState::new(store),
            root: Some(root),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-render completo
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let view = render_app(&self.state)?;
            append_child(root, &view)?;
        }
        Ok(())
    }

    /// Despachar una actualización incremental a su región
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::ParcelTable => update_parcel_table(&self.state),
            IncrementalUpdate::SelectionBar => update_selection_bar(&self.state),
            IncrementalUpdate::StatsCards => update_stats_cards(&self.state),
            IncrementalUpdate::CopyFeedback => update_copy_feedback(&self.state),
        }
    }
}
