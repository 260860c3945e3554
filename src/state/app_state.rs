// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Un solo escritor lógico (el usuario): cada setter muta el estado y
// dispara la actualización incremental que corresponde. El motor de
// consulta es puro; aquí solo viven los inputs crudos y la selección.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{FilterCriteria, Parcel, ParcelStatus, ParcelStore, PaymentStatus, Selection};
use crate::viewmodels::{filter_parcels, visible_ids, ParcelStats};

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo la región afectada)
    Incremental(IncrementalUpdate),
    /// Re-render completo (arranque o contenedor perdido)
    FullRender,
}

/// Actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Tabla de parcels (vista filtrada, checkboxes, contador)
    ParcelTable,
    /// Barra flotante de selección
    SelectionBar,
    /// Tarjetas de resumen
    StatsCards,
    /// Feedback transitorio de "copiado"
    CopyFeedback,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Colección; toda mutación pasa por el store (unicidad de id)
    pub store: Rc<RefCell<ParcelStore>>,

    // Filtros (inputs crudos de la toolbar)
    pub search_term: Rc<RefCell<String>>,
    pub status_filter: Rc<RefCell<Option<ParcelStatus>>>,
    pub payment_filter: Rc<RefCell<Option<PaymentStatus>>>,
    pub date_from_raw: Rc<RefCell<String>>,
    pub date_to_raw: Rc<RefCell<String>>,

    /// Selección por id, con semántica acotada a la vista filtrada
    pub selection: Rc<RefCell<Selection>>,

    // UI State
    pub active_menu_id: Rc<RefCell<Option<String>>>,
    pub copied_id: Rc<RefCell<Option<String>>>,
}

impl AppState {
    pub fn new(store: ParcelStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            search_term: Rc::new(RefCell::new(String::new())),
            status_filter: Rc::new(RefCell::new(None)),
            payment_filter: Rc::new(RefCell::new(None)),
            date_from_raw: Rc::new(RefCell::new(String::new())),
            date_to_raw: Rc::new(RefCell::new(String::new())),
            selection: Rc::new(RefCell::new(Selection::new())),
            active_menu_id: Rc::new(RefCell::new(None)),
            copied_id: Rc::new(RefCell::new(None)),
        }
    }

    /// Snapshot puro de los criterios de filtro. Un límite de fecha mal
    /// formado queda como "sin límite", nunca como error.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search_term.borrow().clone(),
            status: *self.status_filter.borrow(),
            payment: *self.payment_filter.borrow(),
            date_from: FilterCriteria::parse_date_bound(&self.date_from_raw.borrow()),
            date_to: FilterCriteria::parse_date_bound(&self.date_to_raw.borrow()),
        }
    }

    /// Vista filtrada actual, en el orden de la colección
    pub fn visible_parcels(&self) -> Vec<Parcel> {
        filter_parcels(self.store.borrow().parcels(), &self.criteria())
    }

    /// Ids de la vista filtrada actual
    pub fn visible_ids(&self) -> Vec<String> {
        visible_ids(self.store.borrow().parcels(), &self.criteria())
    }

    /// Parcels seleccionados, en el orden de la colección
    pub fn selected_parcels(&self) -> Vec<Parcel> {
        let selection = self.selection.borrow();
        self.store
            .borrow()
            .parcels()
            .iter()
            .filter(|p| selection.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Agregados sobre la colección COMPLETA (sin filtrar)
    pub fn stats(&self) -> ParcelStats {
        ParcelStats::compute(self.store.borrow().parcels())
    }

    // ------------------------------------------------------------------
    // Setters: mutan y disparan la actualización incremental que toca
    // ------------------------------------------------------------------

    pub fn set_search_term(&self, term: String) {
        *self.search_term.borrow_mut() = term;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    pub fn set_status_filter(&self, status: Option<ParcelStatus>) {
        *self.status_filter.borrow_mut() = status;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    pub fn set_payment_filter(&self, payment: Option<PaymentStatus>) {
        *self.payment_filter.borrow_mut() = payment;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    pub fn set_date_from(&self, raw: String) {
        *self.date_from_raw.borrow_mut() = raw;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    pub fn set_date_to(&self, raw: String) {
        *self.date_to_raw.borrow_mut() = raw;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    /// Alternar la selección de un parcel concreto
    pub fn toggle_selected(&self, id: &str) {
        self.selection.borrow_mut().toggle(id);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SelectionBar));
    }

    /// Toggle del checkbox de cabecera: opera SOLO sobre la vista filtrada
    pub fn toggle_select_all(&self) {
        let visible = self.visible_ids();
        self.selection.borrow_mut().toggle_all(&visible);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SelectionBar));
    }

    pub fn clear_selection(&self) {
        self.selection.borrow_mut().clear();
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SelectionBar));
    }

    /// Abrir/cerrar el menú de acciones de una fila
    pub fn set_active_menu(&self, id: Option<String>) {
        *self.active_menu_id.borrow_mut() = id;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
    }

    /// Feedback transitorio de copia (id del botón marcado, o None)
    pub fn set_copied(&self, key: Option<String>) {
        *self.copied_id.borrow_mut() = key;
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::CopyFeedback));
    }

    /// Eliminar un parcel de la colección (acción Delete del menú de fila).
    /// La selección se poda para no retener ids inexistentes.
    pub fn remove_parcel(&self, id: &str) -> Result<(), String> {
        {
            let mut store = self.store.borrow_mut();
            store.remove(id)?;
            self.selection.borrow_mut().remove(id);
            *self.active_menu_id.borrow_mut() = None;
        } // Borrows liberados antes de re-renderizar
        log::info!("🗑️ Parcel {} eliminado", id);
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::ParcelTable));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::StatsCards));
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::SelectionBar));
        Ok(())
    }
}
