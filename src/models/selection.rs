// ============================================================================
// SELECTION - Conjunto de parcels seleccionados (por id)
// ============================================================================
// La selección vive aparte del filtro, pero el "select all" opera SOLO
// sobre la vista filtrada actual: si la vista ya está cubierta, limpia
// toda la selección; si no, la REEMPLAZA (no fusiona) por los ids visibles.
// ============================================================================

use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Alternar la selección de un parcel concreto
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Quitar un id (p.ej. cuando el parcel se elimina de la colección)
    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Estado del checkbox de cabecera: cobertura completa de la vista
    /// filtrada ACTUAL. Una vista vacía nunca cuenta como cubierta.
    pub fn covers_all(&self, visible: &[String]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    /// Toggle del checkbox de cabecera sobre la vista filtrada actual
    pub fn toggle_all(&mut self, visible: &[String]) {
        if self.covers_all(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().cloned().collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_one() {
        let mut sel = Selection::new();
        sel.toggle("TRK89234");
        assert!(sel.contains("TRK89234"));
        assert_eq!(sel.len(), 1);
        sel.toggle("TRK89234");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_selects_exactly_the_visible_view() {
        let mut sel = Selection::new();
        let visible = ids(&["TRK89234", "TRK89235"]);
        sel.toggle_all(&visible);
        assert!(sel.covers_all(&visible));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_toggle_all_twice_is_idempotent_pair() {
        let mut sel = Selection::new();
        let visible = ids(&["TRK89234", "TRK89235", "TRK89236"]);
        sel.toggle_all(&visible);
        sel.toggle_all(&visible);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_all_replaces_instead_of_merging() {
        let mut sel = Selection::new();
        sel.toggle("TRK99999"); // seleccionado bajo un filtro anterior
        let visible = ids(&["TRK89234", "TRK89235"]);
        sel.toggle_all(&visible);
        assert!(!sel.contains("TRK99999"));
        assert_eq!(sel.len(), 2);
        assert!(sel.covers_all(&visible));
    }

    #[test]
    fn test_covered_view_clears_everything() {
        let mut sel = Selection::new();
        sel.toggle("TRK89234");
        sel.toggle("TRK89235");
        sel.toggle("TRK89236");
        // La vista filtrada se redujo a dos miembros, ambos ya seleccionados:
        // el toggle limpia la selección entera, incluido el id fuera de vista.
        let visible = ids(&["TRK89234", "TRK89235"]);
        assert!(sel.covers_all(&visible));
        sel.toggle_all(&visible);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_filter_change_does_not_deselect() {
        let mut sel = Selection::new();
        let before = ids(&["TRK89234", "TRK89235"]);
        sel.toggle_all(&before);
        // Cambia el filtro: la selección no se toca, solo el checkbox
        // de cabecera refleja la cobertura de la vista nueva.
        let after = ids(&["TRK89235", "TRK89236"]);
        assert!(sel.contains("TRK89234"));
        assert!(sel.contains("TRK89235"));
        assert!(!sel.covers_all(&after));
    }

    #[test]
    fn test_empty_view_is_never_covered() {
        let mut sel = Selection::new();
        assert!(!sel.covers_all(&[]));
        sel.toggle("TRK89234");
        assert!(!sel.covers_all(&[]));
        // Toggle sobre vista vacía selecciona "todos los visibles": nadie
        sel.toggle_all(&[]);
        assert!(sel.is_empty());
    }
}
