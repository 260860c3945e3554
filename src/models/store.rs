// ============================================================================
// PARCEL STORE - Colección en memoria con invariante de unicidad de id
// ============================================================================
// Las affordances de alta/edición/borrado del dashboard pasan por aquí:
// es la ÚNICA vía de mutación de la colección. El orden de inserción se
// conserva (el filtro es estable respecto a este orden).
// ============================================================================

use crate::models::Parcel;

#[derive(Clone, Debug, Default)]
pub struct ParcelStore {
    parcels: Vec<Parcel>,
}

impl ParcelStore {
    /// Construir desde el seed inicial, validando la unicidad de ids
    pub fn new(parcels: Vec<Parcel>) -> Result<Self, String> {
        let mut store = Self::default();
        for parcel in parcels {
            store.add(parcel)?;
        }
        Ok(store)
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Parcel> {
        self.parcels.iter().find(|p| p.id == id)
    }

    /// Agregar al final; error si el id ya existe
    pub fn add(&mut self, parcel: Parcel) -> Result<(), String> {
        if self.get(&parcel.id).is_some() {
            return Err(format!("Id de parcel duplicado: {}", parcel.id));
        }
        self.parcels.push(parcel);
        Ok(())
    }

    /// Reemplazar por id conservando la posición. Error si el id no existe
    /// o si el reemplazo renombra el id a uno ya ocupado por otro registro.
    pub fn replace(&mut self, id: &str, parcel: Parcel) -> Result<(), String> {
        let pos = self
            .parcels
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| format!("Parcel no encontrado: {}", id))?;
        if parcel.id != id && self.get(&parcel.id).is_some() {
            return Err(format!("Id de parcel duplicado: {}", parcel.id));
        }
        self.parcels[pos] = parcel;
        Ok(())
    }

    /// Eliminar por id; devuelve el registro eliminado
    pub fn remove(&mut self, id: &str) -> Result<Parcel, String> {
        let pos = self
            .parcels
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| format!("Parcel no encontrado: {}", id))?;
        Ok(self.parcels.remove(pos))
    }
}
