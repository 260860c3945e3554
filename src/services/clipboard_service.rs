// ============================================================================
// CLIPBOARD SERVICE - Copia best-effort al portapapeles
// ============================================================================
// El resultado no se muestra al usuario más allá del feedback transitorio
// del botón; un fallo (p.ej. permiso denegado) se ignora en silencio.
// ============================================================================

use wasm_bindgen_futures::JsFuture;

/// Escribir texto al portapapeles, sin propagar el resultado
pub fn copy_text(text: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}
