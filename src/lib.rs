// ============================================================================
// PARCEL DASHBOARD - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica pura de consulta/filtrado
// - Services: SOLO efectos (descarga CSV, portapapeles)
// - State: State Management con Rc<RefCell>
// - Models: Estructuras de datos + invariantes
// ============================================================================

pub mod models;
pub mod viewmodels;
pub mod services;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::state::app_state::UpdateType;

// Instancia global de la app (un solo hilo en wasm)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Parcel Dashboard - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    register_outside_click_listener()?;
    Ok(())
}

/// Cierre del menú de fila al interactuar fuera de él. Listener global:
/// se registra UNA sola vez en el arranque para no acumularse. Se escucha
/// "click" y no "mousedown": la actualización incremental reemplaza nodos
/// de la tabla, y cerrar el menú en el mousedown perdería el click en curso.
fn register_outside_click_listener() -> Result<(), JsValue> {
    let document = match crate::dom::document() {
        Some(d) => d,
        None => return Ok(()),
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let inside_menu = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".row-menu-wrapper").ok().flatten())
            .is_some();
        if inside_menu {
            return;
        }

        // Leer y soltar el borrow de APP antes de disparar el re-render
        let state = APP.with(|app_cell| {
            app_cell.borrow().as_ref().and_then(|app| {
                let menu_open = app.state().active_menu_id.borrow().is_some();
                menu_open.then(|| app.state().clone())
            })
        });
        if let Some(state) = state {
            state.set_active_menu(None);
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con un tipo específico. Las actualizaciones
/// incrementales caen al re-render completo si su contenedor no existe.
pub fn rerender_app_with_type(update_type: UpdateType) {
    match update_type {
        UpdateType::Incremental(inc_type) => {
            // El borrow se libera antes de decidir el fallback
            let needs_full_render = APP.with(|app_cell| {
                if let Some(app) = &*app_cell.borrow() {
                    match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            let error_str = format!("{:?}", e);
                            if error_str.contains("needs full render") {
                                true
                            } else {
                                log::error!("❌ Error en actualización incremental: {:?}", e);
                                false
                            }
                        }
                    }
                } else {
                    log::warn!("⚠️ App no está inicializada");
                    false
                }
            });

            if needs_full_render {
                rerender_app();
            }
        }
        UpdateType::FullRender => {
            APP.with(|app_cell| {
                if let Some(app) = &mut *app_cell.borrow_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            });
        }
    }
}
