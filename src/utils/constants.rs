/// Versión mostrada en el pie del dashboard.
/// Configurable en tiempo de compilación vía APP_VERSION.
pub const APP_VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    None => "2.5.0",
};
