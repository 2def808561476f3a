pub mod app;
pub mod components;
pub mod models;
pub mod motion;
pub mod pages;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export for convenience
pub use app::App;

/// Browser entry point: logging, panic hook, then the page itself.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("mounting landing page");
    leptos::mount::mount_to_body(App);
}
