//! Browser entry point: initializes logging and mounts the app.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(portfolio::app::App);
    }
}
