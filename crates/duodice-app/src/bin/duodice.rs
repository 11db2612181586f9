//! Duodice desktop and web application using egui/eframe.

use duodice_app::DuodiceApp;

#[cfg(not(target_arch = "wasm32"))]
const SEED_ENV: &str = "DUODICE_SEED";

/// Reads a fixed seed from the environment, ignoring invalid values.
#[cfg(not(target_arch = "wasm32"))]
fn seed_from_env() -> Option<u64> {
    let value = std::env::var(SEED_ENV).ok()?;
    match value.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {SEED_ENV}={value:?}: {e}");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.duodice";

    better_panic::install();
    env_logger::init();

    let seed = seed_from_env();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((480.0, 640.0))
            .with_min_inner_size((320.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Duodice",
        options,
        Box::new(move |cc| Ok(Box::new(DuodiceApp::new(cc, seed)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Duodice has crashed.\n\n{message}\n\nSee the developer console for details."
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast as _;

    install_panic_alert_hook();

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(DuodiceApp::new(cc, None)))),
            )
            .await;

        if let Err(e) = start_result {
            panic!("Failed to start eframe: {e:?}");
        }
    });
}
