use leptos::logging::log;
use std::panic;

/// Installs `console_error_panic_hook` and adds a hint when the panic comes
/// from a signal touched after its view was torn down.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive value was used after its view unmounted.");
            log!("[PANIC] Fetch completions must go through FetchGuard and with_owner_safe.");
        }
    }));
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
