mod boot;
mod datetime;
mod dom;
mod embeds;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting site frontend"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    tracing::error!(
      "no document; nothing to do"
    );
    return;
  };

  if document.ready_state() == "loading" {
    let on_ready =
      Closure::once_into_js(|| {
        boot::start()
      });
    if let Err(error) = document
      .add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.unchecked_ref()
      )
    {
      tracing::error!(
        ?error,
        "failed to wait for \
         DOMContentLoaded"
      );
    }
  } else {
    boot::start();
  }
}
