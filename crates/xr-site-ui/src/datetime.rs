use wasm_bindgen::prelude::*;
use xr_site_core::datetime::PickerBinding;

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(
    catch,
    js_namespace = window,
    js_name = flatpickr
  )]
  fn flatpickr(
    selector: &str,
    options: JsValue
  ) -> Result<JsValue, JsValue>;
}

/// Binds flatpickr to every configured input. Pages that don't load the
/// widget script just log and carry on.
#[tracing::instrument(skip_all)]
pub fn init_datetime_widget(
  pickers: &[PickerBinding]
) -> usize {
  let mut bound = 0;

  for picker in pickers {
    let options =
      match serde_wasm_bindgen::to_value(
        &picker.options
      ) {
        | Ok(value) => value,
        | Err(error) => {
          tracing::warn!(
            selector = %picker.selector,
            %error,
            "failed encoding picker options"
          );
          continue;
        }
      };

    match flatpickr(
      &picker.selector,
      options
    ) {
      | Ok(_) => bound += 1,
      | Err(error) => {
        tracing::warn!(
          selector = %picker.selector,
          ?error,
          "flatpickr unavailable"
        );
      }
    }
  }

  tracing::debug!(bound, "datetime widgets");
  bound
}
