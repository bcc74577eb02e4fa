//! Bindings for the flatpickr date/time widget. The browser hands each
//! binding's options to `flatpickr(selector, options)` as-is, so the field
//! names follow flatpickr's own option names.

use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct PickerBinding {
  pub selector: String,
  pub options:  PickerOptions
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct PickerOptions {
  #[serde(rename = "enableTime")]
  pub enable_time: bool,
  #[serde(rename = "dateFormat")]
  pub date_format: String,
  #[serde(default)]
  pub time_24hr:   bool,
  #[serde(default = "default_locale")]
  pub locale:      String
}

fn default_locale() -> String {
  "de".to_string()
}

pub fn default_pickers()
-> Vec<PickerBinding> {
  vec![
    PickerBinding {
      selector: ".form-group--datetimeinput \
                 input"
        .to_string(),
      options:  PickerOptions {
        enable_time: true,
        date_format: "d.m.Y H:i"
          .to_string(),
        time_24hr:   true,
        locale:      default_locale()
      }
    },
    PickerBinding {
      selector: ".form-group--dateinput \
                 input"
        .to_string(),
      options:  PickerOptions {
        enable_time: false,
        date_format: "d.m.Y".to_string(),
        time_24hr:   false,
        locale:      default_locale()
      }
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn options_use_flatpickr_names() {
    let pickers = default_pickers();
    let json = serde_json::to_value(
      &pickers[0].options
    )
    .expect("serialize options");

    assert_eq!(json["enableTime"], true);
    assert_eq!(
      json["dateFormat"],
      "d.m.Y H:i"
    );
    assert_eq!(json["time_24hr"], true);
    assert_eq!(json["locale"], "de");
  }

  #[test]
  fn date_only_picker_has_no_time() {
    let pickers = default_pickers();
    assert_eq!(
      pickers[1].selector,
      ".form-group--dateinput input"
    );
    assert!(!pickers[1].options.enable_time);
    assert_eq!(
      pickers[1].options.date_format,
      "d.m.Y"
    );
  }
}
