use anyhow::{
  Context,
  anyhow
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::datetime::{
  PickerBinding,
  default_pickers
};
use crate::filter::DateEncoding;

/// Defaults shipped with the crate; `SiteConfig::default()` mirrors it.
pub const BUNDLED_CONFIG: &str =
  include_str!("../site.toml");

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct SiteConfig {
  pub header:     HeaderConfig,
  pub navigation: NavigationConfig,
  pub filter:     FilterConfig,
  pub page:       PageConfig,
  pub embeds:     EmbedConfig,
  pub datetime:   DatetimeConfig
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct HeaderConfig {
  pub selector:         String,
  pub scrolled_class:   String,
  /// Offsets strictly above this mark the header as scrolled.
  pub scroll_threshold: u32
}

impl Default for HeaderConfig {
  fn default() -> Self {
    Self {
      selector:         "#header"
        .to_string(),
      scrolled_class:   "is-scrolled"
        .to_string(),
      scroll_threshold: 5
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct NavigationConfig {
  pub toggle_selector:  String,
  pub nav_selector:     String,
  pub open_class:       String,
  pub modal_open_class: String
}

impl Default for NavigationConfig {
  fn default() -> Self {
    Self {
      toggle_selector:  "#nav-toggle"
        .to_string(),
      nav_selector:     "#nav"
        .to_string(),
      open_class:       "open"
        .to_string(),
      modal_open_class: "modal-open"
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct FilterConfig {
  pub group_selector: String,
  pub date_selector:  String,
  pub date_param:     String,
  pub date_encoding:  DateEncoding
}

impl Default for FilterConfig {
  fn default() -> Self {
    Self {
      group_selector: "#filter-by-groups"
        .to_string(),
      date_selector:  "#filter-by-date"
        .to_string(),
      date_param:     "d".to_string(),
      date_encoding:
        DateEncoding::default()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct PageConfig {
  /// Body attribute carrying the page-type marker.
  pub marker_attribute: String
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      marker_attribute: "data-page-type"
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct EmbedConfig {
  pub button_selector:  String,
  pub wrapper_selector: String,
  pub url_attribute:    String
}

impl Default for EmbedConfig {
  fn default() -> Self {
    Self {
      button_selector:  ".embed-load-button"
        .to_string(),
      wrapper_selector: ".responsive-object"
        .to_string(),
      url_attribute:    "data-embed-url"
        .to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct DatetimeConfig {
  pub pickers: Vec<PickerBinding>
}

impl Default for DatetimeConfig {
  fn default() -> Self {
    Self {
      pickers: default_pickers()
    }
  }
}

impl SiteConfig {
  #[tracing::instrument(skip(text))]
  pub fn load_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: SiteConfig =
      toml::from_str(text).context(
        "failed to parse site config"
      )?;
    debug!(
      pickers = cfg.datetime.pickers.len(),
      "loaded site config"
    );
    Ok(cfg)
  }

  /// The bundled `site.toml`, or the built-in defaults if it cannot be
  /// parsed.
  pub fn bundled() -> Self {
    Self::bundled_from(BUNDLED_CONFIG)
  }

  fn bundled_from(text: &str) -> Self {
    Self::load_str(text).unwrap_or_else(
      |error| {
        warn!(
          error = %format!("{error:#}"),
          "bundled config unusable; using \
           defaults"
        );
        SiteConfig::default()
      }
    )
  }

  /// Applies `key=value` overrides, skipping (and logging) the ones that
  /// cannot be applied.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, value) in overrides {
      match self
        .apply_override(&key, &value)
      {
        | Ok(()) => {
          debug!(key = %key, value = %value, "applied override");
        }
        | Err(error) => {
          warn!(key = %key, %error, "ignoring config override");
        }
      }
    }
  }

  /// Accepts dotted keys, optionally prefixed with `xr.`; dashes and
  /// underscores are interchangeable.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let key = key
      .trim()
      .strip_prefix("xr.")
      .unwrap_or(key.trim())
      .replace('-', "_");
    let value = value.trim().to_string();

    match key.as_str() {
      | "header.selector" => {
        self.header.selector = value
      }
      | "header.scrolled_class" => {
        self.header.scrolled_class = value
      }
      | "header.scroll_threshold" => {
        self.header.scroll_threshold =
          value.parse().with_context(
            || {
              format!(
                "expected a non-negative \
                 integer, got: {value}"
              )
            }
          )?
      }
      | "navigation.toggle_selector" => {
        self.navigation.toggle_selector =
          value
      }
      | "navigation.nav_selector" => {
        self.navigation.nav_selector =
          value
      }
      | "navigation.open_class" => {
        self.navigation.open_class = value
      }
      | "navigation.modal_open_class" => {
        self.navigation.modal_open_class =
          value
      }
      | "filter.group_selector" => {
        self.filter.group_selector = value
      }
      | "filter.date_selector" => {
        self.filter.date_selector = value
      }
      | "filter.date_param" => {
        if value.is_empty() {
          return Err(anyhow!(
            "date parameter name cannot \
             be empty"
          ));
        }
        self.filter.date_param = value
      }
      | "filter.encode_date" => {
        self.filter.date_encoding =
          if parse_bool(&value)? {
            DateEncoding::Percent
          } else {
            DateEncoding::Raw
          }
      }
      | "page.marker_attribute" => {
        self.page.marker_attribute = value
      }
      | "embeds.button_selector" => {
        self.embeds.button_selector = value
      }
      | "embeds.wrapper_selector" => {
        self.embeds.wrapper_selector =
          value
      }
      | "embeds.url_attribute" => {
        self.embeds.url_attribute = value
      }
      | "datetime.locale" => {
        for picker in
          &mut self.datetime.pickers
        {
          picker.options.locale =
            value.clone();
        }
      }
      | other => {
        return Err(anyhow!(
          "unknown config key: {other}"
        ));
      }
    }

    Ok(())
  }
}

fn parse_bool(
  s: &str
) -> anyhow::Result<bool> {
  match s
    .trim()
    .to_ascii_lowercase()
    .as_str()
  {
    | "1" | "y" | "yes" | "on" | "true" => {
      Ok(true)
    }
    | "0" | "n" | "no" | "off"
    | "false" => Ok(false),
    | other => Err(anyhow!(
      "expected a boolean, got: {other}"
    ))
  }
}
