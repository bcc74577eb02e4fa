use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};

/// JSON body returned by the embed endpoint (`/embeds/<id>/html/`).
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct EmbedResponse {
  #[serde(default)]
  pub success:    bool,
  #[serde(default)]
  pub embed_html: Option<String>
}

impl EmbedResponse {
  /// Markup to swap into the wrapper, only for successful responses.
  pub fn html_to_apply(
    &self
  ) -> Option<&str> {
    if self.success {
      self.embed_html.as_deref()
    } else {
      None
    }
  }
}

pub fn parse_embed_response(
  body: &str
) -> anyhow::Result<EmbedResponse> {
  serde_json::from_str(body).context(
    "failed to decode embed response"
  )
}

/// `None` for a missing or blank URL: such buttons get no handler.
pub fn embed_url(
  attribute: Option<String>
) -> Option<String> {
  attribute
    .map(|url| url.trim().to_string())
    .filter(|url| !url.is_empty())
}
