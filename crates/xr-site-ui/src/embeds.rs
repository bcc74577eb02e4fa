use gloo::net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
  Document,
  Element,
  RequestCredentials
};
use xr_site_core::config::EmbedConfig;
use xr_site_core::embed::{
  EmbedResponse,
  embed_url,
  parse_embed_response
};

/// Wires every "load embed" button to fetch its wrapper's HTML on click.
#[tracing::instrument(skip_all)]
pub fn init_embeds(
  document: &Document,
  cfg: &EmbedConfig
) -> usize {
  let buttons = match document
    .query_selector_all(&cfg.button_selector)
  {
    | Ok(list) => list,
    | Err(error) => {
      tracing::warn!(
        selector = %cfg.button_selector,
        ?error,
        "invalid embed button selector"
      );
      return 0;
    }
  };

  let mut bound = 0;
  for index in 0..buttons.length() {
    let Some(button) = buttons
      .item(index)
      .and_then(|node| {
        node.dyn_into::<Element>().ok()
      })
    else {
      continue;
    };

    let Some(wrapper) = button
      .closest(&cfg.wrapper_selector)
      .ok()
      .flatten()
    else {
      continue;
    };

    let Some(url) = embed_url(
      wrapper
        .get_attribute(&cfg.url_attribute)
    ) else {
      continue;
    };

    let handler =
      Closure::wrap(Box::new(
        move |event: web_sys::Event| {
          event.prevent_default();
          event.stop_propagation();
          let wrapper = wrapper.clone();
          let url = url.clone();
          wasm_bindgen_futures::spawn_local(
            async move {
              load_embed(&wrapper, &url)
                .await;
            }
          );
        }
      )
        as Box<dyn FnMut(web_sys::Event)>);

    if button
      .add_event_listener_with_callback(
        "click",
        handler.as_ref().unchecked_ref()
      )
      .is_ok()
    {
      bound += 1;
    }
    handler.forget();
  }

  tracing::debug!(bound, "embed buttons");
  bound
}

async fn load_embed(
  wrapper: &Element,
  url: &str
) {
  match fetch_embed(url).await {
    | Ok(response) => {
      if let Some(html) =
        response.html_to_apply()
      {
        wrapper.set_inner_html(html);
      } else {
        tracing::debug!(
          url,
          "embed not available"
        );
      }
    }
    | Err(error) => {
      tracing::warn!(
        url,
        error = %error,
        "embed fetch failed"
      );
    }
  }
}

async fn fetch_embed(
  url: &str
) -> Result<EmbedResponse, String> {
  let response = Request::get(url)
    .credentials(RequestCredentials::Omit)
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  let body =
    response.text().await.map_err(|e| {
      format!("read error: {e}")
    })?;

  parse_embed_response(&body)
    .map_err(|e| format!("{e:#}"))
}
