use std::rc::Rc;

use web_sys::{
  Document,
  HtmlElement
};
use xr_site_core::config::SiteConfig;
use xr_site_core::dom::Dom;
use xr_site_core::page::{
  PageInitializers,
  compose
};
use xr_site_core::site::SiteControllers;

use crate::datetime::init_datetime_widget;
use crate::dom::BrowserDom;
use crate::embeds::init_embeds;

const OVERRIDE_ATTRIBUTE_PREFIX: &str =
  "data-xr-";

struct BrowserSite {
  controllers: SiteControllers<BrowserDom>,
  document:    Document
}

impl PageInitializers for BrowserSite {
  fn header(&mut self) {
    self.controllers.header();
  }

  fn datetime_widget(&mut self) {
    init_datetime_widget(
      &self.controllers.config().datetime.pickers
    );
  }

  fn embeds(&mut self) {
    init_embeds(
      &self.document,
      &self.controllers.config().embeds
    );
  }

  fn events(&mut self) {
    let bound = self.controllers.events();
    tracing::debug!(
      bound,
      "events filter controls"
    );
  }

  fn groups(&mut self) {
    let bound = self.controllers.groups();
    tracing::debug!(
      bound,
      "groups filter control"
    );
  }
}

/// Entry point once the document structure is available.
pub fn start() {
  let Some(window) = web_sys::window()
  else {
    return;
  };
  let Some(document) = window.document()
  else {
    return;
  };

  let mut cfg = SiteConfig::bundled();
  if let Some(body) = document.body() {
    cfg.apply_overrides(body_overrides(
      &body
    ));
  }

  let dom = Rc::new(BrowserDom::new(
    window,
    document.clone(),
    &cfg
  ));
  let marker = dom.page_marker();

  let mut site = BrowserSite {
    controllers: SiteControllers::new(
      dom, cfg
    ),
    document
  };
  let page =
    compose(marker.as_deref(), &mut site);
  tracing::info!(?page, "page ready");
}

/// `data-xr-header.scroll-threshold="10"` becomes
/// `("header.scroll-threshold", "10")`.
fn body_overrides(
  body: &HtmlElement
) -> Vec<(String, String)> {
  let names: js_sys::Array =
    body.get_attribute_names();
  names
    .iter()
    .filter_map(|name| name.as_string())
    .filter_map(|name| {
      let key = name
        .strip_prefix(
          OVERRIDE_ATTRIBUTE_PREFIX
        )?
        .to_string();
      let value =
        body.get_attribute(&name)?;
      Some((key, value))
    })
    .collect()
}
