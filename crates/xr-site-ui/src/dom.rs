use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen::closure::Closure;
use web_sys::{
  Document,
  Element,
  EventTarget,
  HtmlInputElement,
  HtmlSelectElement,
  Window
};
use xr_site_core::config::SiteConfig;
use xr_site_core::dom::{
  Dom,
  DomEvent,
  Handler,
  ScrollSources,
  Target
};

#[derive(Debug, Clone)]
struct Selectors {
  header:           String,
  nav_toggle:       String,
  nav:              String,
  group_filter:     String,
  date_filter:      String,
  marker_attribute: String
}

/// [`Dom`] over the live page. Elements are looked up on every call so
/// markup swapped in later (embeds) is still found.
pub struct BrowserDom {
  window:    Window,
  document:  Document,
  selectors: Selectors
}

impl BrowserDom {
  pub fn new(
    window: Window,
    document: Document,
    cfg: &SiteConfig
  ) -> Self {
    Self {
      window,
      document,
      selectors: Selectors {
        header:           cfg
          .header
          .selector
          .clone(),
        nav_toggle:       cfg
          .navigation
          .toggle_selector
          .clone(),
        nav:              cfg
          .navigation
          .nav_selector
          .clone(),
        group_filter:     cfg
          .filter
          .group_selector
          .clone(),
        date_filter:      cfg
          .filter
          .date_selector
          .clone(),
        marker_attribute: cfg
          .page
          .marker_attribute
          .clone()
      }
    }
  }

  fn element(
    &self,
    target: Target
  ) -> Option<Element> {
    let selector = match target {
      | Target::Window => return None,
      | Target::Body => {
        return self
          .document
          .body()
          .map(Element::from);
      }
      | Target::Header => {
        &self.selectors.header
      }
      | Target::NavToggle => {
        &self.selectors.nav_toggle
      }
      | Target::Nav => &self.selectors.nav,
      | Target::GroupFilter => {
        &self.selectors.group_filter
      }
      | Target::DateFilter => {
        &self.selectors.date_filter
      }
    };

    match self
      .document
      .query_selector(selector)
    {
      | Ok(found) => found,
      | Err(error) => {
        tracing::warn!(
          selector = %selector,
          ?error,
          "invalid selector"
        );
        None
      }
    }
  }

  fn event_target(
    &self,
    target: Target
  ) -> Option<EventTarget> {
    match target {
      | Target::Window => Some(
        self.window.clone().into()
      ),
      | _ => self
        .element(target)
        .map(EventTarget::from)
    }
  }

  fn body_style(
    &self
  ) -> Option<web_sys::CssStyleDeclaration>
  {
    self
      .document
      .body()
      .map(|body| body.style())
  }
}

/// DOM calls reject e.g. class names containing whitespace, which can come
/// in through `data-xr-*` overrides.
fn warn_on_error<T>(
  result: Result<T, JsValue>,
  operation: &str,
  name: &str
) {
  if let Err(error) = result {
    tracing::warn!(
      operation,
      name,
      ?error,
      "dom update failed"
    );
  }
}

impl Dom for BrowserDom {
  fn add_class(
    &self,
    target: Target,
    class: &str
  ) {
    if let Some(element) =
      self.element(target)
    {
      warn_on_error(
        element.class_list().add_1(class),
        "add class",
        class
      );
    }
  }

  fn remove_class(
    &self,
    target: Target,
    class: &str
  ) {
    if let Some(element) =
      self.element(target)
    {
      warn_on_error(
        element.class_list().remove_1(class),
        "remove class",
        class
      );
    }
  }

  fn toggle_class(
    &self,
    target: Target,
    class: &str
  ) {
    if let Some(element) =
      self.element(target)
    {
      warn_on_error(
        element.class_list().toggle(class),
        "toggle class",
        class
      );
    }
  }

  fn has_class(
    &self,
    target: Target,
    class: &str
  ) -> bool {
    self.element(target).is_some_and(
      |element| {
        element
          .class_list()
          .contains(class)
      }
    )
  }

  fn scroll_sources(
    &self
  ) -> ScrollSources {
    ScrollSources {
      document_element: self
        .document
        .document_element()
        .map(|root| {
          f64::from(root.scroll_top())
        }),
      body:             self
        .document
        .body()
        .map(|body| {
          f64::from(body.scroll_top())
        }),
      window:           self
        .window
        .page_y_offset()
        .ok()
    }
  }

  fn pin_body(&self, offset: u32) {
    if let Some(style) = self.body_style() {
      let top = format!("-{offset}px");
      for (property, value) in [
        ("position", "fixed"),
        ("top", top.as_str()),
        ("width", "100%")
      ] {
        warn_on_error(
          style.set_property(property, value),
          "set style",
          property
        );
      }
    }
  }

  fn unpin_body(&self) {
    if let Some(style) = self.body_style() {
      for property in
        ["position", "top", "width"]
      {
        warn_on_error(
          style.remove_property(property),
          "remove style",
          property
        );
      }
    }
  }

  fn scroll_to(&self, offset: u32) {
    self.window.scroll_to_with_x_and_y(
      0.0,
      f64::from(offset)
    );
  }

  fn control_value(
    &self,
    target: Target
  ) -> Option<String> {
    let element = self.element(target)?;
    if let Some(select) =
      element.dyn_ref::<HtmlSelectElement>()
    {
      return Some(select.value());
    }
    if let Some(input) =
      element.dyn_ref::<HtmlInputElement>()
    {
      return Some(input.value());
    }
    tracing::warn!(
      ?target,
      "filter element is not a form \
       control"
    );
    None
  }

  fn navigate(&self, url: &str) {
    if let Err(error) =
      self.window.location().set_href(url)
    {
      tracing::warn!(
        url,
        ?error,
        "navigation failed"
      );
    }
  }

  fn page_marker(
    &self
  ) -> Option<String> {
    self.document.body().and_then(
      |body| {
        body.get_attribute(
          &self.selectors.marker_attribute
        )
      }
    )
  }

  fn on(
    &self,
    target: Target,
    event: DomEvent,
    handler: Handler
  ) -> bool {
    let Some(event_target) =
      self.event_target(target)
    else {
      return false;
    };

    let mut handler = handler;
    let callback =
      Closure::wrap(Box::new(
        move |_event: web_sys::Event| {
          handler()
        }
      )
        as Box<dyn FnMut(web_sys::Event)>);

    let added = event_target
      .add_event_listener_with_callback(
        event.name(),
        callback.as_ref().unchecked_ref()
      );
    // listeners live as long as the page
    callback.forget();

    match added {
      | Ok(()) => true,
      | Err(error) => {
        tracing::warn!(
          ?target,
          event = event.name(),
          ?error,
          "failed to add listener"
        );
        false
      }
    }
  }
}
