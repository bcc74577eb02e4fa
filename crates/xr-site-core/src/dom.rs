//! Capability interface between the controllers and whatever DOM they run
//! against: `web-sys` in the browser, [`crate::fake::FakeDom`] in tests.

/// The elements the controllers know about. Each implementation resolves a
/// role to a concrete node (usually through [`crate::config::SiteConfig`]
/// selectors); a role that resolves to nothing makes every operation on it
/// a no-op.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum Target {
  Window,
  Body,
  Header,
  NavToggle,
  Nav,
  GroupFilter,
  DateFilter
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum DomEvent {
  Scroll,
  Click,
  Change
}

impl DomEvent {
  pub fn name(self) -> &'static str {
    match self {
      | DomEvent::Scroll => "scroll",
      | DomEvent::Click => "click",
      | DomEvent::Change => "change"
    }
  }
}

/// Raw vertical offsets as reported by the browser. Engines disagree on
/// which one is populated, so all of them are carried.
#[derive(
  Debug, Clone, Copy, Default, PartialEq,
)]
pub struct ScrollSources {
  pub document_element: Option<f64>,
  pub body:             Option<f64>,
  pub window:           Option<f64>
}

pub type Handler = Box<dyn FnMut()>;

pub trait Dom {
  fn add_class(
    &self,
    target: Target,
    class: &str
  );

  fn remove_class(
    &self,
    target: Target,
    class: &str
  );

  fn toggle_class(
    &self,
    target: Target,
    class: &str
  );

  fn has_class(
    &self,
    target: Target,
    class: &str
  ) -> bool;

  fn scroll_sources(
    &self
  ) -> ScrollSources;

  /// Fixes the body in place so the page appears frozen at `offset`.
  fn pin_body(&self, offset: u32);

  fn unpin_body(&self);

  fn scroll_to(&self, offset: u32);

  /// Live value of a form control, `None` when the control is missing.
  fn control_value(
    &self,
    target: Target
  ) -> Option<String>;

  /// Full page navigation (plain GET).
  fn navigate(&self, url: &str);

  fn page_marker(
    &self
  ) -> Option<String>;

  /// Binds `handler` for the lifetime of the page. Returns `false` when the
  /// target is absent and nothing was bound.
  fn on(
    &self,
    target: Target,
    event: DomEvent,
    handler: Handler
  ) -> bool;
}
