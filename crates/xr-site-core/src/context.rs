use std::cell::RefCell;
use std::rc::Rc;

/// Page-lifetime UI state. One instance per page, handed to the
/// controllers that need it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct UiContext {
  /// Whether the navigation overlay is open.
  pub modal_open:   bool,
  /// Offset captured when the overlay opened; `Some` only while
  /// `modal_open` is true.
  pub scroll_cache: Option<u32>
}

pub type SharedUiContext =
  Rc<RefCell<UiContext>>;

impl UiContext {
  pub fn shared() -> SharedUiContext {
    Rc::new(RefCell::new(
      UiContext::default()
    ))
  }
}
