use std::rc::Rc;

use tracing::{
  debug,
  trace
};

use crate::config::HeaderConfig;
use crate::dom::{
  Dom,
  DomEvent,
  Target
};
use crate::scroll::current_scroll_offset;

/// Adds the scrolled class to the header when the page is past the
/// threshold, removes it otherwise. Safe to call on every scroll event.
pub fn refresh_header_appearance(
  dom: &impl Dom,
  cfg: &HeaderConfig
) {
  let offset = current_scroll_offset(dom);
  if offset > cfg.scroll_threshold {
    dom.add_class(
      Target::Header,
      &cfg.scrolled_class
    );
  } else {
    dom.remove_class(
      Target::Header,
      &cfg.scrolled_class
    );
  }
  trace!(offset, "header refreshed");
}

/// Sets the initial header state and keeps it in sync with scrolling.
#[tracing::instrument(skip_all)]
pub fn install_header<D>(
  dom: &Rc<D>,
  cfg: &HeaderConfig
) where
  D: Dom + 'static
{
  refresh_header_appearance(
    dom.as_ref(),
    cfg
  );

  let handler_dom = Rc::clone(dom);
  let handler_cfg = cfg.clone();
  let bound = dom.on(
    Target::Window,
    DomEvent::Scroll,
    Box::new(move || {
      refresh_header_appearance(
        handler_dom.as_ref(),
        &handler_cfg
      );
    })
  );
  debug!(bound, "header scroll listener");
}
