use std::rc::Rc;

use tracing::debug;

use crate::config::NavigationConfig;
use crate::context::SharedUiContext;
use crate::dom::{
  Dom,
  DomEvent,
  Target
};
use crate::modal::{
  self,
  LockState
};

/// Opens or closes the navigation drawer and locks the page to match.
pub fn activate_toggle(
  ctx: &SharedUiContext,
  dom: &impl Dom,
  cfg: &NavigationConfig
) -> LockState {
  dom.toggle_class(
    Target::Nav,
    &cfg.open_class
  );
  modal::toggle(
    &mut ctx.borrow_mut(),
    dom,
    cfg
  )
}

#[tracing::instrument(skip_all)]
pub fn install_nav_toggle<D>(
  dom: &Rc<D>,
  ctx: &SharedUiContext,
  cfg: &NavigationConfig
) -> bool
where
  D: Dom + 'static
{
  let handler_dom = Rc::clone(dom);
  let handler_ctx = Rc::clone(ctx);
  let handler_cfg = cfg.clone();
  let bound = dom.on(
    Target::NavToggle,
    DomEvent::Click,
    Box::new(move || {
      let state = activate_toggle(
        &handler_ctx,
        handler_dom.as_ref(),
        &handler_cfg
      );
      debug!(?state, "navigation toggled");
    })
  );
  if !bound {
    debug!("no navigation toggle on page");
  }
  bound
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::context::UiContext;
  use crate::fake::FakeDom;

  #[test]
  fn click_opens_nav_and_locks() {
    let dom = Rc::new(FakeDom::new());
    let ctx = UiContext::shared();
    assert!(install_nav_toggle(
      &dom,
      &ctx,
      &NavigationConfig::default()
    ));

    dom.fire(
      Target::NavToggle,
      DomEvent::Click
    );
    assert!(dom.has_class(Target::Nav, "open"));
    assert!(ctx.borrow().modal_open);

    dom.fire(
      Target::NavToggle,
      DomEvent::Click
    );
    assert!(!dom.has_class(Target::Nav, "open"));
    assert!(!ctx.borrow().modal_open);
  }

  #[test]
  fn missing_toggle_binds_nothing() {
    let dom = Rc::new(
      FakeDom::new()
        .without(Target::NavToggle)
    );
    let ctx = UiContext::shared();
    assert!(!install_nav_toggle(
      &dom,
      &ctx,
      &NavigationConfig::default()
    ));
    assert_eq!(
      dom.binding_count(
        Target::NavToggle,
        DomEvent::Click
      ),
      0
    );
  }

  proptest! {
    #[test]
    fn flag_tracks_activation_parity(n in 0usize..64) {
      let dom = FakeDom::new();
      let ctx = UiContext::shared();
      let cfg = NavigationConfig::default();
      for _ in 0..n {
        activate_toggle(&ctx, &dom, &cfg);
      }
      prop_assert_eq!(ctx.borrow().modal_open, n % 2 == 1);
      prop_assert_eq!(ctx.borrow().scroll_cache.is_some(), n % 2 == 1);
    }
  }
}
