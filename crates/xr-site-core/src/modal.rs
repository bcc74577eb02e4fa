use tracing::{
  debug,
  warn
};

use crate::config::NavigationConfig;
use crate::context::UiContext;
use crate::dom::{
  Dom,
  Target
};
use crate::scroll::current_scroll_offset;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum LockState {
  Unlocked,
  Locked
}

impl UiContext {
  pub fn lock_state(&self) -> LockState {
    if self.modal_open {
      LockState::Locked
    } else {
      LockState::Unlocked
    }
  }
}

/// Flips the page between locked and unlocked and returns the state it
/// entered.
pub fn toggle(
  ctx: &mut UiContext,
  dom: &impl Dom,
  cfg: &NavigationConfig
) -> LockState {
  match ctx.lock_state() {
    | LockState::Unlocked => {
      lock(ctx, dom, cfg)
    }
    | LockState::Locked => {
      unlock(ctx, dom, cfg)
    }
  }
}

fn lock(
  ctx: &mut UiContext,
  dom: &impl Dom,
  cfg: &NavigationConfig
) -> LockState {
  let offset = current_scroll_offset(dom);
  ctx.scroll_cache = Some(offset);
  dom.pin_body(offset);
  dom.add_class(
    Target::Body,
    &cfg.modal_open_class
  );
  ctx.modal_open = true;
  debug!(offset, "page locked");
  LockState::Locked
}

fn unlock(
  ctx: &mut UiContext,
  dom: &impl Dom,
  cfg: &NavigationConfig
) -> LockState {
  dom.remove_class(
    Target::Body,
    &cfg.modal_open_class
  );
  dom.unpin_body();

  let offset = ctx
    .scroll_cache
    .take()
    .unwrap_or_else(|| {
      warn!(
        "no scroll offset cached; \
         restoring to top"
      );
      0
    });
  dom.scroll_to(offset);
  ctx.modal_open = false;
  debug!(offset, "page unlocked");
  LockState::Unlocked
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fake::FakeDom;

  #[test]
  fn lock_pins_at_current_offset() {
    let dom = FakeDom::new();
    let cfg = NavigationConfig::default();
    let mut ctx = UiContext::default();
    dom.set_scroll(420.0);

    let state = toggle(&mut ctx, &dom, &cfg);

    assert_eq!(state, LockState::Locked);
    assert!(ctx.modal_open);
    assert_eq!(ctx.scroll_cache, Some(420));
    assert_eq!(dom.pinned_offset(), Some(420));
    assert!(
      dom.has_class(Target::Body, "modal-open")
    );
  }

  #[test]
  fn unlock_restores_and_clears() {
    let dom = FakeDom::new();
    let cfg = NavigationConfig::default();
    let mut ctx = UiContext::default();
    dom.set_scroll(420.0);

    toggle(&mut ctx, &dom, &cfg);
    dom.set_scroll(0.0);
    let state = toggle(&mut ctx, &dom, &cfg);

    assert_eq!(state, LockState::Unlocked);
    assert_eq!(ctx, UiContext::default());
    assert_eq!(dom.pinned_offset(), None);
    assert_eq!(current_scroll_offset(&dom), 420);
    assert!(
      !dom.has_class(Target::Body, "modal-open")
    );
  }

  #[test]
  fn unlock_without_cache_goes_to_top() {
    let dom = FakeDom::new();
    let cfg = NavigationConfig::default();
    let mut ctx = UiContext {
      modal_open:   true,
      scroll_cache: None
    };
    dom.set_scroll(90.0);

    toggle(&mut ctx, &dom, &cfg);

    assert_eq!(current_scroll_offset(&dom), 0);
    assert!(!ctx.modal_open);
  }
}
