use std::rc::Rc;

use crate::config::SiteConfig;
use crate::context::{
  SharedUiContext,
  UiContext
};
use crate::dom::Dom;
use crate::filter::{
  install_events_filter,
  install_groups_filter
};
use crate::header::install_header;
use crate::nav::install_nav_toggle;

/// The DOM-only controllers of a page, sharing one [`UiContext`].
pub struct SiteControllers<D: Dom> {
  dom: Rc<D>,
  ctx: SharedUiContext,
  cfg: SiteConfig
}

impl<D> SiteControllers<D>
where
  D: Dom + 'static
{
  pub fn new(
    dom: Rc<D>,
    cfg: SiteConfig
  ) -> Self {
    Self {
      dom,
      ctx: UiContext::shared(),
      cfg
    }
  }

  pub fn dom(&self) -> &Rc<D> {
    &self.dom
  }

  pub fn context(
    &self
  ) -> &SharedUiContext {
    &self.ctx
  }

  pub fn config(&self) -> &SiteConfig {
    &self.cfg
  }

  /// Header appearance plus the navigation toggle.
  pub fn header(&self) {
    install_header(
      &self.dom,
      &self.cfg.header
    );
    install_nav_toggle(
      &self.dom,
      &self.ctx,
      &self.cfg.navigation
    );
  }

  pub fn events(&self) -> usize {
    install_events_filter(
      &self.dom,
      &self.cfg.filter
    )
  }

  pub fn groups(&self) -> bool {
    install_groups_filter(&self.dom)
  }
}
