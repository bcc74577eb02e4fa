use std::str::FromStr;

use tracing::{
  debug,
  info
};

/// Page templates that carry client-side behaviour beyond the shared
/// header; everything else is `Other`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PageType {
  EventList,
  EventGroup,
  Groups,
  Other
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PageController {
  Events,
  Groups
}

impl FromStr for PageType {
  type Err = std::convert::Infallible;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Ok(match s {
      | "eventlistpage" => {
        PageType::EventList
      }
      | "eventgrouppage" => {
        PageType::EventGroup
      }
      | "groups" => PageType::Groups,
      | _ => PageType::Other
    })
  }
}

impl PageType {
  pub fn from_marker(
    marker: Option<&str>
  ) -> Self {
    match marker {
      | Some(value) => value
        .parse()
        .unwrap_or(PageType::Other),
      | None => PageType::Other
    }
  }

  pub fn controller(
    self
  ) -> Option<PageController> {
    match self {
      | PageType::EventList
      | PageType::EventGroup => {
        Some(PageController::Events)
      }
      | PageType::Groups => {
        Some(PageController::Groups)
      }
      | PageType::Other => None
    }
  }
}

/// What the entry composer starts. The browser binary and the tests each
/// provide their own.
pub trait PageInitializers {
  fn header(&mut self);
  fn datetime_widget(&mut self);
  fn embeds(&mut self);
  fn events(&mut self);
  fn groups(&mut self);
}

/// Runs once per page: the shared initializers, then the controller for
/// the page type, if any.
#[tracing::instrument(skip(init))]
pub fn compose(
  marker: Option<&str>,
  init: &mut impl PageInitializers
) -> PageType {
  let page = PageType::from_marker(marker);
  info!(?page, "initializing page");

  init.header();
  init.datetime_widget();
  init.embeds();

  match page.controller() {
    | Some(PageController::Events) => {
      init.events()
    }
    | Some(PageController::Groups) => {
      init.groups()
    }
    | None => {
      debug!("no page controller")
    }
  }

  page
}
