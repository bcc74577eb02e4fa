//! Event-list filtering. Every selection change is a full page load of the
//! filtered URL; nothing is re-rendered client side.

use std::borrow::Cow;
use std::rc::Rc;

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::config::FilterConfig;
use crate::dom::{
  Dom,
  DomEvent,
  Target
};

/// How the date value is written into the query string.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DateEncoding {
  #[default]
  Percent,
  /// Plain concatenation; only safe for values without reserved characters.
  Raw
}

/// `<base>?<param>=<date>`, or `&` as separator when `base` already has a
/// query string. A fragment in `base` stays at the end.
pub fn build_filter_url(
  base: &str,
  param: &str,
  date: &str,
  encoding: DateEncoding
) -> String {
  let (base, fragment) =
    match base.split_once('#') {
      | Some((path, fragment)) => {
        (path, Some(fragment))
      }
      | None => (base, None)
    };

  let separator = if base.ends_with('?')
    || base.ends_with('&')
  {
    ""
  } else if base.contains('?') {
    "&"
  } else {
    "?"
  };

  let date = match encoding {
    | DateEncoding::Percent => {
      urlencoding::encode(date)
    }
    | DateEncoding::Raw => {
      Cow::Borrowed(date)
    }
  };

  match fragment {
    | Some(fragment) => format!(
      "{base}{separator}{param}={date}#{fragment}"
    ),
    | None => {
      format!("{base}{separator}{param}={date}")
    }
  }
}

/// Binds both filter controls on an event list page. Returns how many of
/// the two controls were found.
#[tracing::instrument(skip_all)]
pub fn install_events_filter<D>(
  dom: &Rc<D>,
  cfg: &FilterConfig
) -> usize
where
  D: Dom + 'static
{
  let mut bound = 0;

  for changed in
    [Target::GroupFilter, Target::DateFilter]
  {
    let handler_dom = Rc::clone(dom);
    let handler_cfg = cfg.clone();
    let ok = dom.on(
      changed,
      DomEvent::Change,
      Box::new(move || {
        apply_events_filter(
          handler_dom.as_ref(),
          &handler_cfg,
          changed
        );
      })
    );
    if ok {
      bound += 1;
    } else {
      debug!(
        ?changed,
        "filter control not on page"
      );
    }
  }

  bound
}

/// Reads both controls live and navigates to the filtered URL. Nothing
/// happens when either control is gone.
pub fn apply_events_filter(
  dom: &impl Dom,
  cfg: &FilterConfig,
  changed: Target
) {
  let group =
    dom.control_value(Target::GroupFilter);
  let date =
    dom.control_value(Target::DateFilter);

  let (Some(group), Some(date)) =
    (group, date)
  else {
    warn!(
      ?changed,
      "filter control missing; not \
       navigating"
    );
    return;
  };

  let url = build_filter_url(
    &group,
    &cfg.date_param,
    &date,
    cfg.date_encoding
  );
  debug!(?changed, url = %url, "applying events filter");
  dom.navigate(&url);
}

/// Groups page: picking a group navigates straight to its page.
#[tracing::instrument(skip_all)]
pub fn install_groups_filter<D>(
  dom: &Rc<D>
) -> bool
where
  D: Dom + 'static
{
  let handler_dom = Rc::clone(dom);
  dom.on(
    Target::GroupFilter,
    DomEvent::Change,
    Box::new(move || {
      match handler_dom
        .control_value(Target::GroupFilter)
      {
        | Some(url) if !url.is_empty() => {
          debug!(url = %url, "navigating to group");
          handler_dom.navigate(&url);
        }
        | _ => {
          debug!("empty group selection");
        }
      }
    })
  )
}
