use crate::dom::{
  Dom,
  ScrollSources
};

/// Current vertical scroll offset in whole pixels: the largest usable value
/// among the browser-reported sources, or 0 when none is usable.
pub fn current_scroll_offset(
  dom: &impl Dom
) -> u32 {
  offset_from_sources(
    dom.scroll_sources()
  )
}

pub fn offset_from_sources(
  sources: ScrollSources
) -> u32 {
  [
    sources.document_element,
    sources.body,
    sources.window
  ]
  .into_iter()
  .flatten()
  .filter(|value| {
    value.is_finite() && *value > 0.0
  })
  .fold(0.0_f64, f64::max)
  .floor()
  .min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn picks_largest_reported_source() {
    let sources = ScrollSources {
      document_element: Some(0.0),
      body:             Some(120.0),
      window:           Some(80.5)
    };
    assert_eq!(
      offset_from_sources(sources),
      120
    );
  }

  #[test]
  fn missing_sources_default_to_zero() {
    assert_eq!(
      offset_from_sources(
        ScrollSources::default()
      ),
      0
    );
  }

  #[test]
  fn ignores_negative_and_non_finite_values()
  {
    let sources = ScrollSources {
      document_element: Some(f64::NAN),
      body:             Some(-40.0),
      window:           Some(
        f64::INFINITY
      )
    };
    assert_eq!(
      offset_from_sources(sources),
      0
    );
  }

  #[test]
  fn fractional_offsets_round_down() {
    let sources = ScrollSources {
      document_element: Some(5.9),
      body:             None,
      window:           None
    };
    assert_eq!(
      offset_from_sources(sources),
      5
    );
  }
}
