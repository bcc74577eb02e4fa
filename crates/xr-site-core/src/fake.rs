//! In-memory [`Dom`] used by the test suites. Handlers are stored and run
//! on [`FakeDom::fire`], in binding order, the same way the browser would.

use std::cell::{
  Cell,
  RefCell
};
use std::collections::{
  BTreeSet,
  HashMap,
  HashSet
};
use std::rc::Rc;

use crate::dom::{
  Dom,
  DomEvent,
  Handler,
  ScrollSources,
  Target
};

const ALL_TARGETS: [Target; 7] = [
  Target::Window,
  Target::Body,
  Target::Header,
  Target::NavToggle,
  Target::Nav,
  Target::GroupFilter,
  Target::DateFilter
];

type Binding = (
  Target,
  DomEvent,
  Rc<RefCell<Handler>>
);

#[derive(Default)]
pub struct FakeDom {
  present:     RefCell<HashSet<Target>>,
  classes:
    RefCell<HashMap<Target, BTreeSet<String>>>,
  values:      RefCell<HashMap<Target, String>>,
  scroll:      Cell<ScrollSources>,
  pinned:      Cell<Option<u32>>,
  navigations: RefCell<Vec<String>>,
  marker:      RefCell<Option<String>>,
  bindings:    RefCell<Vec<Binding>>
}

impl FakeDom {
  /// A page containing every known element.
  pub fn new() -> Self {
    let dom = Self::default();
    dom
      .present
      .borrow_mut()
      .extend(ALL_TARGETS);
    dom
  }

  /// A page with only a window and a body.
  pub fn bare() -> Self {
    let dom = Self::default();
    dom.present.borrow_mut().extend([
      Target::Window,
      Target::Body
    ]);
    dom
  }

  pub fn without(
    self,
    target: Target
  ) -> Self {
    self
      .present
      .borrow_mut()
      .remove(&target);
    self
  }

  pub fn with_value(
    self,
    target: Target,
    value: &str
  ) -> Self {
    self.set_value(target, value);
    self
  }

  pub fn with_marker(
    self,
    marker: &str
  ) -> Self {
    *self.marker.borrow_mut() =
      Some(marker.to_string());
    self
  }

  pub fn set_value(
    &self,
    target: Target,
    value: &str
  ) {
    self
      .values
      .borrow_mut()
      .insert(target, value.to_string());
  }

  /// Simulates a browser that only reports `window.pageYOffset`.
  pub fn set_scroll(&self, offset: f64) {
    self.set_scroll_sources(
      ScrollSources {
        document_element: None,
        body:             None,
        window:           Some(offset)
      }
    );
  }

  pub fn set_scroll_sources(
    &self,
    sources: ScrollSources
  ) {
    self.scroll.set(sources);
  }

  /// Runs every handler bound to `target` for `event`.
  pub fn fire(
    &self,
    target: Target,
    event: DomEvent
  ) {
    let matching: Vec<_> = self
      .bindings
      .borrow()
      .iter()
      .filter(|(t, e, _)| {
        *t == target && *e == event
      })
      .map(|(_, _, h)| h.clone())
      .collect();

    for handler in matching {
      (handler.borrow_mut())();
    }
  }

  /// Picks `value` in a select control and fires its change event.
  pub fn select(
    &self,
    target: Target,
    value: &str
  ) {
    self.set_value(target, value);
    self.fire(target, DomEvent::Change);
  }

  pub fn classes(
    &self,
    target: Target
  ) -> BTreeSet<String> {
    self
      .classes
      .borrow()
      .get(&target)
      .cloned()
      .unwrap_or_default()
  }

  pub fn pinned_offset(
    &self
  ) -> Option<u32> {
    self.pinned.get()
  }

  pub fn navigations(
    &self
  ) -> Vec<String> {
    self.navigations.borrow().clone()
  }

  pub fn binding_count(
    &self,
    target: Target,
    event: DomEvent
  ) -> usize {
    self
      .bindings
      .borrow()
      .iter()
      .filter(|(t, e, _)| {
        *t == target && *e == event
      })
      .count()
  }

  fn is_present(
    &self,
    target: Target
  ) -> bool {
    self.present.borrow().contains(&target)
  }
}

impl Dom for FakeDom {
  fn add_class(
    &self,
    target: Target,
    class: &str
  ) {
    if self.is_present(target) {
      self
        .classes
        .borrow_mut()
        .entry(target)
        .or_default()
        .insert(class.to_string());
    }
  }

  fn remove_class(
    &self,
    target: Target,
    class: &str
  ) {
    if let Some(set) = self
      .classes
      .borrow_mut()
      .get_mut(&target)
    {
      set.remove(class);
    }
  }

  fn toggle_class(
    &self,
    target: Target,
    class: &str
  ) {
    if self.has_class(target, class) {
      self.remove_class(target, class);
    } else {
      self.add_class(target, class);
    }
  }

  fn has_class(
    &self,
    target: Target,
    class: &str
  ) -> bool {
    self
      .classes
      .borrow()
      .get(&target)
      .is_some_and(|set| set.contains(class))
  }

  fn scroll_sources(
    &self
  ) -> ScrollSources {
    self.scroll.get()
  }

  fn pin_body(&self, offset: u32) {
    self.pinned.set(Some(offset));
  }

  fn unpin_body(&self) {
    self.pinned.set(None);
  }

  fn scroll_to(&self, offset: u32) {
    self.set_scroll(f64::from(offset));
  }

  fn control_value(
    &self,
    target: Target
  ) -> Option<String> {
    if !self.is_present(target) {
      return None;
    }
    Some(
      self
        .values
        .borrow()
        .get(&target)
        .cloned()
        .unwrap_or_default()
    )
  }

  fn navigate(&self, url: &str) {
    self
      .navigations
      .borrow_mut()
      .push(url.to_string());
  }

  fn page_marker(
    &self
  ) -> Option<String> {
    self.marker.borrow().clone()
  }

  fn on(
    &self,
    target: Target,
    event: DomEvent,
    handler: Handler
  ) -> bool {
    if !self.is_present(target) {
      return false;
    }
    self.bindings.borrow_mut().push((
      target,
      event,
      Rc::new(RefCell::new(handler))
    ));
    true
  }
}
