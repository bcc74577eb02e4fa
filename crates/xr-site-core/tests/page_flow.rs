use std::rc::Rc;

use xr_site_core::config::SiteConfig;
use xr_site_core::dom::{Dom, DomEvent, Target};
use xr_site_core::fake::FakeDom;
use xr_site_core::page::{PageInitializers, PageType, compose};
use xr_site_core::scroll::current_scroll_offset;
use xr_site_core::site::SiteControllers;

#[derive(Default, Debug, PartialEq)]
struct Calls {
    header: usize,
    datetime_widget: usize,
    embeds: usize,
    events: usize,
    groups: usize,
}

struct RecordingSite {
    controllers: SiteControllers<FakeDom>,
    calls: Calls,
}

impl RecordingSite {
    fn new(dom: FakeDom) -> Self {
        Self {
            controllers: SiteControllers::new(Rc::new(dom), SiteConfig::default()),
            calls: Calls::default(),
        }
    }

    fn dom(&self) -> &FakeDom {
        self.controllers.dom().as_ref()
    }

    fn boot(&mut self) -> PageType {
        let marker = self.dom().page_marker();
        compose(marker.as_deref(), self)
    }
}

impl PageInitializers for RecordingSite {
    fn header(&mut self) {
        self.calls.header += 1;
        self.controllers.header();
    }

    fn datetime_widget(&mut self) {
        self.calls.datetime_widget += 1;
    }

    fn embeds(&mut self) {
        self.calls.embeds += 1;
    }

    fn events(&mut self) {
        self.calls.events += 1;
        self.controllers.events();
    }

    fn groups(&mut self) {
        self.calls.groups += 1;
        self.controllers.groups();
    }
}

fn events_page() -> FakeDom {
    FakeDom::new()
        .with_marker("eventlistpage")
        .with_value(Target::GroupFilter, "/events/berlin/")
        .with_value(Target::DateFilter, "2023-05-01")
}

#[test]
fn group_change_keeps_current_date() {
    let mut site = RecordingSite::new(events_page());
    site.boot();

    site.dom().fire(Target::GroupFilter, DomEvent::Change);

    assert_eq!(
        site.dom().navigations(),
        vec!["/events/berlin/?d=2023-05-01".to_string()]
    );
}

#[test]
fn date_change_reads_group_control_live() {
    let mut site = RecordingSite::new(events_page());
    site.boot();

    site.dom().select(Target::DateFilter, "2023-06-15");
    assert_eq!(
        site.dom().navigations().last().map(String::as_str),
        Some("/events/berlin/?d=2023-06-15")
    );

    site.dom().set_value(Target::GroupFilter, "/events/hamburg/");
    site.dom().select(Target::DateFilter, "2023-07-01");
    assert_eq!(
        site.dom().navigations().last().map(String::as_str),
        Some("/events/hamburg/?d=2023-07-01")
    );
}

#[test]
fn lock_unlock_round_trip_restores_scroll() {
    let mut site = RecordingSite::new(FakeDom::new());
    site.boot();
    site.dom().set_scroll(640.0);

    site.dom().fire(Target::NavToggle, DomEvent::Click);
    assert!(site.dom().has_class(Target::Body, "modal-open"));
    assert_eq!(site.dom().pinned_offset(), Some(640));

    // the pinned body reports no scroll while the drawer is open
    site.dom().set_scroll(0.0);
    site.dom().fire(Target::NavToggle, DomEvent::Click);

    assert_eq!(current_scroll_offset(site.dom()), 640);
    assert!(!site.dom().has_class(Target::Body, "modal-open"));
    assert!(!site.dom().has_class(Target::Nav, "open"));
    assert!(!site.controllers.context().borrow().modal_open);
    assert_eq!(site.controllers.context().borrow().scroll_cache, None);
}

#[test]
fn header_follows_scroll_events_after_boot() {
    let mut site = RecordingSite::new(FakeDom::new());
    site.dom().set_scroll(12.0);
    site.boot();
    assert!(site.dom().has_class(Target::Header, "is-scrolled"));

    site.dom().set_scroll(3.0);
    site.dom().fire(Target::Window, DomEvent::Scroll);
    assert!(!site.dom().has_class(Target::Header, "is-scrolled"));
}

#[test]
fn routing_activates_one_controller_per_page_type() {
    let cases = [
        (Some("eventlistpage"), 1, 0),
        (Some("eventgrouppage"), 1, 0),
        (Some("groups"), 0, 1),
        (Some("homepage"), 0, 0),
        (None, 0, 0),
    ];

    for (marker, events, groups) in cases {
        let dom = match marker {
            Some(m) => FakeDom::new().with_marker(m),
            None => FakeDom::new(),
        };
        let mut site = RecordingSite::new(dom);
        site.boot();

        assert_eq!(
            site.calls,
            Calls {
                header: 1,
                datetime_widget: 1,
                embeds: 1,
                events,
                groups,
            },
            "marker {marker:?}"
        );
        assert_eq!(
            site.dom().binding_count(Target::DateFilter, DomEvent::Change),
            events,
            "marker {marker:?}"
        );
    }
}

#[test]
fn bare_page_boots_without_effects() {
    let mut site = RecordingSite::new(FakeDom::bare().with_marker("eventlistpage"));
    assert_eq!(site.boot(), PageType::EventList);

    site.dom().set_scroll(100.0);
    site.dom().fire(Target::Window, DomEvent::Scroll);
    site.dom().fire(Target::NavToggle, DomEvent::Click);
    site.dom().fire(Target::GroupFilter, DomEvent::Change);

    assert!(site.dom().classes(Target::Header).is_empty());
    assert!(site.dom().navigations().is_empty());
    assert!(!site.controllers.context().borrow().modal_open);
}
