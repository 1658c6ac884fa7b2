//! Side navigation: scroll-spy highlighting, smooth in-page scrolling and
//! the hamburger menu.

use portfolio_core::constants::SCROLL_SPY_THRESHOLD;
use portfolio_core::nav::{active_link, target_id};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::registry::query_all;

const LINK_SELECTOR: &str = ".side-nav a";
const ACTIVE_LINK_CLASS: &str = "active-link";
const HAMBURGER_ID: &str = "hamburger-btn";
const SIDE_NAV_ID: &str = "side-nav";
const MENU_OPEN_CLASS: &str = "active";

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let links = query_all(document, LINK_SELECTOR)?;
    let menu = match (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(SIDE_NAV_ID),
    ) {
        (Some(btn), Some(nav)) => Some(Menu { btn, nav }),
        _ => None,
    };

    attach_link_clicks(document, &links, menu.clone())?;
    attach_scroll_spy(document, links)?;
    if let Some(menu) = menu {
        attach_hamburger(document, menu)?;
    }
    Ok(())
}

#[derive(Clone)]
struct Menu {
    btn: Element,
    nav: Element,
}

impl Menu {
    fn close(&self) {
        let _ = self.btn.class_list().remove_1(MENU_OPEN_CLASS);
        let _ = self.nav.class_list().remove_1(MENU_OPEN_CLASS);
    }

    fn toggle(&self) {
        let _ = self.btn.class_list().toggle(MENU_OPEN_CLASS);
        let _ = self.nav.class_list().toggle(MENU_OPEN_CLASS);
    }

    fn contains(&self, target: &web_sys::Node) -> bool {
        self.btn.contains(Some(target)) || self.nav.contains(Some(target))
    }
}

// Close the menu, then scroll smoothly to the linked section.
fn attach_link_clicks(
    document: &Document,
    links: &[Element],
    menu: Option<Menu>,
) -> Result<(), JsValue> {
    for link in links {
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        let menu = menu.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let Some(section) = target_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            if let Some(menu) = &menu {
                menu.close();
            }
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }));
        link.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

fn highlight(links: &[Element], section_id: &str) {
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    let active = active_link(hrefs.iter().map(Option::as_deref), section_id);
    for (i, link) in links.iter().enumerate() {
        let classes = link.class_list();
        let _ = if active == Some(i) {
            classes.add_1(ACTIVE_LINK_CLASS)
        } else {
            classes.remove_1(ACTIVE_LINK_CLASS)
        };
    }
}

fn attach_scroll_spy(document: &Document, links: Vec<Element>) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                highlight(&links, &entry.target().id());
            }
        }
    }));
    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(SCROLL_SPY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;
    callback.forget();

    for section in query_all(document, "section")? {
        observer.observe(&section);
    }
    Ok(())
}

// The button toggles the menu; any click outside the button and the menu closes it.
fn attach_hamburger(document: &Document, menu: Menu) -> Result<(), JsValue> {
    let m = menu.clone();
    let ontoggle = Closure::<dyn FnMut()>::wrap(Box::new(move || m.toggle()));
    menu.btn
        .add_event_listener_with_callback("click", ontoggle.as_ref().unchecked_ref())?;
    ontoggle.forget();

    let onoutside = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
        let inside = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|n| menu.contains(&n));
        if !inside {
            menu.close();
        }
    }));
    document.add_event_listener_with_callback("click", onoutside.as_ref().unchecked_ref())?;
    onoutside.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAGE: &str = r##"
        <button id="hamburger-btn">menu</button>
        <nav id="side-nav" class="side-nav">
            <a href="#about">About</a>
            <a href="#gone">Gone</a>
        </nav>
        <p id="outside">text</p>
        <section id="about">about</section>"##;

    fn setup() -> Document {
        let document = web_sys::window().unwrap().document().unwrap();
        document.body().unwrap().set_inner_html(PAGE);
        attach(&document).unwrap();
        document
    }

    fn el(document: &Document, selector: &str) -> Element {
        document.query_selector(selector).unwrap().unwrap()
    }

    fn click(el: &Element) {
        el.dyn_ref::<HtmlElement>().unwrap().click();
    }

    fn menu_open(document: &Document) -> (bool, bool) {
        (
            el(document, "#hamburger-btn").class_list().contains(MENU_OPEN_CLASS),
            el(document, "#side-nav").class_list().contains(MENU_OPEN_CLASS),
        )
    }

    #[wasm_bindgen_test]
    fn hamburger_toggles_button_and_menu() {
        let doc = setup();
        click(&el(&doc, "#hamburger-btn"));
        assert_eq!(menu_open(&doc), (true, true));
        click(&el(&doc, "#hamburger-btn"));
        assert_eq!(menu_open(&doc), (false, false));
    }

    #[wasm_bindgen_test]
    fn link_to_missing_section_leaves_menu_open() {
        let doc = setup();
        click(&el(&doc, "#hamburger-btn"));
        click(&el(&doc, "a[href='#gone']"));
        assert_eq!(menu_open(&doc), (true, true));
    }

    #[wasm_bindgen_test]
    fn link_to_existing_section_closes_menu() {
        let doc = setup();
        click(&el(&doc, "#hamburger-btn"));
        click(&el(&doc, "a[href='#about']"));
        assert_eq!(menu_open(&doc), (false, false));
    }

    #[wasm_bindgen_test]
    fn click_outside_closes_menu() {
        let doc = setup();
        click(&el(&doc, "#hamburger-btn"));
        click(&el(&doc, "#side-nav"));
        assert_eq!(menu_open(&doc), (true, true));
        click(&el(&doc, "#outside"));
        assert_eq!(menu_open(&doc), (false, false));
    }

    #[wasm_bindgen_test]
    fn highlight_marks_only_the_matching_link() {
        let doc = setup();
        let links = query_all(&doc, LINK_SELECTOR).unwrap();
        highlight(&links, "about");
        assert!(links[0].class_list().contains(ACTIVE_LINK_CLASS));
        assert!(!links[1].class_list().contains(ACTIVE_LINK_CLASS));
        highlight(&links, "elsewhere");
        assert!(!links[0].class_list().contains(ACTIVE_LINK_CLASS));
    }
}
