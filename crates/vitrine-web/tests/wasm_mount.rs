#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser smoke test: mount widgets on a small document and check that the
//! initial state is rendered.
//!
//! Run:
//!   wasm-pack test --headless --firefox crates/vitrine-web

use vitrine_web::mount_all;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div data-carousel data-config='{"interval": 60000}'>
  <div data-carousel-slide id="s0"></div>
  <div data-carousel-slide id="s1"></div>
  <button data-carousel-indicator id="d0"></button>
  <button data-carousel-indicator id="d1"></button>
</div>
<button id="mobile-menu-toggle" aria-expanded="false"></button>
<div id="mobile-menu-overlay" class="opacity-0 pointer-events-none"></div>
<nav id="mobile-menu" class="-translate-x-full">
  <button id="mobile-menu-close"></button>
  <button data-submenu-toggle="sub-a"><span data-submenu-icon></span></button>
  <ul id="sub-a"></ul>
</nav>
"#;

#[wasm_bindgen_test]
fn mounts_carousel_and_menu() {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    let body = document.body().expect("document body");
    body.set_inner_html(FIXTURE);

    assert_eq!(mount_all(), 2);

    let attr = |id: &str, name: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.get_attribute(name))
    };
    assert_eq!(attr("s0", "aria-hidden").as_deref(), Some("false"));
    assert_eq!(attr("s1", "aria-hidden").as_deref(), Some("true"));
    assert_eq!(attr("d0", "aria-current").as_deref(), Some("true"));
    assert_eq!(attr("mobile-menu", "aria-hidden").as_deref(), Some("true"));

    let toggle = document
        .get_element_by_id("mobile-menu-toggle")
        .expect("toggle");
    let toggle: web_sys::HtmlElement =
        wasm_bindgen::JsCast::dyn_into(toggle).expect("html element");
    toggle.click();
    assert_eq!(attr("mobile-menu", "aria-hidden").as_deref(), Some("false"));
    assert_eq!(attr("mobile-menu-toggle", "aria-expanded").as_deref(), Some("true"));
}
