//! Browser tests driving the mounted app through DOM events.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos::task::tick;
use task_list::TodoConfig;
use todo_list_ui::app::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount a fresh app into its own host element
fn mount_app() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap().unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&host).unwrap();
    leptos::mount::mount_to(host.clone(), || view! { <App config=TodoConfig::default() /> }).forget();
    host
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn rows(host: &HtmlElement) -> Vec<Element> {
    let children = find(host, "#task-list").children();
    (0..children.length()).filter_map(|i| children.item(i)).collect()
}

fn input(host: &HtmlElement) -> HtmlInputElement {
    find(host, "#task-input").unchecked_into()
}

fn is_completed(row: &Element) -> bool {
    row.class_name().split_whitespace().any(|c| c == "completed")
}

fn bubbling_event(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Type into the input and submit the form. Returns whether the default action was allowed.
async fn submit(host: &HtmlElement, text: &str) -> bool {
    let input = input(host);
    input.set_value(text);
    input.dispatch_event(&bubbling_event("input")).unwrap();
    tick().await;

    let default_allowed = find(host, "#todo-form")
        .dispatch_event(&bubbling_event("submit"))
        .unwrap();
    tick().await;
    default_allowed
}

async fn click(element: &Element) -> Event {
    let event = bubbling_event("click");
    element.dispatch_event(&event).unwrap();
    tick().await;
    event
}

#[wasm_bindgen_test]
async fn test_submit_adds_task_and_clears_input() {
    let host = mount_app();

    let default_allowed = submit(&host, "Ir al gimnasio").await;

    assert!(!default_allowed, "submit must not navigate");
    let rows = rows(&host);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].text_content().unwrap().contains("Ir al gimnasio"));
    assert_eq!(input(&host).value(), "");
}

#[wasm_bindgen_test]
async fn test_whitespace_submission_stays_in_input() {
    let host = mount_app();

    let default_allowed = submit(&host, "   ").await;

    assert!(!default_allowed);
    assert!(rows(&host).is_empty());
    assert_eq!(input(&host).value(), "   ");
}

#[wasm_bindgen_test]
async fn test_new_row_has_delete_button() {
    let host = mount_app();
    submit(&host, "Tarea con botón").await;

    let row = &rows(&host)[0];
    let button = find(row, "button");
    assert_eq!(button.text_content().unwrap(), "Eliminar");
    assert_eq!(row.tag_name(), "LI");
}

#[wasm_bindgen_test]
async fn test_clicking_row_toggles_completed() {
    let host = mount_app();
    submit(&host, "Tarea de prueba").await;
    let row = rows(&host)[0].clone();
    assert!(!is_completed(&row));

    click(&row).await;
    assert!(is_completed(&row));

    click(&row).await;
    assert!(!is_completed(&row));
}

#[wasm_bindgen_test]
async fn test_delete_removes_only_its_row_without_toggling() {
    let host = mount_app();
    submit(&host, "a").await;
    submit(&host, "b").await;
    let second = rows(&host)[1].clone();
    click(&second).await;
    assert!(is_completed(&second));

    let first = rows(&host)[0].clone();
    let event = click(&find(&first, "button")).await;

    assert!(event.cancel_bubble(), "delete click must not reach the row");
    let rows = rows(&host);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].text_content().unwrap().contains('b'));
    assert!(is_completed(&rows[0]));
    assert_eq!(
        find(&host, ".task-count").text_content().unwrap(),
        "1 tareas, 1 completadas"
    );
}
