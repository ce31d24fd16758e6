//! DOM debug panel: one range slider per light parameter.

use crate::dom::js_err;
use haunt_core::{HauntedHouse, PanelParam};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";

fn format_value(v: f32) -> String {
    format!("{:.3}", v)
}

/// Build the sliders inside `#debug-panel` (created if the page lacks one).
pub fn mount(document: &web::Document, house: Rc<RefCell<HauntedHouse>>) -> anyhow::Result<()> {
    let root = match document.get_element_by_id(PANEL_ID) {
        Some(el) => el,
        None => {
            let el = document.create_element("div").map_err(js_err)?;
            el.set_id(PANEL_ID);
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el).map_err(js_err)?;
            el
        }
    };

    for param in PanelParam::ALL {
        let (min, max) = param.range();
        let current = param.get(&house.borrow().lights);

        let row = document.create_element("label").map_err(js_err)?;
        row.set_class_name("panel-row");
        let name = document.create_element("span").map_err(js_err)?;
        name.set_text_content(Some(param.label()));
        let readout = document.create_element("output").map_err(js_err)?;
        readout.set_text_content(Some(&format_value(current)));

        let input: web::HtmlInputElement = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        input.set_type("range");
        input.set_id(&format!("panel-{}", param.key()));
        input.set_min(&min.to_string());
        input.set_max(&max.to_string());
        input.set_step(&param.step().to_string());
        input.set_value(&current.to_string());

        row.append_child(&name).map_err(js_err)?;
        row.append_child(&input).map_err(js_err)?;
        row.append_child(&readout).map_err(js_err)?;
        root.append_child(&row).map_err(js_err)?;

        let house = house.clone();
        let input_c = input.clone();
        let closure = Closure::wrap(Box::new(move || {
            let raw = input_c.value().parse::<f32>().unwrap_or(f32::NAN);
            let stored = param.set(&mut house.borrow_mut().lights, raw);
            readout.set_text_content(Some(&format_value(stored)));
            log::debug!("[panel] {} = {}", param.key(), format_value(stored));
        }) as Box<dyn FnMut()>);
        input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    log::info!("[panel] mounted {} controls", PanelParam::ALL.len());
    Ok(())
}
