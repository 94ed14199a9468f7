//! Browser binding: DOM-backed view, `fetch`-backed source, event wiring

use std::rc::Rc;

use async_trait::async_trait;
use naf_types::Tier;
use tracing::Level;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event, HtmlOptionElement, HtmlSelectElement, Response, Window};

use crate::config::SelectConfig;
use crate::controller::CascadingSelectController;
use crate::source::{FetchError, FetchResponse, FragmentSource};
use crate::view::{ChosenOption, SelectorView};

/// Index of the select inside its container (the label comes first)
const SELECT_CHILD_INDEX: u32 = 1;

/// Container element and select element of one tier
#[derive(Clone)]
struct SelectorHandle {
    container: Element,
    select: HtmlSelectElement,
}

/// The four selectors of the page
pub struct DomView {
    window: Window,
    handles: [SelectorHandle; 4],
    loading_class: String,
}

impl DomView {
    /// Look the selectors up by container id
    ///
    /// # Errors
    /// Returns JsValue error if a container is missing or its second child
    /// is not a select
    pub fn new(config: &SelectConfig) -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;

        let lookup = |tier: Tier| -> Result<SelectorHandle, JsValue> {
            let id = config.container_id(tier);
            let container = document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?;
            let select = container
                .children()
                .item(SELECT_CHILD_INDEX)
                .ok_or_else(|| JsValue::from_str(&format!("#{} has no select", id)))?
                .dyn_into::<HtmlSelectElement>()
                .map_err(|_| JsValue::from_str(&format!("#{} child is not a select", id)))?;
            Ok(SelectorHandle { container, select })
        };

        Ok(Self {
            handles: [
                lookup(Tier::Sector)?,
                lookup(Tier::Division)?,
                lookup(Tier::Group)?,
                lookup(Tier::Class)?,
            ],
            window,
            loading_class: config.loading_class.clone(),
        })
    }

    fn handle(&self, tier: Tier) -> &SelectorHandle {
        &self.handles[tier.ordinal()]
    }

    /// Currently selected option of a tier's select
    pub fn chosen(&self, tier: Tier) -> Option<ChosenOption> {
        chosen_option(&self.handle(tier).select)
    }
}

impl SelectorView for DomView {
    fn is_disabled(&self, tier: Tier) -> bool {
        self.handle(tier).select.has_attribute("disabled")
    }

    fn set_disabled_attribute(&self, tier: Tier, disabled: bool) {
        let select = &self.handle(tier).select;
        let result = if disabled {
            select.set_attribute("disabled", "")
        } else {
            select.remove_attribute("disabled")
        };
        if let Err(e) = result {
            web_sys::console::error_2(&"Failed to toggle disabled:".into(), &e);
        }
    }

    fn replace_options(&self, tier: Tier, markup: &str) {
        self.handle(tier).select.set_inner_html(markup);
    }

    fn set_loading(&self, tier: Tier, loading: bool) {
        let class_list = self.handle(tier).container.class_list();
        web_sys::console::debug_1(&class_list);

        let result = if loading {
            class_list.add_1(&self.loading_class)
        } else {
            class_list.remove_1(&self.loading_class)
        };
        if let Err(e) = result {
            web_sys::console::error_2(&"Failed to toggle loading class:".into(), &e);
        }
    }

    fn notify(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            web_sys::console::log_1(&message.into());
        }
    }

    fn log(&self, level: Level, message: &str) {
        let message = JsValue::from_str(message);
        if level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if level == Level::INFO {
            web_sys::console::info_1(&message);
        } else {
            web_sys::console::debug_1(&message);
        }
    }
}

/// `window.fetch` as a [`FragmentSource`]
pub struct BrowserFetch {
    window: Window,
}

impl BrowserFetch {
    pub fn new() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        Ok(Self { window })
    }
}

#[async_trait(?Send)]
impl FragmentSource for BrowserFetch {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| FetchError::Network(describe(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| FetchError::Network(describe(&e)))?;

        let status = response.status();
        if !response.ok() {
            return Ok(FetchResponse::new(status, ""));
        }

        let text = response.text().map_err(|e| FetchError::Body(describe(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Body(describe(&e)))?;

        Ok(FetchResponse::new(status, body.as_string().unwrap_or_default()))
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn chosen_option(select: &HtmlSelectElement) -> Option<ChosenOption> {
    let index = select.selected_index();
    if index < 0 {
        return None;
    }
    let option = select.item(index as u32)?.dyn_into::<HtmlOptionElement>().ok()?;

    Some(ChosenOption {
        value: option.value(),
        text: option.text(),
        data_type: option.dataset().get("type"),
    })
}

type DomController = CascadingSelectController<DomView, BrowserFetch>;

/// Wire the four selectors of the page and load the sectors
///
/// `config` may be `undefined` or a partial `SelectConfig` object.
///
/// ```javascript
/// import init, { startCascade } from './pkg/naf_web_wasm.js';
///
/// await init();
/// document.addEventListener('DOMContentLoaded', () => startCascade());
/// ```
#[wasm_bindgen(js_name = startCascade)]
pub async fn start_cascade(config: JsValue) -> Result<(), JsValue> {
    let config: SelectConfig = if config.is_undefined() || config.is_null() {
        SelectConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?
    };

    let view = DomView::new(&config)?;
    let controller = Rc::new(CascadingSelectController::new(
        view,
        BrowserFetch::new()?,
        config,
    ));

    for tier in Tier::ALL {
        attach_change_listener(&controller, tier)?;
    }

    controller.initialize().await;
    Ok(())
}

fn attach_change_listener(controller: &Rc<DomController>, tier: Tier) -> Result<(), JsValue> {
    let select = controller.view().handle(tier).select.clone();
    let controller = Rc::clone(controller);

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let Some(chosen) = controller.view().chosen(tier) else {
            return;
        };

        if tier == Tier::Class {
            controller.on_leaf_selection(&chosen);
            return;
        }

        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.on_selection_change(tier, &chosen).await;
        });
    });

    select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;

    // Listeners live as long as the page
    on_change.forget();
    Ok(())
}
