//! DOM-backed container for the browser build

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlLabelElement};

use crate::error::{ErrorKind, Result};
use crate::interface::Container;
use crate::render::{ClassItem, RenderNode};

const CHECKED_SELECTOR: &str = "input[type=\"checkbox\"]:checked";

/// Wraps the `master-class-selection-container` element
#[derive(Clone)]
pub struct DomContainer {
    document: Document,
    element: Element,
    on_change: Option<Rc<dyn Fn()>>,
}

impl DomContainer {
    pub fn new(element: Element) -> Result<Self> {
        let document = element
            .owner_document()
            .ok_or_else(|| ErrorKind::DomError("container is not attached to a document".into()))?;
        Ok(Self {
            document,
            element,
            on_change: None,
        })
    }

    /// Looks the container up by id in the current document
    pub fn find(container_id: &str) -> Option<Self> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(container_id)?;
        Self::new(element).ok()
    }

    /// Callback bound to the `change` event of every rendered checkbox
    pub fn with_on_change(mut self, on_change: Rc<dyn Fn()>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn create(&self, tag: &str) -> Result<Element> {
        Ok(self.document.create_element(tag)?)
    }

    fn day_section(&self, heading: &str, items: &[ClassItem]) -> Result<Element> {
        let section = self.create("div")?;
        section.class_list().add_1("day-section")?;

        let header = self.create("h3")?;
        header.set_text_content(Some(heading));
        section.append_child(&header)?;

        let list = self.create("ul")?;
        list.class_list().add_1("master-class-list")?;
        for item in items {
            list.append_child(&self.list_item(item)?)?;
        }
        section.append_child(&list)?;

        Ok(section)
    }

    fn list_item(&self, item: &ClassItem) -> Result<Element> {
        let li = self.create("li")?;

        let checkbox: HtmlInputElement = self
            .create("input")?
            .dyn_into()
            .map_err(|_| ErrorKind::DomError("input is not an HtmlInputElement".into()))?;
        checkbox.set_type("checkbox");
        checkbox.set_id(&item.checkbox_id);
        checkbox.set_value(&item.value);
        checkbox.dataset().set("classInfo", &item.class_info)?;

        if let Some(on_change) = &self.on_change {
            let on_change = Rc::clone(on_change);
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_change());
            checkbox
                .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())?;
            // the checkbox lives until the next render or page unload
            listener.forget();
        }

        let label: HtmlLabelElement = self
            .create("label")?
            .dyn_into()
            .map_err(|_| ErrorKind::DomError("label is not an HtmlLabelElement".into()))?;
        label.set_html_for(&item.checkbox_id);
        label.set_text_content(Some(&item.label));

        li.append_child(&checkbox)?;
        li.append_child(&label)?;
        Ok(li)
    }

    fn message(&self, class: Option<&str>, text: &str) -> Result<Element> {
        let p = self.create("p")?;
        if let Some(class) = class {
            p.class_list().add_1(class)?;
        }
        p.set_text_content(Some(text));
        Ok(p)
    }
}

impl Container for DomContainer {
    /// The new children are built off-document and swapped in only once all
    /// of them exist, so a failure leaves the previous contents in place.
    fn replace_children(&mut self, nodes: &[RenderNode]) -> Result<()> {
        let fragment = self.document.create_document_fragment();
        for node in nodes {
            let child = match node {
                RenderNode::Notice(text) => self.message(None, text)?,
                RenderNode::Error(text) => self.message(Some("error"), text)?,
                RenderNode::DaySection { heading, items } => self.day_section(heading, items)?,
            };
            fragment.append_child(&child)?;
        }

        self.element.set_inner_html("");
        self.element.append_child(&fragment)?;
        Ok(())
    }

    fn checked_values(&self) -> Result<Vec<String>> {
        let checked = self.element.query_selector_all(CHECKED_SELECTOR)?;

        let mut values = Vec::with_capacity(checked.length() as usize);
        for index in 0..checked.length() {
            let Some(node) = checked.item(index) else {
                continue;
            };
            match node.dyn_into::<HtmlInputElement>() {
                Ok(input) => values.push(input.value()),
                Err(node) => log::error!("Checked node is not an input: {:?}", node),
            }
        }
        Ok(values)
    }
}
