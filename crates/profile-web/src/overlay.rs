use profile_core::OverlayContent;
use wasm_bindgen::JsValue;
use web_sys as web;

const BLOCK_STYLE: &str = "position:absolute;color:white;font-family:Arial, sans-serif;\
z-index:1000;pointer-events:none;";

/// The two static text blocks layered over the canvas.
pub struct Overlay {
    blocks: Vec<web::Element>,
}

impl Overlay {
    /// Build the top-left heading/hint block and the bottom-right contact block.
    pub fn mount(document: &web::Document, content: &OverlayContent) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let header = document.create_element("div")?;
        header.set_id("profile-overlay-header");
        header.set_attribute("style", &format!("{}top:20px;left:20px;", BLOCK_STYLE))?;
        let h2 = document.create_element("h2")?;
        h2.set_attribute("style", "margin:0 0 10px 0;font-size:24px;")?;
        h2.set_text_content(Some(&content.heading));
        let hint = document.create_element("p")?;
        hint.set_attribute("style", "margin:0;font-size:14px;opacity:0.8;")?;
        hint.set_text_content(Some(&content.hint));
        header.append_child(&h2)?;
        header.append_child(&hint)?;

        let contacts = document.create_element("div")?;
        contacts.set_id("profile-overlay-contacts");
        contacts.set_attribute(
            "style",
            &format!("{}bottom:20px;right:20px;text-align:right;", BLOCK_STYLE),
        )?;
        for line in &content.contacts {
            let p = document.create_element("p")?;
            p.set_attribute("style", "margin:5px 0;font-size:14px;")?;
            p.set_text_content(Some(line));
            contacts.append_child(&p)?;
        }

        body.append_child(&header)?;
        body.append_child(&contacts)?;
        Ok(Self {
            blocks: vec![header, contacts],
        })
    }

    pub fn remove(self) {
        for el in self.blocks {
            el.remove();
        }
    }
}
