use crate::browser::BrowserConfig;

/// JavaScript snippets evaluated in the review page.
///
/// Selectors are embedded as JSON string literals so quotes inside
/// attribute selectors survive.
pub struct DomScripts {
    config: BrowserConfig,
}

impl DomScripts {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    /// Evaluates to `true` once at least one review element exists.
    pub fn presence_script(&self) -> String {
        let review = js_string(&self.config.review_selector);
        format!("document.querySelector({review}) !== null")
    }

    /// Evaluates to one `{date, stars, text}` object per review element
    /// currently in the document, in document order. A missing sub-element
    /// is reported as `null`.
    pub fn query_script(&self) -> String {
        let review = js_string(&self.config.review_selector);
        let date = js_string(&self.config.date_selector);
        let stars = js_string(&self.config.stars_selector);
        let icon = js_string(&self.config.star_icon_selector);
        let text = js_string(&self.config.text_selector);

        format!(
            r#"
            (() => Array.from(document.querySelectorAll({review})).map(el => {{
                const date = el.querySelector({date});
                const stars = el.querySelector({stars});
                const text = el.querySelector({text});
                return {{
                    date: date ? date.innerText : null,
                    stars: stars ? stars.querySelectorAll({icon}).length : null,
                    text: text ? text.innerText : null
                }};
            }}))()
            "#
        )
    }

    /// Clicks the load-more control through the DOM and evaluates to
    /// whether the control was there.
    pub fn load_more_script(&self) -> String {
        let id = js_string(&self.config.load_more_id);
        format!(
            r#"
            (() => {{
                const control = document.getElementById({id});
                if (!control) {{
                    return false;
                }}
                control.click();
                return true;
            }})()
            "#
        )
    }
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
