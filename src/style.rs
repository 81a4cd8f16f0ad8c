use slider_core::{ProgressBar, SlideTransform};
use web_sys as web;

use crate::constants::{ACTIVE_CLASS, ARIA_CURRENT, LAYER_SELECTORS, PROGRESS_SELECTOR, SLIDE_SELECTOR};
use crate::{css, dom};

struct SlideView {
    el: web::HtmlElement,
    layers: [Option<web::HtmlElement>; 3],
}

/// The DOM elements one slider writes to.
pub struct SliderView {
    root: web::HtmlElement,
    slides: Vec<SlideView>,
    progress: Option<web::HtmlElement>,
    active: Option<usize>,
}

impl SliderView {
    pub fn collect(root: web::HtmlElement) -> Self {
        let slides = dom::query_all(&root, SLIDE_SELECTOR)
            .into_iter()
            .map(|el| SlideView {
                layers: LAYER_SELECTORS.map(|selector| dom::query_one(&el, selector)),
                el,
            })
            .collect();
        let progress = dom::query_one(&root, PROGRESS_SELECTOR);
        // Horizontal touch drags go to pointer events; vertical ones still scroll the page.
        dom::set_style(&root, "touch-action", "pan-y");
        Self {
            root,
            slides,
            progress,
            active: None,
        }
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn width(&self) -> f64 {
        dom::width_of(&self.root)
    }

    pub fn apply(&self, transforms: &[SlideTransform], bar: &ProgressBar) {
        for t in transforms {
            let Some(slide) = self.slides.get(t.index) else {
                continue;
            };
            let style = css::slide_style(t);
            dom::set_style(&slide.el, "transform", &style.transform);
            dom::set_style(&slide.el, "opacity", &style.opacity);
            dom::set_style(&slide.el, "filter", &style.filter);
            dom::set_style(&slide.el, "visibility", style.visibility);
            for (layer, transform) in slide.layers.iter().zip(css::layer_transforms(t)) {
                if let Some(layer) = layer {
                    dom::set_style(layer, "transform", &transform);
                }
            }
        }
        if let Some(progress) = &self.progress {
            dom::set_style(progress, "transform", &css::progress_transform(bar));
        }
    }

    /// Move `is-active` and `aria-current` to `index`. Returns false when it
    /// was already active.
    pub fn mark_active(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            return false;
        }
        for (i, slide) in self.slides.iter().enumerate() {
            let active = i == index;
            _ = slide.el.class_list().toggle_with_force(ACTIVE_CLASS, active);
            if active {
                _ = slide.el.set_attribute(ARIA_CURRENT, "true");
            } else {
                _ = slide.el.remove_attribute(ARIA_CURRENT);
            }
        }
        self.active = Some(index);
        true
    }

    /// Drop the inline styles and markers this view wrote.
    pub fn clear(&mut self) {
        for slide in &self.slides {
            for property in ["transform", "opacity", "filter", "visibility"] {
                _ = slide.el.style().remove_property(property);
            }
            for layer in slide.layers.iter().flatten() {
                _ = layer.style().remove_property("transform");
            }
            _ = slide.el.class_list().remove_1(ACTIVE_CLASS);
            _ = slide.el.remove_attribute(ARIA_CURRENT);
        }
        if let Some(progress) = &self.progress {
            _ = progress.style().remove_property("transform");
        }
        _ = self.root.style().remove_property("touch-action");
        self.active = None;
    }
}
