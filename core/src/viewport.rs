/// Window metrics at the moment of a scroll or resize event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

/// Vertical extent of an element relative to the top of the viewport, as
/// reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

impl ElementRect {
    pub fn is_in_view(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// An element whose geometry can be queried and whose class list can be
/// edited in place.
pub trait ClassTarget {
    fn bounding_rect(&self) -> ElementRect;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealClasses {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

pub const REVEAL_VISIBLE_CLASS: &str = "reveal-visible";
pub const REVEAL_HIDDEN_CLASS: &str = "reveal-hidden";

impl RevealClasses {
    /// Space-separated class lists, the way they appear in a `class` attribute.
    pub fn parse(add: &str, remove: &str) -> Self {
        Self {
            add: split_classes(add),
            remove: split_classes(remove),
        }
    }
}

impl Default for RevealClasses {
    fn default() -> Self {
        Self {
            add: vec![REVEAL_VISIBLE_CLASS.to_string()],
            remove: vec![REVEAL_HIDDEN_CLASS.to_string()],
        }
    }
}

fn split_classes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Applies `classes` once `target` overlaps the viewport vertically. Never
/// reverts them when the target leaves again. Returns whether the target was
/// in view.
pub fn update_classes_if_in_view<T: ClassTarget + ?Sized>(
    viewport: &Viewport,
    target: Option<&T>,
    classes: &RevealClasses,
) -> bool {
    let Some(target) = target else {
        return false;
    };
    if !target.bounding_rect().is_in_view(viewport.height) {
        return false;
    }
    for class in &classes.add {
        target.add_class(class);
    }
    for class in &classes.remove {
        target.remove_class(class);
    }
    true
}
