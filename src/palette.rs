//! Ordered name to color mapping.

use crate::color::ColorInput;
use crate::translate::Translate;
use serde::{Deserialize, Serialize};

/// An ordered palette. Iteration order is insertion order; inserting an
/// existing name replaces its color in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<(String, ColorInput)>,
}

/// A resolved selection: the translated display name plus the raw color
/// stored under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub color: ColorInput,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: impl Into<ColorInput>) {
        let name = name.into();
        let color = color.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = color,
            None => self.entries.push((name, color)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ColorInput> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn entry(&self, idx: usize) -> Option<(&str, &ColorInput)> {
        self.entries.get(idx).map(|(n, c)| (n.as_str(), c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorInput)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an entry into a selection payload.
    pub fn selection(&self, idx: usize, tr: &dyn Translate) -> Option<Selection> {
        self.entries.get(idx).map(|(name, color)| Selection {
            name: tr.translate(name),
            color: color.clone(),
        })
    }

    /// The stock material palette.
    pub fn material() -> Self {
        [
            ("red", "#f44336"),
            ("pink", "#e91e63"),
            ("purple", "#9c27b0"),
            ("deepPurple", "#673ab7"),
            ("indigo", "#3f51b5"),
            ("blue", "#2196f3"),
            ("lightBlue", "#03a9f4"),
            ("cyan", "#00bcd4"),
            ("teal", "#009688"),
            ("green", "#4caf50"),
            ("lightGreen", "#8bc34a"),
            ("lime", "#cddc39"),
            ("yellow", "#ffeb3b"),
            ("amber", "#ffc107"),
            ("orange", "#ff9800"),
            ("deepOrange", "#ff5722"),
            ("brown", "#795548"),
            ("grey", "#9e9e9e"),
            ("blueGrey", "#607d8b"),
            ("black", "#000000"),
            ("white", "#ffffff"),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>, C: Into<ColorInput>> FromIterator<(S, C)> for Palette {
    fn from_iter<T: IntoIterator<Item = (S, C)>>(iter: T) -> Self {
        let mut palette = Palette::new();
        for (name, color) in iter {
            palette.insert(name, color);
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{Lexicon, NoTranslate};

    fn sample() -> Palette {
        [("go", "#4caf50"), ("wait", "#ffeb3b"), ("stop", "#f44336")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let palette = sample();
        let names: Vec<&str> = palette.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["go", "wait", "stop"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut palette = sample();
        palette.insert("wait", "#ff9800");
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.entry(1), Some(("wait", &ColorInput::from("#ff9800"))));
    }

    #[test]
    fn test_selection_translates_name_keeps_raw_color() {
        let de = Lexicon::new("de").with("stop", "Halt");
        let sel = sample().selection(2, &de).unwrap();
        assert_eq!(sel.name, "Halt");
        assert_eq!(sel.color, ColorInput::from("#f44336"));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        assert_eq!(sample().selection(9, &NoTranslate), None);
    }

    #[test]
    fn test_material_anchors() {
        let m = Palette::material();
        assert_eq!(m.len(), 21);
        assert_eq!(m.get("red"), Some(&ColorInput::from("#f44336")));
        assert_eq!(m.get("blueGrey"), Some(&ColorInput::from("#607d8b")));
        assert_eq!(m.entry(0).map(|(n, _)| n), Some("red"));
    }
}
