use ratatui::layout::Rect;

use crate::tui::element::FocusId;
use super::interaction_registry::{point_in_rect, Action};

/// Information about a focusable element
pub struct FocusableInfo<Msg> {
    pub id: FocusId,
    pub rect: Rect,
    /// Fired by Enter while focused
    pub action: Option<Action<Msg>>,
}

/// Focus context for a single layer in the UI
pub struct LayerFocusContext<Msg> {
    pub layer_index: usize,
    pub focusables: Vec<FocusableInfo<Msg>>,
}

/// Stores focus information for UI elements, organized by layer
pub struct FocusRegistry<Msg> {
    layers: Vec<LayerFocusContext<Msg>>,
}

impl<Msg: Clone> FocusRegistry<Msg> {
    pub fn new() -> Self {
        Self {
            layers: vec![LayerFocusContext {
                layer_index: 0,
                focusables: Vec::new(),
            }],
        }
    }

    pub fn clear(&mut self) {
        self.layers.clear();
        self.layers.push(LayerFocusContext {
            layer_index: 0,
            focusables: Vec::new(),
        });
    }

    pub fn push_layer(&mut self, layer_index: usize) {
        self.layers.push(LayerFocusContext {
            layer_index,
            focusables: Vec::new(),
        });
    }

    pub fn register_focusable(&mut self, info: FocusableInfo<Msg>) {
        let Some(layer) = self.layers.last_mut() else {
            return;
        };
        if layer.focusables.iter().any(|f| f.id == info.id) {
            log::warn!("Duplicate FocusId {:?} in layer {}, last registration wins", info.id, layer.layer_index);
            layer.focusables.retain(|f| f.id != info.id);
        }
        layer.focusables.push(info);
    }

    /// The topmost layer that has anything to focus
    pub fn active_layer(&self) -> Option<&LayerFocusContext<Msg>> {
        self.layers
            .iter()
            .rev()
            .find(|layer| !layer.focusables.is_empty())
            .or_else(|| self.layers.first())
    }

    pub fn find_in_active_layer(&self, id: &FocusId) -> Option<&FocusableInfo<Msg>> {
        self.active_layer()?.focusables.iter().find(|f| &f.id == id)
    }

    pub fn focusable_ids_in_active_layer(&self) -> Vec<FocusId> {
        self.active_layer()
            .map(|layer| layer.focusables.iter().map(|f| f.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn find_at_position(&self, x: u16, y: u16) -> Option<FocusId> {
        self.layers
            .iter()
            .rev()
            .flat_map(|layer| layer.focusables.iter().rev())
            .find(|f| point_in_rect(x, y, f.rect))
            .map(|f| f.id.clone())
    }

    pub fn contains(&self, id: &FocusId) -> bool {
        self.layers.iter().any(|layer| {
            layer.focusables.iter().any(|f| &f.id == id)
        })
    }
}

impl<Msg: Clone> Default for FocusRegistry<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &str, x: u16) -> FocusableInfo<u8> {
        FocusableInfo {
            id: FocusId::from(id),
            rect: Rect::new(x, 0, 4, 1),
            action: Some(Action::Message(x as u8)),
        }
    }

    #[test]
    fn test_overlay_layer_becomes_active() {
        let mut registry = FocusRegistry::new();
        registry.register_focusable(info("a", 0));
        registry.register_focusable(info("b", 5));
        assert_eq!(registry.focusable_ids_in_active_layer().len(), 2);

        registry.push_layer(1);
        registry.register_focusable(info("option-0", 10));
        assert_eq!(registry.focusable_ids_in_active_layer(), vec![FocusId::from("option-0")]);
        assert!(registry.contains(&FocusId::from("a")));
    }

    #[test]
    fn test_empty_overlay_falls_back() {
        let mut registry = FocusRegistry::new();
        registry.register_focusable(info("a", 0));
        registry.push_layer(1);
        assert_eq!(registry.focusable_ids_in_active_layer(), vec![FocusId::from("a")]);
    }
}
