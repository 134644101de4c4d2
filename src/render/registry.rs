use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use compact_str::{format_compact, CompactString};

use super::{Renderer, Slot};

/// A registered renderer plus its debug label.
///
/// The label is synthesized once, at registration, as
/// `"<Kind>(<renderer-or-slot-name>)"`; nothing ever re-labels an entry, so
/// resolving a slot repeatedly observes one stable label.
pub struct Entry<R: ?Sized> {
    renderer: Arc<R>,
    label: CompactString,
}

impl<R: ?Sized> Entry<R> {
    pub fn renderer(&self) -> &Arc<R> {
        &self.renderer
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<R: ?Sized> Clone for Entry<R> {
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
            label: self.label.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for Entry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Entry").field(&self.label).finish()
    }
}

/// Slot-to-renderer mapping with guaranteed resolution.
///
/// The `default` entry is taken by the constructor, so a registry without a
/// default renderer cannot be built; `resolve` never returns absence. All
/// other slots are optional and fall back to `default`.
pub struct Registry<S: Slot, R: Renderer + ?Sized> {
    default: Entry<R>,
    slots: Vec<Option<Entry<R>>>,
    _slot: PhantomData<S>,
}

impl<S: Slot, R: Renderer + ?Sized> Registry<S, R> {
    pub fn new(default: Arc<R>) -> Self {
        Self {
            default: Entry {
                label: synth_label::<S, R>(S::DEFAULT, &default),
                renderer: default,
            },
            slots: S::ALL.iter().map(|_| None).collect(),
            _slot: PhantomData,
        }
    }

    /// Bind `renderer` to `slot`, replacing any previous binding. Registering
    /// the `default` slot replaces the default renderer.
    pub fn register(&mut self, slot: S, renderer: Arc<R>) {
        let entry = Entry {
            label: synth_label::<S, R>(slot, &renderer),
            renderer,
        };
        if slot == S::DEFAULT {
            self.default = entry;
        } else if let Some(cell) = self.slots.get_mut(slot.index()) {
            *cell = Some(entry);
        }
    }

    /// The renderer bound to exactly `slot`, without fallback.
    pub fn get(&self, slot: S) -> Option<&Entry<R>> {
        if slot == S::DEFAULT {
            return Some(&self.default);
        }
        self.slots.get(slot.index()).and_then(|e| e.as_ref())
    }

    /// The renderer for `slot`, degrading to `default` when the slot is
    /// unset. Never fails.
    pub fn resolve(&self, slot: S) -> &Entry<R> {
        match self.get(slot) {
            Some(entry) => entry,
            None => {
                tracing::trace!(
                    kind = S::KIND,
                    slot = slot.name(),
                    "renderer slot unset, using default"
                );
                &self.default
            }
        }
    }

    pub fn default_entry(&self) -> &Entry<R> {
        &self.default
    }
}

impl<S: Slot, R: Renderer + ?Sized> fmt::Debug for Registry<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in S::ALL {
            if let Some(entry) = self.get(*slot) {
                map.entry(&slot.name(), &entry.label());
            }
        }
        map.finish()
    }
}

fn synth_label<S: Slot, R: Renderer + ?Sized>(slot: S, renderer: &Arc<R>) -> CompactString {
    let name = renderer.name().unwrap_or_else(|| slot.name());
    format_compact!("{}({})", S::KIND, name)
}

#[cfg(test)]
#[path = "../../tests/unit/render/registry.rs"]
mod tests;
