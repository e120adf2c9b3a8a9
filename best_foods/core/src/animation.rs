//! Scroll-triggered entrance animations for the cuisine sections.
//!
//! The rendering layer owns the actual elements. It hands an opaque handle for
//! each mounted section to [`SectionRefs`], keyed by cuisine, and an
//! [`AnimationEngine`] turns those handles into visibility-triggered
//! transitions.

use crate::cuisine::Cuisine;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Fade-and-slide transition applied to a section as it scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceAnimation {
    pub from_opacity: f32,
    pub from_y: f32,
    pub to_opacity: f32,
    pub to_y: f32,
    pub duration_secs: f32,
    pub ease: &'static str,
    /// Viewport position at which the transition starts, e.g. `top 75%`.
    pub start: &'static str,
    /// onEnter, onLeave, onEnterBack, onLeaveBack.
    pub toggle_actions: &'static str,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            from_opacity: 0.0,
            from_y: 50.0,
            to_opacity: 1.0,
            to_y: 0.0,
            duration_secs: 1.5,
            ease: "power3.out",
            start: "top 75%",
            toggle_actions: "play none none reverse",
        }
    }
}

impl EntranceAnimation {
    /// Whether scrolling back past the start point plays the transition in reverse.
    pub fn reverses_on_leave_back(&self) -> bool {
        self.toggle_actions.split_whitespace().nth(3) == Some("reverse")
    }

    /// Observer root margin equivalent to `start`.
    ///
    /// `top 75%` fires once the element's top crosses 75% of the viewport
    /// height, which is the viewport shrunk by 25% from the bottom. Anything
    /// unparseable falls back to the whole viewport.
    pub fn viewport_margin(&self) -> String {
        let percent = self
            .start
            .strip_prefix("top ")
            .and_then(|rest| rest.strip_suffix('%'))
            .and_then(|value| value.trim().parse::<f32>().ok())
            .filter(|value| (0.0..=100.0).contains(value));
        match percent {
            Some(value) => format!("0px 0px -{}% 0px", 100.0 - value),
            None => "0px".to_string(),
        }
    }
}

/// Backend that knows how to animate mounted elements.
#[cfg_attr(test, mockall::automock(type Handle = String;))]
pub trait AnimationEngine {
    type Handle;

    /// Installs the scroll-trigger machinery. Only ever called once per process.
    fn register_scroll_plugin(&self);

    fn animate_entrance(&self, handle: &Self::Handle, animation: &EntranceAnimation);
}

/// One-time, process-wide plugin registration.
#[derive(Debug)]
pub struct PluginGuard {
    registered: AtomicBool,
}

/// Guard for the scroll-trigger plugin used by the showcase.
pub static SCROLL_PLUGIN: PluginGuard = PluginGuard::new();

impl PluginGuard {
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    /// Registers the plugin with `engine` unless that already happened.
    ///
    /// Returns `true` if this call performed the registration.
    pub fn ensure_registered<E: AnimationEngine + ?Sized>(&self, engine: &E) -> bool {
        if self.registered.swap(true, Ordering::AcqRel) {
            return false;
        }
        engine.register_scroll_plugin();
        true
    }

    #[cfg(test)]
    fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }
}

impl Default for PluginGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SectionRef<H> {
    handle: Option<H>,
    animated: bool,
}

/// Rendered section handles, keyed by cuisine.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRefs<H> {
    sections: BTreeMap<Cuisine, SectionRef<H>>,
}

impl<H> Default for SectionRefs<H> {
    fn default() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }
}

impl<H: PartialEq> SectionRefs<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount callback for a section; `None` records an unmounted element.
    ///
    /// A new handle for a cuisine resets its animation so the freshly mounted
    /// element gets a trigger of its own.
    pub fn register(&mut self, cuisine: Cuisine, handle: Option<H>) {
        let entry = self.sections.entry(cuisine).or_insert(SectionRef {
            handle: None,
            animated: false,
        });
        if entry.handle != handle {
            entry.animated = false;
        }
        entry.handle = handle;
    }

    #[cfg(test)]
    fn handle(&self, cuisine: Cuisine) -> Option<&H> {
        self.sections.get(&cuisine).and_then(|s| s.handle.as_ref())
    }

    pub fn is_animated(&self, cuisine: Cuisine) -> bool {
        self.sections.get(&cuisine).is_some_and(|s| s.animated)
    }

    /// Attaches entrance animations to every mounted section that lacks one.
    ///
    /// Sections without a handle are skipped. Returns the number of
    /// animations registered by this call.
    pub fn animate_pending<E>(
        &mut self,
        engine: &E,
        guard: &PluginGuard,
        animation: &EntranceAnimation,
    ) -> usize
    where
        E: AnimationEngine<Handle = H> + ?Sized,
    {
        guard.ensure_registered(engine);

        let mut registered = 0;
        for (cuisine, section) in self.sections.iter_mut() {
            let Some(handle) = section.handle.as_ref() else {
                debug!(%cuisine, "Section not mounted, skipping animation");
                continue;
            };
            if section.animated {
                continue;
            }
            engine.animate_entrance(handle, animation);
            section.animated = true;
            registered += 1;
        }
        registered
    }
}
