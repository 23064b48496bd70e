//! The component contract.
//!
//! A component is the unit the build pipeline composes into a page. It owns:
//!
//! - **props**: immutable input fixed at construction time
//! - **state**: private mutable key/value store with shallow-merge updates
//! - **lifecycle status**: [`Lifecycle::Unmounted`] until [`Component::mount`]
//!
//! ```text
//!   Unmounted ──mount()──▶ Mounted
//! ```
//!
//! There is no unmount: components are built once per build and thrown away.
//!
//! Concrete components embed a [`ComponentBase`], implement [`Renderable`]
//! and expose the base through [`Component::base`] / [`Component::base_mut`].
//! A bare [`ComponentBase`] is itself a component whose `render` always fails
//! with [`DomainError::NotImplemented`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::error::DomainError;

/// Dynamically typed slot for props and state values.
pub type Value = serde_json::Value;

/// Ordered string-keyed mapping used for both props and state.
///
/// `BTreeMap` keeps iteration order stable so a render that walks the map
/// is deterministic.
pub type Props = BTreeMap<String, Value>;

/// Component state; same shape as [`Props`] but owned mutably.
pub type State = BTreeMap<String, Value>;

/// Markup produced by a single render call.
pub type Markup = String;

/// Result of rendering a component.
pub type RenderResult = Result<Markup, DomainError>;

/// Lifecycle status of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmounted => write!(f, "unmounted"),
            Self::Mounted => write!(f, "mounted"),
        }
    }
}

/// Capability of producing markup.
///
/// `render` must be a pure function of the component's props and state:
/// calling it twice without an intervening `set_state` returns the same text.
pub trait Renderable {
    fn render(&self) -> RenderResult;
}

/// Shared data every component carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentBase {
    props: Props,
    state: State,
    status: Lifecycle,
}

impl ComponentBase {
    /// Store `props` verbatim with an empty state.
    pub fn new(props: Props) -> Self {
        Self {
            props,
            state: State::new(),
            status: Lifecycle::Unmounted,
        }
    }

    /// Store `props` and start from a component-supplied initial state.
    pub fn with_state(props: Props, state: State) -> Self {
        Self {
            props,
            state,
            status: Lifecycle::Unmounted,
        }
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Look up a single prop.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Look up a single state entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    pub fn status(&self) -> Lifecycle {
        self.status
    }

    pub fn is_mounted(&self) -> bool {
        self.status == Lifecycle::Mounted
    }

    /// Shallow merge: keys in `patch` overwrite, everything else is kept.
    pub(crate) fn merge_state(&mut self, patch: State) {
        self.state.extend(patch);
    }

    /// Flip to `Mounted`. Returns `false` if the component already was.
    pub(crate) fn mark_mounted(&mut self) -> bool {
        if self.is_mounted() {
            return false;
        }
        self.status = Lifecycle::Mounted;
        true
    }
}

impl Renderable for ComponentBase {
    fn render(&self) -> RenderResult {
        Err(DomainError::NotImplemented {
            component: "ComponentBase".into(),
        })
    }
}

impl Component for ComponentBase {
    fn base(&self) -> &ComponentBase {
        self
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        self
    }

    fn name(&self) -> &str {
        "ComponentBase"
    }
}

/// Full component contract: render capability plus lifecycle and state.
///
/// Only `base`, `base_mut` and [`Renderable::render`] are required. `mount`
/// and `set_state` come with the base behaviour; override [`Component::on_mount`]
/// for one-time setup instead of `mount` itself.
pub trait Component: Renderable {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Name used in logs and errors.
    fn name(&self) -> &str {
        "component"
    }

    fn props(&self) -> &Props {
        self.base().props()
    }

    fn state(&self) -> &State {
        self.base().state()
    }

    fn status(&self) -> Lifecycle {
        self.base().status()
    }

    /// One-time setup hook, run by the first `mount` only.
    fn on_mount(&mut self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Transition to `Mounted`. A second call is a no-op.
    fn mount(&mut self) -> Result<(), DomainError> {
        if self.base().is_mounted() {
            trace!(component = self.name(), "already mounted");
            return Ok(());
        }
        self.on_mount()?;
        self.base_mut().mark_mounted();
        trace!(component = self.name(), "mounted");
        Ok(())
    }

    /// Merge `patch` into the state, then re-render.
    ///
    /// The markup from that render is dropped; nothing is cached and the
    /// page is only produced by the build pipeline. A render failure is still
    /// returned, after the merge has been applied.
    fn set_state(&mut self, patch: State) -> Result<(), DomainError> {
        self.base_mut().merge_state(patch);
        let _discarded = self.render()?;
        Ok(())
    }
}

/// Build a [`Props`]/[`State`] map from `key => value` pairs.
///
/// ```
/// use mamba_core::props;
/// let p = props! { "title" => "Hello", "count" => 3 };
/// assert_eq!(p["count"], 3);
/// ```
#[macro_export]
macro_rules! props {
    () => { $crate::domain::Props::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::domain::Props::new();
        $( map.insert(::std::string::String::from($key), $crate::domain::component::Value::from($value)); )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    struct Counter {
        base: ComponentBase,
        renders: Cell<u32>,
        setups: u32,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                base: ComponentBase::with_state(props! { "label" => "count" }, props! { "n" => 0 }),
                renders: Cell::new(0),
                setups: 0,
            }
        }
    }

    impl Renderable for Counter {
        fn render(&self) -> RenderResult {
            self.renders.set(self.renders.get() + 1);
            Ok(format!(
                "<p>{}: {}</p>",
                self.base.prop("label").and_then(Value::as_str).unwrap_or(""),
                self.base.get("n").cloned().unwrap_or(Value::Null)
            ))
        }
    }

    impl Component for Counter {
        fn base(&self) -> &ComponentBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut ComponentBase {
            &mut self.base
        }
        fn name(&self) -> &str {
            "Counter"
        }
        fn on_mount(&mut self) -> Result<(), DomainError> {
            self.setups += 1;
            Ok(())
        }
    }

    #[test]
    fn construct_stores_props_and_empty_state() {
        let base = ComponentBase::new(props! { "title" => "hi" });
        assert_eq!(base.props()["title"], json!("hi"));
        assert!(base.state().is_empty());
        assert_eq!(base.status(), Lifecycle::Unmounted);
    }

    #[test]
    fn mount_twice_runs_setup_once() {
        let mut c = Counter::new();
        c.mount().unwrap();
        c.mount().unwrap();
        assert_eq!(c.status(), Lifecycle::Mounted);
        assert_eq!(c.setups, 1);
    }

    #[test]
    fn set_state_merges_shallowly() {
        let mut c = Counter::new();
        c.set_state(props! { "extra" => true }).unwrap();
        c.set_state(props! { "n" => 5 }).unwrap();
        assert_eq!(c.state()["n"], json!(5));
        assert_eq!(c.state()["extra"], json!(true));
    }

    #[test]
    fn set_state_renders_and_discards_output() {
        // Quirk: set_state calls render but the markup goes nowhere.
        let mut c = Counter::new();
        c.set_state(props! { "n" => 1 }).unwrap();
        assert_eq!(c.renders.get(), 1);
        assert_eq!(c.render().unwrap(), "<p>count: 1</p>");
    }

    #[test]
    fn render_is_repeatable() {
        let c = Counter::new();
        assert_eq!(c.render().unwrap(), c.render().unwrap());
    }

    #[test]
    fn render_works_in_both_states() {
        let mut c = Counter::new();
        let before = c.render().unwrap();
        c.mount().unwrap();
        assert_eq!(before, c.render().unwrap());
    }

    #[test]
    fn bare_base_render_is_not_implemented() {
        let base = ComponentBase::new(Props::new());
        assert!(matches!(
            base.render(),
            Err(DomainError::NotImplemented { .. })
        ));
    }

    #[test]
    fn bare_base_set_state_merges_then_fails() {
        let mut base = ComponentBase::default();
        let err = base.set_state(props! { "k" => "v" }).unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented { .. }));
        assert_eq!(base.state()["k"], json!("v"));
    }

    #[test]
    fn bare_base_mounts() {
        let mut base = ComponentBase::default();
        base.mount().unwrap();
        assert!(base.is_mounted());
    }
}
