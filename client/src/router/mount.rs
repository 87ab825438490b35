//! Mount targets: where a routed page's markup ends up.
//!
//! DESIGN
//! ======
//! The router owns exactly one mount target. `replace` discards the previous
//! page subtree entirely before building the next one, so nothing from the old
//! page survives into the new DOM.

/// Container the router renders pages into.
pub trait MountTarget<V> {
    /// Discard the current page (if any) and mount `render`'s output.
    fn replace(&mut self, render: fn() -> V);

    /// Run `f` inside the scope of the currently mounted page.
    fn within(&self, f: &mut dyn FnMut()) {
        f();
    }
}

#[cfg(feature = "csr")]
pub use dom::DomMount;

#[cfg(feature = "csr")]
mod dom {
    use leptos::mount::{UnmountHandle, mount_to};
    use leptos::prelude::*;
    use leptos::tachys::view::any_view::{AnyView, AnyViewState};

    use super::MountTarget;
    use crate::state::AppState;

    struct MountedPage {
        owner: Owner,
        handle: UnmountHandle<AnyViewState>,
    }

    /// Browser container element backed by a Leptos owner per page.
    ///
    /// Each page gets its own child owner carrying the shared [`AppState`]
    /// context. Replacing the page unmounts its nodes and runs every
    /// `on_cleanup` registered by the page or its `init`.
    pub struct DomMount {
        container: web_sys::HtmlElement,
        state: AppState,
        page: Option<MountedPage>,
    }

    impl DomMount {
        pub fn new(container: web_sys::HtmlElement, state: AppState) -> Self {
            Self { container, state, page: None }
        }
    }

    impl MountTarget<AnyView> for DomMount {
        fn replace(&mut self, render: fn() -> AnyView) {
            if let Some(prev) = self.page.take() {
                drop(prev.handle);
                prev.owner.cleanup();
            }
            // Drop any static placeholder shipped in index.html.
            self.container.set_inner_html("");

            let owner = Owner::new();
            let state = self.state;
            owner.with(|| provide_context(state));
            let container = self.container.clone();
            let handle = owner.with(|| mount_to(container, render));
            self.page = Some(MountedPage { owner, handle });
        }

        fn within(&self, f: &mut dyn FnMut()) {
            match &self.page {
                Some(page) => page.owner.with(|| f()),
                None => f(),
            }
        }
    }
}
