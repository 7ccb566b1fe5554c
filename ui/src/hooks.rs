//! Lifecycle-bound hooks backing `NavigationBar`.

use std::rc::Rc;

use api::{ApiClient, NavbarApi};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::session::{probe_session, SessionState};

/// Probe the session once on mount, then fetch the streak whenever the
/// signed-in identity changes.
///
/// Both requests run as tasks of the calling scope, so a response arriving
/// after unmount is dropped with the task instead of writing to freed state.
pub fn use_navbar_session() -> ReadOnlySignal<SessionState> {
    use_navbar_session_with(|| match ApiClient::from_env() {
        Ok(client) => Some(client),
        Err(err) => {
            warn!(%err, "navbar API client unavailable; treating visitor as anonymous");
            None
        }
    })
}

/// [`use_navbar_session`] against any backend. `connect` runs once on mount;
/// `None` leaves the visitor anonymous without issuing requests.
pub fn use_navbar_session_with<A: NavbarApi + 'static>(
    connect: impl FnOnce() -> Option<A>,
) -> ReadOnlySignal<SessionState> {
    let mut session = use_signal(SessionState::default);
    let api: Option<Rc<A>> = use_hook(|| connect().map(Rc::new));

    let probe_api = api.clone();
    use_future(move || {
        let api = probe_api.clone();
        async move {
            let user = match api {
                Some(api) => probe_session(&*api).await,
                None => None,
            };
            session.write().apply_probe(user);
        }
    });

    let user_id = use_memo(move || session.read().user_id().map(str::to_owned));

    use_effect(move || {
        // Subscribes this effect to identity changes only.
        if user_id().is_none() {
            return;
        }
        let Some(api) = api.clone() else {
            return;
        };
        let Some(id) = session.write().begin_streak_fetch() else {
            return;
        };
        spawn(async move {
            let result = api.streak_count(&id).await;
            session.write().apply_streak(&id, result);
        });
    });

    session.into()
}

/// `true` once the page is scrolled past the threshold.
///
/// The listener is attached on mount and removed in `use_drop`.
pub fn use_scroll_watcher() -> ReadOnlySignal<bool> {
    let mut scrolled = use_signal(|| false);
    let mut publish = move |flag: bool| {
        if *scrolled.peek() != flag {
            scrolled.set(flag);
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;

        let subscription = use_hook(move || {
            Rc::new(RefCell::new(web::ScrollSubscription::attach(move |flag| {
                publish(flag)
            })))
        });
        use_drop(move || {
            subscription.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::core::scroll::is_scrolled;

        use_future(move || async move {
            let mut bridge = document::eval(bridge::ATTACH_JS);
            while let Ok(offset) = bridge.recv::<f64>().await {
                publish(is_scrolled(offset));
            }
        });
        use_drop(|| {
            let _ = document::eval(bridge::DETACH_JS);
        });
    }

    scrolled.into()
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, Window};

    use crate::core::scroll::FrameThrottle;

    /// Passive window scroll listener coalesced through `requestAnimationFrame`.
    pub struct ScrollSubscription {
        window: Window,
        listener: Closure<dyn FnMut()>,
        // Kept alive while a frame may still be queued.
        _frame: Rc<Closure<dyn FnMut()>>,
        queued_frame: Rc<Cell<Option<i32>>>,
    }

    impl ScrollSubscription {
        pub fn attach(on_frame: impl FnMut(bool) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
            let queued_frame = Rc::new(Cell::new(None));
            let on_frame = RefCell::new(on_frame);

            let frame = {
                let window = window.clone();
                let throttle = throttle.clone();
                let queued_frame = queued_frame.clone();
                Rc::new(Closure::<dyn FnMut()>::new(move || {
                    queued_frame.set(None);
                    let offset = window.scroll_y().unwrap_or(0.0);
                    let scrolled = throttle.borrow_mut().run(offset);
                    (on_frame.borrow_mut())(scrolled);
                }))
            };

            let listener = {
                let window = window.clone();
                let frame = frame.clone();
                let queued_frame = queued_frame.clone();
                Closure::<dyn FnMut()>::new(move || {
                    if !throttle.borrow_mut().request() {
                        return;
                    }
                    match window.request_animation_frame((*frame).as_ref().unchecked_ref()) {
                        Ok(id) => queued_frame.set(Some(id)),
                        Err(err) => warn!(?err, "requestAnimationFrame failed"),
                    }
                })
            };

            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            ) {
                warn!(?err, "failed to attach scroll listener");
                return None;
            }

            Some(Self {
                window,
                listener,
                _frame: frame,
                queued_frame,
            })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            if let Some(id) = self.queued_frame.take() {
                let _ = self.window.cancel_animation_frame(id);
            }
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.listener.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod bridge {
    /// Installs a passive, frame-coalesced scroll listener in the webview and
    /// streams `window.scrollY` back once per frame.
    pub const ATTACH_JS: &str = r#"
        const prev = window.__dsamateNavScroll;
        if (prev) { window.removeEventListener("scroll", prev, { passive: true }); }
        let ticking = false;
        const onScroll = () => {
            if (ticking) { return; }
            ticking = true;
            requestAnimationFrame(() => {
                ticking = false;
                dioxus.send(window.scrollY);
            });
        };
        window.__dsamateNavScroll = onScroll;
        window.addEventListener("scroll", onScroll, { passive: true });
        dioxus.send(window.scrollY);
    "#;

    pub const DETACH_JS: &str = r#"
        const handler = window.__dsamateNavScroll;
        if (handler) {
            window.removeEventListener("scroll", handler, { passive: true });
            delete window.__dsamateNavScroll;
        }
    "#;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::{ApiError, NavbarApi, User};
    use dioxus::dioxus_core::{NoOpMutations, ScopeId};
    use dioxus::prelude::*;

    use super::use_navbar_session_with;
    use crate::core::session::{SessionPhase, SessionState};

    #[derive(Clone)]
    struct Backend {
        auth_status: u16,
        user: Option<User>,
        progress_calls: Rc<RefCell<Vec<String>>>,
        seen: Rc<RefCell<SessionState>>,
    }

    impl Backend {
        fn new(auth_status: u16, user: Option<User>) -> Self {
            Self {
                auth_status,
                user,
                progress_calls: Rc::default(),
                seen: Rc::default(),
            }
        }
    }

    impl NavbarApi for Backend {
        async fn check_auth(&self) -> Result<Option<User>, ApiError> {
            match self.auth_status {
                200 => Ok(self.user.clone()),
                status => Err(ApiError::from_status(status)),
            }
        }

        async fn streak_count(&self, user_id: &str) -> Result<u32, ApiError> {
            self.progress_calls.borrow_mut().push(user_id.to_string());
            Ok(5)
        }
    }

    fn session_host(backend: Backend) -> Element {
        let seen = backend.seen.clone();
        let session = use_navbar_session_with(move || Some(backend));
        *seen.borrow_mut() = session.read().clone();
        rsx! { "{session.read().streak().count()}" }
    }

    /// Mount and let every task, effect and rerender settle.
    fn mount(backend: &Backend) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(session_host, backend.clone());
        dom.rebuild_in_place();
        for _ in 0..8 {
            dom.render_immediate(&mut NoOpMutations);
        }
        dom
    }

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            display_name: "Test User".into(),
            email: "test@example.com".into(),
            avatar: None,
        }
    }

    #[test]
    fn signed_in_user_triggers_one_progress_request() {
        let backend = Backend::new(200, Some(user("u1")));
        let mut dom = mount(&backend);

        // further passes must not refetch for the same identity
        for _ in 0..4 {
            dom.mark_dirty(ScopeId::ROOT);
            dom.render_immediate(&mut NoOpMutations);
        }

        assert_eq!(*backend.progress_calls.borrow(), ["u1"]);
        let seen = backend.seen.borrow();
        assert_eq!(seen.user_id(), Some("u1"));
        assert_eq!(seen.streak().count(), 5);
    }

    #[test]
    fn unauthorized_session_never_requests_progress() {
        let backend = Backend::new(401, Some(user("u1")));
        let _dom = mount(&backend);

        assert!(backend.progress_calls.borrow().is_empty());
        assert_eq!(backend.seen.borrow().phase(), &SessionPhase::Anonymous);
    }

    #[test]
    fn missing_client_stays_anonymous() {
        fn offline_host(seen: Rc<RefCell<SessionState>>) -> Element {
            let session = use_navbar_session_with(|| Option::<Backend>::None);
            *seen.borrow_mut() = session.read().clone();
            rsx! { div {} }
        }

        let seen = Rc::new(RefCell::new(SessionState::default()));
        let mut dom = VirtualDom::new_with_props(offline_host, seen.clone());
        dom.rebuild_in_place();
        for _ in 0..4 {
            dom.render_immediate(&mut NoOpMutations);
        }
        assert_eq!(seen.borrow().phase(), &SessionPhase::Anonymous);
    }
}
