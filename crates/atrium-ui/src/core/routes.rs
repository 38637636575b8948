//! Route table, lazy page cache and the navigation transition flag.
//!
//! # Design
//! - [`Route`] is the only route table; unknown paths land on [`Route::NotFound`] and
//!   resolve to a redirect to [`Route::Home`].
//! - Page bundles come from a per-page factory that runs at most once per successful load.
//! - The transition flag is cosmetic and keyed by a generation so stale timers are inert.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use yew::Reducible;
use yew_router::Routable;

/// Delay before the transition flag clears, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = 150;

/// Routing definitions for the shell.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Portfolio overview.
    #[at("/dashboard")]
    Dashboard,
    /// Market listings.
    #[at("/market")]
    Market,
    /// Games catalogue.
    #[at("/games")]
    Games,
    /// Investment positions.
    #[at("/investments")]
    Investments,
    /// Component showcase.
    #[at("/components")]
    Components,
    /// API reference.
    #[at("/api")]
    Api,
    /// Utility tools.
    #[at("/tools")]
    Tools,
    /// Any path not listed above.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Pages that own a lazily loaded bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    /// `/`
    Home,
    /// `/dashboard`
    Dashboard,
    /// `/market`
    Market,
    /// `/games`
    Games,
    /// `/investments`
    Investments,
    /// `/components`
    Components,
    /// `/api`
    Api,
    /// `/tools`
    Tools,
}

impl PageId {
    /// Every page in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Home,
            Self::Dashboard,
            Self::Market,
            Self::Games,
            Self::Investments,
            Self::Components,
            Self::Api,
            Self::Tools,
        ]
    }

    /// Route that renders this page.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::Dashboard => Route::Dashboard,
            Self::Market => Route::Market,
            Self::Games => Route::Games,
            Self::Investments => Route::Investments,
            Self::Components => Route::Components,
            Self::Api => Route::Api,
            Self::Tools => Route::Tools,
        }
    }

    /// Stable identifier used for bundle names and logs.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Market => "market",
            Self::Games => "games",
            Self::Investments => "investments",
            Self::Components => "components",
            Self::Api => "api",
            Self::Tools => "tools",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Market => "Market",
            Self::Games => "Games",
            Self::Investments => "Investments",
            Self::Components => "Components",
            Self::Api => "API",
            Self::Tools => "Tools",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl Route {
    /// Page rendered for this route, `None` for the wildcard.
    #[must_use]
    pub const fn page(self) -> Option<PageId> {
        match self {
            Self::Home => Some(PageId::Home),
            Self::Dashboard => Some(PageId::Dashboard),
            Self::Market => Some(PageId::Market),
            Self::Games => Some(PageId::Games),
            Self::Investments => Some(PageId::Investments),
            Self::Components => Some(PageId::Components),
            Self::Api => Some(PageId::Api),
            Self::Tools => Some(PageId::Tools),
            Self::NotFound => None,
        }
    }
}

/// What the shell does for a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render the page bundle.
    Render(PageId),
    /// Replace the location with another route.
    Redirect(Route),
}

/// Map a route to its outcome; the wildcard always redirects home.
#[must_use]
pub const fn resolve(route: Route) -> RouteOutcome {
    match route.page() {
        Some(page) => RouteOutcome::Render(page),
        None => RouteOutcome::Redirect(Route::Home),
    }
}

/// Match a raw pathname, ignoring a trailing slash.
#[must_use]
pub fn resolve_path(path: &str) -> RouteOutcome {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    resolve(Route::recognize(normalized).unwrap_or(Route::NotFound))
}

/// Failure raised by a page factory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("failed to load {page} page: {reason}")]
pub struct PageLoadError {
    /// Page whose bundle failed.
    pub page: PageId,
    /// Human-readable cause.
    pub reason: String,
}

/// Load state of one page bundle.
#[derive(Debug)]
pub enum PageStatus<T> {
    /// Factory never invoked.
    Idle,
    /// Factory running.
    Loading,
    /// Bundle cached.
    Ready(Rc<T>),
    /// Last attempt failed; the next load retries.
    Failed(PageLoadError),
}

impl<T> Clone for PageStatus<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Ready(bundle) => Self::Ready(Rc::clone(bundle)),
            Self::Failed(err) => Self::Failed(err.clone()),
        }
    }
}

type Waiter<T> = Box<dyn FnOnce(&PageStatus<T>)>;

/// Cache of loaded page bundles keyed by [`PageId`].
pub struct PageCache<T> {
    slots: HashMap<PageId, PageStatus<T>>,
    factory_calls: HashMap<PageId, u32>,
    waiters: HashMap<PageId, Vec<Waiter<T>>>,
}

impl<T> Default for PageCache<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            factory_calls: HashMap::new(),
            waiters: HashMap::new(),
        }
    }
}

impl<T> fmt::Debug for PageCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("factory_calls", &self.factory_calls)
            .finish_non_exhaustive()
    }
}

impl<T> PageCache<T> {
    /// Current status of `page`.
    #[must_use]
    pub fn status(&self, page: PageId) -> PageStatus<T> {
        self.slots.get(&page).cloned().unwrap_or(PageStatus::Idle)
    }

    /// Claim the factory for `page`. Returns `true` when the caller must run it,
    /// `false` when the bundle is cached or already loading.
    pub fn begin(&mut self, page: PageId) -> bool {
        match self.slots.get(&page) {
            Some(PageStatus::Ready(_) | PageStatus::Loading) => false,
            Some(PageStatus::Idle | PageStatus::Failed(_)) | None => {
                self.slots.insert(page, PageStatus::Loading);
                *self.factory_calls.entry(page).or_insert(0) += 1;
                true
            }
        }
    }

    /// Record a factory result and hand back the waiters to notify.
    pub fn complete(
        &mut self,
        page: PageId,
        result: Result<T, PageLoadError>,
    ) -> (PageStatus<T>, Vec<Waiter<T>>) {
        let status = match result {
            Ok(bundle) => PageStatus::Ready(Rc::new(bundle)),
            Err(err) => PageStatus::Failed(err),
        };
        self.slots.insert(page, status.clone());
        let waiters = self.waiters.remove(&page).unwrap_or_default();
        (status, waiters)
    }

    /// Run `waiter` once the in-flight load of `page` settles.
    pub fn wait(&mut self, page: PageId, waiter: impl FnOnce(&PageStatus<T>) + 'static) {
        self.waiters.entry(page).or_default().push(Box::new(waiter));
    }

    /// How many times the factory for `page` has been invoked.
    #[must_use]
    pub fn factory_calls(&self, page: PageId) -> u32 {
        self.factory_calls.get(&page).copied().unwrap_or(0)
    }
}

/// Load `page` through `factory` unless it is cached or already in flight.
///
/// Returns the cached bundle, [`PageStatus::Loading`] when another caller owns the
/// in-flight load, or the settled result of this call's factory run.
pub async fn load_page<T, F, Fut>(
    cache: &RefCell<PageCache<T>>,
    page: PageId,
    factory: F,
) -> PageStatus<T>
where
    F: FnOnce(PageId) -> Fut,
    Fut: Future<Output = Result<T, PageLoadError>>,
{
    if !cache.borrow_mut().begin(page) {
        return cache.borrow().status(page);
    }
    let result = factory(page).await;
    let (status, waiters) = cache.borrow_mut().complete(page, result);
    for waiter in waiters {
        waiter(&status);
    }
    status
}

/// Cosmetic flag raised for a short moment after each navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TransitionState {
    /// `true` between a path change and its settle timer.
    pub transitioning: bool,
    generation: u64,
}

/// Transition reducer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionAction {
    /// Path changed; tag the transition with a generation.
    Begin(u64),
    /// Timer for the given generation fired.
    Settle(u64),
}

impl TransitionState {
    /// Generation of the latest transition.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Apply one action.
    #[must_use]
    pub const fn apply(self, action: TransitionAction) -> Self {
        match action {
            TransitionAction::Begin(generation) => Self {
                transitioning: true,
                generation,
            },
            TransitionAction::Settle(generation) if generation == self.generation => Self {
                transitioning: false,
                generation,
            },
            TransitionAction::Settle(_) => self,
        }
    }
}

impl Reducible for TransitionState {
    type Action = TransitionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}
