use crate::{endpoint, fetch, FetchState, Transport};
use futures::future::{FutureExt, LocalBoxFuture};
use log::debug;
use std::cell::Cell;
use std::rc::Rc;

/// Shared flag telling a pending fetch whether its result is still wanted.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark results of the associated fetch as ignorable. The request itself keeps running.
    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Attachment {
    url: String,
    liveness: Liveness,
}

/// Notice source bound to the lifetime of a view.
///
/// A view calls [`Feed::attach`] when it is shown (and whenever its configured base URL may have
/// changed) and [`Feed::detach`] when it goes away. At most one fetch is issued per distinct URL;
/// results arriving after a detach or a switch to another URL are dropped.
pub struct Feed<T: ?Sized> {
    transport: Rc<T>,
    attached: Option<Attachment>,
}

impl<T> Feed<T>
where
    T: Transport + ?Sized + 'static,
{
    pub fn new(transport: Rc<T>) -> Self {
        Self {
            transport,
            attached: None,
        }
    }

    /// URL of the current attachment, if any.
    pub fn url(&self) -> Option<&str> {
        self.attached.as_ref().map(|a| a.url.as_str())
    }

    /// Start loading notices below `base`, reporting progress to `sink`.
    ///
    /// Returns the fetch the caller has to drive, or `None` if the feed is already attached to the
    /// same URL. The sink first sees [`FetchState::Loading`] and then the outcome, unless the feed
    /// was detached or re-attached elsewhere in the meantime.
    pub fn attach<F>(&mut self, base: &str, sink: F) -> Option<LocalBoxFuture<'static, ()>>
    where
        F: Fn(FetchState) + 'static,
    {
        let url = endpoint(base);

        if self.url() == Some(url.as_str()) {
            return None;
        }

        self.detach();

        let liveness = Liveness::new();
        let transport = self.transport.clone();

        self.attached = Some(Attachment {
            url: url.clone(),
            liveness: liveness.clone(),
        });

        let task = async move {
            if liveness.is_alive() {
                sink(FetchState::Loading);
            }

            let state = FetchState::from(fetch(&*transport, &url).await);

            if liveness.is_alive() {
                sink(state);
            } else {
                debug!("Dropping late notices from {url}");
            }
        };

        Some(task.boxed_local())
    }

    pub fn detach(&mut self) {
        if let Some(attachment) = self.attached.take() {
            attachment.liveness.revoke();
        }
    }
}

impl<T: ?Sized> Drop for Feed<T> {
    fn drop(&mut self) {
        if let Some(attachment) = self.attached.take() {
            attachment.liveness.revoke();
        }
    }
}
