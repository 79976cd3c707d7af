#![allow(dead_code)]

use std::{rc::Rc, time::Duration};

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};

pub const LOADING: &str = "<h1>Loading...</h1>";

/// Give a dom the in-memory history the router needs outside a browser.
pub fn with_history(dom: VirtualDom) -> VirtualDom {
    dom.with_root_context(Rc::new(MemoryHistory::default()) as Rc<dyn History>)
}

/// Like [`with_history`], but starting at `path` instead of `/`.
pub fn with_history_at(dom: VirtualDom, path: &str) -> VirtualDom {
    dom.with_root_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>)
}

/// Poll tasks and render until nothing happens for a while.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..20 {
        let idle = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_err();
        if idle {
            return;
        }
        _ = dom.render_immediate_to_vec();
    }
}

/// Keep settling until `done` holds for the rendered html, for tasks that wait
/// on real io between wakeups.
pub async fn settle_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    for _ in 0..40 {
        settle(dom).await;
        let html = dioxus_ssr::render(dom);
        if done(&html) {
            return html;
        }
    }
    dioxus_ssr::render(dom)
}
