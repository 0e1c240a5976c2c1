//! Transient notification stack.
//!
//! Notices raised by the upload flow are shown in a corner stack and
//! dismissed after [`NOTICE_TIMEOUT_MS`], or by a click.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{Notice, MAX_NOTICES, NOTICE_TIMEOUT_MS};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(0);

/// A displayed notice.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticeEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Append `entry`, dropping the oldest ones beyond `max`.
fn insert_capped(list: &mut Vec<NoticeEntry>, entry: NoticeEntry, max: usize) {
    list.push(entry);
    if list.len() > max {
        let excess = list.len() - max;
        list.drain(..excess);
    }
}

fn dismiss(list: &mut Vec<NoticeEntry>, id: u64) {
    list.retain(|entry| entry.id != id);
}

/// Show `incoming` notices and schedule their dismissal.
pub fn push_notices(notices: RwSignal<Vec<NoticeEntry>>, incoming: Vec<Notice>) {
    for notice in incoming {
        let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
        log::debug!("🔔 {}: {}", notice.title, notice.description);
        notices.update(|list| insert_capped(list, NoticeEntry { id, notice }, MAX_NOTICES));

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notices.update(|list| dismiss(list, id));
        });
    }
}

#[component]
pub fn NoticeStack(notices: RwSignal<Vec<NoticeEntry>>) -> impl IntoView {
    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let notice = entry.notice;
                    view! {
                        <div
                            class=notice.kind.css_class()
                            role="status"
                            on:click=move |_| notices.update(|list| dismiss(list, id))
                        >
                            <div class="notice-title">
                                {notice.kind.emoji()} " " {notice.title}
                            </div>
                            <div class="notice-description">{notice.description}</div>
                            <span class="notice-time">{notice.timestamp}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> NoticeEntry {
        NoticeEntry { id, notice: Notice::warning("No file selected", "Please upload a CSV file first.") }
    }

    #[test]
    fn test_insert_keeps_newest() {
        let mut list = Vec::new();
        for id in 0..5 {
            insert_capped(&mut list, entry(id), 3);
        }
        let ids: Vec<u64> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut list = vec![entry(1), entry(2), entry(3)];
        dismiss(&mut list, 2);
        dismiss(&mut list, 42);
        let ids: Vec<u64> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
