//! CSV upload component with drag & drop support.
//!
//! Drives an [`UploadFlow`] kept in a signal: file selection, submission
//! to the prediction service, and the completion card with the
//! dashboard link.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::{push_notices, NoticeEntry};
use crate::flow::{classify, UploadFlow};
use crate::services::{load_result, open_dashboard, HttpPredictionClient, LocalStorage};
use crate::{dashboard_url, predict_url, ClassificationSummary, Notice, RESULT_STORAGE_KEY};

/// Move the flow's pending notices to the notice stack.
fn flush_notices(flow: RwSignal<UploadFlow<File>>, notices: RwSignal<Vec<NoticeEntry>>) {
    let pending = flow.try_update(|f| f.take_notices()).unwrap_or_default();
    if !pending.is_empty() {
        push_notices(notices, pending);
    }
}

#[component]
pub fn UploadSection(notices: RwSignal<Vec<NoticeEntry>>) -> impl IntoView {
    let flow = create_rw_signal(UploadFlow::<File>::new());

    // Result of an earlier visit, if the browser still has it
    let previous = match load_result(&LocalStorage, RESULT_STORAGE_KEY) {
        Ok(Some(value)) => {
            log::info!("♻️ Found a previous classification in storage");
            Some(ClassificationSummary::from_value(&value))
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("Could not read previous classification: {}", e);
            None
        }
    };
    let (summary, set_summary) = create_signal(previous);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            flow.update(|f| f.choose(file));
        }
        // Allow picking the same file again after a reset
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        flow.update(|f| {
            let _ = f.drop_file(dropped);
        });
        flush_notices(flow, notices);
    };

    let on_submit = move |_| {
        let begun = flow.try_update(|f| f.begin_submit());
        flush_notices(flow, notices);
        let Some(Ok(file)) = begun else {
            return;
        };

        spawn_local(async move {
            let client = HttpPredictionClient::new(predict_url());
            let outcome = classify(&client, &LocalStorage, &file).await;
            if let Ok(value) = &outcome {
                set_summary.set(Some(ClassificationSummary::from_value(value)));
            }
            flow.update(|f| {
                let _ = f.finish_submit(outcome);
            });
            flush_notices(flow, notices);
        });
    };

    let on_open_dashboard = move |_| {
        if let Err(e) = open_dashboard(dashboard_url()) {
            log::error!("❌ {}", e);
            push_notices(notices, vec![Notice::error("Dashboard unavailable", e.to_string())]);
        }
    };

    let on_reset = move |_| flow.update(|f| f.reset());

    let is_complete = move || flow.with(|f| f.is_complete());
    let is_submitting = move || flow.with(|f| f.is_submitting());

    view! {
        <Show
            when=is_complete
            fallback=move || view! {
                <div class="upload-card">
                    <div
                        class="upload-section"
                        id="uploadZone"
                        on:dragover=on_drag_over
                        on:drop=on_drop
                    >
                        <input
                            type="file"
                            id="fileInput"
                            accept=".csv"
                            style="display:none"
                            on:change=on_file_change
                        />
                        <label for="fileInput" class="upload-label">
                            <div class="upload-icon">"📤"</div>
                            <div class="upload-text">
                                {move || flow.with(|f| f.file_name())
                                    .unwrap_or_else(|| "Drop your CSV file here".to_string())}
                            </div>
                            <div class="upload-hint">"or click to browse your files"</div>
                        </label>
                    </div>

                    <button
                        class="upload-button"
                        on:click=on_submit
                        disabled=move || !flow.with(|f| f.can_submit())
                    >
                        {move || flow.with(|f| f.state().submit_label())}
                    </button>

                    <Show when=move || !is_submitting() && summary.get().is_some() fallback=|| view! { }>
                        <div class="upload-hint mt-20">
                            {move || summary.get().and_then(|s| s.batch_id).map(|id| format!("Last classification: batch {}", id))}
                        </div>
                    </Show>
                </div>
            }
        >
            <div class="upload-card complete">
                <div class="upload-icon">"📊"</div>
                <h2>"✅ Data Successfully Processed"</h2>
                <p class="subtitle">"Your GPU data has been analyzed and classified."</p>

                <Show when=move || summary.get().is_some_and(|s| !s.is_empty()) fallback=|| view! { }>
                    <ResultSummary summary=summary/>
                </Show>

                <div class="complete-actions">
                    <button class="upload-button" on:click=on_open_dashboard>
                        "Open Dashboard"
                    </button>
                    <button class="upload-button outline" on:click=on_reset>
                        "Upload Another File"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Key figures of the last classification.
#[component]
fn ResultSummary(summary: ReadSignal<Option<ClassificationSummary>>) -> impl IntoView {
    let field = move |pick: fn(&ClassificationSummary) -> Option<String>| {
        move || summary.get().as_ref().and_then(pick).unwrap_or_else(|| "—".to_string())
    };

    view! {
        <dl class="result-summary">
            <dt>"Records classified"</dt>
            <dd>{field(|s| s.total_records.map(|n| n.to_string()))}</dd>
            <dt>"Batch"</dt>
            <dd>{field(|s| s.batch_id.clone())}</dd>
            <dt>"Status"</dt>
            <dd>{field(|s| s.message.clone())}</dd>
        </dl>
    }
}
