//! Renders queued toasts in the corner of the viewport.

use leptos::prelude::*;

use crate::state::session_handle::ToastHandle;
use crate::state::toast::ToastKind;

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

#[component]
pub fn ToastHost(toasts: ToastHandle) -> impl IntoView {
    let state = toasts.signal();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || state.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=kind_class(toast.kind)>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
