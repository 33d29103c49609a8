use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub kind: ToastKind,
}

/// Сервис уведомлений: очередь тостов с автоматическим скрытием
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(title.into(), None, ToastKind::Success);
    }

    /// Failure notice; `description` is usually the backend's message
    pub fn error(&self, title: impl Into<String>, description: impl ToString) {
        let description = Some(description.to_string()).filter(|d| !d.is_empty());
        self.push(title.into(), description, ToastKind::Destructive);
    }

    fn push(&self, title: String, description: Option<String>, kind: ToastKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title,
                description,
                kind,
            })
        });

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast queue in the corner of the screen
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| service.dismiss(id)>
                            <div class="toast__title">{toast.title.clone()}</div>
                            {toast.description.clone().map(|d| view! {
                                <div class="toast__description">{d}</div>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
