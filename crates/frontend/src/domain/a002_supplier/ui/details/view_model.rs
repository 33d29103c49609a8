use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierForm};
use contracts::domain::common::TableRecord;
use contracts::shared::error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::domain::a002_supplier::api;
use crate::layout::toast_service::ToastService;
use crate::shared::query_client::QueryClient;

/// ViewModel for the supplier create/edit form
#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierForm>,
    pub errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
    toast: ToastService,
    queries: QueryClient,
}

impl SupplierDetailsViewModel {
    pub fn new(supplier: Option<&Supplier>, toast: ToastService, queries: QueryClient) -> Self {
        Self {
            form: RwSignal::new(supplier.map(SupplierForm::from_supplier).unwrap_or_default()),
            errors: RwSignal::new(None),
            saving: RwSignal::new(false),
            toast,
            queries,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.is_edit_mode())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors
            .with(|e| e.as_ref().and_then(|e| e.get(field)).map(str::to_string))
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        let id = form.id.clone();
        let payload = match form.into_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(Some(errors));
                return;
            }
        };
        self.errors.set(None);

        let Self {
            saving,
            toast,
            queries,
            ..
        } = *self;

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let edit_mode = id.is_some();
            let result: Result<(), ApiError> = match id {
                Some(id) => api::update_supplier(&id, &payload).await,
                None => api::create_supplier(&payload).await,
            };
            match result {
                Ok(()) => {
                    queries.invalidate(Supplier::cache_key());
                    toast.success(if edit_mode { "供应商更新成功" } else { "供应商创建成功" });
                    on_saved.run(());
                }
                Err(e) => {
                    toast.error("操作失败", e);
                    saving.set(false);
                }
            }
        });
    }
}
