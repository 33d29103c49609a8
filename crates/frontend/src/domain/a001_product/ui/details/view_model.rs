use contracts::domain::a001_product::aggregate::{Product, ProductForm};
use contracts::domain::a001_product::image::check_image;
use contracts::domain::common::TableRecord;
use contracts::shared::cache::keys;
use contracts::shared::error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use web_sys::File;

use crate::domain::a001_product::api;
use crate::layout::toast_service::ToastService;
use crate::shared::api_utils::client_config;
use crate::shared::object_storage::{image_candidate, upload_product_image};
use crate::shared::query_client::QueryClient;

/// ViewModel for the product create/edit form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
    /// Object URL of the picked file, or the stored image
    pub preview: RwSignal<Option<String>>,
    image: StoredValue<Option<File>, LocalStorage>,
    toast: ToastService,
    queries: QueryClient,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>, toast: ToastService, queries: QueryClient) -> Self {
        let form = product.map(ProductForm::from_product).unwrap_or_default();
        let preview = Some(form.image_url.clone()).filter(|url| !url.is_empty());
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(None),
            saving: RwSignal::new(false),
            preview: RwSignal::new(preview),
            image: StoredValue::new_local(None),
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

    /// Keep a picked file for upload on save; oversize or non-image files are refused
    pub fn select_image(&self, file: File) {
        let candidate = image_candidate(&file);
        if let Err(rejection) = check_image(&candidate, client_config().storage.max_image_bytes) {
            self.toast.error(rejection.title(), rejection);
            return;
        }

        self.revoke_preview();
        let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
        self.preview.set(preview);
        self.image.set_value(Some(file));
    }

    pub fn clear_image(&self) {
        self.revoke_preview();
        self.preview.set(None);
        self.image.set_value(None);
        self.form.update(|f| f.image_url.clear());
    }

    fn revoke_preview(&self) {
        if self.image.with_value(Option::is_some) {
            if let Some(url) = self.preview.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }

    /// Validate, upload the picked image, then insert or update the row
    pub fn save_command(&self, created_by: Option<String>, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        if let Err(errors) = form.validate() {
            self.errors.set(Some(errors));
            return;
        }
        self.errors.set(None);

        let file = self.image.get_value();
        let edit_mode = form.is_edit_mode();
        let Self {
            saving,
            toast,
            queries,
            ..
        } = *self;

        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match submit(form, created_by, file).await {
                Ok(()) => {
                    queries.invalidate(Product::cache_key());
                    queries.invalidate(keys::DASHBOARD_STATS);
                    toast.success(if edit_mode { "商品更新成功" } else { "商品创建成功" });
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("product save failed: {}", e);
                    toast.error("操作失败", e);
                    saving.set(false);
                }
            }
        });
    }
}

async fn submit(
    form: ProductForm,
    created_by: Option<String>,
    file: Option<File>,
) -> Result<(), ApiError> {
    if created_by.is_none() {
        return Err(ApiError::NotAuthenticated);
    }

    let image_url = match file {
        Some(file) => Some(upload_product_image(file).await?),
        None => None,
    };

    let id = form.id.clone();
    let payload = form.into_payload(created_by.as_deref(), image_url)?;
    match id {
        Some(id) => api::update_product(&id, &payload).await,
        None => api::create_product(&payload).await,
    }
}
