use super::view_model::SupplierDetailsViewModel;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierForm};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::query_client::use_query_client;

fn field(
    vm: SupplierDetailsViewModel,
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    get: fn(&SupplierForm) -> String,
    set: fn(&mut SupplierForm, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=name>{label}</label>
            <input
                type=input_type
                id=name
                class="form__input"
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
                disabled=move || vm.saving.get()
            />
            {move || vm.field_error(name).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn SupplierDetails(
    supplier: Option<Supplier>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(supplier.as_ref(), use_toast(), use_query_client());

    view! {
        <div class="details-container supplier-details">
            <div class="details-form">
                {field(vm, "供应商名称 *", "name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field(vm, "联系人", "contact_person", "text", |f| f.contact_person.clone(), |f, v| f.contact_person = v)}
                <div class="form__row">
                    {field(vm, "电话", "phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {field(vm, "邮箱", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                </div>
                {field(vm, "地址", "address", "text", |f| f.address.clone(), |f, v| f.address = v)}
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || {
                        if vm.saving.get() {
                            "提交中..."
                        } else if vm.is_edit_mode() {
                            "更新"
                        } else {
                            "创建"
                        }
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "取消"
                </Button>
            </div>
        </div>
    }
}
