use std::str::FromStr;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::editor::PaymentEditor;
use crate::format::{method_label, patient_label};
use crate::model::PaymentMethod;

#[derive(Properties, PartialEq)]
pub struct PaymentDialogProps {
    pub editor: PaymentEditor,
    pub on_amount: Callback<String>,
    pub on_method: Callback<PaymentMethod>,
    pub on_cancel: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(PaymentDialog)]
pub fn payment_dialog(props: &PaymentDialogProps) -> Html {
    let Some(payment) = props.editor.selected() else {
        return html! {};
    };
    let form = props.editor.form();
    let submitting = props.editor.is_submitting();

    let on_amount = {
        let on_amount = props.on_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_amount.emit(input.value());
        })
    };
    let on_method = {
        let on_method = props.on_method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(method) = PaymentMethod::from_str(&select.value()) {
                on_method.emit(method);
            }
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-40">
            <form class="bg-white rounded-[10px] shadow-lg w-full max-w-md p-6 space-y-4" novalidate={true} onsubmit={on_submit}>
                <div>
                    <h3 class="font-bold text-foreground text-lg">{"Proses Pembayaran"}</h3>
                    <p class="text-sm text-muted-foreground">{ format!("Pasien: {}", patient_label(payment)) }</p>
                </div>

                <div class="space-y-1">
                    <label for="amount" class="text-[12px] font-bold text-muted-foreground">{"Jumlah Pembayaran (Rp) *"}</label>
                    <input
                        id="amount"
                        type="number"
                        min="1"
                        step="1000"
                        placeholder="Masukkan jumlah pembayaran"
                        required={true}
                        value={form.amount.clone()}
                        oninput={on_amount}
                        disabled={submitting}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none"
                    />
                </div>

                <div class="space-y-1">
                    <label for="payment-method" class="text-[12px] font-bold text-muted-foreground">{"Metode Pembayaran *"}</label>
                    <select id="payment-method" value={form.method.as_str()} onchange={on_method} disabled={submitting} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                        { for PaymentMethod::ALL.iter().map(|method| html! {
                            <option value={method.as_str()}>{ method_label(*method) }</option>
                        }) }
                    </select>
                </div>

                <div class="flex justify-end gap-2 mt-6">
                    <button type="button" onclick={on_cancel} disabled={submitting} class="px-4 py-2 rounded-xl border border-border text-sm font-bold">
                        {"Batal"}
                    </button>
                    <button type="submit" disabled={submitting} class="bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                        { if submitting { "Memproses..." } else { "Simpan Pembayaran" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
