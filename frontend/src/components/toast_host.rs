use yew::prelude::*;

use crate::notify::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 w-80 space-y-2 z-50">
            { for props.toasts.iter().map(|toast| {
                let class_name = match toast.kind {
                    ToastKind::Success => "flex items-start justify-between gap-3 px-4 py-3 rounded-xl shadow-lg bg-white border border-green-200 text-sm text-green-700",
                    ToastKind::Error => "flex items-start justify-between gap-3 px-4 py-3 rounded-xl shadow-lg bg-white border border-red-200 text-sm text-red-600",
                };
                let on_dismiss = props.on_dismiss.clone();
                let id = toast.id;
                html! {
                    <div key={id} class={class_name} role="status">
                        <span>{ toast.message.clone() }</span>
                        <button type="button" aria-label="Tutup" class="text-xs text-slate-400" onclick={Callback::from(move |_| on_dismiss.emit(id))}>{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
