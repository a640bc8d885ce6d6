use chrono::Local;
use yew::prelude::*;

use super::icons::icon_credit_card;
use crate::format::{
    amount_label, format_long_date, method_caption, patient_label, status_badge_class,
    status_label,
};
use crate::model::{Payment, PaymentId, PaymentStatus};

#[derive(Properties, PartialEq)]
pub struct PaymentListProps {
    pub payments: Vec<Payment>,
    /// Whether the unfiltered list has any rows.
    pub has_any: bool,
    /// Locks the row actions while a payment is being saved.
    #[prop_or_default]
    pub submitting: bool,
    pub on_process: Callback<PaymentId>,
}

#[function_component(PaymentList)]
pub fn payment_list(props: &PaymentListProps) -> Html {
    let body = if !props.has_any {
        html! {
            <div class="text-center py-12">
                <div class="flex justify-center mb-4">{ icon_credit_card() }</div>
                <p class="text-muted-foreground mb-2">{"Tidak ada data pembayaran"}</p>
                <p class="text-sm text-muted-foreground">
                    {"Pembayaran akan muncul setelah dokter menyelesaikan pemeriksaan pasien"}
                </p>
            </div>
        }
    } else if props.payments.is_empty() {
        html! {
            <div class="text-center py-12">
                <p class="text-muted-foreground">{"Tidak ada pembayaran yang sesuai dengan filter"}</p>
            </div>
        }
    } else {
        html! {
            <div class="space-y-3">
                { for props.payments.iter().map(|payment| html! {
                    <PaymentRow key={payment.id.to_string()} payment={payment.clone()} submitting={props.submitting} on_process={props.on_process.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="p-6 border-b border-border">
                <h3 class="font-bold text-foreground text-lg">{"Manajemen Pembayaran"}</h3>
                <p class="text-sm text-muted-foreground">{"Kelola pembayaran pasien"}</p>
            </div>
            <div class="p-6">
                { body }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentRowProps {
    pub payment: Payment,
    #[prop_or_default]
    pub submitting: bool,
    pub on_process: Callback<PaymentId>,
}

#[function_component(PaymentRow)]
pub fn payment_row(props: &PaymentRowProps) -> Html {
    let payment = &props.payment;
    let method = payment
        .payment_method
        .filter(|_| payment.status == PaymentStatus::Completed);

    let on_click = {
        let on_process = props.on_process.clone();
        let id = payment.id.clone();
        Callback::from(move |_| on_process.emit(id.clone()))
    };

    html! {
        <div class="flex items-center justify-between p-4 border border-border rounded-lg hover:bg-muted/30 transition-colors">
            <div class="flex-1">
                <p class="font-semibold text-foreground">{ patient_label(payment) }</p>
                <p class="text-sm text-muted-foreground">{ amount_label(payment) }</p>
                <div class="flex items-center gap-2 mt-1">
                    <p class="text-xs text-muted-foreground">{ format_long_date(&payment.created_at, &Local) }</p>
                    {
                        if let Some(method) = method {
                            html! {
                                <>
                                    <span class="text-xs text-muted-foreground">{"•"}</span>
                                    <p class="text-xs text-muted-foreground">{ method_caption(method) }</p>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="flex items-center gap-3">
                <span class={status_badge_class(payment.status)}>{ status_label(payment.status) }</span>
                {
                    if payment.is_pending() {
                        html! {
                            <button type="button" onclick={on_click} disabled={props.submitting} class="bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                                {"Proses Bayar"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
