use chrono::{Local, Utc};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{FilterPanel, PaymentDialog, PaymentList, StatCard, StatIcon, ToastHost};
use crate::config::BackendConfig;
use crate::dashboard::DashboardController;
use crate::filter::StatusFilter;
use crate::format::format_rupiah;
use crate::model::{Payment, PaymentId, PaymentMethod};
use crate::notify::{ToastAction, ToastNotifier, ToastQueue};
use crate::supabase::SupabaseStore;

type Controller = DashboardController<SupabaseStore, ToastNotifier>;

#[derive(Properties, PartialEq)]
pub struct AdminDashboardPageProps {
    pub config: BackendConfig,
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(props: &AdminDashboardPageProps) -> Html {
    let toasts = use_reducer(ToastQueue::default);
    let force_update = use_force_update();

    let controller = {
        let config = props.config.clone();
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| -> Controller {
                let on_change = Callback::from(move |_| force_update.force_update());
                DashboardController::new(
                    SupabaseStore::new(config),
                    ToastNotifier::new(dispatcher),
                    on_change,
                )
            },
            (),
        )
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    controller.refresh().await;
                });
                || ()
            },
            (),
        );
    }

    let on_process = {
        let controller = controller.clone();
        Callback::from(move |id: PaymentId| {
            controller.open_editor(&id);
        })
    };
    let on_amount = {
        let controller = controller.clone();
        Callback::from(move |amount: String| controller.set_amount(amount))
    };
    let on_method = {
        let controller = controller.clone();
        Callback::from(move |method: PaymentMethod| controller.set_method(method))
    };
    let on_cancel = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            controller.cancel_editor();
        })
    };
    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit(Utc::now()).await;
            });
        })
    };

    let on_search = {
        let controller = controller.clone();
        Callback::from(move |name: String| controller.set_search_name(name))
    };
    let on_status = {
        let controller = controller.clone();
        Callback::from(move |status: StatusFilter| controller.set_status_filter(status))
    };
    let on_start = {
        let controller = controller.clone();
        Callback::from(move |date| controller.set_start_date(date))
    };
    let on_end = {
        let controller = controller.clone();
        Callback::from(move |date| controller.set_end_date(date))
    };
    let on_clear = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.clear_filters())
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let state = controller.state();
    let summary = state.summary();
    let total = state.payments().len();
    let visible: Vec<Payment> = state.visible(&Local).into_iter().cloned().collect();
    let criteria = state.criteria().clone();
    let editor = state.editor().clone();
    let submitting = editor.is_submitting();
    drop(state);

    html! {
        <>
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard title="Total Pendapatan" value={format_rupiah(summary.total_revenue)} icon={StatIcon::Revenue} />
                <StatCard
                    title="Pembayaran Pending"
                    value={summary.pending_count.to_string()}
                    icon={StatIcon::CreditCard}
                    caption={Some("Menunggu proses pembayaran")}
                />
            </div>

            <FilterPanel
                criteria={criteria}
                shown={visible.len()}
                total={total}
                on_search={on_search}
                on_status={on_status}
                on_start={on_start}
                on_end={on_end}
                on_clear={on_clear}
            />

            <PaymentList payments={visible} has_any={total > 0} submitting={submitting} on_process={on_process} />

            <PaymentDialog
                editor={editor}
                on_amount={on_amount}
                on_method={on_method}
                on_cancel={on_cancel}
                on_submit={on_submit}
            />

            <ToastHost toasts={toasts.toasts().to_vec()} on_dismiss={on_dismiss} />
        </>
    }
}
