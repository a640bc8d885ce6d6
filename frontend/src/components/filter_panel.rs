use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::icons::{icon_close, icon_search};
use crate::filter::{date_input_value, parse_date_input, FilterCriteria, StatusFilter};
use crate::format::status_label;
use crate::model::PaymentStatus;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub criteria: FilterCriteria,
    pub shown: usize,
    pub total: usize,
    pub on_search: Callback<String>,
    pub on_status: Callback<StatusFilter>,
    pub on_start: Callback<Option<NaiveDate>>,
    pub on_end: Callback<Option<NaiveDate>>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let criteria = &props.criteria;
    let start_value = date_input_value(criteria.start_date);

    let on_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };
    let on_status = {
        let on_status = props.on_status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_status.emit(StatusFilter::from_value(&select.value()));
        })
    };
    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_start.emit(parse_date_input(&input.value()));
        })
    };
    let on_end = {
        let on_end = props.on_end.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_end.emit(parse_date_input(&input.value()));
        })
    };
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    let status_option = |value: &'static str, label: &'static str| {
        html! { <option value={value}>{ label }</option> }
    };

    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Cari Pasien"}</label>
                    <div class="flex items-center gap-2 bg-[#f1f4f9] rounded-[10px] px-3">
                        { icon_search() }
                        <input
                            placeholder="Nama pasien"
                            value={criteria.search_name.clone()}
                            oninput={on_search}
                            class="w-full bg-transparent py-2 text-sm border-none"
                        />
                    </div>
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Status"}</label>
                    <select value={criteria.status.as_value()} onchange={on_status} class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none">
                        { status_option(StatusFilter::All.as_value(), "Semua Status") }
                        { for PaymentStatus::ALL.iter().map(|status| status_option(status.as_str(), status_label(*status))) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Dari Tanggal"}</label>
                    <input
                        type="date"
                        value={start_value.clone()}
                        onchange={on_start}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none"
                    />
                </div>
                <div class="space-y-1">
                    <label class="text-[12px] font-bold text-muted-foreground">{"Sampai Tanggal"}</label>
                    <input
                        type="date"
                        min={start_value}
                        value={date_input_value(criteria.end_date)}
                        onchange={on_end}
                        class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm border-none"
                    />
                </div>
            </div>
            {
                if criteria.is_active() {
                    html! {
                        <div class="flex items-center justify-between text-sm">
                            <span class="text-muted-foreground">
                                { format!("Menampilkan {} dari {} pembayaran", props.shown, props.total) }
                            </span>
                            <button type="button" onclick={on_clear} class="flex items-center gap-2 px-3 py-1 rounded-xl border border-border hover:bg-secondary transition-colors">
                                { icon_close() }
                                {"Hapus Filter"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
