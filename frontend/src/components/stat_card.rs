use yew::prelude::*;

use super::icons::{icon_credit_card, icon_dollar};

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Revenue,
    CreditCard,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    pub icon: StatIcon,
    #[prop_or_default]
    pub caption: Option<&'static str>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
                {
                    if let Some(caption) = props.caption {
                        html! { <p class="text-xs text-muted-foreground mt-1">{ caption }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Revenue => icon_dollar(),
                        StatIcon::CreditCard => icon_credit_card(),
                    }
                }
            </div>
        </div>
    }
}
