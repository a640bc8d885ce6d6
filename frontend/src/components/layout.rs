use yew::prelude::*;

use super::icons::icon_layout_grid;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub title: AttrValue,
    pub children: Children,
}

/// Page framing: sidebar, header with the page title, scrollable content.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center px-6">
                    <h1 class="text-xl font-bold text-[#173E63]">{ props.title.clone() }</h1>
                </header>
                <main class="flex-1 overflow-y-auto">
                    <div class="p-6 max-w-7xl mx-auto space-y-6">
                        { for props.children.iter() }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{"Klinik"}</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    <span class="flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full">
                        <span class="shrink-0">{ icon_layout_grid() }</span>
                        <span class="truncate whitespace-nowrap text-left">{"Administrasi"}</span>
                    </span>
                </nav>
            </div>
        </div>
    }
}
