use yew::prelude::*;

use super::{AdminDashboardPage, DashboardLayout};
use crate::config::BackendConfig;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BackendConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <DashboardLayout title="Dashboard Administrasi">
            <AdminDashboardPage config={props.config.clone()} />
        </DashboardLayout>
    }
}
