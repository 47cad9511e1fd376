//! Dashboard Component
//!
//! Role-aware tab bar over the admin tables and the seller inventory.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::models::Role;
use crate::title::use_title;

use super::buyers_table::BuyersTable;
use super::my_products::MyProducts;
use super::sellers_table::SellersTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Buyers,
    Sellers,
    MyProducts,
}

impl DashboardTab {
    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Buyers => "All Buyers",
            DashboardTab::Sellers => "All Sellers",
            DashboardTab::MyProducts => "My Products",
        }
    }
}

fn tabs_for(role: Role) -> &'static [DashboardTab] {
    match role {
        Role::Admin => &[DashboardTab::Buyers, DashboardTab::Sellers],
        Role::Seller => &[DashboardTab::MyProducts],
        Role::Buyer => &[],
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    use_title("Dashboard");

    let auth = use_auth();
    let (tab, set_tab) = signal(None::<DashboardTab>);

    // Land on the first tab the current role can see
    Effect::new(move |_| {
        let available = tabs_for(auth.role().get());
        set_tab.set(available.first().copied());
    });

    view! {
        <div class="dashboard">
            <div class="dashboard-tab-bar">
                <For
                    each=move || tabs_for(auth.role().get()).to_vec()
                    key=|t| t.label()
                    children=move |t: DashboardTab| {
                        let is_active = move || tab.get() == Some(t);
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "dashboard-tab active" } else { "dashboard-tab" }
                                }
                                on:click=move |_| set_tab.set(Some(t))
                            >
                                {t.label()}
                            </button>
                        }
                    }
                />
            </div>

            {move || match tab.get() {
                Some(DashboardTab::Buyers) => view! { <BuyersTable /> }.into_any(),
                Some(DashboardTab::Sellers) => view! { <SellersTable /> }.into_any(),
                Some(DashboardTab::MyProducts) => view! { <MyProducts /> }.into_any(),
                None => view! {
                    <div class="empty-panel">
                        "Sign in as a seller or admin to access dashboard tools"
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
