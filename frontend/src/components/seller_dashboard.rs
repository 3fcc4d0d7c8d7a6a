//! Seller dashboard (`/seller`).
//!
//! Properties are fetched once on mount. The sidebar switches between tabs
//! without refetching:
//!
//! - Dashboard - welcome text and per-type listing counts
//! - My Properties - circular pager over the first few listings
//! - Insights - charts computed from all fetched listings
//! - Messages - placeholder

use estately::{
    compute_insights, format_amount, DashboardTab, Insights, Property, ViewState, Window,
    SELLER_WINDOW,
};
use leptos::*;

use crate::components::{color_for, InsightsPanel};
use crate::services::{spawn_load, PropertyService};
use crate::DEFAULT_SELLER_NAME;

#[component]
pub fn SellerDashboard(
    /// Name used in the welcome banner
    #[prop(into, default = DEFAULT_SELLER_NAME.to_string())]
    seller_name: String,
) -> impl IntoView {
    let service = use_context::<PropertyService>().unwrap_or_else(PropertyService::from_env);
    let state = create_rw_signal(ViewState::<Vec<Property>>::new());
    let window = create_rw_signal(Window::<Property>::default());
    let (active_tab, set_active_tab) = create_signal(DashboardTab::default());

    log::info!("📊 Loading seller dashboard for {}", seller_name);
    spawn_load(state, "seller properties", async move { service.fetch_all().await });

    // Rebuild the paging window once the listings arrive.
    create_effect(move |_| {
        let items = state.with(|s| s.loaded().cloned().unwrap_or_default());
        window.set(Window::first(items, SELLER_WINDOW));
    });

    let insights = create_memo(move |_| {
        state.with(|s| compute_insights(s.loaded().map(Vec::as_slice).unwrap_or(&[])))
    });

    view! {
        <div class="seller-container">
            <div class="seller-dashboard">
                <Sidebar active_tab=active_tab set_active_tab=set_active_tab/>
                <div class="seller-content">
                    {move || match active_tab.get() {
                        DashboardTab::Dashboard => view! {
                            <Overview seller_name=seller_name.clone() insights=insights/>
                        }.into_view(),
                        DashboardTab::Properties => view! {
                            <SellerPropertyList window=window/>
                        }.into_view(),
                        DashboardTab::Insights => view! {
                            <InsightsPanel insights=insights.get()/>
                        }.into_view(),
                        DashboardTab::Messages => view! {
                            <div class="seller-messages">
                                <h2>"Messages"</h2>
                                <p>"Coming Soon..."</p>
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Sidebar(
    active_tab: ReadSignal<DashboardTab>,
    set_active_tab: WriteSignal<DashboardTab>,
) -> impl IntoView {
    view! {
        <div class="seller-sidebar">
            <ul class="seller-sidebar-menu">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <li
                            id=format!("tab-{}", tab.key())
                            class:active=move || active_tab.get() == tab
                            on:click=move |_| {
                                log::debug!("Switching to tab {}", tab.key());
                                set_active_tab.set(tab);
                            }
                        >
                            {tab.label()}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Overview(seller_name: String, insights: Memo<Insights>) -> impl IntoView {
    view! {
        <div class="seller-dashboard-content">
            <h1 class="seller-welcome">{format!("Welcome Back, {}", seller_name)}</h1>
            <p class="seller-intro">
                "Manage your real estate properties effectively and track your sales performance."
            </p>
            <div class="seller-insights-overview">
                {move || insights.with(|insights| {
                    insights
                        .distribution
                        .iter()
                        .enumerate()
                        .map(|(idx, entry)| view! {
                            <div
                                class="seller-insight-card"
                                style=format!("border-color: {}", color_for(idx))
                            >
                                <h3>{entry.property_type.plural_label()}</h3>
                                <p>{format!("{} properties listed", entry.count)}</p>
                            </div>
                        })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
fn SellerPropertyList(window: RwSignal<Window<Property>>) -> impl IntoView {
    let cannot_page = move || !window.with(Window::can_page);

    view! {
        <div class="seller-property-list">
            {move || window.with(|w| match w.current() {
                None => view! { <p>"No properties available."</p> }.into_view(),
                Some(property) => {
                    let size = property.size.map(format_amount).unwrap_or_default();
                    let bhk = property.bhk.map(|b| b.to_string()).unwrap_or_default();
                    view! {
                        <h2>"Your Property"</h2>
                        <p class="seller-property-position">
                            {format!("{} of {}", w.index() + 1, w.len())}
                        </p>
                        <div>
                            <strong>"Location: "</strong> {property.location.clone()} <br/>
                            <strong>"BHK: "</strong> {bhk} <br/>
                            <strong>"Size: "</strong> {format!("{} sqft", size)} <br/>
                            <strong>"Price: "</strong> {format_amount(property.price)} <br/>
                            <strong>"Agent: "</strong> {format!("{}, {}", property.agent_name, property.agent_contact)} <br/>
                            <strong>"Details: "</strong> {property.details.clone().unwrap_or_default()} <br/>
                        </div>
                        <div class="property-navigation">
                            <button on:click=move |_| window.update(Window::previous) disabled=cannot_page>
                                "Previous"
                            </button>
                            <button on:click=move |_| window.update(Window::next) disabled=cannot_page>
                                "Next"
                            </button>
                        </div>
                    }.into_view()
                }
            })}
        </div>
    }
}
