use estately::PropertyType;
use leptos::*;
use leptos_router::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-right">
                {PropertyType::ALL
                    .iter()
                    .map(|property_type| {
                        let href = format!("/properties/{}", property_type.as_str());
                        view! {
                            <A href=href class="nav-link" active_class="active">
                                {property_type.plural_label()}
                            </A>
                        }
                    })
                    .collect_view()}
                <A href="/seller" class="nav-link seller-link" active_class="active">
                    "Seller Dashboard"
                </A>
            </nav>
        </header>
    }
}
