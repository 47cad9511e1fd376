//! Subscription Page Component
//!
//! Static marketing page listing the subscription tiers.

use leptos::prelude::*;

use crate::models::Plan;
use crate::title::use_title;
use crate::toast::use_toast;

use super::breadcrumbs::Breadcrumbs;

const PLANS: &[Plan] = &[
    Plan {
        name: "Reader",
        price: "$9.99",
        period: "/month",
        description: "Perfect for casual book lovers",
        features: &[
            "Access to 500+ books monthly",
            "Unlimited browsing",
            "Basic recommendations",
            "2 books per month",
            "Standard shipping",
            "Email support",
        ],
        popular: false,
    },
    Plan {
        name: "Collector",
        price: "$24.99",
        period: "/month",
        description: "For dedicated bibliophiles",
        features: &[
            "Access to 2000+ books monthly",
            "Priority browsing",
            "AI-powered recommendations",
            "5 books per month",
            "Express shipping",
            "Priority support",
            "Exclusive first editions",
            "Member-only sales",
        ],
        popular: true,
    },
    Plan {
        name: "Bibliophile",
        price: "$49.99",
        period: "/month",
        description: "Ultimate book collecting experience",
        features: &[
            "Unlimited book access",
            "VIP browsing experience",
            "Personal book concierge",
            "10 books per month",
            "Free overnight shipping",
            "24/7 premium support",
            "Rare & signed editions",
            "Private collection viewings",
            "Custom book sourcing",
        ],
        popular: false,
    },
];

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    use_title("Subscription Plans");

    let toast = use_toast();

    view! {
        <div class="subscription-page">
            <Breadcrumbs trail=vec!["Home".to_string(), "Plans".to_string()] />
            <div class="page-heading">
                <h1>"Choose Your Plan"</h1>
                <p>"Subscriptions for every kind of reader"</p>
            </div>
            <div class="plans-grid">
                {PLANS.iter().map(|plan| {
                    let card_class = if plan.popular { "plan-card popular" } else { "plan-card" };
                    view! {
                        <div class=card_class>
                            <Show when=move || plan.popular>
                                <span class="plan-badge">"Most Popular"</span>
                            </Show>
                            <h3>{plan.name}</h3>
                            <p class="plan-price">{plan.price}<span>{plan.period}</span></p>
                            <p class="plan-description">{plan.description}</p>
                            <ul class="plan-features">
                                {plan.features.iter().map(|feature| view! {
                                    <li>{*feature}</li>
                                }).collect_view()}
                            </ul>
                            <button
                                class="primary-btn"
                                on:click=move |_| toast.success(format!("{} plan selected", plan.name))
                            >
                                "Get Started"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
