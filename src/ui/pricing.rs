//! Pricing section: the three primary plans plus the student, couple and
//! family summaries underneath.

use leptos::prelude::*;

use crate::core::{PRIMARY_PLANS, Plan, PlanSummary, SECONDARY_PLANS};
use crate::ui::common::{Badge, BadgeVariant, ButtonVariant, PlanButton};
use crate::ui::icon::Icon;

/// Pricing section component
#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 bg-white">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold text-slate-900 mb-4">
                        "Pricing Plans"
                    </h2>
                    <p class="text-lg text-slate-600 max-w-2xl mx-auto">
                        "Subscribe via our website to get "
                        <span class="text-green-600 font-bold">"Exclusive Discounts"</span>
                        " and avoid App Store surcharges."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-16">
                    {PRIMARY_PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan=*plan /> })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 pt-12 border-t border-slate-100">
                    {SECONDARY_PLANS
                        .iter()
                        .map(|summary| view! { <PlanSummaryCard summary=*summary /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card for one primary plan
#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let card_class = if plan.highlighted {
        "border-2 border-green-500 rounded-2xl p-8 bg-green-50/20 relative transform md:-translate-y-4 shadow-xl flex flex-col".to_string()
    } else {
        format!(
            "border border-slate-200 rounded-2xl p-8 {} transition-colors flex flex-col",
            plan.accent.hover_border_class()
        )
    };
    let price_class = if plan.highlighted {
        "text-4xl font-extrabold text-green-600 mb-1"
    } else {
        "text-4xl font-extrabold text-slate-900 mb-1"
    };
    let list_class = if plan.highlighted {
        "space-y-3 text-sm text-slate-700 mb-8 flex-grow"
    } else {
        "space-y-3 text-sm text-slate-600 mb-8 flex-grow"
    };
    let button_variant = if plan.highlighted {
        ButtonVariant::Primary
    } else if plan.billed_months.is_some() {
        ButtonVariant::Secondary
    } else {
        ButtonVariant::Outline
    };
    let icon_class = format!("w-[18px] h-[18px] shrink-0 {}", plan.accent.icon_class());

    view! {
        <div class=card_class data-plan=plan.id>
            {plan.highlighted.then(|| view! {
                <Badge variant=BadgeVariant::Ribbon>"BEST SELLER"</Badge>
            })}

            <div class="flex justify-between items-start">
                <h3 class="text-xl font-bold text-slate-900 mb-2">{plan.name}</h3>
                {plan.icon.map(|name| {
                    let class = format!("w-5 h-5 {}", plan.accent.icon_class());
                    view! { <Icon name=name class=class /> }
                })}
            </div>

            <div class=price_class>
                {plan.price.to_string()}
                <span class="text-lg font-normal text-slate-500">{plan.period.suffix()}</span>
            </div>

            {match plan.standard_price {
                Some(standard) => view! {
                    <div class="flex items-center gap-2 mb-6">
                        <span class="text-sm line-through text-slate-400">
                            {format!("{} Standard", standard)}
                        </span>
                        <Badge variant=BadgeVariant::Exclusive>"WEB EXCLUSIVE"</Badge>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p class="text-sm text-slate-500 mb-6">{plan.description()}</p>
                }
                .into_any(),
            }}

            <ul class=list_class>
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        let label = if feature.emphasized {
                            view! { <strong>{feature.label}</strong> }.into_any()
                        } else {
                            view! { <span>{feature.label}</span> }.into_any()
                        };
                        view! {
                            <li class="flex gap-2">
                                <Icon name=feature.icon class=icon_class.clone() />
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <PlanButton
                variant=button_variant
                class=if plan.footnote.is_some() { "mb-2" } else { "" }
            >
                {plan.cta_text()}
            </PlanButton>

            {plan.footnote.map(|note| view! {
                <p class="text-xs text-center text-slate-500">{note}</p>
            })}
        </div>
    }
}

/// One-line card for a secondary plan
#[component]
fn PlanSummaryCard(summary: PlanSummary) -> impl IntoView {
    view! {
        <div class="p-4 bg-slate-50 rounded-xl">
            <h4 class="font-bold text-slate-900">{summary.name}</h4>
            <p class="text-sm text-slate-500">{summary.line()}</p>
        </div>
    }
}
