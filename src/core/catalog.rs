//! Static page content for the Smart Saver AI landing page.
//!
//! Every price, plan and call-to-action shown on the page lives here as a
//! compile-time constant. The UI layer only iterates over these tables, so
//! changing a price never means touching markup.

use derive_more::Display;

use crate::ui::icons;

/// Product name shown in the navigation bar, footer and page title.
pub const BRAND: &str = "Smart Saver AI";

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2026;

/// Number shown in the hero's "users saving money right now" indicator.
pub const LIVE_USERS: u32 = 1204;

/// A whole-rupee price.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord)]
#[display("₹{amount}")]
pub struct Price {
    pub amount: u32,
}

impl Price {
    pub const fn rupees(amount: u32) -> Self {
        Self { amount }
    }

    /// Total charged for `periods` billing periods at this price.
    pub const fn times(self, periods: u32) -> Self {
        Self {
            amount: self.amount * periods,
        }
    }

    /// Whole percent saved against `standard`, rounded down.
    ///
    /// Returns `None` when `standard` is zero or not above this price.
    pub fn savings_percent(self, standard: Price) -> Option<u32> {
        if standard.amount == 0 || standard.amount <= self.amount {
            return None;
        }
        Some((standard.amount - self.amount) * 100 / standard.amount)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
}

impl BillingPeriod {
    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/mo",
        }
    }
}

/// Colour family used for a tier's bullet icons and hover border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Slate,
    Green,
    Purple,
}

impl Accent {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Accent::Slate => "text-slate-400",
            Accent::Green => "text-green-600",
            Accent::Purple => "text-purple-500",
        }
    }

    pub fn hover_border_class(&self) -> &'static str {
        match self {
            Accent::Slate => "hover:border-slate-300",
            Accent::Green => "hover:border-green-600",
            Accent::Purple => "hover:border-purple-200",
        }
    }
}

/// One bullet point of a pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    /// Icon name from [`crate::ui::icons`]
    pub icon: &'static str,
    /// Rendered in bold
    pub emphasized: bool,
}

impl Feature {
    const fn check(label: &'static str) -> Self {
        Self {
            label,
            icon: icons::CHECK,
            emphasized: false,
        }
    }

    const fn strong(label: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            icon,
            emphasized: true,
        }
    }
}

/// A primary pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
    pub period: BillingPeriod,
    /// Short description under the price. Ignored when `billed_months` is set.
    pub blurb: &'static str,
    /// Undiscounted price shown struck through next to the real one.
    pub standard_price: Option<Price>,
    pub features: &'static [Feature],
    pub cta_label: &'static str,
    pub accent: Accent,
    pub highlighted: bool,
    pub footnote: Option<&'static str>,
    /// Number of periods billed up front, e.g. 12 for the yearly pass.
    pub billed_months: Option<u32>,
    /// Icon shown next to the plan name.
    pub icon: Option<&'static str>,
}

impl Plan {
    /// Description line under the price.
    pub fn description(&self) -> String {
        match self.billed_months {
            Some(months) => format!("Billed {} yearly.", self.price.times(months)),
            None => self.blurb.to_string(),
        }
    }

    /// Button label, with the web discount appended when the plan has one.
    pub fn cta_text(&self) -> String {
        match self
            .standard_price
            .and_then(|standard| self.price.savings_percent(standard))
        {
            Some(percent) => format!("{} (Save {}%)", self.cta_label, percent),
            None => self.cta_label.to_string(),
        }
    }
}

/// A secondary tier shown as a one-line summary under the main grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSummary {
    pub name: &'static str,
    pub price: Price,
    pub period: BillingPeriod,
    pub qualifier: &'static str,
}

impl PlanSummary {
    pub fn line(&self) -> String {
        format!("{}{} {}", self.price, self.period.suffix(), self.qualifier)
    }
}

/// Messaging channel a hero call-to-action opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Telegram,
    WhatsApp,
}

impl Channel {
    pub fn slug(&self) -> &'static str {
        match self {
            Channel::Telegram => "telegram",
            Channel::WhatsApp => "whatsapp",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Channel::Telegram => icons::SEND,
            Channel::WhatsApp => icons::MESSAGE_CIRCLE,
        }
    }
}

/// A hero call-to-action.
///
/// `href` is taken from the build environment so the server render and the
/// hydrated client agree. Without it the affordance stays an inert button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub channel: Channel,
    pub href: Option<&'static str>,
}

pub static HERO_ACTIONS: [CallToAction; 2] = [
    CallToAction {
        label: "Join Telegram Bot",
        channel: Channel::Telegram,
        href: option_env!("SMART_SAVER_TELEGRAM_URL"),
    },
    CallToAction {
        label: "Chat on WhatsApp",
        channel: Channel::WhatsApp,
        href: option_env!("SMART_SAVER_WHATSAPP_URL"),
    },
];

pub static PRIMARY_PLANS: [Plan; 3] = [
    Plan {
        id: "basic",
        name: "Telegram Bot",
        price: Price::rupees(69),
        period: BillingPeriod::Monthly,
        blurb: "For casual savers.",
        standard_price: None,
        features: &[
            Feature::check("Telegram Bot Access"),
            Feature::check("10 Searches / Day"),
        ],
        cta_label: "Subscribe Basic",
        accent: Accent::Slate,
        highlighted: false,
        footnote: None,
        billed_months: None,
        icon: None,
    },
    Plan {
        id: "pro",
        name: "Smart Saver PRO",
        price: Price::rupees(59),
        period: BillingPeriod::Monthly,
        blurb: "",
        standard_price: Some(Price::rupees(89)),
        features: &[
            Feature::strong("Unlimited App Access", icons::ZAP),
            Feature::check("WhatsApp + Telegram Bots"),
            Feature::check("Auto-Apply Coupon Finder"),
        ],
        cta_label: "Subscribe Now",
        accent: Accent::Green,
        highlighted: true,
        footnote: Some("*Purchase here, then login to App."),
        billed_months: None,
        icon: Some(icons::SMARTPHONE),
    },
    Plan {
        id: "yearly",
        name: "Yearly Pass",
        price: Price::rupees(49),
        period: BillingPeriod::Monthly,
        blurb: "",
        standard_price: None,
        features: &[
            Feature::strong("Lowest Possible Rate", icons::CHECK),
            Feature::check("Lock in price for 1 year"),
            Feature::check("Priority Support"),
        ],
        cta_label: "Get Yearly Access",
        accent: Accent::Purple,
        highlighted: false,
        footnote: None,
        billed_months: Some(12),
        icon: None,
    },
];

pub static SECONDARY_PLANS: [PlanSummary; 3] = [
    PlanSummary {
        name: "Student Plan",
        price: Price::rupees(39),
        period: BillingPeriod::Monthly,
        qualifier: "with ID card.",
    },
    PlanSummary {
        name: "Couple Plan",
        price: Price::rupees(119),
        period: BillingPeriod::Monthly,
        qualifier: "(2 accounts).",
    },
    PlanSummary {
        name: "Family Plan",
        price: Price::rupees(199),
        period: BillingPeriod::Monthly,
        qualifier: "(4 accounts).",
    },
];

/// The emphasised primary plan.
pub fn highlighted_plan() -> &'static Plan {
    PRIMARY_PLANS
        .iter()
        .find(|plan| plan.highlighted)
        .unwrap_or(&PRIMARY_PLANS[1])
}

/// Formats a count with comma thousands separators (`1204` -> `1,204`).
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
