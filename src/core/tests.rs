#[cfg(test)]
mod tests {
    use crate::core::{
        Accent, BillingPeriod, Channel, HERO_ACTIONS, LIVE_USERS, PRIMARY_PLANS, Price,
        SECONDARY_PLANS, format_count, highlighted_plan,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::rupees(69).to_string(), "₹69");
        assert_eq!(Price::rupees(199).to_string(), "₹199");
        assert_eq!(Price::rupees(0).to_string(), "₹0");
    }

    #[test]
    fn test_price_times() {
        assert_eq!(Price::rupees(49).times(12), Price::rupees(588));
        assert_eq!(Price::rupees(49).times(1), Price::rupees(49));
        assert_eq!(Price::rupees(49).times(0), Price::rupees(0));
    }

    #[test]
    fn test_savings_percent_rounds_down() {
        assert_eq!(Price::rupees(59).savings_percent(Price::rupees(89)), Some(33));
        assert_eq!(Price::rupees(50).savings_percent(Price::rupees(100)), Some(50));
        assert_eq!(Price::rupees(0).savings_percent(Price::rupees(10)), Some(100));
    }

    #[test]
    fn test_savings_percent_without_discount() {
        assert_eq!(Price::rupees(89).savings_percent(Price::rupees(89)), None);
        assert_eq!(Price::rupees(99).savings_percent(Price::rupees(89)), None);
        assert_eq!(Price::rupees(0).savings_percent(Price::rupees(0)), None);
    }

    #[test]
    fn test_primary_plan_prices_in_order() {
        let prices: Vec<String> = PRIMARY_PLANS.iter().map(|p| p.price.to_string()).collect();
        assert_eq!(prices, vec!["₹69", "₹59", "₹49"]);
    }

    #[test]
    fn test_secondary_plan_prices_in_order() {
        let prices: Vec<String> = SECONDARY_PLANS
            .iter()
            .map(|p| p.price.to_string())
            .collect();
        assert_eq!(prices, vec!["₹39", "₹119", "₹199"]);
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let count = PRIMARY_PLANS.iter().filter(|p| p.highlighted).count();
        assert_eq!(count, 1);

        let pro = highlighted_plan();
        assert_eq!(pro.id, "pro");
        assert_eq!(pro.name, "Smart Saver PRO");
        assert_eq!(pro.accent, Accent::Green);
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let mut ids: Vec<&str> = PRIMARY_PLANS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRIMARY_PLANS.len());
    }

    #[test]
    fn test_plan_descriptions() {
        assert_eq!(PRIMARY_PLANS[0].description(), "For casual savers.");
        assert_eq!(PRIMARY_PLANS[2].description(), "Billed ₹588 yearly.");
    }

    #[test]
    fn test_plan_cta_text_includes_discount() {
        assert_eq!(PRIMARY_PLANS[0].cta_text(), "Subscribe Basic");
        assert_eq!(PRIMARY_PLANS[1].cta_text(), "Subscribe Now (Save 33%)");
        assert_eq!(PRIMARY_PLANS[2].cta_text(), "Get Yearly Access");
    }

    #[test]
    fn test_every_plan_is_monthly_and_has_features() {
        for plan in PRIMARY_PLANS.iter() {
            assert_eq!(plan.period, BillingPeriod::Monthly);
            assert!(!plan.features.is_empty(), "{} has no features", plan.name);
        }
    }

    #[test]
    fn test_summary_lines() {
        let lines: Vec<String> = SECONDARY_PLANS.iter().map(|p| p.line()).collect();
        assert_eq!(
            lines,
            vec![
                "₹39/mo with ID card.",
                "₹119/mo (2 accounts).",
                "₹199/mo (4 accounts).",
            ]
        );
    }

    #[test]
    fn test_hero_actions() {
        assert_eq!(HERO_ACTIONS.len(), 2);
        assert_eq!(HERO_ACTIONS[0].label, "Join Telegram Bot");
        assert_eq!(HERO_ACTIONS[0].channel, Channel::Telegram);
        assert_eq!(HERO_ACTIONS[1].label, "Chat on WhatsApp");
        assert_eq!(HERO_ACTIONS[1].channel, Channel::WhatsApp);
        assert_eq!(Channel::Telegram.icon(), "send");
        assert_eq!(Channel::WhatsApp.icon(), "message-circle");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(LIVE_USERS), "1,204");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
