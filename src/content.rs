//! Static marketing copy rendered directly into the pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "1",
        title: "Intuitive Interface",
        description: "Clean and minimal design that puts your content first. Navigate with ease and confidence.",
        icon: "🎨",
    },
    Feature {
        id: "2",
        title: "Real-time Collaboration",
        description: "Work together seamlessly with your team. See changes as they happen, from anywhere.",
        icon: "👥",
    },
    Feature {
        id: "3",
        title: "Advanced Security",
        description: "Enterprise-grade protection for your sensitive data. Peace of mind built right in.",
        icon: "🔒",
    },
    Feature {
        id: "4",
        title: "Smart Automation",
        description: "Let AI handle the repetitive tasks so you can focus on what matters most.",
        icon: "⚡",
    },
    Feature {
        id: "5",
        title: "Detailed Analytics",
        description: "Gain insights into performance with comprehensive dashboards and reports.",
        icon: "📊",
    },
    Feature {
        id: "6",
        title: "Cross-platform Support",
        description: "Access your work from any device. Desktop, tablet, or mobile - we've got you covered.",
        icon: "🔄",
    },
];

/// Billing cadence selected on the pricing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly (Save 20%)",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }

    pub fn plans(&self) -> &'static [PricingPlan] {
        match self {
            BillingPeriod::Monthly => MONTHLY_PLANS,
            BillingPeriod::Yearly => YEARLY_PLANS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    /// Effective monthly price on yearly billing
    pub per_month: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

const STARTER_FEATURES: &[&str] = &[
    "Up to 5 projects",
    "Basic analytics",
    "24/7 email support",
    "1GB storage",
    "Single user",
];

const PROFESSIONAL_FEATURES: &[&str] = &[
    "Unlimited projects",
    "Advanced analytics",
    "Priority support",
    "10GB storage",
    "Up to 5 team members",
    "Custom integrations",
    "API access",
];

const ENTERPRISE_FEATURES: &[&str] = &[
    "Everything in Professional",
    "Unlimited team members",
    "100GB storage",
    "Dedicated account manager",
    "Custom training",
    "Enhanced security",
    "SLA guarantees",
];

pub const MONTHLY_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$19",
        per_month: None,
        description: "Perfect for individuals and small projects",
        features: STARTER_FEATURES,
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$49",
        per_month: None,
        description: "Ideal for growing teams and businesses",
        features: PROFESSIONAL_FEATURES,
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "$99",
        per_month: None,
        description: "Advanced features for large organizations",
        features: ENTERPRISE_FEATURES,
        popular: false,
    },
];

pub const YEARLY_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$190",
        per_month: Some("$15.83/mo"),
        description: "Perfect for individuals and small projects",
        features: STARTER_FEATURES,
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$490",
        per_month: Some("$40.83/mo"),
        description: "Ideal for growing teams and businesses",
        features: PROFESSIONAL_FEATURES,
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "$990",
        per_month: Some("$82.50/mo"),
        description: "Advanced features for large organizations",
        features: ENTERPRISE_FEATURES,
        popular: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PRICING_FAQ: &[Faq] = &[
    Faq {
        question: "Can I upgrade or downgrade my plan anytime?",
        answer: "Yes, you can upgrade or downgrade your plan at any time. Changes will be reflected in your next billing cycle.",
    },
    Faq {
        question: "Do you offer a discount for non-profits?",
        answer: "We offer special pricing for non-profit organizations, educational institutions, and open-source projects. Please contact our sales team for more information.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and bank transfers for annual plans. We can also accommodate other payment methods for enterprise customers.",
    },
    Faq {
        question: "Is there a setup fee?",
        answer: "No, there are no setup fees or hidden charges. The price you see is the price you pay.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const VALUES: &[Value] = &[
    Value {
        title: "Innovation",
        description: "We embrace creative thinking and strive to push boundaries in everything we build.",
        icon: "💡",
    },
    Value {
        title: "Customer Focus",
        description: "Our customers' success is our success. We listen, learn, and deliver solutions that matter.",
        icon: "👥",
    },
    Value {
        title: "Quality",
        description: "We have uncompromising standards and take pride in the excellence of our work.",
        icon: "✨",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Milestone {
    /// Timeline entries slide in from alternating sides
    pub fn slides_from_left(index: usize) -> bool {
        index % 2 == 0
    }
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        year: "2019",
        title: "Founding",
        description: "Innovate was founded with a mission to transform how people work with technology.",
    },
    Milestone {
        year: "2020",
        title: "Initial Product Launch",
        description: "Released our first product version, attracting early adopters and positive feedback.",
    },
    Milestone {
        year: "2021",
        title: "Series A Funding",
        description: "Secured $10M in funding to accelerate product development and market expansion.",
    },
    Milestone {
        year: "2022",
        title: "Team Growth",
        description: "Expanded our team to 50+ members across engineering, product, and customer success.",
    },
    Milestone {
        year: "2023",
        title: "Enterprise Platform",
        description: "Launched our enterprise platform with advanced features for large organizations.",
    },
    Milestone {
        year: "2024",
        title: "Global Expansion",
        description: "Opened offices in Europe and Asia to better serve our international customers.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        role: "CEO & Founder",
        bio: "Former tech executive with 15+ years experience in SaaS and enterprise software.",
        image: "https://placehold.co/400x400/667eea/ffffff?text=SJ",
    },
    TeamMember {
        name: "Michael Chen",
        role: "CTO",
        bio: "Engineering leader who previously scaled technology at multiple successful startups.",
        image: "https://placehold.co/400x400/4f46e5/ffffff?text=MC",
    },
    TeamMember {
        name: "Priya Patel",
        role: "Head of Product",
        bio: "Product expert specializing in user experience and customer-driven development.",
        image: "https://placehold.co/400x400/7c3aed/ffffff?text=PP",
    },
    TeamMember {
        name: "James Wilson",
        role: "VP of Engineering",
        bio: "Leads our engineering team with expertise in scalable architecture and performance.",
        image: "https://placehold.co/400x400/2563eb/ffffff?text=JW",
    },
    TeamMember {
        name: "Olivia Martinez",
        role: "Chief Marketing Officer",
        bio: "Creative marketer with a track record of building beloved brands in technology.",
        image: "https://placehold.co/400x400/0ea5e9/ffffff?text=OM",
    },
    TeamMember {
        name: "David Kim",
        role: "Head of Customer Success",
        bio: "Passionate about ensuring customers achieve their goals with our platform.",
        image: "https://placehold.co/400x400/10b981/ffffff?text=DK",
    },
];

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "/features"),
    ("Pricing", "/pricing"),
    ("About", "/about"),
    ("Showcase", "/showcase"),
];

pub const FOOTER_PRODUCT_LINKS: &[&str] = &["Features", "Integrations", "Pricing", "Changelog", "Documentation"];
pub const FOOTER_COMPANY_LINKS: &[&str] = &["About", "Blog", "Careers", "Contact", "Media Kit"];
pub const FOOTER_LEGAL_LINKS: &[&str] = &["Terms", "Privacy", "Cookies", "Contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_periods_list_the_same_tiers() {
        let monthly: Vec<_> = BillingPeriod::Monthly.plans().iter().map(|p| p.name).collect();
        let yearly: Vec<_> = BillingPeriod::Yearly.plans().iter().map(|p| p.name).collect();
        assert_eq!(monthly, yearly);
    }

    #[test]
    fn exactly_one_popular_plan_per_period() {
        for period in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
            assert_eq!(period.plans().iter().filter(|p| p.popular).count(), 1);
        }
    }

    #[test]
    fn yearly_plans_quote_a_monthly_equivalent() {
        assert!(YEARLY_PLANS.iter().all(|p| p.per_month.is_some()));
        assert!(MONTHLY_PLANS.iter().all(|p| p.per_month.is_none()));
    }

    #[test]
    fn feature_ids_are_unique() {
        let mut ids: Vec<_> = FEATURES.iter().map(|f| f.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn timeline_alternates() {
        assert!(Milestone::slides_from_left(0));
        assert!(!Milestone::slides_from_left(1));
    }
}
