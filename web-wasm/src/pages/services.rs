//! Services page

use leptos::prelude::*;

struct Service {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    offerings: [&'static str; 6],
    ideal_for: &'static str,
    deliverables: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Product Analytics",
        icon: "📊",
        description: "Help you understand user behavior and optimize product performance",
        offerings: [
            "User activation & retention analysis",
            "A/B testing design & interpretation",
            "Funnel optimization",
            "Feature adoption tracking",
            "Churn prediction & prevention",
            "Product metric dashboards",
        ],
        ideal_for: "SaaS companies, digital products, mobile apps",
        deliverables: "Interactive dashboards, experiment frameworks, insight reports, metric definitions",
    },
    Service {
        title: "Workforce & People Analytics",
        icon: "👥",
        description: "Transform HR data into strategic workforce insights",
        offerings: [
            "Skills gap analysis & capability mapping",
            "Survey design & analysis (engagement, pulse checks)",
            "Workforce planning metrics",
            "Training ROI assessment",
            "Organizational network analysis",
            "Diversity & inclusion metrics",
        ],
        ideal_for: "HR teams, L&D departments, organizational development",
        deliverables: "Capability heatmaps, survey reports, workforce dashboards, actionable recommendations",
    },
    Service {
        title: "Machine Learning & AI Solutions",
        icon: "🤖",
        description: "Build intelligent systems that learn from your data",
        offerings: [
            "Predictive modeling (classification, regression)",
            "Anomaly detection systems",
            "Text analytics & topic modeling",
            "Risk scoring models",
            "Recommendation systems",
            "Proof-of-concept ML projects",
        ],
        ideal_for: "Organizations ready to explore AI applications",
        deliverables: "Trained models, prediction APIs, explainability reports, implementation guidance",
    },
    Service {
        title: "Business Intelligence & Dashboards",
        icon: "📈",
        description: "Turn data chaos into clear, actionable insights",
        offerings: [
            "Executive dashboard design",
            "Operational metrics tracking",
            "Self-service BI implementation",
            "Power BI solutions",
            "Automated reporting",
            "Data storytelling",
        ],
        ideal_for: "Leadership teams, operations managers, decision-makers",
        deliverables: "Interactive dashboards, scheduled reports, stakeholder presentations",
    },
    Service {
        title: "Data Engineering & Automation",
        icon: "⚙️",
        description: "Build reliable data pipelines and automation",
        offerings: [
            "Data pipeline design & implementation",
            "ETL automation",
            "Data quality frameworks",
            "Warehouse design (star schema)",
            "Report automation",
            "System integrations",
        ],
        ideal_for: "Growing organizations with increasing data complexity",
        deliverables: "Documented pipelines, quality checks, automated workflows, technical documentation",
    },
    Service {
        title: "Research & Policy Analytics",
        icon: "🔬",
        description: "Evidence-based analysis for policy and research",
        offerings: [
            "Microdata analysis",
            "Statistical modeling",
            "Policy impact assessment",
            "Literature synthesis",
            "Research visualization",
            "Academic collaboration",
        ],
        ideal_for: "Research institutions, policy teams, think tanks, PhD students",
        deliverables: "Statistical reports, research visualizations, methodology documentation",
    },
];

/// (name, summary, best for)
const ENGAGEMENT_MODELS: [(&str, &str, &str); 3] = [
    ("Project-Based", "Fixed scope, timeline, and fee", "Specific deliverables, defined problems"),
    ("Ongoing Support", "Monthly retainer for continuous analytics", "Regular reporting, dashboard maintenance"),
    (
        "Training & Knowledge Transfer",
        "Workshops, documentation, capability building",
        "Building internal analytics capacity",
    ),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Services"</h1>
            <p>"End-to-end analytics, from raw data to decisions"</p>
        </section>

        <div class="service-grid">
            {SERVICES
                .iter()
                .map(|service| view! {
                    <article class="service-card">
                        <div class="service-icon">{service.icon}</div>
                        <h2>{service.title}</h2>
                        <p>{service.description}</p>
                        <ul class="bullet-list">
                            {service.offerings.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}
                        </ul>
                        <h4>"Ideal for"</h4>
                        <p>{service.ideal_for}</p>
                        <h4>"Deliverables"</h4>
                        <p>{service.deliverables}</p>
                    </article>
                })
                .collect_view()}
        </div>

        <section class="engagement">
            <h2>"Engagement Models"</h2>
            <div class="engagement-grid">
                {ENGAGEMENT_MODELS
                    .iter()
                    .map(|(name, summary, best_for)| view! {
                        <div class="engagement-card">
                            <h3>{*name}</h3>
                            <p>{*summary}</p>
                            <p class="text-muted">{format!("Best for: {}", best_for)}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="cta">
            <p>"Schedule a free consultation to discuss your analytics needs"</p>
            <a href="/contact" class="btn btn-primary btn-large">"Get in Touch"</a>
        </section>
    }
}
