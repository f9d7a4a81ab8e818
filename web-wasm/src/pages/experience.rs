//! Experience timeline

use leptos::prelude::*;

struct Role {
    period: &'static str,
    title: &'static str,
    organization: &'static str,
    location: Option<&'static str>,
    accent: &'static str,
    summary: &'static str,
    achievements: [&'static str; 5],
    tools: &'static str,
}

const TIMELINE: [Role; 6] = [
    Role {
        period: "2024-2025",
        title: "MSc Artificial Intelligence Student",
        organization: "University of Stirling",
        location: None,
        accent: "teal",
        summary: "Advanced study in AI, machine learning, and health data science while building healthcare analytics portfolio",
        achievements: [
            "Dissertation: Behavioral modeling using UK Census data",
            "Built 9 healthcare analytics and AI projects",
            "Specialized in healthcare predictive analytics and medical AI",
            "Achieved 85%+ accuracy in NHS A&E wait time prediction",
            "Processed 620K+ health records with GDPR compliance",
        ],
        tools: "Python, PyTorch, TensorFlow, scikit-learn, Pandas, Streamlit, SQL",
    },
    Role {
        period: "Feb 2025 - Present",
        title: "Care Assistant",
        organization: "1st Class Care Solutions Limited",
        location: Some("West Lothian & Clackmannanshire"),
        accent: "blue",
        summary: "Domiciliary care delivery as trusted partner with local councils, providing person-centered care and 24-hour intensive support",
        achievements: [
            "Person-centered care planning and delivery",
            "Medication administration and personal care",
            "Mobility support and enablement services",
            "24-hour intensive support coordination",
            "Focus on independence and dignity in care",
        ],
        tools: "Care documentation systems, medication management, NHS pathway coordination",
    },
    Role {
        period: "Current",
        title: "Care Worker",
        organization: "Camphill Blair Drummond",
        location: Some("Stirling"),
        accent: "purple",
        summary: "Residential care for 48 adults with learning disabilities in community-based living model",
        achievements: [
            "Supporting 48 residents with complex care needs",
            "Community-based person-centered care delivery",
            "Personal development and meaningful activities coordination",
            "Experience with challenging behaviors and specialized support",
            "Contributing to holistic care planning",
        ],
        tools: "Residential care systems, activity planning, behavioral support protocols",
    },
    Role {
        period: "Feb 2023 - Feb 2025",
        title: "Care Assistant",
        organization: "Avenue Care Services Limited",
        location: Some("Eastern Scotland (Fife/Falkirk region)"),
        accent: "green",
        summary: "Domiciliary care delivery supporting 300+ patients across multiple Scottish regions through NHS unscheduled care pathways",
        achievements: [
            "Supported 300+ patients with diverse care needs",
            "Palliative and end-of-life care delivery",
            "Personal care, medication administration, mobility assistance",
            "NHS pathway coordination: NHS 24, ambulance services, A&E, hospital admissions",
            "Experience with vulnerable populations: elderly, disabled, palliative patients",
        ],
        tools: "Care management systems, NHS pathway documentation, medication tracking",
    },
    Role {
        period: "2023-Present",
        title: "Data Annotation Specialist",
        organization: "Appen & Telus International",
        location: None,
        accent: "orange",
        summary: "Contributing to AI model training through precise data annotation, labeling, and quality assurance",
        achievements: [
            "Data annotation and labeling for machine learning models",
            "AI training data preparation and quality control",
            "Experience with diverse AI project types and datasets",
            "Understanding of data requirements for model training",
            "Quality assurance processes for AI systems",
        ],
        tools: "Data annotation platforms, AI training workflows, quality control systems",
    },
    Role {
        period: "2024",
        title: "CompTIA Data+ Certification",
        organization: "Professional Development",
        location: None,
        accent: "red",
        summary: "Industry-recognized certification in data analytics, business intelligence, and data governance",
        achievements: [
            "Data analytics fundamentals and statistical analysis",
            "Business intelligence and data storytelling",
            "Data governance and quality management",
            "Data visualization and reporting best practices",
            "Applied learning to healthcare analytics projects",
        ],
        tools: "Data analysis frameworks, BI tools, governance standards",
    },
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"Experience"</h1>
            <p>"Analytics, AI and frontline healthcare"</p>
        </section>

        <ol class="timeline">
            {TIMELINE
                .iter()
                .map(|role| view! {
                    <li class=format!("timeline-entry accent-{}", role.accent)>
                        <span class="period">{role.period}</span>
                        <h2>{role.title}</h2>
                        <p class="organization">
                            {role.organization}
                            {role.location.map(|loc| format!(" · {}", loc))}
                        </p>
                        <p>{role.summary}</p>
                        <ul class="bullet-list">
                            {role.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                        </ul>
                        <p class="text-muted">{format!("Tools: {}", role.tools)}</p>
                    </li>
                })
                .collect_view()}
        </ol>
    }
}
