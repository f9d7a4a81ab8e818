//! About page

use leptos::prelude::*;

const INTRO: [&str; 3] = [
    "MSc in Artificial Intelligence graduate from the University of Stirling with CompTIA Data+ certification, specializing in end-to-end analytics solutions that bridge technical implementation and business value.",
    "Currently based in Scotland, I transform complex data into actionable insights using modern analytics techniques, machine learning models, and intelligent automation. My work spans product analytics, workforce intelligence, and applied ML research.",
    "With 8+ years of combined experience across analytics, business intelligence, and operations, I bring a practical, outcome-focused approach to every project: shipping MVPs, iterating with feedback, and maintaining clear communication with stakeholders.",
];

/// (icon, heading, text)
const APPROACH: [(&str, &str, &str); 4] = [
    ("🎯", "Outcome-Focused", "Ship MVPs, iterate with feedback, and focus on measurable impact"),
    ("🔒", "Privacy-Aware", "Synthetic data demos, documented controls, and ethical data practices"),
    ("📊", "Clear Communication", "Translate technical concepts to plain language for all stakeholders"),
    ("📚", "Continuous Learning", "Self-directed learner with quick tool adoption and growth mindset"),
];

const EXPERTISE: [(&str, [&str; 6]); 3] = [
    (
        "Analytics & Business Intelligence",
        [
            "SQL Query Design & Optimization",
            "Python Analytics (pandas, pipelines)",
            "Power BI Dashboard Development",
            "Cohort & Retention Analysis",
            "A/B Test Interpretation",
            "KPI Design & Tracking",
        ],
    ),
    (
        "Machine Learning & AI",
        [
            "Classification Models (RF, GBM)",
            "Anomaly Detection (Isolation Forest)",
            "NLP & Topic Modeling",
            "Time Series Forecasting",
            "Model Evaluation & Validation",
            "Behavioral Simulation",
        ],
    ),
    (
        "Data Engineering",
        [
            "Data Pipeline Design",
            "ETL Automation",
            "Data Quality Validation",
            "Star Schema Warehousing",
            "Multi-format Import",
            "Audit Trail Documentation",
        ],
    ),
];

const EDUCATION: [(&str, &str); 4] = [
    ("MSc Artificial Intelligence", "University of Stirling"),
    ("CompTIA Data+", "Professional Certification"),
    ("PGDip Computer Science", "Postgraduate Diploma"),
    ("HND Computer Engineering", "Higher National Diploma"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1>"About Me"</h1>
            <p>"Data Analyst • ML Engineer • AI Researcher"</p>
        </section>

        <section class="panel">
            <h2>"Who I Am"</h2>
            {INTRO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
        </section>

        <section class="panel">
            <h2>"My Approach"</h2>
            <div class="approach-grid">
                {APPROACH
                    .iter()
                    .map(|(icon, heading, text)| view! {
                        <div class="approach-item">
                            <span class="approach-icon">{*icon}</span>
                            <h3>{*heading}</h3>
                            <p>{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="panel">
            <h2>"Core Expertise"</h2>
            <div class="expertise-grid">
                {EXPERTISE
                    .iter()
                    .map(|(area, skills)| view! {
                        <div>
                            <h3>{*area}</h3>
                            <ul class="bullet-list">
                                {skills.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="panel">
            <h2>"Education & Certifications"</h2>
            <ul class="education-list">
                {EDUCATION
                    .iter()
                    .map(|(award, institution)| view! {
                        <li>
                            <h3>{*award}</h3>
                            <p class="text-muted">{*institution}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
