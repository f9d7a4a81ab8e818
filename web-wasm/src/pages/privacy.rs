//! Privacy policy

use leptos::prelude::*;

const PRIVACY_EMAIL: &str = "info@ayofemimelehon.info";

/// (heading, paragraphs, bullet points)
const SECTIONS: [(&str, &[&str], &[&str]); 10] = [
    (
        "1. Introduction",
        &["Ayoolumi Melehon (\"I\", \"me\", or \"my\") operates ayofemimelehon.info (the \"Website\"). This Privacy Policy explains how I collect, use, and protect your personal information when you visit my website."],
        &[],
    ),
    (
        "2. Information I Collect",
        &["Information you provide: name and email address, organization and project details, and anything else you choose to send through the contact form.",
          "Automatically collected: browser type and version, operating system, pages visited and time spent, referring website, anonymized IP address."],
        &[],
    ),
    (
        "3. How I Use Your Information",
        &[],
        &[
            "To respond to your inquiries and contact requests",
            "To improve website functionality and user experience",
            "To analyze website traffic and usage patterns",
            "To comply with legal obligations",
        ],
    ),
    (
        "4. Cookies",
        &["This website uses cookies to enhance your browsing experience and analyze site traffic. Cookies are small text files stored on your device.",
          "You can control cookies through your browser settings. However, disabling cookies may affect website functionality."],
        &[],
    ),
    (
        "5. Data Sharing and Disclosure",
        &["I do not sell, trade, or rent your personal information to third parties. I may share information only in the following circumstances:"],
        &[
            "With your explicit consent",
            "To comply with legal requirements",
            "To protect my rights and safety",
            "With service providers (e.g., hosting, analytics) under strict confidentiality agreements",
        ],
    ),
    (
        "6. Data Security",
        &["I implement appropriate technical and organizational measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. However, no internet transmission is completely secure."],
        &[],
    ),
    (
        "7. Your Rights (GDPR/UK GDPR)",
        &["Under UK GDPR, you have the right to:"],
        &[
            "Access: Request a copy of your personal data",
            "Rectification: Correct inaccurate data",
            "Erasure: Request deletion of your data",
            "Restriction: Limit how I use your data",
            "Portability: Receive your data in a portable format",
            "Object: Object to processing of your data",
            "Withdraw Consent: Withdraw consent at any time",
        ],
    ),
    (
        "8. Data Retention",
        &["I retain personal information only as long as necessary to fulfill the purposes outlined in this policy, or as required by law."],
        &[],
    ),
    (
        "9. Third-Party Links",
        &["This website may contain links to external sites. I am not responsible for the privacy practices of these third-party websites."],
        &[],
    ),
    (
        "10. Changes to This Policy",
        &["I may update this Privacy Policy periodically. Changes will be posted on this page with an updated \"Last Updated\" date."],
        &[],
    ),
];

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <article class="legal">
            <h1>"Privacy Policy"</h1>
            <p class="text-muted">"Last Updated: January 2025"</p>

            {SECTIONS
                .iter()
                .map(|(heading, paragraphs, bullets)| view! {
                    <section>
                        <h2>{*heading}</h2>
                        {paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        {(!bullets.is_empty()).then(|| view! {
                            <ul class="bullet-list">
                                {bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                            </ul>
                        })}
                    </section>
                })
                .collect_view()}

            <section>
                <h2>"11. Contact Information"</h2>
                <p>"For questions about this Privacy Policy or to exercise your rights, contact:"</p>
                <p>
                    <strong>"Email: "</strong>
                    <a href=format!("mailto:{}", PRIVACY_EMAIL)>{PRIVACY_EMAIL}</a>
                </p>
                <p><strong>"Location: "</strong>"Grangemouth, Scotland, UK"</p>
            </section>

            <a href="/" class="btn btn-secondary">"← Back to Home"</a>
        </article>
    }
}
