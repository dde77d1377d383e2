// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt rendering for the draft generator.

use outreach_config::model::CampaignConfig;
use outreach_core::OrgContext;

/// Substituted when a record carries no description. The prompt still asks
/// the model to personalize, so the placeholder has to read like prose.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Render the outreach prompt for one organisation.
///
/// The template instructs the model to emit `<email><subject>..</subject>
/// <body>..</body></email>`; the parser tolerates non-compliance, so the
/// wording here is persuasion, not a contract.
pub fn render_prompt(campaign: &CampaignConfig, org: &OrgContext) -> String {
    let name = &campaign.sender_name;
    let role = &campaign.sender_role;
    let value = &campaign.value_proposition;
    let company = &org.name;
    let description = org
        .description
        .as_deref()
        .unwrap_or(NO_DESCRIPTION_PLACEHOLDER);

    format!(
        r#"
You are an expert career strategist and professional copywriter specializing in high-conversion cold outreach.

GOAL: Write a highly personalized, authentic networking email to {company} on behalf of {name}, a {role}.

CONTEXT:
- Company Name: {company}
- Company Description: "{description}"
- Candidate: {name} ({role}).

INSTRUCTIONS:
1. ANALYZE: First, mentally analyze the Company Description to understand their industry, mission, or tech stack.
2. CONNECT: Explain why {name} would be a good fit for this company based on their industry and mission.
3. DRAFTING RULES:
   - Voice: Professional yet conversational, humble but confident. Avoid "marketing speak", buzzwords, or overly formal language.
   - Subject: Make it short, punchy, and relevant to the company and highlights that a {role} is reaching out.
   - Opening: Start with a specific observation about the company (based on the description) to show he's done his research. Do NOT start with "I hope this finds you well".
   - The "Hook": Position {name} not just as a "{role}" but as {value}.
   - Call to Action: Ask for a brief chat to learn about their team challenges or for perspective, not a job interview directly. Keep it low pressure.
   - Length: Keep it concise (under 200 words).
   - Address the email to the Hiring Team.
   - Sign off as "Best regards, {name}"
   - Do not include any other text or formatting.

Format the output strictly as XML so it can be parsed programmatically. Do not include any conversational filler before or after the XML.
<email>
<subject>Short, punchy, relevant subject line</subject>
<body>
Dear Hiring Team,

[Body content...]

Best regards,
{name}
</body>
</email>

"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign() -> CampaignConfig {
        CampaignConfig {
            sender_name: "Alex Doe".into(),
            sender_role: "Data Engineer".into(),
            value_proposition: "someone who turns pipelines into products".into(),
            ..CampaignConfig::default()
        }
    }

    #[test]
    fn prompt_substitutes_identity_and_company() {
        let org = OrgContext {
            name: "Acme Corp".into(),
            description: Some("Widgets at scale".into()),
        };
        let prompt = render_prompt(&campaign(), &org);
        assert!(prompt.contains("Acme Corp"));
        assert!(prompt.contains("Alex Doe"));
        assert!(prompt.contains("Data Engineer"));
        assert!(prompt.contains("\"Widgets at scale\""));
        assert!(prompt.contains("someone who turns pipelines into products"));
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let org = OrgContext {
            name: "Globex".into(),
            description: None,
        };
        let prompt = render_prompt(&campaign(), &org);
        assert!(prompt.contains(NO_DESCRIPTION_PLACEHOLDER));
    }
}
